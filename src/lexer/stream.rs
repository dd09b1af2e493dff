//! Token 流
//!
//! 在独立线程中运行扫描器，通过有界 channel 把 token 按顺序交给调用方。
//! 队列满时扫描线程阻塞等待，不会丢弃 token。

use std::io::{self, Read};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{debug, error, warn};

use super::scanner::Scanner;
use super::token::Token;
use crate::config::{LexerConfig, SCANNER_THREAD_NAME};

/// 流式词法分析器
///
/// 单生产者（扫描线程）、单消费者（调用方）。每个实例只能运行一次。
pub struct Lexer<R> {
    /// 尚未启动的扫描器
    scanner: Option<Scanner<R>>,
    sender: Option<Sender<Token>>,
    receiver: Receiver<Token>,
    worker: Option<JoinHandle<()>>,
    finished: bool,
}

impl<R: Read + Send + 'static> Lexer<R> {
    /// 创建词法分析器，此时不开始扫描
    pub fn new(input: R) -> Self {
        Self::with_config(input, LexerConfig::default())
    }

    pub fn with_config(input: R, config: LexerConfig) -> Self {
        let (sender, receiver) = bounded(config.queue_capacity);
        Self {
            scanner: Some(Scanner::with_locale(input, config.locale)),
            sender: Some(sender),
            receiver,
            worker: None,
            finished: false,
        }
    }

    /// 启动扫描线程，之后输入由扫描线程独占
    ///
    /// 重复调用不会重新扫描。
    pub fn start(&mut self) -> io::Result<()> {
        let (Some(scanner), Some(sender)) = (self.scanner.take(), self.sender.take()) else {
            debug!("lexer already started");
            return Ok(());
        };

        let worker = thread::Builder::new()
            .name(SCANNER_THREAD_NAME.to_string())
            .spawn(move || {
                debug!("scanner thread started");
                for token in scanner {
                    if sender.send(token).is_err() {
                        debug!("token receiver dropped, stopping scan");
                        return;
                    }
                }
                debug!("scanner thread finished");
            })?;
        self.worker = Some(worker);
        Ok(())
    }

    /// 获取下一个 token
    ///
    /// 队列为空且扫描未结束时阻塞。最后一个 token（输入结束或错误）之后返回 None。
    /// 尚未启动时先启动扫描。
    pub fn next_token(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        if self.scanner.is_some() {
            if let Err(err) = self.start() {
                error!("cannot spawn scanner thread: {}", err);
            }
        }

        match self.receiver.recv() {
            Ok(token) => Some(token),
            Err(_) => {
                self.finished = true;
                self.join_worker();
                None
            }
        }
    }

    /// 是否已经返回过结束信号
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn join_worker(&mut self) {
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("scanner thread panicked");
            }
        }
    }
}

impl<R: Read + Send + 'static> Iterator for Lexer<R> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}
