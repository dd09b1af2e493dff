//! 字符读取器
//!
//! 从任意 `io::Read` 中按 UTF-8 解码字符，提供少量前瞻并维护行列号

use std::collections::VecDeque;
use std::io::{self, BufReader, Read};

/// 读取位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// 字符偏移（从0开始）
    pub offset: usize,
    /// 行号（从1开始）
    pub line: usize,
    /// 列号（从1开始）
    pub column: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self { offset: 0, line: 1, column: 1 }
    }
}

/// 带前瞻缓冲的字符读取器
pub struct CharReader<R> {
    input: BufReader<R>,
    /// 已解码但尚未消费的字符
    lookahead: VecDeque<char>,
    position: Position,
}

impl<R: Read> CharReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input: BufReader::new(input),
            lookahead: VecDeque::with_capacity(4),
            position: Position::default(),
        }
    }

    /// 当前位置
    pub fn position(&self) -> Position {
        self.position
    }

    /// 查看当前字符
    pub fn peek(&mut self) -> io::Result<Option<char>> {
        self.peek_nth(0)
    }

    /// 查看第 n 个未消费的字符（n 从0开始）
    pub fn peek_nth(&mut self, n: usize) -> io::Result<Option<char>> {
        while self.lookahead.len() <= n {
            match self.read_char()? {
                Some(c) => self.lookahead.push_back(c),
                None => return Ok(None),
            }
        }
        Ok(self.lookahead.get(n).copied())
    }

    /// 消费一个字符并返回
    pub fn advance(&mut self) -> io::Result<Option<char>> {
        let c = match self.lookahead.pop_front() {
            Some(c) => Some(c),
            None => self.read_char()?,
        };
        if let Some(c) = c {
            self.position.offset += 1;
            if c == '\n' {
                self.position.line += 1;
                self.position.column = 1;
            } else {
                self.position.column += 1;
            }
        }
        Ok(c)
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.input.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// 解码一个 UTF-8 字符
    fn read_char(&mut self) -> io::Result<Option<char>> {
        let Some(first) = self.read_byte()? else {
            return Ok(None);
        };

        let width = utf8_width(first);
        if width == 0 {
            return Err(invalid_utf8(first));
        }

        let mut buf = [first, 0, 0, 0];
        for slot in buf.iter_mut().take(width).skip(1) {
            *slot = self.read_byte()?.ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidData, "incomplete UTF-8 sequence")
            })?;
        }

        std::str::from_utf8(&buf[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .map(Some)
            .ok_or_else(|| invalid_utf8(first))
    }
}

/// 根据首字节判断 UTF-8 编码长度，0 表示非法首字节
fn utf8_width(first: u8) -> usize {
    match first {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

fn invalid_utf8(first: u8) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("invalid UTF-8 sequence starting with byte 0x{:02X}", first),
    )
}
