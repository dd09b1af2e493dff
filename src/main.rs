//! elmlex 命令行入口
//!
//! 读取文件或标准输入，逐个打印 token 的行号、列号、类型和文本

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use log::{debug, warn};

use elmlex::config::{DEFAULT_QUEUE_CAPACITY, LANG_NAME, SOURCE_EXTENSION};
use elmlex::i18n::{format_message, messages, Locale};
use elmlex::{Lexer, LexerConfig};

#[derive(Parser, Debug)]
#[command(name = "elmlex", version, about = "Display a list of tokens with their properties")]
struct Cli {
    /// Source file to scan; reads standard input when omitted
    file: Option<PathBuf>,

    /// Language of diagnostic messages (en, zh)
    #[arg(long = "lang", default_value = "en")]
    lang: String,

    /// Capacity of the token queue between scanner and printer
    #[arg(long, default_value_t = DEFAULT_QUEUE_CAPACITY)]
    capacity: usize,
}

/// 打开源文件，失败时直接退出
fn open_source(path: &Path, locale: Locale) -> Box<dyn Read + Send> {
    let display = path.display().to_string();
    if path.extension().map_or(true, |ext| ext != SOURCE_EXTENSION) {
        warn!(
            "{}",
            format_message(messages::MSG_CLI_INVALID_EXTENSION, locale, &[&display, SOURCE_EXTENSION])
        );
    }

    match File::open(path) {
        Ok(file) => Box::new(file),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            eprintln!("{}", format_message(messages::MSG_CLI_FILE_NOT_FOUND, locale, &[&display]));
            process::exit(1);
        }
        Err(err) => {
            let msg = format_message(messages::MSG_CLI_CANNOT_READ_FILE, locale, &[&display, &err.to_string()]);
            eprintln!("{}", msg);
            process::exit(1);
        }
    }
}

/// 打印所有 token，返回进程退出码
///
/// 扫描以错误 token 结束时退出码为 1。
fn print_tokens<R: Read + Send + 'static>(mut lexer: Lexer<R>, locale: Locale) -> i32 {
    if let Err(err) = lexer.start() {
        eprintln!("{}", format_message(messages::MSG_CLI_CANNOT_START, locale, &[&err.to_string()]));
        return 1;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut status = 0;

    for token in lexer {
        let written = writeln!(
            out,
            "LINE: {:4} POS: {:4} TYPE: {:<30} {}",
            token.span.line, token.span.column, token.kind, token.lexeme
        );
        if let Err(err) = written {
            // 下游关闭了管道，无需继续
            debug!("stdout closed: {}", err);
            break;
        }
        if token.is_error() {
            let line = token.span.line.to_string();
            let column = token.span.column.to_string();
            eprintln!("{}", format_message(messages::MSG_CLI_LEXICAL_ERROR, locale, &[&line, &column]));
            status = 1;
        }
    }

    let _ = out.flush();
    status
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let locale = Locale::from_tag(&cli.lang);
    let config = LexerConfig { queue_capacity: cli.capacity, locale };
    debug!("{} lexer, config {:?}", LANG_NAME, config);

    let input: Box<dyn Read + Send> = match &cli.file {
        Some(path) => open_source(path, locale),
        None => Box::new(io::stdin()),
    };

    let status = print_tokens(Lexer::with_config(input, config), locale);
    process::exit(status);
}
