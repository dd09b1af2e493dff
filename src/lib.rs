//! Elm 词法分析器
//!
//! 把 Elm 源码字符流转换为带位置信息的 Token 流。
//!
//! - [`lexer::Scanner`]：同步状态机，按需产生 Token
//! - [`lexer::Lexer`]：在独立线程中运行扫描器，通过有界队列把 Token 交给调用方

pub mod config;
pub mod i18n;
pub mod lexer;

pub use config::LexerConfig;
pub use i18n::Locale;
pub use lexer::{tokenize, Lexer, ScanError, Scanner, Span, Token, TokenKind};
