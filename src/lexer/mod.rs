//! 词法分析模块
//!
//! 将源代码字符流转换为 Token 流

pub mod error;
pub mod reader;
pub mod scanner;
pub mod stream;
pub mod token;

pub use error::ScanError;
pub use reader::{CharReader, Position};
pub use scanner::{tokenize, Scanner};
pub use stream::Lexer;
pub use token::{Span, Token, TokenKind};
