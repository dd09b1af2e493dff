//! 词法错误定义

use std::io;

use thiserror::Error;

use crate::i18n::{format_message, messages, Locale};

/// 扫描过程中的错误，每次扫描最多产生一个
#[derive(Error, Debug)]
pub enum ScanError {
    /// 字符串在行尾或输入结束前没有闭合
    #[error("unterminated string literal")]
    UnterminatedString,

    /// 字符字面量没有闭合
    #[error("unterminated character literal")]
    UnterminatedChar,

    /// 数字后面紧跟字母
    #[error("malformed number `{0}`")]
    MalformedNumber(String),

    /// 块注释在输入结束前没有闭合
    #[error("unterminated block comment")]
    UnterminatedComment,

    /// 反引号中缀运算符没有闭合
    #[error("unterminated infix operator")]
    UnterminatedInfixOp,

    /// 不属于任何 Token 的字符
    #[error("unexpected character '{0}' (U+{code:04X})", code = code_point(.0))]
    UnexpectedChar(char),

    /// 底层输入读取失败（不同于正常的输入结束）
    #[error("cannot read input: {0}")]
    Read(#[from] io::Error),
}

impl ScanError {
    /// 本地化的诊断消息
    pub fn message(&self, locale: Locale) -> String {
        match self {
            ScanError::UnterminatedString => {
                format_message(messages::ERR_LEX_UNTERMINATED_STRING, locale, &[])
            }
            ScanError::UnterminatedChar => {
                format_message(messages::ERR_LEX_UNTERMINATED_CHAR, locale, &[])
            }
            ScanError::MalformedNumber(numeral) => {
                format_message(messages::ERR_LEX_MALFORMED_NUMBER, locale, &[numeral])
            }
            ScanError::UnterminatedComment => {
                format_message(messages::ERR_LEX_UNTERMINATED_COMMENT, locale, &[])
            }
            ScanError::UnterminatedInfixOp => {
                format_message(messages::ERR_LEX_UNTERMINATED_INFIX_OP, locale, &[])
            }
            ScanError::UnexpectedChar(c) => {
                let code = format!("{:04X}", code_point(c));
                format_message(messages::ERR_LEX_UNEXPECTED_CHAR, locale, &[&c.to_string(), &code])
            }
            ScanError::Read(err) => {
                format_message(messages::ERR_LEX_READ_FAILED, locale, &[&err.to_string()])
            }
        }
    }
}

fn code_point(c: &char) -> u32 {
    *c as u32
}
