//! Token 定义
//!
//! 词法分析器产生的标记类型

use std::fmt;

/// 保留字
pub const KEYWORDS: &[&str] = &[
    "if", "then", "else", "case", "of", "let", "in", "type", "alias", "module", "where",
    "import", "exposing", "as", "port", "effect", "infix", "infixl", "infixr",
];

/// Token 类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// 词法错误，lexeme 为诊断消息
    Error,
    /// 输入结束
    EndOfInput,
    /// 注释（`--` 行注释或 `{- -}` 块注释）
    Comment,
    /// (
    LeftParen,
    /// )
    RightParen,
    /// [
    LeftBracket,
    /// ]
    RightBracket,
    /// {
    LeftBrace,
    /// }
    RightBrace,
    /// |
    Pipe,
    /// 反引号包围的标识符，例如 `` `max` ``
    InfixOp,
    /// :
    Colon,
    /// =
    Assign,
    /// ,
    Comma,
    /// ->
    Arrow,
    /// 标识符
    Identifier,
    /// 其他运算符
    Op,
    /// 字符串字面量
    String,
    /// 整数字面量
    Int,
    /// 浮点数字面量
    Float,
    /// 保留字
    Keyword,
    /// ..
    Range,
    /// 字符字面量
    Char,
    /// True 或 False
    Bool,
    /// .
    Dot,
}

impl TokenKind {
    /// 类型名称
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Error => "Error",
            TokenKind::EndOfInput => "EndOfInput",
            TokenKind::Comment => "Comment",
            TokenKind::LeftParen => "LeftParen",
            TokenKind::RightParen => "RightParen",
            TokenKind::LeftBracket => "LeftBracket",
            TokenKind::RightBracket => "RightBracket",
            TokenKind::LeftBrace => "LeftBrace",
            TokenKind::RightBrace => "RightBrace",
            TokenKind::Pipe => "Pipe",
            TokenKind::InfixOp => "InfixOp",
            TokenKind::Colon => "Colon",
            TokenKind::Assign => "Assign",
            TokenKind::Comma => "Comma",
            TokenKind::Arrow => "Arrow",
            TokenKind::Identifier => "Identifier",
            TokenKind::Op => "Op",
            TokenKind::String => "String",
            TokenKind::Int => "Int",
            TokenKind::Float => "Float",
            TokenKind::Keyword => "Keyword",
            TokenKind::Range => "Range",
            TokenKind::Char => "Char",
            TokenKind::Bool => "Bool",
            TokenKind::Dot => "Dot",
        }
    }

    /// 识别标识符形状的单词：保留字、布尔值或普通标识符
    pub fn from_word(word: &str) -> TokenKind {
        match word {
            "True" | "False" => TokenKind::Bool,
            w if is_keyword(w) => TokenKind::Keyword,
            _ => TokenKind::Identifier,
        }
    }

    /// 识别一段完整的运算符符号
    pub fn from_symbol(symbol: &str) -> TokenKind {
        match symbol {
            "->" => TokenKind::Arrow,
            ".." => TokenKind::Range,
            "." => TokenKind::Dot,
            ":" => TokenKind::Colon,
            "|" => TokenKind::Pipe,
            "=" => TokenKind::Assign,
            _ => TokenKind::Op,
        }
    }

    /// 单字符分隔符，从不与相邻符号合并
    pub fn from_delimiter(c: char) -> Option<TokenKind> {
        let kind = match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            ',' => TokenKind::Comma,
            _ => return None,
        };
        Some(kind)
    }
}

/// 判断是否是保留字
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// 源码位置信息
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// 起始位置（字符偏移）
    pub start: usize,
    /// 结束位置（字符偏移，不包含）
    pub end: usize,
    /// 行号（从1开始）
    pub line: usize,
    /// 列号（从1开始）
    pub column: usize,
}

impl Span {
    /// 创建新的位置信息
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self { start, end, line, column }
    }
}

/// Token 结构
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token 类型
    pub kind: TokenKind,
    /// 原始文本；错误 Token 中为诊断消息
    pub lexeme: String,
    /// 位置信息
    pub span: Span,
}

impl Token {
    /// 创建新的 Token
    pub fn new(kind: TokenKind, lexeme: String, span: Span) -> Self {
        Self { kind, lexeme, span }
    }

    /// 起始字符偏移
    pub fn offset(&self) -> usize {
        self.span.start
    }

    /// 判断是否是输入结束
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// 判断是否是错误
    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }

    /// 输入结束或错误之后不会再有 Token
    pub fn is_terminal(&self) -> bool {
        self.is_eof() || self.is_error()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}' at {}:{}", self.kind, self.lexeme, self.span.line, self.span.column)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
