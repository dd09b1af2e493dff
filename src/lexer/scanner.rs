//! 词法扫描器
//!
//! 字符驱动的状态机。每个状态处理函数消费若干字符，产生零个或多个 Token，
//! 并返回下一个状态。遇到第一个错误时产生一个错误 Token 并停止。

use std::collections::VecDeque;
use std::io::Read;

use log::{debug, trace};

use super::error::ScanError;
use super::reader::{CharReader, Position};
use super::token::{Span, Token, TokenKind};
use crate::i18n::Locale;

/// 扫描状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// 跳过空白并根据下一个字符分派
    Text,
    Identifier,
    Number,
    String,
    Char,
    LineComment,
    BlockComment,
    InfixOp,
    Operator,
    /// 输入结束，终止状态
    Eof,
}

/// 词法扫描器
///
/// 按需拉取：每次调用 [`Iterator::next`] 时才继续运行状态机。
/// 最后一个 Token 总是 `EndOfInput` 或 `Error`。
pub struct Scanner<R> {
    reader: CharReader<R>,
    /// 下一个要运行的状态，终止后为 None
    state: Option<State>,
    /// 当前 token 起始位置
    start: Position,
    /// 当前 token 已消费的文本
    lexeme: String,
    /// 已产生但尚未取走的 token
    pending: VecDeque<Token>,
    locale: Locale,
}

impl<R: Read> Scanner<R> {
    /// 创建新的扫描器，此时不读取任何输入
    pub fn new(input: R) -> Self {
        Self::with_locale(input, Locale::default())
    }

    /// 创建使用指定语言输出诊断消息的扫描器
    pub fn with_locale(input: R, locale: Locale) -> Self {
        Self {
            reader: CharReader::new(input),
            state: Some(State::Text),
            start: Position::default(),
            lexeme: String::new(),
            pending: VecDeque::new(),
            locale,
        }
    }

    /// 扫描所有 token
    pub fn scan_tokens(&mut self) -> Vec<Token> {
        self.by_ref().collect()
    }

    /// 运行一个状态，返回下一个状态；None 表示扫描已经结束
    fn step(&mut self, state: State) -> Result<Option<State>, ScanError> {
        let next = match state {
            State::Text => self.lex_text()?,
            State::Identifier => self.lex_identifier()?,
            State::Number => self.lex_number()?,
            State::String => self.lex_string()?,
            State::Char => self.lex_char()?,
            State::LineComment => self.lex_line_comment()?,
            State::BlockComment => self.lex_block_comment()?,
            State::InfixOp => self.lex_infix_op()?,
            State::Operator => self.lex_operator()?,
            State::Eof => {
                self.emit(TokenKind::EndOfInput);
                debug!("reached end of input at offset {}", self.start.offset);
                return Ok(None);
            }
        };
        Ok(Some(next))
    }

    fn lex_text(&mut self) -> Result<State, ScanError> {
        self.begin();
        while let Some(c) = self.reader.peek()? {
            if !c.is_whitespace() {
                break;
            }
            self.reader.advance()?;
        }
        self.begin();

        let Some(c) = self.reader.peek()? else {
            return Ok(State::Eof);
        };
        let next = self.reader.peek_nth(1)?;

        let state = match c {
            c if c.is_alphabetic() => State::Identifier,
            c if c.is_ascii_digit() => State::Number,
            '"' => State::String,
            '\'' => State::Char,
            '`' => State::InfixOp,
            '-' if next == Some('-') => State::LineComment,
            '{' if next == Some('-') => State::BlockComment,
            c if is_delimiter(c) || is_operator_symbol(c) => State::Operator,
            c => return Err(ScanError::UnexpectedChar(c)),
        };
        Ok(state)
    }

    fn lex_identifier(&mut self) -> Result<State, ScanError> {
        self.bump_while(is_identifier_char)?;
        let kind = TokenKind::from_word(&self.lexeme);
        self.emit(kind);
        Ok(State::Text)
    }

    fn lex_number(&mut self) -> Result<State, ScanError> {
        self.bump_while(|c| c.is_ascii_digit())?;

        let mut kind = TokenKind::Int;
        // `2..5` 中的 `..` 留给运算符状态
        if self.reader.peek()? == Some('.')
            && self.reader.peek_nth(1)?.is_some_and(|c| c.is_ascii_digit())
        {
            self.bump()?;
            self.bump_while(|c| c.is_ascii_digit())?;
            kind = TokenKind::Float;
        }

        if self.reader.peek()?.is_some_and(|c| c.is_alphabetic() || c == '_') {
            self.bump_while(is_identifier_char)?;
            return Err(ScanError::MalformedNumber(self.lexeme.clone()));
        }

        self.emit(kind);
        Ok(State::Text)
    }

    fn lex_string(&mut self) -> Result<State, ScanError> {
        self.bump()?; // 开头的 "
        loop {
            match self.reader.peek()? {
                None | Some('\n') => return Err(ScanError::UnterminatedString),
                Some('"') => {
                    self.bump()?;
                    break;
                }
                Some('\\') => {
                    self.bump()?;
                    // 反斜杠无条件转义下一个字符
                    if self.bump()?.is_none() {
                        return Err(ScanError::UnterminatedString);
                    }
                }
                Some(_) => {
                    self.bump()?;
                }
            }
        }
        self.emit(TokenKind::String);
        Ok(State::Text)
    }

    fn lex_char(&mut self) -> Result<State, ScanError> {
        self.bump()?; // 开头的 '
        match self.reader.peek()? {
            None | Some('\n') | Some('\'') => return Err(ScanError::UnterminatedChar),
            Some('\\') => {
                self.bump()?;
                if matches!(self.bump()?, None | Some('\n')) {
                    return Err(ScanError::UnterminatedChar);
                }
            }
            Some(_) => {
                self.bump()?;
            }
        }
        if self.reader.peek()? != Some('\'') {
            return Err(ScanError::UnterminatedChar);
        }
        self.bump()?;
        self.emit(TokenKind::Char);
        Ok(State::Text)
    }

    fn lex_line_comment(&mut self) -> Result<State, ScanError> {
        self.bump_while(|c| c != '\n' && c != '\r')?;
        self.emit(TokenKind::Comment);
        Ok(State::Text)
    }

    /// 块注释不嵌套，遇到的第一个 `-}` 即结束注释
    fn lex_block_comment(&mut self) -> Result<State, ScanError> {
        self.bump()?; // {
        self.bump()?; // -
        loop {
            match self.reader.peek()? {
                None => return Err(ScanError::UnterminatedComment),
                Some('-') if self.reader.peek_nth(1)? == Some('}') => {
                    self.bump()?;
                    self.bump()?;
                    break;
                }
                Some(_) => {
                    self.bump()?;
                }
            }
        }
        self.emit(TokenKind::Comment);
        Ok(State::Text)
    }

    fn lex_infix_op(&mut self) -> Result<State, ScanError> {
        self.bump()?; // 开头的 `
        if !self.reader.peek()?.is_some_and(|c| c.is_alphabetic()) {
            return Err(ScanError::UnterminatedInfixOp);
        }
        self.bump_while(is_identifier_char)?;
        if self.reader.peek()? != Some('`') {
            return Err(ScanError::UnterminatedInfixOp);
        }
        self.bump()?;
        self.emit(TokenKind::InfixOp);
        Ok(State::Text)
    }

    /// 分隔符单独成 token；其余符号按最长匹配整段读入后再分类
    fn lex_operator(&mut self) -> Result<State, ScanError> {
        if let Some(kind) = self.reader.peek()?.and_then(TokenKind::from_delimiter) {
            self.bump()?;
            self.emit(kind);
            return Ok(State::Text);
        }

        self.bump_while(is_operator_symbol)?;
        let kind = TokenKind::from_symbol(&self.lexeme);
        self.emit(kind);
        Ok(State::Text)
    }

    /// 标记新 token 的起点
    fn begin(&mut self) {
        self.start = self.reader.position();
        self.lexeme.clear();
    }

    /// 消费一个字符并加入当前 token 文本
    fn bump(&mut self) -> Result<Option<char>, ScanError> {
        let c = self.reader.advance()?;
        if let Some(c) = c {
            self.lexeme.push(c);
        }
        Ok(c)
    }

    fn bump_while(&mut self, pred: impl Fn(char) -> bool) -> Result<(), ScanError> {
        while let Some(c) = self.reader.peek()? {
            if !pred(c) {
                break;
            }
            self.bump()?;
        }
        Ok(())
    }

    fn span(&self) -> Span {
        Span::new(
            self.start.offset,
            self.reader.position().offset,
            self.start.line,
            self.start.column,
        )
    }

    /// 创建 token
    fn emit(&mut self, kind: TokenKind) {
        let span = self.span();
        let lexeme = std::mem::take(&mut self.lexeme);
        trace!("{:?} {:?} at {}:{}", kind, lexeme, span.line, span.column);
        self.pending.push_back(Token::new(kind, lexeme, span));
    }

    /// 创建错误 token，之后扫描终止
    fn fail(&mut self, err: ScanError) {
        debug!("scan failed at {}:{}: {}", self.start.line, self.start.column, err);
        let span = self.span();
        self.lexeme.clear();
        self.state = None;
        self.pending
            .push_back(Token::new(TokenKind::Error, err.message(self.locale), span));
    }
}

impl<R: Read> Iterator for Scanner<R> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            let state = self.state.take()?;
            match self.step(state) {
                Ok(next) => self.state = next,
                Err(err) => self.fail(err),
            }
        }
    }
}

/// 扫描字符串中的全部 token
pub fn tokenize(source: &str) -> Vec<Token> {
    Scanner::new(source.as_bytes()).scan_tokens()
}

/// 检查字符是否可以作为标识符的后续字符
pub fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\''
}

/// 可以组成运算符的符号
pub fn is_operator_symbol(c: char) -> bool {
    matches!(
        c,
        ':' | '.' | ';' | '|' | '#' | '%' | '\\' | '-' | '+' | '?' | '!' | '&' | '=' | '/'
            | '<' | '>' | '^' | '$' | '*' | '~'
    )
}

fn is_delimiter(c: char) -> bool {
    TokenKind::from_delimiter(c).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    /// 只比较类型和文本；错误 token 的文本是诊断消息，不比较
    fn assert_tokens(input: &str, expected: &[(&str, TokenKind)]) {
        let tokens = tokenize(input);
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        let last = tokens.last().expect("scanner produced no tokens");
        assert!(last.is_terminal(), "last token {last} is not terminal");

        let body = if last.is_eof() { &tokens[..tokens.len() - 1] } else { &tokens[..] };
        assert_eq!(body.len(), expected.len(), "input {input:?} produced {kinds:?}");
        for (token, (lexeme, kind)) in body.iter().zip(expected) {
            assert_eq!(token.kind, *kind, "input {input:?} produced {kinds:?}");
            if token.kind != TokenKind::Error {
                assert_eq!(token.lexeme, *lexeme);
            }
        }
    }

    #[test]
    fn test_is_identifier_char() {
        for c in "abc135fdcv_'".chars() {
            assert!(is_identifier_char(c));
        }
        for c in ":.;,{}[]`|#%\\-+-?!&=/<>^$".chars() {
            assert!(!is_identifier_char(c));
        }
    }

    #[test]
    fn test_scan_numbers() {
        assert_tokens("24 ", &[("24", TokenKind::Int)]);
        assert_tokens("24.56 ", &[("24.56", TokenKind::Float)]);
        assert_tokens("0", &[("0", TokenKind::Int)]);
    }

    #[test]
    fn test_scan_num_range() {
        assert_tokens("2..5", &[("2", TokenKind::Int), ("..", TokenKind::Range), ("5", TokenKind::Int)]);
    }

    #[test]
    fn test_number_followed_by_dot() {
        // 单个 . 后面不是数字时不属于数字
        assert_tokens(
            "1.foo",
            &[("1", TokenKind::Int), (".", TokenKind::Dot), ("foo", TokenKind::Identifier)],
        );
        assert_tokens(
            "1.5.3",
            &[("1.5", TokenKind::Float), (".", TokenKind::Dot), ("3", TokenKind::Int)],
        );
    }

    #[test]
    fn test_bad_number() {
        assert_tokens(
            "\nfoo = 12a4\n",
            &[("foo", TokenKind::Identifier), ("=", TokenKind::Assign), ("", TokenKind::Error)],
        );
        let tokens = tokenize("3.5e10");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].lexeme, "malformed number `3.5e10`");
    }

    #[test]
    fn test_scan_record() {
        let input = "\ntype alias Foo = \n\t{ myInt : Int \n\t, myFloat : Float\n\t}\n";
        assert_tokens(
            input,
            &[
                ("type", TokenKind::Keyword),
                ("alias", TokenKind::Keyword),
                ("Foo", TokenKind::Identifier),
                ("=", TokenKind::Assign),
                ("{", TokenKind::LeftBrace),
                ("myInt", TokenKind::Identifier),
                (":", TokenKind::Colon),
                ("Int", TokenKind::Identifier),
                (",", TokenKind::Comma),
                ("myFloat", TokenKind::Identifier),
                (":", TokenKind::Colon),
                ("Float", TokenKind::Identifier),
                ("}", TokenKind::RightBrace),
            ],
        );
    }

    #[test]
    fn test_scan_func_decl() {
        let input = "\nfoo : (Int -> Int) -> Int -> Int\nfoo fn n =\n\tfn n\n";
        assert_tokens(
            input,
            &[
                ("foo", TokenKind::Identifier),
                (":", TokenKind::Colon),
                ("(", TokenKind::LeftParen),
                ("Int", TokenKind::Identifier),
                ("->", TokenKind::Arrow),
                ("Int", TokenKind::Identifier),
                (")", TokenKind::RightParen),
                ("->", TokenKind::Arrow),
                ("Int", TokenKind::Identifier),
                ("->", TokenKind::Arrow),
                ("Int", TokenKind::Identifier),
                ("foo", TokenKind::Identifier),
                ("fn", TokenKind::Identifier),
                ("n", TokenKind::Identifier),
                ("=", TokenKind::Assign),
                ("fn", TokenKind::Identifier),
                ("n", TokenKind::Identifier),
            ],
        );
    }

    #[test]
    fn test_scan_record_update() {
        assert_tokens(
            "\n{ model | foo = True }\n",
            &[
                ("{", TokenKind::LeftBrace),
                ("model", TokenKind::Identifier),
                ("|", TokenKind::Pipe),
                ("foo", TokenKind::Identifier),
                ("=", TokenKind::Assign),
                ("True", TokenKind::Bool),
                ("}", TokenKind::RightBrace),
            ],
        );
    }

    #[test]
    fn test_scan_sum_type() {
        assert_tokens(
            "\ntype Op\n\t= Sum\n\t| Div\n\t| Mul\n\t| Sub\n",
            &[
                ("type", TokenKind::Keyword),
                ("Op", TokenKind::Identifier),
                ("=", TokenKind::Assign),
                ("Sum", TokenKind::Identifier),
                ("|", TokenKind::Pipe),
                ("Div", TokenKind::Identifier),
                ("|", TokenKind::Pipe),
                ("Mul", TokenKind::Identifier),
                ("|", TokenKind::Pipe),
                ("Sub", TokenKind::Identifier),
            ],
        );
    }

    #[test]
    fn test_scan_strings() {
        assert_tokens(
            "\ntom = { name = \"Tom\", bar = \"\\t\\\"\" }\n",
            &[
                ("tom", TokenKind::Identifier),
                ("=", TokenKind::Assign),
                ("{", TokenKind::LeftBrace),
                ("name", TokenKind::Identifier),
                ("=", TokenKind::Assign),
                ("\"Tom\"", TokenKind::String),
                (",", TokenKind::Comma),
                ("bar", TokenKind::Identifier),
                ("=", TokenKind::Assign),
                ("\"\\t\\\"\"", TokenKind::String),
                ("}", TokenKind::RightBrace),
            ],
        );
        assert_tokens("\"\"", &[("\"\"", TokenKind::String)]);
    }

    #[test]
    fn test_unclosed_string() {
        assert_tokens(
            "\nfoo = \"unclosed\n",
            &[("foo", TokenKind::Identifier), ("=", TokenKind::Assign), ("", TokenKind::Error)],
        );
        assert_tokens(
            "foo = \"unclosed",
            &[("foo", TokenKind::Identifier), ("=", TokenKind::Assign), ("", TokenKind::Error)],
        );
        // 结尾的反斜杠转义了不存在的字符
        assert_tokens("\"abc\\", &[("", TokenKind::Error)]);
    }

    #[test]
    fn test_scan_chars() {
        assert_tokens(
            "\ntom = { initial = 'T', foo = '\\\\' }\n",
            &[
                ("tom", TokenKind::Identifier),
                ("=", TokenKind::Assign),
                ("{", TokenKind::LeftBrace),
                ("initial", TokenKind::Identifier),
                ("=", TokenKind::Assign),
                ("'T'", TokenKind::Char),
                (",", TokenKind::Comma),
                ("foo", TokenKind::Identifier),
                ("=", TokenKind::Assign),
                ("'\\\\'", TokenKind::Char),
                ("}", TokenKind::RightBrace),
            ],
        );
        assert_tokens("'\\''", &[("'\\''", TokenKind::Char)]);
    }

    #[test]
    fn test_unclosed_char() {
        assert_tokens(
            "\nfoo = 'a\n",
            &[("foo", TokenKind::Identifier), ("=", TokenKind::Assign), ("", TokenKind::Error)],
        );
        assert_tokens("'ab'", &[("", TokenKind::Error)]);
        assert_tokens("''", &[("", TokenKind::Error)]);
    }

    #[test]
    fn test_scan_line_comments() {
        assert_tokens(
            "\n-- comment\n-- other comment\n",
            &[("-- comment", TokenKind::Comment), ("-- other comment", TokenKind::Comment)],
        );
        assert_tokens(
            "x -- trailing\r\ny",
            &[
                ("x", TokenKind::Identifier),
                ("-- trailing", TokenKind::Comment),
                ("y", TokenKind::Identifier),
            ],
        );
    }

    #[test]
    fn test_scan_multiline_comment() {
        let doc = "{-| Extract the first element of a list.\n    head [1,2,3] == Just 1\n    head [] == Nothing\n-}";
        let input = format!("\n{{-|-}}\n{}\n", doc);
        assert_tokens(&input, &[("{-|-}", TokenKind::Comment), (doc, TokenKind::Comment)]);
    }

    #[test]
    fn test_block_comments_do_not_nest() {
        assert_tokens(
            "{- outer {- inner -} x",
            &[("{- outer {- inner -}", TokenKind::Comment), ("x", TokenKind::Identifier)],
        );
    }

    #[test]
    fn test_unclosed_block_comment() {
        assert_tokens("a {- never closed\n", &[("a", TokenKind::Identifier), ("", TokenKind::Error)]);
        // `{-}` 中的 - 不能同时用于开始和结束
        assert_tokens("{-}", &[("", TokenKind::Error)]);
    }

    #[test]
    fn test_scan_infix_op() {
        assert_tokens(
            "theMax = 3 `max` 5",
            &[
                ("theMax", TokenKind::Identifier),
                ("=", TokenKind::Assign),
                ("3", TokenKind::Int),
                ("`max`", TokenKind::InfixOp),
                ("5", TokenKind::Int),
            ],
        );
    }

    #[test]
    fn test_unclosed_infix_op() {
        assert_tokens("a `max b", &[("a", TokenKind::Identifier), ("", TokenKind::Error)]);
        assert_tokens("``", &[("", TokenKind::Error)]);
        assert_tokens("`max", &[("", TokenKind::Error)]);
    }

    #[test]
    fn test_scan_list() {
        assert_tokens(
            "\nList.map fn [1, 2, 3]\n",
            &[
                ("List", TokenKind::Identifier),
                (".", TokenKind::Dot),
                ("map", TokenKind::Identifier),
                ("fn", TokenKind::Identifier),
                ("[", TokenKind::LeftBracket),
                ("1", TokenKind::Int),
                (",", TokenKind::Comma),
                ("2", TokenKind::Int),
                (",", TokenKind::Comma),
                ("3", TokenKind::Int),
                ("]", TokenKind::RightBracket),
            ],
        );
    }

    #[test]
    fn test_scan_operators() {
        assert_tokens(
            "\na = [1] ++ [2]\n",
            &[
                ("a", TokenKind::Identifier),
                ("=", TokenKind::Assign),
                ("[", TokenKind::LeftBracket),
                ("1", TokenKind::Int),
                ("]", TokenKind::RightBracket),
                ("++", TokenKind::Op),
                ("[", TokenKind::LeftBracket),
                ("2", TokenKind::Int),
                ("]", TokenKind::RightBracket),
            ],
        );
    }

    #[test]
    fn test_custom_op() {
        assert_tokens(
            "\nfoo = 12 -: 13\n",
            &[
                ("foo", TokenKind::Identifier),
                ("=", TokenKind::Assign),
                ("12", TokenKind::Int),
                ("-:", TokenKind::Op),
                ("13", TokenKind::Int),
            ],
        );
    }

    #[test]
    fn test_maximal_munch() {
        assert_tokens("->", &[("->", TokenKind::Arrow)]);
        assert_tokens("..", &[("..", TokenKind::Range)]);
        assert_tokens("==", &[("==", TokenKind::Op)]);
        assert_tokens("x |> f", &[
            ("x", TokenKind::Identifier),
            ("|>", TokenKind::Op),
            ("f", TokenKind::Identifier),
        ]);
        // 分隔符不参与合并
        assert_tokens("(+)", &[
            ("(", TokenKind::LeftParen),
            ("+", TokenKind::Op),
            (")", TokenKind::RightParen),
        ]);
        assert_tokens("\\x -> x", &[
            ("\\", TokenKind::Op),
            ("x", TokenKind::Identifier),
            ("->", TokenKind::Arrow),
            ("x", TokenKind::Identifier),
        ]);
    }

    #[test]
    fn test_scan_identifiers() {
        for id in ["x", "foo", "fooBar", "x'", "foo_bar", "a1b2", "Maybe", "model''", "trues"] {
            let tokens = tokenize(id);
            assert_eq!(tokens.len(), 2);
            assert_eq!(tokens[0].kind, TokenKind::Identifier);
            assert_eq!(tokens[0].lexeme, id);
            assert!(tokens[1].is_eof());
        }
    }

    #[test]
    fn test_scan_keywords() {
        let tokens = tokenize("module Main exposing (..)\nimport Html\ncase x of\n  _ -> 1");
        let keywords: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Keyword)
            .map(|t| t.lexeme.as_str())
            .collect();
        assert_eq!(keywords, ["module", "exposing", "import", "case", "of"]);
        // `_` 不是合法的标识符开头
        assert!(tokens.last().unwrap().is_error());
    }

    #[test]
    fn test_whitespace_only() {
        for input in ["", " ", "\n\n", "\t \r\n  "] {
            let tokens = tokenize(input);
            assert_eq!(tokens.len(), 1, "input {input:?}");
            assert!(tokens[0].is_eof());
        }
    }

    #[test]
    fn test_unexpected_char() {
        let tokens = tokenize("a @ b");
        assert_eq!(tokens.len(), 2);
        assert!(tokens[1].is_error());
        assert_eq!(tokens[1].lexeme, "unexpected character '@' (U+0040)");
        assert_eq!(tokens[1].span.column, 3);
    }

    #[test]
    fn test_positions() {
        let tokens = tokenize("foo =\n  bar 1\n");
        let positions: Vec<_> = tokens.iter().map(|t| (t.span.start, t.span.line, t.span.column)).collect();
        assert_eq!(positions, [(0, 1, 1), (4, 1, 5), (8, 2, 3), (12, 2, 7), (14, 3, 1)]);
    }

    #[test]
    fn test_positions_after_multiline_comment() {
        let tokens = tokenize("{- a\nb -} x");
        assert_eq!(tokens[0].span, Span::new(0, 9, 1, 1));
        assert_eq!(tokens[1].span, Span::new(10, 11, 2, 6));
    }

    #[test]
    fn test_lexemes_match_source() {
        let input = "module Main exposing (main)\n\n{-| doc\n-}\nmain : Program () Model Msg\nmain =\n    List.foldl (\\x acc -> x + acc) 0 [1..10] |> toString -- total\n\nc = 'x' ++ \"s\\\"q\" `op` 3.25\n";
        let chars: Vec<char> = input.chars().collect();
        let tokens = tokenize(input);
        assert!(tokens.last().unwrap().is_eof());

        let mut last_offset = 0;
        for token in &tokens {
            assert!(token.span.start >= last_offset);
            last_offset = token.span.start;
            if token.is_terminal() {
                continue;
            }
            let slice: String = chars[token.span.start..token.span.end].iter().collect();
            assert_eq!(slice, token.lexeme);

            // 行列号与之前的换行数一致
            let before = &chars[..token.span.start];
            let line = before.iter().filter(|&&c| c == '\n').count() + 1;
            let column = before.iter().rev().take_while(|&&c| c != '\n').count() + 1;
            assert_eq!((token.span.line, token.span.column), (line, column), "{token}");
        }
    }

    #[test]
    fn test_error_is_last_token() {
        let mut scanner = Scanner::new("x \"oops".as_bytes());
        assert_eq!(scanner.next().map(|t| t.kind), Some(TokenKind::Identifier));
        let err = scanner.next().unwrap();
        assert!(err.is_error());
        assert_eq!(err.lexeme, "unterminated string literal");
        assert_eq!(err.span.start, 2);
        assert!(scanner.next().is_none());
        assert!(scanner.next().is_none());
    }

    #[test]
    fn test_localized_error() {
        let mut scanner = Scanner::with_locale("'a".as_bytes(), Locale::Zh);
        let tokens = scanner.scan_tokens();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].lexeme, "未闭合的字符字面量");
    }

    /// 读取若干字节后失败的输入
    struct FailingReader {
        data: &'static [u8],
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.data.is_empty() {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "input closed"));
            }
            let n = buf.len().min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    #[test]
    fn test_read_error() {
        let tokens = Scanner::new(FailingReader { data: b"foo = 1 " }).scan_tokens();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, [TokenKind::Identifier, TokenKind::Assign, TokenKind::Int, TokenKind::Error]);
        assert_eq!(tokens[3].lexeme, "cannot read input: input closed");
    }

    #[test]
    fn test_invalid_utf8_is_read_error() {
        let bytes: &[u8] = &[b'a', b' ', 0xC0, 0x80];
        let tokens = Scanner::new(bytes).scan_tokens();
        assert_eq!(tokens.len(), 2);
        assert!(tokens[1].is_error());
        assert!(tokens[1].lexeme.starts_with("cannot read input:"));
    }
}
