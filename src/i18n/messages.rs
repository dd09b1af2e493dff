//! 消息键

// 词法错误
pub const ERR_LEX_UNTERMINATED_STRING: &str = "lex.unterminated_string";
pub const ERR_LEX_UNTERMINATED_CHAR: &str = "lex.unterminated_char";
pub const ERR_LEX_MALFORMED_NUMBER: &str = "lex.malformed_number";
pub const ERR_LEX_UNTERMINATED_COMMENT: &str = "lex.unterminated_comment";
pub const ERR_LEX_UNTERMINATED_INFIX_OP: &str = "lex.unterminated_infix_op";
pub const ERR_LEX_UNEXPECTED_CHAR: &str = "lex.unexpected_char";
pub const ERR_LEX_READ_FAILED: &str = "lex.read_failed";

// CLI 消息
pub const MSG_CLI_ABOUT: &str = "cli.about";
pub const MSG_CLI_FILE_NOT_FOUND: &str = "cli.file_not_found";
pub const MSG_CLI_CANNOT_READ_FILE: &str = "cli.cannot_read_file";
pub const MSG_CLI_INVALID_EXTENSION: &str = "cli.invalid_extension";
pub const MSG_CLI_CANNOT_START: &str = "cli.cannot_start";
pub const MSG_CLI_LEXICAL_ERROR: &str = "cli.lexical_error";

/// 所有消息键
pub const ALL: &[&str] = &[
    ERR_LEX_UNTERMINATED_STRING,
    ERR_LEX_UNTERMINATED_CHAR,
    ERR_LEX_MALFORMED_NUMBER,
    ERR_LEX_UNTERMINATED_COMMENT,
    ERR_LEX_UNTERMINATED_INFIX_OP,
    ERR_LEX_UNEXPECTED_CHAR,
    ERR_LEX_READ_FAILED,
    MSG_CLI_ABOUT,
    MSG_CLI_FILE_NOT_FOUND,
    MSG_CLI_CANNOT_READ_FILE,
    MSG_CLI_INVALID_EXTENSION,
    MSG_CLI_CANNOT_START,
    MSG_CLI_LEXICAL_ERROR,
];
