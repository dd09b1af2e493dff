//! English messages

use super::messages::*;

/// Get English message
pub fn get(key: &str) -> &'static str {
    match key {
        // Lexical errors
        ERR_LEX_UNTERMINATED_STRING => "unterminated string literal",
        ERR_LEX_UNTERMINATED_CHAR => "unterminated character literal",
        ERR_LEX_MALFORMED_NUMBER => "malformed number `{}`",
        ERR_LEX_UNTERMINATED_COMMENT => "unterminated block comment",
        ERR_LEX_UNTERMINATED_INFIX_OP => "unterminated infix operator",
        ERR_LEX_UNEXPECTED_CHAR => "unexpected character '{}' (U+{})",
        ERR_LEX_READ_FAILED => "cannot read input: {}",

        // CLI messages
        MSG_CLI_ABOUT => "Display a list of tokens with their properties",
        MSG_CLI_FILE_NOT_FOUND => "File not found: {}",
        MSG_CLI_CANNOT_READ_FILE => "Cannot read file {}: {}",
        MSG_CLI_INVALID_EXTENSION => "File '{}' does not have the '.{}' extension",
        MSG_CLI_CANNOT_START => "Cannot start scanner: {}",
        MSG_CLI_LEXICAL_ERROR => "Lexical error at {}:{}",

        // Unknown message key
        _ => "Unknown message key",
    }
}
