//! 中文消息

use super::messages::*;

/// 获取中文消息
pub fn get(key: &str) -> &'static str {
    match key {
        // 词法错误
        ERR_LEX_UNTERMINATED_STRING => "未闭合的字符串",
        ERR_LEX_UNTERMINATED_CHAR => "未闭合的字符字面量",
        ERR_LEX_MALFORMED_NUMBER => "无效的数字: `{}`",
        ERR_LEX_UNTERMINATED_COMMENT => "未闭合的块注释",
        ERR_LEX_UNTERMINATED_INFIX_OP => "未闭合的中缀运算符",
        ERR_LEX_UNEXPECTED_CHAR => "意外的字符 '{}' (U+{})",
        ERR_LEX_READ_FAILED => "无法读取输入: {}",

        // CLI 消息
        MSG_CLI_ABOUT => "显示 Token 列表及其属性",
        MSG_CLI_FILE_NOT_FOUND => "文件未找到: {}",
        MSG_CLI_CANNOT_READ_FILE => "无法读取文件 {}: {}",
        MSG_CLI_INVALID_EXTENSION => "文件 '{}' 的扩展名不是 '.{}'",
        MSG_CLI_CANNOT_START => "无法启动扫描器: {}",
        MSG_CLI_LEXICAL_ERROR => "词法错误，位置 {}:{}",

        // 未知消息键
        _ => "未知的消息键",
    }
}
