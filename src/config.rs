//! 配置常量模块
//!
//! 所有可配置的词法分析相关常量都在这里定义，便于后期修改

use crate::i18n::Locale;

/// 语言名称
pub const LANG_NAME: &str = "Elm";

/// 源码文件扩展名
pub const SOURCE_EXTENSION: &str = "elm";

/// 版本号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Token 队列默认容量
pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

/// 扫描线程名称
pub const SCANNER_THREAD_NAME: &str = "elm-scanner";

/// 词法分析器配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    /// Token 队列容量（0 表示无缓冲，生产者每次都等待消费者）
    pub queue_capacity: usize,
    /// 诊断消息语言
    pub locale: Locale,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            locale: Locale::default(),
        }
    }
}
