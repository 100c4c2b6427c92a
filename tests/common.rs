//!
//! 集成测试的通用辅助函数
//!

#![allow(dead_code)]

use tracing_subscriber::EnvFilter;

/// 为测试初始化 `tracing` 输出，可通过 `RUST_LOG` 调整级别
pub fn init_tracing() {
    static ONCE: std::sync::Once = std::sync::Once::new();

    ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_test_writer()
            .try_init();
    });
}
