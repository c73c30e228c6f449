use env_logger::Builder;
use log::LevelFilter;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize test logging once per test binary.
///
/// Logs stay at error level unless LOG_LEVEL asks for more.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let level_filter = match std::env::var("LOG_LEVEL").as_deref() {
            Ok("warn") => LevelFilter::Warn,
            Ok("info") => LevelFilter::Info,
            Ok("debug") => LevelFilter::Debug,
            Ok("trace") => LevelFilter::Trace,
            _ => LevelFilter::Error,
        };

        let _ = Builder::from_default_env()
            .filter_level(level_filter)
            .is_test(true)
            .try_init();
    });
}
