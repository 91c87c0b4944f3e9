//! Shared helpers for queue tests

use std::sync::{Once, OnceLock};

static INIT: Once = Once::new();
static LOGGER_HANDLE: OnceLock<flexi_logger::LoggerHandle> = OnceLock::new();

/// Initialize logging once per test binary so queue trace output is visible
/// under `--nocapture`.
pub fn init_test_logging() {
    INIT.call_once(|| {
        if let Ok(logger) = flexi_logger::Logger::try_with_str("trace") {
            if let Ok(handle) = logger.start() {
                let _ = LOGGER_HANDLE.set(handle);
            }
        }
    });
}
