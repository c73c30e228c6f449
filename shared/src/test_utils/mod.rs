pub mod failing_store;
pub mod http_test_utils;
pub mod test_logging;
