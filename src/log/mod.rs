pub mod error;
pub mod file_sink;
pub mod global;
pub mod log_level;
pub mod log_macros;
pub mod log_msg;
pub mod log_sink;
pub mod logger;
pub mod memory_sink;
pub mod noop_log_sink;
pub mod sink_flag;
pub use memory_sink::MemorySink;
pub use noop_log_sink::NoopLogSink;
