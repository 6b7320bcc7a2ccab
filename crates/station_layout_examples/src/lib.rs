#![forbid(unsafe_code)]

mod logging;

pub use logging::init_tracing;
