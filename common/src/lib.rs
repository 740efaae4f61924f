pub mod config;
pub mod log;

#[doc(hidden)]
pub use tracing as __tracing;
