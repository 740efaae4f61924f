//! Status line macros shared by every crate.
//!
//! They are thin wrappers over `tracing` so the terminal formatter can pick a
//! symbol per line. `success!` uses its own target to stand apart from
//! plain `info!` lines.

pub const SUCCESS_TARGET: &str = "pvsum::success";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "pvsum::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::__tracing::info!($($arg)*)
    };
}
