//! Logging helpers shared by every crate in the workspace.
//!
//! Thin wrappers over `tracing` so terminal front-ends can give "success"
//! messages their own glyph without a separate log level.

/// Target used by [`success!`](crate::success).
pub const SUCCESS_TARGET: &str = "handsign::success";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)*)
    };
}
