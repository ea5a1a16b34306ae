//! Backend-neutral logging macros.
//!
//! Navigation code wants lightweight diagnostics (route changes, back-signal
//! dispatch, subscription lifecycle) without forcing a logging framework on
//! the embedding app. These macros forward to whichever backend the crate was
//! built with and compile to nothing when both features are off.
//!
//! | Feature   | Forwards to | Default |
//! |-----------|-------------|---------|
//! | `log`     | [`log`](https://docs.rs/log) macros | yes |
//! | `tracing` | [`tracing`](https://docs.rs/tracing) macros | no |
//!
//! Enable at most one backend. All macros take `format!`-style arguments:
//!
//! ```ignore
//! use movienav::{debug_log, info_log};
//!
//! info_log!("navigate forward: {} -> {}", event.from, event.to);
//! debug_log!("back signal consumed at depth {}", depth);
//! ```

/// Log at **trace** level (per-handler dispatch detail).
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        ::log::trace!($($arg)*);
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
    };
}

/// Log at **debug** level (tab switches, subscription lifecycle).
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        ::log::debug!($($arg)*);
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
    };
}

/// Log at **info** level (route transitions).
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        ::log::info!($($arg)*);
        #[cfg(feature = "tracing")]
        ::tracing::info!($($arg)*);
    };
}

/// Log at **warn** level (ignored intents, suspicious call patterns).
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        ::log::warn!($($arg)*);
        #[cfg(feature = "tracing")]
        ::tracing::warn!($($arg)*);
    };
}

/// Log at **error** level (broken embedding contracts).
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        ::log::error!($($arg)*);
        #[cfg(feature = "tracing")]
        ::tracing::error!($($arg)*);
    };
}
