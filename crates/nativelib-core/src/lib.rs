//! NativeLib Core
//!
//! Small shared pieces used by every nativelib crate: geometry primitives,
//! the logging bootstrap and profiling hooks.

pub mod geometry;
pub mod logging;
#[cfg(feature = "profiling")]
pub mod profiling;
