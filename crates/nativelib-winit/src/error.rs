//! Error types for window construction.

use std::fmt;

use nativelib_core::geometry::Size;
pub use raw_window_handle::HandleError;
pub use winit::error::{EventLoopError, OsError};

/// Failure to obtain the native resources backing a [`Window`](crate::window::Window).
///
/// Construction is attempted once; a window that failed to construct cannot
/// be recovered.
#[derive(Debug)]
pub enum InitError {
    /// Width or height was zero.
    InvalidSize {
        /// The requested size.
        size: Size<u32>,
    },

    /// The platform event loop could not be created, e.g. no display server
    /// is reachable or another event loop already exists in this process.
    EventLoop {
        /// The underlying winit error.
        source: EventLoopError,
    },

    /// The native window could not be created.
    Window {
        /// The underlying winit error.
        source: OsError,
    },

    /// The window exists but its drawing surface handles are unavailable.
    Surface {
        /// The underlying handle error.
        source: HandleError,
    },
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::InvalidSize { size } => {
                write!(f, "Window size must be non-zero, got {}", size)
            }
            InitError::EventLoop { source } => {
                write!(f, "Failed to create event loop: {}", source)
            }
            InitError::Window { source } => {
                write!(f, "Failed to create native window: {}", source)
            }
            InitError::Surface { source } => {
                write!(f, "Failed to acquire drawing surface: {}", source)
            }
        }
    }
}

impl std::error::Error for InitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InitError::InvalidSize { .. } => None,
            InitError::EventLoop { source } => Some(source),
            InitError::Window { source } => Some(source),
            InitError::Surface { source } => Some(source),
        }
    }
}

impl From<EventLoopError> for InitError {
    fn from(source: EventLoopError) -> Self {
        InitError::EventLoop { source }
    }
}

impl From<OsError> for InitError {
    fn from(source: OsError) -> Self {
        InitError::Window { source }
    }
}

impl From<HandleError> for InitError {
    fn from(source: HandleError) -> Self {
        InitError::Surface { source }
    }
}
