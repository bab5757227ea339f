//! NativeLib - a minimal native window
//!
//! NativeLib creates one window, calls you back once per display refresh and
//! forwards keyboard, mouse, scroll and resize input as typed events. It
//! also exposes the raw handles a GPU backend needs to render into the
//! window. It does no rendering of its own.
//!
//! # Quick Start
//!
//! ```no_run
//! use nativelib::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     nativelib::core::logging::init();
//!
//!     let mut window = Window::new(800, 600, "Hello")?;
//!     window.show();
//!
//!     let reason = window.run(
//!         Callbacks::new()
//!             .on_key(|ctx, event| {
//!                 if event.code == KeyCode::ESCAPE {
//!                     ctx.quit();
//!                 }
//!             })
//!             .on_render(|_ctx| Flow::Continue),
//!     )?;
//!     println!("stopped: {reason}");
//!     Ok(())
//! }
//! ```
//!
//! # Crates
//!
//! - [`core`] - geometry, logging and profiling helpers
//! - [`input`] - key codes, modifier flags and the key state table
//! - [`winit`] - event model, handlers and the window itself

pub use nativelib_core as core;
pub use nativelib_input as input;
pub use nativelib_winit as winit;

pub use nativelib_core::geometry::Size;
pub use nativelib_input::{KeyCode, KeyStateTable, Modifiers};
pub use nativelib_winit::{
    Callbacks, EventHandler, ExitReason, Flow, FrameTime, InitError, SurfaceHandle, Window,
    WindowCtx, WindowDescriptor,
    event::{
        Event, KeyEvent, MouseButton, MouseButtonEvent, MouseMoveEvent, ScrollEvent,
        WindowResizeEvent,
    },
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use nativelib_core::geometry::Size;
    pub use nativelib_input::{KeyCode, Modifiers};
    pub use nativelib_winit::{
        Callbacks, EventHandler, ExitReason, Flow, Window, WindowCtx, WindowDescriptor,
        event::{
            KeyEvent, MouseButton, MouseButtonEvent, MouseMoveEvent, ScrollEvent,
            WindowResizeEvent,
        },
    };
}
