//! Single-window lifecycle and input dispatch on top of winit.
//!
//! A [`window::Window`] owns the native window, its drawing surface and a
//! frame timer. [`window::Window::run`] drives the native event loop,
//! translating platform notifications into the typed events in [`event`]
//! and handing them to an [`handler::EventHandler`].

mod app;
pub mod error;
pub mod event;
pub mod handler;
pub mod lifecycle;
pub mod time;
pub mod window;

pub use error::InitError;
pub use handler::{Callbacks, EventHandler, Flow};
pub use lifecycle::{ExitReason, WindowCtx, WindowState};
pub use time::FrameTime;
pub use window::{SurfaceHandle, Window, WindowDescriptor};
