//! Test utilities for nativelib.
//!
//! Real windows need a display server, which CI machines usually lack. The
//! types here drive the same [`WindowState`](nativelib_winit::WindowState) a real window uses, from a
//! script instead of a native event loop.
//!
//! - [`HeadlessWindow`] replays notifications and frame ticks in the order a
//!   native loop would deliver them.
//! - [`EventRecorder`] is an [`EventHandler`](nativelib_winit::EventHandler) that remembers everything it
//!   was given.
//!
//! # Example
//!
//! ```rust
//! use nativelib_core::geometry::Size;
//! use nativelib_test_utils::{EventRecorder, HeadlessWindow};
//! use nativelib_winit::event::Notification;
//!
//! let mut window = HeadlessWindow::new(800, 600);
//! window.notify(Notification::Resized(Size::new(1024, 768))).frame();
//!
//! let mut recorder = EventRecorder::new();
//! window.run(&mut recorder);
//!
//! assert_eq!(window.state().size(), Size::new(1024, 768));
//! assert_eq!(recorder.resizes().count(), 1);
//! ```

mod headless;
mod recorder;

pub use headless::{HeadlessWindow, RunOutcome, Step};
pub use recorder::EventRecorder;

pub use nativelib_winit::event::Notification;
