//! Backend-agnostic window state machine.
//!
//! [`WindowState`] owns everything about a window that is not a native
//! resource: its size, the cursor and key state, the quit flag and frame
//! timing. A backend feeds it [`Notification`]s and frame ticks; it turns
//! them into typed events and calls the user's [`EventHandler`].
//!
//! The winit backend in [`crate::window`] is one such driver. Tests and
//! alternative backends can drive the same state machine directly.

use std::fmt;

use glam::DVec2;
use nativelib_core::geometry::Size;
use nativelib_core::profiling::profile_function;
use nativelib_input::{KeyCode, KeyStateTable, Modifiers};

use crate::event::{
    KeyEvent, MouseButtonEvent, MouseMoveEvent, Notification, ScrollEvent, WindowResizeEvent,
};
use crate::handler::{EventHandler, Flow};
use crate::time::{FrameTime, TimeTracker};

/// Why a run loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// `quit()` was called.
    Quit,
    /// The render handler returned [`Flow::Stop`].
    RenderStopped,
    /// The user closed the window.
    Closed,
}

impl fmt::Display for ExitReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitReason::Quit => write!(f, "quit requested"),
            ExitReason::RenderStopped => write!(f, "render handler stopped the loop"),
            ExitReason::Closed => write!(f, "window closed"),
        }
    }
}

#[derive(Debug, Default)]
struct CursorTracker {
    position: DVec2,
    /// Whether `position` is a valid origin for the next delta.
    anchored: bool,
}

impl CursorTracker {
    fn move_to(&mut self, position: DVec2) -> DVec2 {
        let delta = if self.anchored {
            position - self.position
        } else {
            DVec2::ZERO
        };
        self.position = position;
        self.anchored = true;
        delta
    }

    fn reset_delta(&mut self) {
        self.anchored = false;
    }
}

#[derive(Debug)]
pub struct WindowState {
    size: Size<u32>,
    visible: bool,
    cursor: CursorTracker,
    modifiers: Modifiers,
    keys: KeyStateTable,
    pending_resize: Option<Size<u32>>,
    time: TimeTracker,
    exit: Option<ExitReason>,
}

impl WindowState {
    pub fn new(size: Size<u32>) -> Self {
        Self {
            size,
            visible: false,
            cursor: CursorTracker::default(),
            modifiers: Modifiers::empty(),
            keys: KeyStateTable::new(),
            pending_resize: None,
            time: TimeTracker::new(),
            exit: None,
        }
    }

    /// Content size as of the last delivered resize event.
    pub fn size(&self) -> Size<u32> {
        self.size
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Last observed cursor position, `(0, 0)` before the first move.
    pub fn mouse_position(&self) -> DVec2 {
        self.cursor.position
    }

    pub fn is_key_pressed(&self, code: KeyCode) -> bool {
        self.keys.is_pressed(code)
    }

    pub fn keys(&self) -> &KeyStateTable {
        &self.keys
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Timing of the most recent frame of the current run.
    pub fn frame_time(&self) -> FrameTime {
        self.time.current()
    }

    /// Ask the loop to stop at its next iteration boundary.
    pub fn quit(&mut self) {
        self.request_exit(ExitReason::Quit);
    }

    /// The user closed the window.
    pub fn close(&mut self) {
        self.request_exit(ExitReason::Closed);
    }

    pub fn exit_reason(&self) -> Option<ExitReason> {
        self.exit
    }

    pub fn is_exiting(&self) -> bool {
        self.exit.is_some()
    }

    /// Prepare for a new run loop.
    pub fn begin_run(&mut self) {
        self.time.reset();
        tracing::debug!(size = %self.size, "run loop starting");
    }

    /// Clear the exit request so the window can be run again.
    ///
    /// Input that was still pending when the loop stopped is discarded.
    pub fn end_run(&mut self) -> Option<ExitReason> {
        self.pending_resize = None;
        let reason = self.exit.take();
        if let Some(reason) = reason {
            tracing::info!("run loop finished: {reason}");
        }
        reason
    }

    /// Interpret one native notification and dispatch the resulting event.
    ///
    /// Key state is updated before the key handler runs, so the handler sees
    /// its own key as pressed. Nothing is dispatched once an exit is pending.
    pub fn notify<H: EventHandler + ?Sized>(&mut self, notification: Notification, handler: &mut H) {
        profile_function!();
        if self.is_exiting() {
            tracing::trace!("exit pending, dropping {notification:?}");
            return;
        }

        match notification {
            Notification::KeyDown { code, repeat } => {
                self.keys.update(code, true);
                let event = KeyEvent {
                    code,
                    pressed: true,
                    repeat,
                    modifiers: self.modifiers,
                };
                handler.on_key(&mut self.ctx(), event);
            }
            Notification::KeyUp { code } => {
                self.keys.update(code, false);
                let event = KeyEvent {
                    code,
                    pressed: false,
                    repeat: false,
                    modifiers: self.modifiers,
                };
                handler.on_key(&mut self.ctx(), event);
            }
            Notification::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers;
            }
            Notification::MouseDown(button) | Notification::MouseUp(button) => {
                let event = MouseButtonEvent {
                    button,
                    pressed: matches!(notification, Notification::MouseDown(_)),
                    position: self.cursor.position,
                };
                handler.on_mouse_button(&mut self.ctx(), event);
            }
            Notification::MouseMoved(position) => {
                let delta = self.cursor.move_to(position);
                handler.on_mouse_move(&mut self.ctx(), MouseMoveEvent { position, delta });
            }
            Notification::Scroll(delta) => {
                handler.on_scroll(&mut self.ctx(), ScrollEvent { delta });
            }
            Notification::Resized(size) => {
                self.pending_resize = Some(size);
            }
            Notification::Focused(true) | Notification::CursorEntered => {
                self.cursor.reset_delta();
            }
            Notification::Focused(false) | Notification::CursorLeft => {}
            Notification::CloseRequested => {
                self.close();
            }
        }
    }

    /// Deliver the resize accumulated since the last flush, if any.
    ///
    /// Only the final size of a burst is reported, and only if it differs
    /// from the current size.
    pub fn flush<H: EventHandler + ?Sized>(&mut self, handler: &mut H) {
        let Some(size) = self.pending_resize.take() else {
            return;
        };
        if self.is_exiting() || size == self.size {
            return;
        }

        tracing::debug!(from = %self.size, to = %size, "window resized");
        self.size = size;
        handler.on_resize(&mut self.ctx(), WindowResizeEvent { size });
    }

    /// Run one frame: flush pending input, then call the render handler.
    ///
    /// Returns [`Flow::Stop`] if the loop should end, either because an exit
    /// was already pending or because the handler asked to stop.
    pub fn frame<H: EventHandler + ?Sized>(&mut self, handler: &mut H) -> Flow {
        profile_function!();
        self.flush(handler);
        if self.is_exiting() {
            return Flow::Stop;
        }

        self.time.tick();
        if handler.on_render(&mut self.ctx()).is_stop() {
            self.request_exit(ExitReason::RenderStopped);
        }

        if self.is_exiting() {
            Flow::Stop
        } else {
            Flow::Continue
        }
    }

    fn request_exit(&mut self, reason: ExitReason) {
        if self.exit.is_none() {
            tracing::debug!("exit requested: {reason}");
            self.exit = Some(reason);
        }
    }

    fn ctx(&mut self) -> WindowCtx<'_> {
        WindowCtx { state: self }
    }
}

/// The window as seen from inside a handler.
pub struct WindowCtx<'a> {
    state: &'a mut WindowState,
}

impl WindowCtx<'_> {
    /// Stop the run loop once the current handler returns.
    pub fn quit(&mut self) {
        self.state.quit();
    }

    pub fn size(&self) -> Size<u32> {
        self.state.size()
    }

    pub fn mouse_position(&self) -> DVec2 {
        self.state.mouse_position()
    }

    pub fn is_key_pressed(&self, code: KeyCode) -> bool {
        self.state.is_key_pressed(code)
    }

    pub fn modifiers(&self) -> Modifiers {
        self.state.modifiers()
    }

    pub fn frame_time(&self) -> FrameTime {
        self.state.frame_time()
    }
}
