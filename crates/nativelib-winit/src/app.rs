use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::{StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::WindowId;

use crate::event::Notification;
use crate::handler::EventHandler;
use crate::lifecycle::WindowState;
use crate::time::FrameTimer;
use crate::window::WinitWindow;

/// Feeds winit callbacks for one window into its [`WindowState`].
///
/// Input notifications are dispatched as they arrive. The frame timer is
/// checked in `about_to_wait`, after winit has delivered everything pending,
/// and a due tick requests a redraw, so rendering always follows the input
/// of the same iteration. Redraws the platform issues on its own are not
/// rendered; only one frame is rendered per fired tick.
pub(crate) struct LoopDriver<'a, H: EventHandler> {
    window: &'a WinitWindow,
    timer: &'a mut FrameTimer,
    state: &'a mut WindowState,
    handler: &'a mut H,
    scale_factor: f64,
}

impl<'a, H: EventHandler> LoopDriver<'a, H> {
    pub fn new(
        window: &'a WinitWindow,
        timer: &'a mut FrameTimer,
        state: &'a mut WindowState,
        handler: &'a mut H,
    ) -> Self {
        Self {
            scale_factor: window.scale_factor(),
            window,
            timer,
            state,
            handler,
        }
    }

    fn exit_if_requested(&self, event_loop: &ActiveEventLoop) {
        if self.state.is_exiting() {
            event_loop.exit();
        }
    }
}

impl<H: EventHandler> ApplicationHandler for LoopDriver<'_, H> {
    fn new_events(&mut self, event_loop: &ActiveEventLoop, cause: StartCause) {
        if let StartCause::Init = cause {
            self.timer.start(Instant::now());
            self.exit_if_requested(event_loop);
        }
    }

    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {}

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if window_id != self.window.id() {
            return;
        }

        match event {
            WindowEvent::RedrawRequested => {
                if self.timer.take_frame() {
                    self.state.frame(&mut *self.handler);
                    nativelib_core::profiling::new_frame();
                } else {
                    tracing::trace!("redraw without a pending frame tick");
                }
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = scale_factor;
            }
            event => match Notification::from_winit(event, self.scale_factor) {
                Some(notification) => self.state.notify(notification, &mut *self.handler),
                None => tracing::trace!("dropping unmodelled window event"),
            },
        }

        self.exit_if_requested(event_loop);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.state.flush(&mut *self.handler);
        if self.state.is_exiting() {
            event_loop.exit();
            return;
        }

        if self.timer.poll(Instant::now()) {
            self.window.request_redraw();
        }
        if let Some(deadline) = self.timer.deadline() {
            event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
        }
    }
}
