use std::collections::VecDeque;

use nativelib_core::geometry::Size;
use nativelib_winit::event::Notification;
use nativelib_winit::{EventHandler, ExitReason, WindowState};

/// One scripted occurrence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Notify(Notification),
    /// A display refresh tick.
    Frame,
    /// The native loop ran out of pending events and is about to block.
    Idle,
}

/// Result of a headless run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// Why the loop ended; `None` if the script ran out first.
    pub exit: Option<ExitReason>,
    /// Render handler invocations during this run.
    pub frames: u64,
    /// Scripted steps that were never reached.
    pub unprocessed: usize,
}

/// A window without a native backend.
///
/// Steps are processed in order, with the same rules the winit driver
/// follows: pending resizes are flushed before every frame and at every idle
/// point, and nothing is processed once an exit has been requested. When the
/// script is exhausted the loop keeps ticking frames up to the idle frame
/// limit, which stands in for the display refresh.
#[derive(Debug)]
pub struct HeadlessWindow {
    state: WindowState,
    script: VecDeque<Step>,
    idle_frame_limit: u64,
}

impl HeadlessWindow {
    pub fn new(width: u32, height: u32) -> Self {
        let mut state = WindowState::new(Size::new(width, height));
        state.set_visible(true);
        Self {
            state,
            script: VecDeque::new(),
            idle_frame_limit: 0,
        }
    }

    pub fn state(&self) -> &WindowState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut WindowState {
        &mut self.state
    }

    pub fn notify(&mut self, notification: Notification) -> &mut Self {
        self.script.push_back(Step::Notify(notification));
        self
    }

    pub fn frame(&mut self) -> &mut Self {
        self.script.push_back(Step::Frame);
        self
    }

    pub fn frames(&mut self, count: usize) -> &mut Self {
        self.script.extend(std::iter::repeat_n(Step::Frame, count));
        self
    }

    pub fn idle(&mut self) -> &mut Self {
        self.script.push_back(Step::Idle);
        self
    }

    /// Keep rendering up to `limit` extra frames after the script ends.
    pub fn idle_frames(&mut self, limit: u64) -> &mut Self {
        self.idle_frame_limit = limit;
        self
    }

    /// Replay the script through `handler`.
    pub fn run<H: EventHandler>(&mut self, mut handler: H) -> RunOutcome {
        self.state.begin_run();

        while !self.state.is_exiting() {
            let Some(step) = self.script.pop_front() else {
                break;
            };
            match step {
                Step::Notify(notification) => self.state.notify(notification, &mut handler),
                Step::Frame => {
                    self.state.frame(&mut handler);
                }
                Step::Idle => self.state.flush(&mut handler),
            }
        }

        if !self.state.is_exiting() {
            self.state.flush(&mut handler);
        }

        let mut idle = 0;
        while idle < self.idle_frame_limit && !self.state.is_exiting() {
            self.state.frame(&mut handler);
            idle += 1;
        }

        let frames = self.state.frame_time().frame_count;
        let unprocessed = self.script.len();
        self.script.clear();

        RunOutcome {
            exit: self.state.end_run(),
            frames,
            unprocessed,
        }
    }
}
