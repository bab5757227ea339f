use nativelib_winit::event::{Event, KeyEvent, MouseButtonEvent, MouseMoveEvent, ScrollEvent, WindowResizeEvent};
use nativelib_winit::{EventHandler, Flow, WindowCtx};

/// Records every event it receives.
///
/// Optionally stops the loop from the render handler after a fixed number of
/// frames.
#[derive(Debug, Default)]
pub struct EventRecorder {
    events: Vec<Event>,
    renders: u64,
    stop_after: Option<u64>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return [`Flow::Stop`] from the `n`th render.
    pub fn stop_after_renders(n: u64) -> Self {
        Self {
            stop_after: Some(n),
            ..Self::default()
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn renders(&self) -> u64 {
        self.renders
    }

    pub fn keys(&self) -> impl Iterator<Item = &KeyEvent> {
        self.events.iter().filter_map(|event| match event {
            Event::Key(event) => Some(event),
            _ => None,
        })
    }

    pub fn mouse_moves(&self) -> impl Iterator<Item = &MouseMoveEvent> {
        self.events.iter().filter_map(|event| match event {
            Event::MouseMove(event) => Some(event),
            _ => None,
        })
    }

    pub fn resizes(&self) -> impl Iterator<Item = &WindowResizeEvent> {
        self.events.iter().filter_map(|event| match event {
            Event::Resize(event) => Some(event),
            _ => None,
        })
    }
}

impl EventHandler for EventRecorder {
    fn on_key(&mut self, _ctx: &mut WindowCtx, event: KeyEvent) {
        self.events.push(event.into());
    }

    fn on_mouse_button(&mut self, _ctx: &mut WindowCtx, event: MouseButtonEvent) {
        self.events.push(event.into());
    }

    fn on_mouse_move(&mut self, _ctx: &mut WindowCtx, event: MouseMoveEvent) {
        self.events.push(event.into());
    }

    fn on_scroll(&mut self, _ctx: &mut WindowCtx, event: ScrollEvent) {
        self.events.push(event.into());
    }

    fn on_resize(&mut self, _ctx: &mut WindowCtx, event: WindowResizeEvent) {
        self.events.push(event.into());
    }

    fn on_render(&mut self, _ctx: &mut WindowCtx) -> Flow {
        self.renders += 1;
        match self.stop_after {
            Some(n) if self.renders >= n => Flow::Stop,
            _ => Flow::Continue,
        }
    }
}
