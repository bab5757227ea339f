use crate::event::{KeyEvent, MouseButtonEvent, MouseMoveEvent, ScrollEvent, WindowResizeEvent};
use crate::lifecycle::WindowCtx;

/// What the run loop should do after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flow {
    #[default]
    Continue,
    Stop,
}

impl Flow {
    pub const fn is_stop(self) -> bool {
        matches!(self, Flow::Stop)
    }
}

impl From<bool> for Flow {
    /// `true` keeps running, `false` stops.
    fn from(keep_running: bool) -> Self {
        if keep_running { Flow::Continue } else { Flow::Stop }
    }
}

/// Receives input and frame callbacks from a running window.
///
/// Every method has a no-op default, so implementors only override what they
/// care about. All calls happen on the thread that called `run`, one at a
/// time, in the order the notifications arrived.
pub trait EventHandler {
    #[allow(unused_variables)]
    fn on_key(&mut self, ctx: &mut WindowCtx, event: KeyEvent) {}

    #[allow(unused_variables)]
    fn on_mouse_button(&mut self, ctx: &mut WindowCtx, event: MouseButtonEvent) {}

    #[allow(unused_variables)]
    fn on_mouse_move(&mut self, ctx: &mut WindowCtx, event: MouseMoveEvent) {}

    #[allow(unused_variables)]
    fn on_scroll(&mut self, ctx: &mut WindowCtx, event: ScrollEvent) {}

    #[allow(unused_variables)]
    fn on_resize(&mut self, ctx: &mut WindowCtx, event: WindowResizeEvent) {}

    /// Called once per display refresh, after all pending input was delivered.
    ///
    /// Returning [`Flow::Stop`] ends the run loop.
    #[allow(unused_variables)]
    fn on_render(&mut self, ctx: &mut WindowCtx) -> Flow {
        Flow::Continue
    }
}

impl<H: EventHandler + ?Sized> EventHandler for &mut H {
    fn on_key(&mut self, ctx: &mut WindowCtx, event: KeyEvent) {
        (**self).on_key(ctx, event)
    }

    fn on_mouse_button(&mut self, ctx: &mut WindowCtx, event: MouseButtonEvent) {
        (**self).on_mouse_button(ctx, event)
    }

    fn on_mouse_move(&mut self, ctx: &mut WindowCtx, event: MouseMoveEvent) {
        (**self).on_mouse_move(ctx, event)
    }

    fn on_scroll(&mut self, ctx: &mut WindowCtx, event: ScrollEvent) {
        (**self).on_scroll(ctx, event)
    }

    fn on_resize(&mut self, ctx: &mut WindowCtx, event: WindowResizeEvent) {
        (**self).on_resize(ctx, event)
    }

    fn on_render(&mut self, ctx: &mut WindowCtx) -> Flow {
        (**self).on_render(ctx)
    }
}

pub type Callback<'a, E> = Box<dyn FnMut(&mut WindowCtx, E) + 'a>;
pub type RenderCallback<'a> = Box<dyn FnMut(&mut WindowCtx) -> Flow + 'a>;

/// A bundle of optional closures, one per event kind.
///
/// Unset slots do nothing; an empty bundle only tracks key state and runs
/// until [`WindowCtx::quit`] or the user closes the window.
///
/// ```no_run
/// use nativelib_winit::handler::{Callbacks, Flow};
/// use nativelib_winit::window::Window;
/// use nativelib_input::KeyCode;
///
/// let mut window = Window::new(800, 600, "Demo").expect("no display");
/// window.show();
/// window
///     .run(
///         Callbacks::new()
///             .on_key(|ctx, event| {
///                 if event.code == KeyCode::ESCAPE {
///                     ctx.quit();
///                 }
///             })
///             .on_render(|_| Flow::Continue),
///     )
///     .expect("event loop failed");
/// ```
#[derive(Default)]
pub struct Callbacks<'a> {
    key: Option<Callback<'a, KeyEvent>>,
    mouse_button: Option<Callback<'a, MouseButtonEvent>>,
    mouse_move: Option<Callback<'a, MouseMoveEvent>>,
    scroll: Option<Callback<'a, ScrollEvent>>,
    resize: Option<Callback<'a, WindowResizeEvent>>,
    render: Option<RenderCallback<'a>>,
}

impl<'a> Callbacks<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_key(mut self, f: impl FnMut(&mut WindowCtx, KeyEvent) + 'a) -> Self {
        self.key = Some(Box::new(f));
        self
    }

    pub fn on_mouse_button(mut self, f: impl FnMut(&mut WindowCtx, MouseButtonEvent) + 'a) -> Self {
        self.mouse_button = Some(Box::new(f));
        self
    }

    pub fn on_mouse_move(mut self, f: impl FnMut(&mut WindowCtx, MouseMoveEvent) + 'a) -> Self {
        self.mouse_move = Some(Box::new(f));
        self
    }

    pub fn on_scroll(mut self, f: impl FnMut(&mut WindowCtx, ScrollEvent) + 'a) -> Self {
        self.scroll = Some(Box::new(f));
        self
    }

    pub fn on_resize(mut self, f: impl FnMut(&mut WindowCtx, WindowResizeEvent) + 'a) -> Self {
        self.resize = Some(Box::new(f));
        self
    }

    pub fn on_render(mut self, f: impl FnMut(&mut WindowCtx) -> Flow + 'a) -> Self {
        self.render = Some(Box::new(f));
        self
    }

    /// True if no slot is set.
    pub fn is_empty(&self) -> bool {
        self.key.is_none()
            && self.mouse_button.is_none()
            && self.mouse_move.is_none()
            && self.scroll.is_none()
            && self.resize.is_none()
            && self.render.is_none()
    }
}

impl std::fmt::Debug for Callbacks<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callbacks")
            .field("key", &self.key.is_some())
            .field("mouse_button", &self.mouse_button.is_some())
            .field("mouse_move", &self.mouse_move.is_some())
            .field("scroll", &self.scroll.is_some())
            .field("resize", &self.resize.is_some())
            .field("render", &self.render.is_some())
            .finish()
    }
}

impl EventHandler for Callbacks<'_> {
    fn on_key(&mut self, ctx: &mut WindowCtx, event: KeyEvent) {
        if let Some(f) = &mut self.key {
            f(ctx, event);
        }
    }

    fn on_mouse_button(&mut self, ctx: &mut WindowCtx, event: MouseButtonEvent) {
        if let Some(f) = &mut self.mouse_button {
            f(ctx, event);
        }
    }

    fn on_mouse_move(&mut self, ctx: &mut WindowCtx, event: MouseMoveEvent) {
        if let Some(f) = &mut self.mouse_move {
            f(ctx, event);
        }
    }

    fn on_scroll(&mut self, ctx: &mut WindowCtx, event: ScrollEvent) {
        if let Some(f) = &mut self.scroll {
            f(ctx, event);
        }
    }

    fn on_resize(&mut self, ctx: &mut WindowCtx, event: WindowResizeEvent) {
        if let Some(f) = &mut self.resize {
            f(ctx, event);
        }
    }

    fn on_render(&mut self, ctx: &mut WindowCtx) -> Flow {
        match &mut self.render {
            Some(f) => f(ctx),
            None => Flow::Continue,
        }
    }
}
