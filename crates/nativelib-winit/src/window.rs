use glam::DVec2;
use nativelib_core::geometry::Size;
use nativelib_input::KeyCode;
use raw_window_handle::{
    DisplayHandle, HandleError, HasDisplayHandle, HasWindowHandle, RawDisplayHandle,
    RawWindowHandle, WindowHandle,
};
use winit::dpi::LogicalSize;
use winit::error::EventLoopError;
use winit::event_loop::EventLoop;
use winit::platform::run_on_demand::EventLoopExtRunOnDemand;
pub use winit::window::Window as WinitWindow;

use crate::app::LoopDriver;
use crate::error::InitError;
use crate::handler::EventHandler;
use crate::lifecycle::{ExitReason, WindowState};
use crate::time::FrameTimer;

pub struct WindowDescriptor {
    pub title: String,
    /// Content size in logical pixels. Both dimensions must be non-zero.
    pub size: Size<u32>,
    pub resizable: bool,
    /// Show the window as soon as it is constructed.
    pub visible: bool,
    /// Render rate in Hz. `None` follows the monitor's refresh rate.
    pub frame_rate: Option<u32>,
}

impl Default for WindowDescriptor {
    fn default() -> Self {
        Self {
            title: "NativeLib Window".to_string(),
            size: Size::new(800, 600),
            resizable: true,
            visible: false,
            frame_rate: None,
        }
    }
}

/// Raw handles a GPU backend needs to create a presentation surface.
///
/// Valid only while the [`Window`] that produced them is alive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHandle {
    pub window: RawWindowHandle,
    pub display: RawDisplayHandle,
}

/// The drawing surface backing the window's content area.
#[derive(Debug)]
struct Surface {
    handle: SurfaceHandle,
}

impl Surface {
    fn acquire(window: &WinitWindow) -> Result<Self, HandleError> {
        let handle = SurfaceHandle {
            window: window.window_handle()?.as_raw(),
            display: window.display_handle()?.as_raw(),
        };
        Ok(Self { handle })
    }
}

/// Native resources owned by a window.
///
/// Fields are declared in release order: the frame timer goes first, then
/// the drawing surface, then the native window.
#[derive(Debug)]
struct NativeResources {
    timer: FrameTimer,
    surface: Surface,
    window: WinitWindow,
}

impl Drop for NativeResources {
    fn drop(&mut self) {
        tracing::debug!(window = ?self.window.id(), "releasing native window resources");
    }
}

/// A native window with its own event loop.
///
/// Only one window (and one event loop) can exist per process.
///
/// `run` borrows the window mutably, so a window can never be dropped while
/// its loop is running. Calling any method from a thread other than the one
/// that created the window is unsupported.
pub struct Window {
    native: NativeResources,
    state: WindowState,
    event_loop: EventLoop<()>,
}

impl Window {
    /// Create a hidden window with the given content size and title.
    pub fn new(width: u32, height: u32, title: impl Into<String>) -> Result<Self, InitError> {
        Self::with_descriptor(WindowDescriptor {
            title: title.into(),
            size: Size::new(width, height),
            ..Default::default()
        })
    }

    pub fn with_descriptor(descriptor: WindowDescriptor) -> Result<Self, InitError> {
        if descriptor.size.is_empty() {
            return Err(InitError::InvalidSize {
                size: descriptor.size,
            });
        }

        let event_loop = EventLoop::new()?;

        let attributes = WinitWindow::default_attributes()
            .with_title(descriptor.title.as_str())
            .with_inner_size(LogicalSize::new(descriptor.size.width, descriptor.size.height))
            .with_resizable(descriptor.resizable)
            .with_visible(false);

        // The window has to exist before the loop runs so its handles can be
        // handed out right after construction.
        #[allow(deprecated)]
        let window = event_loop.create_window(attributes)?;
        let surface = Surface::acquire(&window)?;

        let timer = match descriptor.frame_rate {
            Some(hz) => FrameTimer::from_refresh_rate_millihertz(hz.saturating_mul(1000)),
            None => window
                .current_monitor()
                .and_then(|monitor| monitor.refresh_rate_millihertz())
                .map(FrameTimer::from_refresh_rate_millihertz)
                .unwrap_or_default(),
        };

        tracing::debug!(
            title = %descriptor.title,
            size = %descriptor.size,
            frame_interval = ?timer.interval(),
            "window created"
        );

        let mut window = Self {
            native: NativeResources {
                timer,
                surface,
                window,
            },
            state: WindowState::new(descriptor.size),
            event_loop,
        };

        if descriptor.visible {
            window.show();
        }

        Ok(window)
    }

    /// Make the window visible. Does nothing if it already is.
    pub fn show(&mut self) {
        if self.state.is_visible() {
            return;
        }
        self.native.window.set_visible(true);
        self.state.set_visible(true);
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    /// Content size in logical pixels, as of the last resize event.
    pub fn size(&self) -> Size<u32> {
        self.state.size()
    }

    /// Last observed cursor position, `(0, 0)` before the first move.
    pub fn mouse_position(&self) -> DVec2 {
        self.state.mouse_position()
    }

    pub fn is_key_pressed(&self, code: KeyCode) -> bool {
        self.state.is_key_pressed(code)
    }

    /// Ask the next (or current) run loop to stop at its next iteration.
    pub fn quit(&mut self) {
        self.state.quit();
    }

    pub fn native_handle(&self) -> RawWindowHandle {
        self.native.surface.handle.window
    }

    pub fn surface_handle(&self) -> SurfaceHandle {
        self.native.surface.handle
    }

    pub fn winit_window(&self) -> &WinitWindow {
        &self.native.window
    }

    /// Run the event loop until the handler stops it, `quit` is called or the
    /// user closes the window.
    ///
    /// Blocks the calling thread. The window can be run again afterwards.
    pub fn run<H: EventHandler>(&mut self, mut handler: H) -> Result<ExitReason, EventLoopError> {
        let Self {
            native,
            state,
            event_loop,
        } = self;

        state.begin_run();
        let mut driver = LoopDriver::new(&native.window, &mut native.timer, state, &mut handler);
        let result = event_loop.run_app_on_demand(&mut driver);
        native.timer.stop();

        let reason = state.end_run();
        result?;
        // The loop only returns after one of the exit paths fired.
        Ok(reason.unwrap_or(ExitReason::Quit))
    }
}

impl HasWindowHandle for Window {
    fn window_handle(&self) -> Result<WindowHandle<'_>, HandleError> {
        self.native.window.window_handle()
    }
}

impl HasDisplayHandle for Window {
    fn display_handle(&self) -> Result<DisplayHandle<'_>, HandleError> {
        self.native.window.display_handle()
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        tracing::debug!("destroying window");
    }
}
