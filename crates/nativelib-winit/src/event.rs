use glam::DVec2;
use nativelib_core::geometry::Size;
use nativelib_input::{KeyCode, Modifiers};
use winit::event::{ElementState, MouseScrollDelta, WindowEvent as WinitEvent};
use winit::keyboard::{KeyCode as WinitKeyCode, ModifiersState, NativeKeyCode, PhysicalKey};

/// Pixels scrolled per wheel "line" for devices that report line deltas.
pub const LINE_SCROLL_DELTA: f64 = 10.0;

/// A key went down or up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub pressed: bool,
    /// Generated by key auto-repeat rather than a fresh press.
    pub repeat: bool,
    pub modifiers: Modifiers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

impl MouseButton {
    /// Numeric button identifier: left is 0, right 1, middle 2.
    pub const fn index(self) -> u16 {
        match self {
            MouseButton::Left => 0,
            MouseButton::Right => 1,
            MouseButton::Middle => 2,
            MouseButton::Other(n) => n,
        }
    }
}

impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        use winit::event::MouseButton as WinitButton;
        match button {
            WinitButton::Left => MouseButton::Left,
            WinitButton::Right => MouseButton::Right,
            WinitButton::Middle => MouseButton::Middle,
            WinitButton::Back => MouseButton::Other(3),
            WinitButton::Forward => MouseButton::Other(4),
            WinitButton::Other(n) => MouseButton::Other(n),
        }
    }
}

/// A mouse button went down or up at `position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseButtonEvent {
    pub button: MouseButton,
    pub pressed: bool,
    /// Window-local logical coordinates.
    pub position: DVec2,
}

/// The cursor moved. `delta` is zero for the first move after the cursor
/// entered the window or the window regained focus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseMoveEvent {
    pub position: DVec2,
    pub delta: DVec2,
}

/// Wheel or trackpad scroll, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEvent {
    pub delta: DVec2,
}

/// The content area finished resizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowResizeEvent {
    pub size: Size<u32>,
}

/// Any event delivered to an [`EventHandler`](crate::handler::EventHandler).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Key(KeyEvent),
    MouseButton(MouseButtonEvent),
    MouseMove(MouseMoveEvent),
    Scroll(ScrollEvent),
    Resize(WindowResizeEvent),
}

impl From<KeyEvent> for Event {
    fn from(event: KeyEvent) -> Self {
        Event::Key(event)
    }
}

impl From<MouseButtonEvent> for Event {
    fn from(event: MouseButtonEvent) -> Self {
        Event::MouseButton(event)
    }
}

impl From<MouseMoveEvent> for Event {
    fn from(event: MouseMoveEvent) -> Self {
        Event::MouseMove(event)
    }
}

impl From<ScrollEvent> for Event {
    fn from(event: ScrollEvent) -> Self {
        Event::Scroll(event)
    }
}

impl From<WindowResizeEvent> for Event {
    fn from(event: WindowResizeEvent) -> Self {
        Event::Resize(event)
    }
}

/// A native notification, normalized but not yet interpreted.
///
/// The lifecycle core turns these into [`Event`]s, which may need state the
/// notification alone does not carry (cursor position, held modifiers, the
/// previous cursor position for deltas).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Notification {
    KeyDown { code: KeyCode, repeat: bool },
    KeyUp { code: KeyCode },
    ModifiersChanged(Modifiers),
    MouseDown(MouseButton),
    MouseUp(MouseButton),
    /// Cursor moved or was dragged, in logical coordinates.
    MouseMoved(DVec2),
    /// Scroll delta in pixels.
    Scroll(DVec2),
    /// Logical content size. Bursts are coalesced into one resize event.
    Resized(Size<u32>),
    Focused(bool),
    CursorEntered,
    CursorLeft,
    CloseRequested,
}

impl Notification {
    /// Normalize a winit window event.
    ///
    /// Returns `None` for events this crate does not model; callers drop those.
    pub fn from_winit(event: WinitEvent, scale_factor: f64) -> Option<Self> {
        match event {
            WinitEvent::KeyboardInput {
                event, is_synthetic, ..
            } => Self::from_key(event.physical_key, event.state, event.repeat, is_synthetic),
            WinitEvent::ModifiersChanged(modifiers) => {
                Some(Notification::ModifiersChanged(modifiers_from_winit(modifiers.state())))
            }
            WinitEvent::MouseInput { state, button, .. } => Some(match state {
                ElementState::Pressed => Notification::MouseDown(button.into()),
                ElementState::Released => Notification::MouseUp(button.into()),
            }),
            WinitEvent::CursorMoved { position, .. } => Some(Notification::MouseMoved(DVec2::new(
                position.x / scale_factor,
                position.y / scale_factor,
            ))),
            WinitEvent::MouseWheel { delta, .. } => Some(Notification::Scroll(match delta {
                MouseScrollDelta::LineDelta(x, y) => {
                    DVec2::new(x as f64, y as f64) * LINE_SCROLL_DELTA
                }
                MouseScrollDelta::PixelDelta(delta) => {
                    DVec2::new(delta.x / scale_factor, delta.y / scale_factor)
                }
            })),
            WinitEvent::Resized(size) => Some(Notification::Resized(Size::from_physical(
                size.width,
                size.height,
                scale_factor,
            ))),
            WinitEvent::Focused(focused) => Some(Notification::Focused(focused)),
            WinitEvent::CursorEntered { .. } => Some(Notification::CursorEntered),
            WinitEvent::CursorLeft { .. } => Some(Notification::CursorLeft),
            WinitEvent::CloseRequested => Some(Notification::CloseRequested),
            _ => None,
        }
    }

    /// Normalize one keyboard event.
    ///
    /// Synthetic presses (keys already held when focus arrives) are dropped.
    /// Synthetic releases are kept: some platforms report the release of a
    /// key held while focus is lost only this way.
    pub fn from_key(
        key: PhysicalKey,
        state: ElementState,
        repeat: bool,
        is_synthetic: bool,
    ) -> Option<Self> {
        let code = key_code_from_winit(key)?;
        match state {
            ElementState::Pressed if is_synthetic => None,
            ElementState::Pressed => Some(Notification::KeyDown { code, repeat }),
            ElementState::Released => Some(Notification::KeyUp { code }),
        }
    }
}

fn modifiers_from_winit(state: ModifiersState) -> Modifiers {
    Modifiers::from_flags(
        state.shift_key(),
        state.control_key(),
        state.alt_key(),
        state.super_key(),
    )
}

/// Translate a winit physical key into the raw key-code space.
///
/// Keys without a named constant are dropped unless the platform handed us
/// its own native code.
pub fn key_code_from_winit(key: PhysicalKey) -> Option<KeyCode> {
    let code = match key {
        PhysicalKey::Code(code) => code,
        PhysicalKey::Unidentified(NativeKeyCode::MacOS(raw)) => return Some(KeyCode(raw)),
        PhysicalKey::Unidentified(_) => return None,
    };

    Some(match code {
        WinitKeyCode::KeyA => KeyCode::A,
        WinitKeyCode::KeyB => KeyCode::B,
        WinitKeyCode::KeyC => KeyCode::C,
        WinitKeyCode::KeyD => KeyCode::D,
        WinitKeyCode::KeyE => KeyCode::E,
        WinitKeyCode::KeyF => KeyCode::F,
        WinitKeyCode::KeyG => KeyCode::G,
        WinitKeyCode::KeyH => KeyCode::H,
        WinitKeyCode::KeyI => KeyCode::I,
        WinitKeyCode::KeyJ => KeyCode::J,
        WinitKeyCode::KeyK => KeyCode::K,
        WinitKeyCode::KeyL => KeyCode::L,
        WinitKeyCode::KeyM => KeyCode::M,
        WinitKeyCode::KeyN => KeyCode::N,
        WinitKeyCode::KeyO => KeyCode::O,
        WinitKeyCode::KeyP => KeyCode::P,
        WinitKeyCode::KeyQ => KeyCode::Q,
        WinitKeyCode::KeyR => KeyCode::R,
        WinitKeyCode::KeyS => KeyCode::S,
        WinitKeyCode::KeyT => KeyCode::T,
        WinitKeyCode::KeyU => KeyCode::U,
        WinitKeyCode::KeyV => KeyCode::V,
        WinitKeyCode::KeyW => KeyCode::W,
        WinitKeyCode::KeyX => KeyCode::X,
        WinitKeyCode::KeyY => KeyCode::Y,
        WinitKeyCode::KeyZ => KeyCode::Z,
        WinitKeyCode::Digit0 => KeyCode::DIGIT_0,
        WinitKeyCode::Digit1 => KeyCode::DIGIT_1,
        WinitKeyCode::Digit2 => KeyCode::DIGIT_2,
        WinitKeyCode::Digit3 => KeyCode::DIGIT_3,
        WinitKeyCode::Digit4 => KeyCode::DIGIT_4,
        WinitKeyCode::Digit5 => KeyCode::DIGIT_5,
        WinitKeyCode::Digit6 => KeyCode::DIGIT_6,
        WinitKeyCode::Digit7 => KeyCode::DIGIT_7,
        WinitKeyCode::Digit8 => KeyCode::DIGIT_8,
        WinitKeyCode::Digit9 => KeyCode::DIGIT_9,
        WinitKeyCode::Space => KeyCode::SPACE,
        WinitKeyCode::Enter | WinitKeyCode::NumpadEnter => KeyCode::RETURN,
        WinitKeyCode::Escape => KeyCode::ESCAPE,
        WinitKeyCode::Backspace => KeyCode::DELETE,
        WinitKeyCode::Delete => KeyCode::FORWARD_DELETE,
        WinitKeyCode::Tab => KeyCode::TAB,
        WinitKeyCode::ArrowLeft => KeyCode::LEFT,
        WinitKeyCode::ArrowRight => KeyCode::RIGHT,
        WinitKeyCode::ArrowUp => KeyCode::UP,
        WinitKeyCode::ArrowDown => KeyCode::DOWN,
        WinitKeyCode::ShiftLeft | WinitKeyCode::ShiftRight => KeyCode::SHIFT,
        WinitKeyCode::ControlLeft | WinitKeyCode::ControlRight => KeyCode::CONTROL,
        WinitKeyCode::AltLeft | WinitKeyCode::AltRight => KeyCode::OPTION,
        WinitKeyCode::SuperLeft | WinitKeyCode::SuperRight => KeyCode::COMMAND,
        _ => return None,
    })
}
