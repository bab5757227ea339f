use std::fmt;

/// A raw key code.
///
/// Values are macOS virtual key codes (`kVK_*`). They are passed through
/// unchanged, so any code the platform reports can be stored even if it has
/// no named constant here.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyCode(pub u16);

impl KeyCode {
    pub const A: Self = Self(0x00);
    pub const S: Self = Self(0x01);
    pub const D: Self = Self(0x02);
    pub const F: Self = Self(0x03);
    pub const H: Self = Self(0x04);
    pub const G: Self = Self(0x05);
    pub const Z: Self = Self(0x06);
    pub const X: Self = Self(0x07);
    pub const C: Self = Self(0x08);
    pub const V: Self = Self(0x09);
    pub const B: Self = Self(0x0B);
    pub const Q: Self = Self(0x0C);
    pub const W: Self = Self(0x0D);
    pub const E: Self = Self(0x0E);
    pub const R: Self = Self(0x0F);
    pub const Y: Self = Self(0x10);
    pub const T: Self = Self(0x11);
    pub const DIGIT_1: Self = Self(0x12);
    pub const DIGIT_2: Self = Self(0x13);
    pub const DIGIT_3: Self = Self(0x14);
    pub const DIGIT_4: Self = Self(0x15);
    pub const DIGIT_6: Self = Self(0x16);
    pub const DIGIT_5: Self = Self(0x17);
    pub const DIGIT_9: Self = Self(0x19);
    pub const DIGIT_7: Self = Self(0x1A);
    pub const DIGIT_8: Self = Self(0x1C);
    pub const DIGIT_0: Self = Self(0x1D);
    pub const O: Self = Self(0x1F);
    pub const U: Self = Self(0x20);
    pub const I: Self = Self(0x22);
    pub const P: Self = Self(0x23);
    pub const RETURN: Self = Self(0x24);
    pub const L: Self = Self(0x25);
    pub const J: Self = Self(0x26);
    pub const K: Self = Self(0x28);
    pub const N: Self = Self(0x2D);
    pub const M: Self = Self(0x2E);
    pub const TAB: Self = Self(0x30);
    pub const SPACE: Self = Self(0x31);
    /// Backspace.
    pub const DELETE: Self = Self(0x33);
    pub const ESCAPE: Self = Self(0x35);
    pub const COMMAND: Self = Self(0x37);
    pub const SHIFT: Self = Self(0x38);
    pub const OPTION: Self = Self(0x3A);
    pub const CONTROL: Self = Self(0x3B);
    pub const FORWARD_DELETE: Self = Self(0x75);
    pub const LEFT: Self = Self(0x7B);
    pub const RIGHT: Self = Self(0x7C);
    pub const DOWN: Self = Self(0x7D);
    pub const UP: Self = Self(0x7E);

    const NAMES: &'static [(KeyCode, &'static str)] = &[
        (Self::A, "A"),
        (Self::B, "B"),
        (Self::C, "C"),
        (Self::D, "D"),
        (Self::E, "E"),
        (Self::F, "F"),
        (Self::G, "G"),
        (Self::H, "H"),
        (Self::I, "I"),
        (Self::J, "J"),
        (Self::K, "K"),
        (Self::L, "L"),
        (Self::M, "M"),
        (Self::N, "N"),
        (Self::O, "O"),
        (Self::P, "P"),
        (Self::Q, "Q"),
        (Self::R, "R"),
        (Self::S, "S"),
        (Self::T, "T"),
        (Self::U, "U"),
        (Self::V, "V"),
        (Self::W, "W"),
        (Self::X, "X"),
        (Self::Y, "Y"),
        (Self::Z, "Z"),
        (Self::DIGIT_0, "0"),
        (Self::DIGIT_1, "1"),
        (Self::DIGIT_2, "2"),
        (Self::DIGIT_3, "3"),
        (Self::DIGIT_4, "4"),
        (Self::DIGIT_5, "5"),
        (Self::DIGIT_6, "6"),
        (Self::DIGIT_7, "7"),
        (Self::DIGIT_8, "8"),
        (Self::DIGIT_9, "9"),
        (Self::RETURN, "Return"),
        (Self::TAB, "Tab"),
        (Self::SPACE, "Space"),
        (Self::DELETE, "Delete"),
        (Self::ESCAPE, "Escape"),
        (Self::COMMAND, "Command"),
        (Self::SHIFT, "Shift"),
        (Self::OPTION, "Option"),
        (Self::CONTROL, "Control"),
        (Self::FORWARD_DELETE, "ForwardDelete"),
        (Self::LEFT, "Left"),
        (Self::RIGHT, "Right"),
        (Self::DOWN, "Down"),
        (Self::UP, "Up"),
    ];

    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Human readable name, if this is one of the named constants.
    pub fn name(self) -> Option<&'static str> {
        Self::NAMES
            .iter()
            .find(|(code, _)| *code == self)
            .map(|(_, name)| *name)
    }
}

impl From<u16> for KeyCode {
    fn from(raw: u16) -> Self {
        KeyCode(raw)
    }
}

impl fmt::Debug for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "KeyCode::{name}({:#04x})", self.0),
            None => write!(f, "KeyCode({:#04x})", self.0),
        }
    }
}
