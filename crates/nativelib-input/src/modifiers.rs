bitflags::bitflags! {
    /// Modifier keys held while an input event occurred.
    ///
    /// The flags are independent; any combination is valid.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const CONTROL = 0b0010;
        const ALT = 0b0100;
        const COMMAND = 0b1000;
    }
}

impl Modifiers {
    pub const fn shift(&self) -> bool {
        self.contains(Self::SHIFT)
    }

    pub const fn control(&self) -> bool {
        self.contains(Self::CONTROL)
    }

    pub const fn alt(&self) -> bool {
        self.contains(Self::ALT)
    }

    /// The platform "command" key (Super / Windows key off macOS).
    pub const fn command(&self) -> bool {
        self.contains(Self::COMMAND)
    }

    pub fn from_flags(shift: bool, control: bool, alt: bool, command: bool) -> Self {
        let mut modifiers = Self::empty();
        modifiers.set(Self::SHIFT, shift);
        modifiers.set(Self::CONTROL, control);
        modifiers.set(Self::ALT, alt);
        modifiers.set(Self::COMMAND, command);
        modifiers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_are_independent() {
        let modifiers = Modifiers::from_flags(true, false, true, false);
        assert!(modifiers.shift());
        assert!(!modifiers.control());
        assert!(modifiers.alt());
        assert!(!modifiers.command());
    }

    #[test]
    fn test_default_is_empty() {
        let modifiers = Modifiers::default();
        assert!(modifiers.is_empty());
        assert!(!modifiers.shift() && !modifiers.control() && !modifiers.alt() && !modifiers.command());
    }
}
