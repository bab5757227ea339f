use ahash::AHashSet;

use crate::KeyCode;

/// Current pressed state of every key seen so far.
///
/// Codes that were never reported are implicitly released. Entries are only
/// changed through [`KeyStateTable::update`], which the window's dispatcher
/// calls before handing a key event to user code.
#[derive(Debug, Default, Clone)]
pub struct KeyStateTable {
    pressed: AHashSet<KeyCode>,
}

impl KeyStateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, code: KeyCode, pressed: bool) {
        if pressed {
            self.pressed.insert(code);
        } else {
            self.pressed.remove(&code);
        }
    }

    pub fn is_pressed(&self, code: KeyCode) -> bool {
        self.pressed.contains(&code)
    }

    /// Keys currently held, in no particular order.
    pub fn pressed(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.pressed.iter().copied()
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.pressed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pressed.is_empty()
    }
}
