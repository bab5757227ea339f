//! Keyboard input primitives.
//!
//! Key codes live in a single raw code space (the macOS virtual key-code
//! space); backends translate their native keys into it so the named
//! constants on [`KeyCode`] mean the same thing everywhere.

mod key;
mod modifiers;
mod state;

pub use key::KeyCode;
pub use modifiers::Modifiers;
pub use state::KeyStateTable;
