use serde::{Deserialize, Serialize};

/// Keymap scope. The converter is a single-screen app, so one mode covers
/// it; the indirection keeps keybindings and styles addressable per screen.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Home,
}
