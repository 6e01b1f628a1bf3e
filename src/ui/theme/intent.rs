use crate::ui::mvi::Intent;
use crate::ui::theme::state::ThemeSetting;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeIntent {
    /// Flip light ↔ dark.
    Toggle,
    /// Apply an explicit setting. A no-op when it is already active.
    Set(ThemeSetting),
}

impl Intent for ThemeIntent {}
