//! Light/dark theme preference shared by every view.

mod intent;
mod reducer;
mod state;
mod storage;
mod store;

pub use intent::ThemeIntent;
pub use reducer::ThemeReducer;
pub use state::{InvalidTheme, ThemeSetting};
pub use storage::{FileStorage, MemoryStorage, PreferenceStorage, StorageError};
pub use store::{SubscriptionId, ThemeStore, THEME_KEY};
