//! Injectable theme store with subscribe/notify semantics.
//!
//! The store owns the active [`ThemeSetting`], restores it from storage on
//! construction and persists every change. Storage failures never reach the
//! caller: the in-memory value keeps working for the rest of the session.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, ReentrantMutex};

use crate::ui::mvi::Reducer;
use crate::ui::theme::intent::ThemeIntent;
use crate::ui::theme::reducer::ThemeReducer;
use crate::ui::theme::state::ThemeSetting;
use crate::ui::theme::storage::PreferenceStorage;

/// Storage key holding the serialized theme.
pub const THEME_KEY: &str = "theme";

type Listener = Arc<dyn Fn(ThemeSetting) + Send + Sync>;

/// Handle returned by [`ThemeStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct ThemeStore<S: PreferenceStorage> {
    storage: S,
    current: Mutex<ThemeSetting>,
    /// Held from transition through notification so writes land in order.
    /// Reentrant so a listener may dispatch again.
    write_guard: ReentrantMutex<()>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_id: AtomicU64,
}

impl<S: PreferenceStorage> ThemeStore<S> {
    /// Create a store, adopting the persisted theme when it is valid.
    ///
    /// Otherwise the default (`dark`) is adopted and written back right away
    /// so the next load is deterministic.
    pub fn new(storage: S) -> Self {
        let initial = restore(&storage);
        Self {
            storage,
            current: Mutex::new(initial),
            write_guard: ReentrantMutex::new(()),
            listeners: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Current theme. Never fails.
    pub fn theme(&self) -> ThemeSetting {
        *self.current.lock()
    }

    /// Flip light ↔ dark, persist, notify. Returns the new theme.
    pub fn toggle(&self) -> ThemeSetting {
        self.dispatch(ThemeIntent::Toggle)
    }

    /// Apply `setting`. Persists and notifies only when it changes the theme.
    pub fn set(&self, setting: ThemeSetting) -> ThemeSetting {
        self.dispatch(ThemeIntent::Set(setting))
    }

    pub fn dispatch(&self, intent: ThemeIntent) -> ThemeSetting {
        let _write = self.write_guard.lock();
        let (previous, next) = {
            let mut current = self.current.lock();
            let previous = *current;
            *current = ThemeReducer::reduce(previous, intent);
            (previous, *current)
        };

        if previous == next {
            return next;
        }

        tracing::info!("Theme changed: {} -> {}", previous, next);
        persist(&self.storage, next);
        self.notify(next);
        next
    }

    /// Register `listener`; it runs synchronously after every change.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(ThemeSetting) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners.lock().push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.lock().len()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn notify(&self, setting: ThemeSetting) {
        // Snapshot so listeners may call back into the store.
        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener(setting);
        }
    }
}

fn restore<S: PreferenceStorage>(storage: &S) -> ThemeSetting {
    match storage.read(THEME_KEY) {
        Ok(Some(raw)) => match raw.parse::<ThemeSetting>() {
            Ok(setting) => {
                tracing::debug!("Restored theme '{}'", setting);
                return setting;
            }
            Err(e) => tracing::warn!("Ignoring stored theme: {}", e),
        },
        Ok(None) => {}
        Err(e) => tracing::warn!("Theme storage unavailable, using default: {}", e),
    }

    let setting = ThemeSetting::default();
    persist(storage, setting);
    setting
}

fn persist<S: PreferenceStorage>(storage: &S, setting: ThemeSetting) {
    if let Err(e) = storage.write(THEME_KEY, setting.as_str()) {
        tracing::warn!("Failed to persist theme '{}': {}", setting, e);
    }
}
