use daybook_core::store::TodoStore;

use crate::app::ThemeMode;

const TODOS_STORAGE_KEY: &str = "daybook.todos";
const THEME_STORAGE_KEY: &str = "daybook.theme";

/// Loads the persisted collection. An absent slot means an empty store; a
/// slot that fails to parse is logged and treated the same, so the session
/// keeps working in memory only.
pub fn load_store() -> TodoStore {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(TODOS_STORAGE_KEY).ok().flatten());

    if let Some(raw) = stored {
        match TodoStore::from_json(&raw) {
            Ok(store) => return store,
            Err(error) => {
                tracing::error!(
                    %error,
                    "failed parsing todos from local storage; starting empty"
                );
            }
        }
    }

    TodoStore::new()
}

/// Mirrors the snapshot into the persistence slot. Write failures (quota,
/// storage disabled) are non-fatal.
pub fn save_store(store: &TodoStore) {
    if let Some(storage) = web_sys::window().and_then(|window| window.local_storage().ok().flatten())
        && let Ok(json) = store.to_json()
    {
        let _ = storage.set_item(TODOS_STORAGE_KEY, &json);
    }
}

pub fn load_theme_mode() -> ThemeMode {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten());

    match stored.as_deref() {
        Some("night") => ThemeMode::Night,
        _ => ThemeMode::Day,
    }
}

pub fn save_theme_mode(theme: ThemeMode) {
    if let Some(storage) = web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.storage_value());
    }
}
