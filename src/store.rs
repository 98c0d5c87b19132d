//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The material
//! catalog lives here rather than in the results screen so generated and
//! enhanced materials survive navigation.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog;
use crate::mock_data;
use crate::models::{Material, Toast, ToastKind};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Catalog shown on the results screen, newest first
    pub materials: Vec<Material>,
    /// Materials with an image enhancement in flight
    pub enhancing_ids: Vec<String>,
    /// A new material is being generated
    pub generating: bool,
    /// Visible notifications, oldest first
    pub toasts: Vec<Toast>,
    /// Last toast id handed out
    pub last_toast_id: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            materials: mock_data::materials(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Swap a material's image. Returns false if the id is unknown.
pub fn store_replace_image(store: &AppStore, material_id: &str, image_url: String) -> bool {
    catalog::replace_image(&mut store.materials().write(), material_id, image_url)
}

/// Put a generated material at the top of the catalog
pub fn store_prepend_material(store: &AppStore, material: Material) {
    catalog::prepend(&mut store.materials().write(), material);
}

/// Mark or unmark a material as being enhanced. Returns false when asked to
/// mark one that is already in flight.
pub fn store_set_enhancing(store: &AppStore, material_id: &str, active: bool) -> bool {
    let field = store.enhancing_ids();
    let mut ids = field.write();
    if active {
        if ids.iter().any(|id| id == material_id) {
            return false;
        }
        ids.push(material_id.to_string());
    } else {
        ids.retain(|id| id != material_id);
    }
    true
}

pub fn store_set_generating(store: &AppStore, active: bool) {
    *store.generating().write() = active;
}

/// Add a notification and return its id
pub fn store_push_toast(store: &AppStore, kind: ToastKind, message: impl Into<String>) -> u32 {
    let id = {
        let field = store.last_toast_id();
        let mut last = field.write();
        *last += 1;
        *last
    };
    store.toasts().write().push(Toast {
        id,
        kind,
        message: message.into(),
    });
    id
}

pub fn store_dismiss_toast(store: &AppStore, toast_id: u32) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_holds_mock_catalog() {
        let state = AppState::new();
        assert_eq!(state.materials, mock_data::materials());
        assert!(state.enhancing_ids.is_empty());
        assert!(!state.generating);
        assert!(state.toasts.is_empty());
    }

    fn test_store() -> AppStore {
        let owner = Owner::new();
        owner.set();
        // Keep the owner alive for the rest of the test so the store isn't disposed
        std::mem::forget(owner);
        Store::new(AppState::new())
    }

    #[test]
    fn test_enhancing_rejects_duplicate_requests() {
        let store = test_store();
        assert!(store_set_enhancing(&store, "m1", true));
        assert!(!store_set_enhancing(&store, "m1", true));
        assert_eq!(store.enhancing_ids().get_untracked(), vec!["m1".to_string()]);

        assert!(store_set_enhancing(&store, "m1", false));
        assert!(store.enhancing_ids().get_untracked().is_empty());
    }

    #[test]
    fn test_toast_ids_increase_and_dismiss() {
        let store = test_store();
        let first = store_push_toast(&store, ToastKind::Info, "one");
        let second = store_push_toast(&store, ToastKind::Error, "two");
        assert_eq!((first, second), (1, 2));

        store_dismiss_toast(&store, first);
        let toasts = store.toasts().get_untracked();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message, "two");
    }
}
