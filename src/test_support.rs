//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use tempfile::TempDir;

use crate::core::list_model::ListModel;
use crate::core::mode::Mode;
use crate::core::state::App;
use crate::core::store::Store;

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// A store rooted in a fresh temp dir. Keep the `TempDir` alive.
pub fn temp_store() -> (TempDir, Store) {
    let dir = TempDir::new().expect("temp dir");
    let store = Store::new(dir.path());
    (dir, store)
}

/// A model in Allowed mode over the given lists. Empty lists are not
/// written, so their files start out missing.
pub fn temp_model(allowed: &[&str], blacklist: &[&str]) -> (TempDir, ListModel) {
    let (dir, store) = temp_store();
    if !allowed.is_empty() {
        store.save(Mode::Allowed, &strings(allowed)).expect("seed allowed");
    }
    if !blacklist.is_empty() {
        store
            .save(Mode::Blacklist, &strings(blacklist))
            .expect("seed blacklist");
    }
    (dir, ListModel::new(store, Mode::Allowed))
}

pub fn temp_app(allowed: &[&str], blacklist: &[&str]) -> (TempDir, App) {
    let (dir, model) = temp_model(allowed, blacklist);
    (dir, App::new(model))
}
