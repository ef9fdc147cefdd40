//! # List Model
//!
//! Index-based CRUD over whichever list is current, plus the transfer of an
//! item to the other list.
//!
//! There is no cache: every operation re-reads the document from the
//! [`Store`], mutates the fresh copy and persists it before returning. The
//! model owns the choice of current [`Mode`] but never touches the
//! selection; callers re-clamp it after each mutation.
//!
//! Mutations return `Ok(false)` for silent rejections (index out of range,
//! duplicate add) and `Err` only when a write fails.

use log::{debug, info};

use crate::core::mode::Mode;
use crate::core::store::{Store, StoreError};

#[derive(Debug, Clone)]
pub struct ListModel {
    store: Store,
    mode: Mode,
}

impl ListModel {
    pub fn new(store: Store, mode: Mode) -> Self {
        Self { store, mode }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        debug!("Mode {} -> {}", self.mode, mode);
        self.mode = mode;
    }

    /// Switch to the other list and return the new mode.
    pub fn toggle_mode(&mut self) -> Mode {
        self.set_mode(self.mode.other());
        self.mode
    }

    /// Fresh, sorted copy of the current list.
    pub fn current(&self) -> Vec<String> {
        self.store.load(self.mode)
    }

    pub fn len(&self) -> usize {
        self.current().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn delete_at(&self, index: usize) -> Result<bool, StoreError> {
        let mut items = self.current();
        if index >= items.len() {
            return Ok(false);
        }
        let removed = items.remove(index);
        self.store.save(self.mode, &items)?;
        info!("Deleted '{}' from {}", removed, self.mode);
        Ok(true)
    }

    /// Replace the item at `index`. The new value is not checked for
    /// blankness or for clashes with its siblings.
    pub fn edit_at(&self, index: usize, new_value: &str) -> Result<bool, StoreError> {
        let mut items = self.current();
        let Some(slot) = items.get_mut(index) else {
            return Ok(false);
        };
        let old = std::mem::replace(slot, new_value.to_string());
        self.store.save(self.mode, &items)?;
        info!("Edited {} rule '{}' -> '{}'", self.mode, old, new_value);
        Ok(true)
    }

    /// Append `value` unless it is already present (exact, case-sensitive).
    pub fn add(&self, value: &str) -> Result<bool, StoreError> {
        let mut items = self.current();
        if items.iter().any(|item| item == value) {
            debug!("'{}' already in {}, not adding", value, self.mode);
            return Ok(false);
        }
        items.push(value.to_string());
        self.store.save(self.mode, &items)?;
        info!("Added '{}' to {}", value, self.mode);
        Ok(true)
    }

    /// Move the item at `index` to the other list.
    ///
    /// Two independent writes: the source list is saved without the item
    /// first, then the destination gains it (skipped if already present).
    /// A failure between the two writes loses the item from both lists.
    pub fn move_to_other_list(&self, index: usize) -> Result<bool, StoreError> {
        let source = self.mode;
        let target = source.other();

        let mut items = self.store.load(source);
        if index >= items.len() {
            return Ok(false);
        }
        let item = items.remove(index);
        self.store.save(source, &items)?;

        let mut others = self.store.load(target);
        if !others.contains(&item) {
            others.push(item.clone());
            self.store.save(target, &others)?;
        }
        info!("Moved '{}' from {} to {}", item, source, target);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{strings, temp_model};
    use std::fs;

    #[test]
    fn test_current_follows_mode() {
        let (_dir, mut model) = temp_model(&["git"], &["curl"]);
        assert_eq!(model.current(), strings(&["git"]));
        assert_eq!(model.toggle_mode(), Mode::Blacklist);
        assert_eq!(model.current(), strings(&["curl"]));
    }

    #[test]
    fn test_current_sees_external_edits() {
        let (_dir, model) = temp_model(&["git"], &[]);
        fs::write(
            model.store().path(Mode::Allowed),
            r#"{"permissions":{"allow":["edited"]}}"#,
        )
        .unwrap();
        assert_eq!(model.current(), strings(&["edited"]));
    }

    #[test]
    fn test_delete_at() {
        let (_dir, model) = temp_model(&["a", "b", "c"], &[]);
        assert!(model.delete_at(1).unwrap());
        assert_eq!(model.current(), strings(&["a", "c"]));
    }

    #[test]
    fn test_delete_out_of_range_leaves_file_untouched() {
        let (_dir, model) = temp_model(&["a", "b"], &[]);
        let path = model.store().path(Mode::Allowed);
        let before = fs::read(&path).unwrap();
        assert!(!model.delete_at(2).unwrap());
        assert!(!model.delete_at(usize::MAX).unwrap());
        assert_eq!(fs::read(&path).unwrap(), before);
    }

    #[test]
    fn test_edit_at_replaces_and_resorts() {
        let (_dir, model) = temp_model(&["a", "m"], &[]);
        assert!(model.edit_at(0, "z").unwrap());
        assert_eq!(model.current(), strings(&["m", "z"]));
    }

    #[test]
    fn test_edit_at_allows_sibling_duplicate() {
        let (_dir, model) = temp_model(&["a", "b"], &[]);
        assert!(model.edit_at(0, "b").unwrap());
        assert_eq!(model.current(), strings(&["b", "b"]));
    }

    #[test]
    fn test_edit_out_of_range_leaves_file_untouched() {
        let (_dir, model) = temp_model(&["a"], &[]);
        let path = model.store().path(Mode::Allowed);
        let before = fs::read(&path).unwrap();
        assert!(!model.edit_at(1, "x").unwrap());
        assert_eq!(fs::read(&path).unwrap(), before);
    }

    #[test]
    fn test_add_rejects_duplicate() {
        let (_dir, model) = temp_model(&[], &[]);
        assert!(model.add("git").unwrap());
        assert!(!model.add("git").unwrap());
        assert_eq!(model.current(), strings(&["git"]));
    }

    #[test]
    fn test_add_is_case_sensitive() {
        let (_dir, model) = temp_model(&["git"], &[]);
        assert!(model.add("Git").unwrap());
        assert_eq!(model.len(), 2);
    }

    #[test]
    fn test_move_to_blacklist() {
        let (_dir, model) = temp_model(&["x", "y"], &[]);
        assert!(model.move_to_other_list(0).unwrap());
        assert_eq!(model.store().load(Mode::Allowed), strings(&["y"]));
        assert_eq!(model.store().load(Mode::Blacklist), strings(&["x"]));
    }

    #[test]
    fn test_move_from_blacklist_back() {
        let (_dir, mut model) = temp_model(&["a"], &["b"]);
        model.set_mode(Mode::Blacklist);
        assert!(model.move_to_other_list(0).unwrap());
        assert_eq!(model.store().load(Mode::Allowed), strings(&["a", "b"]));
        assert!(model.store().load(Mode::Blacklist).is_empty());
    }

    #[test]
    fn test_move_when_already_in_target_only_removes() {
        let (_dir, model) = temp_model(&["x"], &["x"]);
        let target = model.store().path(Mode::Blacklist);
        let before = fs::read(&target).unwrap();
        assert!(model.move_to_other_list(0).unwrap());
        assert!(model.store().load(Mode::Allowed).is_empty());
        assert_eq!(fs::read(&target).unwrap(), before);
    }

    #[test]
    fn test_move_out_of_range() {
        let (_dir, model) = temp_model(&["x"], &[]);
        assert!(!model.move_to_other_list(1).unwrap());
        assert_eq!(model.store().load(Mode::Allowed), strings(&["x"]));
        assert!(!model.store().path(Mode::Blacklist).exists());
    }
}
