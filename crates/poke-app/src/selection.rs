//! Selection synchronizer
//!
//! Keeps three views of "which entity is selected" consistent: the
//! `?pokemon=` URL parameter ([`Location`]), the in-memory selected name,
//! and the caller's need to (re)trigger a similarity query. After any
//! operation settles, the URL parameter and the in-memory selection never
//! name two different entities.

use tracing::debug;

use poke_core::Pokemon;

use crate::location::Location;

/// What an operation did, so the caller knows whether to query or clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// A (new) entity is selected; a query should be triggered.
    Changed,
    /// Selection became none; displayed results should be cleared.
    Cleared,
    /// Nothing moved; no side effects are warranted.
    Unchanged,
}

pub struct SelectionSynchronizer {
    selected: Option<String>,
    location: Location,
}

impl SelectionSynchronizer {
    pub fn new(location: Location) -> Self {
        Self {
            selected: None,
            location,
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Select a catalog entity by name, pushing it into the URL.
    ///
    /// A name not present in `roster` behaves as [`Self::clear`]: the
    /// invariant is that selection never points at an entity the session
    /// does not know.
    pub fn select_by_name(&mut self, name: &str, roster: &[Pokemon]) -> SelectionChange {
        if !roster.iter().any(|p| p.name == name) {
            debug!("Selection of unknown entity {:?} treated as clear", name);
            return self.clear();
        }
        if self.selected.as_deref() == Some(name) {
            return SelectionChange::Unchanged;
        }
        self.selected = Some(name.to_string());
        self.location.navigate(Some(name));
        SelectionChange::Changed
    }

    /// Drop the selection and remove the URL parameter.
    pub fn clear(&mut self) -> SelectionChange {
        if self.selected.is_none() && self.location.current().is_none() {
            return SelectionChange::Unchanged;
        }
        self.selected = None;
        self.location.navigate(None);
        SelectionChange::Cleared
    }

    /// Adopt whatever the current URL entry says.
    ///
    /// A known name that differs from the current selection is adopted
    /// (query warranted); an absent or unknown name clears the selection.
    /// Idempotent: reconciling twice against the same URL reports
    /// `Unchanged` the second time and performs no further navigation.
    pub fn reconcile_from_url(&mut self, roster: &[Pokemon]) -> SelectionChange {
        match self.location.current() {
            Some(name) if roster.iter().any(|p| p.name == name) => {
                if self.selected.as_deref() == Some(name) {
                    SelectionChange::Unchanged
                } else {
                    self.selected = Some(name.to_string());
                    SelectionChange::Changed
                }
            }
            other => {
                // Unknown entity in the URL is not an error, just "none".
                if let Some(name) = other {
                    debug!("URL names unknown entity {:?}; selection is none", name);
                }
                if self.selected.is_none() {
                    SelectionChange::Unchanged
                } else {
                    self.selected = None;
                    SelectionChange::Cleared
                }
            }
        }
    }

    /// Adopt an externally supplied query string (opened share link) and
    /// reconcile against it in place.
    pub fn open_query(&mut self, query: &str, roster: &[Pokemon]) -> SelectionChange {
        self.location.replace(query);
        self.reconcile_from_url(roster)
    }

    /// Pop one history entry and reconcile against what it says.
    pub fn back(&mut self, roster: &[Pokemon]) -> SelectionChange {
        if !self.location.back() {
            return SelectionChange::Unchanged;
        }
        self.reconcile_from_url(roster)
    }
}
