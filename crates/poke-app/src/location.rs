//! Address-bar mirror for the selected entity
//!
//! The only shareable state in the system is a single `?pokemon=<name>`
//! query parameter. `Location` models the address bar as a push-state
//! history of that parameter: selecting pushes an entry, `back()` pops one,
//! and [`crate::SelectionSynchronizer`] reconciles in-memory selection
//! against whatever the current entry says.

/// Push-state history of the `pokemon` query parameter.
#[derive(Debug, Clone)]
pub struct Location {
    /// Each entry is the parameter value at that point in history.
    history: Vec<Option<String>>,
}

pub const PARAM: &str = "pokemon";

impl Location {
    /// A fresh session with no parameter set.
    pub fn new() -> Self {
        Self {
            history: vec![None],
        }
    }

    /// A session opened at `query` (e.g. a pasted share link's query string).
    pub fn from_query(query: &str) -> Self {
        Self {
            history: vec![parse_param(query)],
        }
    }

    /// The parameter value at the current history entry.
    pub fn current(&self) -> Option<&str> {
        self.history
            .last()
            .and_then(|entry| entry.as_deref())
    }

    /// Push a new history entry, as client-side navigation does.
    pub fn navigate(&mut self, pokemon: Option<&str>) {
        self.history.push(pokemon.map(str::to_string));
    }

    /// Replace the current entry without growing history (external URL
    /// change, e.g. a link opened in place).
    pub fn replace(&mut self, query: &str) {
        let entry = parse_param(query);
        match self.history.last_mut() {
            Some(last) => *last = entry,
            None => self.history.push(entry),
        }
    }

    /// Pop one history entry. Returns false at the start of history.
    pub fn back(&mut self) -> bool {
        if self.history.len() > 1 {
            self.history.pop();
            true
        } else {
            false
        }
    }

    /// Render the current entry as a query string (`?pokemon=name` or "").
    pub fn query_string(&self) -> String {
        match self.current() {
            Some(name) => format!("?{}={}", PARAM, name),
            None => String::new(),
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the `pokemon` parameter from a query string, with or without the
/// leading `?`. Entity names are plain lowercase-and-hyphen tokens, so no
/// percent-decoding is needed.
fn parse_param(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == PARAM)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}
