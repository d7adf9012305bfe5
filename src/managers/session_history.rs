//! Back/forward list for surfaces that cannot report it themselves.

use url::Url;

/// Committed navigation entries plus a cursor.
#[derive(Debug, Clone, Default)]
pub struct SessionHistory {
    entries: Vec<Url>,
    index: Option<usize>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finished navigation.
    ///
    /// Committing the current entry again (reload, or the page reached by a
    /// back/forward traversal) leaves the list untouched. Anything else drops
    /// the forward entries and appends.
    pub fn commit(&mut self, url: Url) {
        if self.current() == Some(&url) {
            return;
        }
        let next = match self.index {
            Some(i) => {
                self.entries.truncate(i + 1);
                i + 1
            }
            None => {
                self.entries.clear();
                0
            }
        };
        self.entries.push(url);
        self.index = Some(next);
    }

    pub fn current(&self) -> Option<&Url> {
        self.index.and_then(|i| self.entries.get(i))
    }

    pub fn can_go_back(&self) -> bool {
        matches!(self.index, Some(i) if i > 0)
    }

    pub fn can_go_forward(&self) -> bool {
        matches!(self.index, Some(i) if i + 1 < self.entries.len())
    }

    /// Moves the cursor back and returns the entry now current.
    pub fn go_back(&mut self) -> Option<&Url> {
        if !self.can_go_back() {
            return None;
        }
        self.index = self.index.map(|i| i - 1);
        self.current()
    }

    /// Moves the cursor forward and returns the entry now current.
    pub fn go_forward(&mut self) -> Option<&Url> {
        if !self.can_go_forward() {
            return None;
        }
        self.index = self.index.map(|i| i + 1);
        self.current()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
