//! Session history: the stack of visited paths.

/// Browser-style history as seen by the router.
pub trait History {
    /// Add an entry for `path` and make it current.
    fn push(&mut self, path: &str);
    /// Overwrite the current entry without adding one.
    fn replace(&mut self, path: &str);
    fn current_path(&self) -> &str;
}

/// In-memory history with a back/forward cursor.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
}

impl MemoryHistory {
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            entries: vec![initial_path.into()],
            index: 0,
        }
    }

    /// Step back one entry. Returns false at the start of history.
    pub fn back(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Step forward one entry. Returns false at the end of history.
    pub fn forward(&mut self) -> bool {
        if self.index + 1 < self.entries.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl History for MemoryHistory {
    fn push(&mut self, path: &str) {
        // Truncate forward history before pushing
        self.entries.truncate(self.index + 1);
        self.entries.push(path.to_string());
        self.index = self.entries.len() - 1;
    }

    fn replace(&mut self, path: &str) {
        self.entries[self.index] = path.to_string();
    }

    fn current_path(&self) -> &str {
        &self.entries[self.index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_back_forward() {
        let mut history = MemoryHistory::new("/");
        history.push("/series");
        history.push("/movies");
        assert_eq!(history.current_path(), "/movies");

        assert!(history.back());
        assert_eq!(history.current_path(), "/series");
        assert!(history.forward());
        assert_eq!(history.current_path(), "/movies");
        assert!(!history.forward());
    }

    #[test]
    fn push_truncates_forward_entries() {
        let mut history = MemoryHistory::new("/");
        history.push("/series");
        history.push("/movies");
        history.back();
        history.back();
        history.push("/news");
        assert_eq!(history.entries(), &["/", "/news"]);
        assert!(!history.can_go_forward());
    }

    #[test]
    fn back_stops_at_start() {
        let mut history = MemoryHistory::new("/");
        assert!(!history.back());
        assert_eq!(history.current_path(), "/");
    }

    #[test]
    fn replace_keeps_length() {
        let mut history = MemoryHistory::new("/nowhere");
        history.replace("/");
        assert_eq!(history.len(), 1);
        assert_eq!(history.current_path(), "/");
    }
}
