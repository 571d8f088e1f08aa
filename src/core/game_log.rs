use serde::Serialize;

/// Append-only stream of player-facing messages.
///
/// The core never truncates it; consumers track how far they have read with
/// [`GameLog::since`] and cap their own display.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GameLog {
    entries: Vec<String>,
}

impl GameLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.entries.push(message.into());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Messages appended after the first `seen` entries.
    pub fn since(&self, seen: usize) -> &[String] {
        self.entries.get(seen..).unwrap_or(&[])
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_since_returns_unread_tail() {
        let mut log = GameLog::new();
        log.push("one");
        log.push("two".to_string());
        log.push("three");

        assert_eq!(log.since(1), ["two".to_string(), "three".to_string()]);
        assert!(log.since(3).is_empty());
        assert!(log.since(10).is_empty());
        assert_eq!(log.last(), Some("three"));
        assert_eq!(log.len(), 3);
    }
}
