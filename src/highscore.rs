use std::sync::Mutex;

/// Storage seam for the best score. The session runner takes this as an
/// injected dependency; how and where the value persists is up to the host.
pub trait HighScoreStore: Send + Sync {
    fn high_score(&self) -> u32;

    /// Records `score` if it beats the stored best. Returns true on a new
    /// record.
    fn submit(&self, score: u32) -> bool;
}

#[derive(Debug, Default)]
pub struct InMemoryHighScoreStore {
    best: Mutex<u32>,
}

impl InMemoryHighScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HighScoreStore for InMemoryHighScoreStore {
    fn high_score(&self) -> u32 {
        *self.best.lock().expect("high score lock poisoned")
    }

    fn submit(&self, score: u32) -> bool {
        let mut best = self.best.lock().expect("high score lock poisoned");
        if score > *best {
            *best = score;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_keeps_the_maximum() {
        let store = InMemoryHighScoreStore::new();
        assert!(store.submit(30));
        assert!(!store.submit(20));
        assert!(store.submit(40));
        assert_eq!(store.high_score(), 40);
    }
}
