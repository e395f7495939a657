use std::time::Duration;

/// Tick interval for the character-by-character reveal.
pub const REVEAL_INTERVAL: Duration = Duration::from_millis(30);

/// Character-by-character text reveal. Pure stepper; the presentation layer
/// owns the timer and calls `tick` once per interval. `restart` discards
/// any in-flight reveal, which is how a content change cancels the old one.
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Typewriter {
            chars: text.chars().collect(),
            shown: 0,
        }
    }

    pub fn restart(&mut self, text: &str) {
        self.chars = text.chars().collect();
        self.shown = 0;
    }

    /// Reveals one more character. Returns the newly revealed character, or
    /// `None` once the full text is visible.
    pub fn tick(&mut self) -> Option<char> {
        let next = self.chars.get(self.shown).copied();
        if next.is_some() {
            self.shown += 1;
        }
        next
    }

    pub fn visible(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.chars.len()
    }
}
