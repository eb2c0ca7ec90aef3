use std::time::Duration;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Mode {
    Boot,
    Search,
    Help,
}

/// Reveals a fixed line one character per interval, measured from mount.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    char_interval: Duration,
    revealed: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, char_interval: Duration) -> Self {
        Self {
            text: text.into(),
            char_interval,
            revealed: 0,
        }
    }

    /// Update the visible prefix for the time elapsed since mount.
    pub fn reveal(&mut self, elapsed: Duration) {
        let total = self.text.chars().count();
        let interval = self.char_interval.as_millis().max(1);
        let chars = (elapsed.as_millis() / interval) as usize;
        self.revealed = chars.min(total);
    }

    pub fn visible(&self) -> &str {
        match self.text.char_indices().nth(self.revealed) {
            Some((byte, _)) => &self.text[..byte],
            None => &self.text,
        }
    }

    pub fn is_done(&self) -> bool {
        self.revealed >= self.text.chars().count()
    }
}
