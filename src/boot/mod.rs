//! Scripted startup sequence.
//!
//! [`BootSequencer`] is a pure state machine: it reports how long to wait
//! before its next step and what that step emits. [`driver::BootHandle`]
//! runs it on a single cancellable tokio task.

pub mod driver;

#[cfg(test)]
mod driver_test;

pub use driver::BootHandle;

use std::time::Duration;

/// Interval between two transcript lines.
pub const LINE_INTERVAL: Duration = Duration::from_millis(300);
/// Pause after the last line before the closing transition starts.
pub const SETTLE_DELAY: Duration = Duration::from_millis(1000);
/// Length of the closing transition.
pub const TRANSITION_DELAY: Duration = Duration::from_millis(3000);

pub const STATUS_PREFIX: &str = "[ OK ]";

pub const DEFAULT_BOOT_MESSAGES: [&str; 14] = [
    "[ OK ] Starting Kali Linux Security OS...",
    "[ OK ] Loading kernel modules",
    "[ OK ] Initializing network interfaces",
    "[ OK ] Starting system logging daemon",
    "[ OK ] Starting enhanced privacy protocols",
    "[ OK ] Loading cryptographic modules",
    "[ OK ] Initializing secure search engine",
    "[ OK ] Establishing anonymous connections",
    "[ OK ] Privacy shield: ACTIVE",
    "[ OK ] Secure search ready",
    "",
    "Welcome to CyberSearch - Your Privacy-First Search Engine",
    "Initializing secure connection...",
    "Ready.",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BootEvent {
    Line(String),
    BeginTransition,
    Complete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootPhase {
    Booting { cursor: usize },
    Settling,
    Transitioning,
    Complete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BootTimings {
    pub line_interval: Duration,
    pub settle_delay: Duration,
    pub transition_delay: Duration,
}

impl Default for BootTimings {
    fn default() -> Self {
        Self {
            line_interval: LINE_INTERVAL,
            settle_delay: SETTLE_DELAY,
            transition_delay: TRANSITION_DELAY,
        }
    }
}

#[derive(Clone, Debug)]
pub struct BootSequencer {
    messages: Vec<String>,
    phase: BootPhase,
    timings: BootTimings,
}

impl Default for BootSequencer {
    fn default() -> Self {
        Self::new(DEFAULT_BOOT_MESSAGES.iter().map(|m| m.to_string()).collect())
    }
}

impl BootSequencer {
    pub fn new(messages: Vec<String>) -> Self {
        Self::with_timings(messages, BootTimings::default())
    }

    pub fn with_timings(messages: Vec<String>, timings: BootTimings) -> Self {
        Self {
            messages,
            phase: BootPhase::Booting { cursor: 0 },
            timings,
        }
    }

    pub fn phase(&self) -> BootPhase {
        self.phase
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn is_complete(&self) -> bool {
        self.phase == BootPhase::Complete
    }

    /// How long to wait before calling [`step`](Self::step) again.
    /// `None` once the sequence is complete.
    pub fn next_delay(&self) -> Option<Duration> {
        match self.phase {
            BootPhase::Booting { .. } => Some(self.timings.line_interval),
            BootPhase::Settling => Some(self.timings.settle_delay),
            BootPhase::Transitioning => Some(self.timings.transition_delay),
            BootPhase::Complete => None,
        }
    }

    /// Run one scheduled step.
    ///
    /// The tick that finds the cursor at the end of the script emits nothing;
    /// it only stops the line timer and starts settling.
    pub fn step(&mut self) -> Option<BootEvent> {
        match self.phase {
            BootPhase::Booting { cursor } if cursor < self.messages.len() => {
                let line = self.messages[cursor].clone();
                self.phase = BootPhase::Booting { cursor: cursor + 1 };
                Some(BootEvent::Line(line))
            }
            BootPhase::Booting { .. } => {
                self.phase = BootPhase::Settling;
                None
            }
            BootPhase::Settling => {
                self.phase = BootPhase::Transitioning;
                Some(BootEvent::BeginTransition)
            }
            BootPhase::Transitioning => {
                self.phase = BootPhase::Complete;
                Some(BootEvent::Complete)
            }
            BootPhase::Complete => None,
        }
    }
}

/// Styling class of a transcript line. Has no effect on sequencing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Status,
    Banner,
    Plain,
}

pub fn classify_line(line: &str) -> LineKind {
    if line.starts_with(STATUS_PREFIX) {
        LineKind::Status
    } else if line.starts_with("Welcome")
        || line.starts_with("Initializing")
        || line.starts_with("Ready")
    {
        LineKind::Banner
    } else {
        LineKind::Plain
    }
}

/// Read-only projection of the boot sequence for rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BootView {
    pub transcript: Vec<String>,
    pub transitioning: bool,
    pub complete: bool,
}

impl BootView {
    pub fn apply(&mut self, event: &BootEvent) {
        match event {
            BootEvent::Line(line) => self.transcript.push(line.clone()),
            BootEvent::BeginTransition => self.transitioning = true,
            BootEvent::Complete => self.complete = true,
        }
    }

    /// Lines are still arriving.
    pub fn is_typing(&self) -> bool {
        !self.transitioning && !self.complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(lines: &[&str]) -> BootSequencer {
        BootSequencer::new(lines.iter().map(|l| l.to_string()).collect())
    }

    #[test]
    fn test_steps_through_every_phase() {
        let mut sequencer = script(&["one", "two"]);

        assert_eq!(sequencer.phase(), BootPhase::Booting { cursor: 0 });
        assert_eq!(sequencer.step(), Some(BootEvent::Line("one".to_string())));
        assert_eq!(sequencer.phase(), BootPhase::Booting { cursor: 1 });
        assert_eq!(sequencer.step(), Some(BootEvent::Line("two".to_string())));
        assert_eq!(sequencer.phase(), BootPhase::Booting { cursor: 2 });

        assert_eq!(sequencer.step(), None);
        assert_eq!(sequencer.phase(), BootPhase::Settling);
        assert_eq!(sequencer.next_delay(), Some(SETTLE_DELAY));

        assert_eq!(sequencer.step(), Some(BootEvent::BeginTransition));
        assert_eq!(sequencer.next_delay(), Some(TRANSITION_DELAY));

        assert_eq!(sequencer.step(), Some(BootEvent::Complete));
        assert!(sequencer.is_complete());
        assert_eq!(sequencer.next_delay(), None);
    }

    #[test]
    fn test_complete_is_terminal() {
        let mut sequencer = script(&[]);
        while sequencer.next_delay().is_some() {
            sequencer.step();
        }

        for _ in 0..5 {
            assert_eq!(sequencer.step(), None);
            assert_eq!(sequencer.phase(), BootPhase::Complete);
        }
    }

    #[test]
    fn test_cursor_never_exceeds_script_length() {
        let mut sequencer = BootSequencer::default();
        let len = sequencer.messages().len();
        let mut lines = 0;

        while sequencer.next_delay().is_some() {
            if let Some(BootEvent::Line(_)) = sequencer.step() {
                lines += 1;
            }
            if let BootPhase::Booting { cursor } = sequencer.phase() {
                assert!(cursor <= len);
            }
        }

        assert_eq!(lines, len);
        assert_eq!(len, 14);
    }

    #[test]
    fn test_line_classification() {
        assert_eq!(classify_line("[ OK ] Loading kernel modules"), LineKind::Status);
        assert_eq!(
            classify_line("Welcome to CyberSearch - Your Privacy-First Search Engine"),
            LineKind::Banner
        );
        assert_eq!(classify_line("Initializing secure connection..."), LineKind::Banner);
        assert_eq!(classify_line("Ready."), LineKind::Banner);
        assert_eq!(classify_line(""), LineKind::Plain);
        assert_eq!(classify_line("  [ OK ] indented"), LineKind::Plain);
    }

    #[test]
    fn test_view_appends_in_order() {
        let mut view = BootView::default();
        assert!(view.is_typing());

        view.apply(&BootEvent::Line("a".to_string()));
        view.apply(&BootEvent::Line("".to_string()));
        view.apply(&BootEvent::Line("b".to_string()));
        assert_eq!(view.transcript, vec!["a", "", "b"]);

        view.apply(&BootEvent::BeginTransition);
        assert!(view.transitioning);
        assert!(!view.is_typing());
        assert!(!view.complete);

        view.apply(&BootEvent::Complete);
        assert!(view.complete);
    }
}
