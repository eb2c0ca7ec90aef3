//! Constants for the interactive TUI module
//!
//! This module centralizes magic numbers and configuration values
//! to improve maintainability and make the codebase more self-documenting.

// Timing constants
/// Message auto-clear delay in milliseconds
pub const MESSAGE_CLEAR_DELAY_MS: u64 = 3000;

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

/// Delay between two characters of the greeting
pub const GREETING_CHAR_INTERVAL_MS: u64 = 50;

pub const GREETING_TEXT: &str = "root@cybersearch:~$ Privacy secured. Anonymous search ready.";

// UI Layout constants
/// Height of the header bar
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the search bar component
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Height of the privacy notice
pub const NOTICE_HEIGHT: u16 = 1;

/// Page size for PageUp/PageDown navigation
pub const PAGE_SIZE: usize = 10;

// Boot monitor dimensions
pub const MONITOR_WIDTH: u16 = 64;
pub const MONITOR_HEIGHT: u16 = 20;

// Help dialog dimensions
/// Maximum width for help dialog
pub const HELP_DIALOG_MAX_WIDTH: u16 = 70;

/// Minimum margin around help dialog
pub const HELP_DIALOG_MARGIN: u16 = 4;

pub const EXIT_PROMPT: &str = "Press Ctrl+C again to exit";
