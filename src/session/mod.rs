pub mod controller;
pub mod observer;


pub use controller::SessionController;
pub use observer::{SearchObserver, TracingObserver};

use crate::search::models::SearchResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    /// Nothing has been submitted yet.
    Idle,
    Searching,
    Resolved,
}

/// The session currently owned by the controller.
#[derive(Clone, Debug)]
pub(crate) struct SearchSession {
    pub generation: u64,
    pub query: String,
    pub status: SessionStatus,
    pub results: Vec<SearchResult>,
    pub is_fallback: bool,
}

impl SearchSession {
    pub fn idle() -> Self {
        Self {
            generation: 0,
            query: String::new(),
            status: SessionStatus::Idle,
            results: Vec::new(),
            is_fallback: false,
        }
    }

    pub fn searching(generation: u64, query: String) -> Self {
        Self {
            generation,
            query,
            status: SessionStatus::Searching,
            results: Vec::new(),
            is_fallback: false,
        }
    }
}

/// Read-only projection handed to the rendering layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionView<'a> {
    pub status: SessionStatus,
    pub query: &'a str,
    pub results: &'a [SearchResult],
    pub is_fallback: bool,
}

impl SessionView<'_> {
    pub fn has_searched(&self) -> bool {
        self.status != SessionStatus::Idle
    }

    pub fn is_searching(&self) -> bool {
        self.status == SessionStatus::Searching
    }
}
