//! Shell state for a search screen.
//!
//! State is never patched in place: every event goes through [`update`],
//! which returns the next state and, for a submitted search, the request the
//! shell has to dispatch. Each dispatch carries a ticket; only the completion
//! for the latest ticket is applied.

use crate::ProfessorRecord;

pub type Ticket = u64;

/// Result of one dispatched search as seen by the shell.
pub type SearchOutcome = Result<Vec<ProfessorRecord>, String>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub query: String,
    pub loading: bool,
    pub searched: bool,
    pub error: Option<String>,
    pub professors: Vec<ProfessorRecord>,
    pub latest_ticket: Ticket,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    QueryChanged(String),
    Submitted,
    Completed { ticket: Ticket, outcome: SearchOutcome },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Dispatch { ticket: Ticket, text: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Idle,
    Loading,
    Failed,
    NoResults,
    Results,
}

impl SearchState {
    pub fn status(&self) -> SearchStatus {
        if self.loading {
            SearchStatus::Loading
        } else if self.error.is_some() {
            SearchStatus::Failed
        } else if !self.professors.is_empty() {
            SearchStatus::Results
        } else if self.searched {
            SearchStatus::NoResults
        } else {
            SearchStatus::Idle
        }
    }
}

pub fn update(state: &SearchState, event: SearchEvent) -> (SearchState, Option<Effect>) {
    match event {
        SearchEvent::QueryChanged(query) => (
            SearchState {
                query,
                ..state.clone()
            },
            None,
        ),
        SearchEvent::Submitted => {
            let text = state.query.trim();
            if text.is_empty() {
                return (state.clone(), None);
            }

            let ticket = state.latest_ticket + 1;
            let effect = Effect::Dispatch {
                ticket,
                text: text.to_string(),
            };
            let next = SearchState {
                loading: true,
                searched: true,
                error: None,
                latest_ticket: ticket,
                ..state.clone()
            };
            (next, Some(effect))
        }
        SearchEvent::Completed { ticket, .. } if ticket != state.latest_ticket => {
            tracing::debug!(ticket, latest = state.latest_ticket, "discarding stale search result");
            (state.clone(), None)
        }
        SearchEvent::Completed { outcome, .. } => {
            let next = match outcome {
                Ok(professors) => SearchState {
                    loading: false,
                    error: None,
                    professors,
                    ..state.clone()
                },
                Err(message) => SearchState {
                    loading: false,
                    error: Some(message),
                    ..state.clone()
                },
            };
            (next, None)
        }
    }
}
