use crate::client::ProfessorSearch;
use crate::session::{Effect, SearchEvent, Ticket};
use crate::transport::GraphqlTransport;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::debug;

/// Runs dispatched searches on the runtime and reports their completion as
/// [`SearchEvent::Completed`]. Dispatching a new search aborts the one still
/// in flight.
pub struct SearchDriver<T>
where
    T: GraphqlTransport + Send + Sync + 'static,
{
    search: Arc<ProfessorSearch<T>>,
    events: UnboundedSender<SearchEvent>,
    in_flight: Option<(Ticket, JoinHandle<()>)>,
}

impl<T> SearchDriver<T>
where
    T: GraphqlTransport + Send + Sync + 'static,
{
    pub fn new(search: ProfessorSearch<T>) -> (Self, UnboundedReceiver<SearchEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let driver = Self {
            search: Arc::new(search),
            events,
            in_flight: None,
        };
        (driver, receiver)
    }

    pub fn dispatch(&mut self, effect: Effect) {
        let Effect::Dispatch { ticket, text } = effect;

        if let Some((previous, handle)) = self.in_flight.take() {
            if !handle.is_finished() {
                debug!(ticket = previous, superseded_by = ticket, "aborting in-flight search");
                handle.abort();
            }
        }

        let search = Arc::clone(&self.search);
        let events = self.events.clone();
        let handle = tokio::spawn(async move {
            let outcome = search
                .search(&text)
                .await
                .map_err(|error| error.user_message());
            // The receiver is gone only when the shell is shutting down.
            let _ = events.send(SearchEvent::Completed { ticket, outcome });
        });

        self.in_flight = Some((ticket, handle));
    }

    pub fn in_flight(&self) -> Option<Ticket> {
        self.in_flight
            .as_ref()
            .filter(|(_, handle)| !handle.is_finished())
            .map(|(ticket, _)| *ticket)
    }
}
