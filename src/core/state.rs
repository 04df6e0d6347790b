use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Presentation phase of a view's request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Error,
}

/// What a front end should draw for a view
#[derive(Debug, PartialEq)]
pub enum RenderState<'a, T> {
    Idle,
    Loading,
    Error(&'a str),
    Success(&'a [T]),
}

/// Handle for the one request a `RequestState` will accept a completion for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(Uuid);

impl RequestTicket {
    pub fn id(&self) -> Uuid {
        self.0
    }
}

/// Loading/error/data container for a single view
///
/// Only one request is in flight at a time: `begin` returns `None` while
/// loading, and `complete` drops results whose ticket is no longer current.
#[derive(Debug, Clone)]
pub struct RequestState<T> {
    data: T,
    error: Option<String>,
    in_flight: Option<Uuid>,
    received: bool,
    last_updated: Option<DateTime<Utc>>,
}

impl<T: Default> Default for RequestState<T> {
    fn default() -> Self {
        Self {
            data: T::default(),
            error: None,
            in_flight: None,
            received: false,
            last_updated: None,
        }
    }
}

impl<T: Default> RequestState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter `Loading`, clearing any previous error
    pub fn begin(&mut self) -> Option<RequestTicket> {
        if self.in_flight.is_some() {
            tracing::debug!("Request already in flight, ignoring new trigger");
            return None;
        }

        let id = Uuid::new_v4();
        self.in_flight = Some(id);
        self.error = None;
        Some(RequestTicket(id))
    }

    /// Apply a finished request; returns false when the ticket is stale
    pub fn complete(&mut self, ticket: RequestTicket, result: Result<T, String>) -> bool {
        if self.in_flight != Some(ticket.0) {
            tracing::debug!("Discarding stale completion for request {}", ticket.0);
            return false;
        }

        self.in_flight = None;
        self.last_updated = Some(Utc::now());

        match result {
            Ok(data) => {
                self.data = data;
                self.received = true;
                self.error = None;
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
        true
    }

    /// Back to `Idle` with empty data; any in-flight request becomes stale
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl<T> RequestState<T> {
    pub fn phase(&self) -> Phase {
        if self.in_flight.is_some() {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Error
        } else if self.received {
            Phase::Success
        } else {
            Phase::Idle
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    /// Render using `items` as the success payload, e.g. a filtered list kept elsewhere
    pub fn render_with<'a, I>(&'a self, items: &'a [I]) -> RenderState<'a, I> {
        match self.phase() {
            Phase::Idle => RenderState::Idle,
            Phase::Loading => RenderState::Loading,
            Phase::Error => RenderState::Error(self.error.as_deref().unwrap_or_default()),
            Phase::Success => RenderState::Success(items),
        }
    }
}

impl<I> RequestState<Vec<I>> {
    pub fn render(&self) -> RenderState<'_, I> {
        self.render_with(&self.data)
    }
}
