use std::sync::atomic::{AtomicU64, Ordering};

/// Ticket handed out when a request starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Last-write-wins bookkeeping for one kind of request.
///
/// Older requests are not cancelled; they run to completion and their result
/// is dropped when a newer ticket has been issued in the meantime.
#[derive(Debug, Default)]
pub struct RequestGate {
    latest: AtomicU64,
}

impl RequestGate {
    pub fn new() -> Self { Self::default() }

    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }

    /// `Some(value)` if `ticket` is still the newest, else `None`.
    pub fn accept<T>(&self, ticket: RequestTicket, value: T) -> Option<T> {
        self.is_latest(ticket).then_some(value)
    }
}
