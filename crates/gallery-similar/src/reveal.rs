//! Consumer-owned "show more" state over a ranked list.
//!
//! `Idle -> Loading(page) -> Idle`. Only one page load may be pending; a
//! second `begin` while loading is refused.

use crate::paging::{page, page_count};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Idle,
    Loading { page: usize },
}

/// Handle for one in-flight page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
}

#[derive(Debug, Clone)]
pub struct RevealCursor<T> {
    items: Vec<T>,
    page_size: usize,
    next_page: usize,
    revealed: usize,
    state: RevealState,
}

impl<T> RevealCursor<T> {
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        Self { items, page_size, next_page: 0, revealed: 0, state: RevealState::Idle }
    }

    pub fn state(&self) -> RevealState { self.state }

    pub fn page_size(&self) -> usize { self.page_size }

    pub fn total(&self) -> usize { self.items.len() }

    /// Items revealed so far, in rank order.
    pub fn revealed(&self) -> &[T] { &self.items[..self.revealed] }

    pub fn has_more(&self) -> bool {
        self.next_page < page_count(self.items.len(), self.page_size)
    }

    /// Start loading the next page. `None` while another load is pending or
    /// when everything is already revealed.
    pub fn begin(&mut self) -> Option<PageRequest> {
        if self.state != RevealState::Idle || !self.has_more() {
            return None;
        }
        let request = PageRequest { page: self.next_page };
        self.state = RevealState::Loading { page: request.page };
        Some(request)
    }

    /// Finish `request`, returning the newly revealed slice. A request that is
    /// not the pending one is ignored.
    pub fn complete(&mut self, request: PageRequest) -> &[T] {
        if self.state != (RevealState::Loading { page: request.page }) {
            return &[];
        }
        self.state = RevealState::Idle;
        let start = self.revealed;
        let added = page(&self.items, request.page, self.page_size).len();
        self.revealed += added;
        self.next_page += 1;
        &self.items[start..self.revealed]
    }

    /// Abandon the pending load without revealing anything.
    pub fn cancel(&mut self) {
        self.state = RevealState::Idle;
    }

    /// `begin` + `complete` in one step.
    pub fn show_more(&mut self) -> &[T] {
        match self.begin() {
            Some(request) => self.complete(request),
            None => &[],
        }
    }
}
