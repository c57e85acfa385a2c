// SPDX-License-Identifier: GPL-3.0

use std::sync::Arc;

use crate::{
    app::utils::LoadMode,
    core::api::CatalogApi,
    entities::{CatalogPage, PokemonDetails},
    error::CatalogError,
};

/// Sequence number handed to a request when it is issued
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// Issues tickets for one kind of request, only the newest one is current
#[derive(Debug, Default)]
pub(crate) struct Generation {
    current: u64,
    in_flight: bool,
}

impl Generation {
    pub(crate) fn issue(&mut self) -> Ticket {
        self.current += 1;
        self.in_flight = true;
        Ticket(self.current)
    }

    /// Makes every outstanding ticket stale
    pub(crate) fn invalidate(&mut self) {
        self.current += 1;
        self.in_flight = false;
    }

    /// Returns true if `ticket` is the current one and still waiting, marking it done
    pub(crate) fn settle(&mut self, ticket: Ticket) -> bool {
        if self.in_flight && ticket.0 == self.current {
            self.in_flight = false;
            true
        } else {
            false
        }
    }

    pub(crate) fn in_flight(&self) -> bool {
        self.in_flight
    }
}

/// Outcome of handing a response back to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The view state was updated
    Updated,
    /// A newer request superseded this one, the response was dropped
    Stale,
    /// Nothing was requested
    Skipped,
}

/// A page load that has been issued but not yet sent
///
/// Owns everything it needs, so the future returned by [`PageRequest::send`] is
/// `'static` and can be spawned while the controller keeps serving other calls.
#[derive(Debug)]
pub struct PageRequest<C> {
    pub(crate) api: Arc<C>,
    pub(crate) ticket: Ticket,
    pub(crate) mode: LoadMode,
    pub(crate) page: usize,
    pub(crate) limit: usize,
    pub(crate) offset: usize,
}

impl<C: CatalogApi> PageRequest<C> {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    pub fn mode(&self) -> LoadMode {
        self.mode
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Fetches the index page and then the details of every entry on it
    pub async fn send(self) -> PageResponse {
        let result = fetch_page(&*self.api, self.limit, self.offset).await;
        PageResponse {
            ticket: self.ticket,
            mode: self.mode,
            page: self.page,
            result,
        }
    }
}

/// Result of a [`PageRequest`]
#[derive(Debug)]
pub struct PageResponse {
    pub(crate) ticket: Ticket,
    pub(crate) mode: LoadMode,
    pub(crate) page: usize,
    pub(crate) result: Result<FetchedPage, CatalogError>,
}

impl PageResponse {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug)]
pub(crate) struct FetchedPage {
    pub(crate) count: u64,
    pub(crate) details: Vec<PokemonDetails>,
}

/// Detail calls run concurrently and are joined in catalog order. One failure
/// fails the whole page.
async fn fetch_page<C: CatalogApi>(
    api: &C,
    limit: usize,
    offset: usize,
) -> Result<FetchedPage, CatalogError> {
    let CatalogPage { count, results } = api.list_entries(limit, offset).await?;

    let details =
        futures::future::try_join_all(results.iter().map(|entry| api.get_detail(&entry.name)))
            .await?;

    Ok(FetchedPage { count, details })
}

/// A name lookup that has been issued but not yet sent
#[derive(Debug)]
pub struct SearchRequest<C> {
    pub(crate) api: Arc<C>,
    pub(crate) ticket: Ticket,
    pub(crate) name: String,
}

impl<C: CatalogApi> SearchRequest<C> {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// The normalized name that will be looked up
    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn send(self) -> SearchResponse {
        let result = self.api.get_detail(&self.name).await;
        SearchResponse {
            ticket: self.ticket,
            name: self.name,
            result,
        }
    }
}

/// Result of a [`SearchRequest`]
#[derive(Debug)]
pub struct SearchResponse {
    pub(crate) ticket: Ticket,
    pub(crate) name: String,
    pub(crate) result: Result<PokemonDetails, CatalogError>,
}

impl SearchResponse {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_newest_ticket_settles() {
        let mut generation = Generation::default();
        let first = generation.issue();
        let second = generation.issue();

        assert!(first < second);
        assert!(!generation.settle(first));
        assert!(generation.in_flight());
        assert!(generation.settle(second));
        assert!(!generation.in_flight());
    }

    #[test]
    fn a_ticket_settles_once() {
        let mut generation = Generation::default();
        let ticket = generation.issue();

        assert!(generation.settle(ticket));
        assert!(!generation.settle(ticket));
    }

    #[test]
    fn invalidate_makes_outstanding_tickets_stale() {
        let mut generation = Generation::default();
        let ticket = generation.issue();

        generation.invalidate();

        assert!(!generation.in_flight());
        assert!(!generation.settle(ticket));
    }
}
