use super::catalog::{Catalog, LoadTicket, Trigger};
use super::data::{Product, Snapshot};
use super::search;
use crate::error::FetchError;

/// Where the screen is in its load cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing requested yet
    Init,
    Loading,
    Ready,
    Error,
}

/// What goes below the search box
#[derive(Debug, PartialEq)]
pub enum Body<'a> {
    /// Fetch in progress, show the progress indicator
    Loading,
    /// At least one product matches
    Products(Vec<&'a Product>),
    /// Nothing to show because the last fetch failed
    Failed(&'a FetchError),
    /// Nothing to show, no error
    NoProducts,
}

/// All state of the product screen.
///
/// The visible list is never stored: it is recomputed from the snapshot
/// and the query every time it is asked for.
#[derive(Debug)]
pub struct Screen {
    catalog: Catalog,
    query: String,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::new(),
            query: String::new(),
        }
    }

    pub fn mount(&mut self) -> Option<LoadTicket> {
        self.catalog.begin(Trigger::Mount)
    }

    pub fn refresh(&mut self) -> Option<LoadTicket> {
        self.catalog.begin(Trigger::Refresh)
    }

    pub fn loaded(&mut self, ticket: LoadTicket, result: Result<Snapshot, FetchError>) -> bool {
        self.catalog.finish(ticket, result)
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn phase(&self) -> Phase {
        if self.catalog.in_flight().is_some() {
            Phase::Loading
        } else if self.catalog.error().is_some() {
            Phase::Error
        } else if self.catalog.has_started() {
            Phase::Ready
        } else {
            Phase::Init
        }
    }

    /// The derived view: snapshot filtered by the current query
    pub fn visible(&self) -> Vec<&Product> {
        search::filter(self.catalog.snapshot().products(), &self.query)
    }

    pub fn body(&self) -> Body<'_> {
        if self.catalog.is_loading() {
            return Body::Loading;
        }

        let visible = self.visible();
        if !visible.is_empty() {
            return Body::Products(visible);
        }

        match self.catalog.error() {
            Some(err) => Body::Failed(err),
            None => Body::NoProducts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::product;

    fn phones() -> Snapshot {
        Snapshot::new(vec![product(1, "iPhone 9"), product(2, "Samsung Galaxy")])
    }

    fn ready_screen() -> Screen {
        let mut screen = Screen::new();
        let ticket = screen.mount().unwrap();
        screen.loaded(ticket, Ok(phones()));
        screen
    }

    #[test]
    fn test_state_machine() {
        let mut screen = Screen::new();
        assert_eq!(screen.phase(), Phase::Init);

        let ticket = screen.mount().unwrap();
        assert_eq!(screen.phase(), Phase::Loading);

        screen.loaded(ticket, Ok(phones()));
        assert_eq!(screen.phase(), Phase::Ready);

        screen.set_query("galaxy".into());
        assert_eq!(screen.phase(), Phase::Ready);

        let ticket = screen.refresh().unwrap();
        assert_eq!(screen.phase(), Phase::Loading);

        screen.loaded(ticket, Err(FetchError::Status(503)));
        assert_eq!(screen.phase(), Phase::Error);

        screen.set_query(String::new());
        assert_eq!(screen.phase(), Phase::Error);

        screen.refresh().unwrap();
        assert_eq!(screen.phase(), Phase::Loading);
    }

    #[test]
    fn test_query_narrows_view() {
        let mut screen = ready_screen();
        screen.set_query("iphone".into());

        let view = screen.visible();

        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, 1);
    }

    #[test]
    fn test_no_match_shows_no_products() {
        let mut screen = ready_screen();
        screen.set_query("zz-nomatch".into());

        assert!(screen.visible().is_empty());
        assert_eq!(screen.body(), Body::NoProducts);
    }

    #[test]
    fn test_loading_hides_list() {
        let mut screen = ready_screen();
        screen.refresh().unwrap();

        assert_eq!(screen.body(), Body::Loading);
        // Snapshot is still there underneath
        assert_eq!(screen.visible().len(), 2);
    }

    #[test]
    fn test_error_with_empty_view_shows_error() {
        let mut screen = Screen::new();
        let ticket = screen.mount().unwrap();
        screen.loaded(ticket, Err(FetchError::Status(500)));

        assert_eq!(screen.body(), Body::Failed(&FetchError::Status(500)));
    }

    #[test]
    fn test_error_keeps_retained_list_visible() {
        let mut screen = ready_screen();
        let ticket = screen.refresh().unwrap();
        screen.loaded(ticket, Err(FetchError::Status(500)));

        match screen.body() {
            Body::Products(view) => assert_eq!(view.len(), 2),
            other => panic!("expected products, got {:?}", other),
        }
        assert!(screen.catalog().error().is_some());
    }

    #[test]
    fn test_view_tracks_new_snapshot() {
        let mut screen = ready_screen();
        screen.set_query("phone".into());
        assert_eq!(screen.visible().len(), 1);

        let ticket = screen.refresh().unwrap();
        screen.loaded(
            ticket,
            Ok(Snapshot::new(vec![
                product(3, "Phone Case"),
                product(4, "Headphones"),
                product(5, "Lamp"),
            ])),
        );

        let ids: Vec<u64> = screen.visible().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }
}
