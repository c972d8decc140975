//! Content fetcher: memoized catalog access for the view renderer.
//!
//! Two entry points share one cache:
//!
//! - [`ContentFetcher::fetch`] answers synchronously (one blocking call on a
//!   miss).
//! - [`ContentFetcher::request`] answers `Ready` on a hit and `Pending` on a
//!   miss; the result arrives later through [`ContentFetcher::poll`].
//!   Requests for a category already in flight are coalesced.
//!
//! Failures never reach the caller as errors: they are logged, yield an
//! empty list, and leave the cache untouched so the next call retries.

use std::collections::HashMap;
use std::sync::{mpsc, Arc};
use std::time::{Duration, Instant};

use crate::error::FetchError;
use crate::net::catalog::CatalogSource;

use super::{Category, ContentCache, ContentItem};

type FetchOutcome = Result<Vec<ContentItem>, FetchError>;

/// Where deferred requests run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Run on the calling thread; deliver on the next `poll`.
    Inline,
    /// Run on a worker thread; deliver on the `poll` after it finishes.
    Background,
}

/// Answer to a deferred request.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Ready(Vec<ContentItem>),
    Pending,
}

/// A finished deferred request.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub category: Category,
    pub items: Vec<ContentItem>,
    /// The outbound call failed; `items` is empty and nothing was cached.
    pub failed: bool,
}

enum InFlight {
    Done(FetchOutcome),
    Waiting(mpsc::Receiver<FetchOutcome>),
}

pub struct ContentFetcher {
    source: Arc<dyn CatalogSource>,
    dispatch: Dispatch,
    cache: ContentCache,
    in_flight: HashMap<Category, InFlight>,
    requests_issued: usize,
}

impl ContentFetcher {
    pub fn new(source: Arc<dyn CatalogSource>, dispatch: Dispatch) -> Self {
        Self {
            source,
            dispatch,
            cache: ContentCache::new(),
            in_flight: HashMap::new(),
            requests_issued: 0,
        }
    }

    pub fn inline(source: Arc<dyn CatalogSource>) -> Self {
        Self::new(source, Dispatch::Inline)
    }

    pub fn background(source: Arc<dyn CatalogSource>) -> Self {
        Self::new(source, Dispatch::Background)
    }

    /// Content for `category`, fetching it on a cache miss (blocking).
    pub fn fetch(&mut self, category: Category) -> Vec<ContentItem> {
        if let Some(items) = self.cache.lookup(category) {
            return items.to_vec();
        }
        self.requests_issued += 1;
        match self.source.fetch_category(category) {
            Ok(items) => self.cache.store(category, items).to_vec(),
            Err(e) => {
                log::warn!("failed to fetch {}: {}", category, e);
                Vec::new()
            }
        }
    }

    /// Deferred form of [`fetch`](Self::fetch).
    pub fn request(&mut self, category: Category) -> Request {
        if let Some(items) = self.cache.lookup(category) {
            return Request::Ready(items.to_vec());
        }
        if self.in_flight.contains_key(&category) {
            log::debug!("coalescing request for {}", category);
            return Request::Pending;
        }

        self.requests_issued += 1;
        let entry = match self.dispatch {
            Dispatch::Inline => InFlight::Done(self.source.fetch_category(category)),
            Dispatch::Background => {
                let (tx, rx) = mpsc::channel();
                let source = Arc::clone(&self.source);
                std::thread::spawn(move || {
                    let _ = tx.send(source.fetch_category(category));
                });
                InFlight::Waiting(rx)
            }
        };
        self.in_flight.insert(category, entry);
        Request::Pending
    }

    /// Collect finished requests, caching the successful ones.
    pub fn poll(&mut self) -> Vec<Completion> {
        let mut finished = Vec::new();
        for (&category, entry) in self.in_flight.iter_mut() {
            let outcome = match entry {
                InFlight::Done(_) => {
                    match std::mem::replace(entry, InFlight::Done(Ok(Vec::new()))) {
                        InFlight::Done(outcome) => outcome,
                        InFlight::Waiting(_) => continue,
                    }
                }
                InFlight::Waiting(rx) => match rx.try_recv() {
                    Ok(outcome) => outcome,
                    Err(mpsc::TryRecvError::Empty) => continue,
                    Err(mpsc::TryRecvError::Disconnected) => {
                        Err(FetchError::Request("fetch worker exited".into()))
                    }
                },
            };
            finished.push((category, outcome));
        }

        let mut completions = Vec::with_capacity(finished.len());
        for (category, outcome) in finished {
            self.in_flight.remove(&category);
            let completion = match outcome {
                Ok(items) => Completion {
                    category,
                    items: self.cache.store(category, items).to_vec(),
                    failed: false,
                },
                Err(e) => {
                    log::warn!("failed to fetch {}: {}", category, e);
                    Completion {
                        category,
                        items: Vec::new(),
                        failed: true,
                    }
                }
            };
            completions.push(completion);
        }
        completions
    }

    /// Poll until nothing is in flight or `timeout` elapses.
    pub fn wait(&mut self, timeout: Duration) -> Vec<Completion> {
        let deadline = Instant::now() + timeout;
        let mut out = self.poll();
        while !self.in_flight.is_empty() {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            std::thread::sleep((deadline - now).min(Duration::from_millis(5)));
            out.extend(self.poll());
        }
        out
    }

    /// Cached content, without fetching.
    pub fn cached(&self, category: Category) -> Option<&[ContentItem]> {
        self.cache.get(category)
    }

    pub fn is_pending(&self, category: Category) -> bool {
        self.in_flight.contains_key(&category)
    }

    pub fn pending_count(&self) -> usize {
        self.in_flight.len()
    }

    /// Outbound calls made so far.
    pub fn requests_issued(&self) -> usize {
        self.requests_issued
    }

    pub fn cache(&self) -> &ContentCache {
        &self.cache
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// Catalog double that counts calls and can be switched to failing.
    pub(crate) struct FakeCatalog {
        pub calls: AtomicUsize,
        pub failing: AtomicBool,
        pub per_category: usize,
    }

    impl FakeCatalog {
        pub(crate) fn new(per_category: usize) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                failing: AtomicBool::new(false),
                per_category,
            })
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub(crate) fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }
    }

    impl CatalogSource for FakeCatalog {
        fn fetch_category(&self, category: Category) -> Result<Vec<ContentItem>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.failing.load(Ordering::SeqCst) {
                return Err(FetchError::Status(503));
            }
            Ok((0..self.per_category)
                .map(|i| {
                    ContentItem::new(
                        format!("{} #{}", category.key(), i),
                        "Action, Drama",
                        format!("https://cdn/{}/{}.jpg", category.key(), i),
                        category.key(),
                    )
                })
                .collect())
        }
    }

    #[test]
    fn fetch_hits_network_once() {
        let catalog = FakeCatalog::new(3);
        let mut fetcher = ContentFetcher::inline(catalog.clone());

        let first = fetcher.fetch(Category::Series);
        assert_eq!(catalog.calls(), 1);
        let second = fetcher.fetch(Category::Series);
        assert_eq!(catalog.calls(), 1);
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
        assert_eq!(fetcher.requests_issued(), 1);
    }

    #[test]
    fn fetch_failure_is_empty_and_retried() {
        let catalog = FakeCatalog::new(2);
        catalog.set_failing(true);
        let mut fetcher = ContentFetcher::inline(catalog.clone());

        assert!(fetcher.fetch(Category::Movies).is_empty());
        assert!(fetcher.cached(Category::Movies).is_none());

        catalog.set_failing(false);
        let items = fetcher.fetch(Category::Movies);
        assert_eq!(items.len(), 2);
        assert_eq!(catalog.calls(), 2);
    }

    #[test]
    fn request_inline_is_deferred_until_poll() {
        let catalog = FakeCatalog::new(4);
        let mut fetcher = ContentFetcher::inline(catalog.clone());

        assert_eq!(fetcher.request(Category::Series), Request::Pending);
        assert!(fetcher.cached(Category::Series).is_none());

        let done = fetcher.poll();
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].category, Category::Series);
        assert_eq!(done[0].items.len(), 4);
        assert!(!done[0].failed);

        match fetcher.request(Category::Series) {
            Request::Ready(items) => assert_eq!(items, done[0].items),
            Request::Pending => panic!("expected cached content"),
        }
        assert_eq!(catalog.calls(), 1);
    }

    #[test]
    fn concurrent_requests_are_coalesced() {
        let catalog = FakeCatalog::new(1);
        let mut fetcher = ContentFetcher::inline(catalog.clone());

        fetcher.request(Category::Movies);
        fetcher.request(Category::Movies);
        fetcher.request(Category::Movies);
        assert_eq!(catalog.calls(), 1);
        assert_eq!(fetcher.poll().len(), 1);
        assert!(fetcher.poll().is_empty());
    }

    #[test]
    fn failed_request_is_not_cached() {
        let catalog = FakeCatalog::new(1);
        catalog.set_failing(true);
        let mut fetcher = ContentFetcher::inline(catalog.clone());

        fetcher.request(Category::Featured);
        let done = fetcher.poll();
        assert!(done[0].failed);
        assert!(done[0].items.is_empty());
        assert!(!fetcher.cache().contains(Category::Featured));

        catalog.set_failing(false);
        assert_eq!(fetcher.request(Category::Featured), Request::Pending);
        assert_eq!(catalog.calls(), 2);
    }

    #[test]
    fn background_dispatch_delivers() {
        let catalog = FakeCatalog::new(2);
        let mut fetcher = ContentFetcher::background(catalog.clone());

        assert_eq!(fetcher.request(Category::Series), Request::Pending);
        assert_eq!(fetcher.request(Category::Movies), Request::Pending);
        let done = fetcher.wait(Duration::from_secs(5));
        assert_eq!(done.len(), 2);
        assert_eq!(fetcher.pending_count(), 0);
        assert!(fetcher.cached(Category::Series).is_some());
        assert!(fetcher.cached(Category::Movies).is_some());
    }
}
