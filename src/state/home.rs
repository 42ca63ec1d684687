use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

use tracing::{debug, warn};

use crate::aggregator::compute_stats;
use crate::error::{DiaryError, Result};
use crate::models::{DayGroup, Stats};
use crate::state::store::MealFetcher;

/// Result of a refresh request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Refreshed,
    /// Another fetch was already in flight; nothing was done.
    Skipped,
}

#[derive(Debug, Default)]
struct HomeView {
    meals: Vec<DayGroup>,
    stats: Stats,
}

/// State behind the home view: the day-grouped meal list and its stats.
///
/// Shared by reference; any number of callers may request a refresh, but
/// only one fetch runs at a time.
#[derive(Debug, Default)]
pub struct HomeState {
    view: RwLock<HomeView>,
    loading: AtomicBool,
}

/// Clears the loading flag when dropped, including on unwind.
struct LoadingGuard<'a>(&'a AtomicBool);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl HomeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn meals(&self) -> Vec<DayGroup> {
        self.view
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .meals
            .clone()
    }

    pub fn stats(&self) -> Stats {
        self.view.read().unwrap_or_else(PoisonError::into_inner).stats
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Fetch meals and recompute stats.
    ///
    /// A request made while another fetch is running returns `Skipped`
    /// without touching the fetcher. On error the previous list and stats
    /// are kept. Loading is cleared on every path.
    pub fn refresh<F: MealFetcher + ?Sized>(&self, fetcher: &F) -> Result<FetchOutcome> {
        if self
            .loading
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("fetch already in flight, skipping");
            return Ok(FetchOutcome::Skipped);
        }
        let _loading = LoadingGuard(&self.loading);

        let groups = fetcher.fetch_all().inspect_err(|e| {
            warn!(error = %e, known = e.is_known(), "fetching meals failed");
        })?;

        let stats = compute_stats(&groups);
        let mut view = self.view.write().unwrap_or_else(PoisonError::into_inner);
        view.meals = groups;
        view.stats = stats;

        debug!(days = view.meals.len(), meals = stats.all_meals_count, "home refreshed");
        Ok(FetchOutcome::Refreshed)
    }
}

/// Blocking notification shown for a failed fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn from_error(error: &DiaryError) -> Self {
        if error.is_known() {
            Self {
                title: "Meals".to_string(),
                message: error.to_string(),
            }
        } else {
            Self {
                title: "Fetch meals".to_string(),
                message: "Could not fetch meals.".to_string(),
            }
        }
    }
}

impl From<Alert> for DiaryError {
    fn from(alert: Alert) -> Self {
        DiaryError::FetchFailed {
            title: alert.title,
            message: alert.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::sync::{Arc, Barrier};
    use std::thread;

    use chrono::{NaiveDate, NaiveTime};

    use crate::models::MealRecord;

    struct FixedFetcher {
        groups: Vec<DayGroup>,
        calls: Cell<usize>,
    }

    impl FixedFetcher {
        fn new() -> Self {
            Self {
                groups: sample_groups(),
                calls: Cell::new(0),
            }
        }
    }

    impl MealFetcher for FixedFetcher {
        fn fetch_all(&self) -> Result<Vec<DayGroup>> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.groups.clone())
        }
    }

    struct FailingFetcher;

    impl MealFetcher for FailingFetcher {
        fn fetch_all(&self) -> Result<Vec<DayGroup>> {
            Err(DiaryError::Domain("Storage is locked".to_string()))
        }
    }

    /// Asks the home state to refresh again while its own fetch is running.
    struct ReentrantFetcher<'a> {
        home: &'a HomeState,
        nested: RefCell<Option<FetchOutcome>>,
        inner: FixedFetcher,
    }

    impl MealFetcher for ReentrantFetcher<'_> {
        fn fetch_all(&self) -> Result<Vec<DayGroup>> {
            let outcome = self.home.refresh(&self.inner)?;
            *self.nested.borrow_mut() = Some(outcome);
            Ok(sample_groups())
        }
    }

    /// Blocks inside the fetch until the test releases it.
    struct GatedFetcher {
        entered: Arc<Barrier>,
        release: Arc<Barrier>,
    }

    impl MealFetcher for GatedFetcher {
        fn fetch_all(&self) -> Result<Vec<DayGroup>> {
            self.entered.wait();
            self.release.wait();
            Ok(sample_groups())
        }
    }

    fn sample_groups() -> Vec<DayGroup> {
        let meal = MealRecord {
            id: "meal-1".to_string(),
            name: "Salad".to_string(),
            description: String::new(),
            time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            is_healthy: true,
        };
        vec![DayGroup::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            vec![meal],
        )]
    }

    #[test]
    fn test_refresh_updates_meals_and_stats() {
        let fetcher = FixedFetcher::new();
        let home = HomeState::new();

        assert_eq!(home.refresh(&fetcher).unwrap(), FetchOutcome::Refreshed);
        assert_eq!(home.meals().len(), 1);
        assert_eq!(home.stats().all_meals_count, 1);
        assert!(!home.is_loading());
    }

    #[test]
    fn test_nested_refresh_is_skipped() {
        let home = HomeState::new();
        let fetcher = ReentrantFetcher {
            home: &home,
            nested: RefCell::new(None),
            inner: FixedFetcher::new(),
        };

        assert_eq!(home.refresh(&fetcher).unwrap(), FetchOutcome::Refreshed);
        assert_eq!(*fetcher.nested.borrow(), Some(FetchOutcome::Skipped));
        assert_eq!(fetcher.inner.calls.get(), 0);
        assert_eq!(home.meals().len(), 1);
        assert!(!home.is_loading());
    }

    #[test]
    fn test_concurrent_refresh_is_skipped() {
        let home = Arc::new(HomeState::new());
        let entered = Arc::new(Barrier::new(2));
        let release = Arc::new(Barrier::new(2));

        let worker = {
            let home = Arc::clone(&home);
            let fetcher = GatedFetcher {
                entered: Arc::clone(&entered),
                release: Arc::clone(&release),
            };
            thread::spawn(move || home.refresh(&fetcher).unwrap())
        };

        entered.wait();
        assert!(home.is_loading());
        let fetcher = FixedFetcher::new();
        assert_eq!(home.refresh(&fetcher).unwrap(), FetchOutcome::Skipped);
        assert_eq!(fetcher.calls.get(), 0);
        release.wait();

        assert_eq!(worker.join().unwrap(), FetchOutcome::Refreshed);
        assert!(!home.is_loading());
        assert_eq!(home.stats().all_meals_count, 1);
    }

    #[test]
    fn test_failed_refresh_keeps_previous_state() {
        let home = HomeState::new();
        home.refresh(&FixedFetcher::new()).unwrap();

        let err = home.refresh(&FailingFetcher).unwrap_err();
        assert!(err.is_known());
        assert_eq!(home.meals().len(), 1);
        assert!(!home.is_loading());
    }

    #[test]
    fn test_alert_for_known_and_unclassified_errors() {
        let known = Alert::from_error(&DiaryError::Domain("Storage is locked".to_string()));
        assert_eq!(known.title, "Meals");
        assert_eq!(known.message, "Storage is locked");

        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        let other = Alert::from_error(&DiaryError::Io(io));
        assert_eq!(other.title, "Fetch meals");
        assert_eq!(other.message, "Could not fetch meals.");

        let reported = DiaryError::from(other);
        assert_eq!(reported.to_string(), "Fetch meals: Could not fetch meals.");
    }
}
