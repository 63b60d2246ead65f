use crate::error::{IgError, Result};
use crate::ingest;
use crate::paginate::{self, PageView};
use crate::profile::{self, Dataset};
use crate::store::{Store, USERS_DATA_KEY};
use std::path::Path;

/// Receives every error the browser swallows.
pub trait ErrorReporter {
    fn report(&mut self, context: &str, err: &IgError);
}

/// Logs and otherwise keeps the previous state on screen.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl ErrorReporter for LogReporter {
    fn report(&mut self, context: &str, err: &IgError) {
        log::error!("{context}: {err}");
    }
}

/// Logs like [`LogReporter`] and keeps the latest message so a front end
/// can show it.
#[derive(Debug, Default, Clone)]
pub struct BannerReporter {
    last: Option<String>,
}

impl BannerReporter {
    pub fn take(&mut self) -> Option<String> {
        self.last.take()
    }
}

impl ErrorReporter for BannerReporter {
    fn report(&mut self, context: &str, err: &IgError) {
        LogReporter.report(context, err);
        self.last = Some(format!("{context}: {err}"));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub current_page: usize,
    pub show_verified: bool,
    pub file_loaded: bool,
    pub total_users: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            current_page: 1,
            show_verified: true,
            file_loaded: false,
            total_users: 0,
        }
    }
}

/// Owns the loaded dataset, its persisted copy and the view state.
///
/// The dataset is only ever replaced as a whole. A failed load leaves
/// both the in-memory records and the stored copy as they were.
pub struct ProfileBrowser<S, R = LogReporter> {
    store: S,
    reporter: R,
    dataset: Dataset,
    state: ViewState,
}

impl<S: Store> ProfileBrowser<S> {
    pub fn new(store: S) -> Self {
        Self::with_reporter(store, LogReporter)
    }
}

impl<S: Store, R: ErrorReporter> ProfileBrowser<S, R> {
    pub fn with_reporter(store: S, reporter: R) -> Self {
        Self {
            store,
            reporter,
            dataset: Vec::new(),
            state: ViewState::default(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }

    /// Loads the dataset persisted by an earlier session, if any.
    pub fn restore_from_store(&mut self) -> Option<usize> {
        let stored = match self.store.get(USERS_DATA_KEY) {
            Ok(Some(text)) => text,
            Ok(None) => return None,
            Err(err) => {
                self.reporter.report("reading stored profiles", &err);
                return None;
            }
        };
        match profile::parse_dataset(&stored) {
            Ok(dataset) => {
                let count = dataset.len();
                self.dataset = dataset;
                self.state.file_loaded = true;
                self.state.current_page = 1;
                self.recount();
                log::info!("restored {count} profiles from store");
                Some(count)
            }
            Err(err) => {
                self.reporter.report("parsing stored profiles", &err);
                None
            }
        }
    }

    /// Reads, parses and commits `path`. Failures go to the reporter.
    pub fn load_from_file(&mut self, path: &Path) -> Option<usize> {
        match self.try_load_from_file(path) {
            Ok(count) => Some(count),
            Err(err) => {
                self.reporter
                    .report(&format!("loading {}", path.display()), &err);
                None
            }
        }
    }

    /// Parse-and-commit step of an ingestion whose read already finished.
    pub fn load_from_text(&mut self, text: &str) -> Option<usize> {
        match self.try_load_from_text(text) {
            Ok(count) => Some(count),
            Err(err) => {
                self.reporter.report("loading profiles", &err);
                None
            }
        }
    }

    pub fn try_load_from_file(&mut self, path: &Path) -> Result<usize> {
        let text = ingest::read_text(path)?;
        self.try_load_from_text(&text)
    }

    pub fn try_load_from_text(&mut self, text: &str) -> Result<usize> {
        let dataset = profile::parse_dataset(text)?;
        self.commit(dataset)
    }

    /// Hands an error raised outside the browser (e.g. a failed background
    /// read) to the reporter.
    pub fn report(&mut self, context: &str, err: &IgError) {
        self.reporter.report(context, err);
    }

    fn commit(&mut self, dataset: Dataset) -> Result<usize> {
        let serialized = profile::serialize_dataset(&dataset)?;
        self.store.set(USERS_DATA_KEY, &serialized)?;
        let count = dataset.len();
        self.dataset = dataset;
        self.state.current_page = 1;
        self.state.file_loaded = true;
        self.recount();
        log::info!("loaded {count} profiles");
        Ok(count)
    }

    pub fn toggle_verified(&mut self) {
        self.state.show_verified = !self.state.show_verified;
        self.state.current_page = 1;
        self.recount();
        log::debug!(
            "show_verified={} total_users={}",
            self.state.show_verified,
            self.state.total_users
        );
    }

    pub fn total_pages(&self) -> usize {
        paginate::total_pages(self.state.total_users)
    }

    pub fn next_page(&mut self) -> bool {
        if self.state.current_page < self.total_pages() {
            self.state.current_page += 1;
            true
        } else {
            false
        }
    }

    pub fn prev_page(&mut self) -> bool {
        if self.state.current_page > 1 {
            self.state.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Jumps straight to `page`, which must name an existing page.
    pub fn go_to_page(&mut self, page: usize) -> Result<()> {
        let total = self.total_pages();
        if page == 0 || page > total {
            return Err(IgError::InvalidPage { page, total });
        }
        self.state.current_page = page;
        Ok(())
    }

    pub fn view(&self) -> PageView<'_> {
        PageView::build(
            &self.dataset,
            self.state.show_verified,
            self.state.current_page,
        )
    }

    fn recount(&mut self) {
        self.state.total_users = paginate::total_count(&self.dataset, self.state.show_verified);
    }
}
