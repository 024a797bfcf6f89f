//! Table controller: one call site's snapshot + query state.
//!
//! The controller is the "parent" that owns the collection. Children (search
//! boxes, the sort toggle, pagination buttons, the create/delete key dialogs)
//! talk to it exclusively through [`TableCommand`]s; a child that changed the
//! underlying data sends [`TableCommand::Invalidate`] to have it refetched.

use std::collections::HashSet;

use tracing::{debug, warn};

use tenantdesk_auth::Session;
use tenantdesk_core::Entity;
use tenantdesk_listview::{ListView, ListViewConfig, ListViewError, Listable, QueryState, evaluate};

use crate::source::{FetchError, RecordSource};

/// Caller action on a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableCommand {
    /// Text typed into the search box of `field`.
    Search { field: String, term: String },
    /// Text typed into the numeric search box of `field`.
    NumericSearch { field: String, input: String },
    ToggleSort,
    NextPage,
    PreviousPage,
    /// The source data changed; drop the snapshot and fetch again.
    Invalidate,
}

impl TableCommand {
    pub fn search(field: impl Into<String>, term: impl Into<String>) -> Self {
        TableCommand::Search {
            field: field.into(),
            term: term.into(),
        }
    }

    pub fn numeric_search(field: impl Into<String>, input: impl Into<String>) -> Self {
        TableCommand::NumericSearch {
            field: field.into(),
            input: input.into(),
        }
    }
}

/// Outcome of the last fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Ready,
    /// The fetch failed; the snapshot was reset to empty.
    Failed(String),
}

impl LoadState {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready)
    }

    /// Caller-level message, e.g. "Error loading keys data: no session found".
    pub fn banner(&self, subject: &str) -> Option<String> {
        match self {
            LoadState::Ready => None,
            LoadState::Failed(msg) => Some(format!("Error loading {subject} data: {msg}")),
        }
    }
}

pub struct TableController<R, S> {
    name: &'static str,
    source: S,
    snapshot: Vec<R>,
    query: QueryState,
    config: ListViewConfig,
    load_state: LoadState,
    fetches: u64,
}

impl<R, S> TableController<R, S>
where
    R: Listable,
    S: RecordSource<R>,
{
    /// Build the controller and perform the initial fetch.
    pub fn load(
        name: &'static str,
        source: S,
        session: Option<&Session>,
        config: ListViewConfig,
    ) -> Self {
        let mut table = Self {
            name,
            source,
            snapshot: Vec::new(),
            query: QueryState::default(),
            config,
            load_state: LoadState::Ready,
            fetches: 0,
        };
        table.refresh(session);
        table
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn config(&self) -> &ListViewConfig {
        &self.config
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn snapshot(&self) -> &[R] {
        &self.snapshot
    }

    /// Number of fetches performed so far (initial load included).
    pub fn fetches(&self) -> u64 {
        self.fetches
    }

    /// Current visible page.
    pub fn view(&self) -> ListView<'_, R> {
        evaluate(&self.snapshot, &self.query, &self.config)
    }

    /// Apply one caller action.
    ///
    /// Only a search on a field this record shape does not expose fails; page
    /// commands on a disabled control are silent no-ops.
    pub fn dispatch(
        &mut self,
        command: TableCommand,
        session: Option<&Session>,
    ) -> Result<(), ListViewError> {
        debug!(table = self.name, ?command, "table command");

        match command {
            TableCommand::Search { field, term } => self.query.set_search::<R>(&field, term)?,
            TableCommand::NumericSearch { field, input } => {
                self.query.set_numeric::<R>(&field, &input)?
            }
            TableCommand::ToggleSort => self.query.toggle_sort(),
            TableCommand::NextPage => {
                let total_pages = self.view().total_pages();
                self.query.next_page(total_pages);
            }
            TableCommand::PreviousPage => {
                self.query.previous_page();
            }
            TableCommand::Invalidate => self.refresh(session),
        }
        Ok(())
    }

    /// Replace the snapshot with a fresh fetch. Query state is kept.
    pub fn refresh(&mut self, session: Option<&Session>) {
        self.fetches += 1;

        let result = match session {
            Some(session) => self.source.fetch(session),
            None => Err(FetchError::Unauthenticated),
        };

        match result {
            Ok(records) => {
                warn_on_duplicate_ids(self.name, &records);
                debug!(table = self.name, records = records.len(), "snapshot loaded");
                self.snapshot = records;
                self.load_state = LoadState::Ready;
            }
            Err(err) => {
                warn!(table = self.name, error = %err, "fetch failed; showing an empty table");
                self.snapshot = Vec::new();
                self.load_state = LoadState::Failed(err.to_string());
            }
        }
    }
}

fn warn_on_duplicate_ids<R: Entity>(table: &str, records: &[R]) {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id()) {
            warn!(table, id = ?record.id(), "duplicate record id in snapshot");
        }
    }
}
