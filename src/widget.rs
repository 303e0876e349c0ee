//! Widget state and the controller that drives searches against it.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::models::{Condition, ForecastEntry};
use crate::search::{ForecastSearch, SearchOutcome};
use crate::selection::ForecastSelection;
use crate::weather::WeatherProvider;
use crate::Result;

/// Location line shown before the first search settles
pub const LOADING_LABEL: &str = "Loading forecast…";

/// Everything the host page renders
#[derive(Debug, Clone)]
pub struct WidgetState {
    location: String,
    search_value: String,
    selection: ForecastSelection,
    is_loading: bool,
    error: Option<String>,
}

/// Serializable view of [`WidgetState`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetSnapshot {
    pub location: String,
    pub search_value: String,
    pub condition: Condition,
    pub condition_label: String,
    pub icon: String,
    pub temperature: Option<f64>,
    pub date_label: Option<String>,
    pub date_time: Option<String>,
    pub entries: Vec<ForecastEntry>,
    pub active_index: usize,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl WidgetState {
    /// Initial state: loading, with the default search term in the box
    #[must_use]
    pub fn new(default_location: &str) -> Self {
        Self {
            location: LOADING_LABEL.to_string(),
            search_value: default_location.to_string(),
            selection: ForecastSelection::new(),
            is_loading: true,
            error: None,
        }
    }

    /// Start a submission. Blank queries are ignored and return `false`.
    pub fn begin_search(&mut self, query: &str) -> bool {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return false;
        }

        self.search_value = query.to_string();
        self.location = trimmed.to_string();
        self.selection.reset();
        self.is_loading = true;
        self.error = None;
        true
    }

    /// Settle a submission. Success replaces every entry at once; failure
    /// keeps the previous entries and shows the user message. Loading ends
    /// either way.
    pub fn finish_search(&mut self, result: Result<SearchOutcome>) {
        match result {
            Ok(outcome) => {
                self.selection.replace_entries(outcome.entries);
                self.location = outcome.location_label;
            }
            Err(err) => {
                warn!("Search failed: {}", err);
                self.error = Some(err.user_message());
            }
        }
        self.selection.clamp_active_index();
        self.is_loading = false;
    }

    /// Day card tap
    pub fn select(&mut self, index: usize) -> Result<()> {
        self.selection.select(index)
    }

    #[must_use]
    pub fn selection(&self) -> &ForecastSelection {
        &self.selection
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn snapshot(&self) -> WidgetSnapshot {
        let active = self.selection.active_entry();
        let condition = self.selection.active_condition();

        WidgetSnapshot {
            location: self.location.clone(),
            search_value: self.search_value.clone(),
            condition,
            condition_label: condition.label().to_string(),
            icon: condition.icon_name().to_string(),
            temperature: self.selection.active_temperature(),
            date_label: active.map(|entry| entry.full_date_label.clone()),
            date_time: active.map(|entry| entry.id.clone()),
            entries: self.selection.entries().to_vec(),
            active_index: self.selection.active_index(),
            is_loading: self.is_loading,
            error: self.error.clone(),
        }
    }
}

/// Shared widget: one state, many submitters.
///
/// The state lock is released while the network calls run, so whichever
/// search settles last writes the final state. Each search runs on its own
/// task and settles the state even when the caller stops waiting.
#[derive(Clone)]
pub struct WeatherWidget {
    search: ForecastSearch,
    state: Arc<Mutex<WidgetState>>,
}

impl WeatherWidget {
    pub fn new(provider: Arc<dyn WeatherProvider>, default_location: &str) -> Self {
        Self {
            search: ForecastSearch::new(provider),
            state: Arc::new(Mutex::new(WidgetState::new(default_location))),
        }
    }

    /// Run a search and return the state it settled into. Blank queries
    /// leave the state untouched.
    pub async fn submit(&self, query: &str) -> WidgetSnapshot {
        if !self.state.lock().await.begin_search(query) {
            return self.snapshot().await;
        }

        info!("Searching forecast for '{}'", query.trim());
        let search = self.search.clone();
        let state = Arc::clone(&self.state);
        let query = query.to_string();

        let task = tokio::spawn(async move {
            let result = search.run(&query).await;
            let mut state = state.lock().await;
            state.finish_search(result);
            state.snapshot()
        });

        match task.await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                let err = anyhow::Error::new(err).context("Forecast search task failed");
                let mut state = self.state.lock().await;
                state.finish_search(Err(err.into()));
                state.snapshot()
            }
        }
    }

    pub async fn select(&self, index: usize) -> Result<WidgetSnapshot> {
        let mut state = self.state.lock().await;
        state.select(index)?;
        Ok(state.snapshot())
    }

    pub async fn snapshot(&self) -> WidgetSnapshot {
        self.state.lock().await.snapshot()
    }
}
