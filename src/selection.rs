//! Day card selection.
//!
//! Two implicit states: no entries (placeholders shown) and entries present
//! with one active index. The active index never points past the entries.

use crate::models::{Condition, ForecastEntry};
use crate::{NimbusError, Result};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastSelection {
    entries: Vec<ForecastEntry>,
    active_index: usize,
}

impl ForecastSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a fresh result set; the first card becomes active.
    pub fn replace_entries(&mut self, entries: Vec<ForecastEntry>) {
        self.entries = entries;
        self.active_index = 0;
    }

    /// Activate the card at `index`. Indices without a card are rejected and
    /// leave the selection untouched.
    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.entries.len() {
            return Err(NimbusError::validation(format!(
                "No forecast day at position {index} ({} available)",
                self.entries.len()
            )));
        }
        self.active_index = index;
        Ok(())
    }

    /// Move back to the first card without touching the entries
    pub fn reset(&mut self) {
        self.active_index = 0;
    }

    /// Pull an out-of-range active index back to the first card.
    pub fn clamp_active_index(&mut self) {
        if self.active_index >= self.entries.len() {
            self.active_index = 0;
        }
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    #[must_use]
    pub fn entries(&self) -> &[ForecastEntry] {
        &self.entries
    }

    /// The active card, else the first card, else nothing
    #[must_use]
    pub fn active_entry(&self) -> Option<&ForecastEntry> {
        self.entries
            .get(self.active_index)
            .or_else(|| self.entries.first())
    }

    /// Condition of the active card; clear while there are no cards
    #[must_use]
    pub fn active_condition(&self) -> Condition {
        self.active_entry()
            .map(|entry| entry.condition)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn active_temperature(&self) -> Option<f64> {
        self.active_entry().map(|entry| entry.temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(count: usize) -> Vec<ForecastEntry> {
        (0..count)
            .map(|i| ForecastEntry {
                id: format!("2024-01-0{}", i + 1),
                day_label: "Mon".to_string(),
                date_label: "Jan 1".to_string(),
                full_date_label: "Monday, January 1".to_string(),
                condition: if i % 2 == 0 {
                    Condition::Rainy
                } else {
                    Condition::Snowy
                },
                temperature: i as f64,
            })
            .collect()
    }

    #[test]
    fn test_empty_selection_shows_placeholders() {
        let selection = ForecastSelection::new();
        assert!(selection.entries().is_empty());
        assert!(selection.active_entry().is_none());
        assert_eq!(selection.active_condition(), Condition::Clear);
        assert_eq!(selection.active_temperature(), None);
    }

    #[test]
    fn test_select_and_replace() {
        let mut selection = ForecastSelection::new();
        selection.replace_entries(entries(5));
        selection.select(3).unwrap();
        assert_eq!(selection.active_index(), 3);
        assert_eq!(selection.active_temperature(), Some(3.0));
        assert_eq!(selection.active_condition(), Condition::Snowy);

        selection.replace_entries(entries(5));
        assert_eq!(selection.active_index(), 0);
    }

    #[test]
    fn test_shrinking_result_resets_index() {
        let mut selection = ForecastSelection::new();
        selection.replace_entries(entries(5));
        selection.select(4).unwrap();

        selection.replace_entries(entries(2));
        assert_eq!(selection.active_index(), 0);
        assert_eq!(selection.active_entry().map(|e| e.id.as_str()), Some("2024-01-01"));
    }

    #[test]
    fn test_out_of_range_select_is_rejected() {
        let mut selection = ForecastSelection::new();
        selection.replace_entries(entries(2));
        selection.select(1).unwrap();

        let err = selection.select(2).unwrap_err();
        assert!(matches!(err, NimbusError::Validation { .. }));
        assert_eq!(selection.active_index(), 1);
    }

    #[test]
    fn test_clamp_active_index() {
        let mut selection = ForecastSelection {
            entries: entries(2),
            active_index: 4,
        };
        // Falls back to the first card even before clamping
        assert_eq!(selection.active_temperature(), Some(0.0));

        selection.clamp_active_index();
        assert_eq!(selection.active_index(), 0);

        let mut empty = ForecastSelection {
            entries: Vec::new(),
            active_index: 3,
        };
        empty.clamp_active_index();
        assert_eq!(empty.active_index(), 0);
    }
}
