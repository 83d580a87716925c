//! Deterministic date resolution.
//!
//! Turns coarse references like "tomorrow" into a calendar date without
//! asking the language model.

use chrono::{Duration, Local, NaiveDate};

/// Format used when a resolved date is shown to the model or the tools.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Resolve `reference` relative to `today`.
///
/// Recognises "tomorrow" and "today" anywhere in the reference, ignoring
/// case. A missing reference, and anything else, resolves to `today`.
pub fn resolve_from(today: NaiveDate, reference: Option<&str>) -> NaiveDate {
    let Some(reference) = reference else {
        return today;
    };
    let lowered = reference.to_lowercase();

    if lowered.contains("tomorrow") {
        today + Duration::days(1)
    } else if lowered.contains("today") {
        today
    } else {
        // Weekday and relative-week references are not understood yet.
        if !lowered.trim().is_empty() {
            tracing::warn!(reference, "Unrecognised date reference, using today");
        }
        today
    }
}

/// Date resolver anchored either to the system clock or to a fixed day.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateResolver {
    anchor: Option<NaiveDate>,
}

impl DateResolver {
    /// Resolver that reads today's date from the local clock on every call.
    pub fn system() -> Self {
        Self { anchor: None }
    }

    /// Resolver that always treats `today` as the current date.
    pub fn fixed(today: NaiveDate) -> Self {
        Self {
            anchor: Some(today),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.anchor.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn resolve(&self, reference: Option<&str>) -> NaiveDate {
        resolve_from(self.today(), reference)
    }
}
