//! Exercise log filtering.
//!
//! A log request carries optional bounds and an optional limit. Before the
//! repository is queried the request is resolved into a concrete
//! [`LogWindow`]: `from` defaults to the Unix epoch day, `to` to the current
//! UTC day, and a limit of zero means "no limit".

use std::num::NonZeroU32;

use chrono::NaiveDate;

use super::{Exercise, User};

/// Earliest day included when a log request omits `from` (1970-01-01).
#[must_use]
pub fn default_from() -> NaiveDate {
    NaiveDate::default()
}

/// Optional filters accepted by the log endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<u32>,
}

impl LogFilter {
    /// Resolve defaults against `today`.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use exercise_tracker::domain::{LogFilter, default_from};
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");
    /// let window = LogFilter { limit: Some(0), ..LogFilter::default() }.resolve(today);
    /// assert_eq!(window.from(), default_from());
    /// assert_eq!(window.to(), today);
    /// assert_eq!(window.limit(), None);
    /// ```
    #[must_use]
    pub fn resolve(self, today: NaiveDate) -> LogWindow {
        LogWindow {
            from: self.from.unwrap_or_else(default_from),
            to: self.to.unwrap_or(today),
            limit: self.limit.and_then(NonZeroU32::new),
        }
    }
}

/// Inclusive date range plus an optional maximum entry count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogWindow {
    from: NaiveDate,
    to: NaiveDate,
    limit: Option<NonZeroU32>,
}

impl LogWindow {
    /// Build a window from explicit bounds.
    #[must_use]
    pub const fn new(from: NaiveDate, to: NaiveDate, limit: Option<NonZeroU32>) -> Self {
        Self { from, to, limit }
    }

    #[must_use]
    pub const fn from(&self) -> NaiveDate {
        self.from
    }

    #[must_use]
    pub const fn to(&self) -> NaiveDate {
        self.to
    }

    #[must_use]
    pub const fn limit(&self) -> Option<NonZeroU32> {
        self.limit
    }

    /// Whether `date` lies within the inclusive range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    /// True when no date can satisfy the range.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.from > self.to
    }
}

/// An owner together with the exercises matching a [`LogWindow`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseLog {
    owner: User,
    entries: Vec<Exercise>,
}

impl ExerciseLog {
    #[must_use]
    pub fn new(owner: User, entries: Vec<Exercise>) -> Self {
        Self { owner, entries }
    }

    #[must_use]
    pub fn owner(&self) -> &User {
        &self.owner
    }

    /// Entries in storage order.
    #[must_use]
    pub fn entries(&self) -> &[Exercise] {
        &self.entries
    }

    /// Number of returned entries.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}
