//! Client-side date window resolution and filtering
//!
//! The provider cannot filter search results by date range server-side, so a
//! search over-fetches via `max_results` and filters locally. [`DateWindow`]
//! resolves the user's symbolic or ISO date bounds into a concrete inclusive
//! range against an injected reference date, keeping the resolution
//! deterministic and testable.

use chrono::{Days, NaiveDate};
use tracing::warn;

use crate::error::{ArxivError, Result};

/// Resolved inclusive date range used to filter records by submission date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    /// Resolve raw date bounds into a concrete window
    ///
    /// Each bound accepts `"today"`, `"yesterday"`, or a strict `YYYY-MM-DD`
    /// date. `reference_date` is the current date at call time; symbolic
    /// inputs are resolved against it.
    ///
    /// Emits a warning (not an error) when the window starts before
    /// `reference_date - 1 day`: the server cannot date-filter, so an older
    /// window may need a larger `max_results` to be fully covered.
    ///
    /// # Errors
    ///
    /// * `ArxivError::InvalidDate` - if a bound matches none of the accepted forms
    /// * `ArxivError::InvalidRange` - if the resolved start is after the end
    ///
    /// # Example
    ///
    /// ```
    /// use arxiv_client_rs::DateWindow;
    /// use chrono::NaiveDate;
    ///
    /// let today = NaiveDate::from_ymd_opt(2023, 5, 10).unwrap();
    /// let window = DateWindow::resolve("2023-05-01", "today", today).unwrap();
    /// assert!(window.contains(NaiveDate::from_ymd_opt(2023, 5, 4).unwrap()));
    /// ```
    pub fn resolve(start_raw: &str, end_raw: &str, reference_date: NaiveDate) -> Result<Self> {
        let start = resolve_bound(start_raw, reference_date)?;
        let end = resolve_bound(end_raw, reference_date)?;

        if start > end {
            return Err(ArxivError::InvalidRange { start, end });
        }

        let yesterday = reference_date - Days::new(1);
        if start < yesterday {
            warn!(
                start = %start,
                "window starts before yesterday; the server cannot filter by date, \
                 so max_results may need to be larger than the default to cover it"
            );
        }

        Ok(Self { start, end })
    }

    /// Inclusive membership test: `start <= date <= end`
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// First date inside the window
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last date inside the window
    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

fn resolve_bound(raw: &str, reference_date: NaiveDate) -> Result<NaiveDate> {
    match raw {
        "today" => Ok(reference_date),
        "yesterday" => Ok(reference_date - Days::new(1)),
        other => NaiveDate::parse_from_str(other, "%Y-%m-%d").map_err(|_| {
            ArxivError::InvalidDate {
                input: other.to_string(),
            }
        }),
    }
}
