use chrono::{Datelike, NaiveDate};

/// Share of the calendar year remaining from `date` through December 31st, counting `date` itself.
pub fn first_year_fraction(date: NaiveDate) -> f64 {
    let days_in_year = NaiveDate::from_ymd_opt(date.year(), 12, 31)
        .map(|last| f64::from(last.ordinal()))
        .unwrap_or(365.0);
    let day_of_year = f64::from(date.ordinal());
    (days_in_year - (day_of_year - 1.0)) / days_in_year
}

/// Time bookkeeping for the projection. Only the first year can be partial.
#[derive(Debug, Clone, Copy)]
pub struct ProjectionClock {
    first_year_fraction: f64,
}

impl ProjectionClock {
    pub fn starting(date: NaiveDate) -> Self {
        Self {
            first_year_fraction: first_year_fraction(date),
        }
    }

    pub fn year_fraction(&self, year_index: u32) -> f64 {
        if year_index == 0 {
            self.first_year_fraction
        } else {
            1.0
        }
    }

    /// Continuous years elapsed from the start date at the point `year_index` is valued.
    pub fn time_from_start(&self, year_index: u32) -> f64 {
        if year_index == 0 {
            self.first_year_fraction
        } else {
            f64::from(year_index)
        }
    }
}
