use serde::{Deserialize, Serialize};

use crate::core::{ProjectionResult, YearRecord};

/// Rows shown when the caller has not asked for the whole table.
pub const DEFAULT_VISIBLE_ROWS: usize = 18;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryMode {
    #[default]
    Nominal,
    Real,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryView {
    pub mode: SummaryMode,
    pub balance_at_retirement_label: &'static str,
    pub balance_at_retirement: f64,
    pub ending_balance_label: &'static str,
    pub ending_balance: f64,
    pub years_funded: u32,
    pub retirement_years: u32,
    pub fully_funded: bool,
    pub years_funded_label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub ages: Vec<u32>,
    pub nominal_balance: Vec<f64>,
    pub real_balance: Vec<f64>,
    pub contributions: Vec<f64>,
    /// Negated so withdrawals plot below the axis.
    pub withdrawals: Vec<f64>,
    pub social_security: Vec<f64>,
}

pub fn summarize(result: &ProjectionResult, mode: SummaryMode) -> SummaryView {
    let (balance_at_retirement, ending_balance) = match mode {
        SummaryMode::Nominal => (result.balance_at_retirement, result.ending_balance),
        SummaryMode::Real => (result.real_balance_at_retirement, result.real_ending_balance),
    };
    let (balance_at_retirement_label, ending_balance_label) = match mode {
        SummaryMode::Nominal => ("Balance at retirement", "Ending balance"),
        SummaryMode::Real => (
            "Balance at retirement (today)",
            "Ending balance (today)",
        ),
    };
    let fully_funded = result.is_fully_funded();
    let years_funded_label = if fully_funded {
        "Fully funded".to_string()
    } else {
        format!("{} years", result.years_funded)
    };

    SummaryView {
        mode,
        balance_at_retirement_label,
        balance_at_retirement,
        ending_balance_label,
        ending_balance,
        years_funded: result.years_funded,
        retirement_years: result.retirement_years(),
        fully_funded,
        years_funded_label,
    }
}

pub fn visible_rows(years: &[YearRecord], show_all: bool) -> &[YearRecord] {
    if show_all {
        years
    } else {
        &years[..years.len().min(DEFAULT_VISIBLE_ROWS)]
    }
}

pub fn chart_series(result: &ProjectionResult) -> ChartSeries {
    let mut series = ChartSeries::default();
    for row in &result.years {
        series.ages.push(row.age);
        series.nominal_balance.push(row.end_balance);
        series.real_balance.push(row.real_end_balance);
        series.contributions.push(row.contribution);
        series.withdrawals.push(-row.withdrawal);
        series.social_security.push(row.social_security);
    }
    series
}

/// Whole-dollar amount with thousands separators, e.g. `-$1,234,568`.
pub fn format_currency(value: f64) -> String {
    let rounded = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(rounded.len() + rounded.len() / 3);
    for (idx, ch) in rounded.chars().enumerate() {
        if idx > 0 && (rounded.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0.0 && rounded != "0" {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

pub fn render_summary(summary: &SummaryView) -> String {
    format!(
        "{}: {}\nYears funded: {}\n{}: {}\n",
        summary.balance_at_retirement_label,
        format_currency(summary.balance_at_retirement),
        summary.years_funded_label,
        summary.ending_balance_label,
        format_currency(summary.ending_balance),
    )
}

pub fn render_table(rows: &[YearRecord]) -> String {
    let mut out = format!(
        "{:>6} {:>4} {:>16} {:>14} {:>14} {:>14} {:>14} {:>12} {:>16} {:>16}\n",
        "Year",
        "Age",
        "Start",
        "Contribution",
        "Withdrawal",
        "Benefit",
        "Growth",
        "Tax",
        "End",
        "End (today)",
    );
    for row in rows {
        out.push_str(&format!(
            "{:>6} {:>4} {:>16} {:>14} {:>14} {:>14} {:>14} {:>12} {:>16} {:>16}\n",
            row.year,
            row.age,
            format_currency(row.start_balance),
            format_currency(row.contribution),
            format_currency(row.withdrawal),
            format_currency(row.social_security),
            format_currency(row.growth),
            format_currency(row.tax),
            format_currency(row.end_balance),
            format_currency(row.real_end_balance),
        ));
    }
    out
}
