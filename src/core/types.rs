use chrono::NaiveDate;
use serde::Serialize;

/// Numeric assumptions as supplied by the caller. Rates are fractions per year.
#[derive(Debug, Clone)]
pub struct Inputs {
    pub current_age: u32,
    pub retirement_age: u32,
    pub life_expectancy: u32,
    pub current_savings: f64,
    pub annual_contribution: f64,
    pub contribution_growth: f64,
    pub pre_return: f64,
    pub post_return: f64,
    pub inflation: f64,
    pub tax_rate: f64,
    pub retirement_spend: f64,
    pub retirement_cola: f64,
    /// Falls back to `retirement_age` when unset.
    pub social_security_start_age: Option<u32>,
    pub social_security_benefit: f64,
}

/// Inputs with every default resolved, pinned to the date the projection starts from.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub current_age: u32,
    pub retirement_age: u32,
    pub life_expectancy: u32,
    pub current_savings: f64,
    pub annual_contribution: f64,
    pub contribution_growth: f64,
    pub pre_return: f64,
    pub post_return: f64,
    pub inflation: f64,
    pub tax_rate: f64,
    pub retirement_spend: f64,
    pub retirement_cola: f64,
    pub social_security_start_age: u32,
    pub social_security_benefit: f64,
    pub as_of: NaiveDate,
}

impl Configuration {
    pub fn years(&self) -> u32 {
        self.life_expectancy
            .saturating_sub(self.current_age)
            .saturating_add(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRecord {
    pub age: u32,
    pub year: i32,
    pub start_balance: f64,
    pub contribution: f64,
    /// Gross, pre-tax amount taken from the portfolio.
    pub withdrawal: f64,
    /// After-tax need the withdrawal covers; zero before retirement.
    pub net_spending_need: f64,
    pub social_security: f64,
    pub growth: f64,
    pub tax: f64,
    pub end_balance: f64,
    pub real_end_balance: f64,
    pub is_retired: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub years: Vec<YearRecord>,
    pub balance_at_retirement: f64,
    pub real_balance_at_retirement: f64,
    pub ending_balance: f64,
    pub real_ending_balance: f64,
    pub years_funded: u32,
}

impl ProjectionResult {
    /// Number of simulated years spent in retirement.
    pub fn retirement_years(&self) -> u32 {
        let Some(last) = self.years.last() else {
            return 0;
        };
        self.years
            .iter()
            .find(|record| record.is_retired)
            .map(|first| last.age - first.age + 1)
            .unwrap_or(0)
    }

    pub fn is_fully_funded(&self) -> bool {
        self.years_funded >= self.retirement_years()
    }
}
