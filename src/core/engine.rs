use chrono::{Datelike, Local, NaiveDate};
use log::{debug, warn};

use super::calendar::ProjectionClock;
use super::error::InvalidConfiguration;
use super::types::{Configuration, Inputs, ProjectionResult, YearRecord};

/// Floor on `1 - tax_rate` so the gross-up division stays finite.
const MIN_AFTER_TAX_SHARE: f64 = 0.0001;

/// Oldest age a projection may run to; keeps the year count small.
pub const MAX_PROJECTION_AGE: u32 = 150;

#[derive(Debug, Clone, Copy)]
struct YearStep {
    record: YearRecord,
    balance_after_cashflow: f64,
}

#[derive(Debug, Clone, Copy)]
struct WithdrawalOutcome {
    net_spending_need: f64,
    gross_withdrawal: f64,
    tax: f64,
}

pub fn run_projection(
    inputs: &Inputs,
    as_of: Option<NaiveDate>,
) -> Result<ProjectionResult, InvalidConfiguration> {
    let config = resolve_configuration(inputs, as_of)?;
    project(&config)
}

/// Fills in the benefit start age and start date, then checks the result is projectable.
/// `as_of` defaults to today's local date.
pub fn resolve_configuration(
    inputs: &Inputs,
    as_of: Option<NaiveDate>,
) -> Result<Configuration, InvalidConfiguration> {
    let config = Configuration {
        current_age: inputs.current_age,
        retirement_age: inputs.retirement_age,
        life_expectancy: inputs.life_expectancy,
        current_savings: inputs.current_savings,
        annual_contribution: inputs.annual_contribution,
        contribution_growth: inputs.contribution_growth,
        pre_return: inputs.pre_return,
        post_return: inputs.post_return,
        inflation: inputs.inflation,
        tax_rate: inputs.tax_rate,
        retirement_spend: inputs.retirement_spend,
        retirement_cola: inputs.retirement_cola,
        social_security_start_age: inputs
            .social_security_start_age
            .unwrap_or(inputs.retirement_age),
        social_security_benefit: inputs.social_security_benefit,
        as_of: as_of.unwrap_or_else(|| Local::now().date_naive()),
    };
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Configuration) -> Result<(), InvalidConfiguration> {
    if config.retirement_age <= config.current_age {
        return Err(InvalidConfiguration::RetirementNotAfterCurrentAge {
            current_age: config.current_age,
            retirement_age: config.retirement_age,
        });
    }

    if config.life_expectancy <= config.retirement_age {
        return Err(InvalidConfiguration::LifeExpectancyNotAfterRetirement {
            retirement_age: config.retirement_age,
            life_expectancy: config.life_expectancy,
        });
    }

    if config.life_expectancy > MAX_PROJECTION_AGE {
        return Err(InvalidConfiguration::HorizonTooLong {
            life_expectancy: config.life_expectancy,
            max_age: MAX_PROJECTION_AGE,
        });
    }

    for (field, value) in [
        ("current_savings", config.current_savings),
        ("annual_contribution", config.annual_contribution),
        ("contribution_growth", config.contribution_growth),
        ("pre_return", config.pre_return),
        ("post_return", config.post_return),
        ("inflation", config.inflation),
        ("tax_rate", config.tax_rate),
        ("retirement_spend", config.retirement_spend),
        ("retirement_cola", config.retirement_cola),
        ("social_security_benefit", config.social_security_benefit),
    ] {
        if !value.is_finite() {
            return Err(InvalidConfiguration::NonFinite { field });
        }
    }

    Ok(())
}

pub fn project(config: &Configuration) -> Result<ProjectionResult, InvalidConfiguration> {
    validate(config)?;

    let clock = ProjectionClock::starting(config.as_of);
    let after_tax_share = after_tax_share(config.tax_rate);
    if after_tax_share <= MIN_AFTER_TAX_SHARE {
        warn!(
            "tax rate {} leaves no after-tax share; clamping gross-up divisor to {MIN_AFTER_TAX_SHARE}",
            config.tax_rate
        );
    }

    let mut years = Vec::with_capacity(config.years() as usize);
    let mut balance = config.current_savings;
    let mut years_funded = 0_u32;
    let mut balance_at_retirement = None;

    for year_index in 0..config.years() {
        let step = simulate_year(config, &clock, after_tax_share, year_index, balance);
        let record = step.record;

        if balance_at_retirement.is_none() && record.age == config.retirement_age {
            balance_at_retirement = Some(record.start_balance);
        }
        if record.is_retired && step.balance_after_cashflow > 0.0 {
            years_funded += 1;
        }

        balance = record.end_balance;
        years.push(record);
    }

    let balance_at_retirement = balance_at_retirement.unwrap_or(config.current_savings);
    let result = ProjectionResult {
        years,
        balance_at_retirement,
        real_balance_at_retirement: deflate(
            balance_at_retirement,
            config.inflation,
            f64::from(config.retirement_age.saturating_sub(config.current_age)),
        ),
        ending_balance: balance,
        real_ending_balance: deflate(
            balance,
            config.inflation,
            f64::from(config.life_expectancy.saturating_sub(config.current_age)),
        ),
        years_funded,
    };

    debug!(
        "projected {} years from age {}: retirement balance {:.2}, ending balance {:.2}, {} years funded",
        result.years.len(),
        config.current_age,
        result.balance_at_retirement,
        result.ending_balance,
        result.years_funded
    );

    Ok(result)
}

/// Cumulative price level after `years` of `inflation`.
pub fn price_index(inflation: f64, years: f64) -> f64 {
    (1.0 + inflation).powf(years)
}

/// Converts a nominal amount `years` from now into today's purchasing power.
pub fn deflate(nominal: f64, inflation: f64, years: f64) -> f64 {
    nominal / price_index(inflation, years)
}

fn simulate_year(
    config: &Configuration,
    clock: &ProjectionClock,
    after_tax_share: f64,
    year_index: u32,
    start_balance: f64,
) -> YearStep {
    let age = config.current_age + year_index;
    let year_fraction = clock.year_fraction(year_index);
    let time_from_start = clock.time_from_start(year_index);
    let is_retired = age >= config.retirement_age;

    let retirement_time =
        retirement_relative_time(config, age, is_retired, year_index, year_fraction);
    let spend = spending_need(config, time_from_start, retirement_time) * year_fraction;
    let benefit = benefit_income(config, age, time_from_start) * year_fraction;
    let withdrawal = plan_withdrawal(spend, benefit, is_retired, after_tax_share);
    let contribution = if is_retired {
        0.0
    } else {
        scheduled_contribution(config, year_index, year_fraction)
    };

    let balance_after_cashflow = start_balance + contribution - withdrawal.gross_withdrawal;
    let return_rate = if is_retired {
        config.post_return
    } else {
        config.pre_return
    };
    let end_balance = apply_growth(balance_after_cashflow, return_rate, year_fraction);

    YearStep {
        record: YearRecord {
            age,
            year: config.as_of.year() + year_index as i32,
            start_balance,
            contribution,
            withdrawal: withdrawal.gross_withdrawal,
            net_spending_need: withdrawal.net_spending_need,
            social_security: benefit,
            growth: end_balance - balance_after_cashflow,
            tax: withdrawal.tax,
            end_balance,
            real_end_balance: deflate(end_balance, config.inflation, time_from_start),
            is_retired,
        },
        balance_after_cashflow,
    }
}

/// Years of cost-of-living adjustment accrued by `age`. A retirement that starts inside the
/// first (possibly partial) year only accrues over the retired part of it.
fn retirement_relative_time(
    config: &Configuration,
    age: u32,
    is_retired: bool,
    year_index: u32,
    year_fraction: f64,
) -> f64 {
    let years_since_retirement = f64::from(age.saturating_sub(config.retirement_age));
    if is_retired && year_index == 0 {
        years_since_retirement + year_fraction
    } else {
        years_since_retirement
    }
}

/// Annual spending need in nominal terms before proration.
fn spending_need(config: &Configuration, time_from_start: f64, retirement_time: f64) -> f64 {
    config.retirement_spend
        * price_index(config.inflation, time_from_start)
        * (1.0 + config.retirement_cola).powf(retirement_time)
}

/// Annual benefit in nominal terms before proration. Indexed to inflation from today, not
/// from the start age.
fn benefit_income(config: &Configuration, age: u32, time_from_start: f64) -> f64 {
    if age >= config.social_security_start_age {
        config.social_security_benefit * price_index(config.inflation, time_from_start)
    } else {
        0.0
    }
}

fn after_tax_share(tax_rate: f64) -> f64 {
    (1.0 - tax_rate).max(MIN_AFTER_TAX_SHARE)
}

fn plan_withdrawal(
    prorated_spend: f64,
    prorated_benefit: f64,
    is_retired: bool,
    after_tax_share: f64,
) -> WithdrawalOutcome {
    if !is_retired {
        return WithdrawalOutcome {
            net_spending_need: 0.0,
            gross_withdrawal: 0.0,
            tax: 0.0,
        };
    }

    let net_spending_need = (prorated_spend - prorated_benefit).max(0.0);
    let gross_withdrawal = net_spending_need / after_tax_share;
    WithdrawalOutcome {
        net_spending_need,
        gross_withdrawal,
        tax: gross_withdrawal - net_spending_need,
    }
}

/// Raises compound on whole years since the start, prorated like every other cash flow.
fn scheduled_contribution(config: &Configuration, year_index: u32, year_fraction: f64) -> f64 {
    config.annual_contribution
        * (1.0 + config.contribution_growth).powi(year_index as i32)
        * year_fraction
}

fn apply_growth(balance: f64, return_rate: f64, year_fraction: f64) -> f64 {
    balance * (1.0 + return_rate).powf(year_fraction)
}
