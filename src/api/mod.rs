pub mod report;

use axum::{
    Router,
    extract::{Json, Query},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use log::info;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::core::{Inputs, MAX_PROJECTION_AGE, ProjectionResult, YearRecord, run_projection};
use report::{ChartSeries, SummaryMode, SummaryView, chart_series, summarize, visible_rows};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliSummaryMode {
    Nominal,
    Real,
}

impl From<CliSummaryMode> for SummaryMode {
    fn from(value: CliSummaryMode) -> Self {
        match value {
            CliSummaryMode::Nominal => SummaryMode::Nominal,
            CliSummaryMode::Real => SummaryMode::Real,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ProjectPayload {
    current_age: Option<u32>,
    retirement_age: Option<u32>,
    life_expectancy: Option<u32>,
    current_savings: Option<f64>,
    annual_contribution: Option<f64>,
    contribution_growth: Option<f64>,
    pre_return: Option<f64>,
    post_return: Option<f64>,
    inflation: Option<f64>,
    tax_rate: Option<f64>,
    retirement_spend: Option<f64>,
    #[serde(alias = "retirementCOLA")]
    retirement_cola: Option<f64>,
    social_security_start_age: Option<u32>,
    social_security_benefit: Option<f64>,

    as_of: Option<NaiveDate>,
    summary_mode: Option<SummaryMode>,
    show_all_rows: Option<bool>,
}

#[derive(Parser, Debug)]
#[command(
    name = "runway",
    about = "Deterministic retirement savings projection (contributions, growth, taxed withdrawals, inflation, delayed benefit)"
)]
struct Cli {
    #[arg(long, default_value_t = 30)]
    current_age: u32,
    #[arg(long, default_value_t = 65)]
    retirement_age: u32,
    #[arg(long, default_value_t = 90, help = "Age to project through")]
    life_expectancy: u32,
    #[arg(long, default_value_t = 50000.0)]
    current_savings: f64,
    #[arg(
        long,
        default_value_t = 10000.0,
        help = "Annual contribution until retirement"
    )]
    annual_contribution: f64,
    #[arg(
        long,
        default_value_t = 0.0,
        help = "Annual contribution growth in percent (e.g. pay rises)"
    )]
    contribution_growth: f64,
    #[arg(
        long,
        default_value_t = 7.0,
        help = "Expected annual return before retirement in percent"
    )]
    pre_return: f64,
    #[arg(
        long,
        default_value_t = 4.0,
        help = "Expected annual return in retirement in percent"
    )]
    post_return: f64,
    #[arg(
        long,
        default_value_t = 3.0,
        help = "Expected annual inflation in percent"
    )]
    inflation: f64,
    #[arg(
        long,
        default_value_t = 15.0,
        help = "Flat effective tax rate on withdrawals in percent"
    )]
    tax_rate: f64,
    #[arg(
        long,
        default_value_t = 40000.0,
        help = "Annual retirement spending in today's money"
    )]
    retirement_spend: f64,
    #[arg(
        long,
        default_value_t = 3.0,
        help = "Cost-of-living raise on retirement spending in percent, on top of inflation"
    )]
    retirement_cola: f64,
    #[arg(long, help = "Benefit start age; defaults to retirement age")]
    social_security_start_age: Option<u32>,
    #[arg(
        long,
        default_value_t = 20000.0,
        help = "Annual benefit in today's money"
    )]
    social_security_benefit: f64,
    #[arg(long, help = "Projection start date (YYYY-MM-DD); defaults to today")]
    as_of: Option<NaiveDate>,
    #[arg(long, value_enum, default_value_t = CliSummaryMode::Nominal)]
    summary_mode: CliSummaryMode,
    #[arg(long, help = "Print every projected year instead of the first 18")]
    all_rows: bool,
    #[arg(long, help = "Print the JSON response instead of a table")]
    json: bool,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
struct ReportOptions {
    summary_mode: SummaryMode,
    show_all_rows: bool,
}

#[derive(Debug)]
struct ApiRequest {
    inputs: Inputs,
    as_of: Option<NaiveDate>,
    options: ReportOptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectResponse {
    as_of: NaiveDate,
    summary: SummaryView,
    balance_at_retirement: f64,
    real_balance_at_retirement: f64,
    ending_balance: f64,
    real_ending_balance: f64,
    years_funded: u32,
    total_years: usize,
    years: Vec<YearRecord>,
    chart: ChartSeries,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn build_inputs(cli: &Cli) -> Result<Inputs, String> {
    for (name, age) in [
        ("--current-age", cli.current_age),
        ("--retirement-age", cli.retirement_age),
        ("--life-expectancy", cli.life_expectancy),
    ] {
        if age > MAX_PROJECTION_AGE {
            return Err(format!("{name} must be <= {MAX_PROJECTION_AGE}"));
        }
    }

    for (name, value) in [
        ("--current-savings", cli.current_savings),
        ("--annual-contribution", cli.annual_contribution),
        ("--retirement-spend", cli.retirement_spend),
        ("--social-security-benefit", cli.social_security_benefit),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(format!("{name} must be >= 0"));
        }
    }

    for (name, rate) in [
        ("--contribution-growth", cli.contribution_growth),
        ("--pre-return", cli.pre_return),
        ("--post-return", cli.post_return),
        ("--inflation", cli.inflation),
        ("--tax-rate", cli.tax_rate),
        ("--retirement-cola", cli.retirement_cola),
    ] {
        if !rate.is_finite() {
            return Err(format!("{name} must be a finite percentage"));
        }
    }

    for (name, rate) in [
        ("--contribution-growth", cli.contribution_growth),
        ("--pre-return", cli.pre_return),
        ("--post-return", cli.post_return),
        ("--inflation", cli.inflation),
        ("--retirement-cola", cli.retirement_cola),
    ] {
        if rate <= -100.0 {
            return Err(format!("{name} must be > -100"));
        }
    }

    if cli.tax_rate < 0.0 {
        return Err("--tax-rate must be >= 0".to_string());
    }

    Ok(Inputs {
        current_age: cli.current_age,
        retirement_age: cli.retirement_age,
        life_expectancy: cli.life_expectancy,
        current_savings: cli.current_savings,
        annual_contribution: cli.annual_contribution,
        contribution_growth: cli.contribution_growth / 100.0,
        pre_return: cli.pre_return / 100.0,
        post_return: cli.post_return / 100.0,
        inflation: cli.inflation / 100.0,
        tax_rate: cli.tax_rate / 100.0,
        retirement_spend: cli.retirement_spend,
        retirement_cola: cli.retirement_cola / 100.0,
        social_security_start_age: cli.social_security_start_age,
        social_security_benefit: cli.social_security_benefit,
    })
}

/// Runs the command-line front end and returns what should be printed.
pub fn run_cli<I, T>(args: I) -> Result<String, String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;
    let inputs = build_inputs(&cli)?;
    let as_of = cli.as_of.unwrap_or_else(|| Local::now().date_naive());
    let options = ReportOptions {
        summary_mode: cli.summary_mode.into(),
        show_all_rows: cli.all_rows,
    };

    let result = run_projection(&inputs, Some(as_of)).map_err(|e| e.to_string())?;
    let response = build_project_response(&result, as_of, options);

    if cli.json {
        return serde_json::to_string_pretty(&response).map_err(|e| e.to_string());
    }

    let mut out = report::render_summary(&response.summary);
    out.push('\n');
    out.push_str(&report::render_table(&response.years));
    if !options.show_all_rows && response.years.len() < response.total_years {
        out.push_str(&format!(
            "... {} more years (use --all-rows)\n",
            response.total_years - response.years.len()
        ));
    }
    Ok(out)
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route(
            "/api/project",
            get(project_get_handler).post(project_post_handler),
        )
        .fallback(not_found_handler);

    let listener = TcpListener::bind(addr).await?;
    info!("projection API listening on http://{addr}");

    axum::serve(listener, app).await
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn project_get_handler(Query(payload): Query<ProjectPayload>) -> Response {
    project_handler_impl(payload).await
}

async fn project_post_handler(Json(payload): Json<ProjectPayload>) -> Response {
    project_handler_impl(payload).await
}

async fn project_handler_impl(payload: ProjectPayload) -> Response {
    let request = match api_request_from_payload(payload) {
        Ok(request) => request,
        Err(msg) => return error_response(StatusCode::BAD_REQUEST, &msg),
    };

    let as_of = request.as_of.unwrap_or_else(|| Local::now().date_naive());
    let result = match run_projection(&request.inputs, Some(as_of)) {
        Ok(result) => result,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, &e.to_string()),
    };

    json_response(
        StatusCode::OK,
        build_project_response(&result, as_of, request.options),
    )
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
fn api_request_from_json(json: &str) -> Result<ApiRequest, String> {
    let payload = serde_json::from_str::<ProjectPayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    api_request_from_payload(payload)
}

fn api_request_from_payload(payload: ProjectPayload) -> Result<ApiRequest, String> {
    let mut cli = default_cli_for_api();
    let options = ReportOptions {
        summary_mode: payload.summary_mode.unwrap_or_default(),
        show_all_rows: payload.show_all_rows.unwrap_or(false),
    };

    if let Some(v) = payload.current_age {
        cli.current_age = v;
    }
    if let Some(v) = payload.retirement_age {
        cli.retirement_age = v;
    }
    if let Some(v) = payload.life_expectancy {
        cli.life_expectancy = v;
    }
    if let Some(v) = payload.current_savings {
        cli.current_savings = v;
    }
    if let Some(v) = payload.annual_contribution {
        cli.annual_contribution = v;
    }
    if let Some(v) = payload.contribution_growth {
        cli.contribution_growth = v;
    }
    if let Some(v) = payload.pre_return {
        cli.pre_return = v;
    }
    if let Some(v) = payload.post_return {
        cli.post_return = v;
    }
    if let Some(v) = payload.inflation {
        cli.inflation = v;
    }
    if let Some(v) = payload.tax_rate {
        cli.tax_rate = v;
    }
    if let Some(v) = payload.retirement_spend {
        cli.retirement_spend = v;
    }
    if let Some(v) = payload.retirement_cola {
        cli.retirement_cola = v;
    }
    if payload.social_security_start_age.is_some() {
        cli.social_security_start_age = payload.social_security_start_age;
    }
    if let Some(v) = payload.social_security_benefit {
        cli.social_security_benefit = v;
    }

    clamp_ages(&mut cli);
    let inputs = build_inputs(&cli)?;

    Ok(ApiRequest {
        inputs,
        as_of: payload.as_of,
        options,
    })
}

/// Pulls age fields back into a projectable order, the way the web form does when a field
/// loses focus.
fn clamp_ages(cli: &mut Cli) {
    if cli.retirement_age <= cli.current_age {
        cli.retirement_age = cli.current_age.saturating_add(1);
    }
    if cli.life_expectancy <= cli.retirement_age {
        cli.life_expectancy = cli.retirement_age.saturating_add(1);
    }
    if let Some(start_age) = cli.social_security_start_age {
        cli.social_security_start_age =
            Some(start_age.clamp(cli.current_age, cli.life_expectancy));
    }
}

fn default_cli_for_api() -> Cli {
    Cli {
        current_age: 30,
        retirement_age: 65,
        life_expectancy: 90,
        current_savings: 50_000.0,
        annual_contribution: 10_000.0,
        contribution_growth: 0.0,
        pre_return: 7.0,
        post_return: 4.0,
        inflation: 3.0,
        tax_rate: 15.0,
        retirement_spend: 40_000.0,
        retirement_cola: 3.0,
        social_security_start_age: None,
        social_security_benefit: 20_000.0,
        as_of: None,
        summary_mode: CliSummaryMode::Nominal,
        all_rows: false,
        json: false,
    }
}

fn build_project_response(
    result: &ProjectionResult,
    as_of: NaiveDate,
    options: ReportOptions,
) -> ProjectResponse {
    ProjectResponse {
        as_of,
        summary: summarize(result, options.summary_mode),
        balance_at_retirement: result.balance_at_retirement,
        real_balance_at_retirement: result.real_balance_at_retirement,
        ending_balance: result.ending_balance,
        real_ending_balance: result.real_ending_balance,
        years_funded: result.years_funded,
        total_years: result.years.len(),
        years: visible_rows(&result.years, options.show_all_rows).to_vec(),
        chart: chart_series(result),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn sample_cli() -> Cli {
        default_cli_for_api()
    }

    #[test]
    fn build_inputs_converts_percentages_to_fractions() {
        let inputs = build_inputs(&sample_cli()).expect("valid inputs");
        assert_approx(inputs.pre_return, 0.07);
        assert_approx(inputs.post_return, 0.04);
        assert_approx(inputs.inflation, 0.03);
        assert_approx(inputs.tax_rate, 0.15);
        assert_approx(inputs.retirement_cola, 0.03);
        assert_approx(inputs.current_savings, 50_000.0);
        assert_eq!(inputs.social_security_start_age, None);
    }

    #[test]
    fn build_inputs_rejects_negative_money() {
        let mut cli = sample_cli();
        cli.retirement_spend = -1.0;
        let err = build_inputs(&cli).expect_err("must reject negative spend");
        assert!(err.contains("--retirement-spend"));
    }

    #[test]
    fn build_inputs_rejects_non_finite_rates() {
        let mut cli = sample_cli();
        cli.inflation = f64::NAN;
        let err = build_inputs(&cli).expect_err("must reject NaN");
        assert!(err.contains("--inflation"));
    }

    #[test]
    fn build_inputs_rejects_rate_at_or_below_minus_hundred() {
        for flag in [
            "--contribution-growth",
            "--pre-return",
            "--post-return",
            "--inflation",
            "--retirement-cola",
        ] {
            let mut cli = sample_cli();
            match flag {
                "--contribution-growth" => cli.contribution_growth = -100.0,
                "--pre-return" => cli.pre_return = -150.0,
                "--post-return" => cli.post_return = -100.0,
                "--inflation" => cli.inflation = -200.0,
                _ => cli.retirement_cola = -100.0,
            }
            let err = build_inputs(&cli).expect_err("must reject <= -100 rate");
            assert_eq!(err, format!("{flag} must be > -100"));
        }

        let mut cli = sample_cli();
        cli.pre_return = -99.0;
        let inputs = build_inputs(&cli).expect("rates above -100 are allowed");
        assert_approx(inputs.pre_return, -0.99);
    }

    #[test]
    fn build_inputs_rejects_ages_beyond_max_projection_age() {
        let mut cli = sample_cli();
        cli.life_expectancy = MAX_PROJECTION_AGE + 1;
        let err = build_inputs(&cli).expect_err("must reject huge horizon");
        assert_eq!(err, "--life-expectancy must be <= 150");

        let mut cli = sample_cli();
        cli.life_expectancy = MAX_PROJECTION_AGE;
        assert!(build_inputs(&cli).is_ok());
    }

    #[test]
    fn api_request_rejects_huge_ages_without_overflow() {
        let err = api_request_from_json(r#"{"lifeExpectancy": 4294967295}"#)
            .expect_err("must reject huge life expectancy");
        assert!(err.contains("--life-expectancy"));

        let err = api_request_from_json(r#"{"currentAge": 4294967295}"#)
            .expect_err("must reject huge current age");
        assert!(err.contains("--current-age"));
    }

    #[test]
    fn clamp_ages_saturates_at_max_u32() {
        let mut cli = sample_cli();
        cli.current_age = u32::MAX;
        cli.social_security_start_age = Some(70);
        clamp_ages(&mut cli);
        assert_eq!(cli.retirement_age, u32::MAX);
        assert_eq!(cli.life_expectancy, u32::MAX);
        assert_eq!(cli.social_security_start_age, Some(u32::MAX));
    }

    #[tokio::test]
    async fn project_handler_returns_bad_request_with_error_body() {
        let payload = ProjectPayload {
            pre_return: Some(-150.0),
            ..ProjectPayload::default()
        };
        let response = project_handler_impl(payload).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL),
            Some(&header::HeaderValue::from_static("no-store"))
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        let value: serde_json::Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(value["error"], "--pre-return must be > -100");
    }

    #[tokio::test]
    async fn project_handler_returns_projection_with_no_store() {
        let payload = ProjectPayload {
            as_of: NaiveDate::from_ymd_opt(2025, 1, 1),
            ..ProjectPayload::default()
        };
        let response = project_handler_impl(payload).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL),
            Some(&header::HeaderValue::from_static("no-store"))
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        let value: serde_json::Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(value["totalYears"], 61);
        assert_eq!(value["asOf"], "2025-01-01");
    }

    #[test]
    fn build_inputs_accepts_tax_rate_at_or_above_hundred_percent() {
        let mut cli = sample_cli();
        cli.tax_rate = 100.0;
        let inputs = build_inputs(&cli).expect("degenerate tax rate is allowed");
        assert_approx(inputs.tax_rate, 1.0);
    }

    #[test]
    fn api_request_from_json_parses_web_keys() {
        let request = api_request_from_json(
            r#"{
                "currentAge": 40,
                "retirementAge": 60,
                "lifeExpectancy": 95,
                "currentSavings": 250000,
                "annualContribution": 18000,
                "contributionGrowth": 2,
                "preReturn": 6,
                "postReturn": 4.5,
                "inflation": 2.5,
                "taxRate": 20,
                "retirementSpend": 55000,
                "retirementCOLA": 1,
                "socialSecurityStartAge": 67,
                "socialSecurityBenefit": 24000,
                "asOf": "2025-07-02",
                "summaryMode": "real",
                "showAllRows": true
            }"#,
        )
        .expect("valid payload");

        let inputs = &request.inputs;
        assert_eq!(inputs.current_age, 40);
        assert_eq!(inputs.retirement_age, 60);
        assert_eq!(inputs.life_expectancy, 95);
        assert_approx(inputs.current_savings, 250_000.0);
        assert_approx(inputs.contribution_growth, 0.02);
        assert_approx(inputs.post_return, 0.045);
        assert_approx(inputs.inflation, 0.025);
        assert_approx(inputs.tax_rate, 0.20);
        assert_approx(inputs.retirement_cola, 0.01);
        assert_eq!(inputs.social_security_start_age, Some(67));
        assert_approx(inputs.social_security_benefit, 24_000.0);
        assert_eq!(request.as_of, NaiveDate::from_ymd_opt(2025, 7, 2));
        assert_eq!(request.options.summary_mode, SummaryMode::Real);
        assert!(request.options.show_all_rows);
    }

    #[test]
    fn api_request_from_json_uses_defaults_for_missing_fields() {
        let request = api_request_from_json("{}").expect("empty payload is valid");
        assert_eq!(request.inputs.current_age, 30);
        assert_eq!(request.inputs.retirement_age, 65);
        assert_eq!(request.inputs.life_expectancy, 90);
        assert_eq!(request.as_of, None);
        assert_eq!(request.options, ReportOptions::default());
    }

    #[test]
    fn api_request_clamps_age_ordering() {
        let request = api_request_from_json(
            r#"{"currentAge": 50, "retirementAge": 45, "lifeExpectancy": 40}"#,
        )
        .expect("clamped payload");
        assert_eq!(request.inputs.retirement_age, 51);
        assert_eq!(request.inputs.life_expectancy, 52);
    }

    #[test]
    fn api_request_clamps_benefit_start_age_into_horizon() {
        let early = api_request_from_json(r#"{"currentAge": 40, "socialSecurityStartAge": 20}"#)
            .expect("valid payload");
        assert_eq!(early.inputs.social_security_start_age, Some(40));

        let late = api_request_from_json(r#"{"lifeExpectancy": 85, "socialSecurityStartAge": 99}"#)
            .expect("valid payload");
        assert_eq!(late.inputs.social_security_start_age, Some(85));
    }

    #[test]
    fn api_request_rejects_unknown_summary_mode() {
        let err = api_request_from_json(r#"{"summaryMode": "sideways"}"#)
            .expect_err("must reject unknown mode");
        assert!(err.contains("Invalid API JSON payload"));
    }

    #[test]
    fn project_response_serialization_contains_expected_fields() {
        let request = api_request_from_json(r#"{"asOf": "2025-01-01"}"#).expect("valid payload");
        let as_of = request.as_of.expect("as_of set");
        let result = run_projection(&request.inputs, Some(as_of)).expect("projection");
        let response = build_project_response(&result, as_of, request.options);

        assert_eq!(response.total_years, 61);
        assert_eq!(response.years.len(), report::DEFAULT_VISIBLE_ROWS);
        assert_eq!(response.chart.ages.len(), 61);

        let json = serde_json::to_string(&response).expect("serializes");
        assert!(json.contains("\"asOf\":\"2025-01-01\""));
        assert!(json.contains("\"summary\""));
        assert!(json.contains("\"balanceAtRetirementLabel\""));
        assert!(json.contains("\"realEndingBalance\""));
        assert!(json.contains("\"yearsFunded\""));
        assert!(json.contains("\"startBalance\""));
        assert!(json.contains("\"realEndBalance\""));
        assert!(json.contains("\"isRetired\""));
        assert!(json.contains("\"socialSecurity\""));
        assert!(json.contains("\"nominalBalance\""));
        assert!(json.contains("\"mode\":\"nominal\""));
    }

    #[test]
    fn run_cli_prints_summary_and_truncated_table() {
        let out = run_cli(["runway", "--as-of", "2025-01-01"]).expect("cli output");
        assert!(out.contains("Balance at retirement: $"));
        assert!(out.contains("Years funded:"));
        assert!(out.contains("Contribution"));
        assert!(out.contains("... 43 more years (use --all-rows)"));
    }

    #[test]
    fn run_cli_prints_every_row_when_asked() {
        let out = run_cli([
            "runway",
            "--as-of",
            "2025-01-01",
            "--current-age",
            "60",
            "--retirement-age",
            "62",
            "--life-expectancy",
            "64",
            "--all-rows",
        ])
        .expect("cli output");
        assert!(out.contains("  2029   64 "));
        assert!(!out.contains("more years"));
    }

    #[test]
    fn run_cli_emits_json_response() {
        let out = run_cli(["runway", "--as-of", "2025-01-01", "--json", "--summary-mode", "real"])
            .expect("cli output");
        let value: serde_json::Value = serde_json::from_str(&out).expect("valid json");
        assert_eq!(value["totalYears"], 61);
        assert_eq!(value["summary"]["mode"], "real");
    }

    #[test]
    fn run_cli_surfaces_invalid_age_ordering() {
        let err = run_cli(["runway", "--current-age", "70", "--retirement-age", "65"])
            .expect_err("must reject");
        assert!(err.contains("retirement age 65 must be greater than current age 70"));
    }
}
