use crate::errors::AppError;
use crate::market_data::Ticker;
use crate::models::{
    Assumptions, HealthResponse, ProjectionInput, ProjectionReport, ProjectionRequest,
    QuoteLookup, TickerProjectionRequest,
};
use crate::projection::project;
use crate::report::build_report;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

pub const MAX_YEARS: u32 = 50;
pub const MAX_TAX_RATE_PCT: f64 = 50.0;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn get_quote(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
) -> Result<Json<QuoteLookup>, AppError> {
    let ticker = require_ticker(&ticker)?;
    Ok(Json(state.market_data.fetch(&ticker).await))
}

pub async fn create_projection(
    Json(payload): Json<ProjectionRequest>,
) -> Result<Json<ProjectionReport>, AppError> {
    let current_price = payload
        .current_price
        .ok_or_else(|| AppError::bad_request("cannot project without a current price"))?;
    let input = to_input(&payload.assumptions, payload.dividend_yield_pct, current_price);
    validate_input(&input)?;

    Ok(Json(build_report(project(&input))))
}

pub async fn create_ticker_projection(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
    Json(payload): Json<TickerProjectionRequest>,
) -> Result<Json<ProjectionReport>, AppError> {
    let ticker = require_ticker(&ticker)?;
    let lookup = state.market_data.fetch(&ticker).await;
    if let Some(message) = lookup.error {
        return Err(AppError::bad_gateway(message));
    }
    let current_price = lookup
        .price
        .ok_or_else(|| AppError::not_found(format!("no quote available for {ticker}")))?;
    let dividend_yield_pct = payload
        .dividend_yield_pct
        .or(lookup.dividend_yield_pct)
        .unwrap_or(0.0);

    let input = to_input(&payload.assumptions, dividend_yield_pct, current_price);
    validate_input(&input)?;

    info!(
        "projecting {ticker} over {} years at price {current_price:.2}",
        input.years
    );
    Ok(Json(build_report(project(&input))))
}

fn require_ticker(raw: &str) -> Result<Ticker, AppError> {
    Ticker::parse(raw).ok_or_else(|| AppError::bad_request("ticker must be a valid symbol"))
}

fn to_input(assumptions: &Assumptions, dividend_yield_pct: f64, current_price: f64) -> ProjectionInput {
    ProjectionInput {
        initial_investment: assumptions.initial_investment,
        monthly_contribution: assumptions.monthly_contribution,
        years: assumptions.years,
        dividend_yield_pct,
        stock_growth_pct: assumptions.stock_growth_pct,
        tax_rate_pct: assumptions.tax_rate_pct,
        current_price,
    }
}

fn validate_input(input: &ProjectionInput) -> Result<(), AppError> {
    let non_negative = [
        ("initial_investment", input.initial_investment),
        ("monthly_contribution", input.monthly_contribution),
        ("dividend_yield_pct", input.dividend_yield_pct),
        ("stock_growth_pct", input.stock_growth_pct),
    ];
    for (name, value) in non_negative {
        if !value.is_finite() || value < 0.0 {
            return Err(AppError::bad_request(format!(
                "{name} must be a non-negative number"
            )));
        }
    }

    if !(1..=MAX_YEARS).contains(&input.years) {
        return Err(AppError::bad_request(format!(
            "years must be between 1 and {MAX_YEARS}"
        )));
    }

    if !input.tax_rate_pct.is_finite() || !(0.0..=MAX_TAX_RATE_PCT).contains(&input.tax_rate_pct) {
        return Err(AppError::bad_request(format!(
            "tax_rate_pct must be between 0 and {MAX_TAX_RATE_PCT}"
        )));
    }

    if !input.current_price.is_finite() {
        return Err(AppError::bad_request("current_price must be a number"));
    }

    Ok(())
}
