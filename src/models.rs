use serde::{Deserialize, Serialize};

/// One element of the provider's `/quote/{ticker}` array.
#[derive(Debug, Clone, Deserialize)]
pub struct Quote {
    #[serde(default)]
    pub price: f64,
}

/// One element of the provider's `/profile/{ticker}` array.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    #[serde(rename = "lastDiv", default)]
    pub last_annual_dividend: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub price: f64,
    pub dividend_yield_pct: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteLookup {
    pub ticker: String,
    pub price: Option<f64>,
    pub dividend_yield_pct: Option<f64>,
    pub error: Option<String>,
    pub fetched_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    pub initial_investment: f64,
    pub monthly_contribution: f64,
    pub years: u32,
    pub dividend_yield_pct: f64,
    pub stock_growth_pct: f64,
    pub tax_rate_pct: f64,
    pub current_price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearPoint {
    pub year: u32,
    pub portfolio_value: f64,
    pub total_contributions: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub final_value: f64,
    pub total_contributions: f64,
    pub total_dividends_net: f64,
    pub series: Vec<YearPoint>,
}

/// Assumptions shared by both projection endpoints.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Assumptions {
    pub initial_investment: f64,
    pub monthly_contribution: f64,
    pub years: u32,
    pub stock_growth_pct: f64,
    pub tax_rate_pct: f64,
}

#[derive(Debug, Deserialize)]
pub struct ProjectionRequest {
    #[serde(flatten)]
    pub assumptions: Assumptions,
    pub dividend_yield_pct: f64,
    pub current_price: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct TickerProjectionRequest {
    #[serde(flatten)]
    pub assumptions: Assumptions,
    pub dividend_yield_pct: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub final_value: String,
    pub total_contributions: String,
    pub total_dividends: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionReport {
    pub summary: Summary,
    #[serde(flatten)]
    pub result: ProjectionResult,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
