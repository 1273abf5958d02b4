//! Quote and company-profile lookups against the market data provider.

use crate::config::MarketDataConfig;
use crate::errors::MarketDataError;
use crate::models::{MarketSnapshot, Profile, Quote, QuoteLookup};
use chrono::Local;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::fmt;
use tracing::{debug, error, info};

#[derive(Debug, Clone)]
pub struct MarketDataClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl MarketDataClient {
    pub fn new(config: MarketDataConfig) -> Result<Self, MarketDataError> {
        let http = Client::builder()
            .build()
            .map_err(|err| MarketDataError::Client(err.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Best-effort lookup. Failures are logged and reported in `error`, with
    /// both values left empty.
    pub async fn fetch(&self, ticker: &Ticker) -> QuoteLookup {
        let fetched_at = Local::now().to_rfc3339();

        match self.try_fetch(ticker).await {
            Ok(Some(snapshot)) => QuoteLookup {
                ticker: ticker.to_string(),
                price: Some(snapshot.price),
                dividend_yield_pct: Some(snapshot.dividend_yield_pct),
                error: None,
                fetched_at,
            },
            Ok(None) => QuoteLookup {
                ticker: ticker.to_string(),
                price: None,
                dividend_yield_pct: None,
                error: None,
                fetched_at,
            },
            Err(err) => {
                error!("market data lookup for {ticker} failed: {err}");
                QuoteLookup {
                    ticker: ticker.to_string(),
                    price: None,
                    dividend_yield_pct: None,
                    error: Some(format!("Could not fetch data for {ticker}: {err}")),
                    fetched_at,
                }
            }
        }
    }

    /// Returns `Ok(None)` when the provider has no quote for the ticker.
    pub async fn try_fetch(&self, ticker: &Ticker) -> Result<Option<MarketSnapshot>, MarketDataError> {
        let api_key = self.api_key.as_deref().ok_or(MarketDataError::MissingApiKey)?;

        let quotes: Vec<Quote> = self.get_list("quote", ticker, api_key).await?;
        let Some(quote) = quotes.into_iter().next() else {
            info!("no quote returned for {ticker}");
            return Ok(None);
        };

        let profiles: Vec<Profile> = self.get_list("profile", ticker, api_key).await?;
        let dividend_yield_pct = profiles
            .first()
            .map(|profile| dividend_yield_pct(profile.last_annual_dividend, quote.price))
            .unwrap_or(0.0);

        info!(
            "fetched {ticker}: price {:.2}, dividend yield {:.2}%",
            quote.price, dividend_yield_pct
        );
        Ok(Some(MarketSnapshot {
            price: quote.price,
            dividend_yield_pct,
        }))
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        ticker: &Ticker,
        api_key: &str,
    ) -> Result<Vec<T>, MarketDataError> {
        let url = format!("{}/{endpoint}/{ticker}", self.base_url);
        debug!("GET {url}");

        // The request URL carries the API key, so it is stripped from errors.
        let items = self
            .http
            .get(&url)
            .query(&[("apikey", api_key)])
            .send()
            .await
            .and_then(Response::error_for_status)
            .map_err(MarketDataError::from_http)?
            .json::<Vec<T>>()
            .await
            .map_err(MarketDataError::from_http)?;
        Ok(items)
    }
}

/// Upper-cased ticker symbol limited to characters a symbol can contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticker(String);

impl Ticker {
    /// Trims and upper-cases `raw`. Returns `None` for blank input or
    /// characters that cannot appear in a symbol.
    pub fn parse(raw: &str) -> Option<Self> {
        let symbol = raw.trim().to_ascii_uppercase();
        let valid = !symbol.is_empty()
            && symbol.len() <= 16
            && symbol
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^'));
        valid.then_some(Self(symbol))
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn dividend_yield_pct(last_annual_dividend: f64, price: f64) -> f64 {
    if price > 0.0 {
        last_annual_dividend / price * 100.0
    } else {
        0.0
    }
}
