use std::env;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MARKET_DATA_BASE_URL: &str = "https://financialmodelingprep.com/api/v3";

#[derive(Debug, Clone)]
pub struct MarketDataConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub market_data: MarketDataConfig,
}

impl AppConfig {
    /// Reads `PORT`, `MARKET_DATA_BASE_URL` and `MARKET_DATA_API_KEY`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let port = non_empty("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let base_url = non_empty("MARKET_DATA_BASE_URL")
            .map(|value| value.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_MARKET_DATA_BASE_URL.to_string());

        Self {
            port,
            market_data: MarketDataConfig {
                base_url,
                api_key: non_empty("MARKET_DATA_API_KEY"),
            },
        }
    }
}
