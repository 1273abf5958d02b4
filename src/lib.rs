pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod market_data;
pub mod models;
pub mod projection;
pub mod report;
pub mod state;

pub use app::router;
pub use config::{AppConfig, MarketDataConfig};
pub use market_data::{MarketDataClient, Ticker};
pub use projection::project;
pub use state::AppState;
