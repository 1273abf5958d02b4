use crate::market_data::MarketDataClient;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub market_data: Arc<MarketDataClient>,
}

impl AppState {
    pub fn new(market_data: MarketDataClient) -> Self {
        Self {
            market_data: Arc::new(market_data),
        }
    }
}
