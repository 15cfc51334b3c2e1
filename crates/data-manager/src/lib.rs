//! Data loading for the price chart widget
//! Fetches market charts for the selected range and keeps the displayed snapshot

pub mod data_store;
pub mod loader;
pub mod source;
pub mod wasm_fetch;

#[cfg(not(target_arch = "wasm32"))]
pub mod http_client;

pub use data_store::ChartStore;
pub use loader::DataLoader;
pub use source::{MarketDataSource, MarketEndpoint};
pub use wasm_fetch::FetchClient;

#[cfg(not(target_arch = "wasm32"))]
pub use http_client::HttpClient;
