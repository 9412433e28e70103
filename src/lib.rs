pub mod api;
pub mod config;
pub mod ledger;
pub mod models;
pub mod service;

pub use config::AppConfig;
pub use ledger::FileLedgerSource;
pub use service::SalesAggregator;
