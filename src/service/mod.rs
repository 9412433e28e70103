pub mod aggregator;
pub mod parser;

pub use aggregator::{build_report, ReportError, SalesAggregator};
pub use parser::parse_ledger;
