pub mod aggregate;
pub mod record;
pub mod report;

pub use aggregate::{LedgerAccumulator, PeriodAggregate};
pub use record::SalesRecord;
pub use report::{PopularItemStats, RevenueLeader, SalesReport};
