pub mod handlers;

pub use handlers::{health_check, sales_data};
