pub mod division;
pub mod health;
pub mod metrics;

pub use division::divide;
pub use health::health_check;
pub use metrics::metrics_handler;
