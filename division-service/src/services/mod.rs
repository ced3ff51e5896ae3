pub mod division;
pub mod metrics;

pub use division::{
    divide, DivisionError, DivisionObserver, DivisionOutcome, Divider, NoopObserver,
    TelemetryObserver,
};
pub use metrics::{get_metrics, init_metrics};
