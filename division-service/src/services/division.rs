//! Division core.
//!
//! [`divide`] is the pure operation. [`Divider`] wraps it with a tracing span
//! and hands every outcome to an injected [`DivisionObserver`], so the
//! arithmetic itself never touches logging or metrics state.

use metrics::{counter, histogram};
use service_core::error::AppError;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DivisionError {
    #[error("Cannot divide by zero")]
    DivisionByZero,
}

impl From<DivisionError> for AppError {
    fn from(err: DivisionError) -> Self {
        match err {
            DivisionError::DivisionByZero => AppError::BadRequest(anyhow::Error::new(err)),
        }
    }
}

/// Divide `dividend` by `divisor` using native `f64` semantics.
///
/// A divisor equal to zero (either sign) is rejected rather than producing
/// an infinity or NaN.
pub fn divide(dividend: f64, divisor: f64) -> Result<f64, DivisionError> {
    if divisor == 0.0 {
        return Err(DivisionError::DivisionByZero);
    }
    Ok(dividend / divisor)
}

/// What a single division call did.
#[derive(Debug, Clone, PartialEq)]
pub struct DivisionOutcome {
    pub dividend: f64,
    pub divisor: f64,
    pub result: Result<f64, DivisionError>,
    pub elapsed: Duration,
}

impl DivisionOutcome {
    /// Metric label for this outcome. A quotient that overflowed to a
    /// non-finite value is distinguished from a successful one.
    pub fn status(&self) -> &'static str {
        match self.result {
            Ok(quotient) if quotient.is_finite() => "success",
            Ok(_) => "overflow",
            Err(DivisionError::DivisionByZero) => "division_by_zero",
        }
    }
}

/// Side channel notified after every division.
pub trait DivisionObserver: Send + Sync {
    fn observe(&self, outcome: &DivisionOutcome);
}

/// Discards outcomes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl DivisionObserver for NoopObserver {
    fn observe(&self, _outcome: &DivisionOutcome) {}
}

/// Emits a structured log event and records Prometheus metrics.
#[derive(Debug, Clone, Copy, Default)]
pub struct TelemetryObserver;

impl DivisionObserver for TelemetryObserver {
    fn observe(&self, outcome: &DivisionOutcome) {
        let duration_ms = outcome.elapsed.as_secs_f64() * 1000.0;

        let status = outcome.status();
        match outcome.result {
            Ok(quotient) if quotient.is_finite() => {
                tracing::info!(
                    dividend = outcome.dividend,
                    divisor = outcome.divisor,
                    result = quotient,
                    duration_ms,
                    "Division performed"
                );
            }
            Ok(quotient) => {
                tracing::warn!(
                    dividend = outcome.dividend,
                    divisor = outcome.divisor,
                    result = %quotient,
                    duration_ms,
                    "Division overflowed"
                );
            }
            Err(err) => {
                tracing::warn!(
                    dividend = outcome.dividend,
                    divisor = outcome.divisor,
                    error = %err,
                    duration_ms,
                    "Division rejected"
                );
            }
        }

        counter!("division_operations_total", "status" => status).increment(1);
        histogram!("division_operation_duration_seconds", "status" => status)
            .record(outcome.elapsed.as_secs_f64());
    }
}

/// Division service handed to request handlers.
#[derive(Clone)]
pub struct Divider {
    observer: Arc<dyn DivisionObserver>,
}

impl Divider {
    pub fn new(observer: Arc<dyn DivisionObserver>) -> Self {
        Self { observer }
    }

    #[tracing::instrument(name = "division.divide", skip(self))]
    pub fn divide(&self, dividend: f64, divisor: f64) -> Result<f64, DivisionError> {
        let start = Instant::now();
        let result = divide(dividend, divisor);

        self.observer.observe(&DivisionOutcome {
            dividend,
            divisor,
            result,
            elapsed: start.elapsed(),
        });

        result
    }
}

impl Default for Divider {
    fn default() -> Self {
        Self::new(Arc::new(TelemetryObserver))
    }
}

impl std::fmt::Debug for Divider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Divider").finish_non_exhaustive()
    }
}
