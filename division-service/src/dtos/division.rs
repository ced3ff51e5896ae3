use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

pub const DIVISION_OPERATION: &str = "division";

/// Query string of `GET /`. Missing operands default to zero.
///
/// When a parameter is repeated the query is rejected as unprocessable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Validate)]
#[serde(default)]
pub struct DivisionParams {
    #[validate(custom(function = "validate_finite"))]
    pub first_number: f64,
    #[validate(custom(function = "validate_finite"))]
    pub second_number: f64,
}

/// JSON cannot carry infinities or NaN back to the caller.
fn validate_finite(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        let mut err = ValidationError::new("finite");
        err.message = Some(Cow::Borrowed("must be a finite number"));
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DivisionResponse {
    pub result: f64,
    pub operation: String,
    pub first_number: f64,
    pub second_number: f64,
}

impl DivisionResponse {
    pub fn new(params: DivisionParams, result: f64) -> Self {
        Self {
            result,
            operation: DIVISION_OPERATION.to_string(),
            first_number: params.first_number,
            second_number: params.second_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_params_default_to_zero() {
        let params: DivisionParams = serde_urlencoded::from_str("").unwrap();
        assert_eq!(params, DivisionParams::default());

        let params: DivisionParams = serde_urlencoded::from_str("first_number=4").unwrap();
        assert_eq!(params.first_number, 4.0);
        assert_eq!(params.second_number, 0.0);
    }

    #[test]
    fn test_non_finite_operands_are_rejected() {
        let params = DivisionParams {
            first_number: f64::INFINITY,
            second_number: 1.0,
        };
        let errors = params.validate().unwrap_err();
        let field_errors = errors.field_errors();
        assert!(field_errors.contains_key("first_number"));
        assert!(!field_errors.contains_key("second_number"));

        let params = DivisionParams {
            first_number: 1.0,
            second_number: f64::NAN,
        };
        assert!(params.validate().is_err());

        let params = DivisionParams {
            first_number: f64::MAX,
            second_number: -f64::MIN_POSITIVE,
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_repeated_parameter_is_rejected() {
        let parsed: Result<DivisionParams, _> =
            serde_urlencoded::from_str("first_number=1&first_number=2&second_number=1");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_response_shape() {
        let params = DivisionParams {
            first_number: 10.0,
            second_number: 2.0,
        };
        let body = serde_json::to_value(DivisionResponse::new(params, 5.0)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "result": 5.0,
                "operation": "division",
                "first_number": 10.0,
                "second_number": 2.0
            })
        );
    }
}
