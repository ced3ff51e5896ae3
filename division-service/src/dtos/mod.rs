pub mod division;

pub use division::{DivisionParams, DivisionResponse, DIVISION_OPERATION};
