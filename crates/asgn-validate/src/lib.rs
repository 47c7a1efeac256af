pub mod validator;

pub use validator::{ValidationReport, validate};
