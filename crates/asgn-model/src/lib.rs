pub mod data;
pub mod error;
pub mod frame;
pub mod options;
pub mod solution;

pub use data::{ModelData, RawData, columns};
pub use error::{AsgnError, Result};
pub use options::SolveOptions;
pub use solution::{ASSIGNMENT_TOLERANCE, Assignment, SolutionData};
