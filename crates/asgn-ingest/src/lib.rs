pub mod csv_table;
pub mod error;
pub mod json;

pub use csv_table::{
    RESOURCES_FILE, TASKS_FILE, TASKS_FOR_RESOURCE_FILE, load_raw_data,
};
pub use error::{IngestError, Result};
pub use json::{from_json_str, from_json_value};
