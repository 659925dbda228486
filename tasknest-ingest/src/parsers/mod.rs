pub mod csv_export;
pub mod json_export;

pub use csv_export::parse_csv_export;
pub use json_export::parse_json_export;
