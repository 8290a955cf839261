pub mod json_array;

pub use json_array::extract_json_array;
