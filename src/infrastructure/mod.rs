//! Infrastructure layer for sandbox filesystem locations.

pub mod paths;

pub use paths::{get_data_dir, session_file, trace_file};
