pub mod builder;

pub use builder::{build_series, parse_date};
