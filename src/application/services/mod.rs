//! Application services.

/// CSV tokenizer for preview rendering.
pub mod csv_parser;
/// Price conversion and currency formatting.
pub mod price_formatter;

pub use csv_parser::parse_csv;
pub use price_formatter::format_estimate;
