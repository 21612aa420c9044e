//! Entity definitions.

mod csv_table;
mod location;
mod prediction;
mod selected_file;

pub use csv_table::CsvTable;
pub use location::LocationList;
pub use prediction::{PredictionRequest, PriceEstimate};
pub use selected_file::SelectedFile;
