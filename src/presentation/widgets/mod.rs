//! Reusable widgets.

mod input;
mod preview_table;
mod select_list;
mod status_bar;

pub use input::TextInput;
pub use preview_table::PreviewTable;
pub use select_list::{SelectList, SelectOptions};
pub use status_bar::{StatusBar, StatusLevel};
