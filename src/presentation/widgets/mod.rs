mod footer_bar;
mod form_fields;
mod header_bar;
mod input;
mod select;
mod status_bar;

pub use footer_bar::{FooterBar, FooterBarStyle};
pub use form_fields::FieldList;
pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use input::TextInput;
pub use select::SelectInput;
pub use status_bar::{StatusBar, StatusLevel};
