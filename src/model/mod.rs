pub mod collection;
pub mod definition;
pub mod field;
pub mod protocol;
pub mod reserved;
pub mod service;
pub mod text;
pub mod types;

use crate::error::Result;
use crate::identifier::Identifier;

/// A named entity of the model.
///
/// The label is always a valid [`Identifier`]. `set_label` validates the new
/// value first and keeps the old one if validation fails.
pub trait Declaration {
    fn label(&self) -> &Identifier;

    fn set_label(&mut self, label: &str) -> Result<()>;
}
