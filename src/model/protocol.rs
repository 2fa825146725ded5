use crate::error::Result;
use crate::identifier::Identifier;

use super::collection::Validate;
use super::definition::Container;
use super::service::Service;

/// An `import` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub path: String,
    pub public: bool,
}

impl Import {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Import {
            path: path.into(),
            public: false,
        }
    }

    /// An `import public` statement.
    #[must_use]
    pub fn public(path: impl Into<String>) -> Self {
        Import {
            path: path.into(),
            public: true,
        }
    }
}

/// A complete schema file: package, imports, services, and top-level
/// definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Protocol {
    pub package: Option<Identifier>,
    pub imports: Vec<Import>,
    pub services: Vec<Service>,
    pub container: Container,
}

impl Protocol {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the package name. On failure the previous package is kept.
    pub fn set_package(&mut self, package: &str) -> Result<()> {
        self.package = Some(Identifier::new(package)?);
        Ok(())
    }

    pub fn clear_package(&mut self) {
        self.package = None;
    }
}

impl Validate for Protocol {
    fn validate(&self) -> Result<()> {
        self.container.validate()
    }
}
