use indexmap::IndexMap;

use crate::error::Result;
use crate::identifier::Identifier;

use super::Declaration;
use super::collection::{Definitions, EnumFields, Kind, Kinded, MessageFields, Validate, Validated};
use super::field::Member;

/// A holder of nested message and enumeration definitions.
///
/// Order is preserved and is the order definitions are printed in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    pub definitions: Validated<Definitions>,
}

impl Container {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a direct child definition by label.
    #[must_use]
    pub fn find(&self, label: &str) -> Option<&Definition> {
        self.definitions.iter().find(|d| d.label() == label)
    }

    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.definitions.iter().filter_map(|d| match d {
            Definition::Message(m) => Some(m),
            Definition::Enumeration(_) => None,
        })
    }

    pub fn enumerations(&self) -> impl Iterator<Item = &Enumeration> {
        self.definitions.iter().filter_map(|d| match d {
            Definition::Enumeration(e) => Some(e),
            Definition::Message(_) => None,
        })
    }
}

impl Validate for Container {
    fn validate(&self) -> Result<()> {
        self.definitions.validate()
    }
}

/// An `enum` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumeration {
    pub label: Identifier,
    pub fields: Validated<EnumFields>,
    /// Emitted as `option allow_alias = true;` when some number is actually
    /// aliased. Not checked against the member numbers.
    pub allow_alias: bool,
}

impl Enumeration {
    pub fn new(label: &str) -> Result<Self> {
        Ok(Enumeration {
            label: Identifier::new(label)?,
            fields: Validated::new(),
            allow_alias: false,
        })
    }

    #[must_use]
    pub fn with_allow_alias(mut self, allow_alias: bool) -> Self {
        self.allow_alias = allow_alias;
        self
    }

    /// Numbers carried by more than one member, with the labels using them,
    /// in order of first appearance.
    #[must_use]
    pub fn aliases(&self) -> IndexMap<u32, Vec<&Identifier>> {
        let mut numbers: IndexMap<u32, Vec<&Identifier>> = IndexMap::new();
        for member in &self.fields {
            if let Member::Field(f) = member {
                numbers.entry(f.number).or_default().push(&f.label);
            }
        }
        numbers.retain(|_, labels| labels.len() > 1);
        numbers
    }

    #[must_use]
    pub fn is_aliased(&self) -> bool {
        !self.aliases().is_empty()
    }
}

impl Validate for Enumeration {
    fn validate(&self) -> Result<()> {
        self.fields.validate()
    }
}

/// A `message` declaration: its own fields plus nested definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub label: Identifier,
    pub fields: Validated<MessageFields>,
    pub container: Container,
}

impl Message {
    pub fn new(label: &str) -> Result<Self> {
        Ok(Message {
            label: Identifier::new(label)?,
            fields: Validated::new(),
            container: Container::new(),
        })
    }
}

impl Validate for Message {
    fn validate(&self) -> Result<()> {
        self.fields.validate()?;
        self.container.validate()
    }
}

/// A declaration that can be placed in a [`Container`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Definition {
    Message(Message),
    Enumeration(Enumeration),
}

impl Kinded for Definition {
    fn kind(&self) -> Kind {
        match self {
            Definition::Message(_) => Kind::Message,
            Definition::Enumeration(_) => Kind::Enumeration,
        }
    }
}

impl Validate for Definition {
    fn validate(&self) -> Result<()> {
        match self {
            Definition::Message(m) => m.validate(),
            Definition::Enumeration(e) => e.validate(),
        }
    }
}

impl Declaration for Definition {
    fn label(&self) -> &Identifier {
        match self {
            Definition::Message(m) => &m.label,
            Definition::Enumeration(e) => &e.label,
        }
    }

    fn set_label(&mut self, label: &str) -> Result<()> {
        match self {
            Definition::Message(m) => m.set_label(label),
            Definition::Enumeration(e) => e.set_label(label),
        }
    }
}

impl From<Message> for Definition {
    fn from(m: Message) -> Self {
        Definition::Message(m)
    }
}

impl From<Enumeration> for Definition {
    fn from(e: Enumeration) -> Self {
        Definition::Enumeration(e)
    }
}

impl Declaration for Enumeration {
    fn label(&self) -> &Identifier {
        &self.label
    }

    fn set_label(&mut self, label: &str) -> Result<()> {
        self.label = Identifier::new(label)?;
        Ok(())
    }
}

impl Declaration for Message {
    fn label(&self) -> &Identifier {
        &self.label
    }

    fn set_label(&mut self, label: &str) -> Result<()> {
        self.label = Identifier::new(label)?;
        Ok(())
    }
}
