// ==============================================================================
// Identifier Validation
// ==============================================================================
//
// Every label in the model is an `Identifier`. The only way to obtain one is
// through `Identifier::new` (or the `FromStr`/`TryFrom` conversions that call
// it), so a declaration can never hold a label that fails the grammar.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// The identifier grammar, anchored at both ends.
pub(crate) const IDENTIFIER_PATTERN: &str = "^[A-Za-z][0-9A-Za-z_]*$";

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(IDENTIFIER_PATTERN).expect("identifier pattern is valid"));

/// A validated label: a letter followed by letters, digits, or underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    /// Validate `candidate` against the identifier grammar.
    ///
    /// ```
    /// use protoschema::Identifier;
    ///
    /// assert!(Identifier::new("broogle").is_ok());
    /// assert!(Identifier::new("1Invalid").is_err());
    /// ```
    pub fn new(candidate: impl Into<String>) -> Result<Self> {
        let candidate = candidate.into();
        if IDENTIFIER.is_match(&candidate) {
            Ok(Identifier(candidate))
        } else {
            tracing::debug!(%candidate, "rejected identifier");
            Err(Error::InvalidIdentifier { candidate })
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Identifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for Identifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Identifier::new(s)
    }
}

impl TryFrom<&str> for Identifier {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Identifier::new(value)
    }
}

impl TryFrom<String> for Identifier {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Identifier::new(value)
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
