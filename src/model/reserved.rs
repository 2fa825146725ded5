use crate::error::{Error, Result};
use crate::identifier::Identifier;

use super::collection::{Kind, Kinded, LabelList, NumberList, Validate, Validated};

/// An inclusive range of field numbers, `start to end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    start: u32,
    end: u32,
}

impl Range {
    pub fn new(start: u32, end: u32) -> Result<Self> {
        if start > end {
            tracing::debug!(start, end, "rejected reserved range");
            return Err(Error::InvalidRange { start, end });
        }
        Ok(Range { start, end })
    }

    #[must_use]
    pub fn start(&self) -> u32 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> u32 {
        self.end
    }

    #[must_use]
    pub fn contains(&self, number: u32) -> bool {
        (self.start..=self.end).contains(&number)
    }
}

/// One entry of a `reserved` number statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservedNumber {
    Single(u32),
    Range(Range),
}

impl ReservedNumber {
    #[must_use]
    pub fn contains(&self, number: u32) -> bool {
        match self {
            ReservedNumber::Single(n) => *n == number,
            ReservedNumber::Range(r) => r.contains(number),
        }
    }
}

impl From<u32> for ReservedNumber {
    fn from(n: u32) -> Self {
        ReservedNumber::Single(n)
    }
}

impl From<Range> for ReservedNumber {
    fn from(r: Range) -> Self {
        ReservedNumber::Range(r)
    }
}

impl Kinded for ReservedNumber {
    fn kind(&self) -> Kind {
        Kind::Number
    }
}

impl Validate for ReservedNumber {
    fn validate(&self) -> Result<()> {
        match self {
            ReservedNumber::Single(_) => Ok(()),
            ReservedNumber::Range(r) => Range::new(r.start, r.end).map(|_| ()),
        }
    }
}

/// `reserved 2, 15, 9 to 11;`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservedNumbers {
    pub numbers: Validated<NumberList>,
}

impl ReservedNumbers {
    /// An empty reservation, to be filled before it is attached.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_numbers<I, T>(numbers: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<ReservedNumber>,
    {
        let reserved = ReservedNumbers {
            numbers: Validated::from_items(numbers)?,
        };
        reserved.validate()?;
        Ok(reserved)
    }

    /// Whether `number` falls on any entry.
    #[must_use]
    pub fn contains(&self, number: u32) -> bool {
        self.numbers.iter().any(|n| n.contains(number))
    }
}

impl Validate for ReservedNumbers {
    fn validate(&self) -> Result<()> {
        // An empty list would print as `reserved ;`, which protoc rejects.
        if self.numbers.is_empty() {
            return Err(Error::EmptyReservation { kind: "numbers" });
        }
        self.numbers.validate()
    }
}

/// `reserved "foo", "bar";`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservedLabels {
    pub labels: Validated<LabelList>,
}

impl ReservedLabels {
    /// An empty reservation, to be filled before it is attached.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let labels = labels
            .into_iter()
            .map(Identifier::new)
            .collect::<Result<Vec<_>>>()?;
        let reserved = ReservedLabels {
            labels: Validated::from_items(labels)?,
        };
        reserved.validate()?;
        Ok(reserved)
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }
}

impl Validate for ReservedLabels {
    fn validate(&self) -> Result<()> {
        if self.labels.is_empty() {
            return Err(Error::EmptyReservation { kind: "labels" });
        }
        self.labels.validate()
    }
}

/// A reserved block inside an enumeration or message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reservation {
    Numbers(ReservedNumbers),
    Labels(ReservedLabels),
}

impl Validate for Reservation {
    fn validate(&self) -> Result<()> {
        match self {
            Reservation::Numbers(n) => n.validate(),
            Reservation::Labels(l) => l.validate(),
        }
    }
}

impl From<ReservedNumbers> for Reservation {
    fn from(r: ReservedNumbers) -> Self {
        Reservation::Numbers(r)
    }
}

impl From<ReservedLabels> for Reservation {
    fn from(r: ReservedLabels) -> Self {
        Reservation::Labels(r)
    }
}
