use std::fmt;
use std::num::{NonZeroU64, NonZeroUsize};

use crate::error::{AppError, ParseError, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositiveU64(NonZeroU64);

impl PositiveU64 {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl TryFrom<u64> for PositiveU64 {
    type Error = ValidationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        NonZeroU64::new(value)
            .map(PositiveU64)
            .ok_or_else(|| ValidationError::ValueTooSmall { min: 1 })
    }
}

impl std::str::FromStr for PositiveU64 {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u64 = s
            .parse()
            .map_err(|err| AppError::parse(ParseError::InvalidNumber { source: err }))?;
        PositiveU64::try_from(value).map_err(AppError::validation)
    }
}

impl From<PositiveU64> for u64 {
    fn from(value: PositiveU64) -> Self {
        value.get()
    }
}

impl fmt::Display for PositiveU64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositiveUsize(NonZeroUsize);

impl PositiveUsize {
    pub const MIN: Self = Self(NonZeroUsize::MIN);

    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<usize> for PositiveUsize {
    type Error = ValidationError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        NonZeroUsize::new(value)
            .map(PositiveUsize)
            .ok_or_else(|| ValidationError::ValueTooSmall { min: 1 })
    }
}

impl From<NonZeroUsize> for PositiveUsize {
    fn from(value: NonZeroUsize) -> Self {
        Self(value)
    }
}

impl std::str::FromStr for PositiveUsize {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: usize = s
            .parse()
            .map_err(|err| AppError::parse(ParseError::InvalidNumber { source: err }))?;
        PositiveUsize::try_from(value).map_err(AppError::validation)
    }
}

impl From<PositiveUsize> for usize {
    fn from(value: PositiveUsize) -> Self {
        value.get()
    }
}

impl fmt::Display for PositiveUsize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Append-only ordered collection for repeatable option values (extra header
/// lines, cookies). Duplicates are meaningful and insertion order is
/// preserved; entries can never be removed once set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet(Vec<String>);

impl OptionSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends `value` to the end of the sequence. Never fails.
    pub fn set(&mut self, value: impl Into<String>) {
        self.0.push(value.into());
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub const fn as_slice(&self) -> &[String] {
        self.0.as_slice()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl fmt::Display for OptionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(" "))
    }
}

impl FromIterator<String> for OptionSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<String> for OptionSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<'seq> IntoIterator for &'seq OptionSet {
    type Item = &'seq String;
    type IntoIter = std::slice::Iter<'seq, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
