//! Swizzle pairs.
//!
//! A pair names the method to replace (`old`), its replacement (`new`), and
//! whether both names live in the class-level (static) table. Pairs are
//! written `old <-> new` for instance methods and `old <~> new` for static ones.

use crate::{MethodKind, Selector};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Operator used for instance pairs.
pub const INSTANCE_OPERATOR: &str = "<->";
/// Operator used for static pairs.
pub const STATIC_OPERATOR: &str = "<~>";

/// One method substitution. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SwizzlePair {
    old: Selector,
    new: Selector,
    is_static: bool,
}

impl SwizzlePair {
    /// Create a pair. Neither selector is checked until the pair is applied.
    pub fn new(old: impl Into<Selector>, new: impl Into<Selector>, is_static: bool) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
            is_static,
        }
    }

    /// Create an instance-method pair (`old <-> new`).
    pub fn instance(old: impl Into<Selector>, new: impl Into<Selector>) -> Self {
        Self::new(old, new, false)
    }

    /// Create a static (class-level) pair (`old <~> new`).
    pub fn class(old: impl Into<Selector>, new: impl Into<Selector>) -> Self {
        Self::new(old, new, true)
    }

    pub fn old(&self) -> &Selector {
        &self.old
    }

    pub fn new_selector(&self) -> &Selector {
        &self.new
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// The method table this pair is resolved against.
    pub fn kind(&self) -> MethodKind {
        MethodKind::from_static(self.is_static)
    }

    /// The notation operator for this pair.
    pub fn operator(&self) -> &'static str {
        if self.is_static {
            STATIC_OPERATOR
        } else {
            INSTANCE_OPERATOR
        }
    }
}

impl fmt::Display for SwizzlePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.old, self.operator(), self.new)
    }
}

/// Error parsing pair notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid swizzle pair: {input:?} (expected `old <-> new` or `old <~> new`)")]
pub struct PairParseError {
    pub input: String,
}

impl FromStr for SwizzlePair {
    type Err = PairParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || PairParseError {
            input: s.to_string(),
        };

        let (is_static, (old, new)) = match (
            s.split_once(INSTANCE_OPERATOR),
            s.split_once(STATIC_OPERATOR),
        ) {
            (Some(parts), None) => (false, parts),
            (None, Some(parts)) => (true, parts),
            _ => return Err(err()),
        };

        let old = old.trim();
        let new = new.trim();
        let valid = |name: &str| {
            !name.is_empty() && !name.chars().any(|c| c.is_whitespace() || c == '<' || c == '>')
        };
        if !valid(old) || !valid(new) {
            return Err(err());
        }

        Ok(SwizzlePair::new(old, new, is_static))
    }
}

/// Builder for an ordered list of pairs.
///
/// Order is preserved exactly; duplicates are kept.
#[derive(Debug, Clone, Default)]
pub struct PairBuilder {
    pairs: Vec<SwizzlePair>,
}

impl PairBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an instance pair.
    pub fn swap(mut self, old: impl Into<Selector>, new: impl Into<Selector>) -> Self {
        self.pairs.push(SwizzlePair::instance(old, new));
        self
    }

    /// Append a static pair.
    pub fn swap_static(mut self, old: impl Into<Selector>, new: impl Into<Selector>) -> Self {
        self.pairs.push(SwizzlePair::class(old, new));
        self
    }

    /// Append an already constructed pair.
    pub fn pair(mut self, pair: SwizzlePair) -> Self {
        self.pairs.push(pair);
        self
    }

    /// Parse and append a pair written in notation.
    pub fn parse(mut self, notation: &str) -> Result<Self, PairParseError> {
        self.pairs.push(notation.parse()?);
        Ok(self)
    }

    pub fn build(self) -> Vec<SwizzlePair> {
        self.pairs
    }
}

impl FromIterator<SwizzlePair> for PairBuilder {
    fn from_iter<I: IntoIterator<Item = SwizzlePair>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}
