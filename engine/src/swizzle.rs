//! Pair resolution and implementation exchange.

use swizzle_core::{ClassId, PairBuilder, SwizzlePair};
use swizzle_runtime::{ClassResolver, MethodTable};
use tracing::{debug, warn};

use crate::error::{ApplyError, SwizzleError, SwizzleResult};

/// Look up a class handle by name.
pub fn class_named<R>(resolver: &R, name: &str) -> SwizzleResult<ClassId>
where
    R: ClassResolver + ?Sized,
{
    resolver
        .class_named(name)
        .ok_or_else(|| SwizzleError::missing_class(name))
}

/// Anything that can be applied like a swizzle: a single set or a sequence of sets.
pub trait MethodSwizzle {
    /// Apply every pair in order, stopping at the first failure.
    fn apply<R>(&self, resolver: &R) -> Result<(), ApplyError>
    where
        R: ClassResolver + ?Sized;
}

/// An ordered set of pairs bound to one class.
///
/// Building a swizzle from a class handle never fails and changes nothing;
/// `apply` does the work. Pairs are applied in the order given, with no
/// reordering or deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Swizzle {
    class: ClassId,
    pairs: Vec<SwizzlePair>,
}

impl Swizzle {
    pub fn new(class: ClassId, pairs: impl IntoIterator<Item = SwizzlePair>) -> Self {
        Self {
            class,
            pairs: pairs.into_iter().collect(),
        }
    }

    /// Create a swizzle whose pairs come from a builder.
    ///
    /// ```
    /// use swizzle_core::ClassId;
    /// use swizzle_engine::{Swizzle, SwizzlePair};
    ///
    /// let swizzle = Swizzle::with(ClassId::new(0), |p| p.swap("bar", "baz").swap_static("make", "make2"));
    /// assert_eq!(swizzle.class(), ClassId::new(0));
    /// assert_eq!(swizzle.pairs()[1], SwizzlePair::class("make", "make2"));
    /// ```
    pub fn with(class: ClassId, pairs: impl FnOnce(PairBuilder) -> PairBuilder) -> Self {
        Self::new(class, pairs(PairBuilder::new()).build())
    }

    /// Create a swizzle for the class registered under `name`.
    ///
    /// Fails with `MissingClass(name)` if no such class exists.
    pub fn named<R>(
        resolver: &R,
        name: &str,
        pairs: impl IntoIterator<Item = SwizzlePair>,
    ) -> SwizzleResult<Self>
    where
        R: ClassResolver + ?Sized,
    {
        Ok(Self::new(class_named(resolver, name)?, pairs))
    }

    /// Build a swizzle and apply it at once.
    pub fn install<R>(
        resolver: &R,
        class: ClassId,
        pairs: impl IntoIterator<Item = SwizzlePair>,
    ) -> Result<Self, ApplyError>
    where
        R: ClassResolver + ?Sized,
    {
        let swizzle = Self::new(class, pairs);
        swizzle.apply(resolver)?;
        Ok(swizzle)
    }

    pub fn class(&self) -> ClassId {
        self.class
    }

    pub fn pairs(&self) -> &[SwizzlePair] {
        &self.pairs
    }

    /// Apply every pair in order, stopping at the first failure.
    pub fn apply<R>(&self, resolver: &R) -> Result<(), ApplyError>
    where
        R: ClassResolver + ?Sized,
    {
        self.apply_set(resolver, 0)
    }

    fn apply_set<R>(&self, resolver: &R, set: usize) -> Result<(), ApplyError>
    where
        R: ClassResolver + ?Sized,
    {
        let total = self.pairs.len();
        for (index, pair) in self.pairs.iter().enumerate() {
            swizzle_pair(resolver, self.class, pair).map_err(|source| {
                warn!(target: "swizzle::engine", set, index, total, error = %source, "swizzle stopped");
                ApplyError::new(set, index, total, source)
            })?;
        }
        Ok(())
    }
}

impl MethodSwizzle for Swizzle {
    fn apply<R>(&self, resolver: &R) -> Result<(), ApplyError>
    where
        R: ClassResolver + ?Sized,
    {
        Swizzle::apply(self, resolver)
    }
}

/// Sets are applied in order; the first failure aborts the rest, and sets
/// already applied stay applied.
impl MethodSwizzle for [Swizzle] {
    fn apply<R>(&self, resolver: &R) -> Result<(), ApplyError>
    where
        R: ClassResolver + ?Sized,
    {
        for (set, swizzle) in self.iter().enumerate() {
            swizzle.apply_set(resolver, set)?;
        }
        Ok(())
    }
}

impl MethodSwizzle for Vec<Swizzle> {
    fn apply<R>(&self, resolver: &R) -> Result<(), ApplyError>
    where
        R: ClassResolver + ?Sized,
    {
        self.as_slice().apply(resolver)
    }
}

/// Resolve one pair and exchange its implementations.
fn swizzle_pair<R>(resolver: &R, class: ClassId, pair: &SwizzlePair) -> SwizzleResult<()>
where
    R: ClassResolver + ?Sized,
{
    let class_name = resolver
        .class_name(class)
        .map(str::to_string)
        .unwrap_or_else(|| class.to_string());

    let table = resolver
        .method_table(class, pair.kind())
        .ok_or_else(|| SwizzleError::missing_class(class_name.as_str()))?;

    let old = table
        .lookup(pair.old())
        .ok_or_else(|| SwizzleError::missing_method(class, class_name.as_str(), true, pair))?;
    let new = table
        .lookup(pair.new_selector())
        .ok_or_else(|| SwizzleError::missing_method(class, class_name.as_str(), false, pair))?;

    // A class-level `old` that is only inherited gets its own slot, so the
    // superclass keeps its implementation.
    if pair.is_static() && table.add(pair.old(), new) {
        table.replace(pair.new_selector(), old);
        debug!(target: "swizzle::engine", class = %class_name, %pair, path = "add", "pair applied");
    } else {
        table.exchange(pair.old(), pair.new_selector());
        debug!(target: "swizzle::engine", class = %class_name, %pair, path = "exchange", "pair applied");
    }
    Ok(())
}
