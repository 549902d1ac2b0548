use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Immutable numeric interval used for every axis range computation.
///
/// An unset range is represented by the NaN/NaN sentinel rather than an
/// `Option`, so that union arithmetic can treat it as an identity value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DoubleRange {
    start: f64,
    end: f64,
}

impl DoubleRange {
    /// The unset sentinel. Acts as identity under union.
    pub const EMPTY: Self = Self {
        start: f64::NAN,
        end: f64::NAN,
    };

    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Builds a range from possibly swapped bounds.
    #[must_use]
    pub fn ordered(a: f64, b: f64) -> Self {
        if a <= b {
            Self::new(a, b)
        } else {
            Self::new(b, a)
        }
    }

    #[must_use]
    pub fn start(self) -> f64 {
        self.start
    }

    #[must_use]
    pub fn end(self) -> f64 {
        self.end
    }

    #[must_use]
    pub fn delta(self) -> f64 {
        self.end - self.start
    }

    #[must_use]
    pub fn median(self) -> f64 {
        (self.start + self.end) / 2.0
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.start.is_nan() || self.end.is_nan()
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        !self.is_empty() && value >= self.start && value <= self.end
    }

    /// Union with another range: min start, max end. Empty is the identity.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        Self::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// Union with a single value.
    #[must_use]
    pub fn union_value(self, value: f64) -> Self {
        if value.is_nan() {
            return self;
        }
        self.union(Self::new(value, value))
    }
}

impl Default for DoubleRange {
    /// An unset range, not a zero-width range at the origin: the default
    /// must stay the union identity so defaulted series ranges never drag
    /// an aggregate toward zero.
    fn default() -> Self {
        Self::EMPTY
    }
}

impl PartialEq for DoubleRange {
    fn eq(&self, other: &Self) -> bool {
        (self.is_empty() && other.is_empty())
            || (self.start == other.start && self.end == other.end)
    }
}

impl Add for DoubleRange {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.union(other)
    }
}

impl AddAssign for DoubleRange {
    fn add_assign(&mut self, other: Self) {
        *self = self.union(other);
    }
}

impl Add<f64> for DoubleRange {
    type Output = Self;

    fn add(self, value: f64) -> Self {
        self.union_value(value)
    }
}

impl AddAssign<f64> for DoubleRange {
    fn add_assign(&mut self, value: f64) {
        *self = self.union_value(value);
    }
}
