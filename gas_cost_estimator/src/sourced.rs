//!
//! A feed value tagged with its origin.
//!

///
/// A feed value tagged with its origin.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Sourced<T> {
    /// Returned by a live feed.
    Live(T),
    /// Provided explicitly on the command line.
    Configured(T),
    /// Substituted by a hardcoded constant after the feed failed.
    Fallback {
        /// The substituted value.
        value: T,
        /// Why the feed could not be used.
        reason: String,
    },
}

impl<T> Sourced<T> {
    ///
    /// Returns the wrapped value regardless of its origin.
    ///
    pub fn into_value(self) -> T {
        match self {
            Self::Live(value) => value,
            Self::Configured(value) => value,
            Self::Fallback { value, .. } => value,
        }
    }

    ///
    /// Whether the value is a hardcoded substitute.
    ///
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    ///
    /// Derives a new value, keeping the origin tag.
    ///
    pub fn map<U, F>(self, f: F) -> Sourced<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Live(value) => Sourced::Live(f(value)),
            Self::Configured(value) => Sourced::Configured(f(value)),
            Self::Fallback { value, reason } => Sourced::Fallback {
                value: f(value),
                reason,
            },
        }
    }
}

impl<T: Copy> Sourced<T> {
    ///
    /// Returns a copy of the wrapped value.
    ///
    pub fn value(&self) -> T {
        match self {
            Self::Live(value) => *value,
            Self::Configured(value) => *value,
            Self::Fallback { value, .. } => *value,
        }
    }

    ///
    /// Returns the origin as a short label.
    ///
    pub fn origin(&self) -> &'static str {
        match self {
            Self::Live(_) => "live",
            Self::Configured(_) => "configured",
            Self::Fallback { .. } => "fallback",
        }
    }
}
