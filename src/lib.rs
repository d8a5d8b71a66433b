mod apply;
mod error;
mod formulation;
mod into_maybe;
mod scenario;

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use crate::apply::{conditional_apply, lift_to_optional};
pub use crate::error::{MResult, MaybeError};
pub use crate::formulation::Formulation;
pub use crate::into_maybe::IntoMaybe;
pub use crate::scenario::{divide, square, to_string, Report, Scenario};

/// A value of type `T`, or nothing.
///
/// `Value` always means the producing step ran, whatever the payload is, so
/// `Value(0)` and `Value(String::new())` are never folded into `Nothing`.
/// Instances are never mutated; [`Maybe::map`] consumes the receiver and
/// builds a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    Value(T),
    Nothing,
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Nothing
    }
}

impl<T> Maybe<T> {
    /// Wraps an already-resolved state.
    ///
    /// ```
    /// use maybe_chain::Maybe;
    ///
    /// let present: Maybe<i64> = Maybe::new(4);
    /// let absent: Maybe<i64> = Maybe::new(None);
    /// assert_eq!(present, Maybe::Value(4));
    /// assert_eq!(absent, Maybe::Nothing);
    /// ```
    pub fn new(state: impl IntoMaybe<T>) -> Self {
        state.into_maybe().into()
    }

    pub fn value(value: T) -> Self {
        Maybe::Value(value)
    }

    pub fn nothing() -> Self {
        Maybe::Nothing
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Maybe::Value(_))
    }

    pub fn is_nothing(&self) -> bool {
        !self.is_value()
    }

    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Value(inner) => Maybe::Value(inner),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Applies `f` to the held value. `Nothing` short-circuits and `f` is not called.
    ///
    /// ```
    /// use maybe_chain::{divide, square, to_string, Maybe};
    ///
    /// assert_eq!(divide(4, 2).map(square).map(to_string), Maybe::Value("4".to_string()));
    /// assert_eq!(divide(4, 0).map(square).map(to_string), Maybe::Nothing);
    /// ```
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Maybe<U> {
        match self {
            Maybe::Value(inner) => Maybe::Value(f(inner)),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Container counterpart of [`lift_to_optional`].
    pub fn lift<U, F>(f: F) -> impl Fn(Maybe<T>) -> Maybe<U>
    where
        F: Fn(T) -> U,
    {
        move |input| input.map(&f)
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Maybe::Value(inner) => inner,
            Maybe::Nothing => default,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Value(inner) => Some(inner),
            Maybe::Nothing => None,
        }
    }

    pub fn into_result(self) -> MResult<T> {
        self.into_option().ok_or(MaybeError::Nothing)
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => Maybe::Value(inner),
            None => Maybe::Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

impl<T: Display> Display for Maybe<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Maybe::Value(inner) => write!(f, "{inner}"),
            Maybe::Nothing => write!(f, "Nothing to show"),
        }
    }
}

// Same wire shape as `Option<T>`: the payload or `null`.
impl<T: Serialize> Serialize for Maybe<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_ref().into_option().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Maybe<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Maybe::from)
    }
}
