/// Resolves a presence/absence state ahead of building a [`crate::Maybe`].
///
/// A bare value is present, an `Option` keeps whatever state it already has.
pub trait IntoMaybe<T> {
    fn into_maybe(self) -> Option<T>;
}

impl<T> IntoMaybe<T> for T {
    fn into_maybe(self) -> Option<T> {
        Some(self)
    }
}

impl<T> IntoMaybe<T> for Option<T> {
    fn into_maybe(self) -> Option<T> {
        self
    }
}
