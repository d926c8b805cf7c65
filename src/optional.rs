//! Present/Absent lookup results.

/// Outcome of a folder lookup that may legitimately find nothing.
///
/// Unlike an error, `Absent` is an expected result: IMAP sequence numbers
/// are session-relative and can be invalidated by a concurrent expunge
/// between enumeration and lookup. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionalRef<T> {
    /// The lookup found a value.
    Present(T),
    /// No value at the requested position.
    Absent,
}

impl<T> OptionalRef<T> {
    /// Whether this holds a value.
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Whether this is the empty outcome.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Convert into a standard `Option`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }
}

impl<T> From<Option<T>> for OptionalRef<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Present(v),
            None => Self::Absent,
        }
    }
}

impl<T> From<OptionalRef<T>> for Option<T> {
    fn from(value: OptionalRef<T>) -> Self {
        value.into_option()
    }
}

/// Run `action` on the contained value, if any.
///
/// `Absent` is a no-op, never a panic or an error; the action's result is
/// discarded. This is the "run this only if the lookup succeeded" shape,
/// without branching at every call site.
pub fn with_value<T, F>(slot: OptionalRef<T>, action: F)
where
    F: FnOnce(T),
{
    if let OptionalRef::Present(value) = slot {
        action(value);
    }
}
