//! Single-assignment memoization cell.

use crate::error::Result;

/// A lazily materialized field.
///
/// The first [`get`](LazyField::get) invokes its producer exactly once and
/// stores the result; every later call returns the stored value without
/// touching the producer again. If the producer fails, the cell stays unset
/// and the next access re-attempts production — failures are never cached.
///
/// Not designed for concurrent first-access: the cell takes `&mut self`,
/// so callers sharing one across threads must serialize externally.
#[derive(Debug, Default)]
pub struct LazyField<T> {
    value: Option<T>,
}

impl<T> LazyField<T> {
    /// Create an unset cell.
    pub fn new() -> Self {
        Self { value: None }
    }

    /// Return the memoized value, producing it on first access.
    pub fn get<F>(&mut self, producer: F) -> Result<&T>
    where
        F: FnOnce() -> Result<T>,
    {
        if self.value.is_none() {
            self.value = Some(producer()?);
        }
        // Safe: we just produced if it was unset
        Ok(self.value.as_ref().expect("value just set"))
    }

    /// Whether the cell has been materialized.
    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }
}
