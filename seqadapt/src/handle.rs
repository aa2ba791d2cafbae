//! Owned-or-borrowed element handles.

use alloc::boxed::Box;
use core::fmt;
use core::ops::Deref;

/// An element stored by value or by reference to caller-owned data.
///
/// Containers drop `Owned` payloads when the handle leaves them; `Borrowed`
/// payloads stay with the caller. Both read the same through `Deref`, so one
/// adapter can hold a mix of the two.
pub enum Handle<'a, T: ?Sized> {
    Owned(Box<T>),
    Borrowed(&'a T),
}

impl<'a, T> Handle<'a, T> {
    #[must_use]
    pub fn owned(value: T) -> Self {
        Handle::Owned(Box::new(value))
    }
}

impl<'a, T: ?Sized> Handle<'a, T> {
    #[must_use]
    pub fn borrowed(value: &'a T) -> Self {
        Handle::Borrowed(value)
    }

    #[must_use]
    pub fn is_owned(&self) -> bool {
        matches!(self, Handle::Owned(_))
    }

    #[must_use]
    pub fn is_borrowed(&self) -> bool {
        matches!(self, Handle::Borrowed(_))
    }
}

impl<'a, T: Clone> Handle<'a, T> {
    /// Takes the payload out, cloning it if it was borrowed.
    #[must_use]
    pub fn into_owned(self) -> T {
        match self {
            Handle::Owned(value) => *value,
            Handle::Borrowed(value) => value.clone(),
        }
    }
}

impl<T: ?Sized> Deref for Handle<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self {
            Handle::Owned(value) => value,
            Handle::Borrowed(value) => value,
        }
    }
}

impl<T: ?Sized> AsRef<T> for Handle<'_, T> {
    fn as_ref(&self) -> &T {
        self
    }
}

impl<'a, T: ?Sized> From<&'a T> for Handle<'a, T> {
    fn from(value: &'a T) -> Self {
        Handle::Borrowed(value)
    }
}

impl<T: ?Sized> From<Box<T>> for Handle<'_, T> {
    fn from(value: Box<T>) -> Self {
        Handle::Owned(value)
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Handle<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: ?Sized + Eq> Eq for Handle<'_, T> {}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Handle<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handle::Owned(value) => f.debug_tuple("Owned").field(&&**value).finish(),
            Handle::Borrowed(value) => f.debug_tuple("Borrowed").field(value).finish(),
        }
    }
}
