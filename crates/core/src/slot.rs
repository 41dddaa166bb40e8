//! Type-erased destination slots and encode sources
//!
//! A [`Slot`] is the place a decoder writes into; a [`Source`] is the value an
//! encoder reads from. Both carry the declared type's [`TypeId`] and name so
//! an adapter can verify the type before converting and report what it got
//! when the check fails.
//!
//! An exclusive borrow is always valid and settable, so the only check left
//! at runtime is the type.

use std::any::{type_name, Any, TypeId};
use std::fmt;

/// Destination of a decode call
pub struct Slot<'a> {
    value: &'a mut dyn Any,
    type_name: &'static str,
}

impl<'a> Slot<'a> {
    /// Wrap a destination
    pub fn new<T: Any>(value: &'a mut T) -> Self {
        Slot {
            value,
            type_name: type_name::<T>(),
        }
    }

    /// Declared type name of the destination
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Declared type id of the destination
    pub fn type_id(&self) -> TypeId {
        (*self.value).type_id()
    }

    /// Check whether the destination is a `T`
    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Overwrite the destination
    ///
    /// Returns the value back if the destination is not a `T`; the slot is
    /// left untouched in that case.
    pub fn set<T: Any>(self, value: T) -> Result<(), T> {
        match self.value.downcast_mut::<T>() {
            Some(dest) => {
                *dest = value;
                Ok(())
            }
            None => Err(value),
        }
    }
}

impl fmt::Debug for Slot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("type_name", &self.type_name)
            .finish()
    }
}

/// Source of an encode call
#[derive(Clone, Copy)]
pub struct Source<'a> {
    value: &'a dyn Any,
    type_name: &'static str,
}

impl<'a> Source<'a> {
    /// Wrap a source value
    pub fn new<T: Any>(value: &'a T) -> Self {
        Source {
            value,
            type_name: type_name::<T>(),
        }
    }

    /// Declared type name of the source
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Declared type id of the source
    pub fn type_id(&self) -> TypeId {
        (*self.value).type_id()
    }

    /// Borrow the source as a `T`, if it is one
    pub fn downcast_ref<T: Any>(&self) -> Option<&'a T> {
        self.value.downcast_ref::<T>()
    }
}

impl fmt::Debug for Source<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Source")
            .field("type_name", &self.type_name)
            .finish()
    }
}
