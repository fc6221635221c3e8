//! Runtime field access for ordinary Rust types.
//!
//! A type becomes navigable by implementing [`Reflect`], which describes the
//! value as one of four shapes:
//!
//! - [`Record`]: named fields (structs, [`DynamicRecord`])
//! - [`Sequence`]: indexed elements (`Vec<T>`, `[T; N]`)
//! - a leaf [`Value`] (integers, floats, complex numbers, `bool`, `char`,
//!   `String`)
//! - a pointer to another value (`Box<T>`, `Option<T>`, `Box<dyn Reflect>`),
//!   which the walk looks through transparently
//!
//! Structs are usually wired up with [`impl_record!`](crate::impl_record).

pub mod dynamic;
mod impls;
mod macros;
pub mod value;

use std::any::Any;

pub use dynamic::DynamicRecord;
pub use value::{FromValue, Value};

/// A value the walk can look into.
pub trait Reflect: Any {
    /// Shared view of the value's shape.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Exclusive view of the value's shape.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Replaces the value in place.
    ///
    /// Hands `value` back when it is not of a type this slot can store.
    fn assign(&mut self, value: Box<dyn Any>) -> Result<(), Box<dyn Any>>;

    /// Builds a value of this type from a boxed value, for writes into an
    /// empty `Option`. Pointer types also accept their pointee.
    fn from_any(value: Box<dyn Any>) -> Result<Self, Box<dyn Any>>
    where
        Self: Sized,
    {
        value.downcast::<Self>().map(|v| *v)
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Name of the concrete type, for diagnostics.
    fn type_name(&self) -> &'static str;
}

impl dyn Reflect {
    /// Downcasts to a concrete type.
    pub fn downcast_ref<T: Reflect>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Downcasts to a concrete type.
    pub fn downcast_mut<T: Reflect>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}

/// A value with named fields.
pub trait Record {
    /// Looks a field up by name.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Looks a field up by name for writing.
    ///
    /// Returning `None` for a name that [`field`](Record::field) resolves
    /// marks the field read-only.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    /// Names of the fields, in declaration order.
    fn field_names(&self) -> Vec<&str>;
}

/// A value with indexed elements.
pub trait Sequence {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;
}

/// Shared shape of a [`Reflect`] value.
pub enum ReflectRef<'a> {
    Record(&'a dyn Record),
    Sequence(&'a dyn Sequence),
    Leaf(Value<'a>),
    /// Indirection; `None` is a nil pointer.
    Pointer(Option<&'a dyn Reflect>),
}

/// Exclusive shape of a [`Reflect`] value.
pub enum ReflectMut<'a> {
    Record(&'a mut dyn Record),
    Sequence(&'a mut dyn Sequence),
    Leaf,
    /// Indirection; `None` is a nil pointer.
    Pointer(Option<&'a mut dyn Reflect>),
}

/// Follows pointers until a non-pointer value, `None` on a nil pointer.
pub fn deref(value: &dyn Reflect) -> Option<&dyn Reflect> {
    match value.reflect_ref() {
        ReflectRef::Pointer(inner) => inner.and_then(deref),
        _ => Some(value),
    }
}

/// Exclusive counterpart of [`deref`].
pub fn deref_mut(value: &mut dyn Reflect) -> Option<&mut dyn Reflect> {
    if !matches!(value.reflect_ref(), ReflectRef::Pointer(_)) {
        return Some(value);
    }
    match value.reflect_mut() {
        ReflectMut::Pointer(inner) => inner.and_then(deref_mut),
        _ => None,
    }
}

/// Stores `value` into `slot` when it holds a `T`.
pub fn assign_downcast<T: Any>(slot: &mut T, value: Box<dyn Any>) -> Result<(), Box<dyn Any>> {
    *slot = *value.downcast::<T>()?;
    Ok(())
}
