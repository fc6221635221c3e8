use std::any::Any;

use num_complex::{Complex32, Complex64};

use super::{assign_downcast, Reflect, ReflectMut, ReflectRef, Sequence, Value};

macro_rules! impl_reflect_leaf {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn reflect_ref(&self) -> ReflectRef<'_> {
                    ReflectRef::Leaf(Value::$variant(*self))
                }

                fn reflect_mut(&mut self) -> ReflectMut<'_> {
                    ReflectMut::Leaf
                }

                fn assign(&mut self, value: Box<dyn Any>) -> Result<(), Box<dyn Any>> {
                    assign_downcast(self, value)
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }

                fn as_any_mut(&mut self) -> &mut dyn Any {
                    self
                }

                fn type_name(&self) -> &'static str {
                    std::any::type_name::<$ty>()
                }
            }
        )*
    };
}

impl_reflect_leaf!(
    bool => Bool,
    char => Char,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    Complex32 => C32,
    Complex64 => C64,
    &'static str => Str,
);

impl Reflect for String {
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Leaf(Value::Str(self))
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Leaf
    }

    fn assign(&mut self, value: Box<dyn Any>) -> Result<(), Box<dyn Any>> {
        assign_downcast(self, value)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        "String"
    }
}

// -----------------------------------------------------------------------------
// Sequences

impl<T: Reflect> Sequence for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.as_slice().get(index).map(|v| v as &dyn Reflect)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        self.as_mut_slice()
            .get_mut(index)
            .map(|v| v as &mut dyn Reflect)
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Sequence(self)
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Sequence(self)
    }

    fn assign(&mut self, value: Box<dyn Any>) -> Result<(), Box<dyn Any>> {
        assign_downcast(self, value)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<T: Reflect, const N: usize> Sequence for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.as_slice().get(index).map(|v| v as &dyn Reflect)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        self.as_mut_slice()
            .get_mut(index)
            .map(|v| v as &mut dyn Reflect)
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Sequence(self)
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Sequence(self)
    }

    fn assign(&mut self, value: Box<dyn Any>) -> Result<(), Box<dyn Any>> {
        assign_downcast(self, value)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

// -----------------------------------------------------------------------------
// Pointers
//
// A write either replaces the whole pointer (the value is the pointer type
// itself) or lands in the pointee.

impl<T: Reflect> Reflect for Box<T> {
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Pointer(Some(&**self))
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Pointer(Some(&mut **self))
    }

    fn assign(&mut self, value: Box<dyn Any>) -> Result<(), Box<dyn Any>> {
        match value.downcast::<Self>() {
            Ok(boxed) => {
                *self = *boxed;
                Ok(())
            }
            Err(value) => (**self).assign(value),
        }
    }

    fn from_any(value: Box<dyn Any>) -> Result<Self, Box<dyn Any>> {
        match value.downcast::<Self>() {
            Ok(boxed) => Ok(*boxed),
            Err(value) => T::from_any(value).map(Box::new),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Pointer(self.as_ref().map(|v| v as &dyn Reflect))
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Pointer(self.as_mut().map(|v| v as &mut dyn Reflect))
    }

    fn assign(&mut self, value: Box<dyn Any>) -> Result<(), Box<dyn Any>> {
        let value = match value.downcast::<Self>() {
            Ok(option) => {
                *self = *option;
                return Ok(());
            }
            Err(value) => value,
        };
        match self {
            Some(inner) => inner.assign(value),
            None => {
                *self = Some(T::from_any(value)?);
                Ok(())
            }
        }
    }

    fn from_any(value: Box<dyn Any>) -> Result<Self, Box<dyn Any>> {
        match value.downcast::<Self>() {
            Ok(option) => Ok(*option),
            Err(value) => T::from_any(value).map(Some),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl Reflect for Box<dyn Reflect> {
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Pointer(Some(&**self))
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Pointer(Some(&mut **self))
    }

    fn assign(&mut self, value: Box<dyn Any>) -> Result<(), Box<dyn Any>> {
        match value.downcast::<Self>() {
            Ok(boxed) => {
                *self = *boxed;
                Ok(())
            }
            Err(value) => (**self).assign(value),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}
