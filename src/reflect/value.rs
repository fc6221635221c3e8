//! Normalized leaf values.

use std::fmt;

use num_complex::{Complex32, Complex64};

use super::{deref, Reflect, ReflectRef};

/// A leaf reached by a path, in its native width.
///
/// Primitive fields surface as their own variant so that an `i32` field
/// comes back as `Value::I32`, never as a widened number. Anything else is
/// handed out by reference.
#[derive(Clone, Copy)]
pub enum Value<'a> {
    /// An empty `Option` at the end of the path.
    Nil,
    Bool(bool),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    Usize(usize),
    F32(f32),
    F64(f64),
    C32(Complex32),
    C64(Complex64),
    Str(&'a str),
    /// A record, sequence or other non-primitive value.
    Ref(&'a dyn Reflect),
}

impl<'a> Value<'a> {
    /// Normalizes a reflected value, looking through pointers.
    pub fn of(value: &'a dyn Reflect) -> Value<'a> {
        let Some(target) = deref(value) else {
            return Value::Nil;
        };
        match target.reflect_ref() {
            ReflectRef::Leaf(leaf) => leaf,
            ReflectRef::Record(_) | ReflectRef::Sequence(_) | ReflectRef::Pointer(_) => {
                Value::Ref(target)
            }
        }
    }

    /// Name of the variant's Rust type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Char(_) => "char",
            Value::I8(_) => "i8",
            Value::I16(_) => "i16",
            Value::I32(_) => "i32",
            Value::I64(_) => "i64",
            Value::I128(_) => "i128",
            Value::Isize(_) => "isize",
            Value::U8(_) => "u8",
            Value::U16(_) => "u16",
            Value::U32(_) => "u32",
            Value::U64(_) => "u64",
            Value::U128(_) => "u128",
            Value::Usize(_) => "usize",
            Value::F32(_) => "f32",
            Value::F64(_) => "f64",
            Value::C32(_) => "Complex<f32>",
            Value::C64(_) => "Complex<f64>",
            Value::Str(_) => "&str",
            Value::Ref(r) => r.type_name(),
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Downcasts a `Ref` value to a concrete type.
    pub fn downcast_ref<T: Reflect>(&self) -> Option<&'a T> {
        match self {
            Value::Ref(r) => r.downcast_ref::<T>(),
            _ => None,
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "Nil"),
            Value::Bool(v) => write!(f, "Bool({:?})", v),
            Value::Char(v) => write!(f, "Char({:?})", v),
            Value::I8(v) => write!(f, "I8({})", v),
            Value::I16(v) => write!(f, "I16({})", v),
            Value::I32(v) => write!(f, "I32({})", v),
            Value::I64(v) => write!(f, "I64({})", v),
            Value::I128(v) => write!(f, "I128({})", v),
            Value::Isize(v) => write!(f, "Isize({})", v),
            Value::U8(v) => write!(f, "U8({})", v),
            Value::U16(v) => write!(f, "U16({})", v),
            Value::U32(v) => write!(f, "U32({})", v),
            Value::U64(v) => write!(f, "U64({})", v),
            Value::U128(v) => write!(f, "U128({})", v),
            Value::Usize(v) => write!(f, "Usize({})", v),
            Value::F32(v) => write!(f, "F32({:?})", v),
            Value::F64(v) => write!(f, "F64({:?})", v),
            Value::C32(v) => write!(f, "C32({:?})", v),
            Value::C64(v) => write!(f, "C64({:?})", v),
            Value::Str(v) => write!(f, "Str({:?})", v),
            Value::Ref(r) => write!(f, "Ref({} @ {:p})", r.type_name(), *r as *const dyn Reflect),
        }
    }
}

/// Primitives compare by value, references by address.
impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::I8(a), Value::I8(b)) => a == b,
            (Value::I16(a), Value::I16(b)) => a == b,
            (Value::I32(a), Value::I32(b)) => a == b,
            (Value::I64(a), Value::I64(b)) => a == b,
            (Value::I128(a), Value::I128(b)) => a == b,
            (Value::Isize(a), Value::Isize(b)) => a == b,
            (Value::U8(a), Value::U8(b)) => a == b,
            (Value::U16(a), Value::U16(b)) => a == b,
            (Value::U32(a), Value::U32(b)) => a == b,
            (Value::U64(a), Value::U64(b)) => a == b,
            (Value::U128(a), Value::U128(b)) => a == b,
            (Value::Usize(a), Value::Usize(b)) => a == b,
            (Value::F32(a), Value::F32(b)) => a == b,
            (Value::F64(a), Value::F64(b)) => a == b,
            (Value::C32(a), Value::C32(b)) => a == b,
            (Value::C64(a), Value::C64(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Ref(a), Value::Ref(b)) => std::ptr::addr_eq(*a, *b),
            _ => false,
        }
    }
}

/// Conversion from a visited [`Value`] into a caller-chosen type.
pub trait FromValue<'a>: Sized {
    /// Returns `None` when the value is of a different type.
    fn from_value(value: Value<'a>) -> Option<Self>;
}

macro_rules! impl_from_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl<'a> FromValue<'a> for $ty {
                fn from_value(value: Value<'a>) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_from_value!(
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
    &'a str => Str,
    &'a dyn Reflect => Ref,
);

impl<'a> FromValue<'a> for Value<'a> {
    fn from_value(value: Value<'a>) -> Option<Self> {
        Some(value)
    }
}

impl<'a> FromValue<'a> for String {
    fn from_value(value: Value<'a>) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl<'a, T: FromValue<'a>> FromValue<'a> for Option<T> {
    fn from_value(value: Value<'a>) -> Option<Self> {
        match value {
            Value::Nil => Some(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl<'a, T: Reflect> FromValue<'a> for &'a T {
    fn from_value(value: Value<'a>) -> Option<Self> {
        value.downcast_ref::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitives_keep_width() {
        let n: i32 = -7;
        assert_eq!(Value::of(&n), Value::I32(-7));
        let b: u8 = 255;
        assert_eq!(Value::of(&b), Value::U8(255));
        let f: f32 = 1.5;
        assert_eq!(Value::of(&f), Value::F32(1.5));
        let c = Complex64::new(1.0, -2.0);
        assert_eq!(Value::of(&c), Value::C64(Complex64::new(1.0, -2.0)));
        assert_eq!(Value::of(&c).type_name(), "Complex<f64>");
        assert_eq!(Complex32::from_value(Value::C64(c)), None);
    }

    #[test]
    fn test_strings_surface_as_str() {
        let s = String::from("foobar");
        assert_eq!(Value::of(&s), Value::Str("foobar"));
        assert_eq!(Value::of(&s).type_name(), "&str");
    }

    #[test]
    fn test_pointers_are_transparent() {
        let boxed = Box::new(3u16);
        assert_eq!(Value::of(&boxed), Value::U16(3));
        let some = Some(Box::new(String::from("x")));
        assert_eq!(Value::of(&some), Value::Str("x"));
        let none: Option<u16> = None;
        assert!(Value::of(&none).is_nil());
    }

    #[test]
    fn test_sequences_surface_as_ref() {
        let v = vec![1, 2, 3];
        let value = Value::of(&v);
        assert_eq!(value, Value::Ref(&v));
        assert_eq!(value.downcast_ref::<Vec<i32>>(), Some(&v));
    }

    #[test]
    fn test_from_value_rejects_other_widths() {
        assert_eq!(i64::from_value(Value::I32(1)), None);
        assert_eq!(i32::from_value(Value::I32(1)), Some(1));
        assert_eq!(String::from_value(Value::Str("a")), Some("a".to_string()));
        assert_eq!(String::from_value(Value::I8(1)), None);
    }

    #[test]
    fn test_from_value_option() {
        assert_eq!(Option::<u8>::from_value(Value::Nil), Some(None));
        assert_eq!(Option::<u8>::from_value(Value::U8(4)), Some(Some(4)));
        assert_eq!(Option::<u8>::from_value(Value::I8(4)), None);
    }
}
