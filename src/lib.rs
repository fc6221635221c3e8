//! Path-addressed access to the fields of in-memory records.
//!
//! A path such as `Members[*].Name` is compiled once into a [`Path`] and
//! then used to read or rewrite every field it names inside a graph of
//! structs, vectors, boxes and options.
//!
//! ```
//! use pathval::{get_all, impl_record, set, Path};
//!
//! struct Address { postal_code: String }
//! struct Person { name: String, address: Option<Box<Address>> }
//! impl_record!(Address { "PostalCode" => postal_code });
//! impl_record!(Person { "Name" => name, "Address" => address });
//!
//! let mut alice = Person {
//!     name: "Alice".into(),
//!     address: Some(Box::new(Address { postal_code: "1000001".into() })),
//! };
//! let path = Path::parse("Address.PostalCode").unwrap();
//!
//! set(&mut alice, &path, "0000002".to_string());
//! assert_eq!(get_all::<&str>(&alice, &path), vec!["0000002"]);
//! ```

pub mod path;
pub mod reflect;
pub mod walk;

pub use path::{Index, ParseError, Path, Segment, SegmentKind};
pub use reflect::{DynamicRecord, FromValue, Record, Reflect, ReflectMut, ReflectRef, Sequence, Value};
pub use walk::{
    each, get, get_all, set, set_with, try_each, try_get, try_get_all, try_set, try_set_with,
    AccessError, VisitContext,
};
