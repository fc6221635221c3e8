//! Records whose fields are registered at runtime.

use std::any::Any;
use std::fmt;

use indexmap::IndexMap;

use super::{assign_downcast, Reflect, ReflectMut, ReflectRef, Record};

/// A record built field by field at runtime.
///
/// Fields keep their insertion order. The walk sees a `DynamicRecord`
/// exactly like a struct wired up with [`impl_record!`](crate::impl_record):
/// field names are looked up by name, they are not path segments of their
/// own.
///
/// # Example
///
/// ```
/// use pathval::{get_all, DynamicRecord, Path};
///
/// let member = |name: &str| DynamicRecord::new().with("Name", name.to_string());
/// let team = DynamicRecord::new()
///     .with("Name", "TEAM-A".to_string())
///     .with("Members", vec![member("Alice"), member("Bob")]);
///
/// let names: Vec<&str> = get_all(&team, &Path::parse("Members[*].Name").unwrap());
/// assert_eq!(names, vec!["Alice", "Bob"]);
/// ```
#[derive(Default)]
pub struct DynamicRecord {
    fields: IndexMap<String, Box<dyn Reflect>>,
}

impl DynamicRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, value: impl Reflect) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds or replaces a field, returning the previous value.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Reflect,
    ) -> Option<Box<dyn Reflect>> {
        self.fields.insert(name.into(), Box::new(value))
    }

    /// Removes a field, keeping the order of the others.
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn Reflect>> {
        self.fields.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Debug for DynamicRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.fields.iter().map(|(k, v)| (k, v.type_name())))
            .finish()
    }
}

impl Record for DynamicRecord {
    fn field(&self, name: &str) -> Option<&dyn Reflect> {
        self.fields.get(name).map(|v| &**v)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect> {
        self.fields.get_mut(name).map(|v| &mut **v)
    }

    fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }
}

impl Reflect for DynamicRecord {
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Record(self)
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Record(self)
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
        "DynamicRecord"
    }
}
