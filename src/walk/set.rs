use std::any::Any;

use log::debug;

use super::{try_each, AccessError, VisitContext};
use crate::path::Path;
use crate::reflect::{deref_mut, FromValue, Reflect, ReflectMut, Value};

/// Writes `value` into every leaf `path` resolves to, returning the number
/// of leaves written.
///
/// # Panics
///
/// Panics when `root` is not a record, a leaf cannot hold a `T`, or a leaf
/// is read-only.
pub fn set<T: Reflect + Clone>(root: &mut dyn Reflect, path: &Path, value: T) -> usize {
    try_set(root, path, value).unwrap_or_else(|err| panic!("{}", err))
}

/// Fallible form of [`set`].
pub fn try_set<T: Reflect + Clone>(
    root: &mut dyn Reflect,
    path: &Path,
    value: T,
) -> Result<usize, AccessError> {
    apply(root, path, std::any::type_name::<T>(), |_, _| {
        Ok(Box::new(value.clone()) as Box<dyn Any>)
    })
}

/// Replaces every leaf `path` resolves to with `f(current, ctx)`, returning
/// the number of leaves written.
///
/// Every match of a wildcard is updated, and the changes are visible
/// through `root` as soon as the call returns.
///
/// # Panics
///
/// Panics when `root` is not a record, a leaf is not a `T`, or a leaf is
/// read-only.
///
/// # Example
///
/// ```
/// use pathval::{impl_record, set_with, Path};
///
/// struct Member { name: String }
/// struct Team { members: Vec<Member> }
/// impl_record!(Member { "Name" => name });
/// impl_record!(Team { "Members" => members });
///
/// let mut team = Team {
///     members: vec![Member { name: "Alice".into() }, Member { name: "Bob".into() }],
/// };
///
/// let path = Path::parse("Members[*].Name").unwrap();
/// let written = set_with(&mut team, &path, |name: String, _| name.to_lowercase());
/// assert_eq!(written, 2);
/// assert_eq!(team.members[0].name, "alice");
/// assert_eq!(team.members[1].name, "bob");
/// ```
pub fn set_with<T, F>(root: &mut dyn Reflect, path: &Path, f: F) -> usize
where
    T: for<'v> FromValue<'v> + Any,
    F: FnMut(T, &VisitContext<'_>) -> T,
{
    try_set_with(root, path, f).unwrap_or_else(|err| panic!("{}", err))
}

/// Fallible form of [`set_with`].
///
/// A current value that is not a `T`, or a read-only leaf, is reported
/// before anything is written. A slot that rejects the new value stops the
/// writes at that leaf; earlier writes stay.
pub fn try_set_with<T, F>(root: &mut dyn Reflect, path: &Path, mut f: F) -> Result<usize, AccessError>
where
    T: for<'v> FromValue<'v> + Any,
    F: FnMut(T, &VisitContext<'_>) -> T,
{
    let expected = std::any::type_name::<T>();
    apply(root, path, expected, |value, ctx| {
        let current = T::from_value(value).ok_or_else(|| AccessError::TypeMismatch {
            path: ctx.resolved().to_string(),
            expected,
            found: value.type_name(),
        })?;
        Ok(Box::new(f(current, ctx)) as Box<dyn Any>)
    })
}

/// Computes the new leaves with a read-only walk, checks that every
/// resolved path reaches a writable slot, then writes each one.
fn apply<F>(
    root: &mut dyn Reflect,
    path: &Path,
    expected: &'static str,
    mut update: F,
) -> Result<usize, AccessError>
where
    F: for<'v> FnMut(Value<'v>, &VisitContext<'v>) -> Result<Box<dyn Any>, AccessError>,
{
    let mut writes: Vec<(Path, Box<dyn Any>)> = Vec::new();
    let mut failure = None;
    try_each(&*root, path, |value, ctx| {
        if failure.is_some() {
            return;
        }
        match update(value, ctx) {
            Ok(new_value) => writes.push((ctx.resolved().clone(), new_value)),
            Err(err) => failure = Some(err),
        }
    })?;
    if let Some(err) = failure {
        return Err(err);
    }

    for (resolved, _) in &writes {
        slot_mut(&mut *root, resolved)?;
    }

    let count = writes.len();
    for (resolved, new_value) in writes {
        let slot = slot_mut(&mut *root, &resolved)?;
        if slot.assign(new_value).is_err() {
            return Err(AccessError::TypeMismatch {
                path: resolved.to_string(),
                expected,
                found: slot.type_name(),
            });
        }
    }
    debug!("set {} leaves at '{}'", count, path);
    Ok(count)
}

/// Follows a resolved path (no wildcards) to the field slot it names.
///
/// The path was just produced by a read-only walk of the same graph, so a
/// field that cannot be reached for writing is one its record keeps
/// read-only.
fn slot_mut<'a>(root: &'a mut dyn Reflect, resolved: &Path) -> Result<&'a mut dyn Reflect, AccessError> {
    let not_settable = || AccessError::NotSettable {
        path: resolved.to_string(),
    };

    let mut target = root;
    for segment in resolved.split() {
        let owner = deref_mut(target).ok_or_else(not_settable)?;
        let ReflectMut::Record(record) = owner.reflect_mut() else {
            return Err(not_settable());
        };
        let field = record.field_mut(segment.name()).ok_or_else(not_settable)?;
        target = match segment.index() {
            None => field,
            Some(n) => {
                let inner = deref_mut(field).ok_or_else(not_settable)?;
                match inner.reflect_mut() {
                    ReflectMut::Sequence(seq) => seq.get_mut(n).ok_or_else(not_settable)?,
                    _ => return Err(not_settable()),
                }
            }
        };
    }
    Ok(target)
}
