use super::{try_each, AccessError, VisitContext};
use crate::path::Path;
use crate::reflect::{FromValue, Reflect, Value};

fn mismatch<T>(value: Value<'_>, ctx: &VisitContext<'_>) -> AccessError {
    AccessError::TypeMismatch {
        path: ctx.resolved().to_string(),
        expected: std::any::type_name::<T>(),
        found: value.type_name(),
    }
}

/// Returns every leaf `path` resolves to, in visiting order.
///
/// # Panics
///
/// Panics when `root` is not a record, or a leaf is not a `T`.
///
/// # Example
///
/// ```
/// use pathval::{get_all, impl_record, Path};
///
/// struct Member { name: String }
/// struct Team { name: String, members: Vec<Box<Member>> }
/// impl_record!(Member { "Name" => name });
/// impl_record!(Team { "Name" => name, "Members" => members });
///
/// let team = Team {
///     name: "TEAM-A".into(),
///     members: vec![
///         Box::new(Member { name: "Alice".into() }),
///         Box::new(Member { name: "Bob".into() }),
///     ],
/// };
///
/// let names: Vec<String> = get_all(&team, &"Name".parse().unwrap());
/// assert_eq!(names, vec!["TEAM-A"]);
/// let names: Vec<&str> = get_all(&team, &"Members[0].Name".parse().unwrap());
/// assert_eq!(names, vec!["Alice"]);
/// let names: Vec<&str> = get_all(&team, &"Members[*].Name".parse().unwrap());
/// assert_eq!(names, vec!["Alice", "Bob"]);
/// ```
pub fn get_all<'a, T: FromValue<'a>>(root: &'a dyn Reflect, path: &Path) -> Vec<T> {
    try_get_all(root, path).unwrap_or_else(|err| panic!("{}", err))
}

/// Fallible form of [`get_all`].
pub fn try_get_all<'a, T: FromValue<'a>>(
    root: &'a dyn Reflect,
    path: &Path,
) -> Result<Vec<T>, AccessError> {
    let mut values = Vec::new();
    let mut failure = None;
    try_each(root, path, |value, ctx| {
        if failure.is_some() {
            return;
        }
        match T::from_value(value) {
            Some(v) => values.push(v),
            None => failure = Some(mismatch::<T>(value, ctx)),
        }
    })?;
    match failure {
        Some(err) => Err(err),
        None => Ok(values),
    }
}

/// Returns the first leaf `path` resolves to, `None` when nothing matches.
///
/// # Panics
///
/// Panics when `root` is not a record, or the leaf is not a `T`.
pub fn get<'a, T: FromValue<'a>>(root: &'a dyn Reflect, path: &Path) -> Option<T> {
    try_get(root, path).unwrap_or_else(|err| panic!("{}", err))
}

/// Fallible form of [`get`].
pub fn try_get<'a, T: FromValue<'a>>(
    root: &'a dyn Reflect,
    path: &Path,
) -> Result<Option<T>, AccessError> {
    let mut first: Option<Result<T, AccessError>> = None;
    try_each(root, path, |value, ctx| {
        if first.is_none() {
            first = Some(T::from_value(value).ok_or_else(|| mismatch::<T>(value, ctx)));
        }
    })?;
    first.transpose()
}
