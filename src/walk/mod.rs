//! The traversal engine: walks a record graph along a compiled path.
//!
//! [`each`] is the single primitive. It follows the path one segment at a
//! time, looks through pointers, fans out on wildcard segments, and calls
//! the visitor once per leaf. [`get_all`], [`get`], [`set`] and
//! [`set_with`] are built on it.
//!
//! Missing data is never an error: a nil pointer, a field the record does
//! not have, or an index past the end simply yields no visit for that
//! branch. Misuse of the API (a root that is not a record, asking for the
//! wrong leaf type, writing a read-only field) panics in the plain functions
//! and is returned as an [`AccessError`] by the `try_` forms.

pub mod error;
mod get;
mod set;

use log::trace;

use crate::path::{Index, Path, Segment, SegmentKind};
use crate::reflect::{deref, Reflect, ReflectRef, Sequence, Value};

pub use error::AccessError;
pub use get::{get, get_all, try_get, try_get_all};
pub use set::{set, set_with, try_set, try_set_with};

/// What the visitor knows about a leaf besides its value.
#[derive(Clone)]
pub struct VisitContext<'a> {
    required: Path,
    resolved: Path,
    owner: &'a dyn Reflect,
}

impl<'a> VisitContext<'a> {
    /// The path the walk was started with.
    pub fn required(&self) -> &Path {
        &self.required
    }

    /// The concrete path of this leaf, wildcards replaced by the element
    /// index that was visited.
    pub fn resolved(&self) -> &Path {
        &self.resolved
    }

    /// The record that directly holds the leaf's field.
    pub fn owner(&self) -> &'a dyn Reflect {
        self.owner
    }

    /// The owner as a concrete type.
    pub fn owner_as<T: Reflect>(&self) -> Option<&'a T> {
        self.owner.downcast_ref::<T>()
    }
}

impl std::fmt::Debug for VisitContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisitContext")
            .field("required", &self.required.to_string())
            .field("resolved", &self.resolved.to_string())
            .field("owner", &self.owner.type_name())
            .finish()
    }
}

/// Calls `visit` once for every leaf `path` resolves to in `root`.
///
/// # Panics
///
/// Panics when `root` is not a record or a pointer to one.
///
/// # Example
///
/// ```
/// use pathval::{each, impl_record, Path, Value};
///
/// struct Vars { items: Vec<String> }
/// struct Root { ts: Vec<Vars> }
/// impl_record!(Vars { "Vars" => items });
/// impl_record!(Root { "Ts" => ts });
///
/// let root = Root {
///     ts: vec![
///         Vars { items: vec!["a".into(), "b".into(), "c".into()] },
///         Vars { items: vec!["A".into(), "B".into(), "C".into()] },
///     ],
/// };
///
/// let mut seen = Vec::new();
/// each(&root, &Path::parse("Ts[*].Vars[2]").unwrap(), |value, ctx| {
///     seen.push((value, ctx.resolved().to_string()));
/// });
/// assert_eq!(
///     seen,
///     vec![
///         (Value::Str("c"), "Ts[0].Vars[2]".to_string()),
///         (Value::Str("C"), "Ts[1].Vars[2]".to_string()),
///     ]
/// );
/// ```
pub fn each<'a, F>(root: &'a dyn Reflect, path: &Path, visit: F)
where
    F: FnMut(Value<'a>, &VisitContext<'a>),
{
    if let Err(err) = try_each(root, path, visit) {
        panic!("{}", err);
    }
}

/// Fallible form of [`each`].
pub fn try_each<'a, F>(root: &'a dyn Reflect, path: &Path, visit: F) -> Result<(), AccessError>
where
    F: FnMut(Value<'a>, &VisitContext<'a>),
{
    let Some(target) = deref(root) else {
        trace!("nil root, nothing to visit for '{}'", path);
        return Ok(());
    };
    if !matches!(target.reflect_ref(), ReflectRef::Record(_)) {
        return Err(AccessError::InvalidRoot {
            found: target.type_name(),
        });
    }

    let segments = path.split();
    let mut walker = Walker {
        required: path,
        visit,
    };
    walker.walk(target, &segments, None);
    Ok(())
}

struct Walker<'p, F> {
    required: &'p Path,
    visit: F,
}

impl<F> Walker<'_, F> {
    /// Consumes the first segment against `target` and recurses on the rest.
    fn walk<'a>(&mut self, target: &'a dyn Reflect, segments: &[&Segment], resolved: Option<&Path>)
    where
        F: FnMut(Value<'a>, &VisitContext<'a>),
    {
        let Some((current, rest)) = segments.split_first() else {
            return;
        };
        let name = current.name();

        let Some(owner) = deref(target) else {
            trace!("nil pointer before '{}'", name);
            return;
        };
        let ReflectRef::Record(record) = owner.reflect_ref() else {
            trace!("{} has no fields, looking for '{}'", owner.type_name(), name);
            return;
        };
        let Some(field) = record.field(name) else {
            trace!("{} has no field '{}'", owner.type_name(), name);
            return;
        };

        match current.kind() {
            SegmentKind::Field => {
                let resolved = Path::from_segment(Segment::new(name, SegmentKind::Field, resolved));
                self.resolve(owner, field, resolved, rest);
            }
            SegmentKind::Indexed(Index::At(n)) => {
                let Some(element) = sequence(field, name).and_then(|seq| seq.get(n)) else {
                    trace!("index {} out of range for '{}'", n, name);
                    return;
                };
                let resolved = Path::from_segment(Segment::new(
                    name,
                    SegmentKind::Indexed(Index::At(n)),
                    resolved,
                ));
                self.resolve(owner, element, resolved, rest);
            }
            SegmentKind::Indexed(Index::All) => {
                let Some(seq) = sequence(field, name) else {
                    return;
                };
                for i in 0..seq.len() {
                    let Some(element) = seq.get(i) else {
                        continue;
                    };
                    let resolved = Path::from_segment(Segment::new(
                        name,
                        SegmentKind::Indexed(Index::At(i)),
                        resolved,
                    ));
                    self.resolve(owner, element, resolved, rest);
                }
            }
        }
    }

    /// Visits `value` when no segments are left, otherwise descends into it.
    fn resolve<'a>(
        &mut self,
        owner: &'a dyn Reflect,
        value: &'a dyn Reflect,
        resolved: Path,
        rest: &[&Segment],
    ) where
        F: FnMut(Value<'a>, &VisitContext<'a>),
    {
        if rest.is_empty() {
            let ctx = VisitContext {
                required: self.required.clone(),
                resolved,
                owner,
            };
            (self.visit)(Value::of(value), &ctx);
        } else {
            self.walk(value, rest, Some(&resolved));
        }
    }
}

/// The sequence behind an indexed field, looking through pointers.
fn sequence<'a>(field: &'a dyn Reflect, name: &str) -> Option<&'a dyn Sequence> {
    match deref(field)?.reflect_ref() {
        ReflectRef::Sequence(seq) => Some(seq),
        _ => {
            trace!("field '{}' is not a sequence", name);
            None
        }
    }
}
