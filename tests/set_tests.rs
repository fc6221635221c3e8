// tests/set_tests.rs
use pathval::{
    get, get_all, impl_record, set, set_with, try_set, try_set_with, AccessError, Path, Reflect,
};

#[derive(Debug, Clone, PartialEq)]
struct S {
    v: String,
}
impl_record!(S { "V" => v });

#[derive(Debug, Clone, PartialEq)]
struct List {
    v: Vec<String>,
}
impl_record!(List { "V" => v });

#[derive(Debug, Clone, PartialEq)]
struct Member {
    name: String,
    id: u32,
}
impl_record!(Member { "Name" => name } readonly { "Id" => id });

#[derive(Debug, Clone, PartialEq)]
struct Team {
    name: String,
    members: Vec<Member>,
    lead: Option<Box<Member>>,
    scores: [i16; 3],
}
impl_record!(Team {
    "Name" => name,
    "Members" => members,
    "Lead" => lead,
    "Scores" => scores,
});

fn team() -> Team {
    Team {
        name: "TEAM-A".to_string(),
        members: vec![
            Member {
                name: "Alice".to_string(),
                id: 1,
            },
            Member {
                name: "Bob".to_string(),
                id: 2,
            },
        ],
        lead: None,
        scores: [3, 1, 2],
    }
}

fn path(text: &str) -> Path {
    Path::parse(text).unwrap()
}

// ============================================================================
// SetFunc Tests
// ============================================================================

#[test]
fn test_update_field_value() {
    let mut target = S {
        v: "foo".to_string(),
    };
    let written = set_with(&mut target, &path("V"), |_: String, _| "bar".to_string());
    assert_eq!(written, 1);
    assert_eq!(
        target,
        S {
            v: "bar".to_string()
        }
    );
}

#[test]
fn test_update_slice_field_values() {
    let mut target = List {
        v: vec!["foo".to_string(), "a".to_string(), "b".to_string()],
    };
    set_with(&mut target, &path("V[0]"), |_: String, _| "bar".to_string());
    assert_eq!(target.v, vec!["bar", "a", "b"]);
}

#[test]
fn test_update_every_wildcard_match() {
    let mut t = team();
    let written = set_with(&mut t, &path("Members[*].Name"), |name: String, _| {
        name.to_lowercase()
    });
    assert_eq!(written, 2);
    assert_eq!(t.members[0].name, "alice");
    assert_eq!(t.members[1].name, "bob");
    assert_eq!(t.name, "TEAM-A");
}

#[test]
fn test_update_sees_owner() {
    let mut t = team();
    set_with(&mut t, &path("Members[*].Name"), |name: String, ctx| {
        let owner = ctx.owner_as::<Member>().unwrap();
        format!("{}#{}", name, owner.id)
    });
    assert_eq!(
        get_all::<&str>(&t, &path("Members[*].Name")),
        vec!["Alice#1", "Bob#2"]
    );
}

#[test]
fn test_update_then_get_returns_produced_values() {
    let mut t = team();
    let mut produced = Vec::new();
    set_with(&mut t, &path("Scores[*]"), |score: i16, ctx| {
        let next = score * 10 + ctx.resolved().leaf().index().unwrap() as i16;
        produced.push(next);
        next
    });
    assert_eq!(produced, vec![30, 11, 22]);
    assert_eq!(get_all::<i16>(&t, &path("Scores[*]")), produced);
}

#[test]
fn test_update_nothing_matches() {
    let mut t = team();
    let before = t.clone();
    let written = set_with(&mut t, &path("Lead.Name"), |_: String, _| {
        panic!("no leaf to update");
    });
    assert_eq!(written, 0);
    assert_eq!(t, before);
}

#[test]
#[should_panic(expected = "Type mismatch at 'Name'")]
fn test_update_with_wrong_type_panics() {
    let mut t = team();
    set_with(&mut t, &path("Name"), |n: u64, _| n + 1);
}

#[test]
fn test_try_update_mismatch_writes_nothing() {
    let mut t = team();
    let before = t.clone();
    let result = try_set_with(&mut t, &path("Scores[*]"), |n: i32, _| n + 1);
    assert!(matches!(result, Err(AccessError::TypeMismatch { .. })));
    assert_eq!(t, before);
}

// ============================================================================
// Set Tests
// ============================================================================

#[test]
fn test_set_field_value() {
    let mut target = S {
        v: "foo".to_string(),
    };
    set(&mut target, &path("V"), "bar".to_string());
    assert_eq!(target.v, "bar");
}

#[test]
fn test_set_then_get_round_trip() {
    let mut t = team();
    set(&mut t, &path("Scores[1]"), -7i16);
    assert_eq!(get::<i16>(&t, &path("Scores[1]")), Some(-7));
    assert_eq!(t.scores, [3, -7, 2]);
}

#[test]
fn test_set_into_empty_option() {
    let mut t = team();
    let lead = Member {
        name: "Carol".to_string(),
        id: 3,
    };
    set(&mut t, &path("Lead"), lead.clone());
    assert_eq!(t.lead.as_deref(), Some(&lead));
    set(&mut t, &path("Lead.Name"), "Dave".to_string());
    assert_eq!(t.lead.unwrap().name, "Dave");
}

#[test]
fn test_set_whole_element() {
    let mut t = team();
    let eve = Member {
        name: "Eve".to_string(),
        id: 9,
    };
    set(&mut t, &path("Members[1]"), eve.clone());
    assert_eq!(t.members[1], eve);
}

#[test]
fn test_set_out_of_range_writes_nothing() {
    let mut t = team();
    let before = t.clone();
    assert_eq!(set(&mut t, &path("Members[2].Name"), "x".to_string()), 0);
    assert_eq!(t, before);
}

#[test]
#[should_panic(expected = "not settable")]
fn test_set_read_only_field_panics() {
    let mut t = team();
    set(&mut t, &path("Members[0].Id"), 5u32);
}

#[test]
fn test_read_only_field_is_readable() {
    let t = team();
    assert_eq!(get_all::<u32>(&t, &path("Members[*].Id")), vec![1, 2]);
}

#[test]
fn test_try_set_read_only_field() {
    let mut t = team();
    let result = try_set(&mut t, &path("Members[*].Id"), 5u32);
    assert_eq!(
        result,
        Err(AccessError::NotSettable {
            path: "Members[0].Id".to_string()
        })
    );
    assert_eq!(t.members[0].id, 1);
}

struct Open {
    tag: String,
}
impl_record!(Open { "Tag" => tag });

struct Locked {
    tag: String,
}
impl_record!(Locked {} readonly { "Tag" => tag });

struct Board {
    items: Vec<Box<dyn Reflect>>,
}
impl_record!(Board { "Items" => items });

#[test]
fn test_try_set_read_only_leaf_writes_nothing() {
    let mut board = Board {
        items: vec![
            Box::new(Open {
                tag: "a".to_string(),
            }),
            Box::new(Locked {
                tag: "b".to_string(),
            }),
        ],
    };
    let result = try_set(&mut board, &path("Items[*].Tag"), "x".to_string());
    assert_eq!(
        result,
        Err(AccessError::NotSettable {
            path: "Items[1].Tag".to_string()
        })
    );
    assert_eq!(get_all::<&str>(&board, &path("Items[*].Tag")), vec!["a", "b"]);
}

#[test]
fn test_try_set_wrong_type() {
    let mut t = team();
    let result = try_set(&mut t, &path("Scores[0]"), 1i64);
    assert_eq!(
        result,
        Err(AccessError::TypeMismatch {
            path: "Scores[0]".to_string(),
            expected: "i64",
            found: "i16",
        })
    );
    assert_eq!(t.scores, [3, 1, 2]);
}

#[test]
#[should_panic(expected = "Invalid root")]
fn test_set_on_leaf_root_panics() {
    let mut root = 1u8;
    set(&mut root, &path("x"), 2u8);
}
