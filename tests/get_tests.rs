// tests/get_tests.rs
use pathval::{get, get_all, impl_record, try_get, try_get_all, AccessError, Path, Reflect, Value};

struct Address {
    country_code: i32,
    postal_code: String,
}
impl_record!(Address { "CountryCode" => country_code, "PostalCode" => postal_code });

struct Person {
    name: String,
    age: i32,
    address: Address,
    ptr_address: Option<Box<Address>>,
}
impl_record!(Person {
    "Name" => name,
    "Age" => age,
    "Address" => address,
    "PtrAddress" => ptr_address,
});

fn alice() -> Person {
    Person {
        name: "Alice".to_string(),
        age: 25,
        address: Address {
            country_code: 81,
            postal_code: "1000001".to_string(),
        },
        ptr_address: Some(Box::new(Address {
            country_code: 1,
            postal_code: "0000002".to_string(),
        })),
    }
}

fn path(text: &str) -> Path {
    Path::parse(text).unwrap()
}

struct Member {
    name: String,
}
impl_record!(Member { "Name" => name });

struct Team {
    name: String,
    members: Vec<Box<Member>>,
}
impl_record!(Team { "Name" => name, "Members" => members });

fn team() -> Team {
    Team {
        name: "TEAM-A".to_string(),
        members: vec![
            Box::new(Member {
                name: "Alice".to_string(),
            }),
            Box::new(Member {
                name: "Bob".to_string(),
            }),
        ],
    }
}

// ============================================================================
// GetAll Tests
// ============================================================================

#[test]
fn test_get_a_field_value() {
    let src = alice();
    let got: Vec<Value> = get_all(&src, &path("Name"));
    assert_eq!(got, vec![Value::Str("Alice")]);
}

#[test]
fn test_get_a_nested_field_value() {
    let src = alice();
    let got: Vec<Value> = get_all(&src, &path("Address.CountryCode"));
    assert_eq!(got, vec![Value::I32(81)]);
}

#[test]
fn test_get_a_pointer_field_value() {
    let src = alice();
    let got: Vec<Value> = get_all(&src, &path("PtrAddress.PostalCode"));
    assert_eq!(got, vec![Value::Str("0000002")]);
}

#[test]
fn test_get_all_typed() {
    let src = alice();
    let ages: Vec<i32> = get_all(&src, &path("Age"));
    assert_eq!(ages, vec![25]);
    let codes: Vec<String> = get_all(&src, &path("PtrAddress.PostalCode"));
    assert_eq!(codes, vec!["0000002".to_string()]);
}

#[test]
fn test_get_all_team() {
    let t = team();
    assert_eq!(get_all::<&str>(&t, &path("Name")), vec!["TEAM-A"]);
    assert_eq!(get_all::<&str>(&t, &path("Members[0].Name")), vec!["Alice"]);
    assert_eq!(
        get_all::<&str>(&t, &path("Members[*].Name")),
        vec!["Alice", "Bob"]
    );
}

#[test]
fn test_get_all_records_by_reference() {
    let t = team();
    let members: Vec<&Member> = get_all(&t, &path("Members[*]"));
    assert_eq!(members.len(), 2);
    assert!(std::ptr::eq(members[1], &*t.members[1]));
}

#[test]
fn test_get_all_no_match_is_empty() {
    let mut src = alice();
    src.ptr_address = None;
    let got: Vec<String> = get_all(&src, &path("PtrAddress.PostalCode"));
    assert!(got.is_empty());
    let got: Vec<String> = get_all(&src, &path("Unknown"));
    assert!(got.is_empty());
}

#[test]
fn test_get_all_optional_leaf() {
    let mut src = alice();
    let got: Vec<Option<&Address>> = get_all(&src, &path("PtrAddress"));
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].map(|a| a.country_code), Some(1));

    src.ptr_address = None;
    let got: Vec<Option<&Address>> = get_all(&src, &path("PtrAddress"));
    assert_eq!(got.len(), 1);
    assert!(got[0].is_none());
}

#[test]
#[should_panic(expected = "Type mismatch at 'Age'")]
fn test_get_all_wrong_type_panics() {
    let src = alice();
    let _: Vec<i64> = get_all(&src, &path("Age"));
}

#[test]
fn test_try_get_all_reports_mismatch() {
    let src = alice();
    let result: Result<Vec<String>, _> = try_get_all(&src, &path("Address.CountryCode"));
    assert_eq!(
        result,
        Err(AccessError::TypeMismatch {
            path: "Address.CountryCode".to_string(),
            expected: "alloc::string::String",
            found: "i32",
        })
    );
}

#[test]
fn test_try_get_all_reports_invalid_root() {
    let root: &dyn Reflect = &7u8;
    let result: Result<Vec<u8>, _> = try_get_all(root, &path("x"));
    assert!(matches!(result, Err(AccessError::InvalidRoot { found: "u8" })));
}

// ============================================================================
// Get Tests
// ============================================================================

#[test]
fn test_get_first_match() {
    let t = team();
    assert_eq!(get::<&str>(&t, &path("Members[*].Name")), Some("Alice"));
    assert_eq!(get::<&str>(&t, &path("Members[5].Name")), None);
}

#[test]
fn test_try_get_ignores_later_leaves() {
    let t = team();
    let got: Result<Option<String>, _> = try_get(&t, &path("Members[*].Name"));
    assert_eq!(got, Ok(Some("Alice".to_string())));
}

#[test]
fn test_try_get_mismatch() {
    let src = alice();
    let got: Result<Option<bool>, _> = try_get(&src, &path("Name"));
    assert!(matches!(got, Err(AccessError::TypeMismatch { .. })));
}
