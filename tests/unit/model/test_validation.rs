use alpaca_client::error::AppError;
use alpaca_client::model::validation::{EMPTY_REQUEST_MESSAGE, NonEmptyRequest, Presence};

/// A field type with no equality, standing in for opaque domain values
struct Opaque(#[allow(dead_code)] Box<dyn Fn() -> u8>);

struct CustomRequest {
    handle: Option<Opaque>,
    note: String,
    ids: Vec<u32>,
}

impl NonEmptyRequest for CustomRequest {
    fn field_presence(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("handle", self.handle.is_present()),
            ("note", self.note.is_present()),
            ("ids", self.ids.is_present()),
        ]
    }
}

#[test]
fn vacuous_custom_request_is_rejected() {
    let req = CustomRequest {
        handle: None,
        note: String::new(),
        ids: Vec::new(),
    };
    assert!(req.is_empty());
    assert!(req.present_fields().is_empty());
    match req.ensure_non_empty() {
        Err(AppError::Validation(msg)) => assert_eq!(msg, EMPTY_REQUEST_MESSAGE),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn opaque_field_counts_as_present_when_supplied() {
    let req = CustomRequest {
        handle: Some(Opaque(Box::new(|| 7))),
        note: String::new(),
        ids: Vec::new(),
    };
    assert!(!req.is_empty());
    assert_eq!(req.present_fields(), vec!["handle"]);
    assert!(req.ensure_non_empty().is_ok());
}

#[test]
fn presence_of_builtin_wrappers() {
    assert!(Some(0).is_present());
    assert!(!None::<u8>.is_present());
    assert!(vec![1].is_present());
    assert!(!Vec::<u8>::new().is_present());
    assert!("x".to_string().is_present());
    assert!(!String::new().is_present());
}
