//! Tests for the domain user model.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn alice() -> User {
    User::try_from_parts("alice", "Alice", 30).expect("fixture user is valid")
}

#[rstest]
#[case::letters_and_digits("abc123")]
#[case::shortest("abc")]
#[case::longest("a".repeat(USER_ID_MAX))]
#[case::digits_only("007")]
fn accepts_valid_ids(#[case] id: String) {
    let parsed = UserId::new(id.clone()).expect("valid id");
    assert_eq!(parsed.as_ref(), id);
}

#[rstest]
#[case::too_short("ab")]
#[case::too_long("a".repeat(USER_ID_MAX + 1))]
#[case::symbol("abc123&")]
#[case::uppercase("Alice")]
#[case::empty("")]
#[case::whitespace(" alice")]
#[case::hyphen("ali-ce")]
#[case::non_ascii("alicé")]
#[case::trailing_newline("alice\n")]
fn rejects_invalid_ids(#[case] id: String) {
    let err = UserId::new(id.clone()).expect_err("invalid id");
    assert_eq!(err, UserValidationError::InvalidId { id: id.clone() });
    assert_eq!(err.to_string(), format!("invalid user ID: {id}"));
}

#[rstest]
fn only_the_id_is_validated() {
    let user = User::try_from(UserPayload {
        id: "bob".into(),
        name: String::new(),
        age: -4,
    })
    .expect("name and age are unrestricted");
    assert_eq!(user.name(), "");
    assert_eq!(user.age(), -4);

    let invalid = UserPayload {
        id: "ab".into(),
        name: "Abby".into(),
        age: 7,
    };
    assert!(User::try_from(invalid).is_err());
}

#[rstest]
fn serialises_fields_in_wire_order(alice: User) {
    let encoded = serde_json::to_string(&alice).expect("serialise user");
    assert_eq!(encoded, r#"{"id":"alice","name":"Alice","age":30}"#);
}

#[rstest]
fn json_round_trip_preserves_fields(alice: User) {
    let encoded = serde_json::to_vec(&alice).expect("serialise user");
    let decoded: User = serde_json::from_slice(&encoded).expect("deserialise user");
    assert_eq!(decoded.id(), alice.id());
    assert_eq!(decoded.name(), alice.name());
    assert_eq!(decoded.age(), alice.age());
}

#[rstest]
fn deserialising_user_enforces_id_rules() {
    let result = serde_json::from_value::<User>(json!({"id": "ab", "name": "A", "age": 1}));
    assert!(result.is_err());
}

#[rstest]
fn payload_accepts_invalid_ids_until_validated() {
    let payload: UserPayload =
        serde_json::from_value(json!({"id": "ab", "name": "A", "age": 1})).expect("payload");
    assert_eq!(
        User::try_from(payload),
        Err(UserValidationError::InvalidId { id: "ab".into() })
    );
}

#[rstest]
fn payload_ignores_unknown_fields() {
    let payload: UserPayload = serde_json::from_value(
        json!({"id": "carol", "name": "Carol", "age": 41, "email": "c@example.com"}),
    )
    .expect("payload");
    assert_eq!(payload.id, "carol");
}

#[rstest]
#[case::missing_age(json!({"id": "gina", "name": "Gina"}), "gina", "Gina", 0)]
#[case::missing_name(json!({"id": "gina", "age": 5}), "gina", "", 5)]
#[case::null_age(json!({"id": "gina", "name": "Gina", "age": null}), "gina", "Gina", 0)]
#[case::null_name(json!({"id": "gina", "name": null, "age": 5}), "gina", "", 5)]
#[case::missing_id(json!({"name": "Gina", "age": 5}), "", "Gina", 5)]
fn absent_or_null_fields_decode_to_zero_values(
    #[case] value: serde_json::Value,
    #[case] id: &str,
    #[case] name: &str,
    #[case] age: i64,
) {
    let payload: UserPayload = serde_json::from_value(value).expect("payload");
    assert_eq!(
        payload,
        UserPayload {
            id: id.into(),
            name: name.into(),
            age,
        }
    );
}

#[rstest]
#[case::string_age(json!({"id": "carol", "name": "Carol", "age": "41"}))]
#[case::not_an_object(json!(42))]
fn payload_rejects_malformed_json(#[case] value: serde_json::Value) {
    assert!(serde_json::from_value::<UserPayload>(value).is_err());
}
