use super::*;

#[test]
fn sign_out_returns_all_empty_fields() {
    let record = sign_out();
    assert_eq!(record.username, "");
    assert_eq!(record.email, "");
    assert_eq!(record.phone_number, "");
    assert_eq!(record.phone_number_verified, "");
    assert_eq!(record, UserRecord::default());
}

#[test]
fn serializes_with_wire_field_names() {
    let record = UserRecord {
        username: "a".to_owned(),
        email: "b".to_owned(),
        phone_number: "c".to_owned(),
        phone_number_verified: "d".to_owned(),
    };
    let json = serde_json::to_value(&record).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "username": "a",
            "email": "b",
            "phone_number": "c",
            "phone_number_verified": "d"
        })
    );
}

#[test]
fn deserialize_fills_missing_fields_and_ignores_extra() {
    let record: UserRecord =
        serde_json::from_str(r#"{"username":"alice","token":"x"}"#).expect("deserialize");
    assert_eq!(record.username, "alice");
    assert_eq!(record.email, "");
    assert_eq!(record.phone_number_verified, "");
}
