use super::*;

#[test]
fn group_decodes_store_columns() {
    let json = r#"{"id":"g1","nome":"Math Club","descricao":"Weekly sessions","lider_id":"u9","created_at":"2024-03-01T10:00:00Z"}"#;
    let group: Group = serde_json::from_str(json).unwrap();
    assert_eq!(group.id, "g1");
    assert_eq!(group.name, "Math Club");
    assert_eq!(group.description.as_deref(), Some("Weekly sessions"));
    assert_eq!(group.leader_id.as_deref(), Some("u9"));
}

#[test]
fn group_tolerates_null_and_missing_optionals() {
    let group: Group = serde_json::from_str(r#"{"id":"g2","nome":"Chess","descricao":null}"#).unwrap();
    assert!(group.description.is_none());
    assert!(group.leader_id.is_none());
}

#[test]
fn group_without_name_is_rejected() {
    assert!(serde_json::from_str::<Group>(r#"{"id":"g3"}"#).is_err());
}

#[test]
fn member_serializes_with_store_column_names() {
    let member = Member { id: "m1".into(), name: "Ana".into() };
    let value = serde_json::to_value(&member).unwrap();
    assert_eq!(value, serde_json::json!({ "id": "m1", "nome": "Ana" }));
}
