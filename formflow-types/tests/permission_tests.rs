use formflow_types::Permission;

#[test]
fn serde_roundtrip_preserves_all_fields() {
    let p = Permission::new("export", "submissions", 3)
        .with_dependencies(&["view", "download"])
        .with_description("Export submissions as CSV");
    let json = serde_json::to_string(&p).unwrap();
    let back: Permission = serde_json::from_str(&json).unwrap();
    assert_eq!(p, back);
}

#[test]
fn parses_full_api_record() {
    let json = r#"{
        "name": "edit",
        "description": "Edit forms",
        "depends_on": ["view"],
        "category": "forms",
        "order": 2
    }"#;
    let p: Permission = serde_json::from_str(json).unwrap();
    assert_eq!(p.name, "edit");
    assert_eq!(p.depends_on, vec!["view".to_string()]);
    assert_eq!(p.category, "forms");
    assert_eq!(p.order, 2);
}

#[test]
fn dependency_order_is_preserved() {
    let json = r#"{"name":"publish","depends_on":["edit","view","approve"]}"#;
    let p: Permission = serde_json::from_str(json).unwrap();
    assert_eq!(
        p.depends_on,
        vec!["edit".to_string(), "view".to_string(), "approve".to_string()]
    );
}

#[test]
fn missing_name_fails_to_parse() {
    let result = serde_json::from_str::<Permission>(r#"{"category":"forms"}"#);
    assert!(result.is_err());
}

#[test]
fn negative_order_is_legal() {
    let p: Permission = serde_json::from_str(r#"{"name":"pin","order":-1}"#).unwrap();
    assert_eq!(p.order, -1);
}
