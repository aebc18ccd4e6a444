use kira_trialqc::schema::v1::TrialQcV1;

#[test]
fn schema_roundtrip_v1() {
    let report = TrialQcV1::empty("0.0.0-test");
    let json = serde_json::to_string(&report).unwrap();
    let decoded: TrialQcV1 = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.tool, "kira-trialqc");
    assert_eq!(decoded.schema_version, "v1");
    assert_eq!(decoded.version, "0.0.0-test");
    assert!(decoded.tables.is_empty());
}
