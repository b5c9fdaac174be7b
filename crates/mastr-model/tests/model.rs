//! Tests for mastr-model types.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use mastr_model::{
    ChangeDescriptor, EntityKey, EntityRecord, FieldValue, PeriodSummary, Status,
    StatusTransition, StatusTotals,
};

fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

fn record() -> EntityRecord {
    EntityRecord {
        key: EntityKey::new("SEE900000000001").unwrap(),
        period: "2021-10".parse().unwrap(),
        name: "Speicher Nord".to_string(),
        status: Status::Planning,
        power_mw: 15,
        energy_mwh: 20,
        region: "1408".to_string(),
        owner: "ABR900000000001".to_string(),
        registration_date: date("2021-03-01"),
        operation_start: None,
        planned_operation_start: Some(date("2022-06-30")),
        last_update: date("2021-09-20"),
        latitude: None,
        longitude: None,
        technology: Some("battery".to_string()),
        detail_page_id: None,
        attributes: BTreeMap::from([
            ("Postleitzahl".to_string(), "26121".to_string()),
            ("Bruttoleistung".to_string(), "16000".to_string()),
        ]),
    }
}

#[test]
fn status_change_serializes_with_transition_tag() {
    let change = ChangeDescriptor {
        field: "status".to_string(),
        from: FieldValue::Status(Status::Planning),
        to: FieldValue::Status(Status::Construction),
        transition: Some(StatusTransition {
            from: Status::Planning,
            to: Status::Construction,
        }),
    };
    let json = serde_json::to_value(&change).expect("serialize change");
    assert_eq!(json["field"], "status");
    assert_eq!(json["from"], "planning");
    assert_eq!(json["to"], "construction");
    assert_eq!(json["transition"]["to"], "construction");
    assert!(change.enters(Status::Construction));
    assert!(!change.enters(Status::Operation));
}

#[test]
fn plain_change_omits_transition() {
    let change = ChangeDescriptor {
        field: "power_mw".to_string(),
        from: FieldValue::Integer(15),
        to: FieldValue::Integer(20),
        transition: None,
    };
    let json = serde_json::to_value(&change).expect("serialize change");
    assert_eq!(json["from"], 15);
    assert!(json.get("transition").is_none());
}

#[test]
fn field_view_skips_absent_optionals_and_sorts_attributes() {
    let record = record();
    let fields = record.fields();
    let names: Vec<&str> = fields.iter().map(|(name, _)| name.as_ref()).collect();
    assert_eq!(
        names,
        vec![
            "name",
            "status",
            "power_mw",
            "energy_mwh",
            "region",
            "owner",
            "registration_date",
            "planned_operation_start",
            "last_update",
            "technology",
            "Bruttoleistung",
            "Postleitzahl",
        ]
    );
}

#[test]
fn summary_serializes_status_keys() {
    let mut summary = PeriodSummary::empty("2021-11".parse().unwrap());
    summary.totals.insert(
        Status::Operation,
        StatusTotals {
            count: 2,
            power_mw: 30,
            energy_mwh: 45,
        },
    );
    let json = serde_json::to_value(&summary).expect("serialize summary");
    assert_eq!(json["period"], "2021-11");
    assert_eq!(json["totals"]["operation"]["count"], 2);
    assert_eq!(json["totals"]["planning"]["count"], 0);
    assert_eq!(summary.total_count(), 2);
}
