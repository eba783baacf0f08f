//! Serde roundtrip and wire-format tests for all entity types.

use chrono::{NaiveDate, TimeZone, Utc};
use pretty_assertions::assert_eq;
use campus_core::entities::{Grade, Module, OperationLog, Registration, Student};
use campus_core::enums::{OperationEntityType, OperationType};

fn sample_student() -> Student {
    Student {
        id: Some(1),
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        user_name: "ada".into(),
        email: "ada@example.edu".into(),
        entry_year: Some(2023),
        graduate_year: Some(2026),
        major: Some("Mathematics".into()),
        tuition_fee: Some(9250.0),
        paid_tuition_fee: Some(4625.0),
        birth_date: NaiveDate::from_ymd_opt(2004, 12, 10),
        home_student: Some(true),
        sex: Some("F".into()),
    }
}

fn sample_module() -> Module {
    Module {
        id: Some(2),
        code: "COMP0010".into(),
        name: "Software Engineering".into(),
        mnc: true,
        department: Some("Computer Science".into()),
        prerequisite_module: None,
        required_year: Some(2),
        min_year: Some(1),
        max_year: Some(3),
    }
}

#[test]
fn student_roundtrip_preserves_all_fields() {
    let student = sample_student();
    let json = serde_json::to_string_pretty(&student).unwrap();
    let recovered: Student = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, student);
}

#[test]
fn student_wire_names_are_camel_case() {
    let json = serde_json::to_value(sample_student()).unwrap();
    assert_eq!(json["firstName"], "Ada");
    assert_eq!(json["userName"], "ada");
    assert_eq!(json["entryYear"], 2023);
    assert_eq!(json["homeStudent"], true);
    assert!(json.get("first_name").is_none());
}

#[test]
fn unsaved_student_serializes_without_id() {
    let student = Student {
        first_name: "Grace".into(),
        last_name: "Hopper".into(),
        user_name: "grace".into(),
        email: "grace@example.edu".into(),
        ..Student::default()
    };
    let json = serde_json::to_value(&student).unwrap();
    assert!(json.get("id").is_none(), "create bodies must omit id");
}

#[test]
fn student_tolerates_minimal_payload() {
    let student: Student = serde_json::from_str(r#"{"firstName":"Bob"}"#).unwrap();
    assert_eq!(student.first_name, "Bob");
    assert_eq!(student.last_name, "");
    assert!(student.id.is_none());
}

#[test]
fn module_roundtrip_with_prerequisite() {
    let module = Module {
        prerequisite_module: Some(Box::new(sample_module())),
        ..sample_module()
    };
    let json = serde_json::to_string(&module).unwrap();
    let recovered: Module = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, module);
    let value = serde_json::to_value(&module).unwrap();
    assert_eq!(value["prerequisiteModule"]["code"], "COMP0010");
}

#[test]
fn registration_embeds_entity_snapshots() {
    let registration = Registration {
        id: Some(10),
        student: Some(sample_student()),
        module: Some(sample_module()),
    };
    let json = serde_json::to_string(&registration).unwrap();
    let recovered: Registration = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, registration);
}

#[test]
fn grade_with_null_score_roundtrips() {
    let grade: Grade =
        serde_json::from_str(r#"{"id":5,"score":null,"student":{"id":1},"module":{"id":2}}"#)
            .unwrap();
    assert_eq!(grade.id, Some(5));
    assert!(grade.score.is_none());
    assert_eq!(grade.student.as_ref().and_then(|s| s.id), Some(1));
}

#[test]
fn operation_log_parses_backend_wire_format() {
    let log: OperationLog = serde_json::from_str(
        r#"{
            "id": 7,
            "operationType": "DELETE",
            "entityType": "REGISTRATION",
            "entityId": 42,
            "timestamp": "2025-03-01T09:30:00Z",
            "username": "admin",
            "description": "Removed enrollment"
        }"#,
    )
    .unwrap();
    assert_eq!(log.operation_type, OperationType::Delete);
    assert_eq!(log.entity_type, OperationEntityType::Registration);
    assert_eq!(log.entity_id, Some(42));
    assert_eq!(
        log.timestamp,
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap()
    );
}

#[test]
fn full_name_drops_missing_parts() {
    let student = Student {
        first_name: "Ada".into(),
        ..Student::default()
    };
    assert_eq!(student.full_name(), "Ada");
    assert_eq!(sample_student().full_name(), "Ada Lovelace");
    assert_eq!(Student::default().full_name(), "");
}
