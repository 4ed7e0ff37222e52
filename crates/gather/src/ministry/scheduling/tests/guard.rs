use super::common::*;
use crate::ministry::scheduling::domain::TargetServiceTime;
use crate::ministry::scheduling::guard::{validate, RequestViolation};

#[test]
fn empty_batch_is_rejected() {
    let request = request(Vec::new());

    match validate(&request, today()) {
        Err(RequestViolation::EmptyBatch) => {}
        other => panic!("expected empty batch violation, got {other:?}"),
    }
}

#[test]
fn duplicate_roles_are_rejected() {
    let request = request(vec![
        role("worship-leader", "Worship Leader"),
        role("worship-leader", "Worship Leader"),
    ]);

    match validate(&request, today()) {
        Err(RequestViolation::DuplicateRole(id)) => assert_eq!(id.0, "worship-leader"),
        other => panic!("expected duplicate role violation, got {other:?}"),
    }
}

#[test]
fn unnamed_roles_are_rejected() {
    let request = request(vec![role("greeter", "   ")]);

    match validate(&request, today()) {
        Err(RequestViolation::UnnamedRole(id)) => assert_eq!(id.0, "greeter"),
        other => panic!("expected unnamed role violation, got {other:?}"),
    }
}

#[test]
fn inverted_capacity_bounds_are_rejected() {
    let mut bad_role = role("greeter", "Greeter");
    bad_role.min_volunteers = 3;
    bad_role.max_volunteers = 1;

    match validate(&request(vec![bad_role]), today()) {
        Err(RequestViolation::InvertedCapacity { min, max, .. }) => {
            assert_eq!((min, max), (3, 1));
        }
        other => panic!("expected capacity violation, got {other:?}"),
    }
}

#[test]
fn target_time_derivation_follows_the_label() {
    let mut nine = request(vec![role("greeter", "Greeter")]);
    nine.service_time = "9:00 AM".to_string();
    let mut eleven = request(vec![role("greeter", "Greeter")]);
    eleven.service_time = "11:00 AM".to_string();
    let mut evening = request(vec![role("greeter", "Greeter")]);
    evening.service_time = "Saturday 6pm".to_string();

    assert_eq!(
        validate(&nine, today()).expect("valid").target_time,
        TargetServiceTime::NineAm
    );
    assert_eq!(
        validate(&eleven, today()).expect("valid").target_time,
        TargetServiceTime::ElevenAm
    );
    assert_eq!(
        validate(&evening, today()).expect("valid").target_time,
        TargetServiceTime::ElevenAm
    );
}
