use plotboard::api::SelectionEvent;
use plotboard::core::{GroupKey, IndicatorId, Selection};

fn ids(raw: impl IntoIterator<Item = u32>) -> Vec<IndicatorId> {
    raw.into_iter().map(IndicatorId::from_raw).collect()
}

#[test]
fn honoring_never_reorders_the_choice() {
    let selection = Selection::new(ids([4, 1, 3, 0]), 2007);
    assert_eq!(selection.honored(), &ids([4, 1, 3])[..]);
}

#[test]
fn plottability_needs_two_honored_indicators() {
    assert!(!Selection::new(ids([]), 2007).is_plottable());
    assert!(!Selection::new(ids([1]), 2007).is_plottable());
    assert!(Selection::new(ids([1, 2]), 2007).is_plottable());
    assert!(Selection::new(ids([1, 2, 3, 4, 5]), 2007).is_plottable());
}

#[test]
fn selection_json_defaults_group_by_to_continent() {
    let selection: Selection =
        serde_json::from_str(r#"{"indicators":[0,1],"year":2007}"#).expect("parse");
    assert_eq!(selection.group_by, GroupKey::Continent);
    assert_eq!(selection.honored(), &ids([0, 1])[..]);
    assert_eq!(selection.year, 2007);
}

#[test]
fn selection_round_trips_with_snake_case_group_keys() {
    let selection = Selection::new(ids([2, 0]), 1962).with_group_by(GroupKey::Country);
    let json = serde_json::to_string(&selection).expect("json");
    assert_eq!(
        json,
        r#"{"indicators":[2,0],"year":1962,"group_by":"country"}"#
    );
    let back: Selection = serde_json::from_str(&json).expect("parse");
    assert_eq!(back, selection);
}

#[test]
fn overlong_selections_survive_serialization_untruncated() {
    let selection = Selection::new(ids([0, 1, 2, 3, 4]), 2000);
    let json = serde_json::to_string(&selection).expect("json");
    let back: Selection = serde_json::from_str(&json).expect("parse");
    assert_eq!(back.indicators.len(), 5);
    assert_eq!(back.honored(), &ids([0, 1, 2])[..]);
}

#[test]
fn events_serialize_as_tagged_variants() {
    let event = SelectionEvent::YearChanged(1962);
    assert_eq!(
        serde_json::to_string(&event).expect("json"),
        r#"{"year_changed":1962}"#
    );

    let event = SelectionEvent::IndicatorsChanged(ids([0, 2]));
    assert_eq!(
        serde_json::to_string(&event).expect("json"),
        r#"{"indicators_changed":[0,2]}"#
    );

    let event = SelectionEvent::GroupKeyChanged(GroupKey::Country);
    assert_eq!(
        serde_json::to_string(&event).expect("json"),
        r#"{"group_key_changed":"country"}"#
    );
}

#[test]
fn replay_scenario_events_parse_from_json() {
    let json = r#"[
        {"indicators_changed": [0, 1, 2]},
        {"year_changed": 1977},
        {"group_key_changed": "continent"},
        {"selection_replaced": {"indicators": [1], "year": 2002}}
    ]"#;
    let events: Vec<SelectionEvent> = serde_json::from_str(json).expect("parse");
    assert_eq!(events.len(), 4);
    assert_eq!(events[1], SelectionEvent::YearChanged(1977));
    let SelectionEvent::SelectionReplaced(selection) = &events[3] else {
        panic!("expected a replacement event");
    };
    assert_eq!(selection.year, 2002);
    assert_eq!(selection.group_by, GroupKey::Continent);
}
