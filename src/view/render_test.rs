use super::*;
use crate::store::StoreError;
use crate::store::test_helpers::{math_club, math_club_members};
use crate::view::state::FetchEvent;

fn loaded_state() -> GroupDetailState {
    let mut s = GroupDetailState::new("g1");
    s.apply(FetchEvent::Group(Ok(Some(math_club()))));
    s.apply(FetchEvent::Members(Ok(math_club_members())));
    s
}

#[test]
fn loading_renders_indicator_only_even_with_members() {
    let mut s = GroupDetailState::new("g1");
    s.apply(FetchEvent::Members(Ok(math_club_members())));
    let screen = render(&s);
    assert_eq!(screen, Screen::Loading);
    assert_eq!(screen.to_string(), format!("{LOADING_INDICATOR}\n"));
}

#[test]
fn math_club_scenario_renders_title_description_and_rows() {
    let screen = render(&loaded_state());
    let Screen::Detail { title, description, members_label, rows } = &screen else {
        panic!("expected detail screen, got {screen:?}");
    };
    assert_eq!(title, "Math Club");
    assert_eq!(description, "Weekly sessions");
    assert_eq!(*members_label, MEMBERS_LABEL);
    let texts: Vec<&str> = rows.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts, vec!["Ana", "Bo"]);
    let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["m1", "m2"]);
}

#[test]
fn detail_text_layout() {
    let text = render(&loaded_state()).to_string();
    assert_eq!(text, "Math Club\nWeekly sessions\n\nMembros do Grupo:\n  Ana\n  Bo\n");
}

#[test]
fn loaded_group_with_no_members_renders_label_and_no_rows() {
    let mut s = GroupDetailState::new("g1");
    s.apply(FetchEvent::Group(Ok(Some(math_club()))));
    let Screen::Detail { rows, .. } = render(&s) else {
        panic!("expected detail screen");
    };
    assert!(rows.is_empty());
}

#[test]
fn not_found_ignores_members() {
    let mut s = GroupDetailState::new("g404");
    s.apply(FetchEvent::Members(Ok(math_club_members())));
    s.apply(FetchEvent::Group(Ok(None)));
    let screen = render(&s);
    assert_eq!(screen, Screen::NotFound { message: NOT_FOUND_MESSAGE, reason: None });
    assert_eq!(screen.to_string(), "Grupo não encontrado.\n");
}

#[test]
fn failure_renders_not_found_but_keeps_reason() {
    let mut s = GroupDetailState::new("g1");
    s.apply(FetchEvent::Group(Err(StoreError::Request("timed out".into()))));
    let screen = render(&s);
    assert!(matches!(&screen, Screen::NotFound { reason: Some(r), .. } if r.contains("timed out")));
    assert_eq!(screen.to_string(), "Grupo não encontrado.\n");
}

#[test]
fn missing_description_renders_empty() {
    let mut s = GroupDetailState::new("g1");
    s.apply(FetchEvent::Group(Ok(Some(crate::types::Group { description: None, ..math_club() }))));
    assert!(matches!(render(&s), Screen::Detail { description, .. } if description.is_empty()));
}

#[test]
fn screen_serializes_with_kind_tag() {
    let value = serde_json::to_value(render(&GroupDetailState::new("g1"))).unwrap();
    assert_eq!(value, serde_json::json!({ "kind": "loading" }));

    let value = serde_json::to_value(render(&loaded_state())).unwrap();
    assert_eq!(value["kind"], "detail");
    assert_eq!(value["rows"][1]["text"], "Bo");
}
