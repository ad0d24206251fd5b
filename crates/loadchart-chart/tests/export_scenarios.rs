//! End-to-end scenarios: drive the state through realistic edit
//! sequences and check the resulting export display list and filename.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use loadchart_chart::layout::{BLANK_SLOT_OPACITY, ROUTE_PLACEHOLDER};
use loadchart_chart::{ChartState, DrawOp, Quadrant, SLOTS_PER_QUADRANT, chart_draw_ops};

fn texts(ops: &[DrawOp]) -> Vec<&str> {
    ops.iter()
        .filter_map(|op| match op {
            DrawOp::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
        .collect()
}

fn blank_slots(ops: &[DrawOp]) -> usize {
    ops.iter()
        .filter(|op| {
            matches!(
                op,
                DrawOp::Rect { opacity, .. }
                    if (*opacity - BLANK_SLOT_OPACITY).abs() < f64::EPSILON
            )
        })
        .count()
}

#[test]
fn named_route_with_one_stop_exports_that_stop_only() {
    // initial state -> set route name -> fill Q1 slot 0 -> export.
    let state = ChartState::default()
        .with_route_name("KR1A")
        .with_location(Quadrant::Q1, 0, "Maple St")
        .unwrap()
        .with_editing(false);

    assert_eq!(state.export_filename(), "KR1A_load_chart.jpg");

    let ops = chart_draw_ops(&state);
    let texts = texts(&ops);
    assert!(texts.contains(&"KR1A"), "route name missing from export");
    assert!(texts.contains(&"Maple St"), "stop missing from export");
    assert!(!texts.contains(&ROUTE_PLACEHOLDER));

    // The other 15 slots keep the ghosted empty treatment.
    assert_eq!(blank_slots(&ops), 15);
}

#[test]
fn clear_all_after_filling_every_slot_restores_the_blank_chart() {
    let mut state = ChartState::default()
        .with_route_name("KR9Z")
        .with_editing(false);
    for quadrant in Quadrant::ALL {
        for index in 0..SLOTS_PER_QUADRANT {
            state = state
                .with_location(quadrant, index, format!("Stop {index}"))
                .unwrap();
        }
    }
    assert_eq!(blank_slots(&chart_draw_ops(&state)), 0);

    let cleared = ChartState::reset();

    // Route field is back in edit mode with an empty name.
    assert!(cleared.editing_route);
    assert_eq!(cleared.route_name, "");
    assert_eq!(cleared.export_filename(), "route_load_chart.jpg");

    // All 16 slots render blank again and the placeholder returns.
    let ops = chart_draw_ops(&cleared);
    assert_eq!(blank_slots(&ops), 16);
    assert!(texts(&ops).contains(&ROUTE_PLACEHOLDER));
    assert!(!texts(&ops).iter().any(|t| t.starts_with("Stop ")));
}

#[test]
fn second_export_sees_edits_made_after_the_first() {
    // Exports are independent snapshots: each call renders the state it
    // was given, so an in-flight export is never affected by later edits.
    let first = ChartState::default()
        .with_location(Quadrant::Q2, 1, "Harbour Rd")
        .unwrap();
    let second = first
        .clone()
        .with_location(Quadrant::Q2, 1, "Station Way")
        .unwrap();

    assert!(texts(&chart_draw_ops(&first)).contains(&"Harbour Rd"));
    let second_ops = chart_draw_ops(&second);
    let second_texts: Vec<&str> = texts(&second_ops);
    assert!(second_texts.contains(&"Station Way"));
    assert!(!second_texts.contains(&"Harbour Rd"));
}
