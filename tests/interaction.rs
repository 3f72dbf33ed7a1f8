//! End-to-end scenarios for hover-driven overlap flagging, assistant-driven
//! highlighting, and the animation supersession rules.

use outletmap::prelude::*;

fn outlet(id: u64, name: &str, lat: f64, lng: f64, radius: f64) -> Outlet {
    Outlet {
        id,
        name: name.to_string(),
        address: String::new(),
        lat,
        lng,
        radius,
        waze_url: String::new(),
    }
}

#[test]
fn hovering_close_pair_borders_both() {
    // Distance is about 0.0005 degrees * 111000 = 55.5 m, well under the
    // 900 m radius sum, so both markers get the overlap border.
    let store = OutletStore::from_outlets(vec![
        outlet(1, "A", 3.10, 101.60, 500.0),
        outlet(2, "B", 3.1005, 101.60, 400.0),
    ]);
    let mut interaction = MarkerInteraction::new(30.0, 40.0);

    interaction.on_hover_start(1, &store);
    assert!(interaction.has_border(1));
    assert!(interaction.has_border(2));

    // Symmetric: hovering the other one flags the same pair
    interaction.on_hover_end();
    interaction.on_hover_start(2, &store);
    assert!(interaction.has_border(1));
    assert!(interaction.has_border(2));
}

#[test]
fn overlap_is_symmetric_for_all_pairs() {
    let outlets = vec![
        outlet(1, "A", 3.10, 101.60, 500.0),
        outlet(2, "B", 3.1005, 101.60, 400.0),
        outlet(3, "C", 3.12, 101.62, 800.0),
        outlet(4, "D", 3.50, 101.90, 100.0),
    ];
    for a in &outlets {
        for b in &outlets {
            if a.id == b.id {
                continue;
            }
            assert_eq!(
                overlapping_ids(a, &outlets).contains(&b.id),
                overlapping_ids(b, &outlets).contains(&a.id),
                "overlap between {} and {} must be symmetric",
                a.id,
                b.id
            );
        }
    }
}

#[test]
fn hovered_outlet_always_borders_itself() {
    let store = OutletStore::from_outlets(vec![outlet(9, "Lonely", 3.0, 101.0, 50.0)]);
    let mut interaction = MarkerInteraction::new(30.0, 40.0);
    interaction.on_hover_start(9, &store);
    assert_eq!(interaction.border_set().len(), 1);
    assert!(interaction.has_border(9));
}

#[test]
fn highlight_clear_then_query_is_false_for_all() {
    let (commands, receiver) = command_channel();
    let mut interaction = MarkerInteraction::new(30.0, 40.0);
    let o = outlet(1, "McDonald's SS2 DT", 3.1, 101.6, 500.0);

    commands.highlight_outlets_by_name(vec!["SS2".to_string()]);
    commands.highlight_outlets_by_name(Vec::new());
    for command in receiver.drain() {
        if let MapCommand::HighlightByName(names) = command {
            interaction.set_highlighted_names(Some(names));
        }
    }
    assert!(!interaction.is_highlighted(&o));
}

#[test]
fn highlight_matches_by_substring() {
    let mut interaction = MarkerInteraction::new(30.0, 40.0);
    interaction.set_highlighted_names(Some(vec!["SS2".to_string()]));

    assert!(interaction.is_highlighted(&outlet(1, "McDonald's SS2 DT", 3.1, 101.6, 0.0)));
    assert!(!interaction.is_highlighted(&outlet(2, "Subang", 3.1, 101.6, 0.0)));
}

#[test]
fn shrink_overrides_growth_and_never_overshoots() {
    let store = OutletStore::from_outlets(vec![outlet(1, "A", 3.10, 101.60, 500.0)]);
    let mut interaction = MarkerInteraction::new(30.0, 40.0);

    interaction.on_hover_start(1, &store);
    for _ in 0..3 {
        interaction.tick();
    }
    interaction.on_hover_end();

    let mut max_seen: f64 = 0.0;
    let mut ticks = 0;
    while interaction.tick() {
        max_seen = max_seen.max(interaction.icon_size(1));
        ticks += 1;
        assert!(ticks < 100, "shrink animation must settle");
    }
    assert!(max_seen <= 40.0);
    assert_eq!(interaction.icon_size(1), 30.0);
}

#[test]
fn assistant_reply_highlights_and_renders_outlet_button() {
    let (commands, receiver) = command_channel();
    let mut chat = ChatState::new();

    chat.apply_reply(
        AssistantReply {
            reply: "Found it".to_string(),
            session_id: None,
            outlet: Some(vec!["Cheras".to_string()]),
        },
        &commands,
    );

    // Transcript entry carries one clickable outlet button
    let last = chat.messages.last().unwrap();
    assert_eq!(last.text, "Found it");
    assert_eq!(last.outlets.as_deref(), Some(&["Cheras".to_string()][..]));

    // The command channel carries the highlight, and a marker whose name
    // contains the fragment lights up
    let mut interaction = MarkerInteraction::new(30.0, 40.0);
    for command in receiver.drain() {
        if let MapCommand::HighlightByName(names) = command {
            interaction.set_highlighted_names(Some(names));
        }
    }
    assert!(interaction.is_highlighted(&outlet(1, "McDonald's Cheras", 3.1, 101.7, 0.0)));
}

#[test]
fn name_fragment_lookup_misses_silently() {
    let store = OutletStore::from_outlets(vec![outlet(1, "McDonald's SS2 DT", 3.1, 101.6, 0.0)]);
    assert!(store.find_by_name_fragment("Sunway").is_none());
}
