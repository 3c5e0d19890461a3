//! Plain-text panel rendering.

use std::fmt::Write;

use crate::cards::Card;
use crate::core::config::RESOLUTIONS_PER_ROOM;
use crate::core::snapshot::Snapshot;

const RULE: &str = "--------------------------------------------------";
const INNER_WIDTH: usize = 46;

fn row(out: &mut String, text: &str) {
    let _ = writeln!(out, "| {text:<INNER_WIDTH$} |");
    let _ = writeln!(out, "{RULE}");
}

fn card_list(cards: &[Card]) -> String {
    cards.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

/// Render `snap` as a bordered text panel.
#[must_use]
pub fn panel(snap: &Snapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");

    if let Some(result) = snap.result {
        let banner = if result.is_victory() { "Dungeon cleared!" } else { "Game Over!" };
        row(&mut out, banner);
        row(&mut out, &format!("Final score: {}", snap.score));
        row(&mut out, "Press 'r' to restart the game.");
        return out;
    }

    row(&mut out, &format!("Health: {}/{}", snap.health, snap.max_health));
    row(&mut out, &format!("Dungeon: {} cards", snap.dungeon_size));

    let room = snap
        .room
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            let mark = if slot.pending { "*" } else { "" };
            format!("[{}:{mark}{}]", i + 1, slot.card)
        })
        .collect::<Vec<_>>()
        .join(" ");
    row(&mut out, &format!("Room: {room}"));

    let weapon = match snap.weapon {
        Some(w) if w.last_slain > 0 => {
            format!("Weapon: {} (ceiling {}, last slain {})", w.card, w.ceiling, w.last_slain)
        }
        Some(w) => format!("Weapon: {} (ceiling {})", w.card, w.ceiling),
        None => "Weapon: none".to_string(),
    };
    row(&mut out, &weapon);

    row(&mut out, &format!("Discard pile: {} cards", snap.discard_size));
    row(&mut out, &format!("Score: {}", snap.score));

    let mut turn = format!("Resolved {}/{RESOLUTIONS_PER_ROOM}", snap.cards_resolved);
    if snap.potion_used {
        turn.push_str("  potion used");
    }
    if !snap.can_avoid && !snap.awaiting_fight_choice {
        turn.push_str("  avoid used");
    }
    row(&mut out, &turn);

    if snap.awaiting_fight_choice {
        row(&mut out, "Fight: [b]arehanded or [w]eapon?");
    }

    if let Some(preview) = &snap.dungeon_preview {
        let shown = preview.len().min(8);
        row(&mut out, &format!("Next: {}", card_list(&preview[..shown])));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::FightStyle;
    use crate::core::{SessionBuilder, SessionConfig};

    fn cards() -> Vec<Card> {
        vec![Card::spade(10), Card::diamond(5), Card::heart(8), Card::club(2), Card::club(7)]
    }

    #[test]
    fn test_panel_shows_room() {
        let session = SessionBuilder::new().dungeon(cards()).build();
        let text = panel(&session.snapshot());

        assert!(text.contains("Health: 20/20"));
        assert!(text.contains("Dungeon: 1 cards"));
        assert!(text.contains("[1:♠10] [2:♦5] [3:♥8] [4:♣2]"));
        assert!(text.contains("Weapon: none"));
        assert!(!text.contains("Next:"));
    }

    #[test]
    fn test_panel_marks_pending_card() {
        let mut session = SessionBuilder::new().dungeon(cards()).build();
        session.select_card(1).unwrap();
        session.select_card(0).unwrap();

        let text = panel(&session.snapshot());
        assert!(text.contains("[1:*♠10]"));
        assert!(text.contains("Weapon: ♦5 (ceiling 14)"));
        assert!(text.contains("[b]arehanded or [w]eapon?"));

        session.choose_fight_style(FightStyle::Weapon).unwrap();
        let text = panel(&session.snapshot());
        assert!(text.contains("last slain 10"));
    }

    #[test]
    fn test_panel_game_over() {
        let mut session = SessionBuilder::new()
            .dungeon(vec![Card::spade(14), Card::club(14), Card::heart(2), Card::club(3)])
            .build();
        for _ in 0..2 {
            session.select_card(0).unwrap();
            session.choose_fight_style(FightStyle::Barehanded).unwrap();
        }

        let text = panel(&session.snapshot());
        assert!(text.contains("Game Over!"));
        assert!(text.contains("Final score: -8"));
    }

    #[test]
    fn test_panel_cleared() {
        let mut session = SessionBuilder::new().dungeon(vec![Card::heart(4)]).build();
        session.select_card(0).unwrap();

        let text = panel(&session.snapshot());
        assert!(text.contains("Dungeon cleared!"));
        assert!(text.contains("Final score: 24"));
    }

    #[test]
    fn test_panel_debug_preview() {
        let config = SessionConfig::new().with_debug(true);
        let session = SessionBuilder::new().config(config).dungeon(cards()).build();
        assert!(panel(&session.snapshot()).contains("Next: ♣7"));
    }
}
