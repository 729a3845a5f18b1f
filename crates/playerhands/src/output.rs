//! Output formatting functions.

use playerhands_core::hand::HandRecord;

/// Format a value as compact JSON.
pub fn format_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Format a hand for display.
pub fn format_hand(hand: &HandRecord) -> String {
    let cards = hand
        .cards
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{} ({})\n  Version: {}\n  Cards: [{}]",
        hand.player_name, hand.player_id, hand.version, cards
    )
}

/// Format hands for display.
pub fn format_hands(hands: &[HandRecord]) -> String {
    if hands.is_empty() {
        return "No hands found.".to_string();
    }
    let mut output = format!("HANDS ({})\n", hands.len());
    output.push_str(&"-".repeat(40));
    for hand in hands {
        output.push_str(&format!("\n{}", format_hand(hand)));
        output.push('\n');
    }
    output
}
