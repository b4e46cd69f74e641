//! Built-in card collection.
//!
//! Used as first-run content and as the target of "restore defaults".
//! Ids are fixed so a restored collection is identical every time.

use super::definition::{Card, CardId, Category};

const DEFAULT_CARDS: &[(&str, &str, &str, &str)] = &[
    (
        "default-01",
        "Truth Bomb",
        "Reveal the most embarrassing thing on your phone's camera roll.",
        "Finish your drink.",
    ),
    (
        "default-02",
        "Left Hand Rule",
        "Everyone drinks with their left hand until your next turn. You catch offenders.",
        "Two sips for every slip you miss.",
    ),
    (
        "default-03",
        "Waterfall",
        "Start drinking. The player to your left may stop only after you do, and so on around the table.",
        "Whoever stops early takes a full shot.",
    ),
    (
        "default-04",
        "Accent Round",
        "Speak only in a foreign accent chosen by the table until your next turn.",
        "Three sips each time you break character.",
    ),
    (
        "default-05",
        "Hot Seat",
        "Answer any three questions from the table, honestly.",
        "One shot per question you skip.",
    ),
    (
        "default-06",
        "Group Photo",
        "Take a silly selfie with the whole table and post it.",
        "Drink half your glass.",
    ),
    (
        "default-07",
        "Never Have I Ever",
        "Say something you have never done. Everyone who has done it drinks.",
        "If nobody drinks, you drink twice.",
    ),
    (
        "default-08",
        "Rhyme Time",
        "Say a word. Going clockwise, each player must rhyme with it.",
        "The first player who fails drinks three times.",
    ),
    (
        "default-09",
        "Compliment Chain",
        "Give a sincere compliment to every player at the table.",
        "Skip anyone and take two sips.",
    ),
    (
        "default-10",
        "Song Request",
        "Sing the chorus of a song chosen by the player on your right.",
        "Refuse and finish your drink.",
    ),
    (
        "default-11",
        "Social Call",
        "Call a contact chosen by the table and wish them a happy birthday.",
        "Take a full shot.",
    ),
    (
        "default-12",
        "Cheers",
        "Everyone raises a glass. Lucky you, nothing else.",
        "One sip for the whole table.",
    ),
];

/// The built-in collection, in display order.
///
/// Always returns the same cards.
#[must_use]
pub fn default_cards() -> Vec<Card> {
    DEFAULT_CARDS
        .iter()
        .map(|&(id, title, content, penalty)| {
            Card::new(CardId::new(id), title, content, penalty, Category::universal())
        })
        .collect()
}
