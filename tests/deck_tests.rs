//! Draw engine scenario tests.
//!
//! These tests drive the engine through whole sessions with the store as
//! the card source, including edits made between draws.

use party_deck::cards::{Card, CardDraft, CardId, CardStore, Category};
use party_deck::core::DeckRng;
use party_deck::deck::{DrawEngine, DrawOutcome, EngineError, Progress};
use party_deck::storage::MemoryStorage;

fn card(id: &str) -> Card {
    Card::new(CardId::new(id), id, "content", "penalty", Category::new("party"))
}

fn ids<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Vec<String> {
    cards.into_iter().map(|c| c.id.to_string()).collect()
}

/// Test the A/B/C walkthrough: three plain draws, then a reshuffle draw.
#[test]
fn test_three_card_walkthrough() {
    let pool = vec![card("A"), card("B"), card("C")];
    let mut engine = DrawEngine::new(DeckRng::new(2024));
    engine.start_session(Category::new("party"), &pool);

    let order = ids(engine.session().unwrap().draw_pile());
    let mut sorted = order.clone();
    sorted.sort();
    assert_eq!(sorted, vec!["A", "B", "C"]);

    for k in 0..3 {
        let outcome = engine.draw(&pool).unwrap();
        assert_eq!(outcome.card().unwrap().id.as_str(), order[k]);
        assert!(!outcome.reshuffled());
        assert_eq!(engine.progress(), Progress { drawn: k + 1, total: 3 });
    }

    let session = engine.session().unwrap();
    assert!(session.draw_pile().is_empty());
    assert_eq!(ids(session.discard_pile()), order);

    let outcome = engine.draw(&pool).unwrap();
    assert!(outcome.reshuffled());
    let session = engine.session().unwrap();
    assert_eq!(session.discard_pile().len(), 1);
    assert_eq!(session.draw_pile().len(), 2);

    let mut all = ids(session.discard_pile());
    all.extend(ids(session.draw_pile()));
    all.sort();
    assert_eq!(all, vec!["A", "B", "C"]);
}

/// Test that drawing a category with no cards is a safe no-op.
#[test]
fn test_empty_universe() {
    let store = CardStore::load(MemoryStorage::new(), "cards");
    let mut engine = DrawEngine::new(DeckRng::new(1));

    engine.start_session(Category::new("Does Not Exist"), store.list());
    for _ in 0..3 {
        assert_eq!(engine.draw(store.list()), Ok(DrawOutcome::Nothing));
    }
    assert_eq!(engine.progress(), Progress { drawn: 0, total: 0 });
}

/// Test draw outside a session.
#[test]
fn test_draw_requires_session() {
    let mut engine = DrawEngine::new(DeckRng::new(1));
    assert_eq!(engine.draw(&[card("A")]), Err(EngineError::NoActiveSession));
}

/// Test that a card added mid-session shows up only after the reshuffle.
#[test]
fn test_added_card_joins_at_reshuffle() {
    let mut store = CardStore::load(MemoryStorage::new(), "cards");
    for card in store.list().to_vec() {
        store.delete(&card.id).unwrap();
    }
    let spicy = Category::new("Spicy");
    for i in 0..3 {
        store
            .add(CardDraft::new(format!("c{i}"), "p").with_category(spicy.clone()))
            .unwrap();
    }

    let mut engine = DrawEngine::new(DeckRng::new(8));
    engine.start_session(spicy.clone(), store.list());

    engine.draw(store.list()).unwrap();
    let late = store
        .add(CardDraft::new("late", "p").with_category(spicy.clone()))
        .unwrap();

    for _ in 0..2 {
        let outcome = engine.draw(store.list()).unwrap();
        assert_ne!(outcome.card().unwrap().id, late.id);
    }
    assert_eq!(engine.progress(), Progress { drawn: 3, total: 3 });

    let outcome = engine.draw(store.list()).unwrap();
    assert!(outcome.reshuffled());
    assert_eq!(engine.progress(), Progress { drawn: 1, total: 4 });
}

/// Test that categories are independent decks.
#[test]
fn test_categories_partition_cards() {
    let mut pool = vec![card("A"), card("B")];
    pool.push(Card::new(CardId::new("Z"), "Z", "c", "p", Category::new("tame")));

    let mut engine = DrawEngine::new(DeckRng::new(4));
    engine.start_session(Category::new("tame"), &pool);

    for _ in 0..5 {
        let outcome = engine.draw(&pool).unwrap();
        assert_eq!(outcome.card().unwrap().id.as_str(), "Z");
    }
}

/// Test long sessions keep the pile split consistent across reshuffles.
#[test]
fn test_long_session_conservation() {
    let pool: Vec<_> = (0..7).map(|i| card(&i.to_string())).collect();
    let mut engine = DrawEngine::new(DeckRng::new(99));
    engine.start_session(Category::new("party"), &pool);

    let mut reshuffles = 0;
    for draw in 1..=70 {
        let outcome = engine.draw(&pool).unwrap();
        if outcome.reshuffled() {
            reshuffles += 1;
            assert_eq!(draw % 7, 1, "reshuffle on draw {draw}");
        }
        let progress = engine.progress();
        assert_eq!(progress.total, 7);
    }
    assert_eq!(reshuffles, 9);
}
