//! Card records.
//!
//! A `Card` is a challenge/penalty pair tagged with a `Category`.
//! `CardDraft` is the user-editable part of a card, before the store
//! assigns an id.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Stable, opaque card identifier.
///
/// Assigned once by the store and never changed. Serialized as a plain
/// string so stored collections stay readable.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Wrap an existing identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Tag partitioning the collection into independent decks.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Name of the category every built-in card belongs to.
    ///
    /// This is the exact tag found in existing saved collections, so their
    /// cards land in the built-in deck.
    pub const UNIVERSAL: &'static str = "Bộ bài Tổng hợp (All-in-One)";

    /// Create a category from its name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The built-in mixed deck.
    #[must_use]
    pub fn universal() -> Self {
        Self::new(Self::UNIVERSAL)
    }

    /// Get the category name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::universal()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reasons a card's text is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("card content must not be empty")]
    EmptyContent,

    #[error("card penalty must not be empty")]
    EmptyPenalty,
}

/// A card in the collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier, immutable once assigned.
    pub id: CardId,

    /// Short label.
    pub title: String,

    /// Challenge text.
    pub content: String,

    /// Forfeit for refusing the challenge.
    pub penalty: String,

    /// Deck this card belongs to.
    pub category: Category,
}

impl Card {
    /// Create a card with an explicit id.
    #[must_use]
    pub fn new(
        id: CardId,
        title: impl Into<String>,
        content: impl Into<String>,
        penalty: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            penalty: penalty.into(),
            category,
        }
    }

    /// Check whether this card belongs to `category`.
    #[must_use]
    pub fn is_in(&self, category: &Category) -> bool {
        &self.category == category
    }

    /// Check the required text fields.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_text(&self.content, &self.penalty)
    }
}

/// User-supplied card fields, before an id is assigned.
///
/// ```
/// use party_deck::cards::{CardDraft, Category};
///
/// let draft = CardDraft::new("Text your ex", "Drink twice")
///     .with_title("Brave")
///     .with_category(Category::new("Spicy"));
///
/// assert!(draft.validate().is_ok());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDraft {
    /// Optional label. Blank titles are generated by the store.
    pub title: Option<String>,
    pub content: String,
    pub penalty: String,
    pub category: Category,
}

impl CardDraft {
    /// Create a draft in the universal category with no title.
    #[must_use]
    pub fn new(content: impl Into<String>, penalty: impl Into<String>) -> Self {
        Self {
            title: None,
            content: content.into(),
            penalty: penalty.into(),
            category: Category::universal(),
        }
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the category.
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Check the required text fields.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_text(&self.content, &self.penalty)
    }

    /// Title with surrounding whitespace removed, if any is left.
    #[must_use]
    pub fn trimmed_title(&self) -> Option<&str> {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

fn check_text(content: &str, penalty: &str) -> Result<(), ValidationError> {
    if content.trim().is_empty() {
        return Err(ValidationError::EmptyContent);
    }
    if penalty.trim().is_empty() {
        return Err(ValidationError::EmptyPenalty);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new("42");
        assert_eq!(id.as_str(), "42");
        assert_eq!(format!("{}", id), "42");
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(CardId::generate(), CardId::generate());
    }

    #[test]
    fn test_category_default_is_universal() {
        assert_eq!(Category::default().as_str(), Category::UNIVERSAL);
    }

    #[test]
    fn test_card_serializes_flat() {
        let card = Card::new(
            CardId::new("7"),
            "Truth",
            "Tell a secret",
            "Two sips",
            Category::universal(),
        );

        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["id"], "7");
        assert_eq!(json["title"], "Truth");
        assert_eq!(json["content"], "Tell a secret");
        assert_eq!(json["penalty"], "Two sips");
        assert_eq!(json["category"], Category::UNIVERSAL);

        let back: Card = serde_json::from_value(json).unwrap();
        assert_eq!(back, card);
    }

    #[test]
    fn test_saved_record_joins_universal_deck() {
        let raw = r#"{
            "id": "1712345678901",
            "title": "Thử thách",
            "content": "Hát một bài",
            "penalty": "Uống 2 ngụm",
            "category": "Bộ bài Tổng hợp (All-in-One)"
        }"#;

        let card: Card = serde_json::from_str(raw).unwrap();
        assert_eq!(card.id.as_str(), "1712345678901");
        assert!(card.is_in(&Category::universal()));
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            CardDraft::new("  ", "drink").validate(),
            Err(ValidationError::EmptyContent)
        );
        assert_eq!(
            CardDraft::new("dance", "").validate(),
            Err(ValidationError::EmptyPenalty)
        );
        assert!(CardDraft::new("dance", "drink").validate().is_ok());
    }

    #[test]
    fn test_trimmed_title() {
        assert_eq!(CardDraft::new("a", "b").trimmed_title(), None);
        assert_eq!(CardDraft::new("a", "b").with_title("   ").trimmed_title(), None);
        assert_eq!(
            CardDraft::new("a", "b").with_title(" Dare ").trimmed_title(),
            Some("Dare")
        );
    }

    #[test]
    fn test_is_in() {
        let card = Card::new(CardId::new("1"), "t", "c", "p", Category::new("Spicy"));
        assert!(card.is_in(&Category::new("Spicy")));
        assert!(!card.is_in(&Category::universal()));
    }
}
