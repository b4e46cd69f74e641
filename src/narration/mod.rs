//! Narration port.
//!
//! A draw never waits on narration. The caller takes the drawn card and
//! asks the table to speak it afterwards, on whatever thread suits the UI. Narration is best effort: any failure means "no sound" and
//! never affects game state. Speech vendors plug in by implementing
//! `Narrator`; the crate ships only `SilentNarrator`.

use thiserror::Error;

use crate::cards::Card;

/// Errors a narrator may report. The table logs and discards them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NarrationError {
    #[error("narration service unavailable: {0}")]
    Unavailable(String),

    #[error("narration service returned no audio")]
    EmptyAudio,
}

/// What to speak for a drawn card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NarrationRequest {
    /// Card title, for narrators that want to announce it.
    pub title: String,

    /// Full text to read aloud: challenge then penalty.
    pub spoken_text: String,
}

impl NarrationRequest {
    /// Build the request for a drawn card.
    ///
    /// ```
    /// use party_deck::cards::{Card, CardId, Category};
    /// use party_deck::narration::NarrationRequest;
    ///
    /// let card = Card::new(CardId::new("1"), "Dare", "Sing", "Drink", Category::universal());
    /// let request = NarrationRequest::for_card(&card);
    /// assert_eq!(request.spoken_text, "Sing. Penalty: Drink");
    /// ```
    #[must_use]
    pub fn for_card(card: &Card) -> Self {
        Self {
            title: card.title.clone(),
            spoken_text: format!(
                "{}. Penalty: {}",
                card.content.trim_end_matches(['.', ' ']),
                card.penalty
            ),
        }
    }
}

/// Audio produced by a narrator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Narration {
    /// Encoded audio bytes, format defined by the narrator.
    Spoken(Vec<u8>),
    /// No audio: voice disabled, narrator declined, or narration failed.
    Silent,
}

impl Narration {
    /// Check if audio was produced.
    #[must_use]
    pub fn is_spoken(&self) -> bool {
        matches!(self, Narration::Spoken(_))
    }
}

/// Text-to-speech collaborator.
///
/// Called only through `Table::narrate`, never from inside a draw, so a
/// slow service delays the audio but not the game. Returning `Ok(None)`
/// means "nothing to play".
pub trait Narrator {
    /// Produce audio for `request`.
    fn narrate(&self, request: &NarrationRequest) -> Result<Option<Vec<u8>>, NarrationError>;
}

/// Narrator that never produces audio.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentNarrator;

impl Narrator for SilentNarrator {
    fn narrate(&self, _request: &NarrationRequest) -> Result<Option<Vec<u8>>, NarrationError> {
        Ok(None)
    }
}

impl<N: Narrator + ?Sized> Narrator for &N {
    fn narrate(&self, request: &NarrationRequest) -> Result<Option<Vec<u8>>, NarrationError> {
        (**self).narrate(request)
    }
}

impl<N: Narrator + ?Sized> Narrator for Box<N> {
    fn narrate(&self, request: &NarrationRequest) -> Result<Option<Vec<u8>>, NarrationError> {
        (**self).narrate(request)
    }
}

/// Ask `narrator` to speak `card`, absorbing every failure.
pub fn narrate_card<N: Narrator + ?Sized>(narrator: &N, card: &Card) -> Narration {
    let request = NarrationRequest::for_card(card);
    match narrator.narrate(&request) {
        Ok(Some(audio)) if !audio.is_empty() => Narration::Spoken(audio),
        Ok(_) => Narration::Silent,
        Err(e) => {
            tracing::warn!(id = %card.id, error = %e, "narration failed");
            Narration::Silent
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Category};

    struct Fixed(Result<Option<Vec<u8>>, NarrationError>);

    impl Narrator for Fixed {
        fn narrate(&self, _: &NarrationRequest) -> Result<Option<Vec<u8>>, NarrationError> {
            self.0.clone()
        }
    }

    fn card() -> Card {
        Card::new(
            CardId::new("1"),
            "Dare",
            "Sing a song.",
            "Two sips",
            Category::universal(),
        )
    }

    #[test]
    fn test_request_text() {
        let request = NarrationRequest::for_card(&card());
        assert_eq!(request.title, "Dare");
        assert_eq!(request.spoken_text, "Sing a song. Penalty: Two sips");
    }

    #[test]
    fn test_silent_narrator() {
        assert_eq!(narrate_card(&SilentNarrator, &card()), Narration::Silent);
    }

    #[test]
    fn test_audio_passed_through() {
        let narration = narrate_card(&Fixed(Ok(Some(vec![1, 2, 3]))), &card());
        assert_eq!(narration, Narration::Spoken(vec![1, 2, 3]));
        assert!(narration.is_spoken());
    }

    #[test]
    fn test_failures_absorbed() {
        let err = Fixed(Err(NarrationError::Unavailable("offline".into())));
        assert_eq!(narrate_card(&err, &card()), Narration::Silent);

        assert_eq!(narrate_card(&Fixed(Ok(Some(vec![]))), &card()), Narration::Silent);
        assert_eq!(
            narrate_card(&Fixed(Err(NarrationError::EmptyAudio)), &card()),
            Narration::Silent
        );
    }
}
