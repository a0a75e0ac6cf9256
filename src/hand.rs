//! Player hand and face-up capture pile representations.

use alloc::vec::Vec;

use crate::card::{Card, Suit};

/// A player's hand.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the hand contains a specific card.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Removes a specific card from the hand.
    ///
    /// Returns `true` if the card was found and removed.
    pub fn remove(&mut self, card: Card) -> bool {
        if let Some(pos) = self.cards.iter().position(|&c| c == card) {
            self.cards.remove(pos);
            true
        } else {
            false
        }
    }

    /// Returns whether any card other than `played` carries the given
    /// arithmetic value.
    ///
    /// This is the check that keeps builds honest: a declared build value
    /// must stay capturable by a card still held after the move.
    #[must_use]
    pub fn holds_capturer(&self, value: u8, played: Option<Card>) -> bool {
        self.cards
            .iter()
            .filter(|&&c| Some(c) != played)
            .any(|&c| c.build_value() == Some(value))
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// A player's face-up capture pile.
///
/// Captured cards are appended in capture order; only the top card is ever
/// visible to (and usable by) opponents. Cards never return to the deck.
#[derive(Debug, Clone, Default)]
pub struct CapturePile {
    cards: Vec<Card>,
}

impl CapturePile {
    /// Creates a new empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Appends a single captured card.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Appends a batch of captured cards in order.
    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Returns the visible top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Removes and returns the top card.
    ///
    /// Used for opponent-pile augmentation; this is the only way a pile
    /// ever shrinks during live play.
    pub fn take_top(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the cards in the pile, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the pile contains a specific card.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Counts cards of the given suit.
    #[must_use]
    pub fn count_suit(&self, suit: Suit) -> usize {
        self.cards.iter().filter(|c| c.suit == suit).count()
    }

    /// Counts cards of the given rank.
    #[must_use]
    pub fn count_rank(&self, rank: u8) -> usize {
        self.cards.iter().filter(|c| c.rank == rank).count()
    }
}
