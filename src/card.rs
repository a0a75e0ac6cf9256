//! Card types and deck utilities.

use alloc::vec::Vec;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

/// All four suits, in deck-construction order.
pub const SUITS: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but may yield non-standard results during play.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// The value this card carries in build and capture arithmetic.
    ///
    /// Aces count as 1, pip cards as their face value. Face cards carry no
    /// arithmetic value at all (they capture rank-for-rank only) and return
    /// `None`.
    #[must_use]
    pub const fn build_value(self) -> Option<u8> {
        match self.rank {
            1..=10 => Some(self.rank),
            _ => None,
        }
    }

    /// Returns whether this card is a Jack, Queen or King.
    #[must_use]
    pub const fn is_face(self) -> bool {
        self.rank >= 11
    }
}

/// The 2 of spades, worth bonus points at scoring ("Spy Two").
pub const SPY_TWO: Card = Card::new(Suit::Spades, 2);

/// The 10 of diamonds, worth bonus points at scoring ("Big Ten").
pub const BIG_TEN: Card = Card::new(Suit::Diamonds, 10);

/// Deck variant.
///
/// The South African game is traditionally played with 40 cards (face cards
/// removed); the 52-card deck keeps J/Q/K as rank-capture-only cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeckSize {
    /// 40 cards: Ace through 10 in each suit, no face cards.
    Forty,
    /// 52 cards: the full standard deck.
    #[default]
    FiftyTwo,
}

impl DeckSize {
    /// Number of cards in a deck of this size.
    #[must_use]
    pub const fn card_count(self) -> usize {
        match self {
            Self::Forty => 40,
            Self::FiftyTwo => 52,
        }
    }

    /// Highest rank present in a deck of this size.
    #[must_use]
    pub const fn max_rank(self) -> u8 {
        match self {
            Self::Forty => 10,
            Self::FiftyTwo => 13,
        }
    }
}

/// Builds an unshuffled deck in suit-major order.
#[must_use]
pub fn deck(size: DeckSize) -> Vec<Card> {
    let mut cards = Vec::with_capacity(size.card_count());

    for suit in SUITS {
        for rank in 1..=size.max_rank() {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}
