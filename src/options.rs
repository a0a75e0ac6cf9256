//! Game configuration options.

use crate::card::DeckSize;

/// How a tied majority award (most cards, most spades) is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum MajorityTie {
    /// Nobody scores the award.
    #[default]
    Nobody,
    /// The award is split evenly between the tied sides (integer division).
    Split,
}

/// Configuration options for a South African Casino game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use sacrs::{DeckSize, GameOptions};
///
/// let options = GameOptions::default()
///     .with_deck(DeckSize::Forty)
///     .with_players(3)
///     .with_strict_capture(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Deck variant (40 or 52 cards).
    pub deck: DeckSize,
    /// Number of seats (2, 3 or 4).
    pub players: u8,
    /// Cards dealt to each hand per deal.
    pub hand_size: u8,
    /// Whether the four seats play as two partnerships (0,2) vs (1,3).
    pub partnership: bool,
    /// Whether a player who can capture must capture.
    pub strict_capture: bool,
    /// Points awarded for capturing the 2 of spades.
    pub spy_two_points: u8,
    /// Tie handling for the most-cards and most-spades awards.
    pub majority_tie: MajorityTie,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            deck: DeckSize::FiftyTwo,
            players: 2,
            hand_size: 4,
            partnership: false,
            strict_capture: false,
            spy_two_points: 1,
            majority_tie: MajorityTie::Nobody,
        }
    }
}

impl GameOptions {
    /// Sets the deck variant.
    ///
    /// # Example
    ///
    /// ```
    /// use sacrs::{DeckSize, GameOptions};
    ///
    /// let options = GameOptions::default().with_deck(DeckSize::Forty);
    /// assert_eq!(options.deck, DeckSize::Forty);
    /// ```
    #[must_use]
    pub const fn with_deck(mut self, deck: DeckSize) -> Self {
        self.deck = deck;
        self
    }

    /// Sets the number of seats.
    ///
    /// # Example
    ///
    /// ```
    /// use sacrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_players(4);
    /// assert_eq!(options.players, 4);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: u8) -> Self {
        self.players = players;
        self
    }

    /// Sets the hand size dealt to each seat.
    ///
    /// The deck minus the four floor cards must divide evenly into hands of
    /// this size; [`Game::new`](crate::Game::new) rejects combinations that
    /// do not.
    ///
    /// # Example
    ///
    /// ```
    /// use sacrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(6);
    /// assert_eq!(options.hand_size, 6);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: u8) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets whether the game is played in partnerships.
    ///
    /// # Example
    ///
    /// ```
    /// use sacrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_players(4).with_partnership(true);
    /// assert!(options.partnership);
    /// ```
    #[must_use]
    pub const fn with_partnership(mut self, partnership: bool) -> Self {
        self.partnership = partnership;
        self
    }

    /// Sets whether a player who can capture must capture.
    ///
    /// # Example
    ///
    /// ```
    /// use sacrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_strict_capture(true);
    /// assert!(options.strict_capture);
    /// ```
    #[must_use]
    pub const fn with_strict_capture(mut self, strict: bool) -> Self {
        self.strict_capture = strict;
        self
    }

    /// Sets the points awarded for the 2 of spades.
    ///
    /// # Example
    ///
    /// ```
    /// use sacrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_spy_two_points(2);
    /// assert_eq!(options.spy_two_points, 2);
    /// ```
    #[must_use]
    pub const fn with_spy_two_points(mut self, points: u8) -> Self {
        self.spy_two_points = points;
        self
    }

    /// Sets the tie handling for the majority awards.
    ///
    /// # Example
    ///
    /// ```
    /// use sacrs::{GameOptions, MajorityTie};
    ///
    /// let options = GameOptions::default().with_majority_tie(MajorityTie::Split);
    /// assert_eq!(options.majority_tie, MajorityTie::Split);
    /// ```
    #[must_use]
    pub const fn with_majority_tie(mut self, tie: MajorityTie) -> Self {
        self.majority_tie = tie;
        self
    }

    /// Returns whether two seats are partners under these options.
    #[must_use]
    pub const fn are_partners(&self, a: u8, b: u8) -> bool {
        self.partnership && a != b && a % 2 == b % 2
    }
}
