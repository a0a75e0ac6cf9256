//! Game engine and round flow.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{self, Card};
use crate::error::SetupError;
use crate::floor::Floor;
use crate::hand::{CapturePile, Hand};
use crate::options::GameOptions;

mod deal;
mod legal;
mod moves;
mod score;
pub mod state;

pub use state::GamePhase;

/// Number of cards cut from the middle of the deck for the initial floor.
pub const FLOOR_CUT: usize = 4;

/// A South African Casino game engine for a single round.
///
/// The game owns the undealt deck, each seat's hand and face-up capture
/// pile, and the shared floor. All mutation goes through `&mut self`; a
/// caller that aborts between moves leaves no partial state behind. Use
/// [`GameOptions`] to configure deck size, seat count, partnership play and
/// scoring variants.
#[derive(Debug)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Undealt cards (top of the deck at the end).
    pub deck: Vec<Card>,
    /// One hand per seat.
    pub hands: Vec<Hand>,
    /// One face-up capture pile per seat.
    pub piles: Vec<CapturePile>,
    /// The shared floor.
    pub floor: Floor,
    phase: GamePhase,
    turn: u8,
    last_capture: Option<u8>,
}

impl Game {
    /// Creates a new game, shuffles with the given seed, and deals the
    /// first hands and the middle-cut floor.
    ///
    /// # Example
    ///
    /// ```
    /// use sacrs::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.current_player(), Some(0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the options are unplayable: unsupported seat
    /// count, partnership without four seats, a zero hand size, or a deck
    /// that does not divide into a floor of four plus whole hands.
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, SetupError> {
        if !(2..=4).contains(&options.players) {
            return Err(SetupError::UnsupportedPlayerCount);
        }
        if options.partnership && options.players != 4 {
            return Err(SetupError::PartnershipRequiresFourPlayers);
        }
        if options.hand_size == 0 {
            return Err(SetupError::ZeroHandSize);
        }

        let per_deal = usize::from(options.players) * usize::from(options.hand_size);
        if (options.deck.card_count() - FLOOR_CUT) % per_deal != 0 {
            return Err(SetupError::UnevenDeal);
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = card::deck(options.deck);
        deck.shuffle(&mut rng);

        let seats = usize::from(options.players);
        let mut game = Self {
            options,
            deck,
            hands: (0..seats).map(|_| Hand::new()).collect(),
            piles: (0..seats).map(|_| CapturePile::new()).collect(),
            floor: Floor::new(),
            phase: GamePhase::AwaitingMove,
            turn: 0,
            last_capture: None,
        };

        game.deal_hands();
        game.cut_floor();

        Ok(game)
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns the seat whose move is awaited, or `None` once the round is
    /// over.
    #[must_use]
    pub const fn current_player(&self) -> Option<u8> {
        match self.phase {
            GamePhase::AwaitingMove => Some(self.turn),
            GamePhase::RoundOver | GamePhase::Complete => None,
        }
    }

    /// Returns the seat credited with the most recent capture.
    #[must_use]
    pub const fn last_capturer(&self) -> Option<u8> {
        self.last_capture
    }

    /// Returns whether the round is over (deck and all hands exhausted).
    #[must_use]
    pub fn is_round_over(&self) -> bool {
        !matches!(self.phase, GamePhase::AwaitingMove)
    }

    /// Returns a seat's hand.
    #[must_use]
    pub fn hand(&self, seat: u8) -> Option<&Hand> {
        self.hands.get(usize::from(seat))
    }

    /// Returns a seat's capture pile.
    #[must_use]
    pub fn pile(&self, seat: u8) -> Option<&CapturePile> {
        self.piles.get(usize::from(seat))
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn deck_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Total cards across deck, hands, piles and floor.
    ///
    /// Stays equal to the deck size for the lifetime of a round; useful
    /// for auditing card conservation.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len()
            + self.hands.iter().map(Hand::len).sum::<usize>()
            + self.piles.iter().map(CapturePile::len).sum::<usize>()
            + self.floor.card_count()
    }

    pub(crate) fn seats(&self) -> u8 {
        self.options.players
    }

    pub(crate) fn set_last_capture(&mut self, seat: u8) {
        self.last_capture = Some(seat);
    }

    pub(crate) const fn turn_seat(&self) -> u8 {
        self.turn
    }

    pub(crate) fn set_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
    }

    /// Advances the turn after an applied move.
    ///
    /// Seats left with empty hands are skipped (augmentation plays no
    /// card, so hands can run down unevenly). When every hand is empty the
    /// round either redeals or ends.
    pub(crate) fn advance_after_move(&mut self) {
        if self.hands.iter().all(Hand::is_empty) {
            if self.deck.is_empty() {
                self.phase = GamePhase::RoundOver;
                return;
            }
            self.redeal();
        }

        let seats = usize::from(self.seats());
        for step in 1..=seats {
            let next = (usize::from(self.turn) + step) % seats;
            if !self.hands[next].is_empty() {
                self.turn = next as u8;
                return;
            }
        }
    }
}
