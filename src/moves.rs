//! Move representation.
//!
//! Every move kind is a variant of [`Move`]; the validator and the
//! resolution code match on it exhaustively so each kind has a defined
//! legality rule and a defined effect.

use alloc::vec::Vec;

use crate::card::Card;
use crate::floor::FloorId;

/// A proposed move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Move {
    /// Trail the played card onto the floor as a loose card.
    PlaceLoose {
        /// Card played from hand.
        card: Card,
    },
    /// Capture the targeted floor items with the played card.
    ///
    /// Targets may mix builds whose declared value equals the card's value
    /// with loose cards that group into sums of that value; everything
    /// targeted is captured in one move.
    Capture {
        /// Card played from hand.
        card: Card,
        /// Floor items to capture, in pile-append order.
        targets: Vec<FloorId>,
    },
    /// Create a build, or extend/stack one the player already owns.
    Build {
        /// Card played from hand into the build.
        card: Card,
        /// Loose floor cards folded into the build.
        targets: Vec<FloorId>,
        /// Declared value after the move.
        value: u8,
        /// `None` to create a new build; `Some(id)` to extend an own build.
        extends: Option<FloorId>,
    },
    /// Fold the top card of an opponent's face-up capture pile into an own
    /// build, raising its declared value by that card's value.
    ///
    /// This is the one move that plays no card from hand: the pile card is
    /// the only card that changes place. The actor must still hold the
    /// capturer of the raised value.
    AugmentFromPile {
        /// Seat whose pile is raided.
        opponent: u8,
        /// The actor's build to raise.
        build: FloorId,
    },
}

impl Move {
    /// The hand card this move would play, if any.
    #[must_use]
    pub const fn played_card(&self) -> Option<Card> {
        match self {
            Self::PlaceLoose { card }
            | Self::Capture { card, .. }
            | Self::Build { card, .. } => Some(*card),
            Self::AugmentFromPile { .. } => None,
        }
    }

    /// Returns whether this move is a capture.
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        matches!(self, Self::Capture { .. })
    }
}

/// What a successfully applied move did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The card was trailed; the new loose entry's handle.
    Placed(FloorId),
    /// Cards moved to the actor's capture pile, in pile order (played card
    /// last).
    Captured(Vec<Card>),
    /// A build was created or extended.
    Built {
        /// Handle of the build entry.
        build: FloorId,
        /// Declared value after the move.
        value: u8,
    },
    /// An opponent's pile card was folded into a build.
    Augmented {
        /// Handle of the build entry.
        build: FloorId,
        /// Declared value after the move.
        value: u8,
        /// The pile card that was consumed.
        card: Card,
    },
}
