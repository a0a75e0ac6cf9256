//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while setting up a game.
///
/// These are configuration errors: they are surfaced before any game starts
/// and never mid-round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Player count is not 2, 3 or 4.
    #[error("player count must be 2, 3 or 4")]
    UnsupportedPlayerCount,
    /// Partnership play requires exactly four players.
    #[error("partnership play requires four players")]
    PartnershipRequiresFourPlayers,
    /// Hand size is zero.
    #[error("hand size is zero")]
    ZeroHandSize,
    /// The deck cannot be dealt evenly into floor plus whole hands.
    #[error("deck does not divide into a floor of four plus whole hands")]
    UnevenDeal,
}

/// Rejection reasons for a proposed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The round is not awaiting a move.
    #[error("the round is not awaiting a move")]
    InvalidState,
    /// It is not this player's turn.
    #[error("not this player's turn")]
    WrongTurn,
    /// The played card is not in the player's hand.
    #[error("played card is not in hand")]
    NotInHand,
    /// A targeted floor item does not exist.
    #[error("no matching floor item")]
    NoMatchingFloorItem,
    /// The target values do not work out against the played card.
    #[error("target values do not match the played card")]
    ValueMismatch,
    /// A face card was used in build arithmetic.
    #[error("face cards cannot take part in builds")]
    FaceCardInBuild,
    /// The builder would hold no card able to capture the declared value.
    #[error("no card in hand could ever capture this build")]
    HangingBuild,
    /// Only the owner of a build may extend it.
    #[error("not the owner of this build")]
    NotBuildOwner,
    /// The targeted build was already captured by an opponent.
    #[error("this build has already been captured")]
    BuildAlreadyCapturedFrom,
    /// The opponent's capture pile cannot be used this way.
    #[error("invalid access to an opponent's capture pile")]
    InvalidOpponentPileAccess,
    /// A capture is available and strict-capture mode is on.
    #[error("a capture is available and must be taken")]
    CaptureRequired,
}

/// Errors that can occur during the end-of-round sweep and scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SweepError {
    /// The round is not over (or was already scored).
    #[error("invalid game state for sweeping and scoring")]
    InvalidState,
}
