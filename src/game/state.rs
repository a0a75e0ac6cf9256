//! Game phase types.

/// Phase of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the turn seat to submit a move.
    AwaitingMove,
    /// Deck and hands are exhausted; the final sweep and scoring may run.
    RoundOver,
    /// The round has been swept and scored.
    Complete,
}
