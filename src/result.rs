//! Round scoring result types.

use alloc::vec::Vec;

/// A scoring side: a single seat, or a partnership of two seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreSide {
    /// A single seat.
    Player(u8),
    /// A partnership (0 = seats 0 and 2, 1 = seats 1 and 3).
    Team(u8),
}

/// Score breakdown for one side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideScore {
    /// The side this breakdown belongs to.
    pub side: ScoreSide,
    /// Seats contributing to this side.
    pub seats: Vec<u8>,
    /// Total cards captured.
    pub cards_captured: usize,
    /// Spades captured.
    pub spades_captured: usize,
    /// Aces captured.
    pub aces: u8,
    /// Whether the side captured the 2 of spades.
    pub spy_two: bool,
    /// Whether the side captured the 10 of diamonds.
    pub big_ten: bool,
    /// Points from the most-cards award.
    pub most_cards_points: u8,
    /// Points from the most-spades award.
    pub most_spades_points: u8,
    /// Total points for the round.
    pub points: u8,
}

/// Result of scoring a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundScore {
    /// Per-side breakdowns, in seat/team order.
    pub sides: Vec<SideScore>,
    /// Seat that performed the final sweep, if any capture happened at all.
    pub swept_by: Option<u8>,
    /// Number of cards taken by the final sweep.
    pub swept_cards: usize,
}

impl RoundScore {
    /// Points for a given seat (its own side's total in solo play, the
    /// team total in partnership play).
    #[must_use]
    pub fn points_for_seat(&self, seat: u8) -> u8 {
        self.sides
            .iter()
            .find(|s| s.seats.contains(&seat))
            .map_or(0, |s| s.points)
    }
}
