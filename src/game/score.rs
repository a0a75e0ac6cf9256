use alloc::vec;
use alloc::vec::Vec;

use crate::card::{BIG_TEN, SPY_TWO, Suit};
use crate::error::SweepError;
use crate::options::MajorityTie;
use crate::result::{RoundScore, ScoreSide, SideScore};

use super::{Game, GamePhase};

/// Points for holding the most captured cards.
const MOST_CARDS_POINTS: u8 = 3;
/// Points for holding the most captured spades.
const MOST_SPADES_POINTS: u8 = 1;
/// Points for capturing the 10 of diamonds.
const BIG_TEN_POINTS: u8 = 2;

impl Game {
    /// Performs the end-of-round sweep and scores the round.
    ///
    /// The seat credited with the last capture sweeps every remaining
    /// floor item, loose cards and build constituents alike, into its
    /// pile; then each side's pile is tallied. The phase moves to
    /// [`GamePhase::Complete`], so this runs exactly once per round.
    ///
    /// # Errors
    ///
    /// Returns an error unless the round is over and not yet scored.
    pub fn sweep_and_score(&mut self) -> Result<RoundScore, SweepError> {
        if self.phase() != GamePhase::RoundOver {
            return Err(SweepError::InvalidState);
        }

        let swept_by = self.last_capturer();
        let mut swept_cards = 0;
        if let Some(seat) = swept_by {
            let remainder = self.floor.take_all();
            swept_cards = remainder.len();
            self.piles[usize::from(seat)].extend(remainder);
        }

        let mut score = self.tally();
        score.swept_by = swept_by;
        score.swept_cards = swept_cards;

        self.set_phase(GamePhase::Complete);
        Ok(score)
    }

    /// Tallies the frozen capture piles into per-side scores.
    fn tally(&self) -> RoundScore {
        let sides: Vec<(ScoreSide, Vec<u8>)> = if self.options.partnership {
            vec![
                (ScoreSide::Team(0), vec![0, 2]),
                (ScoreSide::Team(1), vec![1, 3]),
            ]
        } else {
            (0..self.seats())
                .map(|seat| (ScoreSide::Player(seat), vec![seat]))
                .collect()
        };

        let mut breakdowns: Vec<SideScore> = sides
            .into_iter()
            .map(|(side, seats)| {
                let piles = seats.iter().map(|&s| &self.piles[usize::from(s)]);

                let mut cards_captured = 0;
                let mut spades_captured = 0;
                let mut aces = 0;
                let mut spy_two = false;
                let mut big_ten = false;
                for pile in piles {
                    cards_captured += pile.len();
                    spades_captured += pile.count_suit(Suit::Spades);
                    aces += pile.count_rank(1) as u8;
                    spy_two |= pile.contains(SPY_TWO);
                    big_ten |= pile.contains(BIG_TEN);
                }

                let mut points = aces;
                if spy_two {
                    points += self.options.spy_two_points;
                }
                if big_ten {
                    points += BIG_TEN_POINTS;
                }

                SideScore {
                    side,
                    seats,
                    cards_captured,
                    spades_captured,
                    aces,
                    spy_two,
                    big_ten,
                    most_cards_points: 0,
                    most_spades_points: 0,
                    points,
                }
            })
            .collect();

        award_majority(
            &mut breakdowns,
            |s| s.cards_captured,
            MOST_CARDS_POINTS,
            self.options.majority_tie,
            |s, p| s.most_cards_points = p,
        );
        award_majority(
            &mut breakdowns,
            |s| s.spades_captured,
            MOST_SPADES_POINTS,
            self.options.majority_tie,
            |s, p| s.most_spades_points = p,
        );

        for side in &mut breakdowns {
            side.points += side.most_cards_points + side.most_spades_points;
        }

        RoundScore {
            sides: breakdowns,
            swept_by: None,
            swept_cards: 0,
        }
    }
}

/// Awards a majority bonus to the side(s) with the highest count.
///
/// A side with nothing captured never wins a majority. Ties score nothing
/// or split the award evenly, per the configured tie rule.
fn award_majority(
    sides: &mut [SideScore],
    count: impl Fn(&SideScore) -> usize,
    points: u8,
    tie: MajorityTie,
    set: impl Fn(&mut SideScore, u8),
) {
    let Some(max) = sides.iter().map(&count).max() else {
        return;
    };
    if max == 0 {
        return;
    }

    let winners = sides.iter().filter(|s| count(s) == max).count();
    let share = if winners == 1 {
        points
    } else {
        match tie {
            MajorityTie::Nobody => 0,
            MajorityTie::Split => points / winners as u8,
        }
    };

    if share > 0 {
        for side in sides.iter_mut().filter(|s| count(s) == max) {
            set(side, share);
        }
    }
}
