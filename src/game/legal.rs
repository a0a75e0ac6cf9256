use alloc::vec::Vec;

use crate::card::Card;
use crate::floor::FloorId;
use crate::moves::Move;

use super::{Game, GamePhase};

/// Highest value a build can be declared at and still be captured by a
/// single pip card.
const MAX_BUILD_VALUE: u8 = 10;

impl Game {
    /// Enumerates the moves the given seat could legally submit right now.
    ///
    /// Returns an empty list unless it is that seat's turn. Every returned
    /// move passes [`Game::validate`], and every capture the validator
    /// would accept is present: each set of value-matching builds combined
    /// with each union of disjoint sum-groups of loose cards. Calling this
    /// twice without an intervening [`Game::play`] yields identical
    /// results.
    #[must_use]
    pub fn legal_moves(&self, seat: u8) -> Vec<Move> {
        if self.phase() != GamePhase::AwaitingMove
            || seat >= self.seats()
            || seat != self.turn_seat()
        {
            return Vec::new();
        }

        let mut moves = Vec::new();
        let hand = &self.hands[usize::from(seat)];

        for &card in hand.cards() {
            self.captures_with(card, &mut moves);
            self.builds_with(seat, card, &mut moves);
            moves.push(Move::PlaceLoose { card });
        }

        self.augments_for(seat, &mut moves);

        if self.options.strict_capture && moves.iter().any(Move::is_capture) {
            moves.retain(Move::is_capture);
        }

        moves
    }

    /// Returns whether any capture at all is open to the seat.
    pub(super) fn capture_available(&self, seat: u8) -> bool {
        self.hands[usize::from(seat)]
            .cards()
            .iter()
            .any(|&card| self.card_can_capture(card))
    }

    fn card_can_capture(&self, card: Card) -> bool {
        match card.build_value() {
            None => self
                .floor
                .loose_cards()
                .any(|(_, loose)| loose.rank == card.rank),
            Some(value) => {
                self.floor.builds().any(|(_, b)| b.value == value)
                    || !subsets_summing(&self.pip_loose(), value).is_empty()
            }
        }
    }

    fn captures_with(&self, card: Card, moves: &mut Vec<Move>) {
        let Some(value) = card.build_value() else {
            // Face cards capture rank-for-rank; any set of rank matches can
            // be taken at once.
            let matching: Vec<FloorId> = self
                .floor
                .loose_cards()
                .filter(|&(_, loose)| loose.rank == card.rank)
                .map(|(id, _)| id)
                .collect();
            let combos = 1usize << matching.len();
            for mask in 1..combos {
                moves.push(Move::Capture {
                    card,
                    targets: pick(&matching, mask),
                });
            }
            return;
        };

        let builds: Vec<FloorId> = self
            .floor
            .builds()
            .filter(|&(_, build)| build.value == value)
            .map(|(id, _)| id)
            .collect();
        let unions = group_unions(&self.pip_loose(), value);

        // Every non-empty combination of matching builds and one union of
        // disjoint sum-groups, mirroring what the validator accepts.
        let combos = 1usize << builds.len();
        for mask in 0..combos {
            let chosen = pick(&builds, mask);
            if !chosen.is_empty() {
                moves.push(Move::Capture {
                    card,
                    targets: chosen.clone(),
                });
            }
            for union in &unions {
                let mut targets = chosen.clone();
                targets.extend(union.iter().copied());
                moves.push(Move::Capture { card, targets });
            }
        }
    }

    fn builds_with(&self, seat: u8, card: Card, moves: &mut Vec<Move>) {
        let Some(card_value) = card.build_value() else {
            return;
        };
        let hand = &self.hands[usize::from(seat)];
        let pip_loose = self.pip_loose();

        // Fresh builds: played card plus at least one loose card.
        for (subset, sum) in subsets_bounded(&pip_loose, MAX_BUILD_VALUE - card_value) {
            let value = card_value + sum;
            if hand.holds_capturer(value, Some(card)) {
                moves.push(Move::Build {
                    card,
                    targets: subset,
                    value,
                    extends: None,
                });
            }
        }

        for (id, build) in self.floor.builds() {
            if build.owner != seat {
                continue;
            }

            // Raising an own simple build, with or without extra loose cards.
            if !build.is_multiple {
                let raised = build.value.saturating_add(card_value);
                if raised <= MAX_BUILD_VALUE {
                    let headroom = MAX_BUILD_VALUE - raised;
                    for (subset, sum) in subsets_bounded_or_empty(&pip_loose, headroom) {
                        let value = raised + sum;
                        if hand.holds_capturer(value, Some(card)) {
                            moves.push(Move::Build {
                                card,
                                targets: subset,
                                value,
                                extends: Some(id),
                            });
                        }
                    }
                }
            }

            // Stacking another group of the same value onto an own build.
            if hand.holds_capturer(build.value, Some(card)) {
                if card_value == build.value {
                    moves.push(Move::Build {
                        card,
                        targets: Vec::new(),
                        value: build.value,
                        extends: Some(id),
                    });
                }
                if card_value < build.value {
                    for subset in subsets_summing(&pip_loose, build.value - card_value) {
                        moves.push(Move::Build {
                            card,
                            targets: subset,
                            value: build.value,
                            extends: Some(id),
                        });
                    }
                }
            }
        }
    }

    fn augments_for(&self, seat: u8, moves: &mut Vec<Move>) {
        let hand = &self.hands[usize::from(seat)];

        for (id, build) in self.floor.builds() {
            if build.owner != seat || build.is_multiple {
                continue;
            }
            for opponent in 0..self.seats() {
                if opponent == seat || self.options.are_partners(seat, opponent) {
                    continue;
                }
                let Some(top) = self.piles[usize::from(opponent)].top() else {
                    continue;
                };
                let Some(top_value) = top.build_value() else {
                    continue;
                };
                if hand.holds_capturer(build.value.saturating_add(top_value), None) {
                    moves.push(Move::AugmentFromPile {
                        opponent,
                        build: id,
                    });
                }
            }
        }
    }

    /// The loose pip cards on the floor, as `(handle, value)` pairs.
    fn pip_loose(&self) -> Vec<(FloorId, u8)> {
        self.floor
            .loose_cards()
            .filter_map(|(id, card)| card.build_value().map(|v| (id, v)))
            .collect()
    }
}

/// The elements of `ids` selected by the bits of `mask`.
fn pick(ids: &[FloorId], mask: usize) -> Vec<FloorId> {
    ids.iter()
        .enumerate()
        .filter(|&(i, _)| mask & (1 << i) != 0)
        .map(|(_, &id)| id)
        .collect()
}

/// Non-empty unions of pairwise-disjoint groups of loose cards, each group
/// summing exactly to `target`.
///
/// These are exactly the loose-card target sets a capture can take: one
/// group is a plain sum capture, several disjoint groups fall together in
/// one move.
fn group_unions(cards: &[(FloorId, u8)], target: u8) -> Vec<Vec<FloorId>> {
    let groups = subsets_summing(cards, target);
    let mut out = Vec::new();
    let mut seen: Vec<Vec<u32>> = Vec::new();
    let mut current = Vec::new();
    unite_groups(&groups, 0, &mut current, &mut seen, &mut out);
    out
}

fn unite_groups(
    groups: &[Vec<FloorId>],
    from: usize,
    current: &mut Vec<FloorId>,
    seen: &mut Vec<Vec<u32>>,
    out: &mut Vec<Vec<FloorId>>,
) {
    for i in from..groups.len() {
        if groups[i].iter().any(|id| current.contains(id)) {
            continue;
        }
        let len = current.len();
        current.extend(groups[i].iter().copied());

        // Distinct partitions can build the same union; keep one copy.
        let mut key: Vec<u32> = current.iter().map(|id| id.raw()).collect();
        key.sort_unstable();
        if !seen.contains(&key) {
            seen.push(key);
            out.push(current.clone());
        }

        unite_groups(groups, i + 1, current, seen, out);
        current.truncate(len);
    }
}

/// Non-empty subsets of `cards` whose values sum exactly to `target`.
fn subsets_summing(cards: &[(FloorId, u8)], target: u8) -> Vec<Vec<FloorId>> {
    let mut out = Vec::new();
    let mut current = Vec::new();
    collect_subsets(cards, 0, target, &mut current, &mut out);
    out
}

/// Non-empty subsets of `cards` whose values sum to at most `cap`,
/// together with their sums.
fn subsets_bounded(cards: &[(FloorId, u8)], cap: u8) -> Vec<(Vec<FloorId>, u8)> {
    let mut out = Vec::new();
    for target in 1..=cap {
        for subset in subsets_summing(cards, target) {
            out.push((subset, target));
        }
    }
    out
}

/// Like [`subsets_bounded`], but also yields the empty subset.
fn subsets_bounded_or_empty(cards: &[(FloorId, u8)], cap: u8) -> Vec<(Vec<FloorId>, u8)> {
    let mut out = alloc::vec![(Vec::new(), 0)];
    out.extend(subsets_bounded(cards, cap));
    out
}

fn collect_subsets(
    cards: &[(FloorId, u8)],
    from: usize,
    remaining: u8,
    current: &mut Vec<FloorId>,
    out: &mut Vec<Vec<FloorId>>,
) {
    if remaining == 0 {
        out.push(current.clone());
        return;
    }
    for i in from..cards.len() {
        let (id, value) = cards[i];
        if value > remaining {
            continue;
        }
        current.push(id);
        collect_subsets(cards, i + 1, remaining - value, current, out);
        current.pop();
    }
}
