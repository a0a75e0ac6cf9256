use alloc::vec;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::MoveError;
use crate::floor::{Build, FloorId, FloorItem};
use crate::moves::{Move, MoveOutcome};

use super::{Game, GamePhase};

impl Game {
    /// Checks a proposed move against the current state without applying
    /// it.
    ///
    /// # Errors
    ///
    /// Returns the specific rejection: wrong phase or turn, a played card
    /// not in hand, missing or mismatched floor targets, a hanging build,
    /// ownership and pile-access violations, or a declined capture under
    /// strict-capture rules.
    pub fn validate(&self, seat: u8, proposed: &Move) -> Result<(), MoveError> {
        if self.phase() != GamePhase::AwaitingMove {
            return Err(MoveError::InvalidState);
        }
        if seat >= self.seats() || seat != self.turn_seat() {
            return Err(MoveError::WrongTurn);
        }

        if let Some(card) = proposed.played_card() {
            if !self.hands[usize::from(seat)].contains(card) {
                return Err(MoveError::NotInHand);
            }
        }

        // Strict-capture mode: declining an available capture is illegal.
        if !proposed.is_capture()
            && self.options.strict_capture
            && self.capture_available(seat)
        {
            return Err(MoveError::CaptureRequired);
        }

        match proposed {
            Move::PlaceLoose { .. } => Ok(()),
            Move::Capture { card, targets } => self.validate_capture(*card, targets),
            Move::Build {
                card,
                targets,
                value,
                extends,
            } => self.validate_build(seat, *card, targets, *value, *extends),
            Move::AugmentFromPile { opponent, build } => {
                self.validate_augment(seat, *opponent, *build)
            }
        }
    }

    /// Validates and applies a move in one atomic step.
    ///
    /// Nothing is mutated unless the whole move is legal, so the
    /// irreversible parts (an opponent's pile losing its top card) only
    /// ever happen for fully validated moves.
    ///
    /// # Errors
    ///
    /// Returns the same rejections as [`Game::validate`].
    pub fn play(&mut self, seat: u8, proposed: &Move) -> Result<MoveOutcome, MoveError> {
        self.validate(seat, proposed)?;
        let outcome = self.apply_validated(seat, proposed);
        self.advance_after_move();
        Ok(outcome)
    }

    fn validate_capture(&self, card: Card, targets: &[FloorId]) -> Result<(), MoveError> {
        if targets.is_empty() {
            return Err(MoveError::NoMatchingFloorItem);
        }
        if has_duplicates(targets) {
            return Err(MoveError::NoMatchingFloorItem);
        }

        let mut loose_values: Vec<u8> = Vec::new();
        for &id in targets {
            match self.floor.get(id) {
                Some(FloorItem::Loose(target)) => {
                    if card.is_face() {
                        // Face cards capture rank-for-rank only.
                        if target.rank != card.rank {
                            return Err(MoveError::ValueMismatch);
                        }
                    } else {
                        match target.build_value() {
                            Some(v) => loose_values.push(v),
                            None => return Err(MoveError::ValueMismatch),
                        }
                    }
                }
                Some(FloorItem::Build(build)) => {
                    let Some(value) = card.build_value() else {
                        return Err(MoveError::ValueMismatch);
                    };
                    if build.value != value {
                        return Err(MoveError::ValueMismatch);
                    }
                }
                None => return Err(self.missing_target_error(id)),
            }
        }

        if !loose_values.is_empty() {
            let value = card
                .build_value()
                .expect("loose values are only collected for pip cards");
            if !groups_into(&loose_values, value) {
                return Err(MoveError::ValueMismatch);
            }
        }

        Ok(())
    }

    fn validate_build(
        &self,
        seat: u8,
        card: Card,
        targets: &[FloorId],
        value: u8,
        extends: Option<FloorId>,
    ) -> Result<(), MoveError> {
        let Some(card_value) = card.build_value() else {
            return Err(MoveError::FaceCardInBuild);
        };
        if has_duplicates(targets) {
            return Err(MoveError::NoMatchingFloorItem);
        }

        let mut target_sum: u8 = 0;
        for &id in targets {
            match self.floor.get(id) {
                Some(FloorItem::Loose(target)) => match target.build_value() {
                    Some(v) => target_sum = target_sum.saturating_add(v),
                    None => return Err(MoveError::FaceCardInBuild),
                },
                // Whole builds cannot be folded into another build.
                Some(FloorItem::Build(_)) => return Err(MoveError::ValueMismatch),
                None => return Err(self.missing_target_error(id)),
            }
        }

        match extends {
            None => {
                // A fresh build needs at least one floor card under it.
                if targets.is_empty() {
                    return Err(MoveError::NoMatchingFloorItem);
                }
                if value != card_value.saturating_add(target_sum) {
                    return Err(MoveError::ValueMismatch);
                }
            }
            Some(id) => {
                let build = self.existing_build(id)?;
                if build.owner != seat {
                    return Err(MoveError::NotBuildOwner);
                }

                let group = card_value.saturating_add(target_sum);
                let stacking = group == build.value && value == build.value;
                let raising = !build.is_multiple && value == build.value.saturating_add(group);
                if !stacking && !raising {
                    return Err(MoveError::ValueMismatch);
                }
            }
        }

        if !self.hands[usize::from(seat)].holds_capturer(value, Some(card)) {
            return Err(MoveError::HangingBuild);
        }

        Ok(())
    }

    fn validate_augment(&self, seat: u8, opponent: u8, build: FloorId) -> Result<(), MoveError> {
        if opponent >= self.seats()
            || opponent == seat
            || self.options.are_partners(seat, opponent)
        {
            return Err(MoveError::InvalidOpponentPileAccess);
        }

        let target = self.existing_build(build)?;
        if target.owner != seat {
            return Err(MoveError::NotBuildOwner);
        }
        if target.is_multiple {
            // A multiple build's value is fixed; it cannot be raised.
            return Err(MoveError::ValueMismatch);
        }

        let Some(top) = self.piles[usize::from(opponent)].top() else {
            return Err(MoveError::InvalidOpponentPileAccess);
        };
        let Some(top_value) = top.build_value() else {
            return Err(MoveError::FaceCardInBuild);
        };

        let new_value = target.value.saturating_add(top_value);
        if !self.hands[usize::from(seat)].holds_capturer(new_value, None) {
            return Err(MoveError::HangingBuild);
        }

        Ok(())
    }

    fn existing_build(&self, id: FloorId) -> Result<&Build, MoveError> {
        match self.floor.get(id) {
            Some(FloorItem::Build(build)) => Ok(build),
            Some(FloorItem::Loose(_)) => Err(MoveError::NoMatchingFloorItem),
            None => Err(self.missing_target_error(id)),
        }
    }

    fn missing_target_error(&self, id: FloorId) -> MoveError {
        if self.floor.was_build_captured(id) {
            MoveError::BuildAlreadyCapturedFrom
        } else {
            MoveError::NoMatchingFloorItem
        }
    }

    /// Applies a move that has already passed [`Game::validate`].
    ///
    /// Calling this with an unvalidated move is a programmer error; the
    /// internal expects are guaranteed to succeed for validated moves.
    fn apply_validated(&mut self, seat: u8, validated: &Move) -> MoveOutcome {
        match validated {
            Move::PlaceLoose { card } => {
                self.hands[usize::from(seat)].remove(*card);
                MoveOutcome::Placed(self.floor.place_loose(*card))
            }
            Move::Capture { card, targets } => {
                self.hands[usize::from(seat)].remove(*card);

                let mut captured = Vec::with_capacity(targets.len() + 1);
                for &id in targets {
                    match self.floor.remove(id).expect("target validated above") {
                        FloorItem::Loose(loose) => captured.push(loose),
                        FloorItem::Build(build) => {
                            self.floor.retire_build(id);
                            captured.extend(build.cards);
                        }
                    }
                }
                captured.push(*card);

                self.piles[usize::from(seat)].extend(captured.iter().copied());
                self.set_last_capture(seat);
                MoveOutcome::Captured(captured)
            }
            Move::Build {
                card,
                targets,
                value,
                extends,
            } => {
                self.hands[usize::from(seat)].remove(*card);

                let mut folded: Vec<Card> = targets
                    .iter()
                    .map(|&id| match self.floor.remove(id) {
                        Some(FloorItem::Loose(loose)) => loose,
                        _ => unreachable!("targets validated as loose cards"),
                    })
                    .collect();
                folded.push(*card);

                match *extends {
                    None => {
                        let id = self.floor.place_build(Build {
                            value: *value,
                            owner: seat,
                            cards: folded,
                            is_multiple: false,
                        });
                        MoveOutcome::Built {
                            build: id,
                            value: *value,
                        }
                    }
                    Some(id) => {
                        let build = self
                            .floor
                            .get_build_mut(id)
                            .expect("build validated above");
                        let stacked = *value == build.value;
                        build.cards.extend(folded);
                        build.value = *value;
                        if stacked {
                            build.is_multiple = true;
                        }
                        MoveOutcome::Built {
                            build: id,
                            value: *value,
                        }
                    }
                }
            }
            Move::AugmentFromPile { opponent, build } => {
                let top = self.piles[usize::from(*opponent)]
                    .take_top()
                    .expect("pile validated as non-empty");
                let top_value = top
                    .build_value()
                    .expect("pile top validated as a pip card");

                let target = self
                    .floor
                    .get_build_mut(*build)
                    .expect("build validated above");
                target.cards.push(top);
                target.value += top_value;

                MoveOutcome::Augmented {
                    build: *build,
                    value: target.value,
                    card: top,
                }
            }
        }
    }
}

fn has_duplicates(ids: &[FloorId]) -> bool {
    ids.iter()
        .enumerate()
        .any(|(i, id)| ids[i + 1..].contains(id))
}

/// Returns whether `values` can be split into disjoint groups that each
/// sum exactly to `target`.
///
/// A single card equal to the target, a multi-card sum, and several
/// same-valued groups captured at once are all the same question.
fn groups_into(values: &[u8], target: u8) -> bool {
    if values.is_empty() || target == 0 {
        return false;
    }
    let total: u32 = values.iter().map(|&v| u32::from(v)).sum();
    if total % u32::from(target) != 0 {
        return false;
    }
    if values.iter().any(|&v| v > target) {
        return false;
    }

    let mut used = vec![false; values.len()];
    fill_groups(values, &mut used, target, target)
}

fn fill_groups(values: &[u8], used: &mut [bool], target: u8, remaining: u8) -> bool {
    if remaining == 0 {
        return fill_groups(values, used, target, target);
    }

    let fresh = remaining == target;
    let Some(first) = used.iter().position(|&u| !u) else {
        return fresh;
    };

    if fresh {
        // Anchor each new group at the first unused value so permutations
        // of the same grouping are not retried.
        if values[first] > remaining {
            return false;
        }
        used[first] = true;
        let ok = fill_groups(values, used, target, remaining - values[first]);
        used[first] = false;
        return ok;
    }

    for i in first..values.len() {
        if used[i] || values[i] > remaining {
            continue;
        }
        used[i] = true;
        if fill_groups(values, used, target, remaining - values[i]) {
            used[i] = false;
            return true;
        }
        used[i] = false;
    }

    false
}
