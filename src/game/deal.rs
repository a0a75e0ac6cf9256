use super::{FLOOR_CUT, Game};

impl Game {
    /// Deals `hand_size` cards to every seat, round-robin off the top of
    /// the deck.
    ///
    /// The even-deal check in [`Game::new`] guarantees the deck never runs
    /// short here.
    pub(super) fn deal_hands(&mut self) {
        for _ in 0..self.options.hand_size {
            for seat in 0..usize::from(self.options.players) {
                let card = self.deck.pop().expect("even-deal check guarantees cards");
                self.hands[seat].add_card(card);
            }
        }
    }

    /// Cuts four cards from the middle of the remaining deck onto the
    /// floor as the initial layout.
    ///
    /// The cut comes from the middle index range of the deck, never its
    /// top.
    pub(super) fn cut_floor(&mut self) {
        let middle = self.deck.len() / 2;
        let start = middle.saturating_sub(FLOOR_CUT / 2);

        for card in self.deck.drain(start..start + FLOOR_CUT) {
            self.floor.place_loose(card);
        }
    }

    /// Deals fresh hands once every hand is empty.
    ///
    /// The floor persists between deals; no new floor cards are cut.
    pub(super) fn redeal(&mut self) {
        self.deal_hands();
    }
}
