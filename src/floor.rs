//! The shared floor: loose cards and builds.
//!
//! Floor items live in a flat arena and are addressed by opaque [`FloorId`]
//! handles. A build references its constituent cards by value inside its own
//! entry, so there are no nested ownership links to cycle through, and the
//! card-conservation check is a straight walk over the entries.

use alloc::vec::Vec;

use crate::card::Card;

/// Opaque handle to a floor entry.
///
/// Handles are never reused within a round, so a handle that once named a
/// build keeps identifying it after the build is captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FloorId(u32);

impl FloorId {
    /// Returns the raw handle value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// A build on the floor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Build {
    /// The single declared value this build can be captured at.
    pub value: u8,
    /// Seat of the player entitled to capture the build.
    pub owner: u8,
    /// Constituent cards, in the order they were folded in.
    pub cards: Vec<Card>,
    /// Whether this is a multiple build (stacked same-value groups).
    pub is_multiple: bool,
}

/// A single floor entry: a loose card or a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FloorItem {
    /// A loose card, capturable on its own.
    Loose(Card),
    /// A build.
    Build(Build),
}

impl FloorItem {
    /// Number of physical cards in this entry.
    #[must_use]
    pub fn card_count(&self) -> usize {
        match self {
            Self::Loose(_) => 1,
            Self::Build(build) => build.cards.len(),
        }
    }
}

#[derive(Debug, Clone)]
struct FloorEntry {
    id: FloorId,
    item: FloorItem,
}

/// The shared table layout.
#[derive(Debug, Clone, Default)]
pub struct Floor {
    entries: Vec<FloorEntry>,
    next_id: u32,
    captured_builds: Vec<FloorId>,
}

impl Floor {
    /// Creates an empty floor.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            captured_builds: Vec::new(),
        }
    }

    fn alloc_id(&mut self) -> FloorId {
        let id = FloorId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Places a loose card on the floor.
    pub fn place_loose(&mut self, card: Card) -> FloorId {
        let id = self.alloc_id();
        self.entries.push(FloorEntry {
            id,
            item: FloorItem::Loose(card),
        });
        id
    }

    /// Places a build on the floor.
    pub fn place_build(&mut self, build: Build) -> FloorId {
        let id = self.alloc_id();
        self.entries.push(FloorEntry {
            id,
            item: FloorItem::Build(build),
        });
        id
    }

    /// Looks up an entry by handle.
    #[must_use]
    pub fn get(&self, id: FloorId) -> Option<&FloorItem> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.item)
    }

    /// Looks up a build by handle.
    #[must_use]
    pub fn get_build(&self, id: FloorId) -> Option<&Build> {
        match self.get(id) {
            Some(FloorItem::Build(build)) => Some(build),
            _ => None,
        }
    }

    /// Looks up a build by handle, mutably.
    pub fn get_build_mut(&mut self, id: FloorId) -> Option<&mut Build> {
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .and_then(|e| match &mut e.item {
                FloorItem::Build(build) => Some(build),
                FloorItem::Loose(_) => None,
            })
    }

    /// Removes an entry from the floor, returning it.
    pub fn remove(&mut self, id: FloorId) -> Option<FloorItem> {
        let pos = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(pos).item)
    }

    /// Records that a build was captured, retiring its handle.
    pub fn retire_build(&mut self, id: FloorId) {
        self.captured_builds.push(id);
    }

    /// Returns whether this handle named a build that has been captured.
    #[must_use]
    pub fn was_build_captured(&self, id: FloorId) -> bool {
        self.captured_builds.contains(&id)
    }

    /// Iterates over `(id, item)` pairs in layout order.
    pub fn iter(&self) -> impl Iterator<Item = (FloorId, &FloorItem)> {
        self.entries.iter().map(|e| (e.id, &e.item))
    }

    /// Iterates over the loose cards with their handles.
    pub fn loose_cards(&self) -> impl Iterator<Item = (FloorId, Card)> + '_ {
        self.entries.iter().filter_map(|e| match e.item {
            FloorItem::Loose(card) => Some((e.id, card)),
            FloorItem::Build(_) => None,
        })
    }

    /// Iterates over the builds with their handles.
    pub fn builds(&self) -> impl Iterator<Item = (FloorId, &Build)> {
        self.entries.iter().filter_map(|e| match &e.item {
            FloorItem::Build(build) => Some((e.id, build)),
            FloorItem::Loose(_) => None,
        })
    }

    /// Number of entries (loose cards count one, builds count one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the floor has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of physical cards on the floor, build constituents
    /// included.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.entries.iter().map(|e| e.item.card_count()).sum()
    }

    /// Empties the floor, returning every physical card in layout order.
    ///
    /// Used for the end-of-round sweep by the last capturer.
    pub fn take_all(&mut self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(self.card_count());
        for entry in self.entries.drain(..) {
            match entry.item {
                FloorItem::Loose(card) => cards.push(card),
                FloorItem::Build(build) => cards.extend(build.cards),
            }
        }
        cards
    }
}
