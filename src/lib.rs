//! A South African Casino card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages one round of the
//! fishing-style capture game: dealing with the middle-cut floor, move
//! validation, capture and build resolution, opponent-pile augmentation,
//! and the end-of-round sweep and scoring. Input, rendering and AI are
//! callers of the engine, not part of it: a caller asks for
//! [`Game::legal_moves`], submits one via [`Game::play`], and receives a
//! verdict or an outcome.
//!
//! # Example
//!
//! ```
//! use sacrs::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42).unwrap();
//! let seat = game.current_player().unwrap();
//! let moves = game.legal_moves(seat);
//! game.play(seat, &moves[0]).unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod floor;
pub mod game;
pub mod hand;
pub mod moves;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{BIG_TEN, Card, DeckSize, SPY_TWO, Suit};
pub use error::{MoveError, SetupError, SweepError};
pub use floor::{Build, Floor, FloorId, FloorItem};
pub use game::{FLOOR_CUT, Game, GamePhase};
pub use hand::{CapturePile, Hand};
pub use moves::{Move, MoveOutcome};
pub use options::{GameOptions, MajorityTie};
pub use result::{RoundScore, ScoreSide, SideScore};
