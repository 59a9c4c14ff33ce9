//! Data models for backlog items
//!
//! A backlog holds two kinds of items: [`Book`]s and [`Game`]s. Both are
//! plain serde-backed records with an identity notion that is narrower than
//! full structural equality - two books are the same entry when they share
//! title and authors, two games when they share name and platform. The
//! picker and the duplicate check in the store both rely on that identity.

pub mod book;
pub mod game;

pub use book::{Book, Series};
pub use game::{Achievements, Game, Platform};
