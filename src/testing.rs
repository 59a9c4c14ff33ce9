//! Testing utilities for backlogr
//!
//! Fixture builders shared by the unit tests. Only available when compiled
//! with `cfg(test)`.

use crate::models::{Book, Game, Platform, Series};

/// Create a book with the given title and authors
#[must_use]
pub fn book(title: &str, authors: &[&str]) -> Book {
    let mut book = Book::new(title);
    book.authors = authors.iter().map(ToString::to_string).collect();
    book
}

/// Create a game with the given name and platform
#[must_use]
pub fn game(name: &str, platform: Platform) -> Game {
    Game::new(name, platform)
}

/// A small, varied book backlog
#[must_use]
pub fn sample_books() -> Vec<Book> {
    let mut dune = book("Dune", &["Frank Herbert"]);
    dune.pages = 412;
    dune.tags = vec!["sf".into()];

    let mut fellowship = book("The Fellowship of the Ring", &["J. R. R. Tolkien"]);
    fellowship.series = Series {
        title: "The Lord of the Rings".into(),
        index: 1,
    };
    fellowship.tags = vec!["fantasy".into()];

    let mut hyperion = book("Hyperion", &["Dan Simmons"]);
    hyperion.completed = true;
    hyperion.tags = vec!["sf".into(), "space-opera".into()];

    vec![dune, fellowship, hyperion]
}

/// A small, varied game backlog
#[must_use]
pub fn sample_games() -> Vec<Game> {
    let mut bloodborne = game("Bloodborne", Platform::Ps4);
    bloodborne.developer = "FromSoftware".into();
    bloodborne.genres = vec!["Action RPG".into()];
    bloodborne.tags = vec!["soulslike".into()];
    bloodborne.time_to_beat = 35.0;

    let mut hades = game("Hades", Platform::Switch);
    hades.developer = "Supergiant Games".into();
    hades.genres = vec!["Roguelike".into()];
    hades.tags = vec!["roguelike".into(), "action".into()];
    hades.time_to_beat = 22.0;
    hades.metacritic_score = 93.0;

    let mut celeste = game("Celeste", Platform::Pc);
    celeste.completed = true;
    celeste.played = true;
    celeste.genres = vec!["Platformer".into()];
    celeste.time_to_beat = 8.0;

    vec![bloodborne, hades, celeste]
}
