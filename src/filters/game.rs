//! Filters over games

use crate::filters::{AndFilter, Filter};
use crate::matcher::is_close;
use crate::models::{Game, Platform};

/// A platform selection: one concrete platform, or the PlayStation family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformQuery {
    /// Match exactly this platform
    Exact(Platform),
    /// Match any PlayStation-family platform (the `ps` wildcard)
    PlaystationFamily,
}

/// Filter criteria for games, as collected from the command line
#[derive(Debug, Clone, Default)]
pub struct GameCriteria {
    /// Match games on the given platform
    pub platform: Option<PlatformQuery>,
    /// Match games that have (or have not) been completed
    pub completed: bool,
    /// Match games that have (or have not) been played
    pub played: bool,
    /// Match games whose achievements have (or have not) all been completed
    pub achievements_complete: bool,
    /// Match games carrying all of the given tags
    pub tags: Vec<String>,
    /// Match games in the given genre
    pub genre: Option<String>,
    /// Match games from the given developer
    pub developer: Option<String>,
}

/// Compose the game filter for the given criteria
///
/// The completion, play and achievement filters are always applied (their
/// defaults match the untouched backlog); the others only when a value was
/// supplied.
#[must_use]
pub fn create_filter(criteria: &GameCriteria) -> AndFilter<Game> {
    let mut filter = AndFilter::new();
    if let Some(query) = criteria.platform {
        filter.add(PlatformFilter::new(query));
    }
    filter.add(CompletedFilter::new(criteria.completed));
    filter.add(PlayedFilter::new(criteria.played));
    filter.add(AchievementCompleteFilter::new(criteria.achievements_complete));
    if !criteria.tags.is_empty() {
        filter.add(TagsFilter::new(criteria.tags.clone()));
    }
    if let Some(genre) = &criteria.genre {
        filter.add(GenreFilter::new(genre));
    }
    if let Some(developer) = &criteria.developer {
        filter.add(DeveloperFilter::new(developer));
    }
    filter
}

/// Filter based on platform
#[derive(Debug, Clone, Copy)]
pub struct PlatformFilter {
    query: PlatformQuery,
}

impl PlatformFilter {
    #[must_use]
    pub const fn new(query: PlatformQuery) -> Self {
        Self { query }
    }
}

impl Filter<Game> for PlatformFilter {
    fn matches(&self, item: &Game) -> bool {
        match self.query {
            PlatformQuery::Exact(platform) => item.platform == platform,
            PlatformQuery::PlaystationFamily => item.platform.is_playstation(),
        }
    }
}

/// Filter based on completion status
#[derive(Debug, Clone, Copy)]
pub struct CompletedFilter {
    completed: bool,
}

impl CompletedFilter {
    #[must_use]
    pub const fn new(completed: bool) -> Self {
        Self { completed }
    }
}

impl Filter<Game> for CompletedFilter {
    fn matches(&self, item: &Game) -> bool {
        item.completed == self.completed
    }
}

/// Filter based on play status
#[derive(Debug, Clone, Copy)]
pub struct PlayedFilter {
    played: bool,
}

impl PlayedFilter {
    #[must_use]
    pub const fn new(played: bool) -> Self {
        Self { played }
    }
}

impl Filter<Game> for PlayedFilter {
    fn matches(&self, item: &Game) -> bool {
        item.played == self.played
    }
}

/// Filter based on achievement completion
#[derive(Debug, Clone, Copy)]
pub struct AchievementCompleteFilter {
    complete: bool,
}

impl AchievementCompleteFilter {
    #[must_use]
    pub const fn new(complete: bool) -> Self {
        Self { complete }
    }
}

impl Filter<Game> for AchievementCompleteFilter {
    fn matches(&self, item: &Game) -> bool {
        item.achievements.complete == self.complete
    }
}

/// Filter based on tags: every configured tag must be close to some game tag
///
/// Stricter than the book variant on purpose - game tags are curated and a
/// multi-tag query narrows rather than widens.
#[derive(Debug, Clone)]
pub struct TagsFilter {
    tags: Vec<String>,
}

impl TagsFilter {
    #[must_use]
    pub const fn new(tags: Vec<String>) -> Self {
        Self { tags }
    }
}

impl Filter<Game> for TagsFilter {
    fn matches(&self, item: &Game) -> bool {
        self.tags
            .iter()
            .all(|target| item.tags.iter().any(|tag| is_close(tag, target)))
    }
}

/// Filter based on genre
#[derive(Debug, Clone)]
pub struct GenreFilter {
    genre: String,
}

impl GenreFilter {
    pub fn new(genre: impl Into<String>) -> Self {
        Self {
            genre: genre.into(),
        }
    }
}

impl Filter<Game> for GenreFilter {
    fn matches(&self, item: &Game) -> bool {
        item.genres.iter().any(|genre| is_close(genre, &self.genre))
    }
}

/// Filter based on developer
#[derive(Debug, Clone)]
pub struct DeveloperFilter {
    developer: String,
}

impl DeveloperFilter {
    pub fn new(developer: impl Into<String>) -> Self {
        Self {
            developer: developer.into(),
        }
    }
}

impl Filter<Game> for DeveloperFilter {
    fn matches(&self, item: &Game) -> bool {
        is_close(&self.developer, &item.developer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(name: &str, platform: Platform) -> Game {
        Game::new(name, platform)
    }

    #[test]
    fn test_platform_filter_exact() {
        let filter = PlatformFilter::new(PlatformQuery::Exact(Platform::Switch));
        assert!(filter.matches(&game("Hades", Platform::Switch)));
        assert!(!filter.matches(&game("Hades", Platform::Pc)));
    }

    #[test]
    fn test_platform_filter_playstation_family_wildcard() {
        let filter = PlatformFilter::new(PlatformQuery::PlaystationFamily);
        assert!(filter.matches(&game("Bloodborne", Platform::Ps5)));
        assert!(filter.matches(&game("Bloodborne", Platform::Ps4)));
        assert!(filter.matches(&game("Bloodborne", Platform::Ps3)));
        assert!(!filter.matches(&game("Bloodborne", Platform::Pc)));
        assert!(!filter.matches(&game("Bloodborne", Platform::Switch)));
    }

    #[test]
    fn test_tags_filter_requires_every_configured_tag() {
        let mut item = game("Elden Ring", Platform::Ps5);
        item.tags = vec!["RPG".into(), "open-world".into()];

        assert!(TagsFilter::new(vec!["rpg".into()]).matches(&item));
        assert!(TagsFilter::new(vec!["rpg".into(), "open-world".into()]).matches(&item));
        assert!(!TagsFilter::new(vec!["rpg".into(), "puzzle".into()]).matches(&item));
    }

    #[test]
    fn test_genre_filter_is_fuzzy() {
        let mut item = game("Hollow Knight", Platform::Switch);
        item.genres = vec!["Metroidvania".into()];

        assert!(GenreFilter::new("metroidvania").matches(&item));
        assert!(!GenreFilter::new("racing").matches(&item));
    }

    #[test]
    fn test_developer_filter() {
        let mut item = game("Hades", Platform::Switch);
        item.developer = "Supergiant Games".into();

        assert!(DeveloperFilter::new("supergiant games").matches(&item));
        assert!(!DeveloperFilter::new("nintendo").matches(&item));
    }

    #[test]
    fn test_status_filters_default_to_untouched_backlog() {
        let filter = create_filter(&GameCriteria::default());

        let fresh = game("Celeste", Platform::Switch);
        assert!(filter.matches(&fresh));

        let mut played = fresh.clone();
        played.played = true;
        assert!(!filter.matches(&played));
    }

    #[test]
    fn test_create_filter_adds_given_criteria() {
        let criteria = GameCriteria {
            platform: Some(PlatformQuery::PlaystationFamily),
            tags: vec!["rpg".into()],
            genre: Some("action".into()),
            developer: Some("fromsoftware".into()),
            ..GameCriteria::default()
        };
        // platform + the three always-on status filters + tags + genre + developer
        assert_eq!(create_filter(&criteria).len(), 7);
    }
}
