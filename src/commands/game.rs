//! Game subcommands

use std::cmp::Ordering;

use crate::{
    BacklogError,
    cli::{GameCommands, GameCriteriaArgs, GameSortKey},
    editor,
    filters::game::create_filter,
    lister::{self, Direction},
    matcher::is_close,
    models::{Achievements, Game, Platform},
    output,
    picker::Picker,
    store::{AddOutcome, Backlog},
};

type Result<T> = std::result::Result<T, BacklogError>;

/// Execute a game subcommand
pub fn execute(backlog: &mut Backlog, command: GameCommands, quiet: bool) -> Result<()> {
    match command {
        GameCommands::Add {
            name,
            platform,
            metacritic_score,
            played,
            completed,
            achievements_complete,
            achievements_difficulty,
            time_to_beat,
            tags,
            developer,
            genres,
            ..
        } => {
            let game = Game {
                name,
                platform,
                metacritic_score,
                played,
                completed,
                achievements: Achievements {
                    complete: achievements_complete,
                    difficulty: achievements_difficulty,
                },
                time_to_beat,
                tags: trimmed(tags),
                developer,
                genres: trimmed(genres),
            };
            add(backlog, game, quiet)
        }
        GameCommands::Choose { num_runs, criteria } => choose(backlog, num_runs as usize, &criteria),
        GameCommands::Show {
            sort_by,
            direction,
            criteria,
        } => {
            show(backlog, sort_by, direction, &criteria, quiet);
            Ok(())
        }
        GameCommands::Edit { name, platform } => edit(backlog, &name, platform, quiet),
    }
}

fn add(backlog: &mut Backlog, game: Game, quiet: bool) -> Result<()> {
    match backlog.add_game(game) {
        AddOutcome::Added => {}
        AddOutcome::Duplicate { index, item } => {
            output::info("Game has already been added to backlog", quiet);
            if output::confirm("Overwrite details?", quiet)? {
                backlog.replace_game(index, item);
            }
        }
    }
    backlog.save()?;
    Ok(())
}

fn choose(backlog: &Backlog, num_runs: usize, criteria: &GameCriteriaArgs) -> Result<()> {
    let picker = Picker::new(num_runs, create_filter(&criteria.into()));
    let result = picker.pick(&backlog.games)?;
    println!("{}", output::game_line(&result));
    Ok(())
}

fn show(
    backlog: &Backlog,
    sort_by: Option<GameSortKey>,
    direction: Direction,
    criteria: &GameCriteriaArgs,
    quiet: bool,
) {
    let filter = create_filter(&criteria.into());
    let listed = lister::list_items(
        &backlog.games,
        Some(&filter),
        sort_by.map(comparator),
        direction,
    );
    if listed.is_empty() {
        output::info("No games matched.", quiet);
        return;
    }
    for game in listed {
        println!("{}", output::game_line(&game));
    }
}

fn edit(
    backlog: &mut Backlog,
    name: &str,
    platform: Option<Platform>,
    quiet: bool,
) -> Result<()> {
    let index = find_game(backlog, name, platform)?;
    let edited = editor::edit_item(&backlog.games[index], "game")?;
    backlog.replace_game(index, edited);
    backlog.save()?;
    output::info(
        &format!(
            "Saved new details {}",
            output::game_line(&backlog.games[index])
        ),
        quiet,
    );
    Ok(())
}

/// Locate the game to edit: exact name (and platform, when given) first,
/// then fuzzy candidates on the same platform constraint
fn find_game(backlog: &Backlog, name: &str, platform: Option<Platform>) -> Result<usize> {
    let on_platform =
        |game: &Game| platform.is_none_or(|wanted| game.platform == wanted);

    if let Some(index) = backlog
        .games
        .iter()
        .position(|game| game.name == name && on_platform(game))
    {
        return Ok(index);
    }
    output::warn(&format!(
        "Could not find game with name={name} and platform={}",
        platform.map_or_else(|| "ANY".to_string(), |wanted| wanted.to_string())
    ));

    let candidates: Vec<usize> = backlog
        .games
        .iter()
        .enumerate()
        .filter(|(_, game)| on_platform(game) && is_close(&game.name, name))
        .map(|(index, _)| index)
        .collect();
    let labels: Vec<String> = candidates
        .iter()
        .map(|&index| backlog.games[index].to_string())
        .collect();
    let choice = editor::choose_candidate(&labels, "game", name)?;
    Ok(candidates[choice])
}

fn comparator(key: GameSortKey) -> fn(&Game, &Game) -> Ordering {
    match key {
        GameSortKey::Name => |one, two| one.name.cmp(&two.name),
        GameSortKey::TimeToBeat => |one, two| one.time_to_beat.total_cmp(&two.time_to_beat),
        GameSortKey::MetacriticScore => {
            |one, two| one.metacritic_score.total_cmp(&two.metacritic_score)
        }
    }
}

fn trimmed(values: Vec<String>) -> Vec<String> {
    values.into_iter().map(|value| value.trim().to_string()).collect()
}
