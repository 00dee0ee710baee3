pub mod play;
pub mod presets;
pub mod roster;
pub mod simulate;

use std::fs;
use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use fr_core::Character;
use fr_engine::creation::create_player;
use fr_engine::journal::Journal;
use fr_engine::{CastConfig, EliminationPolicy, Preset, RoundSnapshot, ScriptedPresenter, SeasonConfig};

/// Resolve a preset name into a validated season configuration.
fn season_config(preset: &str, seed: u64, weighted: bool) -> Result<SeasonConfig, String> {
    let preset = parse_preset(preset)?;
    let mut config = SeasonConfig::from_preset(preset).with_seed(seed);
    if weighted {
        config = config.with_policy(EliminationPolicy::Weighted);
    }
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

fn parse_preset(name: &str) -> Result<Preset, String> {
    Preset::parse(name).ok_or_else(|| {
        let known: Vec<String> = Preset::all().iter().map(|p| p.to_string()).collect();
        format!("unknown preset '{name}' (expected one of: {})", known.join(", "))
    })
}

/// Stat answers that spread the budget evenly across the schema.
fn balanced_stats(cast: &CastConfig) -> Vec<String> {
    let ranges = cast.contestant_stats.ranges();
    if ranges.is_empty() {
        return Vec::new();
    }
    let share = cast.player_budget / ranges.len() as i32;
    ranges
        .iter()
        .map(|r| share.clamp(r.min, r.max).to_string())
        .collect()
}

/// Create a player without asking anyone.
fn auto_player(cast: &CastConfig, name: &str) -> Result<Character, String> {
    if name.trim().is_empty() {
        return Err("player name must not be blank".to_string());
    }
    let mut scripted = ScriptedPresenter::new()
        .with_text(name)
        .with_choices(balanced_stats(cast))
        .with_text("5'8\"");
    create_player(&mut scripted, cast).map_err(|e| format!("failed to create player: {e}"))
}

/// Leaderboard table for a round snapshot.
fn leaderboard_table(snapshot: &RoundSnapshot) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Contestant", "Score", "Rose"]);
    for entry in &snapshot.ranked {
        let name = if entry.is_player {
            format!("{} (you)", entry.name).bold().to_string()
        } else {
            entry.name.clone()
        };
        let rose = if entry.eliminated {
            "sent home".red().to_string()
        } else {
            "rose".green().to_string()
        };
        table.add_row(vec![
            entry.position.to_string(),
            name,
            entry.score.to_string(),
            rose,
        ]);
    }
    table
}

/// Write the journal as markdown, or plain text for `.txt` paths.
fn write_journal(path: &Path, journal: &Journal) -> Result<(), String> {
    let body = if path.extension().is_some_and(|ext| ext == "txt") {
        journal.export_text()
    } else {
        journal.export_markdown()
    };
    fs::write(path, body).map_err(|e| format!("failed to write {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected() {
        let cast = CastConfig::classic();
        assert_eq!(
            auto_player(&cast, "  ").unwrap_err(),
            "player name must not be blank"
        );
    }

    #[test]
    fn auto_player_fits_the_budget() {
        let cast = CastConfig::classic();
        let me = auto_player(&cast, "Ellory").unwrap();
        assert_eq!(me.name, "Ellory");
        assert!(me.is_player);
        assert!(me.stats.total() <= cast.player_budget);
    }
}
