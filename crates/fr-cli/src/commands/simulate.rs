use std::path::Path;

use colored::Colorize;
use tracing::debug;

use fr_engine::{ScriptedPresenter, Season, Verdict};

pub fn run(
    preset: &str,
    seed: u64,
    weighted: bool,
    name: &str,
    json: bool,
    journal: Option<&Path>,
) -> Result<(), String> {
    let config = super::season_config(preset, seed, weighted)?;
    let player = super::auto_player(&config.cast, name)?;
    debug!(seed, preset, weighted, "simulating season");

    let mut season =
        Season::new(config, player).map_err(|e| format!("failed to start season: {e}"))?;
    let mut presenter = ScriptedPresenter::new();
    let verdict = season
        .run(&mut presenter)
        .map_err(|e| format!("season failed: {e}"))?;

    if let Some(path) = journal {
        super::write_journal(path, season.journal())?;
    }

    if json {
        let out = serde_json::json!({
            "seed": seed,
            "preset": season.config().cast.name,
            "player": season.state().player().name,
            "target": season.state().target().name,
            "verdict": verdict,
            "winner": season.winner(),
            "rounds": season.history(),
        });
        let text = serde_json::to_string_pretty(&out).map_err(|e| e.to_string())?;
        println!("{text}");
        return Ok(());
    }

    let state = season.state();
    println!(
        "  {} '{}' {}",
        "Season".bold(),
        season.config().cast.name,
        format!("(seed={seed}, {} rounds)", season.config().schedule.len()).dimmed()
    );
    println!(
        "  {} is looking for love at {}.\n",
        state.target().name,
        season.config().cast.setting
    );

    for snapshot in season.history() {
        println!("  {}", snapshot.label.bold().underline());
        println!("{}", super::leaderboard_table(snapshot));
        if !snapshot.eliminated_this_round.is_empty() {
            println!(
                "  Sent home: {}",
                snapshot.eliminated_this_round.join(", ").red()
            );
        }
        println!();
    }

    let line = match verdict {
        Verdict::PlayerWon => format!("{} won the final rose!", state.player().name)
            .green()
            .bold(),
        Verdict::PlayerEliminated => match season.winner() {
            Some(winner) => format!(
                "{} was eliminated. The final rose went to {winner}.",
                state.player().name
            )
            .yellow(),
            None => format!("{} was eliminated.", state.player().name).yellow(),
        },
    };
    println!("  Verdict: {line}");
    Ok(())
}
