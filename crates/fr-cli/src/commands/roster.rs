use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rand::SeedableRng;
use rand::rngs::StdRng;

use fr_core::Stat;
use fr_engine::generator::generate_state;

pub fn run(preset: &str, seed: u64, name: &str, json: bool) -> Result<(), String> {
    let config = super::season_config(preset, seed, false)?;
    let player = super::auto_player(&config.cast, name)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let state = generate_state(&config.cast, player, &mut rng).map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::json!({
            "target": state.target(),
            "roster": state.roster().members(),
        });
        let text = serde_json::to_string_pretty(&out).map_err(|e| e.to_string())?;
        println!("{text}");
        return Ok(());
    }

    let target = state.target();
    println!(
        "  {} {} {}",
        "Leading man:".bold(),
        target.name.magenta().bold(),
        target.personality.dimmed()
    );
    println!(
        "  {} contestants at {}\n",
        state.roster().len(),
        config.cast.setting
    );

    let stats: Vec<Stat> = config
        .cast
        .contestant_stats
        .ranges()
        .iter()
        .map(|r| r.stat)
        .collect();
    let mut header = vec!["Name".to_string(), "Description".to_string()];
    header.extend(stats.iter().map(|s| s.to_string()));

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    for c in state.roster() {
        let name = if c.is_player {
            format!("{} (you)", c.name)
        } else {
            c.name.clone()
        };
        let mut row = vec![name, c.describe()];
        row.extend(stats.iter().map(|s| c.stats.get(*s).to_string()));
        table.add_row(row);
    }
    println!("{table}");
    Ok(())
}
