use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use fr_engine::Preset;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Preset", "Setting", "Contestants", "Ceremonies", "Budget"]);

    for preset in Preset::all() {
        let cast = preset.cast();
        let schedule = preset.schedule();
        let chain: Vec<String> = std::iter::once(cast.contestant_count)
            .chain(schedule.kept_after(cast.contestant_count))
            .map(|n| n.to_string())
            .collect();
        table.add_row(vec![
            preset.to_string(),
            cast.setting.clone(),
            cast.contestant_count.to_string(),
            chain.join(" -> "),
            cast.player_budget.to_string(),
        ]);
    }

    println!("  {}", "Show formats".bold());
    println!("{table}");
    Ok(())
}
