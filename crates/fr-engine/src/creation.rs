//! Player character creation.
//!
//! Walks the player through naming, stat allocation under the cast's
//! budget, and looks. Everything is asked through the presenter.

use tracing::debug;

use fr_core::{Character, Stats};

use crate::cast::CastConfig;
use crate::error::{EngineError, EngineResult};
use crate::presenter::{ChoiceOption, Presenter};

fn options_from(values: &[String]) -> Vec<ChoiceOption> {
    values.iter().map(|v| ChoiceOption::new(v.clone(), v.clone())).collect()
}

fn ask_name(presenter: &mut dyn Presenter) -> EngineResult<String> {
    loop {
        let name = presenter.collect_free_text("What's your name?")?;
        let name = name.trim();
        if !name.is_empty() {
            return Ok(name.to_string());
        }
        presenter.present_narrative("Name", "Every contestant needs a name.")?;
    }
}

fn ask_stats(presenter: &mut dyn Presenter, cast: &CastConfig) -> EngineResult<Stats> {
    let budget = cast.player_budget;
    loop {
        presenter.present_narrative(
            "Stats",
            &format!("Assign at most {budget} points across your stats."),
        )?;
        let mut stats = Stats::new();
        for range in cast.contestant_stats.ranges() {
            let options: Vec<ChoiceOption> = (range.min..=range.max)
                .map(|v| ChoiceOption::new(v.to_string(), v.to_string()))
                .collect();
            let prompt = format!(
                "{} ({} = very low, {} = very high)",
                range.stat, range.min, range.max
            );
            let picked = presenter.collect_choice(&prompt, &options)?;
            let value: i32 = picked
                .parse()
                .map_err(|_| EngineError::Presenter(format!("'{picked}' is not a stat value")))?;
            stats.set(range.stat, value);
        }
        let total = stats.total();
        if total <= budget {
            return Ok(stats);
        }
        presenter.present_narrative(
            "Stats",
            &format!("Your total was {total}. Please distribute at most {budget} points."),
        )?;
    }
}

/// Build the player's character.
pub fn create_player(presenter: &mut dyn Presenter, cast: &CastConfig) -> EngineResult<Character> {
    let name = ask_name(presenter)?;
    let stats = ask_stats(presenter, cast)?;
    let personality = presenter.collect_choice("Personality", &options_from(&cast.personalities))?;
    let eyes = presenter.collect_choice("Eye color", &options_from(&cast.eye_colors))?;
    let hair = presenter.collect_choice("Hair color", &options_from(&cast.hair_colors))?;
    let height = presenter.collect_free_text("Height (e.g. 5'7\")")?;

    debug!(name = %name, total = stats.total(), "player created");
    Ok(Character::player(name)
        .with_stats(stats)
        .with_personality(personality)
        .with_looks(eyes, hair, height.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::ScriptedPresenter;
    use fr_core::Stat;

    #[test]
    fn builds_a_player() {
        let cast = CastConfig::classic();
        let mut p = ScriptedPresenter::new()
            .with_text("  Ellory ")
            .with_choices(["3", "3", "3", "witty", "Green", "Red"])
            .with_text("5'7\"");
        let me = create_player(&mut p, &cast).unwrap();
        assert_eq!(me.name, "Ellory");
        assert!(me.is_player);
        assert_eq!(me.stats.total(), 9);
        assert_eq!(me.stats.get(Stat::Intelligence), 3);
        assert_eq!(me.describe(), "witty, Green-eyed, Red-haired, 5'7\"");
    }

    #[test]
    fn blank_name_is_asked_again() {
        let cast = CastConfig::classic();
        let mut p = ScriptedPresenter::new()
            .with_text("   ")
            .with_text("Ellory")
            .with_text("");
        let me = create_player(&mut p, &cast).unwrap();
        assert_eq!(me.name, "Ellory");
        assert!(p.saw("needs a name"));
    }

    #[test]
    fn over_budget_is_asked_again() {
        let cast = CastConfig::classic();
        let mut p = ScriptedPresenter::new()
            .with_text("Ellory")
            .with_choices(["5", "5", "5", "2", "2", "2"])
            .with_text("");
        let me = create_player(&mut p, &cast).unwrap();
        assert_eq!(me.stats.total(), 6);
        assert!(p.saw("Your total was 15"));
    }

    #[test]
    fn missing_name_propagates() {
        let cast = CastConfig::classic();
        let mut p = ScriptedPresenter::new();
        assert!(create_player(&mut p, &cast).is_err());
    }
}
