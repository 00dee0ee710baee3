//! Flavor text. Pure functions of game state; the presenter decides how to show it.

use rand::Rng;

use fr_core::{Character, Roster};

use crate::cast::CastConfig;
use crate::scoring::{ActivityOutcome, DramaOutcome, GroupDateOutcome, InteractionOutcome};

/// Opening monologue.
pub fn opening(cast: &CastConfig, player: &Character) -> String {
    format!(
        "Welcome to Final Rose! This season comes to you from {}. \
         {} contestants, one heart to win, and you, {}, are one of them.",
        cast.setting, cast.contestant_count, player.name
    )
}

/// One line per contestant, in seating order.
pub fn cast_introduction(roster: &Roster) -> String {
    roster
        .iter()
        .map(|c| {
            let who = if c.is_player { " (you)" } else { "" };
            let desc = c.describe();
            if desc.is_empty() {
                format!("{}{who}", c.name)
            } else {
                format!("{}{who}, {desc}", c.name)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// How the room reacts when the target walks in.
pub fn target_reaction(attractiveness: i32) -> &'static str {
    match attractiveness {
        i32::MIN..=1 => {
            "The room goes quiet. A few contestants wonder aloud whether he is really worth all this."
        }
        2 => "Polite smiles all around. He is not bad, but nobody is swooning yet.",
        3 => "Heads turn. Now that there is something worth fighting for, the competition gets serious.",
        4 => "Everyone straightens up and fights for his attention. This is going to be a tough season.",
        _ => "Nervous giggles fill the room, except from you. You look him straight in the eye. He might be the one.",
    }
}

/// Introduces the target.
pub fn target_introduction(target: &Character) -> String {
    let role = if target.personality.is_empty() {
        String::new()
    } else {
        format!(" {}", target.personality)
    };
    format!(
        "This season's leading man is truly something special. Please welcome {}{role}!\n\n{}",
        target.name,
        target_reaction(target.attractiveness())
    )
}

/// What the player says when the target walks up, keyed by opener.
pub fn opener_line(opener: &str) -> &'static str {
    match opener {
        "ask" => "You ask what he's looking for in a partner.",
        "joke" => "You crack a joke about the limo ride.",
        "compliment" => "You tell him he has a great smile.",
        _ => "You say hello.",
    }
}

/// The target's answer to the player's opening line.
///
/// Keyed on the player's attractiveness plus charisma; two variants per tier.
pub fn target_response<R: Rng + ?Sized>(
    target: &Character,
    player: &Character,
    opener: &str,
    rng: &mut R,
) -> String {
    format!("{} {}", opener_line(opener), target_answer(target, player, rng))
}

fn target_answer<R: Rng + ?Sized>(target: &Character, player: &Character, rng: &mut R) -> String {
    let appeal = player.attractiveness() + player.charisma();
    let variant = rng.random_range(0..2);
    let name = &target.name;
    if appeal < 4 {
        format!("{name} looks right past you and moves on to the next contestant. Maybe he didn't hear you.")
    } else if appeal < 7 {
        match variant {
            0 => format!("\"Ha, you're nervous,\" {name} says. \"I kind of like that.\""),
            _ => format!("\"That's not a question I hear every day,\" {name} says. \"I want to know more.\""),
        }
    } else {
        match variant {
            0 => format!("{name} blushes, walks away, and glances back over his shoulder at you."),
            _ => format!("\"I've never met someone who thinks like me,\" {name} says. He keeps looking your way all night."),
        }
    }
}

/// How many places count as the top and bottom of a leaderboard of `total`.
pub fn standing_bands(total: usize) -> (usize, usize) {
    let top = (total * 2 / 5).max(1);
    let bottom = (total / 5).max(1);
    (top, bottom)
}

/// Remark on the player's first impression standing.
pub fn standing_remark(player_name: &str, position: usize, total: usize) -> String {
    let (top, bottom) = standing_bands(total);
    if position <= top {
        format!("You're already in the Top {top}, {player_name}, and he hasn't even seen your personality yet!")
    } else if position + bottom > total {
        format!("Uh oh, {player_name}. You're in the Bottom {bottom}. You'll need a miracle to stay.")
    } else {
        format!("You didn't stand out as much as you hoped, but at least you're not in the Bottom {bottom}.")
    }
}

/// Narrates the player engaging a contestant.
pub fn interaction_line(outcome: &InteractionOutcome) -> String {
    let mut line = if outcome.delta > 0 {
        format!("You and {} hit it off.", outcome.contestant)
    } else {
        format!("Your chat with {} falls flat.", outcome.contestant)
    };
    if outcome.chemistry {
        line.push_str(" There's real chemistry there.");
    }
    line
}

/// Narrates the player's activity roll.
pub fn activity_line(outcome: &ActivityOutcome) -> String {
    if outcome.success {
        format!(
            "{}: you shine (rolled {} + {}). He noticed.",
            outcome.activity, outcome.roll, outcome.stat_value
        )
    } else {
        format!(
            "{}: it doesn't go your way (rolled {} + {}).",
            outcome.activity, outcome.roll, outcome.stat_value
        )
    }
}

/// Narrates a group date from the player's side.
pub fn group_date_line(outcome: &GroupDateOutcome, player: &str, target: &str) -> String {
    let focus = outcome.stat.to_string().to_lowercase();
    if outcome.winner == player {
        format!("The group date is all about {focus}. You impressed {target} the most!")
    } else {
        format!(
            "The group date is all about {focus}. {} impressed {target} the most.",
            outcome.winner
        )
    }
}

/// Narrates an argument at the cocktail party.
pub fn drama_line(outcome: &DramaOutcome, target: &str) -> String {
    match outcome {
        DramaOutcome::Player { delta } if *delta < 0 => format!(
            "You got into an argument at the cocktail party. {target} dislikes drama and seems disappointed."
        ),
        DramaOutcome::Player { .. } => format!(
            "You got into an argument at the cocktail party, and your fiery spirit caught {target}'s eye."
        ),
        DramaOutcome::Rivals { first, second } => {
            format!("{first} and {second} had a heated argument, turning {target} off.")
        }
    }
}

/// Ceremony announcement listing who goes home.
pub fn farewell(removed: &[String]) -> String {
    match removed {
        [] => "Everyone receives a rose tonight.".to_string(),
        [one] => format!("{one}, please say your goodbyes."),
        many => format!("Please say your goodbyes: {}.", many.join(", ")),
    }
}

/// The player took the final rose.
pub fn victory(player: &Character, target: &Character) -> String {
    format!(
        "{} kneels and holds out the final rose. \"{}, will you accept this rose?\" You said yes!",
        target.name, player.name
    )
}

/// The player was sent home.
pub fn defeat(player: &Character, target: &Character) -> String {
    format!(
        "No rose for you tonight, {}. {} wishes you well as the limo pulls away.",
        player.name, target.name
    )
}
