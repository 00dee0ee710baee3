use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use fr_engine::creation::create_player;
use fr_engine::{ChoiceOption, EngineError, EngineResult, Presenter, RoundSnapshot, Season, Verdict};

/// Presenter over a line-oriented reader and writer.
///
/// `q`, `quit`, or end of input abort the session.
pub struct TerminalPresenter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPresenter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_answer(&mut self) -> EngineResult<String> {
        self.output.flush().map_err(io_error)?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(io_error)?;
        let answer = line.trim();
        if read == 0 || answer.eq_ignore_ascii_case("q") || answer.eq_ignore_ascii_case("quit") {
            return Err(EngineError::PresenterAborted);
        }
        Ok(answer.to_string())
    }
}

fn io_error(e: io::Error) -> EngineError {
    EngineError::Presenter(e.to_string())
}

impl<R: BufRead, W: Write> Presenter for TerminalPresenter<R, W> {
    fn present_narrative(&mut self, title: &str, text: &str) -> EngineResult<()> {
        writeln!(self.output, "\n  {}", title.magenta().bold()).map_err(io_error)?;
        for line in text.lines() {
            writeln!(self.output, "  {line}").map_err(io_error)?;
        }
        Ok(())
    }

    fn collect_choice(&mut self, prompt: &str, options: &[ChoiceOption]) -> EngineResult<String> {
        writeln!(self.output, "\n  {}", prompt.bold()).map_err(io_error)?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "    {}) {}", i + 1, option.label).map_err(io_error)?;
        }
        loop {
            write!(self.output, "  > ").map_err(io_error)?;
            let answer = self.read_answer()?;
            let by_number = answer
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| options.get(i));
            let by_value = options
                .iter()
                .find(|o| o.value.eq_ignore_ascii_case(&answer));
            if let Some(option) = by_number.or(by_value) {
                return Ok(option.value.clone());
            }
            writeln!(
                self.output,
                "  {}",
                format!("Please pick 1-{}.", options.len()).yellow()
            )
            .map_err(io_error)?;
        }
    }

    fn collect_free_text(&mut self, prompt: &str) -> EngineResult<String> {
        write!(self.output, "\n  {} ", prompt.bold()).map_err(io_error)?;
        self.read_answer()
    }

    fn present_round(&mut self, snapshot: &RoundSnapshot) -> EngineResult<()> {
        writeln!(self.output, "\n  {}", snapshot.label.magenta().bold()).map_err(io_error)?;
        writeln!(self.output, "{}", super::leaderboard_table(snapshot)).map_err(io_error)
    }
}

pub fn run(preset: &str, seed: u64, weighted: bool, journal: Option<&Path>) -> Result<(), String> {
    let config = super::season_config(preset, seed, weighted)?;

    println!("  {} Final Rose", "Starting".bold());
    println!("  Preset: {preset} | Seed: {seed}");
    println!("  Type 'quit' at any prompt to leave the show.");

    let stdin = io::stdin();
    let mut presenter = TerminalPresenter::new(stdin.lock(), io::stdout());

    let outcome = create_player(&mut presenter, &config.cast)
        .and_then(|player| Season::new(config, player))
        .and_then(|mut season| season.run(&mut presenter).map(|verdict| (season, verdict)));

    match outcome {
        Ok((season, verdict)) => {
            if let Some(path) = journal {
                super::write_journal(path, season.journal())?;
            }
            let line = match verdict {
                Verdict::PlayerWon => "You won the final rose!".green().bold(),
                Verdict::PlayerEliminated => "Your journey ends here.".yellow(),
            };
            println!("\n  {line}");
            Ok(())
        }
        Err(e) => session_error(e),
    }
}

/// An aborted session ends quietly; anything else is reported as-is.
fn session_error(e: EngineError) -> Result<(), String> {
    match e {
        EngineError::PresenterAborted => {
            println!("\n  Session ended.");
            Ok(())
        }
        e => Err(e.to_string()),
    }
}
