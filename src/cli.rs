//! Command-line options and the command that runs them.

use crate::compare::{compare, default_cases};
use crate::puzzle::Board;
use crate::report::{to_json, write_text, TextOptions};
use crate::search::Algorithm;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use rand::{rngs::StdRng, SeedableRng};
use std::io::Write;

#[derive(Parser, Debug)]
#[command(name = "eight-puzzle")]
#[command(version, about = "Compare greedy best-first and A* on the 8-puzzle", long_about = None)]
pub struct Cli {
    /// Start states as nine digits, 0 for the blank (e.g. 123406758 or "1 2 3/4 0 6/7 5 8").
    /// Defaults to three built-in cases.
    pub states: Vec<Board>,

    /// Which search to run
    #[arg(long, short = 'a', value_enum, default_value_t = AlgorithmChoice::Both)]
    pub algorithm: AlgorithmChoice,

    /// Add this many random solvable start states
    #[arg(long, default_value_t = 0)]
    pub scramble: usize,

    /// Random moves applied to the goal for each scrambled state
    #[arg(long, default_value_t = 30)]
    pub depth: usize,

    /// Random seed for reproducible scrambles
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the moves and every state on each solution path
    #[arg(long)]
    pub show_path: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Disable coloured headings
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmChoice {
    Greedy,
    Astar,
    Both,
}

impl AlgorithmChoice {
    pub fn algorithms(&self) -> Vec<Algorithm> {
        match self {
            AlgorithmChoice::Greedy => vec![Algorithm::Greedy],
            AlgorithmChoice::Astar => vec![Algorithm::AStar],
            AlgorithmChoice::Both => Algorithm::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Explicit states first, then scrambles. Falls back to the built-in
    /// cases when both are absent.
    pub fn starts(&self) -> Result<Vec<Board>> {
        let mut starts = self.states.clone();

        if self.scramble > 0 {
            let mut rng = match self.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            starts.extend((0..self.scramble).map(|_| Board::scramble(&mut rng, self.depth)));
        }

        if starts.is_empty() {
            starts = default_cases().context("built-in start states are invalid")?;
        }
        Ok(starts)
    }
}

pub fn execute<W: Write>(cli: &Cli, out: &mut W, color: bool) -> Result<()> {
    let starts = cli.starts()?;
    let reports = compare(&starts, &cli.algorithm.algorithms()).context("search failed")?;

    match cli.format {
        OutputFormat::Text => {
            let options = TextOptions {
                show_path: cli.show_path,
                color: color && !cli.no_color,
            };
            write_text(out, &reports, options).context("failed to write report")?;
        }
        OutputFormat::Json => {
            writeln!(out, "{}", to_json(&reports)?).context("failed to write report")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("eight-puzzle").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.algorithm, AlgorithmChoice::Both);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.log_level(), LevelFilter::Warn);
        assert_eq!(cli.starts().unwrap(), default_cases().unwrap());
    }

    #[test]
    fn test_explicit_states() {
        let cli = parse(&["123406758", "1 2 3/0 4 6/7 5 8", "-a", "astar", "-vv"]);
        assert_eq!(cli.states.len(), 2);
        assert_eq!(cli.algorithm.algorithms(), vec![Algorithm::AStar]);
        assert_eq!(cli.log_level(), LevelFilter::Debug);
        assert_eq!(cli.starts().unwrap(), cli.states);
    }

    #[test]
    fn test_bad_state_is_rejected() {
        assert!(Cli::try_parse_from(["eight-puzzle", "113406758"]).is_err());
        assert!(Cli::try_parse_from(["eight-puzzle", "12340675"]).is_err());
    }

    #[test]
    fn test_seeded_scramble() {
        let a = parse(&["--scramble", "3", "--depth", "12", "--seed", "42"]);
        let b = parse(&["--scramble", "3", "--depth", "12", "--seed", "42"]);
        assert_eq!(a.starts().unwrap().len(), 3);
        assert_eq!(a.starts().unwrap(), b.starts().unwrap());
    }

    #[test]
    fn test_execute_json() {
        let cli = parse(&["123406758", "--format", "json"]);
        let mut buf = Vec::new();
        execute(&cli, &mut buf, false).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["results"][1]["cost"], 2);
        assert_eq!(value[0]["start"][1][1], 0);
    }
}
