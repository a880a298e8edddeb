//! Rendering of comparison results for the terminal or as JSON.

use crate::compare::CaseReport;
use crate::error::Result;
use crate::search::{Algorithm, SearchResult};
use crossterm::style::Stylize;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Default)]
pub struct TextOptions {
    /// Print every state on the solution path.
    pub show_path: bool,
    /// Style headings with ANSI escapes.
    pub color: bool,
}

fn styled(text: String, color: bool) -> String {
    if color {
        text.bold().cyan().to_string()
    } else {
        text
    }
}

pub fn write_text<W: Write>(
    out: &mut W,
    reports: &[CaseReport],
    options: TextOptions,
) -> io::Result<()> {
    for report in reports {
        writeln!(out)?;
        writeln!(
            out,
            "{}",
            styled(format!("====== Test Case {} ======", report.case), options.color)
        )?;
        write!(out, "{}", report.start)?;

        for result in &report.results {
            write_result(out, result, options)?;
        }
    }
    Ok(())
}

fn write_result<W: Write>(
    out: &mut W,
    result: &SearchResult,
    options: TextOptions,
) -> io::Result<()> {
    writeln!(out, "{}", styled(format!(">>> {}:", result.algorithm), options.color))?;

    match result.steps() {
        Some(steps) => writeln!(out, "Steps: {}", steps)?,
        None => writeln!(out, "Steps: no solution")?,
    }
    writeln!(out, "Time: {:.4}s", result.elapsed.as_secs_f64())?;
    if result.algorithm == Algorithm::AStar {
        match result.cost {
            Some(cost) => writeln!(out, "Cost: {}", cost)?,
            None => writeln!(out, "Cost: inf")?,
        }
    }
    writeln!(out, "Nodes expanded: {}", result.nodes_expanded)?;

    if options.show_path {
        if let Some(moves) = result.moves() {
            let names: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
            writeln!(out, "Moves: {}", names.join(" "))?;
        }
        if let Some(path) = &result.path {
            for state in path {
                write!(out, "{}", state)?;
                writeln!(out, "{}", "-".repeat(10))?;
            }
        }
    }
    Ok(())
}

pub fn to_json(reports: &[CaseReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}
