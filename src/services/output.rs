use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use crate::domain::{Pairing, StandingsRow};

/// Pretty JSON for any serializable view
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}

pub fn format_standings(rows: &[StandingsRow]) -> String {
    if rows.is_empty() {
        return "No players registered".to_string();
    }

    let name_width = name_width(rows.iter().map(|r| r.name.as_str()));
    let mut out = format!(
        "{:>4}  {:>5}  {:<name_width$}  {:>4}  {:>7}",
        "Rank", "Id", "Name", "Wins", "Matches"
    )
    .bold()
    .to_string();

    for (idx, row) in rows.iter().enumerate() {
        let line = format!(
            "{:>4}  {:>5}  {:<name_width$}  {:>4}  {:>7}",
            idx + 1,
            row.id,
            row.name,
            row.wins,
            row.matches
        );
        out.push('\n');
        if idx == 0 && row.wins > 0 {
            out.push_str(&line.green().to_string());
        } else {
            out.push_str(&line);
        }
    }

    out
}

pub fn format_pairings(pairings: &[Pairing]) -> String {
    if pairings.is_empty() {
        return "No pairings".to_string();
    }

    let name_width = name_width(pairings.iter().map(|p| p.name1.as_str()));
    let mut out = "Next round".bold().to_string();

    for (idx, p) in pairings.iter().enumerate() {
        out.push_str(&format!(
            "\n{:>3}. ({:>4}) {:<name_width$}  vs  ({:>4}) {}",
            idx + 1,
            p.id1,
            p.name1,
            p.id2,
            p.name2
        ));
    }

    out
}

fn name_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names.map(|n| n.chars().count()).max().unwrap_or(0).max(4)
}
