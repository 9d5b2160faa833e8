//! Terminal rendering for command results: plain tables or JSON.
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::database::{Match, Player};
use crate::swiss::{Pairing, Standing};

pub struct Printer {
    format: OutputFormat,
}

impl Printer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn standings(&self, standings: &[Standing]) -> Result<()> {
        if self.format == OutputFormat::Json {
            return print_json(standings);
        }

        let width = name_width(standings.iter().map(|s| s.name.as_str()));
        println!(
            "{}",
            format!("{:>4} | {:>5} | {:<width$} | {:>4} | {:>7}", "Rank", "Id", "Name", "Wins", "Matches").bold()
        );
        for (idx, s) in standings.iter().enumerate() {
            println!(
                "{:>4} | {:>5} | {:<width$} | {:>4} | {:>7}",
                idx + 1,
                s.id,
                s.name,
                s.wins,
                s.matches
            );
        }
        Ok(())
    }

    pub fn pairings(&self, pairings: &[Pairing]) -> Result<()> {
        if self.format == OutputFormat::Json {
            return print_json(pairings);
        }

        if pairings.is_empty() {
            println!("{}", "No players to pair".yellow());
            return Ok(());
        }

        for (idx, p) in pairings.iter().enumerate() {
            println!(
                "Table {:>2}: {} ({}) {} {} ({})",
                idx + 1,
                p.name1.green(),
                p.id1,
                "vs".dimmed(),
                p.name2.green(),
                p.id2
            );
        }
        Ok(())
    }

    pub fn players(&self, players: &[Player]) -> Result<()> {
        if self.format == OutputFormat::Json {
            return print_json(players);
        }

        for player in players {
            println!("{:>5}  {}  {}", player.id, player.name, player.created_at.to_string().dimmed());
        }
        Ok(())
    }

    pub fn matches(&self, matches: &[Match]) -> Result<()> {
        if self.format == OutputFormat::Json {
            return print_json(matches);
        }

        for m in matches {
            println!(
                "{:>5}  {} beat {}  {}",
                m.id,
                m.winner_id,
                m.loser_id,
                m.created_at.to_string().dimmed()
            );
        }
        Ok(())
    }

    pub fn player(&self, player: &Player) -> Result<()> {
        match self.format {
            OutputFormat::Json => print_json(player),
            OutputFormat::Table => {
                println!("Registered {} with id {}", player.name.green(), player.id);
                Ok(())
            }
        }
    }

    pub fn reported(&self, recorded: &Match) -> Result<()> {
        match self.format {
            OutputFormat::Json => print_json(recorded),
            OutputFormat::Table => {
                println!("Recorded match {}: {} beat {}", recorded.id, recorded.winner_id, recorded.loser_id);
                Ok(())
            }
        }
    }

    pub fn count(&self, label: &str, value: i64) -> Result<()> {
        match self.format {
            OutputFormat::Json => print_json(&count_object(label, value)),
            OutputFormat::Table => {
                println!("{}", value);
                Ok(())
            }
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn count_object(label: &str, value: i64) -> serde_json::Value {
    let mut object = serde_json::Map::new();
    object.insert(label.to_string(), value.into());
    serde_json::Value::Object(object)
}

fn name_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names.map(|n| n.chars().count()).max().unwrap_or(4).max(4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_width_has_header_minimum() {
        assert_eq!(name_width(std::iter::empty()), 4);
        assert_eq!(name_width(["Al", "Bo"].into_iter()), 4);
        assert_eq!(name_width(["Alexandra", "Bo"].into_iter()), 9);
    }

    #[test]
    fn test_count_object_uses_label_as_key() {
        assert_eq!(count_object("deleted_players", 6), serde_json::json!({"deleted_players": 6}));
        assert_eq!(count_object("players", 0), serde_json::json!({"players": 0}));
    }

    #[test]
    fn test_printer_handles_every_shape_in_both_formats() {
        let standings = vec![Standing { id: 1, name: "Ann".into(), wins: 1, matches: 1 }];
        let pairings = vec![Pairing { id1: 1, name1: "Ann".into(), id2: 2, name2: "Ben".into() }];

        for format in [OutputFormat::Table, OutputFormat::Json] {
            let printer = Printer::new(format);
            printer.standings(&standings).unwrap();
            printer.standings(&[]).unwrap();
            printer.pairings(&pairings).unwrap();
            printer.pairings(&[]).unwrap();
            printer.count("deleted_matches", 3).unwrap();
        }
    }

    #[test]
    fn test_pairing_serializes_with_flat_fields() {
        let pairing = Pairing {
            id1: 1,
            name1: "Alice".to_string(),
            id2: 3,
            name2: "Carol".to_string(),
        };

        let json = serde_json::to_value(&pairing).unwrap();

        assert_eq!(json, serde_json::json!({"id1": 1, "name1": "Alice", "id2": 3, "name2": "Carol"}));
    }
}
