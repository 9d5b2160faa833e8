pub mod cli;
pub mod config;
pub mod database;
pub mod output;
pub mod services;
pub mod swiss;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::Cli;

use crate::cli::{Command, OutputFormat};
use crate::config::settings::AppConfig;
use crate::output::Printer;
pub use crate::services::TournamentService;

pub use crate::swiss::{Pairing, PlayerId, Standing};

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn handle_command(command: &Command, database: Option<String>, format: OutputFormat) -> Result<()> {
    let config = AppConfig::new().with_database_path(database);
    let open = || TournamentService::new(&config);
    let printer = Printer::new(format);

    match command {
        Command::Init => open()?.reset(),
        Command::Register { name } => printer.player(&open()?.register_player(name)?),
        Command::Report { winner, loser } => printer.reported(&open()?.report_match(*winner, *loser)?),
        Command::Count => printer.count("players", open()?.count_players()?),
        Command::Standings => printer.standings(&open()?.player_standings()?),
        Command::Pairings => printer.pairings(&open()?.swiss_pairings()?),
        Command::Players => printer.players(&open()?.list_players()?),
        Command::Matches => printer.matches(&open()?.list_matches()?),
        Command::ClearMatches => printer.count("deleted_matches", open()?.delete_matches()? as i64),
        Command::ClearPlayers => printer.count("deleted_players", open()?.delete_players()? as i64),
        Command::Completions { shell } => handle_completions(*shell),
    }
}

fn handle_completions(shell: clap_complete::Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn run(database: &str, command: Command, format: OutputFormat) -> Result<()> {
        handle_command(&command, Some(database.to_string()), format)
    }

    #[test]
    fn test_commands_drive_a_full_round() {
        let temp = TempDir::new().unwrap();
        let db = temp.path().join("tournament.db").to_string_lossy().into_owned();

        for name in ["Alice", "Bob", "Carol", "Dave"] {
            run(&db, Command::Register { name: name.to_string() }, OutputFormat::Table).unwrap();
        }
        run(&db, Command::Report { winner: 1, loser: 2 }, OutputFormat::Json).unwrap();
        run(&db, Command::Report { winner: 3, loser: 4 }, OutputFormat::Table).unwrap();

        for format in [OutputFormat::Table, OutputFormat::Json] {
            run(&db, Command::Standings, format).unwrap();
            run(&db, Command::Pairings, format).unwrap();
            run(&db, Command::Count, format).unwrap();
        }

        let config = AppConfig::default().with_database_path(Some(db.clone()));
        let service = TournamentService::new(&config).unwrap();
        let pairs: Vec<_> = service
            .swiss_pairings()
            .unwrap()
            .iter()
            .map(|p| (p.id1, p.id2))
            .collect();
        assert_eq!(pairs, vec![(1, 3), (2, 4)]);

        run(&db, Command::ClearPlayers, OutputFormat::Json).unwrap();
        assert_eq!(service.count_players().unwrap(), 0);
        assert!(service.list_matches().unwrap().is_empty());
    }

    #[test]
    fn test_command_errors_reach_the_caller() {
        let temp = TempDir::new().unwrap();
        let db = temp.path().join("tournament.db").to_string_lossy().into_owned();

        run(&db, Command::Register { name: "Alice".to_string() }, OutputFormat::Table).unwrap();

        assert!(run(&db, Command::Report { winner: 1, loser: 7 }, OutputFormat::Table).is_err());
        assert!(run(&db, Command::Pairings, OutputFormat::Json).is_err());
    }
}
