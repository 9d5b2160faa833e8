use std::collections::HashMap;

use super::types::{PlayerId, Standing};
use crate::database::{Match, Player};

#[derive(Default)]
struct Record {
    wins: i64,
    matches: i64,
}

/// Rank players by wins, most first, breaking ties by id.
///
/// This is the in-memory counterpart of the `playerStandings` view and yields
/// the same ordering. Players who have not played yet appear with a 0-0 record.
pub fn rank_standings(players: &[Player], matches: &[Match]) -> Vec<Standing> {
    let records = tally_records(matches);

    let mut standings: Vec<Standing> = players
        .iter()
        .map(|player| {
            let record = records.get(&player.id);
            Standing {
                id: player.id,
                name: player.name.clone(),
                wins: record.map_or(0, |r| r.wins),
                matches: record.map_or(0, |r| r.matches),
            }
        })
        .collect();

    sort_standings(&mut standings);
    standings
}

fn tally_records(matches: &[Match]) -> HashMap<PlayerId, Record> {
    let mut records: HashMap<PlayerId, Record> = HashMap::new();

    for m in matches {
        let winner = records.entry(m.winner_id).or_default();
        winner.wins += 1;
        winner.matches += 1;
        records.entry(m.loser_id).or_default().matches += 1;
    }

    records
}

fn sort_standings(standings: &mut [Standing]) {
    standings.sort_by(|a, b| b.wins.cmp(&a.wins).then(a.id.cmp(&b.id)));
}
