use anyhow::{bail, Result};

use super::types::{Pairing, Standing};

/// Pair each player with their neighbour in the standings.
///
/// Ranks 1 and 2 meet, then 3 and 4, and so on, so opponents have equal or
/// nearly equal records. The output keeps rank order. An odd field has no
/// valid pairing because byes are not assigned.
pub fn swiss_pairings(standings: &[Standing]) -> Result<Vec<Pairing>> {
    if standings.len() % 2 != 0 {
        bail!(
            "Cannot pair an odd number of players ({}); register or remove a player first",
            standings.len()
        );
    }

    let pairings = standings
        .chunks_exact(2)
        .map(|pair| Pairing::from_standings(&pair[0], &pair[1]))
        .collect();

    Ok(pairings)
}
