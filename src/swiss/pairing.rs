use log::info;

use super::types::{Bye, OddPlayerPolicy, Pairing, RoundPairings, StandingsEntry};

/// Pair adjacent entries of the ranked standings: 1st with 2nd, 3rd with 4th.
///
/// With an odd field the lowest-ranked entry is left unpaired. Match history
/// is not consulted, so rematches are possible.
pub fn swiss_pairings(standings: &[StandingsEntry]) -> Vec<Pairing> {
    standings
        .chunks_exact(2)
        .map(|pair| Pairing::between(&pair[0], &pair[1]))
        .collect()
}

/// Pair the next round and resolve the odd-field leftover per `policy`
pub fn pair_round(standings: &[StandingsEntry], policy: OddPlayerPolicy) -> RoundPairings {
    let pairings = swiss_pairings(standings);
    let bye = unpaired_entry(standings).and_then(|entry| resolve_leftover(entry, policy));

    RoundPairings { pairings, bye }
}

fn unpaired_entry(standings: &[StandingsEntry]) -> Option<&StandingsEntry> {
    if standings.len() % 2 == 1 {
        standings.last()
    } else {
        None
    }
}

fn resolve_leftover(entry: &StandingsEntry, policy: OddPlayerPolicy) -> Option<Bye> {
    match policy {
        OddPlayerPolicy::Drop => {
            info!(
                "Odd field: player {} ({}) is not paired this round",
                entry.id, entry.name
            );
            None
        }
        OddPlayerPolicy::Bye => Some(Bye {
            id: entry.id,
            name: entry.name.clone(),
        }),
    }
}
