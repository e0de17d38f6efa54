use std::cmp::Ordering;

use log::warn;

use crate::domain::{Match, Player, PlayerId, TournamentError};

use super::types::{LedgerPolicy, StandingsEntry, Tally, TallyMap};

/// Rank every registered player by wins, ties broken by ascending id.
///
/// Draws count towards `games` and `draws` but never towards `wins`.
pub fn calculate_standings(
    players: &[Player],
    matches: &[Match],
    policy: LedgerPolicy,
) -> Result<Vec<StandingsEntry>, TournamentError> {
    let mut tallies = initialize_tallies(players);

    for game in matches {
        match validate_match(game, &tallies) {
            Ok(()) => record_match(&mut tallies, game),
            Err(e) => handle_invalid_match(e, game, policy)?,
        }
    }

    let mut standings = build_entries(players, &tallies);
    sort_standings(&mut standings);
    Ok(standings)
}

fn initialize_tallies(players: &[Player]) -> TallyMap {
    players
        .iter()
        .map(|p| (p.id, Tally::default()))
        .collect()
}

fn validate_match(game: &Match, tallies: &TallyMap) -> Result<(), TournamentError> {
    if game.winner_id == game.loser_id {
        return Err(TournamentError::InvalidMatch {
            player_id: game.winner_id,
        });
    }

    ensure_registered(game.winner_id, tallies)?;
    ensure_registered(game.loser_id, tallies)
}

fn ensure_registered(player_id: PlayerId, tallies: &TallyMap) -> Result<(), TournamentError> {
    if tallies.contains_key(&player_id) {
        Ok(())
    } else {
        Err(TournamentError::UnknownPlayer(player_id))
    }
}

fn handle_invalid_match(
    error: TournamentError,
    game: &Match,
    policy: LedgerPolicy,
) -> Result<(), TournamentError> {
    match policy {
        LedgerPolicy::Reject => Err(error),
        LedgerPolicy::Skip => {
            warn!(
                "Skipping ledger entry {} vs {}: {}",
                game.winner_id, game.loser_id, error
            );
            Ok(())
        }
    }
}

fn record_match(tallies: &mut TallyMap, game: &Match) {
    for player_id in [game.winner_id, game.loser_id] {
        if let Some(tally) = tallies.get_mut(&player_id) {
            tally.games += 1;
            if game.is_draw {
                tally.draws += 1;
            } else if game.is_win_for(player_id) {
                tally.wins += 1;
            }
        }
    }
}

fn build_entries(players: &[Player], tallies: &TallyMap) -> Vec<StandingsEntry> {
    players
        .iter()
        .map(|p| build_single_entry(p, tallies))
        .collect()
}

fn build_single_entry(player: &Player, tallies: &TallyMap) -> StandingsEntry {
    let tally = tallies.get(&player.id).copied().unwrap_or_default();

    StandingsEntry {
        id: player.id,
        name: player.name.clone(),
        wins: tally.wins,
        games: tally.games,
        draws: tally.draws,
    }
}

fn sort_standings(standings: &mut [StandingsEntry]) {
    standings.sort_by(compare_entries);
}

fn compare_entries(a: &StandingsEntry, b: &StandingsEntry) -> Ordering {
    b.wins.cmp(&a.wins).then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_a_players() -> Vec<Player> {
        vec![
            Player::new(1, "Tom"),
            Player::new(2, "Dick"),
            Player::new(3, "Harry"),
            Player::new(4, "Bob"),
        ]
    }

    fn scenario_a_matches() -> Vec<Match> {
        vec![
            Match::won(1, 2),
            Match::won(3, 4),
            Match::won(2, 3),
            Match::drawn(3, 1),
        ]
    }

    fn find(standings: &[StandingsEntry], id: PlayerId) -> &StandingsEntry {
        standings.iter().find(|e| e.id == id).unwrap()
    }

    #[test]
    fn test_scenario_a_counts() {
        let standings = calculate_standings(
            &scenario_a_players(),
            &scenario_a_matches(),
            LedgerPolicy::Reject,
        )
        .unwrap();

        let wins: Vec<u32> = (1..=4).map(|id| find(&standings, id).wins).collect();
        let games: Vec<u32> = (1..=4).map(|id| find(&standings, id).games).collect();

        assert_eq!(wins, vec![1, 1, 1, 0]);
        assert_eq!(games, vec![2, 2, 3, 1]);
        assert_eq!(find(&standings, 1).draws, 1);
        assert_eq!(find(&standings, 3).draws, 1);
        assert_eq!(find(&standings, 2).draws, 0);
    }

    #[test]
    fn test_scenario_a_order_breaks_ties_by_id() {
        let standings = calculate_standings(
            &scenario_a_players(),
            &scenario_a_matches(),
            LedgerPolicy::Reject,
        )
        .unwrap();

        let order: Vec<PlayerId> = standings.iter().map(|e| e.id).collect();
        assert_eq!(order, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_field_yields_empty_standings() {
        let standings = calculate_standings(&[], &[], LedgerPolicy::Reject).unwrap();
        assert!(standings.is_empty());
    }

    #[test]
    fn test_players_without_matches_are_listed() {
        let players = vec![Player::new(7, "Ann"), Player::new(3, "Eve")];
        let standings = calculate_standings(&players, &[], LedgerPolicy::Reject).unwrap();

        assert_eq!(standings.len(), 2);
        assert_eq!(standings[0].id, 3);
        assert_eq!(standings[1].id, 7);
        assert!(standings.iter().all(|e| e.wins == 0 && e.games == 0));
    }

    #[test]
    fn test_draws_award_no_wins() {
        let players = vec![Player::new(1, "A"), Player::new(2, "B")];
        let matches = vec![Match::drawn(2, 1), Match::drawn(1, 2)];

        let standings = calculate_standings(&players, &matches, LedgerPolicy::Reject).unwrap();

        assert!(standings.iter().all(|e| e.wins == 0));
        assert!(standings.iter().all(|e| e.games == 2 && e.draws == 2));
    }

    #[test]
    fn test_more_wins_rank_higher_regardless_of_id() {
        let players = vec![Player::new(1, "A"), Player::new(2, "B"), Player::new(3, "C")];
        let matches = vec![Match::won(3, 1), Match::won(3, 2), Match::won(2, 1)];

        let standings = calculate_standings(&players, &matches, LedgerPolicy::Reject).unwrap();
        let order: Vec<PlayerId> = standings.iter().map(|e| e.id).collect();

        assert_eq!(order, vec![3, 2, 1]);
    }

    #[test]
    fn test_games_sum_to_twice_match_count() {
        let players: Vec<Player> = (1..=6).map(|id| Player::new(id, format!("P{id}"))).collect();
        let matches = vec![
            Match::won(1, 2),
            Match::won(3, 4),
            Match::drawn(5, 6),
            Match::won(1, 3),
            Match::drawn(2, 6),
            Match::won(4, 5),
            Match::won(1, 6),
        ];

        let standings = calculate_standings(&players, &matches, LedgerPolicy::Reject).unwrap();
        let total_games: u32 = standings.iter().map(|e| e.games).sum();

        assert_eq!(total_games as usize, 2 * matches.len());
    }

    #[test]
    fn test_ranking_respects_win_counts() {
        let players: Vec<Player> = (1..=5).map(|id| Player::new(id, format!("P{id}"))).collect();
        let matches = vec![
            Match::won(5, 1),
            Match::won(5, 2),
            Match::won(4, 3),
            Match::won(2, 1),
            Match::drawn(3, 4),
        ];

        let standings = calculate_standings(&players, &matches, LedgerPolicy::Reject).unwrap();

        for (i, a) in standings.iter().enumerate() {
            for b in &standings[i + 1..] {
                assert!(a.wins >= b.wins, "{a:?} ranked before {b:?}");
            }
        }
    }

    #[test]
    fn test_standings_are_idempotent() {
        let players = scenario_a_players();
        let matches = scenario_a_matches();

        let first = calculate_standings(&players, &matches, LedgerPolicy::Reject).unwrap();
        let second = calculate_standings(&players, &matches, LedgerPolicy::Reject).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_self_match_is_rejected() {
        let players = vec![Player::new(1, "A"), Player::new(2, "B")];
        let matches = vec![Match::won(1, 2), Match::won(2, 2)];

        let result = calculate_standings(&players, &matches, LedgerPolicy::Reject);

        assert_eq!(result, Err(TournamentError::InvalidMatch { player_id: 2 }));
    }

    #[test]
    fn test_dangling_player_is_rejected() {
        let players = vec![Player::new(1, "A")];
        let matches = vec![Match::won(1, 9)];

        let result = calculate_standings(&players, &matches, LedgerPolicy::Reject);

        assert_eq!(result, Err(TournamentError::UnknownPlayer(9)));
    }

    #[test]
    fn test_skip_policy_excludes_invalid_entries() {
        let players = vec![Player::new(1, "A"), Player::new(2, "B")];
        let matches = vec![Match::won(1, 2), Match::won(2, 2), Match::won(2, 9)];

        let standings = calculate_standings(&players, &matches, LedgerPolicy::Skip).unwrap();

        assert_eq!(find(&standings, 1).wins, 1);
        assert_eq!(find(&standings, 1).games, 1);
        assert_eq!(find(&standings, 2).wins, 0);
        assert_eq!(find(&standings, 2).games, 1);
    }
}
