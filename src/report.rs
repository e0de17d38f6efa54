use colored::Colorize;

use crate::swiss::{RoundPairings, StandingsEntry};

/// Render standings as an aligned text table
pub fn format_standings(standings: &[StandingsEntry], with_draws: bool) -> String {
    let mut lines = vec![standings_header(with_draws)];

    for (idx, entry) in standings.iter().enumerate() {
        lines.push(standings_row(idx + 1, entry, with_draws));
    }

    lines.join("\n")
}

fn standings_header(with_draws: bool) -> String {
    let mut header = format!("{:>4}  {:>4}  {:<24} {:>5} {:>5}", "RANK", "ID", "NAME", "WINS", "GAMES");
    if with_draws {
        header.push_str(&format!(" {:>5}", "DRAWS"));
    }
    header.as_str().bold().to_string()
}

fn standings_row(rank: usize, entry: &StandingsEntry, with_draws: bool) -> String {
    let mut row = format!(
        "{:>4}  {:>4}  {:<24} {:>5} {:>5}",
        rank, entry.id, entry.name, entry.wins, entry.games
    );
    if with_draws {
        row.push_str(&format!(" {:>5}", entry.draws));
    }
    row
}

/// Render next-round pairings, one match per line
pub fn format_pairings(round: &RoundPairings) -> String {
    let header = format!("{:>4}  {:<30} {:<30}", "#", "PLAYER 1", "PLAYER 2");
    let mut lines = vec![header.as_str().bold().to_string()];

    for (idx, pairing) in round.pairings.iter().enumerate() {
        let first = format!("{} ({})", pairing.name1, pairing.id1);
        let second = format!("{} ({})", pairing.name2, pairing.id2);
        lines.push(format!("{:>4}  {:<30} {:<30}", idx + 1, first, second));
    }

    if let Some(bye) = &round.bye {
        lines.push(format!("{} {} ({})", "bye:".yellow(), bye.name, bye.id));
    }

    lines.join("\n")
}
