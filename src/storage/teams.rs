//! The 32 league teams.

use super::models::TeamSeed;
use crate::cli::types::league::{
    Conference::{self, AFC, NFC},
    Division::{self, East, North, South, West},
};

const fn team(
    name: &'static str,
    abbr: &'static str,
    conference: Conference,
    division: Division,
) -> TeamSeed {
    TeamSeed {
        name,
        abbr,
        conference,
        division,
    }
}

pub const NFL_TEAMS: [TeamSeed; 32] = [
    team("Arizona Cardinals", "ARI", NFC, West),
    team("Atlanta Falcons", "ATL", NFC, South),
    team("Baltimore Ravens", "BAL", AFC, North),
    team("Buffalo Bills", "BUF", AFC, East),
    team("Carolina Panthers", "CAR", NFC, South),
    team("Chicago Bears", "CHI", NFC, North),
    team("Cincinnati Bengals", "CIN", AFC, North),
    team("Cleveland Browns", "CLE", AFC, North),
    team("Dallas Cowboys", "DAL", NFC, East),
    team("Denver Broncos", "DEN", AFC, West),
    team("Detroit Lions", "DET", NFC, North),
    team("Green Bay Packers", "GB", NFC, North),
    team("Houston Texans", "HOU", AFC, South),
    team("Indianapolis Colts", "IND", AFC, South),
    team("Jacksonville Jaguars", "JAX", AFC, South),
    team("Kansas City Chiefs", "KC", AFC, West),
    team("Las Vegas Raiders", "LV", AFC, West),
    team("Los Angeles Chargers", "LAC", AFC, West),
    team("Los Angeles Rams", "LAR", NFC, West),
    team("Miami Dolphins", "MIA", AFC, East),
    team("Minnesota Vikings", "MIN", NFC, North),
    team("New England Patriots", "NE", AFC, East),
    team("New Orleans Saints", "NO", NFC, South),
    team("New York Giants", "NYG", NFC, East),
    team("New York Jets", "NYJ", AFC, East),
    team("Philadelphia Eagles", "PHI", NFC, East),
    team("Pittsburgh Steelers", "PIT", AFC, North),
    team("San Francisco 49ers", "SF", NFC, West),
    team("Seattle Seahawks", "SEA", NFC, West),
    team("Tampa Bay Buccaneers", "TB", NFC, South),
    team("Tennessee Titans", "TEN", AFC, South),
    team("Washington Commanders", "WAS", NFC, East),
];
