//! Named conflict policies for bulk inserts.
//!
//! Teams are inserted once and never touched again. Games are inserted in
//! full, but a repeated fetch only rewrites the columns that change as a game
//! progresses; season, week, date and matchup keep their first-seen values.

/// What to do when an inserted row collides on its natural key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnConflict {
    DoNothing {
        key: &'static str,
    },
    /// Overwrite only `columns` from the incoming row, and stamp `touch`
    /// with the current time when given.
    UpdateColumns {
        key: &'static str,
        columns: &'static [&'static str],
        touch: Option<&'static str>,
    },
}

/// A table, its insert columns and its conflict policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpsertPolicy {
    pub table: &'static str,
    pub columns: &'static [&'static str],
    pub on_conflict: OnConflict,
}

pub const TEAM_UPSERT: UpsertPolicy = UpsertPolicy {
    table: "nfl_teams",
    columns: &["team_name", "team_abbr", "conference", "division"],
    on_conflict: OnConflict::DoNothing { key: "team_abbr" },
};

pub const GAME_UPSERT: UpsertPolicy = UpsertPolicy {
    table: "nfl_games",
    columns: &[
        "game_id",
        "season",
        "week",
        "game_date",
        "home_team",
        "away_team",
        "home_score",
        "away_score",
        "status",
    ],
    on_conflict: OnConflict::UpdateColumns {
        key: "game_id",
        columns: &["home_score", "away_score", "status"],
        touch: Some("updated_at"),
    },
};

impl UpsertPolicy {
    /// Single-row `INSERT ... ON CONFLICT` statement with positional parameters.
    pub fn insert_sql(&self) -> String {
        let placeholders = vec!["?"; self.columns.len()].join(", ");
        let mut sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table,
            self.columns.join(", "),
            placeholders
        );

        match self.on_conflict {
            OnConflict::DoNothing { key } => {
                sql.push_str(&format!(" ON CONFLICT ({key}) DO NOTHING"));
            }
            OnConflict::UpdateColumns {
                key,
                columns,
                touch,
            } => {
                let mut assignments: Vec<String> = columns
                    .iter()
                    .map(|c| format!("{c} = excluded.{c}"))
                    .collect();
                if let Some(t) = touch {
                    assignments.push(format!("{t} = CURRENT_TIMESTAMP"));
                }
                sql.push_str(&format!(
                    " ON CONFLICT ({key}) DO UPDATE SET {}",
                    assignments.join(", ")
                ));
            }
        }

        sql
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_policy_does_nothing_on_abbr() {
        let sql = TEAM_UPSERT.insert_sql();
        assert_eq!(
            sql,
            "INSERT INTO nfl_teams (team_name, team_abbr, conference, division) \
             VALUES (?, ?, ?, ?) ON CONFLICT (team_abbr) DO NOTHING"
        );
    }

    #[test]
    fn test_game_policy_updates_only_scores_and_status() {
        let sql = GAME_UPSERT.insert_sql();
        assert!(sql.starts_with("INSERT INTO nfl_games (game_id, season, week,"));
        assert!(sql.contains("ON CONFLICT (game_id) DO UPDATE SET"));

        let update = sql.split("DO UPDATE SET").nth(1).unwrap();
        assert!(update.contains("home_score = excluded.home_score"));
        assert!(update.contains("away_score = excluded.away_score"));
        assert!(update.contains("status = excluded.status"));
        assert!(update.contains("updated_at = CURRENT_TIMESTAMP"));

        for frozen in ["season", "week", "game_date", "home_team", "away_team"] {
            assert!(
                !update.contains(&format!("{frozen} =")),
                "{frozen} must not be updated on conflict"
            );
        }
    }

    #[test]
    fn test_placeholder_count_matches_columns() {
        let sql = GAME_UPSERT.insert_sql();
        assert_eq!(sql.matches('?').count(), GAME_UPSERT.columns.len());
    }
}
