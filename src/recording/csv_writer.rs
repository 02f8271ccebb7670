//! Average-profit summary over the stored benchmark results.
//!
//! Every results file is one setting; its row holds the mean final stack of
//! the tracked bot minus the starting stack.

use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::recording::results_writer::read_results;

/// Setting encoded in a results file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingKey {
    pub opponent: String,
    pub rounds: u32,
    pub others: usize,
    pub playouts: u32,
}

impl SettingKey {
    /// Parses `{opponent}_{rounds}-rounds_{others}-others_{playouts}-playouts.json`.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let stem = name.strip_suffix("-playouts.json")?;
        let mut parts = stem.split('_');
        let opponent = parts.next()?.to_string();
        let rounds = parts.next()?.strip_suffix("-rounds")?.parse().ok()?;
        let others = parts.next()?.strip_suffix("-others")?.parse().ok()?;
        let playouts = parts.next()?.parse().ok()?;
        if parts.next().is_some() || opponent.is_empty() {
            return None;
        }
        Some(Self {
            opponent,
            rounds,
            others,
            playouts,
        })
    }
}

/// Restricts a summary to some settings; `None` matches anything.
#[derive(Debug, Clone, Default)]
pub struct SummaryFilter {
    pub opponent: Option<String>,
    pub rounds: Option<u32>,
    pub others: Option<usize>,
    pub playouts: Option<u32>,
}

impl SummaryFilter {
    pub fn matches(&self, key: &SettingKey) -> bool {
        self.opponent.as_ref().is_none_or(|o| *o == key.opponent)
            && self.rounds.is_none_or(|r| r == key.rounds)
            && self.others.is_none_or(|o| o == key.others)
            && self.playouts.is_none_or(|p| p == key.playouts)
    }
}

/// One CSV row. Columns follow the field order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfitRow {
    pub opponent: String,
    pub rounds: u32,
    pub others: usize,
    pub playouts: u32,
    pub games: usize,
    pub average_profit: f64,
}

impl ProfitRow {
    pub fn new(key: SettingKey, games: usize, average_profit: f64) -> Self {
        Self {
            opponent: key.opponent,
            rounds: key.rounds,
            others: key.others,
            playouts: key.playouts,
            games,
            average_profit,
        }
    }

    fn sort_key(&self) -> (&str, u32, usize, u32) {
        (&self.opponent, self.rounds, self.others, self.playouts)
    }
}

/// Mean profit of `bot_name` over the games of `path`. A game the bot is
/// missing from counts as a bust.
pub fn average_profit<P: AsRef<Path>>(path: P, bot_name: &str) -> crate::Result<Option<(usize, f64)>> {
    let games = read_results(path)?;
    if games.is_empty() {
        return Ok(None);
    }
    let total: f64 = games
        .iter()
        .map(|g| g.stack_of(bot_name).unwrap_or(0) as f64 - g.settings.table.initial_stack as f64)
        .sum();
    Ok(Some((games.len(), total / games.len() as f64)))
}

/// One row per matching results file in `results_dir`, sorted by setting.
pub fn summarize_results<P: AsRef<Path>>(
    results_dir: P,
    bot_name: &str,
    filter: &SummaryFilter,
) -> crate::Result<Vec<ProfitRow>> {
    let mut rows = Vec::new();
    for entry in fs::read_dir(results_dir)? {
        let path = entry?.path();
        let Some(key) = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(SettingKey::from_file_name)
        else {
            continue;
        };
        if !filter.matches(&key) {
            continue;
        }
        match average_profit(&path, bot_name)? {
            Some((games, average_profit)) => rows.push(ProfitRow::new(key, games, average_profit)),
            None => log::warn!("skipping empty results file {}", path.display()),
        }
    }
    rows.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    Ok(rows)
}

pub fn write_summary_csv<P: AsRef<Path>>(path: P, rows: &[ProfitRow]) -> crate::Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }
    let mut wtr = csv::Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::GameSettings;
    use crate::policy::PolicyKind;
    use crate::recording::{GameResult, ResultsWriter};
    use std::collections::BTreeMap;
    use tempfile::tempdir;

    fn store(writer: &ResultsWriter, settings: &GameSettings, stacks: &[u32]) -> crate::Result<()> {
        for &stack in stacks {
            let result = GameResult::new(
                settings.clone(),
                0,
                settings.table.max_rounds,
                BTreeMap::from([("Stonks".to_string(), stack)]),
            );
            writer.append(&result)?;
        }
        Ok(())
    }

    #[test]
    fn test_file_name_parsing() {
        let key = SettingKey::from_file_name("HonestPlayer_15-rounds_5-others_1000-playouts.json").unwrap();
        assert_eq!(key.opponent, "HonestPlayer");
        assert_eq!((key.rounds, key.others, key.playouts), (15, 5, 1000));

        assert!(SettingKey::from_file_name("summary.csv").is_none());
        assert!(SettingKey::from_file_name("Random_x-rounds_1-others_10-playouts.json").is_none());
    }

    #[test]
    fn test_summary_rows() -> crate::Result<()> {
        let dir = tempdir()?;
        let writer = ResultsWriter::new(dir.path())?;
        let random = GameSettings::new(PolicyKind::Random, 1, 5, 100);
        let honest = GameSettings::new(PolicyKind::Honest, 1, 5, 100);
        store(&writer, &random, &[300, 200, 160])?;
        store(&writer, &honest, &[100])?;
        fs::write(dir.path().join("notes.txt"), "ignored")?;

        let rows = summarize_results(dir.path(), "Stonks", &SummaryFilter::default())?;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].opponent, "HonestPlayer");
        assert_eq!(rows[0].average_profit, -100.0);
        assert_eq!(rows[1].games, 3);
        assert!((rows[1].average_profit - 20.0).abs() < 1e-9);

        let only_random = SummaryFilter {
            opponent: Some("RandomPlayer".to_string()),
            ..SummaryFilter::default()
        };
        assert_eq!(summarize_results(dir.path(), "Stonks", &only_random)?.len(), 1);
        Ok(())
    }

    #[test]
    fn test_write_csv() -> crate::Result<()> {
        let dir = tempdir()?;
        let key = SettingKey::from_file_name("RandomPlayer_10-rounds_3-others_1000-playouts.json").unwrap();
        let rows = vec![ProfitRow::new(key, 4, 12.5)];
        let path = dir.path().join("csv").join("summary.csv");
        write_summary_csv(&path, &rows)?;

        let text = fs::read_to_string(&path)?;
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("opponent,rounds,others,playouts,games,average_profit"));
        assert_eq!(lines.next(), Some("RandomPlayer,10,3,1000,4,12.5"));
        Ok(())
    }
}
