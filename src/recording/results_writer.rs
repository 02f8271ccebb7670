//! One JSON line per finished game, one file per benchmark setting.

use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::arena::GameSettings;
use crate::recording::game_record::GameResult;

pub struct ResultsWriter {
    base_dir: PathBuf,
}

impl ResultsWriter {
    pub fn new<P: AsRef<Path>>(base_dir: P) -> std::io::Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn path_for(&self, settings: &GameSettings) -> PathBuf {
        self.base_dir.join(settings.results_file_name())
    }

    /// Appends `result` to its setting's file and returns that file's path.
    pub fn append(&self, result: &GameResult) -> crate::Result<PathBuf> {
        let path = self.path_for(&result.settings);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, result)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(path)
    }
}

/// Reads every game stored in a results file. Blank lines are skipped.
pub fn read_results<P: AsRef<Path>>(path: P) -> crate::Result<Vec<GameResult>> {
    let reader = BufReader::new(fs::File::open(path)?);
    let mut results = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        results.push(serde_json::from_str(&line)?);
    }
    Ok(results)
}
