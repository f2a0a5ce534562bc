use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::SolverError;

/// A net-score transposition table keyed by canonical fingerprint.
///
/// Owned solely by the [`crate::solver::Solver`] instance that built it;
/// its lifetime is one `solve` invocation unless the caller opts into
/// persistence via [`Memo::load`]/[`Memo::save`].
#[derive(Clone, Debug, Default)]
pub struct Memo {
    scores: HashMap<String, i64>,
}

impl Memo {
    /// An empty memo.
    pub fn new() -> Self {
        Memo {
            scores: HashMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<i64> {
        self.scores.get(key).copied()
    }

    pub fn insert(&mut self, key: String, score: i64) {
        self.scores.insert(key, score);
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Loads a memo from a `fingerprint,net_score` text file. A missing
    /// file is not an error: the memo simply starts empty, per
    /// `spec.md` §7.
    pub fn load(path: &Path) -> Result<Self, SolverError> {
        let mut memo = Memo::new();
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(memo),
            Err(err) => {
                return Err(SolverError::InvalidInput {
                    reason: format!("could not read memo file {}: {err}", path.display()),
                });
            }
        };
        for (line_no, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let (key, value) = line.split_once(',').ok_or_else(|| SolverError::InvalidInput {
                reason: format!("memo file line {}: expected `key,value`", line_no + 1),
            })?;
            let score: i64 = value.trim().parse().map_err(|_| SolverError::InvalidInput {
                reason: format!("memo file line {}: `{value}` is not an integer", line_no + 1),
            })?;
            memo.insert(key.to_string(), score);
        }
        Ok(memo)
    }

    /// Rewrites the memo file with one `fingerprint,net_score` line per
    /// entry.
    pub fn save(&self, path: &Path) -> Result<(), SolverError> {
        let mut contents = String::new();
        for (key, value) in &self.scores {
            contents.push_str(key);
            contents.push(',');
            contents.push_str(&value.to_string());
            contents.push('\n');
        }
        fs::write(path, contents).map_err(|err| SolverError::InvalidInput {
            reason: format!("could not write memo file {}: {err}", path.display()),
        })
    }
}
