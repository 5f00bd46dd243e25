use super::params::Params;
use crate::Score;
use serde::Deserialize;
use serde::Serialize;

/// the artifact an optimization run leaves behind: the best-found
/// configuration tagged with the search method and the fitness it
/// achieved. loaded back by the serving configuration at deploy time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub method: String,
    pub fitness: Score,
    pub params: Params,
    pub timestamp: u64,
}

impl From<(&str, Score, Params)> for Report {
    fn from((method, fitness, params): (&str, Score, Params)) -> Self {
        Self {
            method: method.to_string(),
            fitness,
            params,
            timestamp: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .expect("time moves slow")
                .as_secs(),
        }
    }
}

impl Report {
    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        log::info!("{:<32}{:<32}", "saving      report", path);
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn load(path: &str) -> anyhow::Result<Self> {
        log::info!("{:<32}{:<32}", "loading     report", path);
        Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?)
    }
}
