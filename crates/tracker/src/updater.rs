//! Portfolio update pipeline.

use folio_core::{experience_table, ExperienceTracker, SkillDisplay};
use folio_storage::{PortfolioStore, Result};
use tracing::info;

use crate::generator::generate_trackers;
use crate::skills::convert_to_skills;

/// The derived views written on a successful run, returned so callers
/// can print a summary.
#[derive(Debug, Clone)]
pub struct UpdateReport {
    /// Per-category trackers written to `experience_trackers`
    pub trackers: Vec<ExperienceTracker>,

    /// Flattened list written to `skills`
    pub skills: Vec<SkillDisplay>,
}

/// Runs the load -> derive -> save pipeline against a store.
pub struct PortfolioUpdater<S: PortfolioStore> {
    store: S,
}

impl<S: PortfolioStore> PortfolioUpdater<S> {
    /// Create an updater over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Derive both views from the static table, overwrite the
    /// `experience_trackers` and `skills` fields, and write the document
    /// back. Every other field in the document is left untouched. Errors
    /// propagate; a failed run writes nothing useful and is simply rerun.
    pub async fn run(&mut self) -> Result<UpdateReport> {
        let trackers = generate_trackers(&experience_table());
        let skills = convert_to_skills(&trackers);

        let mut document = self.store.load().await?;
        document.set_field("experience_trackers", &trackers)?;
        document.set_field("skills", &skills)?;
        self.store.save(&document).await?;

        info!(
            categories = trackers.len(),
            skills = skills.len(),
            "portfolio experience updated"
        );

        Ok(UpdateReport { trackers, skills })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_storage::JsonPortfolioStore;
    use serde_json::Value;

    #[tokio::test]
    async fn populates_fields_and_preserves_others() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.json");
        std::fs::write(&path, r#"{"other_field": 1}"#).unwrap();

        let mut updater = PortfolioUpdater::new(JsonPortfolioStore::new(&path));
        let report = updater.run().await.unwrap();
        assert_eq!(report.trackers.len(), 2);

        let written: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["other_field"], 1);

        let verilog = &written["experience_trackers"][0]["experiences"][0];
        assert_eq!(verilog["name"], "Verilog/SystemVerilog");
        assert_eq!(verilog["total_months"], 19);
        assert_eq!(verilog["display"], "1 year 7 months");

        assert_eq!(written["skills"][0]["name"], "Verilog/SystemVerilog");
        assert_eq!(written["skills"][0]["proficiency"], 76);
    }

    #[tokio::test]
    async fn running_twice_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.json");
        std::fs::write(&path, r#"{"name": "Someone"}"#).unwrap();

        let mut updater = PortfolioUpdater::new(JsonPortfolioStore::new(&path));
        updater.run().await.unwrap();
        let first = std::fs::read_to_string(&path).unwrap();

        let mut updater = PortfolioUpdater::new(JsonPortfolioStore::new(&path));
        updater.run().await.unwrap();
        let second = std::fs::read_to_string(&path).unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn missing_file_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonPortfolioStore::new(dir.path().join("absent.json"));

        let err = PortfolioUpdater::new(store).run().await.unwrap_err();
        assert!(matches!(err, folio_storage::StorageError::NotFound(_)));
    }
}
