use crate::config::StageConfig;

/// Default stage vocabulary. Deployments with a different workflow override
/// it via `[[stages]]` entries in the config file.
pub const DEFAULT_STAGES: &[(&str, i32)] = &[
    ("Inquiry", 0),
    ("Booked", 20),
    ("Post-Production", 45),
    ("Proofing", 70),
    ("Delivered", 100),
];

pub fn default_stages() -> Vec<StageConfig> {
    DEFAULT_STAGES
        .iter()
        .map(|&(name, progress)| StageConfig {
            name: name.to_string(),
            progress,
        })
        .collect()
}

/// The closed Stage→Percentage vocabulary for one deployment.
///
/// Lookup is exact and case-sensitive: an unrecognized name is an error for
/// the caller to surface, never a silent fallback to 0%. The table orders
/// stages by percentage but nothing here enforces forward-only movement —
/// staff corrections may move a project backward.
pub struct StageTable {
    stages: Vec<StageConfig>,
}

impl StageTable {
    /// Build a table from configured stages, rejecting out-of-range
    /// percentages up front.
    pub fn new(stages: Vec<StageConfig>) -> anyhow::Result<Self> {
        anyhow::ensure!(!stages.is_empty(), "stage table must not be empty");
        for s in &stages {
            anyhow::ensure!(
                (0..=100).contains(&s.progress),
                "stage '{}' has progress {} outside 0-100",
                s.name,
                s.progress
            );
        }
        Ok(Self { stages })
    }

    /// Percentage for an exact stage name, or `None` if unknown.
    pub fn progress_for(&self, name: &str) -> Option<i32> {
        self.stages
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.progress)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.stages.iter().map(|s| s.name.as_str())
    }
}
