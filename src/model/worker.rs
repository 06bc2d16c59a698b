use serde::{Deserialize, Serialize};

use super::fields::{parse_experience, split_tokens, ExperienceField, TokensField};

/// Experience value substituted when a worker's experience cannot be paired
/// with its technologies.
pub const NEUTRAL_EXPERIENCE: f64 = 1.0;

/// A worker from the roster.
///
/// `technologies` and `experience` are index-aligned: `experience[i]` is the
/// years of experience with `technologies[i]`. The constructors enforce this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WorkerRecord")]
pub struct Worker {
    /// Unique key within a roster.
    pub name: String,
    /// Free-text role label (e.g. "Backend Developer").
    pub role: String,
    technologies: Vec<String>,
    experience: Vec<f64>,
}

impl Worker {
    /// Build a worker, substituting uniform neutral experience when the
    /// experience list does not pair up with the technologies.
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        technologies: Vec<String>,
        experience: Vec<f64>,
    ) -> Self {
        Self::build(name.into(), role.into(), technologies, Some(experience))
    }

    /// Build a worker from delimited text columns, as found in roster exports:
    /// technologies and experience are colon-joined (`"Java:SQL"`, `"4:5"`).
    pub fn from_columns(name: &str, role: &str, technologies: &str, experience: &str) -> Self {
        Self::build(
            name.trim().to_string(),
            role.trim().to_string(),
            split_tokens(technologies),
            parse_experience(experience),
        )
    }

    fn build(
        name: String,
        role: String,
        technologies: Vec<String>,
        experience: Option<Vec<f64>>,
    ) -> Self {
        let experience = match experience {
            Some(values) if is_aligned(&technologies, &values) => values,
            _ => {
                tracing::warn!(
                    worker = %name,
                    technologies = technologies.len(),
                    "experience does not pair with technologies; using neutral experience"
                );
                vec![NEUTRAL_EXPERIENCE; technologies.len()]
            }
        };

        Self {
            name,
            role,
            technologies,
            experience,
        }
    }

    /// Skill tokens in roster order.
    pub fn technologies(&self) -> &[String] {
        &self.technologies
    }

    /// Years of experience, aligned with [`Worker::technologies`].
    pub fn experience(&self) -> &[f64] {
        &self.experience
    }

    /// Experience paired with the technology at `index`.
    pub fn experience_at(&self, index: usize) -> Option<f64> {
        self.experience.get(index).copied()
    }

    /// Mean experience, or `None` when the worker lists no experience.
    pub fn average_experience(&self) -> Option<f64> {
        if self.experience.is_empty() {
            return None;
        }
        Some(self.experience.iter().sum::<f64>() / self.experience.len() as f64)
    }

    /// Highest single experience value.
    pub fn max_experience(&self) -> Option<f64> {
        self.experience.iter().copied().reduce(f64::max)
    }
}

fn is_aligned(technologies: &[String], experience: &[f64]) -> bool {
    technologies.len() == experience.len()
        && experience.iter().all(|value| value.is_finite() && *value >= 0.0)
}

/// Wire shape accepted for workers. Token columns may be lists or
/// colon-joined strings, and capitalized keys from roster exports are
/// accepted.
#[derive(Deserialize)]
struct WorkerRecord {
    #[serde(alias = "Name")]
    name: String,
    #[serde(alias = "Role", default)]
    role: String,
    #[serde(alias = "Technologies", default)]
    technologies: Option<TokensField>,
    #[serde(alias = "Experience", default)]
    experience: Option<ExperienceField>,
}

impl From<WorkerRecord> for Worker {
    fn from(record: WorkerRecord) -> Self {
        let technologies = record
            .technologies
            .map(TokensField::into_tokens)
            .unwrap_or_default();
        let experience = match record.experience {
            Some(field) => field.into_values(),
            None => Some(Vec::new()),
        };
        Worker::build(record.name, record.role, technologies, experience)
    }
}
