//! Skill match scoring (S).
//!
//! A worker earns a flat score for every required role its own role label
//! matches, and otherwise earns experience-weighted credit for technologies
//! the knowledge base associates with the role.

mod knowledge;
mod normalize;


pub use knowledge::{RoleSkillTable, KNOWLEDGE_BASE_VERSION};
pub use normalize::{normalize, overlaps};

use crate::model::Worker;

/// Score awarded per required role that the worker's role label matches.
pub const DIRECT_MATCH_SCORE: f64 = 10.0;
/// Weight applied to experience for each keyword hit.
pub const EXPERIENCE_WEIGHT: f64 = 1.5;
/// Multiplier when more than one required role matched directly.
pub const MULTI_ROLE_BONUS: f64 = 1.2;
/// Multiplier when no required role matched directly.
pub const NO_DIRECT_MATCH_PENALTY: f64 = 0.3;

/// Scores how well a worker covers a set of required roles.
pub trait SkillMatcher: Send + Sync {
    /// Skill match score, always `>= 0`.
    fn score(&self, worker: &Worker, required_roles: &[String]) -> f64;
}

/// Matcher backed by a [`RoleSkillTable`].
#[derive(Debug, Clone, Default)]
pub struct KeywordMatcher {
    table: RoleSkillTable,
}

impl KeywordMatcher {
    pub fn new(table: RoleSkillTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RoleSkillTable {
        &self.table
    }

    /// Experience-weighted credit for the role's keywords. Each keyword
    /// counts the first technology it matches, once.
    fn keyword_credit(&self, worker: &Worker, technologies: &[String], role: &str) -> f64 {
        self.table
            .keywords(role)
            .iter()
            .filter_map(|keyword| technologies.iter().position(|tech| overlaps(keyword, tech)))
            .filter_map(|index| worker.experience_at(index))
            .map(|years| years * EXPERIENCE_WEIGHT)
            .sum()
    }
}

impl SkillMatcher for KeywordMatcher {
    fn score(&self, worker: &Worker, required_roles: &[String]) -> f64 {
        let worker_role = normalize(&worker.role);
        let technologies: Vec<String> = worker.technologies().iter().map(|t| normalize(t)).collect();

        let mut total = 0.0;
        let mut direct_matches = 0usize;

        for role in required_roles {
            if overlaps(&normalize(role), &worker_role) {
                direct_matches += 1;
                total += DIRECT_MATCH_SCORE;
                continue;
            }
            total += self.keyword_credit(worker, &technologies, role);
        }

        if direct_matches > 1 {
            total *= MULTI_ROLE_BONUS;
        } else if direct_matches == 0 {
            total *= NO_DIRECT_MATCH_PENALTY;
        }

        total.max(0.0)
    }
}

impl<M: SkillMatcher + ?Sized> SkillMatcher for Box<M> {
    fn score(&self, worker: &Worker, required_roles: &[String]) -> f64 {
        (**self).score(worker, required_roles)
    }
}
