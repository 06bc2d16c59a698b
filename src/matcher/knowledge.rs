//! Role-to-skill knowledge base.
//!
//! Maps canonical role names to the technology keywords that indicate a
//! worker can fill the role without holding the title. The built-in table is
//! version 1; alternative tables load from TOML:
//!
//! ```toml
//! version = 1
//!
//! [roles]
//! "backend developer" = ["java", "spring boot", "sql"]
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::KnowledgeBaseError;

use super::normalize::normalize;

/// Knowledge base format version understood by this build.
pub const KNOWLEDGE_BASE_VERSION: u32 = 1;

const BUILTIN_ROLES: &[(&str, &[&str])] = &[
    ("project manager", &["scrum", "kanban", "jira", "communication", "agile", "management"]),
    ("product owner", &["communication", "userstories", "scrum", "requirements", "business"]),
    ("business analyst", &["uml", "userstories", "communication", "bpmn", "requirements", "analysis"]),
    ("ux designer", &["figma", "adobexd", "sketch", "photoshop", "wireframes", "design"]),
    ("ui designer", &["figma", "adobexd", "sketch", "photoshop", "css", "design"]),
    ("solutions architect", &["aws", "microservices", "designpatterns", "kubernetes", "architecture"]),
    ("solution architect", &["aws", "microservices", "designpatterns", "kubernetes", "architecture"]),
    ("tech lead", &["java", "spring", "node.js", "architecture", "designpatterns", "leadership"]),
    ("backend developer", &["java", "spring boot", "sql", "node.js", "python", "api", "database"]),
    ("frontend developer", &["react", "vue", "html", "css", "javascript", "angular", "ui"]),
    ("database administrator", &["sql", "mysql", "postgresql", "mongodb", "database"]),
    ("qa automation engineer", &["selenium", "jmeter", "postman", "testing", "automation"]),
    ("qa engineer", &["selenium", "jmeter", "postman", "testing", "manual testing"]),
    ("devops engineer", &["docker", "kubernetes", "jenkins", "aws", "ci/cd", "deployment"]),
    ("cloud engineer", &["aws", "azure", "gcp", "kubernetes", "docker", "cloud"]),
    ("security engineer", &["security", "penetration testing", "owasp", "encryption"]),
    ("technical writer", &["markdown", "confluence", "diagrams.net", "msword", "documentation"]),
];

static BUILTIN: Lazy<RoleSkillTable> = Lazy::new(|| {
    RoleSkillTable::from_entries(
        KNOWLEDGE_BASE_VERSION,
        BUILTIN_ROLES.iter().map(|(role, skills)| {
            (
                role.to_string(),
                skills.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
            )
        }),
    )
});

/// On-disk shape of a knowledge base file.
#[derive(Debug, Serialize, Deserialize)]
struct TableFile {
    version: u32,
    #[serde(default)]
    roles: BTreeMap<String, Vec<String>>,
}

/// Versioned role-to-skill keyword table.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleSkillTable {
    version: u32,
    roles: BTreeMap<String, Vec<String>>,
    /// Normalized role -> normalized keywords, in declaration order.
    index: HashMap<String, Vec<String>>,
}

impl RoleSkillTable {
    /// The built-in table shared by every default matcher.
    pub fn builtin() -> &'static RoleSkillTable {
        &BUILTIN
    }

    /// Build a table from `(role, keywords)` pairs.
    pub fn from_entries<I>(version: u32, entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let roles: BTreeMap<String, Vec<String>> = entries.into_iter().collect();
        let index = roles
            .iter()
            .map(|(role, skills)| {
                let keywords = skills
                    .iter()
                    .map(|s| normalize(s))
                    .filter(|s| !s.is_empty())
                    .collect();
                (normalize(role), keywords)
            })
            .collect();

        Self {
            version,
            roles,
            index,
        }
    }

    /// Parse a table from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, KnowledgeBaseError> {
        let file: TableFile = toml::from_str(content)?;
        if file.version != KNOWLEDGE_BASE_VERSION {
            return Err(KnowledgeBaseError::UnsupportedVersion {
                found: file.version,
                supported: KNOWLEDGE_BASE_VERSION,
            });
        }
        Ok(Self::from_entries(file.version, file.roles))
    }

    /// Load a table from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, KnowledgeBaseError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| KnowledgeBaseError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Render the table as TOML.
    pub fn to_toml(&self) -> String {
        let file = TableFile {
            version: self.version,
            roles: self.roles.clone(),
        };
        toml::to_string(&file).unwrap_or_default()
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// Number of roles in the table.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Roles and their keywords as written, sorted by role.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.roles.iter().map(|(role, skills)| (role.as_str(), skills.as_slice()))
    }

    /// Normalized keywords for a role; empty when the role is unmapped.
    pub fn keywords(&self, role: &str) -> &[String] {
        self.index
            .get(&normalize(role))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Default for RoleSkillTable {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
