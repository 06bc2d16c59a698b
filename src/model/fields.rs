use serde::{Deserialize, Deserializer};

/// Split a role list written as free text.
///
/// Accepts `"['Backend Developer', 'QA Engineer']"`, `"Backend Developer, QA"`
/// and a bare single role. Brackets and quotes are stripped, pieces are
/// trimmed, and empty pieces are dropped.
pub fn parse_role_list(text: &str) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | '\'' | '"'))
        .collect();

    cleaned
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split colon-joined tokens (`"Java:Spring Boot:SQL"`).
pub(crate) fn split_tokens(text: &str) -> Vec<String> {
    text.split(':')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse colon-joined experience values (`"4:3:5"`).
///
/// Returns `None` if any value fails to parse.
pub(crate) fn parse_experience(text: &str) -> Option<Vec<f64>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(Vec::new());
    }
    trimmed
        .split(':')
        .map(|part| part.trim().parse::<f64>().ok())
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RolesField {
    List(Vec<String>),
    Text(String),
}

pub(super) fn deserialize_roles<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let roles = match Option::<RolesField>::deserialize(deserializer)? {
        Some(RolesField::List(list)) => list
            .into_iter()
            .map(|role| role.trim().to_string())
            .filter(|role| !role.is_empty())
            .collect(),
        Some(RolesField::Text(text)) => parse_role_list(&text),
        None => Vec::new(),
    };
    Ok(roles)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum HoursField {
    Number(f64),
    Text(String),
}

/// Hours may arrive as a number, a numeric string, or a placeholder such as
/// `"Unknown"`; the placeholder means no hint.
pub(super) fn deserialize_hours<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let hours = match Option::<HoursField>::deserialize(deserializer)? {
        Some(HoursField::Number(n)) => Some(n),
        Some(HoursField::Text(text)) => text.trim().parse::<f64>().ok(),
        None => None,
    };
    Ok(hours)
}

#[derive(Deserialize)]
#[serde(untagged)]
pub(super) enum TokensField {
    List(Vec<String>),
    Text(String),
}

impl TokensField {
    pub(super) fn into_tokens(self) -> Vec<String> {
        match self {
            Self::List(list) => list
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
            Self::Text(text) => split_tokens(&text),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
pub(super) enum ExperienceField {
    Numbers(Vec<f64>),
    Text(String),
}

impl ExperienceField {
    /// `None` when the text form is unparsable.
    pub(super) fn into_values(self) -> Option<Vec<f64>> {
        match self {
            Self::Numbers(values) => Some(values),
            Self::Text(text) => parse_experience(&text),
        }
    }
}
