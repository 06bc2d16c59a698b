//! Short identifiers for command runs.
//!
//! Every CLI run gets a 6-character id so journal lines from one run can be
//! grouped together.

use rand::Rng;

/// Character set for run ids: lowercase letters and digits.
const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Length of generated run ids.
const ID_LEN: usize = 6;

/// Generate a 6-character lowercase alphanumeric run id.
///
/// # Examples
/// ```
/// use allot::run_id::generate_run_id;
///
/// let id = generate_run_id();
/// assert_eq!(id.len(), 6);
/// assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
/// ```
pub fn generate_run_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LEN)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_id_shape() {
        for _ in 0..100 {
            let id = generate_run_id();
            assert_eq!(id.len(), ID_LEN);
            assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_ids_are_distinct() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_run_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_id_uses_full_charset() {
        let seen: HashSet<char> = (0..1000).flat_map(|_| generate_run_id().chars().collect::<Vec<_>>()).collect();
        assert!(seen.len() >= 30, "only {} distinct characters", seen.len());
    }
}
