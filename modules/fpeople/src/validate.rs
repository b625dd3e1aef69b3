use tracing::warn;

pub const MIN_NAME_LEN: usize = 2;

/// A name is searchable when at least two characters remain after trimming.
pub fn validate_name(name: &str) -> bool {
    let valid = name.trim().chars().count() >= MIN_NAME_LEN;
    if !valid {
        warn!(name, "Rejected name query");
    }
    valid
}
