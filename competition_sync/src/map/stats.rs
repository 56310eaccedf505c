use korastats_client::models::tournament::StatType;

/// Finds the provider stat type matching a target concept like "goals".
///
/// Case-insensitive substring match first; if nothing matches, falls back to
/// a 3-character-prefix partial match. `None` means the provider does not
/// expose the concept at all — callers must treat that as "feature
/// unavailable", never as an error.
pub fn find_stat_type<'a>(types: &'a [StatType], target: &str) -> Option<&'a StatType> {
    let target = target.to_lowercase();
    if target.is_empty() {
        return None;
    }

    if let Some(hit) = types
        .iter()
        .find(|t| t.name.to_lowercase().contains(&target))
    {
        return Some(hit);
    }

    let prefix: String = target.chars().take(3).collect();
    types
        .iter()
        .find(|t| t.name.to_lowercase().starts_with(&prefix))
}
