use once_cell::sync::Lazy;

/// Corporate/team suffixes the provider sometimes appends to person names.
/// Compared case-insensitively with trailing dots ignored.
static NAME_SUFFIXES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "fc", "sc", "cf", "fk", "afc", "club", "co", "company", "est", "team",
    ]
});

/// Names longer than this many parts are shortened.
const MAX_NAME_PARTS: usize = 4;

/// Normalizes a provider person name for display.
///
/// - strips trailing corporate/team suffixes ("Ahmed Ali FC" -> "Ahmed Ali")
/// - reorders a single "Last, First" pair ("Ali, Ahmed" -> "Ahmed Ali")
/// - shortens names with more than four parts to the first two and the last
/// - collapses runs of whitespace
pub fn clean_person_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    // "Last, First" -> "First Last". Only a single comma qualifies.
    let reordered = match trimmed.split_once(',') {
        Some((last, first)) if !first.contains(',') => {
            format!("{} {}", first.trim(), last.trim())
        }
        _ => trimmed.to_string(),
    };

    let mut parts: Vec<&str> = reordered.split_whitespace().collect();

    while parts.len() > 1 {
        let tail = parts[parts.len() - 1].trim_end_matches('.').to_lowercase();
        if NAME_SUFFIXES.contains(&tail.as_str()) {
            parts.pop();
        } else {
            break;
        }
    }

    if parts.len() > MAX_NAME_PARTS {
        let last = parts[parts.len() - 1];
        parts.truncate(2);
        parts.push(last);
    }

    parts.join(" ")
}
