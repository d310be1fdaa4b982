//! Name handling helpers.

/// First and last name extracted from a full name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameParts {
    pub first_name: String,
    pub last_name: String,
}

/// Honorific prefixes recognized at the start of a full name.
const HONORIFICS: &[&str] = &["Dr.", "Prof.", "Professor", "Mr.", "Ms.", "Mrs.", "Mx."];

/// Split a full name into first and last name.
///
/// Explicit `first_name` / `last_name` values win over anything derived from
/// `full_name`. A single-token name becomes the first name.
#[must_use]
pub fn parse_name_parts(
    full_name: &str,
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> NameParts {
    if let (Some(first), Some(last)) = (first_name, last_name) {
        return NameParts {
            first_name: first.to_string(),
            last_name: last.to_string(),
        };
    }

    let parts: Vec<&str> = full_name.split_whitespace().collect();

    match parts.as_slice() {
        [] => NameParts::default(),
        [only] => NameParts {
            first_name: (*only).to_string(),
            last_name: String::new(),
        },
        [first, rest @ ..] => NameParts {
            first_name: first_name.unwrap_or(first).to_string(),
            last_name: last_name
                .map(str::to_string)
                .unwrap_or_else(|| rest.join(" ")),
        },
    }
}

/// Extract an honorific prefix (Dr., Prof., ...) from a full name.
///
/// Only multi-token names are considered; a bare "Professor" is a name, not
/// a prefix.
#[must_use]
pub fn extract_honorific(full_name: &str) -> Option<&'static str> {
    let mut tokens = full_name.split_whitespace();
    let first = tokens.next()?;
    tokens.next()?;

    let normalized = first.trim_end_matches('.').to_lowercase();
    HONORIFICS
        .iter()
        .find(|h| h.trim_end_matches('.').to_lowercase() == normalized)
        .copied()
}
