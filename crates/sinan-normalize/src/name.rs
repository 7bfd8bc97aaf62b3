//! Morphological normalization of SINAN column names.
//!
//! Extracts structural and semantic components without interpreting the
//! clinical meaning of any token. Rules are deliberately narrow:
//! structural prefixes are only the well-known administrative markers,
//! structural suffixes are single-letter trailing tokens (N, I, H, V),
//! and everything else is semantic, including short clinical
//! abbreviations.

use sinan_model::NormalizedName;

/// Administrative prefixes on SINAN notification columns (DT_SIN_PRI,
/// CS_SEXO, NU_IDADE, ...).
const ADMIN_PREFIXES: [&str; 8] = ["DT", "NU", "ID", "CS", "TP", "SG", "NM", "DS"];

/// Uppercases the name and strips every character that is not an ASCII
/// uppercase letter or underscore.
fn clean_column_name(name: &str) -> String {
    name.to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase() || *c == '_')
        .collect()
}

/// Decomposes a column name into structural and semantic components.
///
/// Total over any input: the empty string, pure digits, and
/// pure-underscore names all produce a value with empty token lists and
/// an empty `base_name`.
pub fn normalize_column_name(column_name: &str) -> NormalizedName {
    let original = column_name.to_string();
    let cleaned = clean_column_name(column_name);

    let mut tokens: Vec<String> = cleaned
        .split('_')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    if tokens.is_empty() {
        return NormalizedName {
            original,
            cleaned,
            raw_tokens: Vec::new(),
            semantic_tokens: Vec::new(),
            structural_tokens: Vec::new(),
            base_name: String::new(),
        };
    }

    let mut structural_tokens: Vec<String> = Vec::new();

    // Single-letter suffix markers (_N, _I, _H, _V).
    if tokens.last().is_some_and(|t| t.len() == 1)
        && let Some(suffix) = tokens.pop()
    {
        structural_tokens.push(suffix);
    }

    // Administrative prefix, only when at least one semantic token remains.
    if tokens.len() > 1 && ADMIN_PREFIXES.contains(&tokens[0].as_str()) {
        structural_tokens.push(tokens.remove(0));
    }

    let base_name = tokens.join("_");
    let raw_tokens = tokens
        .iter()
        .chain(structural_tokens.iter())
        .cloned()
        .collect();

    NormalizedName {
        original,
        cleaned,
        raw_tokens,
        semantic_tokens: tokens,
        structural_tokens,
        base_name,
    }
}
