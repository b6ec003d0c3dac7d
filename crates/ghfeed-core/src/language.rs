//! English language helpers.

/// Returns `word` in the form matching `count`.
///
/// Only the regular English rules are covered: `y` after a consonant becomes
/// `ies`, sibilant endings take `es`, everything else takes `s`.
#[must_use]
pub fn plural(word: &str, count: u64) -> String {
    if count == 1 {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix('y')
        && stem.chars().next_back().is_some_and(|c| !is_vowel(c))
    {
        return format!("{stem}ies");
    }

    if ["s", "sh", "ch", "x", "z"]
        .iter()
        .any(|suffix| word.ends_with(suffix))
    {
        return format!("{word}es");
    }

    format!("{word}s")
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}
