use compact_str::CompactString;

/// A single letter, optionally punctuated with periods, standing in for an
/// unspoken given or middle name: "J", "J.", or ".J".
///
/// No alphabetic check is made; any lone character qualifies.
pub fn is_initial(word: &str) -> bool {
    word.chars().filter(|c| *c != '.').count() == 1
}

// The stored form of an initial: periods dropped, uppercased.
pub(crate) fn normalize(word: &str) -> CompactString {
    word.chars()
        .filter(|c| *c != '.')
        .flat_map(char::to_uppercase)
        .collect()
}
