use compact_str::CompactString;
use phf::phf_set;

static COMPOUND_PREFIXES: phf::Set<&'static str> = phf_set! {
    "vere",
    "von",
    "van",
    "de",
    "del",
    "della",
    "di",
    "da",
    "pietro",
    "vanden",
    "du",
    "st.",
    "st",
    "la",
    "lo",
    "ter",
};

/// True for the function words that begin a compound surname, like the
/// "Von" in "Von Fange" or the "de la" parts of "de la Cruz".
///
/// Matching is case-insensitive; "St." is matched with its period intact.
pub fn is_compound_surname(word: &str) -> bool {
    let lowercase: CompactString = word.chars().flat_map(char::to_lowercase).collect();
    COMPOUND_PREFIXES.contains(lowercase.as_str())
}
