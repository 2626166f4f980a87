use compact_str::CompactString;
use phf::phf_map;

static SALUTATIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "mr" => "Mr.",
    "master" => "Mr.",
    "mister" => "Mr.",
    "mrs" => "Mrs.",
    "miss" => "Ms.",
    "ms" => "Ms.",
    "dr" => "Dr.",
    "rev" => "Rev.",
    "fr" => "Fr.",
};

/// Recognize an honorific prefix like "mr", "Mister", or "DR.", returning
/// its canonical display form ("Mr.", "Dr.").
///
/// Periods are ignored and matching is case-insensitive.
pub fn is_salutation(word: &str) -> Option<&'static str> {
    let key: CompactString = word
        .chars()
        .filter(|c| *c != '.')
        .flat_map(char::to_lowercase)
        .collect();

    SALUTATIONS.get(key.as_str()).copied()
}
