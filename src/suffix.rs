use compact_str::CompactString;
use phf::phf_map;

// Keyed on the period-stripped lowercase form; values keep the canonical
// casing regardless of how the input was written.
static SUFFIXES: phf::Map<&'static str, &'static str> = phf_map! {
    "i" => "I",
    "ii" => "II",
    "iii" => "III",
    "iv" => "IV",
    "v" => "V",
    "senior" => "Senior",
    "junior" => "Junior",
    "jr" => "Jr",
    "sr" => "Sr",
    "phd" => "PhD",
    "apr" => "APR",
    "rph" => "RPh",
    "pe" => "PE",
    "md" => "MD",
    "ma" => "MA",
    "dmd" => "DMD",
    "cme" => "CME",
};

/// Recognize a generational or credential suffix like "Jr.", "III", or
/// "phd", returning its canonical form ("Jr", "III", "PhD").
///
/// Periods are ignored and matching is case-insensitive.
pub fn is_suffix(word: &str) -> Option<&'static str> {
    let key: CompactString = word
        .chars()
        .filter(|c| *c != '.')
        .flat_map(char::to_lowercase)
        .collect();

    SUFFIXES.get(key.as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jr() {
        assert_eq!(Some("Jr"), is_suffix("Jr"));
        assert_eq!(Some("Jr"), is_suffix("jr."));
        assert_eq!(Some("Junior"), is_suffix("JUNIOR"));
    }

    #[test]
    fn generational() {
        assert_eq!(Some("III"), is_suffix("iii"));
        assert_eq!(Some("IV"), is_suffix("IV"));
        assert_eq!(Some("Sr"), is_suffix("sr"));
    }

    #[test]
    fn credentials() {
        assert_eq!(Some("PhD"), is_suffix("phd"));
        assert_eq!(Some("PhD"), is_suffix("Ph.D."));
        assert_eq!(Some("MD"), is_suffix("md"));
        assert_eq!(Some("RPh"), is_suffix("rph"));
    }

    #[test]
    fn not_a_suffix() {
        assert_eq!(None, is_suffix("Doe"));
        assert_eq!(None, is_suffix(""));
    }
}
