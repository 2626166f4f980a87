/// True if the word contains both an uppercase and a lowercase letter,
/// like "McDonald". Such words are left alone by [`fix_case`].
pub fn is_mixed_case(word: &str) -> bool {
    let mut has_lowercase = false;
    let mut has_uppercase = false;

    for c in word.chars() {
        if c.is_uppercase() {
            has_uppercase = true;
        } else if c.is_lowercase() {
            has_lowercase = true;
        }
        if has_lowercase && has_uppercase {
            return true;
        }
    }

    false
}

fn capitalize(word: &str) -> String {
    let mut result = String::with_capacity(word.len());
    let mut chars = word.chars();

    if let Some(first) = chars.next() {
        result.extend(first.to_uppercase());
        result.extend(chars.flat_map(char::to_lowercase));
    }

    result
}

// Capitalize each separator-delimited segment, leaving mixed-case segments
// untouched.
fn capitalize_segments(word: &str, separator: char) -> String {
    let mut result = String::with_capacity(word.len());

    for (i, segment) in word.split(separator).enumerate() {
        if i > 0 {
            result.push(separator);
        }
        if is_mixed_case(segment) {
            result.push_str(segment);
        } else {
            result.push_str(&capitalize(segment));
        }
    }

    result
}

/// Normalize the casing of a single name word: "kimura-fay" becomes
/// "Kimura-Fay" and "j.p." becomes "J.P.", while a mixed-case word like
/// "McDonald" passes through unchanged.
///
/// The dash pass runs before the period pass, and each pass re-checks its
/// own segments for mixed case.
pub fn fix_case(word: &str) -> String {
    let dashed = capitalize_segments(word, '-');
    capitalize_segments(&dashed, '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_case() {
        assert!(is_mixed_case("McDonald"));
        assert!(!is_mixed_case("SMITH"));
        assert!(!is_mixed_case("smith"));
        assert!(!is_mixed_case(""));
    }

    #[test]
    fn capitalization() {
        assert_eq!("Smith", fix_case("smith"));
        assert_eq!("Smith", fix_case("SMITH"));
        assert_eq!("", fix_case(""));
    }

    #[test]
    fn preserves_mixed_case() {
        assert_eq!("McDonald", fix_case("McDonald"));
        assert_eq!("deVries", fix_case("deVries"));
    }

    #[test]
    fn dashed_segments() {
        assert_eq!("Kimura-Fay", fix_case("kimura-fay"));
        assert_eq!("Kimura-McDonald", fix_case("kimura-McDonald"));
    }

    #[test]
    fn period_segments() {
        assert_eq!("J.P.", fix_case("j.p."));
    }

    #[test]
    fn idempotent() {
        for word in &["smith", "kimura-fay", "j.p.", "von", ""] {
            let once = fix_case(word);
            assert_eq!(once, fix_case(&once), "fix_case({:?}) not idempotent", word);
        }
    }
}
