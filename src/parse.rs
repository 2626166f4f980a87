use crate::namecase::fix_case;
use crate::ParsedName;
use crate::{initials, segment, suffix, surname, title};
use compact_str::CompactString;
use smallvec::SmallVec;

pub(crate) fn parse(full_name: &str) -> ParsedName {
    let words: SmallVec<[&str; 7]> = segment::tokens(full_name).collect();

    // Boundary tokens: a salutation is only recognized in first position,
    // a suffix only in last position.
    let salutation = words.first().and_then(|word| title::is_salutation(word));
    let suffix = words.last().and_then(|word| suffix::is_suffix(word));

    let start = if salutation.is_some() { 1 } else { 0 };
    let end = if suffix.is_some() {
        words.len() - 1
    } else {
        words.len()
    };

    let mut given_name = CompactString::default();
    let mut middle_initials = CompactString::default();
    let mut surname_words = CompactString::default();

    // Scan left to right, splitting everything before the surname into the
    // given name and the middle initials.
    let mut i = start;
    while i + 1 < end {
        let word = words[i];

        // A compound prefix hands the rest of the words to the surname,
        // unless nothing precedes it, in which case it may be a literal
        // first name ("Von Fabella").
        if surname::is_compound_surname(word) && i != start {
            break;
        }

        if initials::is_initial(word) {
            // A leading initial belongs to the given name only when the
            // person goes by a middle name, which a second initial rules
            // in: "R. J. Smith" keeps "R" with the given name and stores
            // "J" as an initial, while "R. Jason Smith" stores "R".
            let goes_by_middle_name = i == start
                && words
                    .get(i + 1)
                    .map_or(false, |next| initials::is_initial(next));

            if goes_by_middle_name {
                push_word(&mut given_name, &initials::normalize(word));
            } else {
                push_word(&mut middle_initials, &initials::normalize(word));
            }
        } else {
            push_word(&mut given_name, &fix_case(word));
        }

        i += 1;
    }

    if end.saturating_sub(start) > 1 {
        // Everything from the scan's stopping point belongs to the surname.
        for word in &words[i..end] {
            push_word(&mut surname_words, &fix_case(word));
        }
    } else if let Some(word) = words.get(i) {
        // A single-word working zone is assumed to be a first name.
        given_name = fix_case(word).into();
    }

    ParsedName {
        salutation,
        given_name: non_empty(&given_name),
        middle_initials: non_empty(&middle_initials),
        surname: non_empty(&surname_words),
        suffix,
    }
}

fn push_word(accumulator: &mut CompactString, word: &str) {
    if !accumulator.is_empty() {
        accumulator.push(' ');
    }
    accumulator.push_str(word);
}

fn non_empty(accumulated: &str) -> Option<CompactString> {
    let trimmed = accumulated.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(CompactString::from(trimmed))
    }
}
