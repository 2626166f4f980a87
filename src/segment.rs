/// Split a raw name into its whitespace-delimited tokens, dropping any
/// token that contains an open parenthesis — nicknames like "(Johnny)"
/// are ignored wholesale, not unwrapped.
///
/// Splitting is on single spaces, so runs of spaces produce empty tokens;
/// downstream classifiers treat those as ordinary (empty) words and the
/// accumulators trim them away.
pub(crate) fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.trim().split(' ').filter(|word| !word.contains('('))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_spaces() {
        let words: Vec<_> = tokens(" John  Smith ").collect();
        assert_eq!(vec!["John", "", "Smith"], words);
    }

    #[test]
    fn drops_parenthesized_words() {
        let words: Vec<_> = tokens("John (Johnny) Smith").collect();
        assert_eq!(vec!["John", "Smith"], words);
    }

    #[test]
    fn drops_unclosed_parenthesized_words() {
        let words: Vec<_> = tokens("John (Johnny Smith").collect();
        assert_eq!(vec!["John", "Smith"], words);
    }

    #[test]
    fn empty_input() {
        let words: Vec<_> = tokens("").collect();
        assert_eq!(vec![""], words);
    }

    #[test]
    fn nothing_but_parentheses() {
        assert_eq!(0, tokens("(Johnny)").count());
    }
}
