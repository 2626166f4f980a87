//! A rule-based parser for loosely-formatted Western human names.
//!
//! Splits a single free-text name into salutation, given name, middle
//! initials, surname, and suffix, using positional heuristics over
//! whitespace-delimited tokens — no dictionaries, no I/O.
//!
//! ```
//! use nameparser::ParsedName;
//!
//! let name = ParsedName::parse("Dr. R. Jason Von Fange Jr.");
//! assert_eq!(Some("Dr."), name.salutation());
//! assert_eq!(Some("Jason"), name.given_name());
//! assert_eq!(Some("R"), name.middle_initials());
//! assert_eq!(Some("Von Fange"), name.surname());
//! assert_eq!(Some("Jr"), name.suffix());
//! ```
//!
//! The classifiers driving the parse are exposed as free functions
//! ([`is_salutation`], [`is_suffix`], [`is_compound_surname`],
//! [`is_initial`], [`is_mixed_case`], [`fix_case`]) for callers building
//! their own tokenization pipelines.

mod initials;
mod namecase;
mod parse;
mod segment;
mod suffix;
mod surname;
mod title;

#[cfg(feature = "serialization")]
mod serialization;

pub use crate::initials::is_initial;
pub use crate::namecase::{fix_case, is_mixed_case};
pub use crate::suffix::is_suffix;
pub use crate::surname::is_compound_surname;
pub use crate::title::is_salutation;

use compact_str::CompactString;

/// A human name split into its structural parts.
///
/// Produced by [`ParsedName::parse`]; parts that were not detected are
/// `None`. The value is immutable and independent of the input string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedName {
    salutation: Option<&'static str>,
    given_name: Option<CompactString>,
    middle_initials: Option<CompactString>,
    surname: Option<CompactString>,
    suffix: Option<&'static str>,
}

impl ParsedName {
    /// Parse a free-form name.
    ///
    /// Parsing is total: any input, including the empty string, yields a
    /// `ParsedName`, with unrecognized parts left `None`. Words in
    /// parentheses are ignored, a salutation is recognized only as the
    /// first word and a suffix only as the last, and the words in between
    /// are partitioned into given name, middle initials, and surname.
    pub fn parse(full_name: &str) -> ParsedName {
        parse::parse(full_name)
    }

    /// The canonical form of a recognized honorific prefix, e.g. "Mr.".
    pub fn salutation(&self) -> Option<&str> {
        self.salutation
    }

    /// The given name, case-normalized, including any initial absorbed by
    /// the goes-by-middle-name rule ("R. J. Smith" gives "R").
    pub fn given_name(&self) -> Option<&str> {
        self.given_name.as_deref()
    }

    /// Middle initials as space-joined bare uppercase letters, periods
    /// stripped.
    pub fn middle_initials(&self) -> Option<&str> {
        self.middle_initials.as_deref()
    }

    /// The surname, case-normalized, including any compound prefix words
    /// ("Von Fange").
    pub fn surname(&self) -> Option<&str> {
        self.surname.as_deref()
    }

    /// The canonical form of a recognized generational or credential
    /// suffix, e.g. "Jr" or "PhD".
    pub fn suffix(&self) -> Option<&str> {
        self.suffix
    }
}
