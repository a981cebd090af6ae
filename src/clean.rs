//! The sequence cleaning collaborator.
//!
//! Raw letters arrive from a document with incidental whitespace and mixed
//! case. Before a record is yielded by the stream reader, its letters are
//! handed to a [`Clean`] implementation together with the record's declared
//! alphabet, which may normalize or reject them.

use crate::alphabet::Alphabet;

/// An error raised when sequence letters are rejected against an alphabet.
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// A symbol outside the alphabet was encountered. The position is the
    /// 1-based index of the symbol within the normalized letters.
    IllegalSymbol {
        /// The offending symbol.
        symbol: char,
        /// The 1-based position of the symbol within the normalized
        /// letters.
        position: usize,
        /// The alphabet the letters were validated against.
        alphabet: Alphabet,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IllegalSymbol {
                symbol,
                position,
                alphabet,
            } => write!(
                f,
                "illegal symbol for {} alphabet: {} at position {}",
                alphabet, symbol, position
            ),
        }
    }
}

impl std::error::Error for Error {}

/// The cleaning collaborator contract: accepts raw letters and a declared
/// alphabet, and returns validated letters or rejects them.
pub trait Clean {
    /// Cleans the raw letters against the declared alphabet.
    fn clean(&self, raw: &str, alphabet: Alphabet) -> Result<String, Error>;
}

/// The default cleaner: strips ASCII whitespace, uppercases, and verifies
/// each remaining symbol is a member of the alphabet.
///
/// # Examples
///
/// ```
/// use seqrecord::alphabet::Alphabet;
/// use seqrecord::clean::Clean as _;
/// use seqrecord::clean::Cleaner;
///
/// assert_eq!(Cleaner.clean("acg t\nacgt", Alphabet::Dna)?, "ACGTACGT");
/// assert!(Cleaner.clean("acxt", Alphabet::Dna).is_err());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Cleaner;

impl Clean for Cleaner {
    fn clean(&self, raw: &str, alphabet: Alphabet) -> Result<String, Error> {
        let mut letters = String::with_capacity(raw.len());

        for c in raw.chars() {
            if c.is_ascii_whitespace() {
                continue;
            }

            let symbol = c.to_ascii_uppercase();

            if !alphabet.symbols().contains(symbol) {
                return Err(Error::IllegalSymbol {
                    symbol,
                    position: letters.len() + 1,
                    alphabet,
                });
            }

            letters.push(symbol);
        }

        Ok(letters)
    }
}
