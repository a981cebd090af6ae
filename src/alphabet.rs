//! Sequence alphabets and nucleotide complementation.

use std::str::FromStr;

/// An error related to the parsing of an alphabet.
#[derive(Debug)]
pub struct ParseAlphabetError(String);

impl std::fmt::Display for ParseAlphabetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "parse alphabet error: {} is not a valid alphabet", self.0)
    }
}

impl std::error::Error for ParseAlphabetError {}

/// The alphabet a record's letters are drawn from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Alphabet {
    /// Deoxyribonucleic acid.
    Dna,
    /// Ribonucleic acid.
    Rna,
    /// Amino acids.
    Protein,
}

impl Alphabet {
    /// Classifies a molecule type code into an alphabet.
    ///
    /// Ribonucleic molecule types (`mRNA`, `rRNA`, `tRNA`, and so on) map
    /// to [`Alphabet::Rna`], amino-acid molecule types to
    /// [`Alphabet::Protein`], and everything else to [`Alphabet::Dna`].
    ///
    /// # Examples
    ///
    /// ```
    /// use seqrecord::alphabet::Alphabet;
    ///
    /// assert_eq!(Alphabet::from_moltype("DNA"), Alphabet::Dna);
    /// assert_eq!(Alphabet::from_moltype("mRNA"), Alphabet::Rna);
    /// assert_eq!(Alphabet::from_moltype("AA"), Alphabet::Protein);
    /// ```
    pub fn from_moltype(moltype: &str) -> Self {
        let code = moltype.to_ascii_uppercase();

        if code.contains("RNA") {
            Alphabet::Rna
        } else if code == "AA" || code.contains("PROTEIN") {
            Alphabet::Protein
        } else {
            Alphabet::Dna
        }
    }

    /// Gets the set of symbols legal for this alphabet, IUPAC ambiguity
    /// codes included.
    pub fn symbols(&self) -> &'static str {
        match self {
            Alphabet::Dna => "ACGTRYSWKMBDHVN",
            Alphabet::Rna => "ACGURYSWKMBDHVN",
            Alphabet::Protein => "ABCDEFGHIKLMNOPQRSTUVWXYZ*",
        }
    }

    /// Indicates whether this alphabet holds amino acids.
    pub fn is_protein(&self) -> bool {
        matches!(self, Alphabet::Protein)
    }
}

impl FromStr for Alphabet {
    type Err = ParseAlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DNA" | "dna" => Ok(Self::Dna),
            "RNA" | "rna" => Ok(Self::Rna),
            "protein" => Ok(Self::Protein),
            other => Err(ParseAlphabetError(other.to_string())),
        }
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Alphabet::Dna => write!(f, "DNA"),
            Alphabet::Rna => write!(f, "RNA"),
            Alphabet::Protein => write!(f, "protein"),
        }
    }
}

/// Complements a single nucleotide symbol.
///
/// IUPAC ambiguity codes complement to their mirrored code; symbols with
/// no defined complement pass through unchanged.
pub fn complement(symbol: char) -> char {
    match symbol {
        'A' => 'T',
        'T' | 'U' => 'A',
        'C' => 'G',
        'G' => 'C',
        'R' => 'Y',
        'Y' => 'R',
        'K' => 'M',
        'M' => 'K',
        'B' => 'V',
        'V' => 'B',
        'D' => 'H',
        'H' => 'D',
        other => other,
    }
}

/// Reverse-complements a nucleotide string.
///
/// # Examples
///
/// ```
/// use seqrecord::alphabet::reverse_complement;
///
/// assert_eq!(reverse_complement("ACGTT"), "AACGT");
/// ```
pub fn reverse_complement(letters: &str) -> String {
    letters.chars().rev().map(complement).collect()
}
