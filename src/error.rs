//! Error types for sequence construction and transformation.

use thiserror::Error;

use crate::alphabet::Alphabet;

/// Errors that can occur while building or transforming a sequence.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SequenceError {
    #[error("Invalid {alphabet} sequence \"{input}\": {} not in alphabet {}",
            format_residues(.invalid), .alphabet.describe())]
    InvalidAlphabet {
        alphabet: Alphabet,
        input: String,
        /// Distinct offending residues, in order of first appearance
        invalid: Vec<char>,
    },

    #[error("Cannot combine two empty sequences: weighted quality is undefined")]
    DegenerateCombination,

    #[error("Invalid quality {0}: must be a finite, non-negative number")]
    InvalidQuality(f64),
}

/// Result type for sequence operations.
pub type SequenceResult<T> = Result<T, SequenceError>;

fn format_residues(residues: &[char]) -> String {
    let quoted: Vec<String> = residues.iter().map(|c| format!("'{}'", c)).collect();
    let noun = if residues.len() == 1 { "residue" } else { "residues" };
    format!("{} {}", noun, quoted.join(", "))
}
