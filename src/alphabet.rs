//! Residue alphabets and the checks that go with them.
//!
//! A sequence is tagged with one [`Alphabet`]. Constrained alphabets
//! (DNA, RNA) define a fixed, case-sensitive residue set; the generic
//! alphabet accepts anything.

use crate::error::{SequenceError, SequenceResult};

const DNA_RESIDUES: &[char] = &['A', 'C', 'G', 'T'];
const RNA_RESIDUES: &[char] = &['A', 'C', 'G', 'U'];

/// Alphabet tag carried by every sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alphabet {
    /// No constraint on residues
    #[default]
    Generic,
    /// A, C, G, T
    Dna,
    /// A, C, G, U
    Rna,
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Alphabet::Generic => write!(f, "generic"),
            Alphabet::Dna => write!(f, "DNA"),
            Alphabet::Rna => write!(f, "RNA"),
        }
    }
}

impl Alphabet {
    /// Allowed residues, or `None` for the unconstrained generic alphabet.
    pub fn residues(&self) -> Option<&'static [char]> {
        match self {
            Alphabet::Generic => None,
            Alphabet::Dna => Some(DNA_RESIDUES),
            Alphabet::Rna => Some(RNA_RESIDUES),
        }
    }

    /// Checks whether a single residue belongs to this alphabet.
    pub fn contains(&self, residue: char) -> bool {
        self.residues().map_or(true, |set| set.contains(&residue))
    }

    /// Validates a residue string against this alphabet.
    ///
    /// Collects every distinct offending residue (first-seen order) so the
    /// error can name all of them at once.
    pub fn validate(&self, residues: &str) -> SequenceResult<()> {
        let mut invalid: Vec<char> = Vec::new();
        for c in residues.chars() {
            if !self.contains(c) && !invalid.contains(&c) {
                invalid.push(c);
            }
        }

        if invalid.is_empty() {
            Ok(())
        } else {
            Err(SequenceError::InvalidAlphabet {
                alphabet: *self,
                input: residues.to_string(),
                invalid,
            })
        }
    }

    /// Human-readable residue set, e.g. `{A, C, G, T}`.
    pub fn describe(&self) -> String {
        match self.residues() {
            Some(set) => {
                let parts: Vec<String> = set.iter().map(|c| c.to_string()).collect();
                format!("{{{}}}", parts.join(", "))
            }
            None => "{any}".to_string(),
        }
    }
}

/// Watson-Crick partner of a DNA base (A<->T, C<->G).
pub fn dna_complement(base: char) -> Option<char> {
    match base {
        'A' => Some('T'),
        'T' => Some('A'),
        'C' => Some('G'),
        'G' => Some('C'),
        _ => None,
    }
}
