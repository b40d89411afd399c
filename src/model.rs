//! Data model for nucleic-acid sequences.
//!
//! This module contains the [`Sequence`] value type and its transformations:
//! - Construction with alphabet validation (generic, DNA, RNA)
//! - Concatenation with length-weighted quality averaging
//! - Reverse-complement (DNA)
//! - Transcription (DNA to RNA)
//!
//! Sequences are immutable once built; every transformation returns a new
//! instance.

use std::fmt;

use crate::alphabet::{dna_complement, Alphabet};
use crate::error::{SequenceError, SequenceResult};

/// A nucleic-acid sequence with an average quality score.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sequence {
    /// The residues, validated against `alphabet`
    residues: String,
    /// Average quality over all residues (finite, non-negative)
    quality: f64,
    /// Alphabet the residues were checked against
    alphabet: Alphabet,
}

impl Sequence {
    /// Creates a generic sequence. Any residues are accepted.
    pub fn new(residues: impl Into<String>, quality: f64) -> SequenceResult<Self> {
        Self::with_alphabet(Alphabet::Generic, residues, quality)
    }

    /// Creates a DNA sequence over {A, C, G, T}.
    pub fn dna(residues: impl Into<String>, quality: f64) -> SequenceResult<Self> {
        Self::with_alphabet(Alphabet::Dna, residues, quality)
    }

    /// Creates an RNA sequence over {A, C, G, U}.
    pub fn rna(residues: impl Into<String>, quality: f64) -> SequenceResult<Self> {
        Self::with_alphabet(Alphabet::Rna, residues, quality)
    }

    /// Creates a sequence of the given alphabet, validating every residue.
    ///
    /// # Errors
    ///
    /// * [`SequenceError::InvalidAlphabet`] if a residue is outside `alphabet`
    /// * [`SequenceError::InvalidQuality`] if `quality` is negative or not finite
    ///
    /// # Examples
    ///
    /// ```
    /// use nucleoseq::{Alphabet, Sequence};
    ///
    /// let seq = Sequence::with_alphabet(Alphabet::Dna, "AGT", 27.0).unwrap();
    /// assert_eq!(seq.residues(), "AGT");
    /// assert!(Sequence::with_alphabet(Alphabet::Dna, "AGU", 27.0).is_err());
    /// ```
    pub fn with_alphabet(
        alphabet: Alphabet,
        residues: impl Into<String>,
        quality: f64,
    ) -> SequenceResult<Self> {
        let residues = residues.into();
        alphabet.validate(&residues)?;
        if !quality.is_finite() || quality < 0.0 {
            return Err(SequenceError::InvalidQuality(quality));
        }

        Ok(Self {
            residues,
            quality,
            alphabet,
        })
    }

    /// Returns the residues as a string slice.
    pub fn residues(&self) -> &str {
        &self.residues
    }

    /// Returns the quality score.
    pub fn quality(&self) -> f64 {
        self.quality
    }

    /// Returns the alphabet this sequence was validated against.
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Returns the number of residues.
    pub fn len(&self) -> usize {
        self.residues.chars().count()
    }

    /// Returns true if the sequence has no residues.
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Gets the residue at a specific position.
    pub fn residue_at(&self, pos: usize) -> Option<char> {
        self.residues.chars().nth(pos)
    }

    /// Concatenates `other` onto this sequence. See [`combine`].
    pub fn combine(&self, other: &Sequence) -> SequenceResult<Sequence> {
        combine(self, other)
    }

    /// Returns the reverse complement (A<->T, C<->G) as a generic sequence.
    ///
    /// Quality is carried over unchanged.
    ///
    /// # Errors
    ///
    /// [`SequenceError::InvalidAlphabet`] for RNA input, or when a generic
    /// input holds a residue with no DNA complement.
    pub fn reverse_complement(&self) -> SequenceResult<Sequence> {
        if self.alphabet == Alphabet::Rna {
            let offending = self
                .residues
                .chars()
                .filter(|&c| !Alphabet::Dna.contains(c));
            return Err(self.not_dna(offending));
        }

        let mut rc = String::with_capacity(self.residues.len());
        let mut missing = Vec::new();
        for base in self.residues.chars().rev() {
            match dna_complement(base) {
                Some(partner) => rc.push(partner),
                None => missing.push(base),
            }
        }
        if !missing.is_empty() {
            // Report in input order
            return Err(self.not_dna(missing.into_iter().rev()));
        }

        Sequence::new(rc, self.quality)
    }

    /// Transcribes to RNA by replacing every `T` with `U`.
    ///
    /// Order and quality are preserved, and the result is validated as RNA.
    pub fn transcribe(&self) -> SequenceResult<Sequence> {
        let transcribed: String = self
            .residues
            .chars()
            .map(|c| if c == 'T' { 'U' } else { c })
            .collect();
        Sequence::rna(transcribed, self.quality)
    }

    fn not_dna(&self, offending: impl Iterator<Item = char>) -> SequenceError {
        let mut invalid: Vec<char> = Vec::new();
        for c in offending {
            if !invalid.contains(&c) {
                invalid.push(c);
            }
        }
        SequenceError::InvalidAlphabet {
            alphabet: Alphabet::Dna,
            input: self.residues.clone(),
            invalid,
        }
    }
}

/// Concatenates two sequences into a new generic sequence.
///
/// The quality of the result is the length-weighted average of both
/// operands. The result is not checked against either operand's alphabet.
///
/// # Errors
///
/// [`SequenceError::DegenerateCombination`] when both operands are empty.
///
/// # Examples
///
/// ```
/// use nucleoseq::{combine, Sequence};
///
/// let a = Sequence::new("AC", 10.0).unwrap();
/// let b = Sequence::new("ACGT", 20.0).unwrap();
/// let ab = combine(&a, &b).unwrap();
/// assert_eq!(ab.residues(), "ACACGT");
/// assert!((ab.quality() - 100.0 / 6.0).abs() < 1e-9);
/// ```
pub fn combine(a: &Sequence, b: &Sequence) -> SequenceResult<Sequence> {
    let (len_a, len_b) = (a.len(), b.len());
    let total = len_a + len_b;
    if total == 0 {
        return Err(SequenceError::DegenerateCombination);
    }

    // Weighted per side; the result never exceeds the larger quality
    let total = total as f64;
    let quality = a.quality * (len_a as f64 / total) + b.quality * (len_b as f64 / total);
    let mut residues = String::with_capacity(a.residues.len() + b.residues.len());
    residues.push_str(&a.residues);
    residues.push_str(&b.residues);

    Sequence::new(residues, quality)
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sequence: {}\nQuality: {}", self.residues, self.quality)
    }
}
