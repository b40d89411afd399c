//! # nucleoseq - Nucleic-acid sequence model
//!
//! Small value types for DNA, RNA and unconstrained sequences, each carrying
//! an average quality score.
//!
//! ## Architecture
//!
//! - `alphabet`: Alphabet tags, residue validation, base pairing
//! - `model`: The `Sequence` value type and its transformations
//! - `error`: Error type shared by construction and transformations
//!
//! ## Example
//!
//! ```
//! use nucleoseq::Sequence;
//!
//! let brain = Sequence::dna("AGT", 27.0).unwrap();
//! assert_eq!(brain.transcribe().unwrap().residues(), "AGU");
//! assert_eq!(brain.reverse_complement().unwrap().residues(), "ACT");
//! ```

pub mod alphabet;
pub mod error;
pub mod model;

pub use alphabet::Alphabet;
pub use error::{SequenceError, SequenceResult};
pub use model::{combine, Sequence};
