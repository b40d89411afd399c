//! nucleoseq - Nucleic-acid sequence toolkit
//!
//! Builds one sequence from the command line and prints it, optionally
//! followed by its reverse complement, its transcription, and its
//! concatenation with a second sequence.
//!
//! ## Usage
//!
//! ```bash
//! nucleoseq AGT -q 27 -t -r
//! nucleoseq AGU -a rna -q 30 -c ACGTC --concat-quality 14
//! ```

use std::io::{self, Write};

use anyhow::Result;
use clap::{Parser, ValueEnum};

use nucleoseq::{Alphabet, Sequence};

/// Alphabet specification for command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum AlphabetArg {
    /// DNA (A, C, G, T)
    Dna,
    /// RNA (A, C, G, U)
    Rna,
    /// No alphabet constraint
    Generic,
}

impl From<AlphabetArg> for Alphabet {
    fn from(arg: AlphabetArg) -> Self {
        match arg {
            AlphabetArg::Dna => Alphabet::Dna,
            AlphabetArg::Rna => Alphabet::Rna,
            AlphabetArg::Generic => Alphabet::Generic,
        }
    }
}

/// nucleoseq - Build and transform nucleic-acid sequences
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Residues of the input sequence
    residues: String,

    /// Average quality score of the input sequence
    #[arg(short = 'q', long = "quality", default_value = "0", allow_negative_numbers = true)]
    quality: f64,

    /// Alphabet the input is validated against
    #[arg(short = 'a', long = "alphabet", value_enum, default_value = "dna")]
    alphabet: AlphabetArg,

    /// Print the reverse complement (DNA only)
    #[arg(short = 'r', long = "reverse-complement")]
    reverse_complement: bool,

    /// Print the RNA transcription (T -> U)
    #[arg(short = 't', long = "transcribe")]
    transcribe: bool,

    /// Concatenate a generic sequence onto the input
    #[arg(short = 'c', long = "concat")]
    concat: Option<String>,

    /// Quality score of the concatenated sequence
    #[arg(long = "concat-quality", default_value = "0", allow_negative_numbers = true)]
    concat_quality: f64,
}

/// Writes one labelled sequence block.
fn write_block<W: Write>(out: &mut W, label: &str, seq: &Sequence) -> io::Result<()> {
    writeln!(out, "# {}", label)?;
    writeln!(out, "{}", seq)
}

fn run(args: Args) -> Result<()> {
    let alphabet: Alphabet = args.alphabet.into();
    let input = Sequence::with_alphabet(alphabet, args.residues, args.quality)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_block(&mut handle, &format!("{} input", alphabet), &input)?;

    if args.reverse_complement {
        if alphabet != Alphabet::Dna {
            eprintln!("Warning: reverse complement of a {} sequence", alphabet);
        }
        write_block(&mut handle, "reverse complement", &input.reverse_complement()?)?;
    }

    if args.transcribe {
        write_block(&mut handle, "transcription", &input.transcribe()?)?;
    }

    if let Some(other) = args.concat {
        let other = Sequence::new(other, args.concat_quality)?;
        write_block(&mut handle, "concatenation", &input.combine(&other)?)?;
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    run(args)
}
