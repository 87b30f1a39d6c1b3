//! Command-line front end: argument parsing, interactive prompting for
//! anything not given on the command line, and result rendering.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use clap::{ArgAction, Args, Parser, Subcommand};
use log::LevelFilter;

use crate::{
    parse_weight, AffineScoring, AlignerError, AlignmentMode, AlignmentOutcome, AlignmentParams,
    LinearScoring, Sequence, DEFAULT_GAP_CHAR,
};

#[derive(Parser, Debug)]
#[command(
    name = "pairwise_aligner",
    version,
    about = "Optimal pairwise alignment by dynamic programming",
    long_about = None,
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Character printed for gap columns
    #[arg(long = "gap-char", value_name = "CHAR", default_value_t = DEFAULT_GAP_CHAR, global = true)]
    pub gap_char: char,

    /// Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[clap(about = "Longest common subsequence")]
    Lcs(SequenceArgs),
    #[clap(about = "Global alignment with a linear gap penalty (Needleman-Wunsch)")]
    Global(GlobalArgs),
    #[clap(about = "Local alignment with affine gap penalties (Gotoh)")]
    Local(LocalArgs),
}

impl Command {
    pub fn mode(&self) -> AlignmentMode {
        match self {
            Command::Lcs(_) => AlignmentMode::Lcs,
            Command::Global(_) => AlignmentMode::Global,
            Command::Local(_) => AlignmentMode::LocalAffine,
        }
    }

    pub fn name(&self) -> &'static str {
        self.mode().name()
    }

    /// Fills in missing sequences and weights from `prompter`, in the order
    /// sequence 1, sequence 2, then each weight.
    pub fn resolve<R: BufRead, W: Write>(
        self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<(Sequence, Sequence, AlignmentParams), AlignerError> {
        match self {
            Command::Lcs(sequences) => {
                let (v, w) = sequences.resolve(prompter)?;
                Ok((v, w, AlignmentParams::Lcs))
            }
            Command::Global(args) => {
                let (v, w) = args.sequences.resolve(prompter)?;
                let scoring = LinearScoring::new(
                    prompter.weight("match", "Enter Match Score (e.g. 1): ", args.match_score)?,
                    prompter.weight(
                        "mismatch",
                        "Enter Mismatch Penalty (e.g. -1): ",
                        args.mismatch,
                    )?,
                    prompter.weight("gap", "Enter Gap Penalty (e.g. -2): ", args.gap)?,
                );
                Ok((v, w, AlignmentParams::Global(scoring)))
            }
            Command::Local(args) => {
                let (v, w) = args.sequences.resolve(prompter)?;
                let scoring = AffineScoring::new(
                    prompter.weight("match", "Enter Match Score (e.g. 1): ", args.match_score)?,
                    prompter.weight(
                        "mismatch",
                        "Enter Mismatch Penalty (e.g. -1): ",
                        args.mismatch,
                    )?,
                    prompter.weight(
                        "gap-open",
                        "Enter Gap Opening Penalty (e.g. -2): ",
                        args.gap_open,
                    )?,
                    prompter.weight(
                        "gap-extend",
                        "Enter Gap Extension Penalty (e.g. -1): ",
                        args.gap_extend,
                    )?,
                );
                Ok((v, w, AlignmentParams::LocalAffine(scoring)))
            }
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct SequenceArgs {
    /// First sequence (prompted for when omitted)
    #[arg(value_name = "SEQ1")]
    pub seq1: Option<String>,

    /// Second sequence (prompted for when omitted)
    #[arg(value_name = "SEQ2")]
    pub seq2: Option<String>,
}

impl SequenceArgs {
    fn resolve<R: BufRead, W: Write>(
        self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<(Sequence, Sequence), AlignerError> {
        let v = prompter.text("Enter Sequence 1: ", self.seq1)?;
        let w = prompter.text("Enter Sequence 2: ", self.seq2)?;
        Ok((Sequence::new(&v), Sequence::new(&w)))
    }
}

#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    #[command(flatten)]
    pub sequences: SequenceArgs,

    /// Score for identical symbols (integer)
    #[arg(long = "match", value_name = "SCORE", allow_hyphen_values = true)]
    pub match_score: Option<String>,

    /// Score for differing symbols (integer)
    #[arg(long = "mismatch", value_name = "SCORE", allow_hyphen_values = true)]
    pub mismatch: Option<String>,

    /// Score per gap column (integer)
    #[arg(long = "gap", value_name = "SCORE", allow_hyphen_values = true)]
    pub gap: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct LocalArgs {
    #[command(flatten)]
    pub sequences: SequenceArgs,

    /// Score for identical symbols
    #[arg(long = "match", value_name = "SCORE", allow_hyphen_values = true)]
    pub match_score: Option<String>,

    /// Score for differing symbols
    #[arg(long = "mismatch", value_name = "SCORE", allow_hyphen_values = true)]
    pub mismatch: Option<String>,

    /// Score for the first column of a gap run
    #[arg(long = "gap-open", value_name = "SCORE", allow_hyphen_values = true)]
    pub gap_open: Option<String>,

    /// Score for each further column of a gap run
    #[arg(long = "gap-extend", value_name = "SCORE", allow_hyphen_values = true)]
    pub gap_extend: Option<String>,
}

/// Line-oriented prompts over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// `given` if present, otherwise one trimmed line read after `prompt`.
    pub fn text(&mut self, prompt: &str, given: Option<String>) -> Result<String, AlignerError> {
        if let Some(text) = given {
            return Ok(text.trim().to_string());
        }
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before all values were read",
            )
            .into());
        }
        Ok(line.trim().to_string())
    }

    pub fn weight<S: FromStr>(
        &mut self,
        name: &'static str,
        prompt: &str,
        given: Option<String>,
    ) -> Result<S, AlignerError> {
        let text = self.text(prompt, given)?;
        parse_weight(name, &text)
    }
}

pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::from_default_env()
        .filter_level(filter_level)
        .format_timestamp_secs()
        .init();
}

/// Writes an outcome in the report layout of the interactive tools.
pub fn write_outcome<W: Write>(
    out: &mut W,
    outcome: &AlignmentOutcome<char>,
    gap_char: char,
) -> io::Result<()> {
    match outcome {
        AlignmentOutcome::Lcs(result) => {
            writeln!(out, "\nLCS Length: {}", result.length)?;
            let subsequence: String = result.subsequence.iter().collect();
            writeln!(out, "LCS String: {}", subsequence)?;
        }
        AlignmentOutcome::Global(result) => {
            let (v, w) = result.render(gap_char);
            writeln!(out, "\nAlignment Score: {}", result.score)?;
            writeln!(out, "Seq1: {}", v)?;
            writeln!(out, "Seq2: {}", w)?;
        }
        AlignmentOutcome::LocalAffine(result) => {
            let (v, w) = result.render(gap_char);
            writeln!(out, "\nBest Alignment:")?;
            writeln!(out, "Score: {}", result.score)?;
            writeln!(out, "Seq1: {}", v)?;
            writeln!(out, "Seq2: {}", w)?;
        }
    }
    Ok(())
}
