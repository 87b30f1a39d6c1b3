use std::io::{self, Write};
use std::process;
use std::time;

use clap::Parser;
use pairwise_aligner::{
    cli::{init_verbose, write_outcome, Cli, Prompter},
    AlignerConfig, AlignerError, AlignmentOutcome, PairwiseAligner,
};

fn runner() -> Result<(), AlignerError> {
    let cli = Cli::parse();
    init_verbose(&cli);
    log::info!(
        "Running {}-{} [{}]",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        cli.command.name()
    );

    let config = AlignerConfig::new().with_gap_char(cli.gap_char)?;
    let aligner = PairwiseAligner::new(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());
    let (v, w, params) = cli.command.resolve(&mut prompter)?;
    drop(prompter);
    log::trace!("Alignment parameters: {:#?}", params);

    let start_timer = time::Instant::now();
    let outcome = aligner.align(v.symbols(), w.symbols(), &params)?;
    match &outcome {
        AlignmentOutcome::Global(result) => log::info!("Alignment stats: {:?}", result.stats()),
        AlignmentOutcome::LocalAffine(result) => log::info!("Alignment stats: {:?}", result.stats()),
        AlignmentOutcome::Lcs(_) => {}
    }

    let mut out = io::stdout().lock();
    write_outcome(&mut out, &outcome, aligner.config().gap_char())?;
    out.flush()?;

    log::info!("Total execution time: {:.2?}", start_timer.elapsed());
    Ok(())
}

fn main() {
    if let Err(e) = runner() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
