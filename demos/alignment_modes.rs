use pairwise_aligner::{
    AffineScoring, AlignerConfig, AlignmentOutcome, AlignmentParams, LinearScoring,
    PairwiseAligner, Sequence,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let aligner = PairwiseAligner::new(AlignerConfig::new());

    let seq1 = Sequence::new("AGACTAGTTAC");
    let seq2 = Sequence::new("CGAGACGT");

    let modes = [
        AlignmentParams::Lcs,
        AlignmentParams::Global(LinearScoring::new(1, -1, -2)),
        AlignmentParams::LocalAffine(AffineScoring::new(1.0, -1.0, -3.0, -1.0)),
    ];

    for params in &modes {
        println!("== {}", params.mode());
        match aligner.align(seq1.symbols(), seq2.symbols(), params)? {
            AlignmentOutcome::Lcs(result) => {
                println!("Length: {}", result.length);
                let subsequence: String = result.subsequence.iter().collect();
                println!("Subsequence: {}", subsequence);
            }
            AlignmentOutcome::Global(result) => {
                let (v, w) = aligner.render(&result);
                println!("Score: {}", result.score);
                println!("Aligned sequence 1: {}", v);
                println!("Aligned sequence 2: {}", w);
                println!("Operations: {:?}", result.operations);
            }
            AlignmentOutcome::LocalAffine(result) => {
                let (v, w) = aligner.render(&result);
                println!("Score: {}", result.score);
                println!("Aligned sequence 1: {}", v);
                println!("Aligned sequence 2: {}", w);
                println!("Stats: {:?}", result.stats());
            }
        }
    }

    Ok(())
}
