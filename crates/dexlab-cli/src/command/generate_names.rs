use dexlab_core::generator;

use crate::util;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GenerateNamesArg {
    /// Number of names to generate
    #[arg(long, default_value_t = 10)]
    count: usize,
    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

pub(crate) fn run(arg: &GenerateNamesArg) {
    let mut rng = util::rng_from_seed(arg.seed);
    for _ in 0..arg.count {
        println!("{}", generator::generate_name(&mut rng));
    }
}
