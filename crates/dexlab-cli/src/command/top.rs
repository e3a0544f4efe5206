use std::path::PathBuf;

use dexlab_core::{Column, query::TOP_N};

use crate::{report, util};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct TopArg {
    /// Column to rank by, e.g. `Speed` or `Sp. Def`
    #[arg(long)]
    field: Column,
    /// Path to the input CSV dataset
    #[arg(long, default_value = "pokemon.csv")]
    input: PathBuf,
    /// Number of records to show
    #[arg(long, default_value_t = TOP_N)]
    count: usize,
}

pub(crate) fn run(arg: &TopArg) -> anyhow::Result<()> {
    let Some(analyzer) = util::load_dataset(&arg.input)? else {
        return Ok(());
    };
    let top = analyzer.top_n(arg.field, arg.count);
    println!("Top {} by {}", top.len(), arg.field);
    report::print_ranking(arg.field, &top);
    Ok(())
}
