use crate::reports;
use betti_summary::config::AnalysisConfig;
use betti_summary::source::FsSource;
use betti_summary::summary::totals_by_index;
use betti_summary::BtResult;
use clap::Args;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct TotalsArgs {
    /// Polyform size (directory name under the analysis root)
    pub size: String,

    /// Number of indexed result files to read (0..COUNT)
    pub count: usize,
}

pub fn run(args: &TotalsArgs, config: &AnalysisConfig) -> BtResult<()> {
    info!(
        "📂 Reading {} results from {}",
        args.count,
        config.size_dir(&args.size).display()
    );

    let totals = totals_by_index(&FsSource, config, &args.size, args.count)?;
    reports::emit(&reports::render_totals(&totals, config.format)?);
    Ok(())
}
