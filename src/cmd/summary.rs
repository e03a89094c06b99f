use crate::reports;
use betti_summary::config::AnalysisConfig;
use betti_summary::source::FsSource;
use betti_summary::summary::summarize_by_probability;
use betti_summary::BtResult;
use clap::Args;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SummaryArgs {
    /// Polyform size (directory name under the analysis root)
    pub size: String,
}

pub fn run(args: &SummaryArgs, config: &AnalysisConfig) -> BtResult<()> {
    info!(
        "🔎 Averaging probability buckets in {}",
        config.size_dir(&args.size).display()
    );

    let summary = summarize_by_probability(&FsSource, config, &args.size)?;
    reports::emit(&reports::render_summary(&summary, config.format, config.precision)?);
    Ok(())
}
