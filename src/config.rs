use crate::error::{BettiError, BtResult};
use clap::{parser::ValueSource, ArgMatches, Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use strum::{Display, EnumString};

pub const DEFAULT_ROOT: &str = "../analysis";
pub const BETTI_SUFFIX: &str = ".txt_betti.txt";
pub const DEFAULT_PRECISION: usize = 3;

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Root of the analysis tree (`<root>/<size>/...`)
    #[arg(global = true, short, long, default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// File name suffix of Betti reports
    #[arg(global = true, long, default_value = BETTI_SUFFIX)]
    pub suffix: String,

    /// Fail instead of warning when files disagree on the number of dimensions
    #[arg(global = true, long, default_value_t = false)]
    pub strict_dims: bool,

    #[arg(global = true, short, long, value_enum, default_value_t = OutputFormat::Tsv)]
    pub format: OutputFormat,

    /// Decimal places for averages in TSV and table output
    #[arg(global = true, short, long, default_value_t = DEFAULT_PRECISION)]
    pub precision: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            suffix: BETTI_SUFFIX.to_string(),
            strict_dims: false,
            format: OutputFormat::Tsv,
            precision: DEFAULT_PRECISION,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Tsv,
    Table,
    Json,
}

impl AnalysisConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> BtResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| BettiError::from_io(path, e))?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> BtResult<()> {
        if self.suffix.trim().is_empty() {
            return Err(BettiError::Config("suffix must not be empty".to_string()));
        }
        if self.precision > 17 {
            return Err(BettiError::Config(format!(
                "precision {} is above the 17 digits an f64 carries",
                self.precision
            )));
        }
        Ok(())
    }

    /// Directory holding all results for one polyform size.
    pub fn size_dir(&self, size: &str) -> PathBuf {
        self.root.join(size)
    }

    /// Path of the `index`-th flat result file for `size`.
    pub fn indexed_file(&self, size: &str, index: usize) -> PathBuf {
        self.size_dir(size).join(format!("{}{}", index, self.suffix))
    }

    /// Overwrites fields the user passed explicitly on the command line.
    pub fn merge_from_cli(&mut self, cli: &AnalysisConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(root, "root");
        update_if_present!(suffix, "suffix");
        update_if_present!(strict_dims, "strict_dims");
        update_if_present!(format, "format");
        update_if_present!(precision, "precision");
    }
}
