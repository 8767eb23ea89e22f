use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub compare: CompareConfig,

    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub rename: RenameConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CompareConfig {
    /// Titles to leave out of every comparison
    #[serde(default)]
    pub exclude_list: Option<PathBuf>,

    /// Where the diff report is written (`-` for stdout)
    #[serde(default = "default_diff_file")]
    pub diff_file: PathBuf,

    #[serde(default)]
    pub format: ReportFormat,
}

fn default_diff_file() -> PathBuf {
    PathBuf::from("difflist.txt")
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            exclude_list: None,
            diff_file: default_diff_file(),
            format: ReportFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Grouped plain-text listing
    #[default]
    Text,
    /// The same groups as a JSON array
    Json,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Column separator for `export` (default: tab)
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

fn default_delimiter() -> String {
    "\t".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
        }
    }
}

impl ExportConfig {
    /// The delimiter as a single character. Validated at load time.
    pub fn delimiter_char(&self) -> char {
        self.delimiter.chars().next().unwrap_or('\t')
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RenameConfig {
    /// Local directory holding the movie files
    #[serde(default)]
    pub base_path: Option<PathBuf>,
}
