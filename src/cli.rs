use clap::{Parser, Subcommand};
use moviediff::config::ReportFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "moviediff")]
#[command(author, version, about = "Compare movie library exports and fix up local file names")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare two exported catalogs and write a diff report
    Compare {
        /// Your own catalog (the reference collection)
        #[arg(long, visible_alias = "xmlfile1")]
        mine: PathBuf,

        /// The catalog to compare against yours
        #[arg(long, visible_alias = "xmlfile2")]
        theirs: PathBuf,

        /// List of "Title (Year)" lines to leave out
        #[arg(short, long, visible_alias = "excludelist")]
        exclude: Option<PathBuf>,

        /// Report destination, `-` for stdout (default: difflist.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report format
        #[arg(long, value_enum)]
        format: Option<ReportFormat>,
    },

    /// Export a catalog as a delimited movie list
    Export {
        /// Catalog to export
        #[arg(long, visible_alias = "xmlfile")]
        catalog: PathBuf,

        /// Destination file, `-` for stdout
        #[arg(short, long, default_value = "-")]
        output: PathBuf,
    },

    /// Rename local movie files so their names carry the catalog year
    Rename {
        /// Catalog with the canonical years
        #[arg(long, visible_alias = "xmlfile")]
        catalog: PathBuf,

        /// Directory that holds the movie files
        #[arg(short, long, visible_alias = "basepath")]
        base_path: Option<PathBuf>,

        /// Rename without asking
        #[arg(short, long)]
        yes: bool,

        /// Only list the proposed renames
        #[arg(long, conflicts_with = "yes")]
        dry_run: bool,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        #[arg(value_name = "CONFIG")]
        file: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
