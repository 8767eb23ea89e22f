mod cli;
mod prompt;

use moviediff::{
    compare,
    config::{self, Config, ReportFormat},
    rename::{self, AcceptAll},
    report::{self, DiffReport},
};
use moviediff_parser::{parse_catalog, read_exclude_list};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "moviediff=debug,moviediff_parser=debug,moviediff_common=debug".to_string()
        } else {
            "moviediff=info,moviediff_parser=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Compare {
            mine,
            theirs,
            exclude,
            output,
            format,
        } => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            compare_catalogs(&config, &mine, &theirs, exclude, output, format)
        }
        Commands::Export { catalog, output } => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            export_catalog(&config, &catalog, &output)
        }
        Commands::Rename {
            catalog,
            base_path,
            yes,
            dry_run,
        } => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            rename_files(&config, &catalog, base_path, yes, dry_run)
        }
        Commands::Validate { file } => {
            let path = file.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("moviediff {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn compare_catalogs(
    config: &Config,
    mine: &Path,
    theirs: &Path,
    exclude: Option<PathBuf>,
    output: Option<PathBuf>,
    format: Option<ReportFormat>,
) -> Result<()> {
    let mine_movies = parse_catalog(mine)?;
    let theirs_movies = parse_catalog(theirs)?;
    tracing::info!(
        "Loaded {} movies from {:?} and {} from {:?}",
        mine_movies.len(),
        mine,
        theirs_movies.len(),
        theirs
    );

    let exclude_entries = match exclude.or_else(|| config.compare.exclude_list.clone()) {
        Some(path) => read_exclude_list(&path)
            .with_context(|| format!("Could not load exclusion list {:?}", path))?,
        None => Vec::new(),
    };

    let results = compare::reconcile(&mine_movies, &theirs_movies, &exclude_entries);
    let diff = DiffReport::from_results(results);

    let content = match format.unwrap_or(config.compare.format) {
        ReportFormat::Text => diff.render_text(),
        ReportFormat::Json => diff.render_json().context("Failed to serialize report")?,
    };

    let output = output.unwrap_or_else(|| config.compare.diff_file.clone());
    report::write_output(&output, &content)
}

fn export_catalog(config: &Config, catalog: &Path, output: &Path) -> Result<()> {
    let movies = parse_catalog(catalog)?;
    let content = report::render_table(&movies, config.export.delimiter_char())?;
    report::write_output(output, &content)
}

fn rename_files(
    config: &Config,
    catalog: &Path,
    base_path: Option<PathBuf>,
    yes: bool,
    dry_run: bool,
) -> Result<()> {
    let Some(base_path) = base_path.or_else(|| config.rename.base_path.clone()) else {
        anyhow::bail!("No base directory given (use --base-path or [rename] base_path)");
    };

    // Checked before the catalog is read so a typo fails fast
    if !base_path.is_dir() {
        return Err(moviediff_common::Error::BasePathMissing(base_path).into());
    }

    let movies = parse_catalog(catalog)?;
    let proposals = rename::plan_renames(&movies, &base_path)?;

    if proposals.is_empty() {
        println!("All local file names already carry the catalog year.");
        return Ok(());
    }

    if dry_run {
        for proposal in &proposals {
            println!("{} -> {}", proposal.from.display(), proposal.to.display());
        }
        println!("\n[DRY RUN] Would rename {} files", proposals.len());
        return Ok(());
    }

    let summary = if yes {
        rename::apply_renames(&proposals, &mut AcceptAll)?
    } else {
        rename::apply_renames(&proposals, &mut prompt::TerminalConfirm::default())?
    };

    println!(
        "Renamed: {}, skipped: {}, failed: {}",
        summary.renamed, summary.skipped, summary.failed
    );
    if summary.cancelled {
        println!("Cancelled, remaining files were left untouched.");
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            print_config(&config);
        }
        None => {
            println!("No config file specified, using defaults");
            print_config(&Config::default());
        }
    }

    Ok(())
}

fn print_config(config: &Config) {
    match &config.compare.exclude_list {
        Some(path) => println!("  Exclusion list: {}", path.display()),
        None => println!("  Exclusion list: (none)"),
    }
    println!("  Diff file: {}", config.compare.diff_file.display());
    println!("  Report format: {:?}", config.compare.format);
    println!("  Export delimiter: {:?}", config.export.delimiter);
    match &config.rename.base_path {
        Some(path) => println!("  Rename base path: {}", path.display()),
        None => println!("  Rename base path: (none)"),
    }
}
