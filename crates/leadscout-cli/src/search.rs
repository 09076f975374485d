//! `leadscout search`: resolve inputs, run every query, show and export the
//! results.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;
use clap::{Args, ValueEnum};
use leadscout_core::{
    export_file_name, load_queries_file, resolve, AppConfig, Bucket, ExportFormat, RawInputs,
    RunParameters, RunSession, SortKey, DEFAULT_MAX_RESULTS_PER_QUERY, DEFAULT_MIN_LEAD_SCORE,
    DEFAULT_QUERIES,
};
use leadscout_pipeline::{run_leads, FatalInitError, Progress, RunSummary};
use leadscout_x::{XAgentSettings, XAgentSource};

use crate::view;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    /// Score, high to low
    ScoreDesc,
    /// Score, low to high
    ScoreAsc,
    /// Author, A-Z
    Author,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::ScoreDesc => SortKey::ScoreDesc,
            SortArg::ScoreAsc => SortKey::ScoreAsc,
            SortArg::Author => SortKey::AuthorAsc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BucketArg {
    /// Scores 8-10
    High,
    /// Scores 5-7
    Medium,
    /// Scores 1-4
    Low,
}

impl From<BucketArg> for Bucket {
    fn from(arg: BucketArg) -> Self {
        match arg {
            BucketArg::High => Bucket::High,
            BucketArg::Medium => Bucket::Medium,
            BucketArg::Low => Bucket::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportArg {
    Json,
    Csv,
}

impl From<ExportArg> for ExportFormat {
    fn from(arg: ExportArg) -> Self {
        match arg {
            ExportArg::Json => ExportFormat::Json,
            ExportArg::Csv => ExportFormat::Csv,
        }
    }
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Search query; repeat for several. Defaults to the built-in B2B queries
    #[arg(long = "query", short = 'q', conflicts_with = "queries_file")]
    pub queries: Vec<String>,

    /// File with one search query per line
    #[arg(long)]
    pub queries_file: Option<PathBuf>,

    /// Posts to request per query (10-100)
    #[arg(long, default_value_t = DEFAULT_MAX_RESULTS_PER_QUERY)]
    pub max_results: usize,

    /// Minimum lead score to keep (1-10)
    #[arg(long, default_value_t = DEFAULT_MIN_LEAD_SCORE)]
    pub min_score: u8,

    /// Lead ordering in the leads view
    #[arg(long, value_enum, default_value_t = SortArg::ScoreDesc)]
    pub sort: SortArg,

    /// Only show leads in this score bucket; repeat for several
    #[arg(long = "bucket", value_enum)]
    pub buckets: Vec<BucketArg>,

    /// Also list every post explored
    #[arg(long)]
    pub show_posts: bool,

    /// Write the leads to a timestamped file in this format
    #[arg(long, value_enum)]
    pub export: Option<ExportArg>,

    /// Directory for exported files; defaults to the configured export directory
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Validate inputs and print the plan without calling any external API
    #[arg(long)]
    pub dry_run: bool,
}

/// Newline-separated query text from flags, a file, or the defaults.
fn queries_text(args: &SearchArgs) -> anyhow::Result<String> {
    if !args.queries.is_empty() {
        return Ok(args.queries.join("\n"));
    }
    if let Some(path) = &args.queries_file {
        return Ok(load_queries_file(path)?);
    }
    Ok(DEFAULT_QUERIES.join("\n"))
}

fn print_progress(event: Progress) {
    match event {
        Progress::Initializing => println!("Initializing X and OpenAI clients..."),
        Progress::QueryStarted {
            index,
            total,
            query,
        } => println!("Searching X for: '{query}' ({index}/{total})"),
        Progress::QueryFinished { .. } => {}
        Progress::Completed => println!("Analysis complete!"),
    }
}

fn print_plan(params: &RunParameters) {
    println!(
        "dry-run: would run {} queries ({} posts each, min score {}):",
        params.queries.len(),
        params.max_results_per_query,
        params.min_lead_score
    );
    for query in &params.queries {
        println!("  - {query}");
    }
}

/// Write `session`'s leads as `format` into `dir`; returns the file path.
fn export_leads(session: &RunSession, format: ExportFormat, dir: &Path) -> anyhow::Result<PathBuf> {
    let body = format
        .render(session.leads())
        .context("failed to render leads for export")?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create export directory {}", dir.display()))?;
    let path = dir.join(export_file_name(format, Local::now().naive_local()));
    std::fs::write(&path, body).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

/// Run `leadscout search`.
///
/// # Errors
///
/// Returns an error if inputs fail validation, the lead source cannot be
/// built, or an export cannot be written. Individual query failures are
/// printed as warnings and do not fail the command.
pub(crate) async fn run_search(config: &AppConfig, args: &SearchArgs) -> anyhow::Result<()> {
    let raw = RawInputs::from_config(
        config,
        queries_text(args)?,
        args.max_results,
        args.min_score,
    );
    let params = resolve(&raw).context("invalid search parameters")?;

    if args.dry_run {
        print_plan(&params);
        return Ok(());
    }

    let settings = XAgentSettings::from_config(config);
    let report = run_leads(
        &params,
        |credentials| XAgentSource::new(&settings, credentials).map_err(FatalInitError::from),
        print_progress,
    )
    .await;

    for warning in report.warnings() {
        eprintln!("warning: {warning}");
    }

    let summary = report.summary();
    if matches!(summary, RunSummary::Failed(_)) {
        anyhow::bail!("{summary}");
    }

    let mut session = RunSession::new();
    session.publish(report.results);

    println!();
    print!("{}", view::dashboard(&session));
    println!();
    let buckets: HashSet<Bucket> = args.buckets.iter().copied().map(Bucket::from).collect();
    print!("{}", view::leads(&session, args.sort.into(), &buckets));
    if args.show_posts {
        println!();
        print!("{}", view::posts(session.posts()));
    }
    println!();
    println!("{summary}");

    if let Some(format) = args.export {
        if session.leads().is_empty() {
            println!("No leads to export yet. Complete a search first!");
        } else {
            let dir = args
                .out_dir
                .as_deref()
                .unwrap_or(config.export_dir.as_path());
            let path = export_leads(&session, format.into(), dir)?;
            println!(
                "Exported {} lead(s) to {}",
                session.leads().len(),
                path.display()
            );
        }
    }

    Ok(())
}
