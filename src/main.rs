use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use resume_skills::output::{render, OutputFormat};
use resume_skills::{
    Config, DefaultAnnotatorLoader, DocumentExtractor, PipelineConfig, SkillPipeline,
    SkillVocabulary,
};

const USAGE: &str = "Usage: resume-skills /path/to/resume.pdf";

#[derive(Parser, Debug)]
#[command(name = "resume-skills")]
#[command(version = "0.1.0")]
#[command(about = "Extract categorized skills from a resume")]
struct Args {
    /// Resume document (PDF or plain text)
    document: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// TOML skill vocabulary replacing the built-in one
    #[arg(long)]
    vocabulary: Option<PathBuf>,

    /// Entity recognition model name
    #[arg(long)]
    model: Option<String>,

    /// Hide the progress spinner
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    // Initialize logging on stderr; stdout carries the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("resume_skills=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let args = Args::parse();

    let Some(document) = args.document.as_deref() else {
        println!("{}", USAGE);
        return Ok(ExitCode::from(1));
    };

    match run(&args, document) {
        Ok(output) => write_output(&output, &args)?,
        Err(e) => {
            tracing::debug!("Pipeline failed ({:?})", e.kind());
            println!("Error: {}", e);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn run(args: &Args, document: &Path) -> resume_skills::Result<String> {
    let format: OutputFormat = args.format.parse()?;

    // Load configuration, CLI flags win over the environment
    let mut config = Config::from_env()?;
    if let Some(ref model) = args.model {
        config.ner_model = model.clone();
    }
    if let Some(ref vocabulary) = args.vocabulary {
        config.vocabulary_path = Some(vocabulary.clone());
    }

    // Load skill vocabulary
    let vocabulary = SkillVocabulary::load_or_default(config.vocabulary_path.as_deref())?;
    tracing::debug!(
        "Vocabulary has {} categories and {} keywords",
        vocabulary.len(),
        vocabulary.flat().len()
    );

    // Create pipeline; annotators load on first use
    let pipeline = SkillPipeline::new(
        DocumentExtractor::new(),
        DefaultAnnotatorLoader::new(config.clone()),
        vocabulary,
        PipelineConfig::from(&config),
    );

    // Run analysis
    let progress = spinner(args.quiet);
    progress.set_message(format!("Analyzing {}", document.display()));
    let report = pipeline.analyze_document(document);
    progress.finish_and_clear();

    let report = report?;
    tracing::info!(
        "Found {} skills across {} categories",
        report.total_skills,
        report.total_categories
    );
    render(&report, format)
}

fn spinner(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

fn write_output(output: &str, args: &Args) -> anyhow::Result<()> {
    if let Some(ref path) = args.output {
        std::fs::write(path, format!("{}\n", output))?;
        tracing::info!("Output written to: {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}
