use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pressproof::{
    run_preflight, Dimension, DocumentFacts, JobSpec, NameHeuristics, PreflightReport,
    SpotColorClassifier, Verdict,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "pressproof",
    about = "Print-production PDF preflight checks",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a document facts snapshot against job expectations
    Check {
        /// Facts snapshot (JSON) produced by the PDF structure reader
        facts: PathBuf,

        /// Expected trim width in inches
        #[arg(long)]
        width: f64,

        /// Expected trim height in inches
        #[arg(long)]
        height: f64,

        /// Printed sides: "1", "2" or "multi"
        #[arg(short, long, default_value = "1")]
        pages: String,

        /// Ink requirement: CMYK, CMYK+WHITE, WHITE_ONLY, CMYK+PANTONE or BLACK_ONLY
        #[arg(short, long, default_value = "CMYK")]
        ink: String,

        /// Require a dieline spot color (custom cut shape)
        #[arg(short, long)]
        dieline: bool,

        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Summarize a facts snapshot
    Inspect {
        /// Facts snapshot (JSON) produced by the PDF structure reader
        facts: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            facts,
            width,
            height,
            pages,
            ink,
            dieline,
            json,
            output,
        } => {
            let facts = load_facts(&facts)?;
            let spec = JobSpec::new(
                Dimension::new(width, height),
                pages.parse()?,
                ink.parse()?,
                dieline,
            )?;

            let report = run_preflight(&facts, &spec);
            let rendered = if json {
                report.to_json()?
            } else {
                render_report(&report)
            };

            match output {
                Some(path) => fs::write(&path, rendered)
                    .with_context(|| format!("Failed to write report to {}", path.display()))?,
                None => println!("{rendered}"),
            }

            if !report.overall_valid() {
                std::process::exit(1);
            }
        }

        Commands::Inspect { facts } => {
            let path = facts;
            let facts = load_facts(&path)?;
            print_facts_summary(&path, &facts);
        }
    }

    Ok(())
}

fn load_facts(path: &Path) -> Result<DocumentFacts> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read facts snapshot {}", path.display()))?;
    let facts: DocumentFacts = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid facts snapshot {}", path.display()))?;
    Ok(facts)
}

fn render_report(report: &PreflightReport) -> String {
    let mut out = String::from("Preflight Report\n================\n");
    out.push_str(&format!(
        "Overall: {}\n\n",
        if report.overall_valid() { "PASS" } else { "FAIL" }
    ));

    for (criterion, result) in report.criteria() {
        let verdict = match result.verdict() {
            Verdict::Pass => "PASS",
            Verdict::Fail => "FAIL",
            Verdict::NotEvaluated => "not evaluated",
        };
        out.push_str(&format!("  {:<22} {}\n", criterion.name(), verdict));
        if let Some(error) = result.error() {
            for line in error.lines() {
                out.push_str(&format!("      {line}\n"));
            }
        }
    }

    out
}

fn print_facts_summary(path: &Path, facts: &DocumentFacts) {
    let classifier = NameHeuristics;
    let size = facts.box_size();

    println!("Facts snapshot: {}", path.display());
    println!("==========================================");
    println!(
        "Box size: {} x {} pt ({size})",
        facts.box_width_pt, facts.box_height_pt
    );
    println!("Pages: {}", facts.page_count);

    if facts.spot_color_names.is_empty() {
        println!("Spot colors: none");
    } else {
        println!("Spot colors ({}):", facts.spot_color_names.len());
        for name in &facts.spot_color_names {
            let tag = if classifier.is_dieline(name) {
                " [cut path]"
            } else if classifier.is_white_ink(name) {
                " [white ink]"
            } else {
                ""
            };
            println!("  {name}{tag}");
        }
    }

    println!(
        "White ink present: {}",
        if facts.has_white_ink(&classifier) { "yes" } else { "no" }
    );
    println!(
        "Dieline present: {}",
        if facts.has_dieline(&classifier) { "yes" } else { "no" }
    );
}
