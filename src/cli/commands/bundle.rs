//! Bundle command - expand keywords, select files and write the JSON bundle

use crate::cli::output::{colors, format_duration, format_keywords, print_json, print_warning};
use crate::cli::{resolve_keywords, OutputFormat};
use crate::core::error::BundleError;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the bundle command
#[derive(Args, Debug)]
pub struct BundleArgs {
    /// Keywords to expand (prompted on stdin when omitted)
    pub keywords: Vec<String>,

    /// Directory to scan
    #[arg(long, short = 'r', default_value = ".")]
    pub root: PathBuf,

    /// Where to write the JSON bundle (default from config)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Use only the built-in thesaurus, no network lookups
    #[arg(long)]
    pub offline: bool,

    /// Suppress progress output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Bundling result response
#[derive(Debug, Serialize)]
pub struct BundleResponse {
    pub root: String,
    pub output: String,
    pub keywords: usize,
    pub files_scanned: usize,
    pub files_matched: usize,
    pub files_skipped: usize,
    pub categories: BTreeMap<String, usize>,
    pub duration_secs: f64,
}

/// Execute the bundle command
pub async fn execute(
    args: BundleArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = args.root.canonicalize().map_err(|e| {
        BundleError::InvalidPath(format!(
            "'{}': {}. Make sure the directory exists and is accessible.",
            args.root.display(),
            e
        ))
    })?;

    let output_path = args
        .output
        .unwrap_or_else(|| services.config.output.path.clone());

    let words = resolve_keywords(args.keywords)?;
    let keywords = Arc::new(services.expander.expand(&words).await);

    let progress = !args.quiet && format == OutputFormat::Human;
    if progress {
        println!(
            "Searching in: {}",
            colors::file_path(&root.display().to_string())
        );
        println!("Expanded keywords: {}", format_keywords(keywords.iter()));
    }

    let pipeline = services.create_pipeline()?.excluding(&output_path);
    let (bundle, stats) = pipeline.bundle_directory(&root, keywords).await?;

    bundle.write_json(&output_path)?;

    let response = BundleResponse {
        root: root.to_string_lossy().into_owned(),
        output: output_path.to_string_lossy().into_owned(),
        keywords: stats.keywords,
        files_scanned: stats.files_scanned,
        files_matched: stats.files_matched,
        files_skipped: stats.files_skipped,
        categories: bundle
            .categories()
            .map(|c| (c.to_string(), bundle.entries(c).len()))
            .collect(),
        duration_secs: stats.duration_ms as f64 / 1000.0,
    };

    match format {
        OutputFormat::Human => {
            if progress {
                for (category, entry) in bundle.iter() {
                    println!(
                        "Processed: {} {}",
                        colors::file_path(&entry.file),
                        colors::dim(&format!("[{}]", colors::category(category.as_str())))
                    );
                }
                if stats.files_skipped > 0 {
                    print_warning(&format!("{} files could not be read", stats.files_skipped));
                }
            }
            println!(
                "{} {} files saved in '{}'. {}",
                colors::success("Finished processing."),
                colors::number(&stats.files_matched.to_string()),
                response.output,
                colors::dim(&format!(
                    "({} scanned in {})",
                    stats.files_scanned,
                    format_duration(response.duration_secs)
                ))
            );
        }
        OutputFormat::Json => {
            print_json(&response)?;
        }
    }

    Ok(())
}
