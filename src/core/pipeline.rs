//! Bundling pipeline orchestration.
//!
//! Coordinates the end-to-end bundling workflow:
//! 1. Walk directory tree
//! 2. Read each candidate once on a bounded pool of blocking tasks
//! 3. Match, compress and categorize relevant files
//! 4. Group the survivors by category

use futures::stream::{self, StreamExt};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::core::bundle::ContextBundle;
use crate::core::config::ScanConfig;
use crate::core::error::{BundleError, Result};
use crate::core::relevance::{categorize, ContentCompressor, KeywordPattern, RelevanceMatcher};
use crate::core::scan::{relative_display, FileWalker};
use crate::core::types::{BundleStats, KeywordSet, MatchResult};

/// Orchestrates the bundling pipeline
pub struct BundlePipeline {
    walker: FileWalker,
    file_timeout: Duration,
    workers: usize,
}

/// Per-file work shared by every task of one run
struct FileProcessor {
    matcher: RelevanceMatcher,
    compressor: ContentCompressor,
}

impl FileProcessor {
    /// Read, match, compress and categorize one file
    fn process(&self, path: &Path, rel_path: String) -> Result<MatchResult> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::InvalidData {
                BundleError::FileReadFailed(format!("Skipping non-UTF-8 file: {rel_path}"))
            } else {
                BundleError::FileReadFailed(format!("Failed to read {rel_path}: {e}"))
            }
        })?;

        if !self.matcher.matches(&rel_path, &content) {
            return Ok(MatchResult::irrelevant(rel_path));
        }

        let compressed = self.compressor.compress(&content);
        if compressed.is_empty() {
            tracing::debug!("Matched {} but no line survived compression", rel_path);
            return Ok(MatchResult::irrelevant(rel_path));
        }

        let category = categorize(&rel_path, &content);
        Ok(MatchResult::relevant(rel_path, compressed, category))
    }
}

impl BundlePipeline {
    /// Create a new bundling pipeline
    ///
    /// # Arguments
    ///
    /// * `walker` - File lister for the root directory
    /// * `file_timeout` - Upper bound on processing one file
    /// * `workers` - Maximum number of files in flight
    pub fn new(walker: FileWalker, file_timeout: Duration, workers: usize) -> Self {
        Self {
            walker,
            file_timeout,
            workers: workers.max(1),
        }
    }

    /// Pipeline sized to the machine's available parallelism
    pub fn from_config(scan: &ScanConfig) -> Result<Self> {
        let walker = FileWalker::from_config(scan)?;
        Ok(Self::new(
            walker,
            Duration::from_secs(scan.file_timeout_secs),
            default_workers(),
        ))
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Never list `path` as a candidate, so a bundle written inside
    /// the scanned tree is not bundled again
    pub fn excluding(mut self, path: &Path) -> Self {
        self.walker.exclude_path(path);
        self
    }

    /// List the candidates under `root` and bundle them
    pub async fn bundle_directory(
        &self,
        root: &Path,
        keywords: Arc<KeywordSet>,
    ) -> Result<(ContextBundle, BundleStats)> {
        tracing::info!("Starting file collection from {:?}", root);
        let candidates = self.walker.collect_files(root)?;
        tracing::info!("Found {} candidate files", candidates.len());

        self.run(root, candidates, keywords).await
    }

    /// Bundle an explicit candidate list.
    ///
    /// Files that cannot be read or time out are logged and counted as
    /// skipped; they never fail the run. Output paths are relative to
    /// `root`.
    pub async fn run(
        &self,
        root: &Path,
        candidates: Vec<PathBuf>,
        keywords: Arc<KeywordSet>,
    ) -> Result<(ContextBundle, BundleStats)> {
        let start = Instant::now();
        let total = candidates.len();

        let mut stats = BundleStats {
            files_scanned: total,
            keywords: keywords.len(),
            ..BundleStats::default()
        };

        if keywords.is_empty() {
            tracing::info!("No keywords, skipping {} candidates", total);
            stats.duration_ms = start.elapsed().as_millis() as u64;
            return Ok((ContextBundle::new(), stats));
        }

        let pattern = Arc::new(KeywordPattern::new(&keywords)?);
        let processor = Arc::new(FileProcessor {
            matcher: RelevanceMatcher::with_pattern(
                Arc::clone(&keywords),
                Arc::clone(&pattern),
                self.walker.extensions().to_vec(),
            ),
            compressor: ContentCompressor::with_pattern(pattern),
        });

        let file_timeout = self.file_timeout;
        let mut outcomes = stream::iter(candidates)
            .map(|path| {
                let processor = Arc::clone(&processor);
                let rel_path = relative_display(root, &path);
                async move {
                    let label = rel_path.clone();
                    // A timed-out task keeps its blocking thread until the read returns
                    let task = tokio::task::spawn_blocking(move || processor.process(&path, rel_path));
                    (label, tokio::time::timeout(file_timeout, task).await)
                }
            })
            .buffer_unordered(self.workers);

        let mut bundle = ContextBundle::new();
        let mut completed = 0usize;

        while let Some((label, outcome)) = outcomes.next().await {
            completed += 1;
            if completed % 100 == 0 {
                tracing::info!("Progress: {}/{} files processed", completed, total);
            }

            match outcome {
                Ok(Ok(Ok(result))) => {
                    if bundle.push(result) {
                        stats.files_matched += 1;
                        tracing::debug!("Bundled {}", label);
                    }
                }
                Ok(Ok(Err(e))) => {
                    tracing::warn!("{}", e);
                    stats.files_skipped += 1;
                }
                Ok(Err(e)) => {
                    tracing::warn!("Task for {} failed: {}", label, e);
                    stats.files_skipped += 1;
                }
                Err(_) => {
                    tracing::warn!("Timed out after {:?} processing {}", file_timeout, label);
                    stats.files_skipped += 1;
                }
            }
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Bundling complete: {} of {} files matched, {} skipped, \
             {} keywords in {}ms",
            stats.files_matched,
            stats.files_scanned,
            stats.files_skipped,
            stats.keywords,
            stats.duration_ms
        );

        Ok((bundle, stats))
    }
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
