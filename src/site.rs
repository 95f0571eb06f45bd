//! Batch processing of a generated documentation directory.
//!
//! Every `.html` page under the root is transformed, in parallel by default.
//! Pages are written back in place, or mirrored under an output directory.
//! Other files (navigation `*.js` data, images, stylesheets) are never read
//! or written.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::detect::is_doxygen_page;
use crate::error::{Error, Result};
use crate::parser::{ErrorMode, PageParser, ParseOptions};
use crate::render::to_html;
use crate::transform::{Pipeline, TransformOptions, TransformStats};

/// Options for processing a whole site.
#[derive(Debug, Clone)]
pub struct SiteOptions {
    /// Passes to run on each page
    pub transform: TransformOptions,

    /// Strict stops at the first failing page; lenient records it and goes on
    pub error_mode: ErrorMode,

    /// Write results here instead of overwriting the pages
    pub output_dir: Option<PathBuf>,

    /// Process pages on the rayon thread pool
    pub parallel: bool,

    /// Skip pages without a Doxygen generator tag
    pub require_doxygen: bool,
}

impl SiteOptions {
    /// Create new site options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set transform options.
    pub fn with_transform(mut self, options: TransformOptions) -> Self {
        self.transform = options;
        self
    }

    /// Enable lenient mode (record failures and continue).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Mirror transformed pages into `dir`.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Transform pages regardless of their generator tag.
    pub fn any_generator(mut self) -> Self {
        self.require_doxygen = false;
        self
    }
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            transform: TransformOptions::default(),
            error_mode: ErrorMode::Strict,
            output_dir: None,
            parallel: true,
            require_doxygen: true,
        }
    }
}

/// What happened to one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "lowercase")]
pub enum PageStatus {
    /// Transformed and written
    Transformed,
    /// Left alone, with the reason
    Skipped(String),
    /// Failed in lenient mode, with the error
    Failed(String),
}

/// Outcome for one page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageReport {
    /// Page path relative to the site root
    pub path: PathBuf,
    /// Outcome
    pub status: PageStatus,
    /// Counters, for transformed pages
    pub stats: Option<TransformStats>,
}

/// Outcome of processing a whole site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteReport {
    /// Site root
    pub root: PathBuf,
    /// When processing started
    pub started_at: DateTime<Utc>,
    /// When processing finished
    pub finished_at: DateTime<Utc>,
    /// Per-page outcomes in path order
    pub pages: Vec<PageReport>,
    /// Counters summed over all transformed pages
    pub total: TransformStats,
}

impl SiteReport {
    /// Number of transformed pages.
    pub fn transformed(&self) -> usize {
        self.count(|s| matches!(s, PageStatus::Transformed))
    }

    /// Number of skipped pages.
    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, PageStatus::Skipped(_)))
    }

    /// Number of failed pages.
    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, PageStatus::Failed(_)))
    }

    /// Wall time in milliseconds.
    pub fn duration_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }

    fn count(&self, pred: impl Fn(&PageStatus) -> bool) -> usize {
        self.pages.iter().filter(|p| pred(&p.status)).count()
    }
}

/// List every `.html` page under `root`, sorted by path.
pub fn collect_pages(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(Error::InvalidPath(format!(
            "{} is not a directory",
            root.display()
        )));
    }
    let mut pages = Vec::new();
    collect_into(root, &mut pages)?;
    pages.sort();
    Ok(pages)
}

fn collect_into(dir: &Path, pages: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_into(&path, pages)?;
        } else if is_html(&path) {
            pages.push(path);
        }
    }
    Ok(())
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("html") || e.eq_ignore_ascii_case("htm"))
}

/// Transform every page of a generated site.
///
/// Pages are read and transformed first, then written. In strict mode a
/// failing page aborts the run before anything is written, so the site is
/// left untouched.
pub fn process_site<P: AsRef<Path>>(root: P, options: &SiteOptions) -> Result<SiteReport> {
    process_site_with_progress(root, options, |_| {})
}

/// Transform every page of a generated site, calling `on_page` after each one.
///
/// `on_page` may be called from several threads at once.
pub fn process_site_with_progress<P, F>(
    root: P,
    options: &SiteOptions,
    on_page: F,
) -> Result<SiteReport>
where
    P: AsRef<Path>,
    F: Fn(&PageReport) + Sync,
{
    let root = root.as_ref();
    let started_at = Utc::now();
    let pages = collect_pages(root)?;
    log::info!("processing {} pages under {}", pages.len(), root.display());

    let pipeline = Pipeline::new(options.transform.clone());
    let run = |path: &PathBuf| {
        let result = process_page(root, path, options, &pipeline);
        if let Ok(output) = &result {
            on_page(&output.report);
        }
        result
    };
    let results: Vec<Result<PageOutput>> = if options.parallel {
        pages.par_iter().map(run).collect()
    } else {
        pages.iter().map(run).collect()
    };
    let results: Vec<Result<PageOutput>> = match options.error_mode {
        ErrorMode::Strict => results
            .into_iter()
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .map(Ok)
            .collect(),
        ErrorMode::Lenient => results,
    };

    let mut reports = Vec::with_capacity(results.len());
    let mut total = TransformStats::new();
    for (path, result) in pages.iter().zip(results) {
        // pages that failed to write were already reported as processed
        let (error, reported) = match result {
            Ok(output) => match write_output(output) {
                Ok(report) => {
                    if let Some(stats) = &report.stats {
                        total.merge(stats);
                    }
                    reports.push(report);
                    continue;
                }
                Err(e) => (e, true),
            },
            Err(e) => (e, false),
        };
        if options.error_mode == ErrorMode::Strict {
            return Err(error);
        }
        log::warn!("failed to process {}: {}", path.display(), error);
        let report = PageReport {
            path: relative(root, path)?,
            status: PageStatus::Failed(error.to_string()),
            stats: None,
        };
        if !reported {
            on_page(&report);
        }
        reports.push(report);
    }

    Ok(SiteReport {
        root: root.to_path_buf(),
        started_at,
        finished_at: Utc::now(),
        pages: reports,
        total,
    })
}

fn relative(root: &Path, path: &Path) -> Result<PathBuf> {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .map_err(|_| Error::InvalidPath(path.display().to_string()))
}

/// A processed page and the HTML still to be written for it.
struct PageOutput {
    report: PageReport,
    pending: Option<(PathBuf, String)>,
}

fn write_output(output: PageOutput) -> Result<PageReport> {
    if let Some((target, html)) = output.pending {
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, html)?;
        log::debug!("wrote {}", target.display());
    }
    Ok(output.report)
}

fn process_page(
    root: &Path,
    path: &Path,
    options: &SiteOptions,
    pipeline: &Pipeline,
) -> Result<PageOutput> {
    let rel = relative(root, path)?;
    let data = fs::read(path)?;
    let parse_options = ParseOptions::new().with_error_mode(options.error_mode);
    let parser = PageParser::from_bytes_with_options(&data, parse_options)?;

    if options.require_doxygen && !is_doxygen_page(parser.html()) {
        log::debug!("skipping {}: no Doxygen generator tag", rel.display());
        return Ok(PageOutput {
            report: PageReport {
                path: rel,
                status: PageStatus::Skipped("not generated by Doxygen".to_string()),
                stats: None,
            },
            pending: None,
        });
    }

    let mut tree = parser.parse()?;
    let stats = pipeline.run(&mut tree);
    let html = to_html(&tree);

    let target = match &options.output_dir {
        Some(dir) => dir.join(&rel),
        None => path.to_path_buf(),
    };

    Ok(PageOutput {
        report: PageReport {
            path: rel,
            status: PageStatus::Transformed,
            stats: Some(stats),
        },
        pending: Some((target, html)),
    })
}
