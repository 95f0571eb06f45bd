//! doxpanel CLI - Doxygen HTML restyling tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use doxpanel::{
    detect_generator, parse_file_with_options, site, Doxpanel, JsonFormat, PageStatus,
    ParseOptions, SiteOptions, TransformOptions, TransformStats,
};

#[derive(Parser)]
#[command(name = "doxpanel")]
#[command(version)]
#[command(about = "Restyle Doxygen HTML output into Bootstrap panels, labels and badges", long_about = None)]
struct Cli {
    /// Input page or documentation directory
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output file or directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transform a single page
    Transform {
        /// Input HTML page
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE", conflicts_with = "in_place")]
        output: Option<PathBuf>,

        /// Overwrite the input page
        #[arg(short, long)]
        in_place: bool,

        /// Replace invalid UTF-8 instead of failing
        #[arg(long)]
        lenient: bool,

        #[command(flatten)]
        passes: PassFlags,
    },

    /// Transform every page of a generated documentation directory
    Site {
        /// Documentation directory (Doxygen's html/ output)
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Write pages here instead of overwriting them
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Record failing pages and continue
        #[arg(long)]
        lenient: bool,

        /// Process pages one at a time
        #[arg(long)]
        sequential: bool,

        /// Also transform pages without a Doxygen generator tag
        #[arg(long)]
        any_generator: bool,

        /// Write a JSON report of the run
        #[arg(long, value_name = "FILE", env = "DOXPANEL_REPORT")]
        report: Option<PathBuf>,

        #[command(flatten)]
        passes: PassFlags,
    },

    /// Dump a page tree as JSON
    Dump {
        /// Input HTML page
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Dump the page as parsed, without transforming it
        #[arg(long)]
        raw: bool,
    },

    /// Show what a transformation would change
    Stats {
        /// Input HTML page
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print the counters as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        passes: PassFlags,
    },

    /// Show version information
    Version,
}

/// Flags switching individual passes off.
#[derive(Args, Clone, Default)]
struct PassFlags {
    /// Leave "Definition at line ..." and similar paragraphs in place
    #[arg(long)]
    no_metadata: bool,

    /// Skip lead paragraph and empty paragraph handling
    #[arg(long)]
    no_block_styling: bool,

    /// Leave labeled lists (Parameters, Returns, ...) alone
    #[arg(long)]
    no_sections: bool,

    /// Leave member items alone
    #[arg(long)]
    no_members: bool,

    /// Do not badge overloaded members
    #[arg(long)]
    no_overload: bool,

    /// Leave qualifier labels alone
    #[arg(long)]
    no_labels: bool,

    /// Leave directory and doc tables alone
    #[arg(long)]
    no_tables: bool,

    /// Leave reference lists (todo lists) alone
    #[arg(long)]
    no_reflists: bool,

    /// Keep panels that have no text
    #[arg(long)]
    keep_empty: bool,
}

impl From<&PassFlags> for TransformOptions {
    fn from(flags: &PassFlags) -> Self {
        let mut options = TransformOptions::new().with_overload_markers(!flags.no_overload);
        if flags.no_metadata {
            options = options.without_metadata();
        }
        if flags.no_block_styling {
            options = options.without_block_styling();
        }
        if flags.no_sections {
            options = options.without_sections();
        }
        if flags.no_members {
            options = options.without_members();
        }
        if flags.no_labels {
            options = options.without_labels();
        }
        if flags.no_tables {
            options = options.without_tables();
        }
        if flags.no_reflists {
            options = options.without_reflists();
        }
        if flags.keep_empty {
            options = options.keep_empty_panels();
        }
        options
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Transform {
            input,
            output,
            in_place,
            lenient,
            passes,
        }) => cmd_transform(&input, output.as_deref(), in_place, lenient, &passes),
        Some(Commands::Site {
            dir,
            output,
            lenient,
            sequential,
            any_generator,
            report,
            passes,
        }) => {
            let mut options = SiteOptions::new().with_transform((&passes).into());
            if let Some(out) = output {
                options = options.with_output_dir(out);
            }
            if lenient {
                options = options.lenient();
            }
            if sequential {
                options = options.sequential();
            }
            if any_generator {
                options = options.any_generator();
            }
            cmd_site(&dir, &options, report.as_deref())
        }
        Some(Commands::Dump {
            input,
            output,
            compact,
            raw,
        }) => cmd_dump(&input, output.as_deref(), compact, raw),
        Some(Commands::Stats {
            input,
            json,
            passes,
        }) => cmd_stats(&input, json, &passes),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: a directory is processed as a site, a file is transformed
            match cli.input {
                Some(input) if input.is_dir() => {
                    let mut options = SiteOptions::new();
                    if let Some(out) = cli.output {
                        options = options.with_output_dir(out);
                    }
                    cmd_site(&input, &options, None)
                }
                Some(input) => cmd_transform(
                    &input,
                    cli.output.as_deref(),
                    false,
                    false,
                    &PassFlags::default(),
                ),
                None => {
                    println!("{}", "Usage: doxpanel <INPUT> [OUTPUT]".yellow());
                    println!("       doxpanel --help for more information");
                    Ok(())
                }
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn builder(passes: &PassFlags, lenient: bool) -> Doxpanel {
    let builder = Doxpanel::new().with_transform_options(passes.into());
    if lenient {
        builder.lenient()
    } else {
        builder
    }
}

fn cmd_transform(
    input: &Path,
    output: Option<&Path>,
    in_place: bool,
    lenient: bool,
    passes: &PassFlags,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = builder(passes, lenient).parse(input)?;
    let html = result.to_html();

    let target = if in_place { Some(input) } else { output };
    if let Some(path) = target {
        fs::write(path, &html)?;
        eprintln!(
            "{} {} ({} panels, {} labels)",
            "Saved to".green(),
            path.display(),
            result.stats.member_panels + result.stats.section_count(),
            result.stats.label_count()
        );
    } else {
        println!("{}", html);
    }

    Ok(())
}

fn cmd_site(
    dir: &Path,
    options: &SiteOptions,
    report_path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let pages = site::collect_pages(dir)?;
    log::debug!("found {} pages under {}", pages.len(), dir.display());

    let pb = ProgressBar::new(pages.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let report = site::process_site_with_progress(dir, options, |page| {
        pb.set_message(page.path.display().to_string());
        pb.inc(1);
    })?;
    pb.finish_with_message("Done!");
    log::debug!("site processed in {} ms", report.duration_ms());

    println!("\n{}", "Site processed".green().bold());
    println!("  {} {} transformed", "├─".dimmed(), report.transformed());
    println!("  {} {} skipped", "├─".dimmed(), report.skipped());
    println!("  {} {} failed", "└─".dimmed(), report.failed());

    for page in &report.pages {
        if let PageStatus::Failed(reason) = &page.status {
            eprintln!("{} {}: {}", "Failed".red(), page.path.display(), reason);
        }
    }

    if let Some(path) = report_path {
        fs::write(path, serde_json::to_string_pretty(&report)?)?;
        println!("{} {}", "Report saved to".green(), path.display());
    }

    Ok(())
}

fn cmd_dump(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    raw: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = if raw {
        let tree = parse_file_with_options(input, ParseOptions::new().lenient())?;
        doxpanel::render::to_json(&tree, format)?
    } else {
        Doxpanel::new().lenient().parse(input)?.to_json(format)?
    };

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_stats(input: &Path, json: bool, passes: &PassFlags) -> Result<(), Box<dyn std::error::Error>> {
    let html = fs::read_to_string(input)?;
    let generator = detect_generator(&html);
    let result = builder(passes, true).parse_bytes(html.as_bytes())?;
    let stats = &result.stats;

    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
        return Ok(());
    }

    println!("{}", "Page Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    match generator {
        Some(info) => println!("{}: {}", "Generator".bold(), info),
        None => println!("{}: {}", "Generator".bold(), "unknown".yellow()),
    }

    println!();
    println!("{}", "Transformation".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    print_stats(stats);

    Ok(())
}

fn print_stats(stats: &TransformStats) {
    println!("{}: {}", "Metadata entries".bold(), stats.metadata_count());
    for (category, count) in &stats.metadata {
        println!("  {} {}: {}", "·".dimmed(), category, count);
    }
    println!("{}: {}", "Lead paragraphs".bold(), stats.lead_paragraphs);
    println!(
        "{}: {}",
        "Empty paragraphs removed".bold(),
        stats.empty_paragraphs_removed
    );
    println!("{}: {}", "Section panels".bold(), stats.section_count());
    for (severity, count) in &stats.section_panels {
        println!("  {} {}: {}", "·".dimmed(), severity, count);
    }
    println!("{}: {}", "Member panels".bold(), stats.member_panels);
    println!("{}: {}", "Panels discarded".bold(), stats.panels_discarded);
    println!("{}: {}", "Overload badges".bold(), stats.overload_markers);
    println!("{}: {}", "Labels".bold(), stats.label_count());
    println!("{}: {}", "Tables".bold(), stats.tables);
    println!("{}: {}", "Reference entries".bold(), stats.reflist_entries);
}

fn cmd_version() {
    println!("{} {}", "doxpanel".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Doxygen HTML restyling tool");
    println!();
    println!("License: MIT");
}
