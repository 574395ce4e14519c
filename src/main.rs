/*!
 * Command-line interface for CtxCat
 */

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use clap::error::ErrorKind;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use ctxcat::clipboard::copy_to_clipboard;
use ctxcat::config::{scale_warning, Args, Config, OUTPUT_SIZE_WARN, SCAN_PAUSE_SECS};
use ctxcat::document::ContextBuilder;
use ctxcat::filter::{FilterChain, Verdict};
use ctxcat::report::{ReportFormat, Reporter, RunReport};
use ctxcat::scanner::discover;
use ctxcat::tree::render_tree;
use ctxcat::utils::format_file_size;
use ctxcat::writer::write_output;

fn main() -> ctxcat::Result<()> {
    // Parse command line arguments; help exits 0, any bad input exits 1
    // before any work is performed
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    // Create and validate configuration
    let config = Config::from_args(args)?;
    config.validate()?;

    let start_time = Instant::now();

    // Create progress bar
    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len}")
            .unwrap(),
    );
    progress.enable_steady_tick(Duration::from_millis(100));
    progress.set_prefix("📊 Scanning");
    progress.set_message(format!("Scanning directory: {}", config.root.display()));

    // Discover candidate files
    let candidates: Vec<PathBuf> = discover(&config.root).collect();

    // Very large trees get an advisory pause the operator can interrupt
    if let Some(warning) = scale_warning(candidates.len()) {
        progress.suspend(|| {
            eprintln!("{}", warning);
            eprintln!(
                "Proceeding in {} seconds (press Ctrl-C to abort)...",
                SCAN_PAUSE_SECS
            );
        });
        thread::sleep(Duration::from_secs(SCAN_PAUSE_SECS));
    }

    // Run every candidate through the filter chain
    let chain = FilterChain::new(&config);
    let mut included: Vec<PathBuf> = Vec::new();
    let mut exclusions: HashMap<Verdict, usize> = HashMap::new();
    for path in candidates.iter() {
        match chain.evaluate(path) {
            Verdict::Included => included.push(path.clone()),
            verdict => *exclusions.entry(verdict).or_insert(0) += 1,
        }
    }

    progress.set_length(included.len() as u64);
    progress.set_prefix("📊 Aggregating");

    // Render the tree and assemble the document
    let tree = render_tree(&config.root, &config.rules);
    let builder = ContextBuilder::new(config.clone(), Arc::new(progress.clone()));
    let document = builder.build(&included, &tree);

    // Deliver to the requested sinks
    let mut output_size = None;
    if config.sinks.file {
        let bytes = write_output(&config.output_file, &document)?;
        if bytes > OUTPUT_SIZE_WARN {
            progress.suspend(|| {
                eprintln!(
                    "Warning: output file is {} ({})",
                    format_file_size(bytes),
                    config.output_file.display()
                );
            });
        }
        output_size = Some(bytes);
    }

    // A missing clipboard is reported but never aborts file output
    let clipboard = if config.sinks.clipboard {
        match copy_to_clipboard(&document.content) {
            Ok(()) => Some(true),
            Err(e) => {
                progress.suspend(|| eprintln!("Error: could not copy to clipboard: {}", e));
                Some(false)
            }
        }
    } else {
        None
    };

    progress.finish_and_clear();

    // Print the run summary
    let report = RunReport {
        output_file: config
            .sinks
            .file
            .then(|| config.output_file.display().to_string()),
        output_size,
        clipboard,
        duration: start_time.elapsed(),
        candidates: candidates.len(),
        included: included.len(),
        exclusions,
        files_omitted: document.files_omitted,
        read_errors: document.read_errors,
    };
    Reporter::new(ReportFormat::ConsoleTable).print_report(&report);

    Ok(())
}
