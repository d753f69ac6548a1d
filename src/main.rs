use std::process;
use nufind::{
    cli::Args,
    config::{partial_from_args, ConfigBuilder},
    core::Scanner,
    error::{ErrorSeverity, Result},
    output::{create_formatter, create_writer, ProgressReporter},
    NAME, VERSION,
};

fn main() {
    let args = Args::parse_args();
    process::exit(run(args));
}

/// Run the scan and map failures to exit codes by severity.
fn run(args: Args) -> i32 {
    match execute(args) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("Error: {}", err.user_message());
            match err.severity() {
                ErrorSeverity::Warning => 0,
                ErrorSeverity::Error => 1,
                ErrorSeverity::Critical => 2,
            }
        }
    }
}

fn execute(args: Args) -> Result<()> {
    let cli_partial = partial_from_args(&args);

    let builder = ConfigBuilder::new();
    let builder = match &args.config {
        Some(path) => builder.add_config_file(path)?,
        None => builder.try_add_default_config_file()?,
    };
    let settings = builder.merge(cli_partial).build()?;

    if !settings.quiet {
        println!("{} v{}", NAME, VERSION);
        println!("Start directory is '{}'", settings.scan_path.display());
        if settings.verbose {
            println!("Output format: {}", settings.output_format);
            if !settings.exclude_patterns.is_empty() {
                println!("Extra exclusions: {}", settings.exclude_patterns.join(", "));
            }
            if let Some(depth) = settings.max_depth {
                println!("Maximum depth: {}", depth);
            }
        }
    }

    let reporter = ProgressReporter::new(
        settings.quiet || !settings.show_progress,
        settings.verbose,
    );

    let scanner = Scanner::new(settings.clone());
    let report = scanner.scan_with_progress(|current, total, message| {
        reporter.update(current, total, message);
    })?;
    reporter.finish(&format!(
        "Scanned {} manifest files",
        report.manifests_found
    ));

    if report.is_empty() && !settings.quiet {
        println!(
            "No package declarations found in {}.",
            settings.scan_path.display()
        );
    }

    // Colors only make sense on a terminal, never in a file
    let use_colors = settings.use_colors && settings.output_file.is_none();
    let formatter = create_formatter(
        settings.output_format,
        use_colors,
        settings.verbose,
        settings.quiet,
    );
    let rendered = formatter.format(&report)?;

    let writer = create_writer(settings.output_file.as_ref());
    writer.write(&rendered)?;

    if let Some(path) = &settings.output_file {
        reporter.print(&format!("Results written to: {}", path.display()));
    }

    Ok(())
}
