//! Generator entry point.
//! Parses arguments, loads (or asks for) and validates the configuration, then runs the
//! generation and prints the next manual steps.

use whitelabel::{
    cli::{generator_home, get_args, Args},
    config::load_config,
    error::{default_error_handler, Result},
    ignore::ExclusionFilter,
    interactive::prompt_for_config,
    patch::RenameOutcome,
    processor::{default_output_dir, Processor},
    prompt::DialoguerPrompter,
    validation::validate_config,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// Loading and validation complete before anything is written; a failure
/// there leaves the filesystem untouched.
fn run(args: Args) -> Result<()> {
    let home_dir = generator_home();
    let prompt = DialoguerPrompter::new();

    let config = if args.interactive {
        println!("Answer the following questions to configure the project.");
        prompt_for_config(&prompt)?
    } else {
        let config_path = args.config_path();
        println!("Loading configuration from {}...", config_path.display());
        load_config(&config_path, &home_dir)?.1
    };

    println!("Validating configuration...");
    validate_config(&config)?;

    let template_dir = std::path::absolute(args.template_dir(&home_dir))?;
    let output_dir = match &args.output {
        Some(output) => std::path::absolute(output)?,
        None => default_output_dir(&template_dir, &config),
    };

    let filter = ExclusionFilter::default();
    let processor = Processor::new(&prompt, &filter, &config, args.skip_overwrite_check);
    let report = processor.generate(&template_dir, &output_dir)?;

    let output = report.output_root.display();
    println!("\n✅ White-label project generated successfully in: {output}");
    if !report.skipped.is_empty() {
        println!("Skipped missing files: {}", report.skipped.join(", "));
    }
    for outcome in &report.renamed {
        if let RenameOutcome::Renamed { from, to } = outcome {
            println!("Renamed {} -> {}", from.display(), to.display());
        }
    }
    println!("\nNext steps:");
    println!("  1. cd {output}");
    println!("  2. Run: xcodegen generate");
    println!("  3. Open the generated .xcodeproj in Xcode");
    println!("  4. Update your development team in Xcode project settings");
    println!("  5. Build and run!");
    Ok(())
}
