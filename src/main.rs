//! twinstack's main application entry point and orchestration logic.
//! Handles command-line argument parsing, the interactive prompts, and
//! coordinates planning and writing of the generated project.

use twinstack::{
    archetype::{Archetype, MessagesArchetype},
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    names::DerivedNames,
    processor::{LocalFilesystem, Processor},
    prompt::{collect_input, DialoguerPrompter},
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Prompts for name, email address and application identifier
/// 2. Derives the name variants from the identifier
/// 3. Plans every directory and file of the archetype
/// 4. Writes the plan below the current working directory
fn run(_args: Args) -> Result<()> {
    let engine = MiniJinjaRenderer::new();
    let prompt = DialoguerPrompter::new();
    let archetype = MessagesArchetype;

    let input = collect_input(&prompt)?;
    let names = DerivedNames::derive(&input.full_app_name)?;
    let nodes = archetype.plan(&input, &names, &engine)?;

    let output_root = std::env::current_dir()?;
    let processor = Processor::new(&LocalFilesystem, &output_root);
    processor.apply(&nodes)?;

    println!(
        "Project generated successfully in {}.",
        output_root.join(&names.application).display()
    );
    Ok(())
}
