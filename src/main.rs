use std::process::ExitCode;

use anyhow::Result;

use tubingen_check::config::{Config, OutputFormat, Target};
use tubingen_check::report::{HumanReporter, JsonReporter, Reporter};
use tubingen_check::runner::{validate_folder, validate_single_file};

fn main() -> Result<ExitCode> {
    // Parse configuration from command line and project config
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();
    if let Some(path) = &config.project_config {
        log::debug!("Using project config {}", path.display());
    }

    let mut reporter: Box<dyn Reporter> = match config.output {
        OutputFormat::Human => Box::new(HumanReporter::stdout()),
        OutputFormat::Json => Box::new(JsonReporter::stdout()),
    };

    let errors = match &config.target {
        Target::Folder(folder) => {
            if !folder.is_dir() {
                println!("Error: Folder '{}' does not exist!", folder.display());
                return Ok(ExitCode::from(2));
            }
            validate_folder(folder, reporter.as_mut())?.total_errors()
        }
        Target::File(path) => validate_single_file(path, reporter.as_mut())?,
    };

    Ok(if errors == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
