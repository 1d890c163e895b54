use crate::app::cli::args::Args;
use crate::app::harness::{Harness, HarnessError, HarnessResult, HarnessSettings};
use crate::core::error_handling::log_error_with_context;
use crate::core::logging::init_logging;
use crate::core::strings::title_case;
use crate::core::version;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

const DEFAULT_COMMAND_NAME: &str = "qtest";

/// Run the driver and return the process exit code
///
/// 0 when every script line succeeded, 1 when any line failed or the
/// script could not be run, 2 for configuration problems.
pub fn startup() -> i32 {
    // Stage 1: command line and configuration file
    let cli = Args::parse();
    let command_name = command_name();
    let args = match Args::resolve(cli, &command_name) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}: {}", command_name, e);
            return 2;
        }
    };

    // Stage 2: logging
    let log_file = args.log_file_path();
    let _logger = match init_logging(
        args.log_level.as_deref(),
        args.log_format.as_deref(),
        log_file.as_deref(),
        args.use_color(),
    ) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("{}: cannot start logging: {}", command_name, e);
            return 2;
        }
    };
    log::info!("{}", version::banner(&title_case(&command_name)));
    log::debug!("Final arguments: {:#?}", args);

    // Stage 3: run the script
    match run(&args) {
        Ok(0) => 0,
        Ok(failures) => {
            log::warn!("{} script line(s) failed", failures);
            1
        }
        Err(e) => {
            log_error_with_context(&e, "Failed to run script");
            1
        }
    }
}

fn run(args: &Args) -> HarnessResult<usize> {
    let settings = HarnessSettings::from(args);
    let stdout = io::stdout();
    let mut harness = Harness::new(settings, stdout.lock())?;

    match &args.script {
        Some(path) => {
            log::debug!("reading script {}", path.display());
            let file = File::open(path).map_err(HarnessError::Io)?;
            harness.run_script(BufReader::new(file))
        }
        None => harness.run_script(io::stdin().lock()),
    }
}

/// Program name as invoked, used to find the configuration file
fn command_name() -> String {
    std::env::args()
        .next()
        .and_then(|arg0| {
            Path::new(&arg0)
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        })
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_COMMAND_NAME.to_string())
}
