// SPDX-License-Identifier: MPL-2.0
use icon_backdrop::cli::{Args, USAGE};
use icon_backdrop::error::Result;
use icon_backdrop::{config, icon};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(Some(summary)) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            if matches!(err, icon_backdrop::Error::Usage(_)) {
                eprint!("\n{USAGE}");
            }
            ExitCode::from(err.exit_code())
        }
    }
}

fn run() -> Result<Option<String>> {
    let args = Args::parse(pico_args::Arguments::from_env())?;
    if args.help {
        print!("{USAGE}");
        return Ok(None);
    }

    let config = match &args.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load()?,
    };
    let job = args.into_job(&config)?;
    let generated = icon::generate(&job)?;
    log::info!(
        "{} variant wrote {}x{} icon",
        generated.variant,
        generated.width,
        generated.height
    );
    Ok(Some(generated.summary()))
}
