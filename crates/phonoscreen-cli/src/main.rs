use anyhow::Result;
use clap::{Arg, ArgAction, Command, ValueHint};
use log::LevelFilter;
use std::io::Write;
use std::path::PathBuf;

use phonoscreen_cli::screen::{load_screen_config, run_screen, write_report, ScreenConfig};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("PHONOSCREEN_LOG", "error,phonoscreen=info"))
        .init();

    let matches = Command::new("phonoscreen")
        .version(clap::crate_version!())
        .about("Voice biomarker screening for Parkinson's disease risk (simulated data, linear SVM)")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a JSON screening configuration. Defaults are used when omitted.")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("print_config")
                .long("print-config")
                .help("Print the effective configuration as JSON and exit")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = if let Some(config_path) = matches.get_one::<PathBuf>("config") {
        log::info!("[phonoscreen] Using config: {:?}", config_path);
        load_screen_config(config_path)?
    } else {
        log::debug!("[phonoscreen] No config provided; using defaults.");
        ScreenConfig::default()
    };

    if matches.get_flag("print_config") {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let report = run_screen(&config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&report, &mut out)?;
    out.flush()?;
    Ok(())
}
