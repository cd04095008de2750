use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use md2mmd::config::{Args, Config};
use md2mmd::core::{ConversionReport, convert_path, convert_to_string};

/// Human readable summary of a conversion
fn print_summary(report: &ConversionReport) {
    if report.blocks_found == 0 {
        println!("no PlantUML/DOT diagram found, file copied as is");
    } else {
        println!("converted {} diagram(s)", report.converted);
    }
    if report.approximate > 0 {
        println!(
            "{} approximate conversion(s), check the comments in the file",
            report.approximate
        );
    }
    if let Some(output) = &report.output {
        println!("created {}", output.display());
    }
}

fn run(config: &Config) -> Result<()> {
    for path in &config.config_files {
        log::info!("using config file {}", path.display());
    }

    let report = if config.stdout {
        let (text, report) = convert_to_string(&config.input)?;
        print!("{}", text);
        report
    } else {
        convert_path(&config.input, &config.convert_options())?
    };

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if !config.stdout {
        print_summary(&report);
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Usage text and usage errors both go to stdout
            print!("{}", e);
            // --help and --version are not failures
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Merge command line with config files
    let config = match Config::from_args_and_env(args) {
        Ok(config) => config,
        Err(e) => {
            println!("error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let env = env_logger::Env::default().default_filter_or(config.log_level.as_str());
    env_logger::Builder::from_env(env).init();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
