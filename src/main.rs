use anyhow::Result;
use clap::Parser;
use tracing::error;

use raidlogs::extractor::print_summary;
use raidlogs::utils::{setup_logging, validate_args};
use raidlogs::{config, init_default_config, run, Args, Destination};

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    if args.init {
        return init_default_config();
    }

    validate_args(&args)?;
    let config = config::resolve(&args)?;

    let destination = if args.stdout {
        Destination::Stdout
    } else {
        Destination::File(&config.output)
    };

    match run(&config, destination) {
        Ok(summary) => {
            if !args.stdout {
                print_summary(&summary, &config.output);
            }
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Extraction failed");
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
