mod logger;
mod master;
mod protocol;
mod worker;

use clap::Parser;
use master::Master;
use std::process::ExitCode;
use tokio::signal;
use worker::Worker;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// First integer of the range to sum
    #[arg(allow_negative_numbers = true)]
    start: Option<String>,

    /// Last integer of the range, inclusive
    #[arg(allow_negative_numbers = true)]
    end: Option<String>,

    /// Connect back to a master at ADDR and serve one assignment
    #[arg(long, value_name = "ADDR", conflicts_with_all = ["start", "end"])]
    worker: Option<String>,

    /// Log debug detail to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(1)
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // clap already renders a usage message; keep it but exit with
            // status 1 rather than clap's default 2. Help and version are
            // not errors.
            let failure = err.use_stderr();
            let _ = err.print();
            std::process::exit(if failure { 1 } else { 0 });
        }
    };
    logger::init(args.verbose);

    let task = async move {
        if let Some(master_addr) = args.worker {
            Worker::new(master_addr).run().await
        } else {
            match (args.start.as_deref(), args.end.as_deref()) {
                (Some(start), Some(end)) => Master::from_args(start, end).run().await,
                _ => {
                    eprintln!("Usage: rangesum <start> <end>");
                    std::process::exit(1);
                }
            }
        }
    };

    tokio::select! {
        result = task => result,
        _ = signal::ctrl_c() => {
            eprintln!("interrupted, shutting down");
            Ok(())
        }
    }
}
