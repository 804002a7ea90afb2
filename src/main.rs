use std::io;
use std::process;

use anyhow::{Context, Result};
use ark_cmp::cli::Cli;
use ark_cmp::Verdict;
use clap::Parser;

const TROUBLE: i32 = 2;

#[tokio::main]
async fn main() {
    env_logger::init();

    let args = Cli::parse();

    let code = match run(&args).await {
        Ok(verdict) => verdict.exit_code(),
        Err(e) => {
            eprintln!("ark-cmp: {:#}", e);
            TROUBLE
        }
    };

    // Readers can still be blocked on their input, don't wait for them
    process::exit(code);
}

async fn run(args: &Cli) -> Result<Verdict> {
    let config = args.config();
    let [first, second] = config.names();

    ark_cmp::compare(&config, &mut io::stderr())
        .await
        .with_context(|| format!("cannot compare {} and {}", first, second))
}
