use anyhow::Result;
use smiles2parquet::convert::file_to_parquet;
use std::{env, process::exit};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    // Exactly two CLI arguments: input record file, output Parquet file.
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <INPUT_FILE> <OUTPUT_PARQUET>", args[0]);
        exit(1);
    }

    let rows = file_to_parquet(&args[1], &args[2])?;
    info!(rows, output = %args[2], "done");
    Ok(())
}
