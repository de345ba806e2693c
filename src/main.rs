use std::env;
use std::fs::File;
use std::io::{self, BufReader, Write};

use bank::bank::Bank;
use bank::demo::run_sample_session;
use bank::error::LedgerError;
use bank::processor::process_csv_stream;

fn main() -> Result<(), LedgerError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "bank".to_string());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match (args.next(), args.next()) {
        (None, _) => {
            run_sample_session(&mut out)?;
        }
        (Some(filename), None) => {
            let mut bank = Bank::new();
            let reader = BufReader::new(File::open(&filename)?);
            process_csv_stream(&mut bank, reader, &mut out)?;

            writeln!(out, "\nFinal Balances:")?;
            write!(out, "{}", bank)?;
        }
        _ => {
            eprintln!("Usage: {} [ledger.csv]", program);
        }
    }

    out.flush()?;
    Ok(())
}
