mod amount;
mod errors;
mod numerals;
mod wording;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

use crate::{amount::parse_amount, wording::compose};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Amount in HK dollars, e.g. "123", "123.45" or "1,234.50".
    /// Prints the cheque wording in Chinese and English.
    amount: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();

    fmt().with_env_filter(env_filter).init();

    let amount = parse_amount(&args.amount)?;
    debug!(whole = amount.whole, subunit = amount.subunit, "parsed amount");

    let wording = compose(amount);
    println!("{}", wording.chinese_line());
    println!("{}", wording.english_line());

    Ok(())
}
