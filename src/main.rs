use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use paysubmit::application::submitter::PaymentSubmitter;
use paysubmit::domain::payment::{PaymentRequest, parse_amount};
use paysubmit::infrastructure::mock_gateway::MockGateway;
use paysubmit::interfaces::csv::request_reader::RequestReader;
use paysubmit::interfaces::json::result_writer::ResultWriter;
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Maximum time to wait for the payment endpoint, in seconds
    #[arg(long, global = true, default_value_t = 10)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Submit a single payment
    Submit {
        #[arg(long)]
        card_number: String,
        #[arg(long)]
        expiration_date: String,
        /// Exact decimal amount, e.g. 50.00
        #[arg(long, allow_negative_numbers = true, value_parser = parse_amount)]
        amount: Decimal,
        /// Three-letter currency code (EUR, USD or GBP)
        #[arg(long)]
        currency: String,
        /// Payment endpoint URL
        #[arg(long)]
        endpoint: String,
    },
    /// Submit every payment in a CSV file, one JSON result per line
    Batch {
        /// CSV with header card_number,expiration_date,amount,currency,endpoint
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let submitter = PaymentSubmitter::new(Box::new(MockGateway::new()))
        .with_timeout(Duration::from_secs(cli.timeout_secs));

    let stdout = io::stdout();
    let mut writer = ResultWriter::new(stdout.lock());

    match cli.command {
        Command::Submit {
            card_number,
            expiration_date,
            amount,
            currency,
            endpoint,
        } => {
            let request =
                PaymentRequest::new(card_number, expiration_date, amount, currency, endpoint);
            let result = submitter.submit(&request).await;
            writer.write_result(&result).into_diagnostic()?;
        }
        Command::Batch { input } => {
            let file = File::open(input).into_diagnostic()?;
            let reader = RequestReader::new(file);
            for request in reader.requests() {
                match request {
                    Ok(request) => {
                        let result = submitter.submit(&request).await;
                        writer.write_result(&result).into_diagnostic()?;
                    }
                    Err(e) => {
                        eprintln!("Error reading payment request: {}", e);
                    }
                }
            }
        }
    }

    writer.flush().into_diagnostic()?;

    Ok(())
}
