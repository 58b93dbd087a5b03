use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fs::File;
use std::io::Error;
use std::path::Path;

#[allow(dead_code)]
pub const API_ENDPOINT: &str = "https://api.example.com/pay";
#[allow(dead_code)]
pub const TEST_CARD: &str = "4111111111111111";
#[allow(dead_code)]
pub const TEST_EXPIRY: &str = "12/26";
#[allow(dead_code)]
pub const VALID_AMOUNT: Decimal = dec!(50.00);
#[allow(dead_code)]
pub const INVALID_AMOUNT: Decimal = dec!(0.25);

#[allow(dead_code)]
pub const HEADER: [&str; 5] = [
    "card_number",
    "expiration_date",
    "amount",
    "currency",
    "endpoint",
];

/// Writes a request CSV with `rows` valid USD payments to the sentinel endpoint.
#[allow(dead_code)]
pub fn generate_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(HEADER)?;

    for i in 1..=rows {
        wtr.write_record([
            TEST_CARD,
            TEST_EXPIRY,
            &format!("{}.00", i),
            "USD",
            API_ENDPOINT,
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
