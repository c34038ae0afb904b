use std::error::Error;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::{
    csv_utils::{read_csv, write_csv},
    dto::{AccountRow, Operation},
    Engine,
};

/// Replays the operations in the given input file and writes final balances to the provided writer.
///
/// # Arguments
/// * `input_path` - Path to the input CSV file containing operations
/// * `writer` - Where to write the account balances (e.g. stdout)
///
/// # Errors
/// Returns an error if:
/// * The input file cannot be read
/// * The CSV is malformed
/// * Writing to the output fails
pub fn run<P, W>(input_path: P, writer: W) -> Result<(), Box<dyn Error>>
where
    P: AsRef<Path>,
    W: Write,
{
    let mut engine = Engine::new();
    let (mut applied, mut rejected) = (0usize, 0usize);

    for operation in read_csv::<Operation, _>(input_path)? {
        // CSV parsing errors are critical - propagate them
        let operation = operation?;
        // Rejected operations are logged by the engine and skipped
        match engine.process_operation(operation) {
            Ok(()) => applied += 1,
            Err(_) => rejected += 1,
        }
    }
    info!(applied, rejected, "operations replayed");

    // Sort accounts by id for deterministic output
    let mut accounts: Vec<_> = engine.accounts().map(AccountRow::from).collect();
    accounts.sort_by_key(|row| row.account);

    write_csv(writer, accounts.into_iter())?;
    Ok(())
}
