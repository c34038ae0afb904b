use std::error::Error;
use std::io::Write;
use std::path::Path;

use crate::{
    csv_utils::write_csv,
    dto::{AccountRow, Operation},
    Engine,
};

use csv_async::{AsyncReaderBuilder, Error as CsvError, Trim};
use tokio::fs::File;
use tokio::sync::mpsc;
use tokio_stream::StreamExt;
use tracing::{info, warn};

const BUFFER_SIZE: usize = 1024;

type Result<T, E = Box<dyn Error + Send + Sync>> = std::result::Result<T, E>;

/// Replays operations asynchronously from the given input file and writes balances to the provided writer.
/// Spawns two tasks:
/// * CSV reader - streams operations from the input file, deserializes them and sends them to the processor via channel.
/// * Processor - owns the engine, receives operations from the channel and applies them until the channel is closed.
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
pub async fn run<P, W>(input_path: P, writer: W) -> Result<()>
where
    P: AsRef<Path>,
    W: Write,
{
    let (tx, rx) = mpsc::channel(BUFFER_SIZE);
    let input_path = input_path.as_ref().to_owned();

    let reader_handle = tokio::spawn(read_operations(input_path, tx));
    let processor_handle = tokio::spawn(process_operations(rx));

    // Wait for reader to finish and propagate any errors
    reader_handle.await??;

    let engine = processor_handle.await?;

    // Sort accounts by id for deterministic output
    let mut accounts: Vec<_> = engine.accounts().map(AccountRow::from).collect();
    accounts.sort_by_key(|row| row.account);

    write_csv(writer, accounts.into_iter())?;
    Ok(())
}

/// Reads and deserializes operations from a CSV file.
/// Sends them through the provided channel.
async fn read_operations(
    input_path: impl AsRef<Path> + Send,
    tx: mpsc::Sender<Operation>,
) -> Result<(), CsvError> {
    let file = File::open(input_path).await?;
    let mut csv_reader = AsyncReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .create_deserializer(file);

    let mut records = csv_reader.deserialize::<Operation>();
    while let Some(result) = records.next().await {
        // CSV parsing errors are critical - propagate them
        let operation = result?;
        if tx.send(operation).await.is_err() {
            warn!("processor stopped before input was exhausted");
            break;
        }
    }
    Ok(())
}

/// Applies operations received through the channel.
/// Returns the final engine state once the channel is closed by the reader.
async fn process_operations(mut rx: mpsc::Receiver<Operation>) -> Engine {
    let mut engine = Engine::new();
    let (mut applied, mut rejected) = (0usize, 0usize);
    while let Some(operation) = rx.recv().await {
        match engine.process_operation(operation) {
            Ok(()) => applied += 1,
            Err(_) => rejected += 1,
        }
    }
    info!(applied, rejected, "operations replayed");
    engine
}
