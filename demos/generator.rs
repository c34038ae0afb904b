//! This example generates a CSV file of account operations (shape configurable through the constants)
//! for a number of accounts supplied as a command-line argument.
//!
//! The CSV file can then be replayed with the `rusty-ledger` binary.
//!
//! Example (1000 accounts):
//! ```bash
//! cargo run --example generator 1000 > data/1K_accounts.csv
//! ```
//! ### Maths
//! Based on the constants, the ending balance of every account can be derived.
//!
//! Let:
//! - O = BASE_OPENING_AMOUNT, D = NUM_DEPOSITS, W = NUM_WITHDRAWALS,
//! - A_d = BASE_DEPOSIT_AMOUNT, A_w = BASE_WITHDRAWAL_AMOUNT, and i = account id.
//!
//! **Step 1: Opening, deposits & withdrawals**
//! The account opens with O·i, deposits add D·A_d·i and withdrawals subtract W·A_w·i.
//! With our constants: 100·i + 7·10·i – 3·20·i = 110·i.
//!
//! **Step 2: Final operation**
//! - If i is odd, a withdrawal of OVERDRAW_FACTOR·i = 1000·i exceeds the balance and is declined.
//!   • Balance = 110·i
//! - If i is even, the whole balance of 110·i is withdrawn.
//!   • Balance = 0
//!
//! If the system is correctly implemented, the ending state for any account in the output CSV should match the maths above.
//!

use csv::Writer;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use rusty_ledger::{Operation, OperationType};
use std::{env, error::Error};

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: cargo run --example generator <num_accounts>");
        std::process::exit(1);
    }

    let num_accounts: u32 = match args[1].parse() {
        Ok(n) if n > 0 => n,
        _ => {
            eprintln!("Error: <num_accounts> must be a positive integer.");
            std::process::exit(1);
        }
    };

    const NUM_DEPOSITS: usize = 7;
    const NUM_WITHDRAWALS: usize = 3;
    // Opening round plus one final operation per account.
    const TOTAL_OPS_PER_ACCOUNT: usize = 1 + NUM_DEPOSITS + NUM_WITHDRAWALS + 1;

    // Base amounts; these will be scaled by the account id.
    const BASE_OPENING_AMOUNT: Decimal = dec!(100);
    const BASE_DEPOSIT_AMOUNT: Decimal = dec!(10);
    const BASE_WITHDRAWAL_AMOUNT: Decimal = dec!(20);
    const OVERDRAW_FACTOR: Decimal = dec!(1000);
    const FINAL_BALANCE_FACTOR: Decimal = dec!(110);

    let mut wtr = Writer::from_writer(std::io::stdout());

    // Round by round: every account produces its next operation in each round.
    for round in 0..TOTAL_OPS_PER_ACCOUNT {
        for account in 1..=num_accounts {
            let scale = Decimal::from(account);
            let (op_type, owner, amount) = if round == 0 {
                (
                    OperationType::Open,
                    Some(format!("owner{}", account)),
                    BASE_OPENING_AMOUNT * scale,
                )
            } else if round <= NUM_DEPOSITS {
                (OperationType::Deposit, None, BASE_DEPOSIT_AMOUNT * scale)
            } else if round <= NUM_DEPOSITS + NUM_WITHDRAWALS {
                (OperationType::Withdraw, None, BASE_WITHDRAWAL_AMOUNT * scale)
            } else if account % 2 == 1 {
                (OperationType::Withdraw, None, OVERDRAW_FACTOR * scale)
            } else {
                (OperationType::Withdraw, None, FINAL_BALANCE_FACTOR * scale)
            };
            wtr.serialize(Operation {
                op_type,
                account,
                owner,
                amount: Some(amount),
            })?;
        }
    }
    wtr.flush()?;
    Ok(())
}
