mod account;
mod csv_utils;
mod dto;
mod engine;
mod error;
mod runner;
mod stores;

pub mod calc;
pub mod device;
pub mod registry;
pub mod resource;
pub mod shapes;

pub use account::Account;
pub use dto::{AccountRow, Operation, OperationType};
pub use engine::Engine;
pub use error::Error;
pub use runner::{run, run_async};
pub use stores::{Entity, EntityId, KeyedStore, LedgerEntry};
