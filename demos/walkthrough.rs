//! Walks through the library types and prints what happens at each step.
//!
//! ```bash
//! cargo run --example walkthrough
//! ```

use std::error::Error;

use rust_decimal_macros::dec;
use rusty_ledger::device::{Device, Smartphone};
use rusty_ledger::registry::UserRegistry;
use rusty_ledger::resource::ScopedResource;
use rusty_ledger::shapes::{describe, Circle, Rectangle, Shape};
use rusty_ledger::calc::{try_parse_positive, Derived, Greeter};
use rusty_ledger::{Account, Entity, EntityId, KeyedStore};
use tracing_subscriber::EnvFilter;

struct Customer {
    id: EntityId,
    name: String,
}

impl Entity for Customer {
    fn id(&self) -> EntityId {
        self.id
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut account = Account::new("Ava", dec!(100))?;
    account.deposit(dec!(50))?;
    let ok = account.withdraw(dec!(120));
    println!("Withdraw success? {}; Balance = {}", ok, account.balance());

    let mut customers = KeyedStore::new();
    customers.insert(Customer {
        id: 1,
        name: "Ava".to_string(),
    });
    if let Some(customer) = customers.find_by_id(1) {
        println!("Customer {}: {}", customer.id, customer.name);
    }

    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle::new(2.0)),
        Box::new(Rectangle::new(3.0, 4.0)),
    ];
    for shape in &shapes {
        println!("{}", describe(&**shape));
    }

    let mut phone = Smartphone::new();
    phone.turn_on();
    println!("{} is {}", phone.model(), phone.status());

    let mut users = UserRegistry::new();
    let ava = users.register("Ava");
    let ben = users.register("Ben");
    println!("Users created: {}", users.count());
    println!("{}, {}", ava.name(), ben.name());

    if let Some(value) = try_parse_positive("42") {
        println!("Parsed: {}", value);
    }
    println!("{}", Derived.greet());

    let resource = ScopedResource::acquire("demo");
    resource.do_work();
    // released when `resource` goes out of scope

    Ok(())
}
