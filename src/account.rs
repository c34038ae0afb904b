//! Balance holder with a non-negative invariant.
//!
//! The balance is only reachable through [`Account::balance`]; mutation goes
//! through [`Account::deposit`] and [`Account::withdraw`], which validate the
//! amount before touching state.

use rust_decimal::Decimal;

use crate::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    owner: String,
    balance: Decimal,
}

impl Account {
    /// Opens an account. Fails if `initial_balance` is negative.
    pub fn new(owner: impl Into<String>, initial_balance: Decimal) -> Result<Self, Error> {
        if initial_balance < Decimal::ZERO {
            return Err(Error::InvalidArgument("initial_balance"));
        }
        Ok(Self {
            owner: owner.into(),
            balance: initial_balance,
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Adds `amount` to the balance. Fails without mutating if `amount` is not positive
    /// or the new balance would overflow.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), Error> {
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidArgument("amount"));
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(Error::BalanceOverflow)?;
        Ok(())
    }

    /// Takes `amount` from the balance if `0 < amount <= balance`.
    /// Returns whether the withdrawal happened; a declined withdrawal changes nothing.
    pub fn withdraw(&mut self, amount: Decimal) -> bool {
        if amount <= Decimal::ZERO || amount > self.balance {
            return false;
        }
        self.balance -= amount;
        true
    }
}
