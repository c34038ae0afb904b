use rust_decimal::Decimal;
use tracing::debug;

use crate::dto::{Operation, OperationType};
use crate::stores::{AccountsStore, EntityId, LedgerEntry};
use crate::{Account, Error};

/// Applies operations to a ledger of accounts, one at a time.
///
/// A rejected operation leaves the ledger exactly as it was.
#[derive(Default)]
pub struct Engine {
    accounts: AccountsStore,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            accounts: AccountsStore::new(),
        }
    }

    pub fn process_operation(&mut self, operation: Operation) -> Result<(), Error> {
        let result = match operation.op_type {
            OperationType::Open => self.process_open(
                operation.account,
                operation.owner,
                operation.amount.unwrap_or(Decimal::ZERO),
            ),
            OperationType::Deposit => operation
                .amount
                .ok_or(Error::MissingAmount)
                .and_then(|amount| self.process_deposit(operation.account, amount)),
            OperationType::Withdraw => operation
                .amount
                .ok_or(Error::MissingAmount)
                .and_then(|amount| self.process_withdraw(operation.account, amount)),
        };
        if let Err(err) = &result {
            debug!(account = operation.account, op = ?operation.op_type, %err, "operation rejected");
        }
        result
    }

    pub fn accounts(&self) -> impl Iterator<Item = &LedgerEntry> {
        self.accounts.all()
    }

    pub fn account(&self, id: EntityId) -> Option<&Account> {
        self.accounts.find_by_id(id).map(|entry| &entry.account)
    }

    fn process_open(
        &mut self,
        id: EntityId,
        owner: Option<String>,
        initial_balance: Decimal,
    ) -> Result<(), Error> {
        let owner = owner.ok_or(Error::MissingOwner)?;
        if self.accounts.contains(id) {
            return Err(Error::AccountAlreadyOpen(id));
        }
        let account = Account::new(owner, initial_balance)?;
        self.accounts.insert(LedgerEntry { id, account });
        Ok(())
    }

    fn process_deposit(&mut self, id: EntityId, amount: Decimal) -> Result<(), Error> {
        let mut entry = self.entry(id)?;
        entry.account.deposit(amount)?;
        self.accounts.insert(entry);
        Ok(())
    }

    fn process_withdraw(&mut self, id: EntityId, amount: Decimal) -> Result<(), Error> {
        let mut entry = self.entry(id)?;
        if !entry.account.withdraw(amount) {
            return Err(Error::WithdrawalDeclined);
        }
        self.accounts.insert(entry);
        Ok(())
    }

    /// Copies out the stored entry; changes are committed by re-inserting it.
    fn entry(&self, id: EntityId) -> Result<LedgerEntry, Error> {
        self.accounts
            .find_by_id(id)
            .cloned()
            .ok_or(Error::AccountNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn open(account: EntityId, owner: &str, amount: Option<Decimal>) -> Operation {
        Operation {
            op_type: OperationType::Open,
            account,
            owner: Some(owner.to_string()),
            amount,
        }
    }

    fn deposit(account: EntityId, amount: Decimal) -> Operation {
        Operation {
            op_type: OperationType::Deposit,
            account,
            owner: None,
            amount: Some(amount),
        }
    }

    fn withdraw(account: EntityId, amount: Decimal) -> Operation {
        Operation {
            op_type: OperationType::Withdraw,
            account,
            owner: None,
            amount: Some(amount),
        }
    }

    fn balance(engine: &Engine, id: EntityId) -> Decimal {
        engine.account(id).unwrap().balance()
    }

    #[test]
    fn test_open_deposit_withdraw_scenario() {
        let mut engine = Engine::new();
        engine.process_operation(open(1, "Ava", Some(dec!(100)))).unwrap();
        engine.process_operation(deposit(1, dec!(50))).unwrap();
        assert_eq!(balance(&engine, 1), dec!(150));

        engine.process_operation(withdraw(1, dec!(120))).unwrap();
        assert_eq!(balance(&engine, 1), dec!(30));

        assert_eq!(
            engine.process_operation(withdraw(1, dec!(100))),
            Err(Error::WithdrawalDeclined)
        );
        assert_eq!(balance(&engine, 1), dec!(30));
    }

    #[test]
    fn test_open_without_amount_starts_at_zero() {
        let mut engine = Engine::new();
        engine.process_operation(open(2, "Ben", None)).unwrap();
        assert_eq!(balance(&engine, 2), Decimal::ZERO);
        assert_eq!(engine.account(2).unwrap().owner(), "Ben");
    }

    #[test]
    fn test_open_requires_owner() {
        let mut engine = Engine::new();
        let mut op = open(1, "Ava", Some(dec!(1)));
        op.owner = None;
        assert_eq!(engine.process_operation(op), Err(Error::MissingOwner));
        assert!(engine.account(1).is_none());
    }

    #[test]
    fn test_open_with_negative_balance_is_rejected() {
        let mut engine = Engine::new();
        assert_eq!(
            engine.process_operation(open(1, "Ava", Some(dec!(-1)))),
            Err(Error::InvalidArgument("initial_balance"))
        );
        assert_eq!(engine.accounts().count(), 0);
    }

    #[test]
    fn test_reopen_keeps_existing_balance() {
        let mut engine = Engine::new();
        engine.process_operation(open(1, "Ava", Some(dec!(10)))).unwrap();
        assert_eq!(
            engine.process_operation(open(1, "Mallory", Some(dec!(999)))),
            Err(Error::AccountAlreadyOpen(1))
        );
        assert_eq!(balance(&engine, 1), dec!(10));
        assert_eq!(engine.account(1).unwrap().owner(), "Ava");
    }

    #[test]
    fn test_unknown_account_is_rejected() {
        let mut engine = Engine::new();
        assert_eq!(
            engine.process_operation(deposit(9, dec!(1))),
            Err(Error::AccountNotFound(9))
        );
        assert_eq!(
            engine.process_operation(withdraw(9, dec!(1))),
            Err(Error::AccountNotFound(9))
        );
        assert_eq!(engine.accounts().count(), 0);
    }

    #[test]
    fn test_missing_amount_is_rejected() {
        let mut engine = Engine::new();
        engine.process_operation(open(1, "Ava", Some(dec!(10)))).unwrap();

        let mut op = deposit(1, dec!(1));
        op.amount = None;
        assert_eq!(engine.process_operation(op), Err(Error::MissingAmount));

        let mut op = withdraw(1, dec!(1));
        op.amount = None;
        assert_eq!(engine.process_operation(op), Err(Error::MissingAmount));
        assert_eq!(balance(&engine, 1), dec!(10));
    }

    #[test]
    fn test_non_positive_deposit_is_rejected() {
        let mut engine = Engine::new();
        engine.process_operation(open(1, "Ava", Some(dec!(10)))).unwrap();
        assert_eq!(
            engine.process_operation(deposit(1, dec!(0))),
            Err(Error::InvalidArgument("amount"))
        );
        assert_eq!(balance(&engine, 1), dec!(10));
    }

    #[test]
    fn test_deposit_overflow_is_rejected_and_processing_continues() {
        let mut engine = Engine::new();
        engine.process_operation(open(1, "Ava", Some(Decimal::MAX))).unwrap();
        assert_eq!(
            engine.process_operation(deposit(1, dec!(1))),
            Err(Error::BalanceOverflow)
        );
        assert_eq!(balance(&engine, 1), Decimal::MAX);

        engine.process_operation(withdraw(1, dec!(1))).unwrap();
        assert_eq!(balance(&engine, 1), Decimal::MAX - dec!(1));
    }

    #[test]
    fn test_accounts_are_independent() {
        let mut engine = Engine::new();
        engine.process_operation(open(1, "Ava", Some(dec!(10)))).unwrap();
        engine.process_operation(open(2, "Ben", Some(dec!(20)))).unwrap();
        engine.process_operation(withdraw(2, dec!(5))).unwrap();

        assert_eq!(balance(&engine, 1), dec!(10));
        assert_eq!(balance(&engine, 2), dec!(15));
        assert_eq!(engine.accounts().count(), 2);
    }
}
