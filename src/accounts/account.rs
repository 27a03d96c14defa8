use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AccountError;

use super::{checking::CheckingAccount, savings::SavingsAccount, time_deposit::TimeDepositAccount};

/// Label for the closed set of account variants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AccountKind {
    Checking,
    Savings,
    TimeDeposit,
}

impl AccountKind {
    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Checking => "Checking Account",
            AccountKind::Savings => "Savings Account",
            AccountKind::TimeDeposit => "Time Deposit Account",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A bank account, one of the three concrete variants.
///
/// The variant set is fixed at construction time; every operation dispatches
/// by match rather than through an open trait, since no extension beyond
/// these three kinds exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Account {
    Checking(CheckingAccount),
    Savings(SavingsAccount),
    TimeDeposit(TimeDepositAccount),
}

impl Account {
    pub fn kind(&self) -> AccountKind {
        match self {
            Account::Checking(_) => AccountKind::Checking,
            Account::Savings(_) => AccountKind::Savings,
            Account::TimeDeposit(_) => AccountKind::TimeDeposit,
        }
    }

    pub fn id(&self) -> Uuid {
        self.funds().id()
    }

    /// Deposits `amount`. No sign validation; a negative deposit behaves as a
    /// withdrawal.
    pub fn deposit(&mut self, amount: f64) {
        match self {
            Account::Checking(account) => account.deposit(amount),
            Account::Savings(account) => account.deposit(amount),
            Account::TimeDeposit(account) => account.deposit(amount),
        }
    }

    /// Withdraws `amount`. No overdraft check; the balance may go negative,
    /// and a locked time deposit debits a flat penalty on top.
    pub fn withdraw(&mut self, amount: f64) {
        match self {
            Account::Checking(account) => account.withdraw(amount),
            Account::Savings(account) => account.withdraw(amount),
            Account::TimeDeposit(account) => account.withdraw(amount),
        }
    }

    pub fn balance(&self) -> f64 {
        self.funds().balance()
    }

    /// Runs the variant's month-end processing. The caller owns the clock:
    /// this must be invoked exactly once per period.
    pub fn end_of_month(&mut self) {
        match self {
            Account::Checking(account) => account.end_of_month(),
            Account::Savings(account) => account.end_of_month(),
            Account::TimeDeposit(account) => account.end_of_month(),
        }
    }

    /// Withdraws from `self` and deposits into `other`.
    ///
    /// Not atomic: the two steps run in sequence with no rollback. With the
    /// unchecked operations neither step can fail, so this is latent only.
    pub fn transfer(&mut self, amount: f64, other: &mut Account) {
        self.withdraw(amount);
        other.deposit(amount);
    }

    /// Checked deposit: rejects non-positive and non-finite amounts, then
    /// delegates to the unchecked [`deposit`](Account::deposit).
    pub fn try_deposit(&mut self, amount: f64) -> Result<(), AccountError> {
        if amount <= 0.0 || !amount.is_finite() {
            return Err(AccountError::InvalidAmount(amount));
        }
        self.deposit(amount);
        Ok(())
    }

    /// Checked withdrawal: rejects invalid amounts and any withdrawal whose
    /// total debit (penalty included) would overdraw the balance.
    pub fn try_withdraw(&mut self, amount: f64) -> Result<(), AccountError> {
        if amount <= 0.0 || !amount.is_finite() {
            return Err(AccountError::InvalidAmount(amount));
        }
        let total = match self {
            Account::TimeDeposit(account) => account.withdrawal_total(amount),
            _ => amount,
        };
        let available = self.balance();
        if total > available {
            return Err(AccountError::InsufficientFunds {
                requested: total,
                available,
            });
        }
        self.withdraw(amount);
        Ok(())
    }

    /// Checked transfer: the destination is only credited after the source
    /// withdrawal succeeds, so a failure leaves both accounts untouched.
    pub fn try_transfer(&mut self, amount: f64, other: &mut Account) -> Result<(), AccountError> {
        self.try_withdraw(amount)?;
        other.deposit(amount);
        Ok(())
    }

    fn funds(&self) -> &super::funds::Funds {
        match self {
            Account::Checking(account) => account.funds(),
            Account::Savings(account) => account.funds(),
            Account::TimeDeposit(account) => account.funds(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfer_moves_funds_between_variants() {
        let mut checking = Account::Checking(CheckingAccount::new(500.0));
        let mut savings = Account::Savings(SavingsAccount::new(5.0));

        checking.transfer(200.0, &mut savings);
        assert_eq!(checking.balance(), 300.0);
        assert_eq!(savings.balance(), 200.0);
    }

    #[test]
    fn try_deposit_rejects_negative_amounts() {
        let mut account = Account::Checking(CheckingAccount::new(100.0));
        let err = account.try_deposit(-5.0).unwrap_err();
        assert_eq!(err, AccountError::InvalidAmount(-5.0));
        assert_eq!(account.balance(), 100.0);
    }

    #[test]
    fn try_withdraw_rejects_overdraft() {
        let mut account = Account::Checking(CheckingAccount::new(100.0));
        let err = account.try_withdraw(150.0).unwrap_err();
        assert_eq!(
            err,
            AccountError::InsufficientFunds {
                requested: 150.0,
                available: 100.0,
            }
        );
        assert_eq!(account.balance(), 100.0);
    }

    #[test]
    fn try_withdraw_accounts_for_the_lock_penalty() {
        let mut deposit = TimeDepositAccount::new(8.0, 12);
        deposit.initial_deposit(100.0);
        let mut account = Account::TimeDeposit(deposit);

        // 95 + 10 penalty exceeds the 100 balance.
        let err = account.try_withdraw(95.0).unwrap_err();
        assert_eq!(
            err,
            AccountError::InsufficientFunds {
                requested: 105.0,
                available: 100.0,
            }
        );

        account.try_withdraw(90.0).unwrap();
        assert_eq!(account.balance(), 0.0);
    }

    #[test]
    fn try_transfer_leaves_destination_untouched_on_failure() {
        let mut source = Account::Checking(CheckingAccount::new(10.0));
        let mut destination = Account::Savings(SavingsAccount::new(5.0));

        assert!(source.try_transfer(50.0, &mut destination).is_err());
        assert_eq!(source.balance(), 10.0);
        assert_eq!(destination.balance(), 0.0);
    }

    #[test]
    fn kind_labels_match_the_driver_headers() {
        assert_eq!(AccountKind::Checking.label(), "Checking Account");
        assert_eq!(AccountKind::Savings.label(), "Savings Account");
        assert_eq!(AccountKind::TimeDeposit.label(), "Time Deposit Account");
    }
}
