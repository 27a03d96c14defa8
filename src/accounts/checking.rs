use serde::{Deserialize, Serialize};

use super::funds::Funds;

/// Number of transactions per month before fees apply.
const FREE_TRANSACTIONS: u32 = 3;
/// Fee charged for each transaction past the free allowance.
const TRANSACTION_FEE: f64 = 2.0;

/// A checking account that charges a fee for each transaction beyond a
/// monthly free allowance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckingAccount {
    funds: Funds,
    transaction_count: u32,
}

impl CheckingAccount {
    /// Creates a checking account with a given opening balance.
    pub fn new(initial_balance: f64) -> Self {
        Self {
            funds: Funds::with_balance(initial_balance),
            transaction_count: 0,
        }
    }

    /// Deposits into the account, counting the transaction.
    pub fn deposit(&mut self, amount: f64) {
        self.transaction_count += 1;
        self.funds.deposit(amount);
    }

    /// Withdraws from the account, counting the transaction.
    pub fn withdraw(&mut self, amount: f64) {
        self.transaction_count += 1;
        self.funds.withdraw(amount);
    }

    pub fn balance(&self) -> f64 {
        self.funds.balance()
    }

    pub fn transaction_count(&self) -> u32 {
        self.transaction_count
    }

    /// Deducts accumulated excess-transaction fees and resets the counter.
    ///
    /// The fee withdrawal goes straight to the shared funds, so it does not
    /// itself count as a transaction.
    pub fn end_of_month(&mut self) {
        if self.transaction_count > FREE_TRANSACTIONS {
            let fees = TRANSACTION_FEE * f64::from(self.transaction_count - FREE_TRANSACTIONS);
            tracing::debug!(account = %self.funds.id(), fees, "charging excess transaction fees");
            self.funds.withdraw(fees);
        }
        self.transaction_count = 0;
    }

    pub(super) fn funds(&self) -> &Funds {
        &self.funds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fees_apply_only_past_free_allowance() {
        let mut account = CheckingAccount::new(100.0);
        account.deposit(10.0);
        account.withdraw(10.0);
        account.deposit(10.0);
        assert_eq!(account.transaction_count(), 3);

        account.end_of_month();
        assert_eq!(account.balance(), 110.0);
        assert_eq!(account.transaction_count(), 0);
    }

    #[test]
    fn excess_transactions_each_cost_the_fee() {
        let mut account = CheckingAccount::new(100.0);
        for _ in 0..5 {
            account.deposit(0.0);
        }

        // 5 transactions, 3 free, 2.0 per excess.
        account.end_of_month();
        assert_eq!(account.balance(), 96.0);
    }

    #[test]
    fn counter_resets_even_when_no_fee_charged() {
        let mut account = CheckingAccount::new(50.0);
        account.deposit(1.0);
        account.end_of_month();
        assert_eq!(account.transaction_count(), 0);
        assert_eq!(account.balance(), 51.0);
    }
}
