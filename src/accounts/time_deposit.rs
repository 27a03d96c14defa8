use serde::{Deserialize, Serialize};

use super::funds::Funds;

/// Flat surcharge for withdrawing before maturity.
const WITHDRAWAL_PENALTY: f64 = 10.0;

/// A fixed-term account that accrues interest until maturity and penalizes
/// early withdrawals.
///
/// The account moves one way from locked (`remaining_months > 0`) to matured
/// (`remaining_months == 0`). Once matured, month ends are no-ops and
/// withdrawals carry no penalty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeDepositAccount {
    funds: Funds,
    interest_rate: f64,
    months_to_maturity: u32,
    remaining_months: u32,
    min_balance: f64,
}

impl TimeDepositAccount {
    /// Creates a time deposit with a monthly interest rate in percent and a
    /// term length in months.
    pub fn new(rate: f64, months_to_maturity: u32) -> Self {
        let funds = Funds::new();
        let min_balance = funds.balance();
        Self {
            funds,
            interest_rate: rate,
            months_to_maturity,
            remaining_months: months_to_maturity,
            min_balance,
        }
    }

    /// Funds the account and seeds the interest base.
    pub fn initial_deposit(&mut self, amount: f64) {
        self.min_balance = amount;
        self.funds.deposit(amount);
    }

    pub fn deposit(&mut self, amount: f64) {
        self.funds.deposit(amount);
    }

    /// Withdraws from the account, adding the flat penalty while the deposit
    /// is still locked.
    pub fn withdraw(&mut self, amount: f64) {
        if self.remaining_months > 0 {
            tracing::debug!(
                account = %self.funds.id(),
                penalty = WITHDRAWAL_PENALTY,
                "early withdrawal from locked time deposit"
            );
            self.funds.withdraw(amount + WITHDRAWAL_PENALTY);
        } else {
            self.funds.withdraw(amount);
        }
    }

    pub fn balance(&self) -> f64 {
        self.funds.balance()
    }

    pub fn remaining_months(&self) -> u32 {
        self.remaining_months
    }

    pub fn months_to_maturity(&self) -> u32 {
        self.months_to_maturity
    }

    pub fn is_matured(&self) -> bool {
        self.remaining_months == 0
    }

    /// Total amount the funds are debited for a withdrawal of `amount`,
    /// penalty included while locked.
    pub fn withdrawal_total(&self, amount: f64) -> f64 {
        if self.remaining_months > 0 {
            amount + WITHDRAWAL_PENALTY
        } else {
            amount
        }
    }

    /// Accrues one month of interest and advances toward maturity. A no-op
    /// once matured.
    pub fn end_of_month(&mut self) {
        if self.remaining_months > 0 {
            let interest = self.min_balance * self.interest_rate / 100.0;
            tracing::debug!(account = %self.funds.id(), interest, "accruing time deposit interest");
            self.funds.deposit(interest);
            self.remaining_months -= 1;
            if self.remaining_months == 0 {
                tracing::info!(account = %self.funds.id(), "time deposit matured");
            }
        }
    }

    pub(super) fn funds(&self) -> &Funds {
        &self.funds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locked_withdrawal_carries_penalty() {
        let mut account = TimeDepositAccount::new(8.0, 12);
        account.initial_deposit(100.0);
        account.withdraw(30.0);
        assert_eq!(account.balance(), 60.0);
    }

    #[test]
    fn matured_withdrawal_is_penalty_free() {
        let mut account = TimeDepositAccount::new(8.0, 1);
        account.initial_deposit(100.0);
        account.end_of_month();
        assert!(account.is_matured());

        account.withdraw(30.0);
        assert_eq!(account.balance(), 78.0);
    }

    #[test]
    fn end_of_month_is_noop_after_maturity() {
        let mut account = TimeDepositAccount::new(8.0, 0);
        account.initial_deposit(100.0);
        assert!(account.is_matured());

        account.end_of_month();
        assert_eq!(account.balance(), 100.0);
        assert_eq!(account.remaining_months(), 0);
    }

    #[test]
    fn maturity_counts_down_one_month_at_a_time() {
        let mut account = TimeDepositAccount::new(10.0, 2);
        account.initial_deposit(100.0);

        account.end_of_month();
        assert_eq!(account.remaining_months(), 1);
        assert_eq!(account.balance(), 110.0);

        // Interest base is never resynced, so month two accrues on the
        // original 100 as well.
        account.end_of_month();
        assert_eq!(account.remaining_months(), 0);
        assert_eq!(account.balance(), 120.0);
    }
}
