use serde::{Deserialize, Serialize};

use super::funds::Funds;

/// An account that earns interest at a fixed monthly rate.
///
/// Interest is computed from `min_balance`, which despite its name never
/// tracks a true period minimum: it is seeded by [`initial_deposit`] and then
/// overwritten with the full balance at every month end. This mirrors the
/// historical behavior and is kept as-is.
///
/// [`initial_deposit`]: SavingsAccount::initial_deposit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavingsAccount {
    funds: Funds,
    interest_rate: f64,
    min_balance: f64,
}

impl SavingsAccount {
    /// Creates a savings account with a given monthly interest rate in
    /// percent (5.0 means 5%).
    pub fn new(rate: f64) -> Self {
        let funds = Funds::new();
        let min_balance = funds.balance();
        Self {
            funds,
            interest_rate: rate,
            min_balance,
        }
    }

    /// Funds the account and seeds the interest base.
    ///
    /// Expected to follow construction; plain deposits leave the interest
    /// base untouched.
    pub fn initial_deposit(&mut self, amount: f64) {
        self.min_balance = amount;
        self.funds.deposit(amount);
    }

    pub fn deposit(&mut self, amount: f64) {
        self.funds.deposit(amount);
    }

    pub fn withdraw(&mut self, amount: f64) {
        self.funds.withdraw(amount);
    }

    pub fn balance(&self) -> f64 {
        self.funds.balance()
    }

    pub fn min_balance(&self) -> f64 {
        self.min_balance
    }

    /// Adds the earned interest to the balance.
    pub fn end_of_month(&mut self) {
        // Exact-zero check: min_balance is only ever assigned, never derived,
        // so a never-seeded account resyncs to its current balance here.
        if self.min_balance == 0.0 {
            self.min_balance = self.funds.balance();
        }
        let interest = self.min_balance * self.interest_rate / 100.0;
        tracing::debug!(account = %self.funds.id(), interest, "accruing savings interest");
        self.funds.deposit(interest);
        self.min_balance = self.funds.balance();
    }

    pub(super) fn funds(&self) -> &Funds {
        &self.funds
    }
}
