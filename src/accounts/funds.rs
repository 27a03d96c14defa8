use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Shared balance state behind every account variant.
///
/// The balance is deliberately unguarded: deposits may be negative and
/// withdrawals may overdraw past zero. Variants layer their own behavior
/// (transaction counting, penalty surcharges) on top and always delegate the
/// actual balance change here, so this is the only mutation path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Funds {
    id: Uuid,
    opened_at: DateTime<Utc>,
    balance: f64,
}

impl Funds {
    /// Creates funds with a zero balance.
    pub fn new() -> Self {
        Self::with_balance(0.0)
    }

    /// Creates funds with a given opening balance.
    pub fn with_balance(initial_balance: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            opened_at: Utc::now(),
            balance: initial_balance,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Adds `amount` to the balance. A negative amount behaves as a
    /// withdrawal.
    pub fn deposit(&mut self, amount: f64) {
        self.balance += amount;
    }

    /// Subtracts `amount` from the balance. No overdraft floor; the balance
    /// may go negative.
    pub fn withdraw(&mut self, amount: f64) {
        self.balance -= amount;
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }
}

impl Default for Funds {
    fn default() -> Self {
        Self::new()
    }
}
