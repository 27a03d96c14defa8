//! Account variants and the shared balance primitive.

pub mod account;
pub mod checking;
pub mod funds;
pub mod savings;
pub mod time_deposit;

pub use account::{Account, AccountKind};
pub use checking::CheckingAccount;
pub use funds::Funds;
pub use savings::SavingsAccount;
pub use time_deposit::TimeDepositAccount;
