use account_core::{
    accounts::{Account, CheckingAccount, SavingsAccount, TimeDepositAccount},
    init,
};

/// Runs the fixed demo sequence against one account: five transactions, one
/// month end, one balance line.
fn run_month(account: &mut Account) {
    account.deposit(100.0);
    account.withdraw(50.0);
    account.deposit(200.0);
    account.withdraw(20.0);
    account.deposit(150.0);

    account.end_of_month();

    println!(
        "Balance after transactions and at the end of the month: {}",
        account.balance()
    );
}

fn main() {
    init();

    let mut checking = Account::Checking(CheckingAccount::new(500.0));
    println!("{}:", checking.kind());
    run_month(&mut checking);

    let mut savings = SavingsAccount::new(5.0);
    savings.initial_deposit(100.0);
    let mut savings = Account::Savings(savings);
    println!();
    println!("{}:", savings.kind());
    run_month(&mut savings);

    let mut time_deposit = TimeDepositAccount::new(8.0, 12);
    time_deposit.initial_deposit(100.0);
    let mut time_deposit = Account::TimeDeposit(time_deposit);
    println!();
    println!("{}:", time_deposit.kind());
    run_month(&mut time_deposit);
}
