//! Bank accounts
//!
//! An [`Account`] is one shared base (identity, balance, creation date,
//! observers) composed with an [`AccountKind`] that carries the variant's terms
//! and service-charge strategy. The kind decides three things:
//!
//! - how service charges are computed (`service_charges`)
//! - how low a withdrawal may take the balance (the floor)
//! - which variant fields the account summary shows
//!
//! Every balance change after construction goes through `update_balance`,
//! `deposit` or `withdraw`. `deposit` and `withdraw` validate first, apply the
//! change, and only then ask the notification policy whether the attached
//! observers should hear about it.

use crate::core::clock::{Clock, SystemClock};
use crate::core::notifier::Notifier;
use crate::core::policy::ThresholdPolicy;
use crate::core::traits::{NotificationPolicy, Observer};
use crate::strategy::{
    ManagementFeeStrategy, MinimumBalanceStrategy, OverdraftStrategy, ServiceChargeStrategy,
};
use crate::types::{
    AccountError, AccountNumber, AmountInput, ClientNumber, Currency, TransactionEvent,
    TransactionKind,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;
use std::sync::Arc;

/// The closed set of account variants, each with its own terms
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccountKind {
    /// Overdraft limit and rate
    Chequing(OverdraftStrategy),

    /// Minimum balance
    Savings(MinimumBalanceStrategy),

    /// Management fee, waived after ten years
    Investment(ManagementFeeStrategy),
}

impl AccountKind {
    /// Variant name as shown in summaries and CSV output
    pub fn name(&self) -> &'static str {
        match self {
            AccountKind::Chequing(_) => "Chequing",
            AccountKind::Savings(_) => "Savings",
            AccountKind::Investment(_) => "Investment",
        }
    }

    /// The variant's service-charge rule
    pub fn strategy(&self) -> &dyn ServiceChargeStrategy {
        match self {
            AccountKind::Chequing(terms) => terms,
            AccountKind::Savings(terms) => terms,
            AccountKind::Investment(terms) => terms,
        }
    }

    /// Lowest balance a withdrawal may leave behind
    pub fn withdrawal_floor(&self) -> Decimal {
        match self {
            AccountKind::Chequing(terms) => terms.withdrawal_floor(),
            AccountKind::Savings(terms) => terms.minimum_balance(),
            AccountKind::Investment(_) => Decimal::ZERO,
        }
    }

    /// Balance below which the account pays a penalty charge, if any
    pub fn penalty_threshold(&self) -> Option<Decimal> {
        match self {
            AccountKind::Chequing(terms) => Some(terms.overdraft_limit()),
            AccountKind::Savings(terms) => Some(terms.minimum_balance()),
            AccountKind::Investment(_) => None,
        }
    }
}

/// A client's bank account
#[derive(Clone)]
pub struct Account {
    account_number: AccountNumber,
    client_number: ClientNumber,
    balance: Decimal,
    date_created: NaiveDate,
    kind: AccountKind,
    notifier: Notifier,
    policy: Arc<dyn NotificationPolicy>,
}

impl Account {
    /// Create an account
    ///
    /// A non-numeric opening balance becomes zero. The account starts with no
    /// observers and the default [`ThresholdPolicy`].
    pub fn new(
        account_number: AccountNumber,
        client_number: ClientNumber,
        balance: impl AmountInput,
        date_created: NaiveDate,
        kind: AccountKind,
    ) -> Self {
        Account {
            account_number,
            client_number,
            balance: balance.to_decimal().unwrap_or(Decimal::ZERO),
            date_created,
            kind,
            notifier: Notifier::new(),
            policy: Arc::new(ThresholdPolicy::default()),
        }
    }

    /// Create a Chequing account
    ///
    /// Non-numeric overdraft terms fall back to a -100.00 limit and a 5% rate.
    pub fn chequing(
        account_number: AccountNumber,
        client_number: ClientNumber,
        balance: impl AmountInput,
        date_created: NaiveDate,
        overdraft_limit: impl AmountInput,
        overdraft_rate: impl AmountInput,
    ) -> Self {
        let terms = OverdraftStrategy::new(overdraft_limit, overdraft_rate);
        Account::new(
            account_number,
            client_number,
            balance,
            date_created,
            AccountKind::Chequing(terms),
        )
    }

    /// Create a Savings account
    ///
    /// A non-numeric minimum balance falls back to 50.00.
    pub fn savings(
        account_number: AccountNumber,
        client_number: ClientNumber,
        balance: impl AmountInput,
        date_created: NaiveDate,
        minimum_balance: impl AmountInput,
    ) -> Self {
        let terms = MinimumBalanceStrategy::new(minimum_balance);
        Account::new(
            account_number,
            client_number,
            balance,
            date_created,
            AccountKind::Savings(terms),
        )
    }

    /// Create an Investment account
    ///
    /// A non-numeric management fee falls back to 2.55.
    pub fn investment(
        account_number: AccountNumber,
        client_number: ClientNumber,
        balance: impl AmountInput,
        date_created: NaiveDate,
        management_fee: impl AmountInput,
    ) -> Self {
        let terms = ManagementFeeStrategy::new(date_created, management_fee);
        Account::new(
            account_number,
            client_number,
            balance,
            date_created,
            AccountKind::Investment(terms),
        )
    }

    /// Replace the rule deciding which transactions notify observers
    pub fn with_policy(mut self, policy: Arc<dyn NotificationPolicy>) -> Self {
        self.policy = policy;
        self
    }

    pub fn account_number(&self) -> AccountNumber {
        self.account_number
    }

    pub fn client_number(&self) -> ClientNumber {
        self.client_number
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn date_created(&self) -> NaiveDate {
        self.date_created
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    /// Add `amount` to the balance without any validation
    ///
    /// Negative amounts reduce the balance and no floor is checked. A
    /// non-numeric amount, or one that would overflow the balance, leaves the
    /// balance unchanged. No notification is sent.
    pub fn update_balance(&mut self, amount: impl AmountInput) {
        let Some(amount) = amount.to_decimal() else {
            return;
        };
        match self.balance.checked_add(amount) {
            Some(balance) => self.balance = balance,
            None => tracing::warn!(
                account = self.account_number,
                %amount,
                "balance update would overflow, ignored"
            ),
        }
    }

    /// Deposit a strictly positive amount
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `InvalidAmount` if `amount` is not numeric or not positive
    /// - `ArithmeticOverflow` if the new balance cannot be represented
    ///
    /// The balance is unchanged on error.
    pub fn deposit(&mut self, amount: impl AmountInput) -> Result<(), AccountError> {
        let kind = TransactionKind::Deposit;
        let amount = validated_amount(kind, &amount)?;
        let balance_after = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| AccountError::arithmetic_overflow(kind.label(), self.account_number))?;

        let balance_before = self.balance;
        self.balance = balance_after;
        self.after_transaction(kind, amount, balance_before);

        Ok(())
    }

    /// Withdraw a strictly positive amount, respecting the account's floor
    ///
    /// The floor is zero for Investment accounts, the minimum balance for
    /// Savings, and the overdraft limit (when negative) for Chequing.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `InvalidAmount` if `amount` is not numeric or not positive
    /// - `InsufficientFunds` if the balance would drop below the floor
    /// - `ArithmeticOverflow` if the new balance cannot be represented
    ///
    /// The balance is unchanged on error.
    pub fn withdraw(&mut self, amount: impl AmountInput) -> Result<(), AccountError> {
        let kind = TransactionKind::Withdrawal;
        let amount = validated_amount(kind, &amount)?;
        let balance_after = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| AccountError::arithmetic_overflow(kind.label(), self.account_number))?;

        let floor = self.kind.withdrawal_floor();
        if balance_after < floor {
            return Err(AccountError::insufficient_funds(
                self.account_number,
                self.balance,
                amount,
                floor,
            ));
        }

        let balance_before = self.balance;
        self.balance = balance_after;
        self.after_transaction(kind, amount, balance_before);

        Ok(())
    }

    /// Service charges for the current state, evaluated today
    pub fn service_charges(&self) -> Decimal {
        self.service_charges_at(SystemClock.today())
    }

    /// Service charges for the current state, evaluated on `today`
    ///
    /// Pure: repeated calls without an intervening mutation return the same value.
    pub fn service_charges_at(&self, today: NaiveDate) -> Decimal {
        self.kind
            .strategy()
            .calculate_service_charges(self.balance, today)
    }

    /// Attach an observer; duplicates are allowed
    pub fn attach(&mut self, observer: Arc<dyn Observer>) {
        self.notifier.attach(observer);
    }

    /// Detach the first occurrence of `observer`
    ///
    /// Returns `false`, and changes nothing, if it was not attached.
    pub fn detach<O: Observer + ?Sized>(&mut self, observer: &Arc<O>) -> bool {
        self.notifier.detach(observer)
    }

    /// Send `message` to every attached observer in attachment order
    pub fn notify(&self, message: &str) {
        self.notifier.notify(message);
    }

    /// Number of attached observers
    pub fn observer_count(&self) -> usize {
        self.notifier.len()
    }

    /// Summary of this account as it stands on `today`
    ///
    /// `today` only matters for Investment accounts, whose management fee is
    /// shown as waived once the account is more than ten years old.
    pub fn summary_at(&self, today: NaiveDate) -> AccountSummary<'_> {
        AccountSummary {
            account: self,
            today,
        }
    }

    fn after_transaction(&self, kind: TransactionKind, amount: Decimal, balance_before: Decimal) {
        let event = TransactionEvent {
            kind,
            account: self.account_number,
            amount,
            balance_before,
            balance_after: self.balance,
            penalty_threshold: self.kind.penalty_threshold(),
        };

        if self.policy.should_notify(&event) {
            self.notify(&event.message());
        }
    }
}

fn validated_amount(
    kind: TransactionKind,
    amount: &impl AmountInput,
) -> Result<Decimal, AccountError> {
    let value = amount
        .to_decimal()
        .ok_or_else(|| AccountError::non_numeric_amount(kind.label(), &amount.describe()))?;

    if value <= Decimal::ZERO {
        return Err(AccountError::non_positive_amount(kind.label(), value));
    }

    Ok(value)
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("account_number", &self.account_number)
            .field("client_number", &self.client_number)
            .field("balance", &self.balance)
            .field("date_created", &self.date_created)
            .field("kind", &self.kind)
            .field("notifier", &self.notifier)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.summary_at(SystemClock.today()), f)
    }
}

/// Account summary evaluated on a given date
///
/// ```text
/// Account Number: 12345 Balance: $30.00
/// Overdraft Limit: $50.00 Overdraft Rate: 5.00% Account Type: Chequing
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AccountSummary<'a> {
    account: &'a Account,
    today: NaiveDate,
}

impl fmt::Display for AccountSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let account = self.account;
        writeln!(
            f,
            "Account Number: {} Balance: {}",
            account.account_number,
            Currency(account.balance)
        )?;

        match &account.kind {
            AccountKind::Chequing(terms) => write!(
                f,
                "Overdraft Limit: {} Overdraft Rate: {:.2}% Account Type: Chequing",
                Currency(terms.overdraft_limit()),
                terms
                    .overdraft_rate()
                    .checked_mul(Decimal::ONE_HUNDRED)
                    .unwrap_or(Decimal::MAX)
            ),
            AccountKind::Savings(terms) => write!(
                f,
                "Minimum Balance: {} Account Type: Savings",
                Currency(terms.minimum_balance())
            ),
            AccountKind::Investment(terms) => {
                write!(f, "Date Created: {} Management Fee: ", terms.date_created())?;
                if terms.is_fee_waived(self.today) {
                    write!(f, "Waived")?;
                } else {
                    write!(f, "{}", Currency(terms.management_fee()))?;
                }
                write!(f, " Account Type: Investment")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alert::AlertOutbox;
    use crate::core::holder::Holder;
    use crate::core::policy::EveryWithdrawal;
    use chrono::Duration;
    use rstest::rstest;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn chequing(balance: i64, limit: i64) -> Account {
        Account::chequing(12345, 1, Decimal::from(balance), today(), Decimal::from(limit), "0.05")
    }

    fn savings(balance: i64, minimum: i64) -> Account {
        Account::savings(23456, 2, Decimal::from(balance), today(), Decimal::from(minimum))
    }

    fn investment(balance: i64, age_days: i64) -> Account {
        Account::investment(
            34567,
            3,
            Decimal::from(balance),
            today() - Duration::days(age_days),
            Decimal::new(1500, 2),
        )
    }

    fn holder(client_number: ClientNumber, first: &str, outbox: &Arc<AlertOutbox>) -> Arc<Holder> {
        Arc::new(
            Holder::new(client_number, first, "Smith", "someone@example.com", outbox.clone())
                .unwrap(),
        )
    }

    // Construction

    #[test]
    fn test_non_numeric_opening_balance_is_zero() {
        let account = Account::savings(1, 1, "lots", today(), 50);
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_new_account_has_no_observers() {
        assert_eq!(chequing(30, 50).observer_count(), 0);
    }

    // update_balance

    #[rstest]
    #[case::positive("25", Decimal::from(125))]
    #[case::negative("-25", Decimal::from(75))]
    #[case::non_numeric("abc", Decimal::from(100))]
    #[case::empty("", Decimal::from(100))]
    #[case::overflowing("79228162514264337593543950335", Decimal::from(100))]
    fn test_update_balance(#[case] amount: &str, #[case] expected: Decimal) {
        let mut account = investment(100, 0);
        account.update_balance(amount);
        assert_eq!(account.balance(), expected);
    }

    // deposit

    #[test]
    fn test_deposit_increases_balance() {
        let mut account = chequing(30, 50);
        account.deposit(Decimal::new(2500, 2)).unwrap();
        assert_eq!(account.balance(), Decimal::new(5500, 2));
    }

    #[rstest]
    #[case::negative("-5", "Deposit amount: $-5.00 must be positive.")]
    #[case::zero("0", "Deposit amount: $0.00 must be positive.")]
    #[case::non_numeric("ten", "Deposit amount: ten must be numeric.")]
    fn test_deposit_rejects_invalid_amounts(#[case] amount: &str, #[case] expected: &str) {
        let mut account = chequing(30, 50);
        let error = account.deposit(amount).unwrap_err();

        assert!(matches!(error, AccountError::InvalidAmount { .. }));
        assert_eq!(error.to_string(), expected);
        assert_eq!(account.balance(), Decimal::from(30));
    }

    #[test]
    fn test_deposit_overflow_is_rejected() {
        let outbox = Arc::new(AlertOutbox::new());
        let mut account = savings(10, 1);
        account.attach(holder(2, "Ada", &outbox));

        let error = account.deposit(Decimal::MAX).unwrap_err();

        assert_eq!(error, AccountError::arithmetic_overflow("Deposit", 23456));
        assert_eq!(account.balance(), Decimal::from(10));
        assert!(outbox.is_empty());
    }

    // withdraw

    #[rstest]
    #[case::chequing(chequing(30, 50))]
    #[case::savings(savings(1000, 200))]
    #[case::investment(investment(1500, 0))]
    fn test_withdraw_rejects_negative_amount(#[case] mut account: Account) {
        let balance = account.balance();
        let error = account.withdraw(-5).unwrap_err();
        assert!(matches!(error, AccountError::InvalidAmount { .. }));
        assert_eq!(account.balance(), balance);
    }

    #[test]
    fn test_withdraw_non_numeric() {
        let mut account = investment(1500, 0);
        let error = account.withdraw("all of it").unwrap_err();
        assert_eq!(error.to_string(), "Withdrawal amount: all of it must be numeric.");
    }

    #[rstest]
    #[case::chequing(chequing(30, 50))]
    #[case::chequing_zero_limit(chequing(30, 0))]
    #[case::investment(investment(1500, 0))]
    fn test_withdraw_balance_plus_one_is_insufficient(#[case] mut account: Account) {
        let balance = account.balance();
        let error = account.withdraw(balance + Decimal::ONE).unwrap_err();

        assert!(matches!(error, AccountError::InsufficientFunds { .. }));
        assert_eq!(account.balance(), balance);
    }

    #[test]
    fn test_chequing_may_overdraw_to_negative_limit() {
        let mut account = chequing(30, -100);
        account.withdraw(130).unwrap();
        assert_eq!(account.balance(), Decimal::from(-100));

        let error = account.withdraw(Decimal::new(1, 2)).unwrap_err();
        assert_eq!(
            error,
            AccountError::insufficient_funds(
                12345,
                Decimal::from(-100),
                Decimal::new(1, 2),
                Decimal::from(-100)
            )
        );
    }

    #[test]
    fn test_withdraw_overflow_is_rejected() {
        let mut account = Account::chequing(12345, 1, -100, today(), Decimal::MIN, "0.05");

        let error = account.withdraw(Decimal::MAX).unwrap_err();

        assert!(matches!(error, AccountError::ArithmeticOverflow { account: 12345, .. }));
        assert_eq!(account.balance(), Decimal::from(-100));
    }

    #[test]
    fn test_savings_withdrawal_below_minimum_fails() {
        // 1000.00 - 900.00 = 100.00 < 200.00 minimum
        let mut account = savings(1000, 200);
        let error = account.withdraw(Decimal::new(90000, 2)).unwrap_err();

        assert!(matches!(error, AccountError::InsufficientFunds { .. }));
        assert_eq!(account.balance(), Decimal::from(1000));
    }

    #[test]
    fn test_savings_withdrawal_down_to_minimum_succeeds() {
        let mut account = savings(1000, 200);
        account.withdraw(800).unwrap();
        assert_eq!(account.balance(), Decimal::from(200));
    }

    #[rstest]
    #[case::chequing(chequing(30, 50))]
    #[case::savings(savings(1000, 200))]
    #[case::investment(investment(1500, 0))]
    fn test_deposit_then_withdraw_conserves_balance(#[case] mut account: Account) {
        let initial = account.balance();
        account.deposit(Decimal::new(12345, 2)).unwrap();
        account.withdraw(Decimal::new(12345, 2)).unwrap();
        assert_eq!(account.balance(), initial);
    }

    // service charges

    #[test]
    fn test_chequing_below_limit_charge() {
        // 0.50 + (50.00 - 30.00) * 0.05
        assert_eq!(chequing(30, 50).service_charges_at(today()), Decimal::new(150, 2));
    }

    #[rstest]
    #[case::chequing_at_limit(chequing(50, 50), Decimal::new(50, 2))]
    #[case::chequing_one_below(chequing(49, 50), Decimal::new(55, 2))]
    #[case::savings_at_minimum(savings(200, 200), Decimal::new(50, 2))]
    #[case::savings_below_minimum(savings(100, 200), Decimal::new(100, 2))]
    #[case::investment_new(investment(1500, 0), Decimal::new(1755, 2))]
    #[case::investment_at_threshold(investment(1500, 3650), Decimal::new(1755, 2))]
    #[case::investment_past_threshold(investment(1500, 3651), Decimal::new(255, 2))]
    fn test_service_charges_boundaries(#[case] account: Account, #[case] expected: Decimal) {
        assert_eq!(account.service_charges_at(today()), expected);
    }

    #[test]
    fn test_service_charges_are_idempotent() {
        let account = chequing(30, 50);
        let first = account.service_charges();
        let second = account.service_charges();
        assert_eq!(first, second);
        assert_eq!(account.balance(), Decimal::from(30));
    }

    #[test]
    fn test_investment_created_long_ago_charges_base_only() {
        let account = Account::investment(
            456789,
            4,
            2000,
            NaiveDate::from_ymd_opt(2010, 1, 1).unwrap(),
            Decimal::new(1500, 2),
        );
        assert_eq!(account.service_charges(), Decimal::new(255, 2));
    }

    #[test]
    fn test_applying_service_charge_by_withdrawal() {
        let mut account = chequing(30, 50);
        let charge = account.service_charges_at(today());
        account.withdraw(charge).unwrap();
        assert_eq!(account.balance(), Decimal::new(2850, 2));
    }

    // notifications

    #[test]
    fn test_notification_order_follows_attachment() {
        let outbox = Arc::new(AlertOutbox::new());
        let mut account = chequing(60, 50).with_policy(Arc::new(EveryWithdrawal));
        account.attach(holder(1, "First", &outbox));
        account.attach(holder(2, "Second", &outbox));

        account.withdraw(10).unwrap();

        let bodies: Vec<String> = outbox.alerts().into_iter().map(|a| a.body).collect();
        assert_eq!(bodies.len(), 2);
        assert!(bodies[0].starts_with("Notification for 1: First Smith"));
        assert!(bodies[1].starts_with("Notification for 2: Second Smith"));
    }

    #[test]
    fn test_notification_sent_after_balance_change() {
        let outbox = Arc::new(AlertOutbox::new());
        let mut account = chequing(60, 50);
        account.attach(holder(1, "Ada", &outbox));

        // 60.00 -> 30.00 crosses the 50.00 overdraft limit
        account.withdraw(30).unwrap();

        let alerts = outbox.alerts();
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0]
            .body
            .ends_with("Withdrawal of $30.00 on account 12345. Balance is now $30.00."));
    }

    #[test]
    fn test_insignificant_transactions_do_not_notify() {
        let outbox = Arc::new(AlertOutbox::new());
        let mut account = chequing(40, 50);
        account.attach(holder(1, "Ada", &outbox));

        account.deposit(20).unwrap();
        account.withdraw(5).unwrap();

        assert!(outbox.is_empty());
    }

    #[test]
    fn test_failed_transactions_do_not_notify() {
        let outbox = Arc::new(AlertOutbox::new());
        let mut account = savings(300, 200).with_policy(Arc::new(EveryWithdrawal));
        account.attach(holder(1, "Ada", &outbox));

        assert!(account.withdraw(150).is_err());
        assert!(account.withdraw(-1).is_err());

        assert!(outbox.is_empty());
    }

    #[test]
    fn test_detach_stops_notifications() {
        let outbox = Arc::new(AlertOutbox::new());
        let ada = holder(1, "Ada", &outbox);
        let mut account = investment(1500, 0).with_policy(Arc::new(EveryWithdrawal));
        account.attach(ada.clone());

        assert!(account.detach(&ada));
        assert!(!account.detach(&ada));
        account.withdraw(10).unwrap();

        assert!(outbox.is_empty());
    }

    #[test]
    fn test_holder_shared_between_accounts() {
        let outbox = Arc::new(AlertOutbox::new());
        let ada = holder(1, "Ada", &outbox);
        let mut first = chequing(60, 50).with_policy(Arc::new(EveryWithdrawal));
        let mut second = savings(300, 200).with_policy(Arc::new(EveryWithdrawal));
        first.attach(ada.clone());
        second.attach(ada.clone());

        first.withdraw(1).unwrap();
        second.withdraw(1).unwrap();

        assert_eq!(outbox.len(), 2);
        assert_eq!(Arc::strong_count(&ada), 3);
    }

    #[test]
    fn test_direct_notify() {
        let outbox = Arc::new(AlertOutbox::new());
        let mut account = savings(300, 200);
        account.attach(holder(2, "Bob", &outbox));

        account.notify("Statement ready");

        assert_eq!(outbox.alerts()[0].body, "Notification for 2: Bob Smith: Statement ready");
    }

    // summaries

    #[rstest]
    #[case::chequing(
        chequing(30, 50),
        "Account Number: 12345 Balance: $30.00\nOverdraft Limit: $50.00 Overdraft Rate: 5.00% Account Type: Chequing"
    )]
    #[case::savings(
        savings(1000, 200),
        "Account Number: 23456 Balance: $1,000.00\nMinimum Balance: $200.00 Account Type: Savings"
    )]
    #[case::investment_recent(
        investment(1500, 0),
        "Account Number: 34567 Balance: $1,500.00\nDate Created: 2024-06-01 Management Fee: $15.00 Account Type: Investment"
    )]
    #[case::investment_waived(
        investment(2000, 3651),
        "Account Number: 34567 Balance: $2,000.00\nDate Created: 2014-06-03 Management Fee: Waived Account Type: Investment"
    )]
    fn test_summary(#[case] account: Account, #[case] expected: &str) {
        assert_eq!(account.summary_at(today()).to_string(), expected);
    }

    #[test]
    fn test_default_overdraft_summary() {
        let account = Account::chequing(1, 1, 0, today(), "none", "none");
        assert_eq!(
            account.summary_at(today()).to_string(),
            "Account Number: 1 Balance: $0.00\nOverdraft Limit: $-100.00 Overdraft Rate: 5.00% Account Type: Chequing"
        );
    }
}
