//! Account and holder registry
//!
//! This module provides the `Bank` struct, the in-memory [`AccountStore`]
//! used by the engine and the CLI.
//!
//! The Bank is responsible for:
//! - Registering holders by client number
//! - Opening accounts and attaching their owning holder as an observer
//! - Looking up accounts for mutation and taking them back after it
//! - Providing sorted account listings for output

use crate::core::account::Account;
use crate::core::holder::Holder;
use crate::core::traits::AccountStore;
use crate::types::{AccountNumber, ClientNumber};
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of every holder and account
///
/// Holders are shared: the `Arc` kept here is the same one attached to each
/// of the holder's accounts.
#[derive(Debug, Default)]
pub struct Bank {
    /// Map of account numbers to accounts
    accounts: HashMap<AccountNumber, Account>,

    /// Map of client numbers to holders
    holders: HashMap<ClientNumber, Arc<Holder>>,
}

impl Bank {
    /// Create a Bank with no holders and no accounts
    pub fn new() -> Self {
        Bank {
            accounts: HashMap::new(),
            holders: HashMap::new(),
        }
    }

    /// Register a holder, replacing any holder with the same client number
    ///
    /// # Returns
    ///
    /// The shared handle that will be attached to the holder's accounts
    pub fn add_holder(&mut self, holder: Holder) -> Arc<Holder> {
        let holder = Arc::new(holder);
        self.holders
            .insert(holder.client_number(), Arc::clone(&holder));
        holder
    }

    /// Open an account and attach its owning holder
    ///
    /// An account whose client number has no registered holder is still
    /// opened, but nobody will be notified of its transactions.
    ///
    /// # Returns
    ///
    /// `true` if a holder was attached, `false` otherwise
    pub fn open_account(&mut self, mut account: Account) -> bool {
        let attached = match self.holders.get(&account.client_number()) {
            Some(holder) => {
                account.attach(holder.clone());
                true
            }
            None => {
                tracing::warn!(
                    account = account.account_number(),
                    client = account.client_number(),
                    "no holder registered for account, opening without observers"
                );
                false
            }
        };

        self.save(account);
        attached
    }

    /// Get every account owned by `client_number`, sorted by account number
    pub fn accounts_for_client(&self, client_number: ClientNumber) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = self
            .accounts
            .values()
            .filter(|account| account.client_number() == client_number)
            .collect();
        accounts.sort_by_key(|account| account.account_number());
        accounts
    }

    /// Get every holder, sorted by client number
    pub fn holders(&self) -> Vec<&Arc<Holder>> {
        let mut holders: Vec<&Arc<Holder>> = self.holders.values().collect();
        holders.sort_by_key(|holder| holder.client_number());
        holders
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }
}

impl AccountStore for Bank {
    fn account(&self, account_number: AccountNumber) -> Option<&Account> {
        self.accounts.get(&account_number)
    }

    fn account_mut(&mut self, account_number: AccountNumber) -> Option<&mut Account> {
        self.accounts.get_mut(&account_number)
    }

    fn save(&mut self, account: Account) {
        self.accounts.insert(account.account_number(), account);
    }

    fn holder(&self, client_number: ClientNumber) -> Option<Arc<Holder>> {
        self.holders.get(&client_number).cloned()
    }

    fn accounts(&self) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = self.accounts.values().collect();
        accounts.sort_by_key(|account| account.account_number());
        accounts
    }
}
