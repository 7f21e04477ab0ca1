use std::collections::{BTreeMap, HashMap};

use crate::avatar::Account;

/// The host's persistent settings store.
///
/// Only one key is ever touched. Values are observed at the start of a
/// lifecycle call and written back whole.
pub trait OptionStore {
    fn get_option(&self, key: &str) -> Option<String>;
    fn update_option(&mut self, key: &str, value: &str);
}

/// Lookup of host user accounts by numeric id.
pub trait AccountDirectory {
    fn account_by_id(&self, id: u64) -> Option<Account>;
}

impl OptionStore for BTreeMap<String, String> {
    fn get_option(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }

    fn update_option(&mut self, key: &str, value: &str) {
        self.insert(key.to_string(), value.to_string());
    }
}

impl OptionStore for HashMap<String, String> {
    fn get_option(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }

    fn update_option(&mut self, key: &str, value: &str) {
        self.insert(key.to_string(), value.to_string());
    }
}

impl AccountDirectory for BTreeMap<u64, Account> {
    fn account_by_id(&self, id: u64) -> Option<Account> {
        self.get(&id).cloned()
    }
}

impl AccountDirectory for HashMap<u64, Account> {
    fn account_by_id(&self, id: u64) -> Option<Account> {
        self.get(&id).cloned()
    }
}

impl AccountDirectory for [Account] {
    fn account_by_id(&self, id: u64) -> Option<Account> {
        self.iter().find(|account| account.id == id).cloned()
    }
}

impl AccountDirectory for Vec<Account> {
    fn account_by_id(&self, id: u64) -> Option<Account> {
        self.as_slice().account_by_id(id)
    }
}

/// A directory with no accounts. Every numeric lookup misses.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAccounts;

impl AccountDirectory for NoAccounts {
    fn account_by_id(&self, _id: u64) -> Option<Account> {
        None
    }
}
