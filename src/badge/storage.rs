use odra::casper_types::U256;
use odra::prelude::*;
use odra::prelude::{Address, Mapping, UnwrapOrRevert, Var};

use crate::badge::errors::Error;

/// Storage module for the active badge types.
///
/// Keeps the ordered list of active names, the name <-> token id binding and
/// the per-name mint switch. Token ids come from a counter and are never
/// handed out twice.
#[odra::module]
pub struct BadgeTypesStorage {
    names: Var<Vec<String>>,
    token_ids: Mapping<String, u64>,
    // Stale entries stay behind for retired ids; `name_of` filters them.
    type_names: Mapping<u64, String>,
    mint_enabled: Mapping<String, bool>,
    last_token_id: Var<u64>,
}

impl BadgeTypesStorage {
    /// Active type names in registration order.
    pub fn all(&self) -> Vec<String> {
        self.names.get_or_default()
    }

    /// Token id bound to the name, 0 if the name is not active.
    pub fn token_id(&self, name: &String) -> u64 {
        self.token_ids.get_or_default(name)
    }

    /// Token id bound to the name, reverting with `UnknownType` if inactive.
    pub fn active_token_id(&self, name: &String) -> u64 {
        match self.token_id(name) {
            0 => self.env().revert(Error::UnknownType),
            token_id => token_id,
        }
    }

    /// Name currently bound to the token id.
    pub fn name_of(&self, token_id: u64) -> Option<String> {
        let name = self.type_names.get(&token_id)?;
        if token_id != 0 && self.token_id(&name) == token_id {
            Some(name)
        } else {
            None
        }
    }

    pub fn mint_enabled(&self, name: &String) -> bool {
        self.mint_enabled.get_or_default(name)
    }

    /// Binds the name to a fresh token id and appends it to the active list.
    pub fn register(&mut self, name: String) -> u64 {
        if self.token_id(&name) != 0 {
            self.env().revert(Error::DuplicateType);
        }
        let token_id = self
            .last_token_id
            .get_or_default()
            .checked_add(1)
            .unwrap_or_revert_with(&self.env(), Error::ArithmeticOverflow);
        self.last_token_id.set(token_id);
        self.token_ids.set(&name, token_id);
        self.type_names.set(&token_id, name.clone());
        self.mint_enabled.set(&name, false);

        let mut names = self.all();
        names.push(name);
        self.names.set(names);
        token_id
    }

    /// Unbinds the name and drops it from the active list, keeping the order
    /// of the remaining names. Returns the retired token id.
    pub fn unregister(&mut self, name: &String) -> u64 {
        let token_id = self.active_token_id(name);
        self.token_ids.set(name, 0);
        self.mint_enabled.set(name, false);

        let mut names = self.all();
        names.retain(|active| active != name);
        self.names.set(names);
        token_id
    }

    pub fn set_mint_enabled(&mut self, name: &String, enabled: bool) {
        self.active_token_id(name);
        self.mint_enabled.set(name, enabled);
    }
}

/// Storage module for the badge balances and per-id supply.
#[odra::module]
pub struct BadgeBalancesStorage {
    balances: Mapping<(u64, Address), U256>,
    total_supplies: Mapping<u64, U256>,
}

impl BadgeBalancesStorage {
    pub fn balance_of(&self, owner: &Address, token_id: u64) -> U256 {
        self.balances.get_or_default(&(token_id, *owner))
    }

    /// Sum of all balances of the token id.
    pub fn total_supply(&self, token_id: u64) -> U256 {
        self.total_supplies.get_or_default(&token_id)
    }

    /// Reverts with `ArithmeticOverflow` unless `amount` more units of the
    /// token id can be credited. A balance never exceeds the supply, so one
    /// supply check covers every individual credit.
    pub fn ensure_mintable(&self, token_id: u64, amount: U256) {
        self.total_supply(token_id)
            .checked_add(amount)
            .unwrap_or_revert_with(&self.env(), Error::ArithmeticOverflow);
    }

    /// Adds `amount` to the owner's balance and to the supply.
    pub fn credit(&mut self, owner: &Address, token_id: u64, amount: U256) {
        if amount.is_zero() {
            return;
        }
        self.ensure_mintable(token_id, amount);
        let supply = self.total_supply(token_id) + amount;
        let balance = self.balance_of(owner, token_id) + amount;
        self.total_supplies.set(&token_id, supply);
        self.balances.set(&(token_id, *owner), balance);
    }
}
