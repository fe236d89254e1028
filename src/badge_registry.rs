//! Non-transferable multi-token badge registry.
use odra::casper_types::bytesrepr::Bytes;
use odra::casper_types::U256;
use odra::prelude::*;
use odra::prelude::{Address, SubModule, UnwrapOrRevert, Var};

use crate::badge::access_control::AccessControl;
use crate::badge::errors::Error;
use crate::badge::events::{Airdrop, BaseUriUpdated, Mint, MintControlled, TypeAdded, TypeRemoved};
use crate::badge::storage::{BadgeBalancesStorage, BadgeTypesStorage};
use crate::badge::utils::Role;

// Developer notes
/*
    Admins manage roles, Operators manage the type catalog and airdrops.
    Badges only move out of the void: through `mint` or `mint_and_airdrop`.
*/

/// Badge registry module
#[odra::module(events = [TypeAdded, TypeRemoved, MintControlled, BaseUriUpdated, Mint, Airdrop])]
pub struct BadgeRegistry {
    access_control: SubModule<AccessControl>,
    types: SubModule<BadgeTypesStorage>,
    balances: SubModule<BadgeBalancesStorage>,
    base_uri: Var<String>,
}

#[odra::module]
impl BadgeRegistry {
    /// Initializes the registry; the deployer becomes the first admin.
    pub fn init(&mut self, base_uri: String) {
        let caller = self.caller();
        self.base_uri.set(base_uri);
        self.access_control
            .unchecked_grant_role(&Role::Admin, &caller);
    }

    // Access control

    /// Grants a role. The caller must hold the role's admin role.
    pub fn grant_role(&mut self, role: &Role, account: &Address) {
        self.access_control.grant_role(role, account);
    }

    /// Revokes a role. The caller must hold the role's admin role.
    pub fn revoke_role(&mut self, role: &Role, account: &Address) {
        self.access_control.revoke_role(role, account);
    }

    /// Drops one of the caller's own roles.
    pub fn renounce_role(&mut self, role: &Role, account: &Address) {
        self.access_control.renounce_role(role, account);
    }

    /// Query if an account holds a role
    pub fn has_role(&self, role: &Role, account: &Address) -> bool {
        self.access_control.has_role(role, account)
    }

    /// Query the role administering the given role
    pub fn get_role_admin(&self, role: &Role) -> Role {
        role.admin_role()
    }

    // Type catalog

    /// Registers a new badge type under a fresh token id.
    pub fn add_type(&mut self, name: String) {
        self.require_role(&Role::Operator);
        let token_id = self.types.register(name.clone());
        self.env().emit_event(TypeAdded { name, token_id });
    }

    /// Removes a badge type nobody holds. The name becomes reusable, the id
    /// stays retired.
    pub fn remove_type(&mut self, name: String) {
        self.require_role(&Role::Operator);
        let token_id = self.types.active_token_id(&name);
        if !self.balances.total_supply(token_id).is_zero() {
            self.env().revert(Error::TypeInUse);
        }
        self.types.unregister(&name);
        self.env().emit_event(TypeRemoved { name, token_id });
    }

    /// Returns the active type names in registration order.
    pub fn get_all_types(&self) -> Vec<String> {
        self.types.all()
    }

    /// Returns the token id bound to the name, 0 if there is none.
    pub fn get_token_id(&self, name: String) -> u64 {
        self.types.token_id(&name)
    }

    /// Returns the name bound to the token id.
    pub fn type_name(&self, token_id: u64) -> Option<String> {
        self.types.name_of(token_id)
    }

    /// Switches self-service minting of a type on or off.
    pub fn control_mint(&mut self, name: String, enabled: bool) {
        self.require_role(&Role::Operator);
        self.types.set_mint_enabled(&name, enabled);
        self.env().emit_event(MintControlled { name, enabled });
    }

    /// Query if self-service minting is enabled for a type
    pub fn is_mint_enabled(&self, name: String) -> bool {
        self.types.mint_enabled(&name)
    }

    // Minting

    /// Mints one badge of the type to the caller.
    pub fn mint(&mut self, name: String) {
        if !self.types.mint_enabled(&name) {
            self.env().revert(Error::MintingDisabled);
        }
        let token_id = self.types.active_token_id(&name);
        let recipient = self.caller();
        let amount = U256::one();
        self.balances.credit(&recipient, token_id, amount);
        self.env().emit_event(Mint {
            recipient,
            token_id,
            amount,
        });
    }

    /// Credits each recipient with the matching quantity. Either every entry
    /// is credited or the call reverts without writing anything.
    pub fn mint_and_airdrop(
        &mut self,
        name: String,
        recipients: Vec<Address>,
        quantities: Vec<U256>,
    ) {
        self.require_role(&Role::Operator);
        if recipients.len() != quantities.len() {
            self.env().revert(Error::LengthMismatch);
        }
        let token_id = self.types.active_token_id(&name);
        let total = quantities
            .iter()
            .try_fold(U256::zero(), |total, quantity| total.checked_add(*quantity))
            .unwrap_or_revert_with(&self.env(), Error::ArithmeticOverflow);
        self.balances.ensure_mintable(token_id, total);

        for (recipient, quantity) in recipients.iter().zip(quantities.iter()) {
            self.balances.credit(recipient, token_id, *quantity);
        }
        self.env().emit_event(Airdrop {
            operator: self.caller(),
            token_id,
            recipients,
            amounts: quantities,
        });
    }

    // Ledger queries

    /// Returns the balance of the given address for a token id.
    pub fn balance_of(&self, owner: &Address, token_id: u64) -> U256 {
        self.balances.balance_of(owner, token_id)
    }

    /// Returns the balances of each (owner, token id) pair.
    pub fn balance_of_batch(&self, owners: Vec<Address>, token_ids: Vec<u64>) -> Vec<U256> {
        if owners.len() != token_ids.len() {
            self.env().revert(Error::LengthMismatch);
        }
        owners
            .iter()
            .zip(token_ids.iter())
            .map(|(owner, token_id)| self.balances.balance_of(owner, *token_id))
            .collect()
    }

    /// Returns the amount of badges of a token id held across all accounts.
    pub fn total_supply(&self, token_id: u64) -> U256 {
        self.balances.total_supply(token_id)
    }

    /// Returns the metadata base uri.
    pub fn base_uri(&self) -> String {
        self.base_uri.get_or_default()
    }

    /// Replaces the metadata base uri, can only be called by an Admin
    pub fn set_base_uri(&mut self, base_uri: String) {
        self.require_role(&Role::Admin);
        self.base_uri.set(base_uri.clone());
        self.env().emit_event(BaseUriUpdated { base_uri });
    }

    // Disabled transfer surface

    /// Badges are never delegable, so no operator is ever approved.
    pub fn is_approved_for_all(&self, owner: &Address, operator: &Address) -> bool {
        let _ = (owner, operator);
        false
    }

    /// Always reverts: badges cannot be delegated.
    pub fn set_approval_for_all(&mut self, operator: &Address, approved: bool) {
        let _ = (operator, approved);
        self.env().revert(Error::CannotSetApprovalForAll)
    }

    /// Always reverts: badges cannot be transferred.
    pub fn safe_transfer_from(
        &mut self,
        from: &Address,
        to: &Address,
        token_id: u64,
        amount: U256,
        data: Bytes,
    ) {
        let _ = (from, to, token_id, amount, data);
        self.env().revert(Error::CannotSafeTransferFrom)
    }

    /// Always reverts: badges cannot be transferred.
    pub fn safe_batch_transfer_from(
        &mut self,
        from: &Address,
        to: &Address,
        token_ids: Vec<u64>,
        amounts: Vec<U256>,
        data: Bytes,
    ) {
        let _ = (from, to, token_ids, amounts, data);
        self.env().revert(Error::CannotSafeBatchTransferFrom)
    }
}

impl BadgeRegistry {
    fn require_role(&self, role: &Role) {
        self.access_control.check_role(role, &self.caller());
    }

    fn caller(&self) -> Address {
        self.env().caller()
    }
}
