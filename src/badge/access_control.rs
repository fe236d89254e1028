//! Role table consulted by every mutating registry call.
use odra::prelude::*;
use odra::prelude::{Address, Mapping};

use crate::badge::errors::Error;
use crate::badge::events::{RoleGranted, RoleRevoked};
use crate::badge::utils::Role;

/// Role -> holders relation, administered by [`Role::admin_role`].
#[odra::module(events = [RoleGranted, RoleRevoked])]
pub struct AccessControl {
    roles: Mapping<(Role, Address), bool>,
}

impl AccessControl {
    /// Returns true if the account holds the role.
    pub fn has_role(&self, role: &Role, account: &Address) -> bool {
        self.roles.get_or_default(&(role.clone(), *account))
    }

    /// Reverts with `PermissionDenied` unless the account holds the role.
    pub fn check_role(&self, role: &Role, account: &Address) {
        if !self.has_role(role, account) {
            self.env().revert(Error::PermissionDenied);
        }
    }

    /// Grants the role; the caller must hold the role's admin role.
    pub fn grant_role(&mut self, role: &Role, account: &Address) {
        self.check_role(&role.admin_role(), &self.env().caller());
        self.unchecked_grant_role(role, account);
    }

    /// Revokes the role; the caller must hold the role's admin role.
    /// Revoking the last admin is allowed.
    pub fn revoke_role(&mut self, role: &Role, account: &Address) {
        self.check_role(&role.admin_role(), &self.env().caller());
        self.unchecked_revoke_role(role, account);
    }

    /// Drops a role held by the caller.
    pub fn renounce_role(&mut self, role: &Role, account: &Address) {
        if self.env().caller() != *account {
            self.env().revert(Error::CannotRenounceForOthers);
        }
        self.unchecked_revoke_role(role, account);
    }

    /// Grants without an authorization check. Only for `init`.
    pub fn unchecked_grant_role(&mut self, role: &Role, account: &Address) {
        if self.has_role(role, account) {
            return;
        }
        self.roles.set(&(role.clone(), *account), true);
        self.env().emit_event(RoleGranted {
            role: role.clone(),
            account: *account,
            sender: self.env().caller(),
        });
    }

    fn unchecked_revoke_role(&mut self, role: &Role, account: &Address) {
        if !self.has_role(role, account) {
            return;
        }
        self.roles.set(&(role.clone(), *account), false);
        self.env().emit_event(RoleRevoked {
            role: role.clone(),
            account: *account,
            sender: self.env().caller(),
        });
    }
}
