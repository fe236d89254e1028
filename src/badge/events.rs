use odra::casper_types::U256;
use odra::prelude::*;
use odra::prelude::Address;

use crate::badge::utils::Role;

/// An event emitted when a role is granted to an account.
#[odra::event]
pub struct RoleGranted {
    /// The granted role.
    pub role: Role,
    /// The account receiving the role.
    pub account: Address,
    /// The account that performed the grant.
    pub sender: Address,
}

/// An event emitted when a role is revoked from an account.
#[odra::event]
pub struct RoleRevoked {
    /// The revoked role.
    pub role: Role,
    /// The account losing the role.
    pub account: Address,
    /// The account that performed the revocation.
    pub sender: Address,
}

/// An event emitted when a badge type is registered.
#[odra::event]
pub struct TypeAdded {
    /// The type name.
    pub name: String,
    /// The token id bound to the name.
    pub token_id: u64,
}

/// An event emitted when a badge type is removed.
#[odra::event]
pub struct TypeRemoved {
    /// The type name, free for reuse from now on.
    pub name: String,
    /// The retired token id.
    pub token_id: u64,
}

#[odra::event]
/// Emitted when self-service minting of a type is switched on or off.
pub struct MintControlled {
    pub name: String,
    pub enabled: bool,
}

#[odra::event]
/// Emitted when the metadata base uri changes.
pub struct BaseUriUpdated {
    pub base_uri: String,
}

/// An event emitted when a badge is minted by its holder.
#[odra::event]
pub struct Mint {
    /// The recipient of the minted badge.
    pub recipient: Address,
    /// The token id of the badge type.
    pub token_id: u64,
    /// The amount of badges minted.
    pub amount: U256,
}

/// An event emitted when an operator airdrops badges.
#[odra::event]
pub struct Airdrop {
    /// The operator performing the airdrop.
    pub operator: Address,
    /// The token id of the badge type.
    pub token_id: u64,
    /// The credited accounts.
    pub recipients: Vec<Address>,
    /// The amount credited to each account, in the order of `recipients`.
    pub amounts: Vec<U256>,
}
