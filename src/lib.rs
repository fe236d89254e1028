#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(test), no_main)]
extern crate alloc;

/// Badge registry module: errors, events, storage and access control.
pub mod badge;
/// The badge registry contract.
pub mod badge_registry;
