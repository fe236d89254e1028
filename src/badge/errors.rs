//! Error type for the badge registry.

use odra::prelude::*;

/// Errors that may occur during the badge registry operations.
#[odra::odra_error]
pub enum Error {
    /// The caller does not hold the role required by the entry point.
    PermissionDenied = 60_000,
    /// A type with this name is already active.
    DuplicateType = 60_001,
    /// No active type is bound to this name.
    UnknownType = 60_002,
    /// Removal refused while some holder still owns a badge of the type.
    TypeInUse = 60_003,
    /// Self-service minting is switched off for the type.
    MintingDisabled = 60_004,
    /// Paired argument sequences differ in length.
    LengthMismatch = 60_005,
    /// Approvals are never granted for badges.
    CannotSetApprovalForAll = 60_006,
    /// Badges cannot be transferred.
    CannotSafeTransferFrom = 60_007,
    /// Badges cannot be transferred in batches either.
    CannotSafeBatchTransferFrom = 60_008,
    /// A balance or supply would exceed `U256::MAX`.
    ArithmeticOverflow = 60_009,
    /// Only the account itself may renounce its roles.
    CannotRenounceForOthers = 60_010,
}

impl Error {
    /// Human readable reason, matching the revert strings existing clients check for.
    pub fn reason(&self) -> &'static str {
        match self {
            Error::PermissionDenied => "Caller is missing the required role.",
            Error::DuplicateType => "The type already exists.",
            Error::UnknownType => "The type does not exist.",
            Error::TypeInUse => "The type is already in use by users.",
            Error::MintingDisabled => "Minting of this NFT is not allowed.",
            Error::LengthMismatch => "Recipients and quantities length mismatch.",
            Error::CannotSetApprovalForAll => "Cannot setApprovalForAll.",
            Error::CannotSafeTransferFrom => "Cannot safeTransferFrom.",
            Error::CannotSafeBatchTransferFrom => "Cannot safeBatchTransferFrom.",
            Error::ArithmeticOverflow => "Balance overflow.",
            Error::CannotRenounceForOthers => "Can only renounce roles for self.",
        }
    }

    /// True for the permanent rejections of the disabled transfer surface.
    pub fn is_transfer_restriction(&self) -> bool {
        matches!(
            self,
            Error::CannotSetApprovalForAll
                | Error::CannotSafeTransferFrom
                | Error::CannotSafeBatchTransferFrom
        )
    }
}
