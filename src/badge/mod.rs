/// Role table guarding every mutating entry point.
pub mod access_control;
/// Badge registry errors.
pub mod errors;
/// Badge registry events.
pub mod events;
/// Badge registry storage.
pub mod storage;
/// Badge registry utils.
pub mod utils;
mod tests;
