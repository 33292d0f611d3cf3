//! Credential handling for account creation and updates.

pub mod password;
