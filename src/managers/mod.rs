// PassVault state managers
// Managers handle stateful client operations: the credential list and its mutations.

pub mod credential_list;
