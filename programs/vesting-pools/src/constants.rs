/// Seed of the singleton ledger PDA.
pub const LEDGER_SEED: &[u8] = b"ledger";

/// Seed prefix of the vault token account owned by the ledger.
pub const VAULT_SEED: &[u8] = b"vault";

/// Capacity bounds used to size the ledger account at initialization.
pub const MAX_POOLS: usize = 16;
pub const MAX_USER_VESTINGS: usize = 128;
pub const MAX_WALLETS: usize = 64;
pub const MAX_VESTINGS_PER_WALLET: usize = 16;
