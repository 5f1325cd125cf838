// Centralized Program Constants

// Admin Set
// =========

/// Maximum number of identities the admin set can hold.
/// The admin config account is allocated once with room for exactly this many keys,
/// so `AdminConfig`'s `#[max_len]` must stay in sync with it.
pub const MAX_ADMINS: usize = 10;

// Paper Registry
// ==============

/// Maximum identifier (DOI) length in bytes.
pub const MAX_IDENTIFIER_LEN: usize = 200;

/// Maximum title length in bytes.
pub const MAX_TITLE_LEN: usize = 500;

// Tip Ledger
// ==========

/// Upper bound for a single tip, in lamports (1 SOL).
pub const MAX_TIP_LAMPORTS: u64 = 1_000_000_000;

/// Size of the Anchor account discriminator prefixed to every record.
pub const DISCRIMINATOR_LEN: usize = 8;
