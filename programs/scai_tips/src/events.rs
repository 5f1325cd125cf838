use anchor_lang::prelude::*;

#[event]
pub struct AdminInitialized {
    pub admin: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct AdminAdded {
    pub added_by: Pubkey,
    pub admin: Pubkey,
    pub admin_count: u8,
    pub timestamp: i64,
}

#[event]
pub struct AdminRemoved {
    pub removed_by: Pubkey,
    pub admin: Pubkey,
    pub admin_count: u8,
    pub timestamp: i64,
}

#[event]
pub struct PaperRegistered {
    pub paper: Pubkey,
    pub identifier: String,
    pub uploader: Pubkey,
    pub uploader_payout_address: Pubkey,
    pub timestamp: i64,
}

/// Emitted on every author payout change, including overwrites of a previous address.
#[event]
pub struct AuthorAddressSet {
    pub paper: Pubkey,
    pub admin: Pubkey,
    pub previous_author: Pubkey,
    pub author_payout_address: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct PaperTipped {
    pub paper: Pubkey,
    pub tipper: Pubkey,
    pub author: Pubkey,
    pub amount: u64,
    /// Aggregates after this tip
    pub total_tipped: u64,
    pub tip_count: u64,
    pub timestamp: i64,
}
