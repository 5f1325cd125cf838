use anchor_lang::prelude::*;

pub mod constants;
pub mod contexts;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;


pub use constants::*;
pub use contexts::*;
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use state::*;
pub use utils::*;

#[cfg(not(feature = "no-entrypoint"))]
use solana_security_txt::security_txt;

#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    // Placeholder contact values (reserved example.com domain); replace with the
    // project's published repository and security contact before deploying.

    // Required fields
    name: "SCAI Tips",
    project_url: "https://example.com/scai-tips",
    contacts: "email:security@example.com",
    policy: "https://example.com/scai-tips/SECURITY.md",

    // Optional fields
    preferred_languages: "en,zh",
    source_code: "https://example.com/scai-tips"
}

declare_id!("J3u5yi5qkuhX6rK1q6AXNYn6cfahFnLfHqwxBPz3EoCT");

#[program]
pub mod scai_tips {
    use super::*;
    use crate::instructions::{admin, paper, tip};

    // ----------------------------
    // Admin set
    // ----------------------------
    pub fn initialize_admin(ctx: Context<InitializeAdmin>) -> Result<()> {
        admin::initialize_admin(ctx)
    }

    pub fn add_admin(ctx: Context<AddAdmin>, new_admin: Pubkey) -> Result<()> {
        admin::add_admin(ctx, new_admin)
    }

    pub fn remove_admin(ctx: Context<RemoveAdmin>, admin_to_remove: Pubkey) -> Result<()> {
        admin::remove_admin(ctx, admin_to_remove)
    }

    // ----------------------------
    // Paper registry
    // ----------------------------
    pub fn register_paper(
        ctx: Context<RegisterPaper>,
        identifier: String,
        title: String,
        uploader_payout_address: Pubkey,
    ) -> Result<()> {
        paper::register_paper(ctx, identifier, title, uploader_payout_address)
    }

    pub fn set_author_address(
        ctx: Context<SetAuthorAddress>,
        identifier: String,
        author_payout_address: Pubkey,
    ) -> Result<()> {
        paper::set_author_address(ctx, identifier, author_payout_address)
    }

    // ----------------------------
    // Tip ledger
    // ----------------------------
    pub fn tip_paper(ctx: Context<TipPaper>, identifier: String, amount: u64) -> Result<()> {
        tip::tip_paper(ctx, identifier, amount)
    }
}
