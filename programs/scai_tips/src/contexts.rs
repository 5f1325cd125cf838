// programs/scai_tips/src/contexts.rs

use anchor_lang::prelude::*;

use crate::state::AdminConfig;

// ----------------------------
// Admin set
// ----------------------------

#[derive(Accounts)]
pub struct InitializeAdmin<'info> {
    /// CHECK: created by the handler so a second init reports AlreadyInitialized.
    #[account(
        mut,
        seeds = [crate::ADMIN_CONFIG_SEED],
        bump
    )]
    pub admin_config: UncheckedAccount<'info>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct AddAdmin<'info> {
    #[account(
        mut,
        seeds = [crate::ADMIN_CONFIG_SEED],
        bump = admin_config.bump
    )]
    pub admin_config: Account<'info, AdminConfig>,

    pub admin: Signer<'info>,
}

#[derive(Accounts)]
pub struct RemoveAdmin<'info> {
    #[account(
        mut,
        seeds = [crate::ADMIN_CONFIG_SEED],
        bump = admin_config.bump
    )]
    pub admin_config: Account<'info, AdminConfig>,

    pub admin: Signer<'info>,
}

// ----------------------------
// Paper registry
// ----------------------------

#[derive(Accounts)]
pub struct RegisterPaper<'info> {
    /// CHECK: must equal the PDA derived from the identifier; verified and created in the handler.
    #[account(mut)]
    pub paper: UncheckedAccount<'info>,

    #[account(mut)]
    pub uploader: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct SetAuthorAddress<'info> {
    /// CHECK: must equal the PDA derived from the identifier; loaded in the handler.
    #[account(mut)]
    pub paper: UncheckedAccount<'info>,

    #[account(
        seeds = [crate::ADMIN_CONFIG_SEED],
        bump = admin_config.bump
    )]
    pub admin_config: Account<'info, AdminConfig>,

    pub admin: Signer<'info>,
}

// ----------------------------
// Tip ledger
// ----------------------------

#[derive(Accounts)]
pub struct TipPaper<'info> {
    /// CHECK: must equal the PDA derived from the identifier; loaded in the handler.
    #[account(mut)]
    pub paper: UncheckedAccount<'info>,

    #[account(mut)]
    pub tipper: Signer<'info>,

    /// CHECK: author payout wallet; compared against the paper record in the handler.
    #[account(mut)]
    pub author_payout: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}
