use anchor_lang::prelude::*;

use crate::{
    constants::DISCRIMINATOR_LEN,
    errors::ScaiTipsError,
    events::{AdminAdded, AdminInitialized, AdminRemoved},
    state::AdminConfig,
    utils::{create_record_account, record_exists, store_record, ADMIN_CONFIG_SEED},
    AddAdmin, InitializeAdmin, RemoveAdmin,
};

pub fn initialize_admin(ctx: Context<InitializeAdmin>) -> Result<()> {
    let admin_config = ctx.accounts.admin_config.to_account_info();
    require!(
        !record_exists(&admin_config, ctx.program_id),
        ScaiTipsError::AlreadyInitialized
    );

    let admin_pk = ctx.accounts.admin.key();
    let bump = ctx.bumps.admin_config;

    create_record_account(
        &ctx.accounts.admin.to_account_info(),
        &admin_config,
        &ctx.accounts.system_program.to_account_info(),
        ctx.program_id,
        DISCRIMINATOR_LEN + AdminConfig::INIT_SPACE,
        &[ADMIN_CONFIG_SEED, &[bump]],
    )?;

    store_record(&admin_config, &AdminConfig::new(admin_pk, bump))?;

    msg!("Admin config initialized with initial admin: {}", admin_pk);
    emit!(AdminInitialized {
        admin: admin_pk,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

pub fn add_admin(ctx: Context<AddAdmin>, new_admin: Pubkey) -> Result<()> {
    let invoker = ctx.accounts.admin.key();
    let cfg = &mut ctx.accounts.admin_config;

    cfg.add_admin(&invoker, new_admin)?;

    msg!("Admin added: {}", new_admin);
    emit!(AdminAdded {
        added_by: invoker,
        admin: new_admin,
        admin_count: cfg.admins.len() as u8,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

pub fn remove_admin(ctx: Context<RemoveAdmin>, admin_to_remove: Pubkey) -> Result<()> {
    let invoker = ctx.accounts.admin.key();
    let cfg = &mut ctx.accounts.admin_config;

    cfg.remove_admin(&invoker, &admin_to_remove)?;

    if cfg.admins.is_empty() {
        msg!("Admin set is now empty; privileged operations are locked");
    }
    msg!("Admin removed: {}", admin_to_remove);
    emit!(AdminRemoved {
        removed_by: invoker,
        admin: admin_to_remove,
        admin_count: cfg.admins.len() as u8,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
