use anchor_lang::prelude::*;

use crate::{
    constants::DISCRIMINATOR_LEN,
    errors::ScaiTipsError,
    events::{AuthorAddressSet, PaperRegistered},
    state::Paper,
    utils::{
        create_record_account, hash_identifier, load_record, record_exists, store_record,
        verify_paper_address, PAPER_SEED,
    },
    RegisterPaper, SetAuthorAddress,
};

/// Anyone may register; the identifier is the paper's permanent key.
pub fn register_paper(
    ctx: Context<RegisterPaper>,
    identifier: String,
    title: String,
    uploader_payout_address: Pubkey,
) -> Result<()> {
    let paper_ai = ctx.accounts.paper.to_account_info();
    let bump = verify_paper_address(ctx.program_id, &identifier, paper_ai.key)?;

    require!(
        !record_exists(&paper_ai, ctx.program_id),
        ScaiTipsError::RecordAlreadyExists
    );

    let uploader_pk = ctx.accounts.uploader.key();
    let paper = Paper::new(identifier, title, uploader_payout_address, uploader_pk, bump)?;

    let identifier_hash = hash_identifier(&paper.identifier);
    create_record_account(
        &ctx.accounts.uploader.to_account_info(),
        &paper_ai,
        &ctx.accounts.system_program.to_account_info(),
        ctx.program_id,
        DISCRIMINATOR_LEN + Paper::INIT_SPACE,
        &[PAPER_SEED, identifier_hash.as_ref(), &[bump]],
    )?;

    store_record(&paper_ai, &paper)?;

    msg!(
        "Paper registered with identifier: {}, uploader: {}",
        paper.identifier,
        uploader_pk
    );
    emit!(PaperRegistered {
        paper: paper_ai.key(),
        identifier: paper.identifier,
        uploader: uploader_pk,
        uploader_payout_address,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

pub fn set_author_address(
    ctx: Context<SetAuthorAddress>,
    identifier: String,
    author_payout_address: Pubkey,
) -> Result<()> {
    let paper_ai = ctx.accounts.paper.to_account_info();
    verify_paper_address(ctx.program_id, &identifier, paper_ai.key)?;
    require!(
        record_exists(&paper_ai, ctx.program_id),
        ScaiTipsError::RecordNotFound
    );

    let admin_pk = ctx.accounts.admin.key();
    ctx.accounts.admin_config.require_admin(&admin_pk)?;

    let mut paper: Paper = load_record(&paper_ai)?;
    let previous_author = paper.author_payout_address;
    paper.set_author_address(author_payout_address)?;

    store_record(&paper_ai, &paper)?;

    msg!(
        "Author address set for paper identifier: {}, author: {}",
        paper.identifier,
        author_payout_address
    );
    emit!(AuthorAddressSet {
        paper: paper_ai.key(),
        admin: admin_pk,
        previous_author,
        author_payout_address,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
