use anchor_lang::prelude::*;

use crate::{
    errors::ScaiTipsError,
    events::PaperTipped,
    state::Paper,
    utils::{load_record, record_exists, store_record, transfer_lamports, verify_paper_address},
    TipPaper,
};

pub fn tip_paper(ctx: Context<TipPaper>, identifier: String, amount: u64) -> Result<()> {
    let paper_ai = ctx.accounts.paper.to_account_info();
    verify_paper_address(ctx.program_id, &identifier, paper_ai.key)?;
    require!(
        record_exists(&paper_ai, ctx.program_id),
        ScaiTipsError::RecordNotFound
    );

    let mut paper: Paper = load_record(&paper_ai)?;

    let tipper = ctx.accounts.tipper.to_account_info();
    let author = ctx.accounts.author_payout.to_account_info();
    let system_program = ctx.accounts.system_program.to_account_info();

    settle_tip(&mut paper, author.key, amount, |lamports| {
        transfer_lamports(&tipper, &author, &system_program, lamports)
    })?;

    store_record(&paper_ai, &paper)?;

    msg!(
        "Tip of {} lamports sent to author of paper with identifier: {}",
        amount,
        paper.identifier
    );
    emit!(PaperTipped {
        paper: paper_ai.key(),
        tipper: tipper.key(),
        author: author.key(),
        amount,
        total_tipped: paper.total_tipped,
        tip_count: paper.tip_count,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

// -------------------------
// Shared tip logic
// -------------------------

/// Validates the tip, moves `amount` through `transfer`, then books the new aggregates.
///
/// Every check (including overflow) runs before `transfer`; the record is only
/// updated after `transfer` succeeds. Persisting the record is left to the caller.
pub fn settle_tip<F>(paper: &mut Paper, payee: &Pubkey, amount: u64, transfer: F) -> Result<()>
where
    F: FnOnce(u64) -> Result<()>,
{
    let tally = paper.tally_tip(amount, payee)?;

    transfer(amount)?;

    paper.apply_tally(tally);

    Ok(())
}
