use anchor_lang::prelude::*;
use anchor_lang::solana_program::{
    program::{invoke, invoke_signed},
    system_instruction,
};
use solana_sha256_hasher::hash;

use crate::errors::ScaiTipsError;

// -----------------
// Seeds / constants
// -----------------
pub const ADMIN_CONFIG_SEED: &[u8] = b"admin_config";
pub const PAPER_SEED: &[u8] = b"paper";

// -------------------------
// Address derivation
// -------------------------

/// Identifiers can exceed the 32-byte seed limit, so papers are keyed by the
/// SHA-256 of the identifier bytes.
pub fn hash_identifier(identifier: &str) -> [u8; 32] {
    hash(identifier.as_bytes()).to_bytes()
}

pub fn admin_config_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ADMIN_CONFIG_SEED], program_id)
}

pub fn paper_address(program_id: &Pubkey, identifier: &str) -> (Pubkey, u8) {
    let identifier_hash = hash_identifier(identifier);
    Pubkey::find_program_address(&[PAPER_SEED, identifier_hash.as_ref()], program_id)
}

/// Recomputes the paper PDA and checks it against the account supplied by the caller.
/// Returns the bump on success.
pub fn verify_paper_address(program_id: &Pubkey, identifier: &str, supplied: &Pubkey) -> Result<u8> {
    require!(!identifier.is_empty(), ScaiTipsError::InvalidIdentifier);

    let (expected, bump) = paper_address(program_id, identifier);
    require_keys_eq!(expected, *supplied, ScaiTipsError::InvalidIdentifier);

    Ok(bump)
}

// -------------------------
// Record I/O
// -------------------------

/// A record exists once the program owns the account and has written data to it.
pub fn record_exists(account: &AccountInfo, program_id: &Pubkey) -> bool {
    account.owner == program_id && !account.data_is_empty()
}

pub fn load_record<T: AccountDeserialize>(account: &AccountInfo) -> Result<T> {
    let data = account
        .try_borrow_data()
        .map_err(|_| error!(ScaiTipsError::AccountBorrowFailed))?;

    let mut slice: &[u8] = &data;
    T::try_deserialize(&mut slice)
}

pub fn store_record<T: AccountSerialize>(account: &AccountInfo, record: &T) -> Result<()> {
    let mut data = account
        .try_borrow_mut_data()
        .map_err(|_| error!(ScaiTipsError::AccountBorrowFailed))?;

    let mut w = std::io::Cursor::new(&mut data[..]);
    record.try_serialize(&mut w)
}

/// Creates a program-owned PDA of `space` bytes, paid by `payer`.
///
/// Someone may have sent lamports to the address ahead of time, in which case
/// `create_account` would fail; that path tops up rent and uses allocate + assign.
pub fn create_record_account<'info>(
    payer: &AccountInfo<'info>,
    target: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    program_id: &Pubkey,
    space: usize,
    signer_seeds: &[&[u8]],
) -> Result<()> {
    let required = Rent::get()?.minimum_balance(space);
    let current = target.lamports();

    if current == 0 {
        let ix = system_instruction::create_account(
            payer.key,
            target.key,
            required,
            space as u64,
            program_id,
        );
        invoke_signed(
            &ix,
            &[payer.clone(), target.clone(), system_program.clone()],
            &[signer_seeds],
        )?;
        return Ok(());
    }

    let top_up = required.saturating_sub(current);
    if top_up > 0 {
        transfer_lamports(payer, target, system_program, top_up)?;
    }

    invoke_signed(
        &system_instruction::allocate(target.key, space as u64),
        &[target.clone(), system_program.clone()],
        &[signer_seeds],
    )?;
    invoke_signed(
        &system_instruction::assign(target.key, program_id),
        &[target.clone(), system_program.clone()],
        &[signer_seeds],
    )?;

    Ok(())
}

/// System Program transfer; `from` must be a signer of the current instruction.
pub fn transfer_lamports<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    let ix = system_instruction::transfer(from.key, to.key, amount);

    invoke(&ix, &[from.clone(), to.clone(), system_program.clone()])?;

    Ok(())
}
