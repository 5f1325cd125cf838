use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_ADMINS, MAX_IDENTIFIER_LEN, MAX_TIP_LAMPORTS, MAX_TITLE_LEN},
    errors::ScaiTipsError,
};

#[account]
#[derive(InitSpace)]
pub struct AdminConfig {
    /// Admin identities in insertion order, no duplicates.
    /// NOTE: max_len mirrors MAX_ADMINS to keep account size deterministic.
    #[max_len(10)]
    pub admins: Vec<Pubkey>,

    pub bump: u8,
}

impl AdminConfig {
    pub fn new(initial_admin: Pubkey, bump: u8) -> Self {
        Self {
            admins: vec![initial_admin],
            bump,
        }
    }

    pub fn is_admin(&self, identity: &Pubkey) -> bool {
        self.admins.contains(identity)
    }

    pub fn require_admin(&self, invoker: &Pubkey) -> Result<()> {
        require!(self.is_admin(invoker), ScaiTipsError::Unauthorized);
        Ok(())
    }

    pub fn add_admin(&mut self, invoker: &Pubkey, new_admin: Pubkey) -> Result<()> {
        self.require_admin(invoker)?;

        require!(!self.is_admin(&new_admin), ScaiTipsError::AdminAlreadyExists);
        require!(new_admin != Pubkey::default(), ScaiTipsError::InvalidAdminAddress);
        require!(self.admins.len() < MAX_ADMINS, ScaiTipsError::TooManyAdmins);

        self.admins.push(new_admin);

        Ok(())
    }

    /// Removing the last admin is allowed and leaves privileged operations unreachable.
    pub fn remove_admin(&mut self, invoker: &Pubkey, target: &Pubkey) -> Result<()> {
        self.require_admin(invoker)?;

        let pos = self
            .admins
            .iter()
            .position(|a| a == target)
            .ok_or(ScaiTipsError::AdminNotFound)?;

        // Stable removal (keeps relative order).
        self.admins.remove(pos);

        Ok(())
    }
}

#[account]
#[derive(InitSpace)]
pub struct Paper {
    /// DOI-like natural key; the PDA is derived from its hash.
    #[max_len(200)]
    pub identifier: String,

    #[max_len(500)]
    pub title: String,

    pub uploader_payout_address: Pubkey,

    /// `Pubkey::default()` until an admin configures it.
    pub author_payout_address: Pubkey,

    pub total_tipped: u64,
    pub tip_count: u64,

    /// Signer that registered the paper.
    pub uploader: Pubkey,
    pub bump: u8,
}

/// Aggregates a paper will hold once a pending tip lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TipTally {
    pub total_tipped: u64,
    pub tip_count: u64,
}

impl Paper {
    pub fn new(
        identifier: String,
        title: String,
        uploader_payout_address: Pubkey,
        uploader: Pubkey,
        bump: u8,
    ) -> Result<Self> {
        Self::validate_identifier(&identifier)?;
        Self::validate_title(&title)?;

        Ok(Self {
            identifier,
            title,
            uploader_payout_address,
            author_payout_address: Pubkey::default(),
            total_tipped: 0,
            tip_count: 0,
            uploader,
            bump,
        })
    }

    pub fn validate_identifier(identifier: &str) -> Result<()> {
        require!(!identifier.is_empty(), ScaiTipsError::InvalidIdentifier);
        require!(
            identifier.len() <= MAX_IDENTIFIER_LEN,
            ScaiTipsError::IdentifierTooLong
        );
        Ok(())
    }

    pub fn validate_title(title: &str) -> Result<()> {
        require!(!title.is_empty(), ScaiTipsError::InvalidTitle);
        require!(title.len() <= MAX_TITLE_LEN, ScaiTipsError::TitleTooLong);
        Ok(())
    }

    pub fn author_is_set(&self) -> bool {
        self.author_payout_address != Pubkey::default()
    }

    pub fn set_author_address(&mut self, author_payout_address: Pubkey) -> Result<()> {
        require!(
            author_payout_address != Pubkey::default(),
            ScaiTipsError::InvalidAuthorAddress
        );

        self.author_payout_address = author_payout_address;

        Ok(())
    }

    /// Checks every tip precondition and computes the resulting aggregates
    /// without touching the record.
    pub fn tally_tip(&self, amount: u64, payee: &Pubkey) -> Result<TipTally> {
        require!(amount > 0, ScaiTipsError::InvalidTipAmount);
        require!(amount <= MAX_TIP_LAMPORTS, ScaiTipsError::TipAmountTooLarge);

        require!(self.author_is_set(), ScaiTipsError::AuthorAddressNotSet);
        require_keys_eq!(
            *payee,
            self.author_payout_address,
            ScaiTipsError::InvalidAuthorAddress
        );

        let total_tipped = self
            .total_tipped
            .checked_add(amount)
            .ok_or_else(|| error!(ScaiTipsError::Overflow))?;
        let tip_count = self
            .tip_count
            .checked_add(1)
            .ok_or_else(|| error!(ScaiTipsError::Overflow))?;

        Ok(TipTally {
            total_tipped,
            tip_count,
        })
    }

    pub fn apply_tally(&mut self, tally: TipTally) {
        self.total_tipped = tally.total_tipped;
        self.tip_count = tally.tip_count;
    }
}
