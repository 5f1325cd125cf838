use anchor_lang::prelude::*;

#[error_code]
pub enum ScaiTipsError {
    // -----------------
    // Admin set
    // -----------------
    #[msg("Unauthorized: signer is not an admin")]
    Unauthorized,

    #[msg("Admin config already initialized")]
    AlreadyInitialized,

    #[msg("Admin already exists")]
    AdminAlreadyExists,

    #[msg("Admin not found")]
    AdminNotFound,

    #[msg("Too many admins")]
    TooManyAdmins,

    #[msg("Invalid admin address")]
    InvalidAdminAddress,

    // -----------------
    // Paper registry
    // -----------------
    #[msg("Invalid identifier (empty or does not match the paper account)")]
    InvalidIdentifier,

    #[msg("Identifier too long")]
    IdentifierTooLong,

    #[msg("Invalid title")]
    InvalidTitle,

    #[msg("Title too long")]
    TitleTooLong,

    #[msg("Paper record already exists")]
    RecordAlreadyExists,

    #[msg("Paper record not found")]
    RecordNotFound,

    #[msg("Invalid author address")]
    InvalidAuthorAddress,

    // -----------------
    // Tip ledger
    // -----------------
    #[msg("Author address not set")]
    AuthorAddressNotSet,

    #[msg("Invalid tip amount")]
    InvalidTipAmount,

    #[msg("Tip amount too large")]
    TipAmountTooLarge,

    #[msg("Math overflow")]
    Overflow,

    #[msg("Failed to borrow account data")]
    AccountBorrowFailed,
}
