use anchor_lang::prelude::*;

#[error_code]
pub enum CustomErrorCode {
    #[msg("Operation not valid for the current stake state")]
    InvalidStakeState = 1,
    #[msg("Signer is not the record's holder")]
    UnauthorizedHolder = 2,
    #[msg("Stake record was created for a different token account")]
    InvalidAssetTokenAccount = 3,
    #[msg("Protocol is paused")]
    ProtocolPaused = 4,
    #[msg("Reward rate outside the allowed bounds")]
    InvalidRewardRate = 5,
    #[msg("Reward calculation overflowed")]
    RewardOverflow = 6,

    #[msg("Invalid mint provided")]
    InvalidMint = 7,
    #[msg("Invalid mint authority")]
    InvalidMintAuthority = 8,

    #[msg("ProgramData account did not match expected PDA.")]
    InvalidProgramData = 9,
    #[msg("Program has no upgrade authority (set to None).")]
    NoUpgradeAuthority = 10,
    #[msg("Signer is not the upgrade authority.")]
    InvalidUpgradeAuthority = 11,
    #[msg("Signer account missing.")]
    MissingSigner = 12,
}
