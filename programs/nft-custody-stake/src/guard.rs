use crate::error::CustomErrorCode;
use crate::state::{CUSTODY_AUTHORITY_SEED, REWARD_MINT_AUTHORITY_SEED};
use anchor_lang::prelude::*;

#[allow(deprecated)]
use anchor_lang::solana_program::bpf_loader_upgradeable::UpgradeableLoaderState;

/// The PDA that NFT token accounts are delegated to while staked. Global to
/// the deployment; off-curve, so only this program can sign for it.
pub fn find_custody_authority() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CUSTODY_AUTHORITY_SEED], &crate::ID)
}

/// The PDA holding mint authority over the reward token. Global to the
/// deployment.
pub fn find_reward_mint_authority() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[REWARD_MINT_AUTHORITY_SEED], &crate::ID)
}

/// Admin instructions are gated on the program's upgrade authority, read
/// from the upgradeable loader's ProgramData account.
pub fn validate_program_update_authority(
    program_data_account: &UncheckedAccount,
    authority: &Signer,
) -> Result<()> {
    let program_data = program_data_account
        .try_borrow_data()
        .map_err(|_| CustomErrorCode::InvalidProgramData)?;

    let loader_state = bincode::deserialize::<UpgradeableLoaderState>(&program_data)
        .map_err(|_| CustomErrorCode::InvalidProgramData)?;

    match loader_state {
        UpgradeableLoaderState::ProgramData {
            slot: _,
            upgrade_authority_address,
        } => match upgrade_authority_address {
            Some(update_authority) => {
                require!(
                    authority.key() == update_authority,
                    CustomErrorCode::InvalidUpgradeAuthority
                );
            }
            None => {
                return Err(CustomErrorCode::NoUpgradeAuthority.into());
            }
        },
        _ => return Err(CustomErrorCode::InvalidProgramData.into()),
    }

    Ok(())
}
