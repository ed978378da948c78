use crate::error::*;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::metadata::Metadata;
use anchor_spl::token::{Mint, Token, TokenAccount};

use anchor_lang::solana_program::bpf_loader_upgradeable::{self};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = signer,
        space = Config::LEN,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, Config>,

    /// The fungible token minted as staking rewards. Its mint authority must
    /// already be the program's reward mint PDA so redeem can sign mints.
    #[account(
        constraint = reward_mint.mint_authority.unwrap() == reward_mint_authority.key() @ CustomErrorCode::InvalidMintAuthority
    )]
    pub reward_mint: Account<'info, Mint>,

    /// CHECK: This is a PDA that acts as the reward mint authority, validated by seeds constraint
    #[account(
        seeds = [REWARD_MINT_AUTHORITY_SEED],
        bump
    )]
    pub reward_mint_authority: UncheckedAccount<'info>,

    #[account(mut)]
    pub signer: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,

    /// CHECK: This is the program data account that contains the update authority
    #[account(
        constraint = program_data.key() == get_program_data_address(&crate::id()) @ CustomErrorCode::InvalidProgramData
    )]
    pub program_data: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct Pause<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    /// CHECK: This is the program data account that contains the update authority
    #[account(
        constraint = program_data.key() == get_program_data_address(&crate::id()) @ CustomErrorCode::InvalidProgramData
    )]
    pub program_data: UncheckedAccount<'info>,

    pub signer: Signer<'info>,
}

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    /// CHECK: This is the program data account that contains the update authority
    #[account(
        constraint = program_data.key() == get_program_data_address(&crate::id()) @ CustomErrorCode::InvalidProgramData
    )]
    pub program_data: UncheckedAccount<'info>,

    pub signer: Signer<'info>,
}

#[derive(Accounts)]
pub struct Stake<'info> {
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(mut)]
    pub holder: Signer<'info>,

    #[account(
        mut,
        associated_token::mint = asset_mint,
        associated_token::authority = holder
    )]
    pub asset_token_account: Account<'info, TokenAccount>,

    pub asset_mint: Account<'info, Mint>,

    /// CHECK: Master edition of the NFT, passed through to the token metadata
    /// program which validates it against the mint
    pub asset_edition: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = holder,
        space = StakeRecord::LEN,
        seeds = [holder.key().as_ref(), asset_token_account.key().as_ref()],
        bump
    )]
    pub stake_record: Account<'info, StakeRecord>,

    /// CHECK: This is a PDA the token account is delegated to while staked, validated by seeds constraint
    #[account(
        seeds = [CUSTODY_AUTHORITY_SEED],
        bump
    )]
    pub custody_authority: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub metadata_program: Program<'info, Metadata>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct Redeem<'info> {
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(mut)]
    pub holder: Signer<'info>,

    #[account(
        token::authority = holder
    )]
    pub asset_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [holder.key().as_ref(), asset_token_account.key().as_ref()],
        bump = stake_record.bump,
        constraint = stake_record.holder == holder.key() @ CustomErrorCode::UnauthorizedHolder,
        constraint = stake_record.asset_token_account == asset_token_account.key() @ CustomErrorCode::InvalidAssetTokenAccount
    )]
    pub stake_record: Account<'info, StakeRecord>,

    #[account(
        mut,
        constraint = reward_mint.key() == config.reward_mint @ CustomErrorCode::InvalidMint
    )]
    pub reward_mint: Account<'info, Mint>,

    /// CHECK: This is a PDA that acts as the reward mint authority, validated by seeds constraint
    #[account(
        seeds = [REWARD_MINT_AUTHORITY_SEED],
        bump,
        constraint = reward_mint_authority.key() == reward_mint.mint_authority.unwrap() @ CustomErrorCode::InvalidMintAuthority
    )]
    pub reward_mint_authority: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = holder,
        associated_token::mint = reward_mint,
        associated_token::authority = holder
    )]
    pub holder_reward_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct Unstake<'info> {
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(mut)]
    pub holder: Signer<'info>,

    #[account(
        mut,
        associated_token::mint = asset_mint,
        associated_token::authority = holder
    )]
    pub asset_token_account: Account<'info, TokenAccount>,

    pub asset_mint: Account<'info, Mint>,

    /// CHECK: Master edition of the NFT, passed through to the token metadata
    /// program which validates it against the mint
    pub asset_edition: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [holder.key().as_ref(), asset_token_account.key().as_ref()],
        bump = stake_record.bump,
        constraint = stake_record.holder == holder.key() @ CustomErrorCode::UnauthorizedHolder,
        constraint = stake_record.asset_token_account == asset_token_account.key() @ CustomErrorCode::InvalidAssetTokenAccount
    )]
    pub stake_record: Account<'info, StakeRecord>,

    /// CHECK: This is a PDA the token account is delegated to while staked, validated by seeds constraint
    #[account(
        seeds = [CUSTODY_AUTHORITY_SEED],
        bump
    )]
    pub custody_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        constraint = reward_mint.key() == config.reward_mint @ CustomErrorCode::InvalidMint
    )]
    pub reward_mint: Account<'info, Mint>,

    /// CHECK: This is a PDA that acts as the reward mint authority, validated by seeds constraint
    #[account(
        seeds = [REWARD_MINT_AUTHORITY_SEED],
        bump,
        constraint = reward_mint_authority.key() == reward_mint.mint_authority.unwrap() @ CustomErrorCode::InvalidMintAuthority
    )]
    pub reward_mint_authority: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = holder,
        associated_token::mint = reward_mint,
        associated_token::authority = holder
    )]
    pub holder_reward_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub metadata_program: Program<'info, Metadata>,
    pub system_program: Program<'info, System>,
}

// Helper function to derive the program data address
fn get_program_data_address(program_id: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[program_id.as_ref()], &bpf_loader_upgradeable::id()).0
}
