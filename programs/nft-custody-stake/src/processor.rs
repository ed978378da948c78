use crate::account_structs::*;
use crate::error::*;
use crate::events::*;
use crate::guard::validate_program_update_authority;
use crate::rewards;
use crate::state::{
    CUSTODY_AUTHORITY_SEED, MAX_REWARD_RATE, MIN_REWARD_RATE, REWARD_MINT_AUTHORITY_SEED,
};
use anchor_lang::prelude::*;
use anchor_spl::metadata::{self, FreezeDelegatedAccount, ThawDelegatedAccount};
use anchor_spl::token::{self, Approve, Mint, MintTo, Revoke, Token, TokenAccount};

pub fn initialize(
    ctx: Context<Initialize>,
    reward_rate: u64,
    max_reward_per_redeem: u64,
) -> Result<()> {
    validate_program_update_authority(&ctx.accounts.program_data, &ctx.accounts.signer)?;
    require!(
        reward_rate >= MIN_REWARD_RATE,
        CustomErrorCode::InvalidRewardRate
    );
    require!(
        reward_rate <= MAX_REWARD_RATE,
        CustomErrorCode::InvalidRewardRate
    );

    let config = &mut ctx.accounts.config;
    config.reward_mint = ctx.accounts.reward_mint.key();
    config.reward_rate = reward_rate;
    config.max_reward_per_redeem = max_reward_per_redeem;
    config.paused = false;
    config.bump = ctx.bumps.config;

    Ok(())
}

pub fn pause(ctx: Context<Pause>, pause: bool) -> Result<()> {
    validate_program_update_authority(&ctx.accounts.program_data, &ctx.accounts.signer)?;
    let config = &mut ctx.accounts.config;
    config.paused = pause;

    msg!("Protocol paused: {}", pause);

    Ok(())
}

pub fn update_config(
    ctx: Context<UpdateConfig>,
    new_reward_rate: u64,
    new_max_reward_per_redeem: u64,
) -> Result<()> {
    validate_program_update_authority(&ctx.accounts.program_data, &ctx.accounts.signer)?;
    require!(
        new_reward_rate >= MIN_REWARD_RATE,
        CustomErrorCode::InvalidRewardRate
    );
    require!(
        new_reward_rate <= MAX_REWARD_RATE,
        CustomErrorCode::InvalidRewardRate
    );

    let config = &mut ctx.accounts.config;
    let old_rate = config.reward_rate;
    config.reward_rate = new_reward_rate;
    config.max_reward_per_redeem = new_max_reward_per_redeem;

    emit!(RewardConfigUpdated {
        admin: ctx.accounts.signer.key(),
        old_rate,
        new_rate: new_reward_rate,
        max_reward_per_redeem: new_max_reward_per_redeem,
        mint: config.reward_mint,
    });

    Ok(())
}

pub fn stake(ctx: Context<Stake>) -> Result<()> {
    require!(!ctx.accounts.config.paused, CustomErrorCode::ProtocolPaused);

    let now = Clock::get()?.unix_timestamp;
    ctx.accounts.stake_record.mark_staked(
        ctx.accounts.holder.key(),
        ctx.accounts.asset_token_account.key(),
        ctx.bumps.stake_record,
        now,
    )?;

    // The holder delegates the NFT token account to the custody PDA, then the
    // PDA freezes it through the token metadata program. Either CPI failing
    // aborts the transaction, record flip included.
    token::approve(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Approve {
                to: ctx.accounts.asset_token_account.to_account_info(),
                delegate: ctx.accounts.custody_authority.to_account_info(),
                authority: ctx.accounts.holder.to_account_info(),
            },
        ),
        1,
    )?;

    let seeds: &[&[u8]] = &[CUSTODY_AUTHORITY_SEED, &[ctx.bumps.custody_authority]];
    let signer = &[&seeds[..]];
    metadata::freeze_delegated_account(CpiContext::new_with_signer(
        ctx.accounts.metadata_program.to_account_info(),
        FreezeDelegatedAccount {
            metadata: ctx.accounts.asset_edition.to_account_info(),
            delegate: ctx.accounts.custody_authority.to_account_info(),
            token_account: ctx.accounts.asset_token_account.to_account_info(),
            edition: ctx.accounts.asset_edition.to_account_info(),
            mint: ctx.accounts.asset_mint.to_account_info(),
            token_program: ctx.accounts.token_program.to_account_info(),
        },
        signer,
    ))?;

    emit!(AssetStaked {
        holder: ctx.accounts.holder.key(),
        asset_token_account: ctx.accounts.asset_token_account.key(),
        asset_mint: ctx.accounts.asset_mint.key(),
        start_time: now,
    });

    Ok(())
}

pub fn redeem(ctx: Context<Redeem>) -> Result<u64> {
    require!(!ctx.accounts.config.paused, CustomErrorCode::ProtocolPaused);

    let now = Clock::get()?.unix_timestamp;
    let elapsed = ctx
        .accounts
        .stake_record
        .close_reward_window(&ctx.accounts.holder.key(), now)?;

    let config = &ctx.accounts.config;
    let amount = rewards::accrued_reward(config.reward_rate, elapsed, config.max_reward_per_redeem)?;
    msg!("Staked seconds settled: {}, reward: {}", elapsed, amount);

    if amount > 0 {
        mint_reward(
            &ctx.accounts.token_program,
            &ctx.accounts.reward_mint,
            &ctx.accounts.holder_reward_token_account,
            &ctx.accounts.reward_mint_authority,
            ctx.bumps.reward_mint_authority,
            amount,
        )?;
    }

    emit!(RewardsRedeemed {
        holder: ctx.accounts.holder.key(),
        asset_token_account: ctx.accounts.asset_token_account.key(),
        amount,
        mint: ctx.accounts.reward_mint.key(),
    });

    Ok(amount)
}

pub fn unstake(ctx: Context<Unstake>) -> Result<u64> {
    require!(!ctx.accounts.config.paused, CustomErrorCode::ProtocolPaused);

    let now = Clock::get()?.unix_timestamp;
    let holder = ctx.accounts.holder.key();

    // Settle the outstanding accrual window before releasing custody, exactly
    // as a redeem would.
    let elapsed = ctx.accounts.stake_record.close_reward_window(&holder, now)?;
    let config = &ctx.accounts.config;
    let amount = rewards::accrued_reward(config.reward_rate, elapsed, config.max_reward_per_redeem)?;
    msg!("Staked seconds settled: {}, final reward: {}", elapsed, amount);

    if amount > 0 {
        mint_reward(
            &ctx.accounts.token_program,
            &ctx.accounts.reward_mint,
            &ctx.accounts.holder_reward_token_account,
            &ctx.accounts.reward_mint_authority,
            ctx.bumps.reward_mint_authority,
            amount,
        )?;
    }

    let seeds: &[&[u8]] = &[CUSTODY_AUTHORITY_SEED, &[ctx.bumps.custody_authority]];
    let signer = &[&seeds[..]];
    metadata::thaw_delegated_account(CpiContext::new_with_signer(
        ctx.accounts.metadata_program.to_account_info(),
        ThawDelegatedAccount {
            metadata: ctx.accounts.asset_edition.to_account_info(),
            delegate: ctx.accounts.custody_authority.to_account_info(),
            token_account: ctx.accounts.asset_token_account.to_account_info(),
            edition: ctx.accounts.asset_edition.to_account_info(),
            mint: ctx.accounts.asset_mint.to_account_info(),
            token_program: ctx.accounts.token_program.to_account_info(),
        },
        signer,
    ))?;

    token::revoke(CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Revoke {
            source: ctx.accounts.asset_token_account.to_account_info(),
            authority: ctx.accounts.holder.to_account_info(),
        },
    ))?;

    ctx.accounts.stake_record.mark_unstaked(&holder)?;

    emit!(AssetUnstaked {
        holder,
        asset_token_account: ctx.accounts.asset_token_account.key(),
        final_reward: amount,
        mint: ctx.accounts.reward_mint.key(),
    });

    Ok(amount)
}

fn mint_reward<'info>(
    token_program: &Program<'info, Token>,
    reward_mint: &Account<'info, Mint>,
    destination: &Account<'info, TokenAccount>,
    reward_mint_authority: &UncheckedAccount<'info>,
    authority_bump: u8,
    amount: u64,
) -> Result<()> {
    let seeds: &[&[u8]] = &[REWARD_MINT_AUTHORITY_SEED, &[authority_bump]];
    let signer = &[&seeds[..]];
    token::mint_to(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            MintTo {
                mint: reward_mint.to_account_info(),
                to: destination.to_account_info(),
                authority: reward_mint_authority.to_account_info(),
            },
            signer,
        ),
        amount,
    )
}
