pub mod account_structs;
/// # nft custody stake - NFT Staking System
///
/// ## Business Process Flow
///
/// 1. Initial Setup:
///    - Admin creates the fungible reward token with the program's reward
///      mint PDA as its mint authority
///    - Admin initializes the program with the reward token address, the
///      reward rate (base units per staked second) and an optional
///      per-redeem cap
///
/// 2. User Staking Flow:
///    a. Stake Phase:
///       - Holder delegates their NFT token account to the program's
///         custody PDA (ownership never moves)
///       - Program freezes the token account through the token metadata
///         program, locking transfers while staked
///       - A stake record opens the reward accrual window
///
/// 3. Reward Flow:
///    a. Redeem (any number of times while staked):
///       - Program settles the window since the last stake/redeem boundary
///       - Reward tokens are minted to the holder's reward token account
///       - The boundary resets, so no second redeem can pay the same seconds
///
/// 4. Unstake Flow:
///    - Program settles the final accrual window and mints it
///    - Token account is thawed and the delegation revoked, returning full
///      control to the holder
///    - The stake record is kept and can be re-staked later
///
/// 5. Administrative Functions:
///    - Update the reward rate and per-redeem cap
///    - Pause and unpause user operations
///
/// Security is maintained through PDAs (Program Derived Addresses) and strict
/// token authority controls. All token operations are atomic and validated
/// through Solana's transaction model.
pub mod error;
pub mod events;
mod guard;
pub mod processor;
pub mod rewards;
pub mod state;

use account_structs::*;
use anchor_lang::prelude::*;

declare_id!("2pE13XRXtstNEuBZ912ooGAnTQhabLYm57cFJW7tQXvK");

#[program]
pub mod nft_custody_stake {
    use super::*;

    /// Initializes the program with the reward token configuration:
    /// - reward_rate: Reward base units minted per staked second
    /// - max_reward_per_redeem: Ceiling for a single redeem, 0 for no cap
    pub fn initialize(
        ctx: Context<Initialize>,
        reward_rate: u64,
        max_reward_per_redeem: u64,
    ) -> Result<()> {
        processor::initialize(ctx, reward_rate, max_reward_per_redeem)
    }

    /// Pauses or unpauses user operations:
    /// - pause: true to pause, false to unpause
    pub fn pause(ctx: Context<Pause>, pause: bool) -> Result<()> {
        processor::pause(ctx, pause)
    }

    /// Updates the reward configuration:
    /// - new_reward_rate: New reward base units per staked second
    /// - new_max_reward_per_redeem: New single-redeem ceiling, 0 for no cap
    pub fn update_config(
        ctx: Context<UpdateConfig>,
        new_reward_rate: u64,
        new_max_reward_per_redeem: u64,
    ) -> Result<()> {
        processor::update_config(ctx, new_reward_rate, new_max_reward_per_redeem)
    }

    /// Places an NFT under program custody:
    /// - Delegates the holder's NFT token account to the custody PDA
    /// - Freezes the account against transfers while staked
    /// - Opens the reward accrual window
    pub fn stake(ctx: Context<Stake>) -> Result<()> {
        processor::stake(ctx)
    }

    /// Mints the reward accrued since the last stake/redeem boundary and
    /// resets the boundary. Returns the minted amount.
    pub fn redeem(ctx: Context<Redeem>) -> Result<u64> {
        processor::redeem(ctx)
    }

    /// Settles the outstanding reward, thaws the NFT token account and
    /// revokes the custody delegation. Returns the final minted amount.
    pub fn unstake(ctx: Context<Unstake>) -> Result<u64> {
        processor::unstake(ctx)
    }
}
