use crate::error::CustomErrorCode;
use anchor_lang::prelude::*;

/// Seed of the PDA delegated custody over staked NFT token accounts.
pub const CUSTODY_AUTHORITY_SEED: &[u8] = b"authority";
/// Seed of the PDA holding mint authority over the reward token.
pub const REWARD_MINT_AUTHORITY_SEED: &[u8] = b"mint";
pub const CONFIG_SEED: &[u8] = b"config";

pub const MIN_REWARD_RATE: u64 = 1;
pub const MAX_REWARD_RATE: u64 = 1_000_000_000; // base units per staked second

#[account]
pub struct Config {
    pub reward_mint: Pubkey,
    pub reward_rate: u64,
    pub max_reward_per_redeem: u64, // 0 disables the cap
    pub paused: bool,
    pub bump: u8,
}

impl Config {
    pub const LEN: usize = 8 + 32 + 8 + 8 + 1 + 1;
}

/// One record per (holder, NFT token account) pair, addressed by those two
/// keys as PDA seeds. Created on first stake and reused across every later
/// stake/unstake cycle.
#[account]
#[derive(Default)]
pub struct StakeRecord {
    pub holder: Pubkey,
    pub asset_token_account: Pubkey,
    pub status: StakeStatus,
    pub stake_start_time: i64,
    pub last_redeem_time: i64,
    pub bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum StakeStatus {
    #[default]
    Unstaked,
    Staked,
}

impl StakeRecord {
    pub const LEN: usize = 8 + 32 + 32 + 1 + 8 + 8 + 1;

    /// Unstaked -> Staked. A fresh record (all-default fields, as written by
    /// `init_if_needed`) binds `(holder, asset_token_account)` here; a reused
    /// record must present the same pair it was created with.
    pub fn mark_staked(
        &mut self,
        holder: Pubkey,
        asset_token_account: Pubkey,
        bump: u8,
        now: i64,
    ) -> Result<()> {
        require!(
            self.status == StakeStatus::Unstaked,
            CustomErrorCode::InvalidStakeState
        );

        if self.holder == Pubkey::default() {
            self.holder = holder;
            self.asset_token_account = asset_token_account;
            self.bump = bump;
        } else {
            require_keys_eq!(self.holder, holder, CustomErrorCode::UnauthorizedHolder);
            require_keys_eq!(
                self.asset_token_account,
                asset_token_account,
                CustomErrorCode::InvalidAssetTokenAccount
            );
        }

        self.status = StakeStatus::Staked;
        self.stake_start_time = now;
        self.last_redeem_time = now;
        Ok(())
    }

    /// Closes the accrual window open since `last_redeem_time` and starts the
    /// next one at `now`. Returns the elapsed seconds of the closed window.
    ///
    /// A clock reading behind the boundary yields zero elapsed time and
    /// leaves the boundary in place, so windows never overlap and never
    /// reach behind a previous redeem.
    pub fn close_reward_window(&mut self, caller: &Pubkey, now: i64) -> Result<i64> {
        require!(
            self.status == StakeStatus::Staked,
            CustomErrorCode::InvalidStakeState
        );
        require_keys_eq!(self.holder, *caller, CustomErrorCode::UnauthorizedHolder);

        let elapsed = now.saturating_sub(self.last_redeem_time).max(0);
        if now > self.last_redeem_time {
            self.last_redeem_time = now;
        }
        Ok(elapsed)
    }

    /// Staked -> Unstaked. The record stays alive for re-staking.
    pub fn mark_unstaked(&mut self, caller: &Pubkey) -> Result<()> {
        require!(
            self.status == StakeStatus::Staked,
            CustomErrorCode::InvalidStakeState
        );
        require_keys_eq!(self.holder, *caller, CustomErrorCode::UnauthorizedHolder);

        self.status = StakeStatus::Unstaked;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staked_record(holder: Pubkey, asset: Pubkey, now: i64) -> StakeRecord {
        let mut record = StakeRecord::default();
        record.mark_staked(holder, asset, 254, now).unwrap();
        record
    }

    #[test]
    fn first_stake_binds_pair_and_opens_window() {
        let holder = Pubkey::new_unique();
        let asset = Pubkey::new_unique();
        let record = staked_record(holder, asset, 42);

        assert_eq!(record.holder, holder);
        assert_eq!(record.asset_token_account, asset);
        assert_eq!(record.status, StakeStatus::Staked);
        assert_eq!(record.stake_start_time, 42);
        assert_eq!(record.last_redeem_time, 42);
    }

    #[test]
    fn stake_while_staked_is_rejected() {
        let holder = Pubkey::new_unique();
        let asset = Pubkey::new_unique();
        let mut record = staked_record(holder, asset, 0);

        let err = record.mark_staked(holder, asset, 254, 10).unwrap_err();
        assert_eq!(err, CustomErrorCode::InvalidStakeState.into());
        // record untouched by the failed transition
        assert_eq!(record.last_redeem_time, 0);
    }

    #[test]
    fn redeem_pays_the_elapsed_window_and_moves_the_boundary() {
        let holder = Pubkey::new_unique();
        let mut record = staked_record(holder, Pubkey::new_unique(), 0);

        let elapsed = record.close_reward_window(&holder, 100).unwrap();
        assert_eq!(elapsed, 100);
        assert_eq!(record.last_redeem_time, 100);
        assert_eq!(record.status, StakeStatus::Staked);
    }

    #[test]
    fn immediate_second_redeem_pays_nothing() {
        let holder = Pubkey::new_unique();
        let mut record = staked_record(holder, Pubkey::new_unique(), 0);

        record.close_reward_window(&holder, 100).unwrap();
        let elapsed = record.close_reward_window(&holder, 100).unwrap();
        assert_eq!(elapsed, 0);
        assert_eq!(record.last_redeem_time, 100);
    }

    #[test]
    fn unstake_settles_the_tail_window() {
        let holder = Pubkey::new_unique();
        let mut record = staked_record(holder, Pubkey::new_unique(), 0);

        record.close_reward_window(&holder, 100).unwrap();
        record.close_reward_window(&holder, 100).unwrap();
        let tail = record.close_reward_window(&holder, 103).unwrap();
        record.mark_unstaked(&holder).unwrap();

        assert_eq!(tail, 3);
        assert_eq!(record.status, StakeStatus::Unstaked);
    }

    #[test]
    fn record_is_reused_across_cycles() {
        let holder = Pubkey::new_unique();
        let asset = Pubkey::new_unique();
        let mut record = staked_record(holder, asset, 0);

        record.close_reward_window(&holder, 50).unwrap();
        record.mark_unstaked(&holder).unwrap();

        record.mark_staked(holder, asset, 254, 200).unwrap();
        assert_eq!(record.status, StakeStatus::Staked);
        assert_eq!(record.stake_start_time, 200);
        // fresh window: nothing carried over from the previous cycle
        let elapsed = record.close_reward_window(&holder, 210).unwrap();
        assert_eq!(elapsed, 10);
    }

    #[test]
    fn reused_record_rejects_a_different_pair() {
        let holder = Pubkey::new_unique();
        let asset = Pubkey::new_unique();
        let mut record = staked_record(holder, asset, 0);
        record.mark_unstaked(&holder).unwrap();

        let err = record
            .mark_staked(Pubkey::new_unique(), asset, 254, 10)
            .unwrap_err();
        assert_eq!(err, CustomErrorCode::UnauthorizedHolder.into());

        let err = record
            .mark_staked(holder, Pubkey::new_unique(), 254, 10)
            .unwrap_err();
        assert_eq!(err, CustomErrorCode::InvalidAssetTokenAccount.into());
        assert_eq!(record.status, StakeStatus::Unstaked);
    }

    #[test]
    fn redeem_and_unstake_require_staked_status() {
        let holder = Pubkey::new_unique();
        let mut record = staked_record(holder, Pubkey::new_unique(), 0);
        record.mark_unstaked(&holder).unwrap();

        let err = record.close_reward_window(&holder, 10).unwrap_err();
        assert_eq!(err, CustomErrorCode::InvalidStakeState.into());

        let err = record.mark_unstaked(&holder).unwrap_err();
        assert_eq!(err, CustomErrorCode::InvalidStakeState.into());
    }

    #[test]
    fn non_holder_cannot_redeem_or_unstake() {
        let holder = Pubkey::new_unique();
        let stranger = Pubkey::new_unique();
        let mut record = staked_record(holder, Pubkey::new_unique(), 0);

        let err = record.close_reward_window(&stranger, 100).unwrap_err();
        assert_eq!(err, CustomErrorCode::UnauthorizedHolder.into());
        assert_eq!(record.last_redeem_time, 0);

        let err = record.mark_unstaked(&stranger).unwrap_err();
        assert_eq!(err, CustomErrorCode::UnauthorizedHolder.into());
        assert_eq!(record.status, StakeStatus::Staked);
    }

    #[test]
    fn clock_behind_the_boundary_is_clamped() {
        let holder = Pubkey::new_unique();
        let mut record = staked_record(holder, Pubkey::new_unique(), 100);

        let elapsed = record.close_reward_window(&holder, 40).unwrap();
        assert_eq!(elapsed, 0);
        // boundary never moves backwards
        assert_eq!(record.last_redeem_time, 100);

        let elapsed = record.close_reward_window(&holder, 160).unwrap();
        assert_eq!(elapsed, 60);
    }

    #[test]
    fn windows_cover_the_stake_span_exactly_once() {
        let holder = Pubkey::new_unique();
        let mut record = staked_record(holder, Pubkey::new_unique(), 7);

        let mut total = 0;
        for now in [19, 19, 300, 301, 1_000] {
            total += record.close_reward_window(&holder, now).unwrap();
        }
        let tail = record.close_reward_window(&holder, 5_000).unwrap();
        record.mark_unstaked(&holder).unwrap();

        assert_eq!(total + tail, 5_000 - 7);
    }
}
