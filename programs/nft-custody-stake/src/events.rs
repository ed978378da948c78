use anchor_lang::prelude::*;

#[event]
pub struct AssetStaked {
    pub holder: Pubkey,
    pub asset_token_account: Pubkey,
    pub asset_mint: Pubkey,
    pub start_time: i64,
}

#[event]
pub struct RewardsRedeemed {
    pub holder: Pubkey,
    pub asset_token_account: Pubkey,
    pub amount: u64,
    pub mint: Pubkey,
}

#[event]
pub struct AssetUnstaked {
    pub holder: Pubkey,
    pub asset_token_account: Pubkey,
    pub final_reward: u64,
    pub mint: Pubkey,
}

#[event]
pub struct RewardConfigUpdated {
    pub admin: Pubkey,
    pub old_rate: u64,
    pub new_rate: u64,
    pub max_reward_per_redeem: u64,
    pub mint: Pubkey,
}
