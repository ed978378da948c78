use crate::error::CustomErrorCode;
use anchor_lang::prelude::*;

/// Reward owed for one closed accrual window.
///
/// Integer arithmetic only: the result must be bit-identical across
/// independent re-executions of the same transaction. Overflow is a hard
/// error, never a wrap. `max_per_redeem == 0` means uncapped.
pub fn accrued_reward(reward_rate: u64, elapsed_seconds: i64, max_per_redeem: u64) -> Result<u64> {
    if elapsed_seconds <= 0 {
        return Ok(0);
    }

    let reward = reward_rate
        .checked_mul(elapsed_seconds as u64)
        .ok_or(CustomErrorCode::RewardOverflow)?;

    if max_per_redeem > 0 {
        Ok(reward.min(max_per_redeem))
    } else {
        Ok(reward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reward_is_linear_in_elapsed_time() {
        assert_eq!(accrued_reward(1, 100, 0).unwrap(), 100);
        assert_eq!(accrued_reward(1_000_000, 3, 0).unwrap(), 3_000_000);
    }

    #[test]
    fn zero_and_negative_elapsed_pay_nothing() {
        assert_eq!(accrued_reward(1_000_000, 0, 0).unwrap(), 0);
        assert_eq!(accrued_reward(1_000_000, -50, 0).unwrap(), 0);
    }

    #[test]
    fn reward_is_monotone_in_elapsed_time() {
        let mut previous = 0;
        for elapsed in [0, 1, 2, 60, 3_600, 86_400] {
            let reward = accrued_reward(250, elapsed, 0).unwrap();
            assert!(reward >= previous);
            previous = reward;
        }
    }

    #[test]
    fn cap_bounds_a_single_redeem() {
        assert_eq!(accrued_reward(1_000, 10, 500).unwrap(), 500);
        assert_eq!(accrued_reward(1_000, 10, 10_000).unwrap(), 10_000);
        // exactly at the cap
        assert_eq!(accrued_reward(1_000, 10, 10_001).unwrap(), 10_000);
    }

    #[test]
    fn overflow_is_an_error_not_a_wrap() {
        let err = accrued_reward(u64::MAX, 2, 0).unwrap_err();
        assert_eq!(err, CustomErrorCode::RewardOverflow.into());
    }
}
