use anchor_lang::prelude::*;

use crate::state::{PayoutMethod, WithdrawalStatus};

#[event]
pub struct AccountRegistered {
    pub user_id: u64,
    pub referral_code: u32,
    pub welcome_bonus: u64,
    pub timestamp: i64,
}

#[event]
pub struct AdWatched {
    pub user_id: u64,
    pub reward: u64,
    /// Referrer credited with the commission, if any.
    pub referrer: Option<u64>,
    pub commission: u64,
    pub balance: u64,
    pub timestamp: i64,
}

#[event]
pub struct ReferralRedeemed {
    pub user_id: u64,
    pub referrer: u64,
    pub referral_code: u32,
    pub bonus: u64,
    pub timestamp: i64,
}

#[event]
pub struct WithdrawalRequested {
    pub user_id: u64,
    pub sequence: u32,
    pub amount: u64,
    pub method: PayoutMethod,
    pub timestamp: i64,
}

#[event]
pub struct WithdrawalResolved {
    pub user_id: u64,
    pub sequence: u32,
    pub amount: u64,
    pub status: WithdrawalStatus,
    pub timestamp: i64,
}

#[event]
pub struct SettingsUpdated {
    pub authority: Pubkey,
    pub ad_reward: u64,
    pub min_withdrawal: u64,
    pub operator: Pubkey,
    pub timestamp: i64,
}
