use anchor_lang::prelude::*;

use crate::{
    constants::{MIN_ACCOUNT_AGE_SECONDS, MIN_REFERRALS_FOR_WITHDRAWAL},
    error::ErrorCode,
    state::{Settings, UserAccount},
};

/// The three independent withdrawal gates. Shared by the client, to disable the
/// submit button, and by `create_withdrawal`, which re-checks them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WithdrawalEligibility {
    pub has_min_balance: bool,
    pub has_min_referrals: bool,
    pub is_old_enough: bool,
}

impl WithdrawalEligibility {
    pub fn evaluate(account: &UserAccount, settings: &Settings, now: i64) -> Self {
        Self {
            has_min_balance: account.balance >= settings.min_withdrawal,
            has_min_referrals: account.referral_count >= MIN_REFERRALS_FOR_WITHDRAWAL,
            is_old_enough: now.saturating_sub(account.created_at) >= MIN_ACCOUNT_AGE_SECONDS,
        }
    }

    pub fn is_eligible(&self) -> bool {
        self.has_min_balance && self.has_min_referrals && self.is_old_enough
    }

    pub fn require(&self) -> Result<()> {
        require!(self.has_min_balance, ErrorCode::InsufficientBalance);
        require!(self.has_min_referrals, ErrorCode::NotEnoughReferrals);
        require!(self.is_old_enough, ErrorCode::AccountTooNew);
        Ok(())
    }
}

pub fn can_withdraw(account: &UserAccount, settings: &Settings, now: i64) -> bool {
    WithdrawalEligibility::evaluate(account, settings, now).is_eligible()
}
