use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Referral code already used")]
    AlreadyRedeemed,
    #[msg("You cannot use your own referral code")]
    SelfReferral,
    #[msg("Invalid referral code")]
    InvalidReferralCode,
    #[msg("Referrer account is required for this account")]
    MissingReferrer,
    #[msg("Referrer account does not match")]
    InvalidReferrer,
    #[msg("Ad reward must be positive")]
    InvalidRewardAmount,
    #[msg("Amount is below the minimum withdrawal")]
    BelowMinimumWithdrawal,
    #[msg("Insufficient balance")]
    InsufficientBalance,
    #[msg("At least 3 successful referrals are required to withdraw")]
    NotEnoughReferrals,
    #[msg("Account must be at least 24 hours old to withdraw")]
    AccountTooNew,
    #[msg("Please enter payment details")]
    MissingPayoutDetails,
    #[msg("Text is too long")]
    TextTooLong,
    #[msg("Withdrawal outcome must be completed or rejected")]
    InvalidResolution,
    #[msg("Withdrawal has already been resolved")]
    WithdrawalAlreadyResolved,
    #[msg("Math overflow")]
    MathOverflow,
}

impl ErrorCode {
    /// Rejections caused by what the user asked for. These never mutate state and are
    /// shown to the user as-is. Everything else points at the operator, the admin or
    /// the ledger itself.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::AlreadyRedeemed
                | ErrorCode::SelfReferral
                | ErrorCode::InvalidReferralCode
                | ErrorCode::BelowMinimumWithdrawal
                | ErrorCode::InsufficientBalance
                | ErrorCode::NotEnoughReferrals
                | ErrorCode::AccountTooNew
                | ErrorCode::MissingPayoutDetails
                | ErrorCode::TextTooLong
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_errors_exclude_integration_faults() {
        assert!(ErrorCode::InsufficientBalance.is_user_error());
        assert!(ErrorCode::AlreadyRedeemed.is_user_error());
        assert!(ErrorCode::AccountTooNew.is_user_error());

        assert!(!ErrorCode::Unauthorized.is_user_error());
        assert!(!ErrorCode::MissingReferrer.is_user_error());
        assert!(!ErrorCode::InvalidReferrer.is_user_error());
        assert!(!ErrorCode::InvalidRewardAmount.is_user_error());
        assert!(!ErrorCode::WithdrawalAlreadyResolved.is_user_error());
        assert!(!ErrorCode::MathOverflow.is_user_error());
    }
}
