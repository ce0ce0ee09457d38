//! Balance-mutating rules. Handlers load and store accounts; everything that decides
//! how many coins move, and whether they may, lives here so it runs without a validator.
//!
//! Every function validates before it writes, so a rejected call leaves its inputs
//! untouched even outside a transaction.

use anchor_lang::prelude::*;

use crate::{
    constants::{
        ACCOUNT_LAYOUT_V1, NAME_LEN, PAYOUT_DETAILS_LEN, REFERRAL_BONUS, USER_RESERVED_BYTES,
        WELCOME_BONUS, WITHDRAWAL_RESERVED_BYTES,
    },
    eligibility::WithdrawalEligibility,
    error::ErrorCode,
    state::{
        PayoutMethod, ProfileDetails, Settings, UserAccount, WithdrawalRequest, WithdrawalStatus,
    },
    utils::{pack_text, referral_commission},
};

/// Builds a freshly registered account and books its welcome bonus.
pub fn open_account(
    settings: &mut Settings,
    bump: u8,
    user_id: u64,
    profile: &ProfileDetails,
    now: i64,
) -> Result<UserAccount> {
    let first_name = pack_text::<NAME_LEN>(&profile.first_name)?;
    let last_name = pack_text::<NAME_LEN>(&profile.last_name)?;
    let username = pack_text::<NAME_LEN>(&profile.username)?;
    let referral_code = settings.record_registration(WELCOME_BONUS)?;

    Ok(UserAccount {
        bump,
        layout_version: ACCOUNT_LAYOUT_V1,
        user_id,
        referral_code,
        balance: WELCOME_BONUS,
        total_ads_watched: 0,
        referral_count: 0,
        created_at: now,
        has_seen_onboarding: false,
        has_redeemed_code: false,
        withdrawal_count: 0,
        first_name,
        last_name,
        username,
        referred_by: None,
        reserved: [0; USER_RESERVED_BYTES],
    })
}

/// Registers `account` unless it already is. Returns whether a new account was opened;
/// an existing one is left exactly as it was.
pub fn register(
    settings: &mut Settings,
    account: &mut UserAccount,
    bump: u8,
    user_id: u64,
    profile: &ProfileDetails,
    now: i64,
) -> Result<bool> {
    if account.is_registered() {
        return Ok(false);
    }
    *account = open_account(settings, bump, user_id, profile, now)?;
    Ok(true)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdWatchOutcome {
    pub reward: u64,
    pub commission: u64,
}

/// Credits one ad view at the configured reward and pays the referrer's commission.
///
/// `referrer` must be exactly the account named by `user.referred_by`: required when
/// the user was referred, refused when not.
pub fn apply_ad_watch(
    settings: &mut Settings,
    user: &mut UserAccount,
    referrer: Option<&mut UserAccount>,
) -> Result<AdWatchOutcome> {
    let reward = settings.ad_reward;
    require!(reward > 0, ErrorCode::InvalidRewardAmount);

    let referrer = match (user.referred_by, referrer) {
        (Some(referrer_id), Some(referrer)) => {
            require!(referrer.user_id == referrer_id, ErrorCode::InvalidReferrer);
            Some(referrer)
        }
        (Some(_), None) => return err!(ErrorCode::MissingReferrer),
        (None, Some(_)) => return err!(ErrorCode::InvalidReferrer),
        (None, None) => None,
    };

    let commission = match referrer {
        Some(_) => referral_commission(reward)?,
        None => 0,
    };
    let balance = user
        .balance
        .checked_add(reward)
        .ok_or(ErrorCode::MathOverflow)?;
    let total_ads_watched = user
        .total_ads_watched
        .checked_add(1)
        .ok_or(ErrorCode::MathOverflow)?;
    let issued = reward
        .checked_add(commission)
        .ok_or(ErrorCode::MathOverflow)?;
    let referrer_balance = match &referrer {
        Some(referrer) => Some(
            referrer
                .balance
                .checked_add(commission)
                .ok_or(ErrorCode::MathOverflow)?,
        ),
        None => None,
    };

    settings.record_issued(issued)?;
    if let (Some(referrer), Some(referrer_balance)) = (referrer, referrer_balance) {
        referrer.balance = referrer_balance;
    }
    user.balance = balance;
    user.total_ads_watched = total_ads_watched;

    Ok(AdWatchOutcome { reward, commission })
}

/// Links `user` to the owner of `code` and pays both sides the referral bonus.
/// One-time per account.
pub fn apply_referral(
    settings: &mut Settings,
    user: &mut UserAccount,
    referrer: &mut UserAccount,
    code: u32,
) -> Result<()> {
    require!(
        !user.has_redeemed_code && user.referred_by.is_none(),
        ErrorCode::AlreadyRedeemed
    );
    require!(
        code != user.referral_code && referrer.user_id != user.user_id,
        ErrorCode::SelfReferral
    );
    require!(referrer.referral_code == code, ErrorCode::InvalidReferralCode);

    let user_balance = user
        .balance
        .checked_add(REFERRAL_BONUS)
        .ok_or(ErrorCode::MathOverflow)?;
    let referrer_balance = referrer
        .balance
        .checked_add(REFERRAL_BONUS)
        .ok_or(ErrorCode::MathOverflow)?;
    let referral_count = referrer
        .referral_count
        .checked_add(1)
        .ok_or(ErrorCode::MathOverflow)?;
    let issued = REFERRAL_BONUS
        .checked_mul(2)
        .ok_or(ErrorCode::MathOverflow)?;

    settings.record_issued(issued)?;
    referrer.balance = referrer_balance;
    referrer.referral_count = referral_count;
    user.balance = user_balance;
    user.referred_by = Some(referrer.user_id);
    user.has_redeemed_code = true;

    Ok(())
}

/// Opens a pending withdrawal and moves `amount` out of the spendable balance.
pub fn open_withdrawal(
    settings: &mut Settings,
    user: &mut UserAccount,
    bump: u8,
    amount: u64,
    method: PayoutMethod,
    details: &str,
    now: i64,
) -> Result<WithdrawalRequest> {
    WithdrawalEligibility::evaluate(user, settings, now).require()?;
    require!(
        amount >= settings.min_withdrawal,
        ErrorCode::BelowMinimumWithdrawal
    );
    let balance = user
        .balance
        .checked_sub(amount)
        .ok_or(ErrorCode::InsufficientBalance)?;
    let details = details.trim();
    require!(!details.is_empty(), ErrorCode::MissingPayoutDetails);
    let details = pack_text::<PAYOUT_DETAILS_LEN>(details)?;

    let sequence = user.withdrawal_count;
    let withdrawal_count = sequence.checked_add(1).ok_or(ErrorCode::MathOverflow)?;

    settings.record_escrowed(amount)?;
    user.balance = balance;
    user.withdrawal_count = withdrawal_count;

    Ok(WithdrawalRequest {
        bump,
        layout_version: ACCOUNT_LAYOUT_V1,
        user_id: user.user_id,
        sequence,
        amount,
        method,
        details,
        status: WithdrawalStatus::Pending,
        created_at: now,
        resolved_at: 0,
        reserved: [0; WITHDRAWAL_RESERVED_BYTES],
    })
}

/// Moves a pending request to its terminal status, refunding the escrow on rejection.
pub fn settle_withdrawal(
    settings: &mut Settings,
    request: &mut WithdrawalRequest,
    owner: &mut UserAccount,
    outcome: WithdrawalStatus,
    now: i64,
) -> Result<()> {
    require!(outcome.is_terminal(), ErrorCode::InvalidResolution);
    require!(
        request.status == WithdrawalStatus::Pending,
        ErrorCode::WithdrawalAlreadyResolved
    );
    require!(request.user_id == owner.user_id, ErrorCode::Unauthorized);

    let paid_out = outcome == WithdrawalStatus::Completed;
    let owner_balance = if paid_out {
        owner.balance
    } else {
        owner
            .balance
            .checked_add(request.amount)
            .ok_or(ErrorCode::MathOverflow)?
    };

    settings.record_released(request.amount, paid_out)?;
    owner.balance = owner_balance;
    request.status = outcome;
    request.resolved_at = now;

    Ok(())
}
