use anchor_lang::prelude::*;

use crate::{
    constants::{FEED_SEED, REFERRAL_BONUS, SETTINGS_SEED, USER_SEED},
    error::ErrorCode,
    events::ReferralRedeemed,
    ledger,
    notifications::Notification,
    state::{Feed, Settings, UserAccount},
};

/// The client resolves `code` to `referrer_account` with a memcmp query on
/// `referral_code`; the handler re-checks the match.
#[derive(Accounts)]
#[instruction(user_id: u64)]
pub struct RedeemReferralCode<'info> {
    #[account(
        mut,
        seeds = [SETTINGS_SEED],
        bump = settings.bump,
        constraint = settings.operator == operator.key() @ ErrorCode::Unauthorized
    )]
    pub settings: Box<Account<'info, Settings>>,
    #[account(
        mut,
        seeds = [USER_SEED, user_id.to_le_bytes().as_ref()],
        bump = user_account.bump
    )]
    pub user_account: Box<Account<'info, UserAccount>>,
    #[account(
        mut,
        seeds = [FEED_SEED, user_id.to_le_bytes().as_ref()],
        bump = feed.bump
    )]
    pub feed: Box<Account<'info, Feed>>,
    #[account(
        mut,
        seeds = [USER_SEED, referrer_account.user_id.to_le_bytes().as_ref()],
        bump = referrer_account.bump
    )]
    pub referrer_account: Box<Account<'info, UserAccount>>,
    #[account(
        mut,
        seeds = [FEED_SEED, referrer_account.user_id.to_le_bytes().as_ref()],
        bump = referrer_feed.bump
    )]
    pub referrer_feed: Box<Account<'info, Feed>>,
    pub operator: Signer<'info>,
}

pub fn handler(ctx: Context<RedeemReferralCode>, user_id: u64, code: u32) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let accounts = &mut *ctx.accounts;

    ledger::apply_referral(
        &mut accounts.settings,
        &mut accounts.user_account,
        &mut accounts.referrer_account,
        code,
    )?;

    accounts.feed.notify(
        &Notification::ReferralRedeemed {
            bonus: REFERRAL_BONUS,
            referrer_code: code,
        },
        now,
    );
    accounts.referrer_feed.notify(
        &Notification::ReferralJoined {
            bonus: REFERRAL_BONUS,
        },
        now,
    );

    let referrer = accounts.referrer_account.user_id;
    emit!(ReferralRedeemed {
        user_id,
        referrer,
        referral_code: code,
        bonus: REFERRAL_BONUS,
        timestamp: now,
    });
    msg!("User {} redeemed code {} from {}", user_id, code, referrer);
    Ok(())
}
