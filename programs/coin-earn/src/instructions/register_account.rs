use anchor_lang::prelude::*;

use crate::{
    constants::{FEED_SEED, SETTINGS_SEED, USER_SEED},
    error::ErrorCode,
    events::AccountRegistered,
    ledger,
    notifications::Notification,
    state::{Feed, ProfileDetails, Settings, UserAccount},
};

#[derive(Accounts)]
#[instruction(user_id: u64)]
pub struct RegisterAccount<'info> {
    #[account(
        mut,
        seeds = [SETTINGS_SEED],
        bump = settings.bump,
        constraint = settings.operator == operator.key() @ ErrorCode::Unauthorized
    )]
    pub settings: Box<Account<'info, Settings>>,
    #[account(
        init_if_needed,
        payer = operator,
        space = UserAccount::SPACE,
        seeds = [USER_SEED, user_id.to_le_bytes().as_ref()],
        bump
    )]
    pub user_account: Box<Account<'info, UserAccount>>,
    #[account(
        init_if_needed,
        payer = operator,
        space = Feed::SPACE,
        seeds = [FEED_SEED, user_id.to_le_bytes().as_ref()],
        bump
    )]
    pub feed: Box<Account<'info, Feed>>,
    #[account(mut)]
    pub operator: Signer<'info>,
    pub system_program: Program<'info, System>,
}

/// Safe to call on every app launch: an existing account is returned untouched.
pub fn handler(ctx: Context<RegisterAccount>, user_id: u64, profile: ProfileDetails) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let accounts = &mut *ctx.accounts;
    let created = ledger::register(
        &mut accounts.settings,
        &mut accounts.user_account,
        ctx.bumps.user_account,
        user_id,
        &profile,
        now,
    )?;
    if !created {
        msg!("User {} already registered", user_id);
        return Ok(());
    }
    let referral_code = accounts.user_account.referral_code;
    let welcome_bonus = accounts.user_account.balance;

    let feed = &mut accounts.feed;
    feed.initialize(ctx.bumps.feed, user_id);
    for notification in Notification::onboarding(welcome_bonus) {
        feed.notify(&notification, now);
    }

    emit!(AccountRegistered {
        user_id,
        referral_code,
        welcome_bonus,
        timestamp: now,
    });
    msg!("User {} registered with referral code {}", user_id, referral_code);
    Ok(())
}
