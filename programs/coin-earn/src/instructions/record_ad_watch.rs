use anchor_lang::prelude::*;

use crate::{
    constants::{FEED_SEED, SETTINGS_SEED, USER_SEED},
    error::ErrorCode,
    events::AdWatched,
    ledger,
    notifications::Notification,
    state::{Feed, Settings, UserAccount},
};

#[derive(Accounts)]
#[instruction(user_id: u64)]
pub struct RecordAdWatch<'info> {
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
    /// Must be the account in `user_account.referred_by`, and absent otherwise.
    #[account(mut)]
    pub referrer_account: Option<Box<Account<'info, UserAccount>>>,
    pub operator: Signer<'info>,
}

pub fn handler(ctx: Context<RecordAdWatch>, user_id: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let accounts = &mut *ctx.accounts;
    let referrer = accounts
        .referrer_account
        .as_deref_mut()
        .map(|account| &mut **account);

    let outcome = ledger::apply_ad_watch(
        &mut accounts.settings,
        &mut accounts.user_account,
        referrer,
    )?;

    accounts.feed.notify(
        &Notification::AdReward {
            amount: outcome.reward,
        },
        now,
    );

    let user_account = &accounts.user_account;
    emit!(AdWatched {
        user_id,
        reward: outcome.reward,
        referrer: user_account.referred_by,
        commission: outcome.commission,
        balance: user_account.balance,
        timestamp: now,
    });
    msg!(
        "User {} watched ad #{}: +{} coins, commission {}",
        user_id,
        user_account.total_ads_watched,
        outcome.reward,
        outcome.commission
    );
    Ok(())
}
