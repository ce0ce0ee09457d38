use anchor_lang::prelude::*;

use crate::{
    constants::{FEED_SEED, SETTINGS_SEED, USER_SEED, WITHDRAWAL_SEED},
    error::ErrorCode,
    events::WithdrawalResolved,
    ledger,
    notifications::Notification,
    state::{Feed, Settings, UserAccount, WithdrawalRequest, WithdrawalStatus},
};

#[derive(Accounts)]
#[instruction(user_id: u64, sequence: u32)]
pub struct ResolveWithdrawal<'info> {
    #[account(
        mut,
        seeds = [SETTINGS_SEED],
        bump = settings.bump,
        constraint = settings.authority == authority.key() @ ErrorCode::Unauthorized
    )]
    pub settings: Box<Account<'info, Settings>>,
    #[account(
        mut,
        seeds = [
            WITHDRAWAL_SEED,
            user_id.to_le_bytes().as_ref(),
            sequence.to_le_bytes().as_ref()
        ],
        bump = withdrawal.bump
    )]
    pub withdrawal: Box<Account<'info, WithdrawalRequest>>,
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
    pub authority: Signer<'info>,
}

pub fn handler(
    ctx: Context<ResolveWithdrawal>,
    user_id: u64,
    sequence: u32,
    outcome: WithdrawalStatus,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let accounts = &mut *ctx.accounts;

    ledger::settle_withdrawal(
        &mut accounts.settings,
        &mut accounts.withdrawal,
        &mut accounts.user_account,
        outcome,
        now,
    )?;

    let amount = accounts.withdrawal.amount;
    let notification = match outcome {
        WithdrawalStatus::Completed => Notification::WithdrawalCompleted { amount },
        _ => Notification::WithdrawalRefunded { amount },
    };
    accounts.feed.notify(&notification, now);

    emit!(WithdrawalResolved {
        user_id,
        sequence,
        amount,
        status: outcome,
        timestamp: now,
    });
    msg!(
        "Withdrawal #{} of user {} resolved as {:?}",
        sequence,
        user_id,
        outcome
    );
    Ok(())
}
