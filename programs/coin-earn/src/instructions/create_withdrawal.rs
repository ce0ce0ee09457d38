use anchor_lang::prelude::*;

use crate::{
    constants::{FEED_SEED, SETTINGS_SEED, USER_SEED, WITHDRAWAL_SEED},
    error::ErrorCode,
    events::WithdrawalRequested,
    ledger,
    notifications::Notification,
    state::{Feed, PayoutMethod, Settings, UserAccount, WithdrawalRequest},
};

#[derive(Accounts)]
#[instruction(user_id: u64)]
pub struct CreateWithdrawal<'info> {
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
        init,
        payer = operator,
        space = WithdrawalRequest::SPACE,
        seeds = [
            WITHDRAWAL_SEED,
            user_id.to_le_bytes().as_ref(),
            user_account.withdrawal_count.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub withdrawal: Box<Account<'info, WithdrawalRequest>>,
    #[account(mut)]
    pub operator: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreateWithdrawal>,
    user_id: u64,
    amount: u64,
    method: PayoutMethod,
    details: String,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let accounts = &mut *ctx.accounts;

    let request = ledger::open_withdrawal(
        &mut accounts.settings,
        &mut accounts.user_account,
        ctx.bumps.withdrawal,
        amount,
        method,
        &details,
        now,
    )?;
    let sequence = request.sequence;
    accounts.withdrawal.set_inner(request);

    accounts
        .feed
        .notify(&Notification::WithdrawalPending { amount, method }, now);

    emit!(WithdrawalRequested {
        user_id,
        sequence,
        amount,
        method,
        timestamp: now,
    });
    msg!(
        "User {} requested withdrawal #{}: {} coins via {}",
        user_id,
        sequence,
        amount,
        method.label()
    );
    Ok(())
}
