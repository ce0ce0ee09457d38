use anchor_lang::prelude::*;

use crate::{
    constants::{SETTINGS_SEED, USER_SEED},
    error::ErrorCode,
    state::{Settings, UserAccount},
};

#[derive(Accounts)]
#[instruction(user_id: u64)]
pub struct CompleteOnboarding<'info> {
    #[account(
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
    pub operator: Signer<'info>,
}

pub fn handler(ctx: Context<CompleteOnboarding>, user_id: u64) -> Result<()> {
    if ctx.accounts.user_account.mark_onboarded() {
        msg!("User {} finished onboarding", user_id);
    }
    Ok(())
}
