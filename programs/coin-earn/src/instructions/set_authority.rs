use anchor_lang::prelude::*;

use crate::{constants::SETTINGS_SEED, error::ErrorCode, state::Settings};

#[derive(Accounts)]
pub struct SetAuthority<'info> {
    #[account(
        mut,
        seeds = [SETTINGS_SEED],
        bump = settings.bump,
        constraint = settings.authority == authority.key() @ ErrorCode::Unauthorized
    )]
    pub settings: Box<Account<'info, Settings>>,
    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<SetAuthority>, new_authority: Pubkey) -> Result<()> {
    ctx.accounts.settings.authority = new_authority;
    msg!("Authority set to {}", new_authority);
    Ok(())
}
