use anchor_lang::prelude::*;

use crate::{constants::SETTINGS_SEED, state::Settings};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = authority,
        space = Settings::SPACE,
        seeds = [SETTINGS_SEED],
        bump
    )]
    pub settings: Box<Account<'info, Settings>>,
    #[account(mut)]
    pub authority: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>, operator: Pubkey) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let settings = &mut ctx.accounts.settings;
    settings.set_inner(Settings::with_defaults(
        ctx.bumps.settings,
        authority,
        operator,
    ));

    msg!("Settings initialized: authority {} operator {}", authority, operator);
    Ok(())
}
