use anchor_lang::prelude::*;

use crate::{
    constants::SETTINGS_SEED,
    error::ErrorCode,
    events::SettingsUpdated,
    state::{Settings, SettingsUpdate},
};

#[derive(Accounts)]
pub struct UpdateSettings<'info> {
    #[account(
        mut,
        seeds = [SETTINGS_SEED],
        bump = settings.bump,
        constraint = settings.authority == authority.key() @ ErrorCode::Unauthorized
    )]
    pub settings: Box<Account<'info, Settings>>,
    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<UpdateSettings>, update: SettingsUpdate) -> Result<()> {
    let settings = &mut ctx.accounts.settings;
    settings.apply(&update)?;

    emit!(SettingsUpdated {
        authority: settings.authority,
        ad_reward: settings.ad_reward,
        min_withdrawal: settings.min_withdrawal,
        operator: settings.operator,
        timestamp: Clock::get()?.unix_timestamp,
    });
    msg!(
        "Settings updated: ad_reward {} min_withdrawal {}",
        settings.ad_reward,
        settings.min_withdrawal
    );
    Ok(())
}
