pub mod constants;
pub mod eligibility;
pub mod error;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod notifications;
pub mod state;
pub mod utils;
pub mod views;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("7ChAKLxHej1x7B5KzP9TcpPZCoswR831PVpBGfGkfP6u");

#[program]
pub mod coin_earn {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, operator: Pubkey) -> Result<()> {
        initialize::handler(ctx, operator)
    }

    pub fn update_settings(ctx: Context<UpdateSettings>, update: SettingsUpdate) -> Result<()> {
        update_settings::handler(ctx, update)
    }

    pub fn set_authority(ctx: Context<SetAuthority>, new_authority: Pubkey) -> Result<()> {
        set_authority::handler(ctx, new_authority)
    }

    pub fn register_account(
        ctx: Context<RegisterAccount>,
        user_id: u64,
        profile: ProfileDetails,
    ) -> Result<()> {
        register_account::handler(ctx, user_id, profile)
    }

    pub fn complete_onboarding(ctx: Context<CompleteOnboarding>, user_id: u64) -> Result<()> {
        complete_onboarding::handler(ctx, user_id)
    }

    pub fn record_ad_watch(ctx: Context<RecordAdWatch>, user_id: u64) -> Result<()> {
        record_ad_watch::handler(ctx, user_id)
    }

    pub fn redeem_referral_code(
        ctx: Context<RedeemReferralCode>,
        user_id: u64,
        code: u32,
    ) -> Result<()> {
        redeem_referral_code::handler(ctx, user_id, code)
    }

    pub fn create_withdrawal(
        ctx: Context<CreateWithdrawal>,
        user_id: u64,
        amount: u64,
        method: PayoutMethod,
        details: String,
    ) -> Result<()> {
        create_withdrawal::handler(ctx, user_id, amount, method, details)
    }

    pub fn resolve_withdrawal(
        ctx: Context<ResolveWithdrawal>,
        user_id: u64,
        sequence: u32,
        outcome: WithdrawalStatus,
    ) -> Result<()> {
        resolve_withdrawal::handler(ctx, user_id, sequence, outcome)
    }
}
