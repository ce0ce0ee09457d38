pub mod complete_onboarding;
pub mod create_withdrawal;
pub mod initialize;
pub mod record_ad_watch;
pub mod redeem_referral_code;
pub mod register_account;
pub mod resolve_withdrawal;
pub mod set_authority;
pub mod update_settings;

pub use complete_onboarding::*;
pub use create_withdrawal::*;
pub use initialize::*;
pub use record_ad_watch::*;
pub use redeem_referral_code::*;
pub use register_account::*;
pub use resolve_withdrawal::*;
pub use set_authority::*;
pub use update_settings::*;
