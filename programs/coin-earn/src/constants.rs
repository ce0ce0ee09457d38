pub const SETTINGS_SEED: &[u8] = b"settings";
pub const USER_SEED: &[u8] = b"user";
pub const FEED_SEED: &[u8] = b"feed";
pub const WITHDRAWAL_SEED: &[u8] = b"withdrawal";

pub const ACCOUNT_LAYOUT_V1: u8 = 1;

/// Coins credited to every freshly registered account.
pub const WELCOME_BONUS: u64 = 1_000;
/// Flat bonus paid to both sides of a successful referral redemption.
pub const REFERRAL_BONUS: u64 = 500;
/// Lifetime commission on a referred account's ad rewards (1000 bps = 10%).
pub const REFERRAL_COMMISSION_BPS: u64 = 1_000;
pub const BPS_DENOMINATOR: u64 = 10_000;

// Withdrawal gates. Kept here rather than in `Settings` until they need to be tunable.
pub const MIN_REFERRALS_FOR_WITHDRAWAL: u32 = 3;
pub const MIN_ACCOUNT_AGE_SECONDS: i64 = 24 * 60 * 60;

/// First referral code handed out; codes are issued sequentially from here.
pub const FIRST_REFERRAL_CODE: u32 = 1_000;

pub const DEFAULT_AD_REWARD: u64 = 100;
pub const DEFAULT_MIN_WITHDRAWAL: u64 = 5_000;
pub const DEFAULT_NOTICE: &str = "Welcome to CoinEarn! Watch ads and earn real money daily.";
pub const DEFAULT_BANNER_URL: &str = "https://picsum.photos/800/400?grayscale";
pub const DEFAULT_BANNER_LINK: &str = "https://t.me/AdearnX_bot";

pub const NAME_LEN: usize = 32;
pub const NOTICE_LEN: usize = 160;
pub const URL_LEN: usize = 128;
pub const PAYOUT_DETAILS_LEN: usize = 64;
pub const FEED_MESSAGE_LEN: usize = 120;
pub const FEED_CAPACITY: usize = 16;

// Keep reserved bytes at the tail of each account to absorb future schema changes
// without immediate realloc migrations.
pub const SETTINGS_RESERVED_BYTES: usize = 64;
pub const USER_RESERVED_BYTES: usize = 64;
pub const FEED_RESERVED_BYTES: usize = 16;
pub const WITHDRAWAL_RESERVED_BYTES: usize = 32;
