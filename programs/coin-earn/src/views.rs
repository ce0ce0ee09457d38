//! Read-side helpers for clients: store query offsets and degraded-mode fallbacks.

use anchor_lang::prelude::*;

use crate::{
    constants::{NAME_LEN, PAYOUT_DETAILS_LEN, USER_RESERVED_BYTES},
    state::{ProfileDetails, Settings, UserAccount},
    utils::pack_text_lossy,
};

// `getProgramAccounts` memcmp offsets, discriminator included.
pub const REFERRAL_CODE_OFFSET: usize = 8 + 1 + 1 + 8;
pub const REFERRED_BY_OFFSET: usize =
    REFERRAL_CODE_OFFSET + 4 + 8 + 8 + 4 + 8 + 1 + 1 + 4 + NAME_LEN * 3;
pub const WITHDRAWAL_USER_ID_OFFSET: usize = 8 + 1 + 1;
pub const WITHDRAWAL_STATUS_OFFSET: usize =
    WITHDRAWAL_USER_ID_OFFSET + 8 + 4 + 8 + 1 + PAYOUT_DETAILS_LEN;

/// Bytes to match at `REFERRED_BY_OFFSET` when listing the accounts a user referred.
pub fn referred_by_filter(referrer_id: u64) -> [u8; 9] {
    let mut bytes = [1u8; 9];
    bytes[1..].copy_from_slice(&referrer_id.to_le_bytes());
    bytes
}

/// Settings as the client should use them: the stored record, or the built-in
/// defaults when none could be read.
pub fn settings_or_default(stored: Option<Settings>) -> Settings {
    stored.unwrap_or_else(|| Settings::with_defaults(0, Pubkey::default(), Pubkey::default()))
}

/// What a client shows for the current user. A placeholder is only for rendering
/// while the store is unreachable and must never be written back or trusted.
#[derive(Clone)]
pub enum AccountSnapshot {
    Persisted(UserAccount),
    Placeholder(UserAccount),
}

impl AccountSnapshot {
    pub fn placeholder(user_id: u64, profile: &ProfileDetails, now: i64) -> Self {
        let first_name = if profile.first_name.is_empty() {
            "Guest"
        } else {
            profile.first_name.as_str()
        };
        let username = if profile.username.is_empty() {
            "guest"
        } else {
            profile.username.as_str()
        };
        AccountSnapshot::Placeholder(UserAccount {
            bump: 0,
            // Zero layout keeps `is_registered()` false.
            layout_version: 0,
            user_id,
            referral_code: 0,
            balance: 0,
            total_ads_watched: 0,
            referral_count: 0,
            created_at: now,
            has_seen_onboarding: false,
            has_redeemed_code: false,
            withdrawal_count: 0,
            first_name: pack_text_lossy::<NAME_LEN>(first_name).0,
            last_name: pack_text_lossy::<NAME_LEN>(&profile.last_name).0,
            username: pack_text_lossy::<NAME_LEN>(username).0,
            referred_by: None,
            reserved: [0; USER_RESERVED_BYTES],
        })
    }

    pub fn account(&self) -> &UserAccount {
        match self {
            AccountSnapshot::Persisted(account) | AccountSnapshot::Placeholder(account) => account,
        }
    }

    pub fn is_durable(&self) -> bool {
        matches!(self, AccountSnapshot::Persisted(_))
    }

    /// The persisted record, if this is one.
    pub fn into_persisted(self) -> Option<UserAccount> {
        match self {
            AccountSnapshot::Persisted(account) => Some(account),
            AccountSnapshot::Placeholder(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constants::DEFAULT_NOTICE,
        ledger,
        state::{PayoutMethod, WithdrawalStatus},
    };

    const T0: i64 = 1_700_000_000;

    fn settings() -> Settings {
        Settings::with_defaults(255, Pubkey::new_from_array([1; 32]), Pubkey::new_from_array([2; 32]))
    }

    #[test]
    fn user_offsets_match_layout() {
        let mut s = settings();
        let mut account =
            ledger::open_account(&mut s, 254, 5, &ProfileDetails::default(), T0).unwrap();
        account.referral_code = 0xA1B2_C3D4;
        account.referred_by = Some(77);

        let mut buf = Vec::new();
        account.try_serialize(&mut buf).unwrap();

        assert_eq!(
            &buf[REFERRAL_CODE_OFFSET..REFERRAL_CODE_OFFSET + 4],
            &0xA1B2_C3D4u32.to_le_bytes()
        );
        assert_eq!(&buf[REFERRED_BY_OFFSET..REFERRED_BY_OFFSET + 9], &referred_by_filter(77));
    }

    #[test]
    fn withdrawal_offsets_match_layout() {
        let mut s = settings();
        s.min_withdrawal = 100;
        let mut account =
            ledger::open_account(&mut s, 254, 0xDEAD_BEEF, &ProfileDetails::default(), T0).unwrap();
        account.referral_count = 3;
        let request = ledger::open_withdrawal(
            &mut s,
            &mut account,
            1,
            500,
            PayoutMethod::Nagad,
            "01800000000",
            T0 + crate::constants::MIN_ACCOUNT_AGE_SECONDS,
        )
        .unwrap();

        let mut buf = Vec::new();
        request.try_serialize(&mut buf).unwrap();
        assert_eq!(
            &buf[WITHDRAWAL_USER_ID_OFFSET..WITHDRAWAL_USER_ID_OFFSET + 8],
            &0xDEAD_BEEFu64.to_le_bytes()
        );
        assert_eq!(buf[WITHDRAWAL_STATUS_OFFSET], WithdrawalStatus::Pending as u8);
        assert_eq!(buf.len(), crate::state::WithdrawalRequest::SPACE);
    }

    #[test]
    fn missing_settings_fall_back_to_defaults() {
        let s = settings_or_default(None);
        assert_eq!(s.ad_reward, 100);
        assert_eq!(s.min_withdrawal, 5_000);
        assert_eq!(s.notice(), DEFAULT_NOTICE);

        let mut stored = settings();
        stored.ad_reward = 42;
        assert_eq!(settings_or_default(Some(stored)).ad_reward, 42);
    }

    #[test]
    fn placeholder_is_never_durable() {
        let snapshot = AccountSnapshot::placeholder(9, &ProfileDetails::default(), T0);
        assert!(!snapshot.is_durable());
        assert_eq!(snapshot.account().balance, 0);
        assert!(!snapshot.account().is_registered());
        assert_eq!(snapshot.account().first_name(), "Guest");
        assert_eq!(snapshot.account().username(), "guest");
        assert!(snapshot.into_persisted().is_none());

        let mut s = settings();
        let account = ledger::open_account(&mut s, 254, 9, &ProfileDetails::default(), T0).unwrap();
        let snapshot = AccountSnapshot::Persisted(account);
        assert!(snapshot.is_durable());
        assert_eq!(snapshot.into_persisted().unwrap().balance, 1_000);
    }
}
