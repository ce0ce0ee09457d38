use anchor_lang::prelude::*;

use crate::{
    constants::{NAME_LEN, USER_RESERVED_BYTES},
    utils::unpack_text,
};

#[account]
#[derive(Debug)]
pub struct UserAccount {
    pub bump: u8,
    pub layout_version: u8,
    pub user_id: u64,
    pub referral_code: u32,
    pub balance: u64,
    pub total_ads_watched: u64,
    pub referral_count: u32,
    pub created_at: i64,
    pub has_seen_onboarding: bool,
    pub has_redeemed_code: bool,
    pub withdrawal_count: u32,
    pub first_name: [u8; NAME_LEN],
    pub last_name: [u8; NAME_LEN],
    pub username: [u8; NAME_LEN],
    // Variable-length fields go after everything that is queried by offset.
    pub referred_by: Option<u64>,
    pub reserved: [u8; USER_RESERVED_BYTES],
}

impl UserAccount {
    pub const SPACE: usize = 8
        + 1
        + 1
        + 8
        + 4
        + 8
        + 8
        + 4
        + 8
        + 1
        + 1
        + 4
        + NAME_LEN * 3
        + (1 + 8)
        + USER_RESERVED_BYTES;

    /// `init_if_needed` hands back a zeroed account on first use.
    pub fn is_registered(&self) -> bool {
        self.layout_version != 0
    }

    pub fn first_name(&self) -> &str {
        unpack_text(&self.first_name)
    }

    pub fn last_name(&self) -> &str {
        unpack_text(&self.last_name)
    }

    pub fn username(&self) -> &str {
        unpack_text(&self.username)
    }

    /// Returns `false` if the tutorial was already marked as seen.
    pub fn mark_onboarded(&mut self) -> bool {
        if self.has_seen_onboarding {
            return false;
        }
        self.has_seen_onboarding = true;
        true
    }
}

/// Display fields reported by the client on first launch.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileDetails {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zeroed() -> UserAccount {
        let zeroes = vec![0u8; UserAccount::SPACE];
        UserAccount::deserialize(&mut &zeroes[..]).unwrap()
    }

    #[test]
    fn zeroed_account_is_not_registered() {
        let account = zeroed();
        assert!(!account.is_registered());
        assert_eq!(account.referred_by, None);
        assert_eq!(account.username(), "");
    }

    #[test]
    fn onboarding_is_marked_once() {
        let mut account = zeroed();
        account.layout_version = 1;

        assert!(account.mark_onboarded());
        assert!(account.has_seen_onboarding);
        assert!(!account.mark_onboarded());
        assert!(account.has_seen_onboarding);
    }
}
