use anchor_lang::prelude::*;

use crate::{
    constants::{
        ACCOUNT_LAYOUT_V1, DEFAULT_AD_REWARD, DEFAULT_BANNER_LINK, DEFAULT_BANNER_URL,
        DEFAULT_MIN_WITHDRAWAL, DEFAULT_NOTICE, FIRST_REFERRAL_CODE, NOTICE_LEN,
        SETTINGS_RESERVED_BYTES, URL_LEN,
    },
    error::ErrorCode,
    utils::{pack_text, pack_text_lossy, unpack_text},
};

/// Global tunables plus running ledger totals.
#[account]
#[derive(Debug)]
pub struct Settings {
    pub bump: u8,
    pub layout_version: u8,
    pub authority: Pubkey,
    pub operator: Pubkey,
    pub ad_reward: u64,
    pub min_withdrawal: u64,
    pub notice: [u8; NOTICE_LEN],
    pub banner_url: [u8; URL_LEN],
    pub banner_link: [u8; URL_LEN],
    pub next_referral_code: u32,
    pub total_accounts: u64,
    pub total_coins_issued: u64,
    pub total_coins_escrowed: u64,
    pub total_coins_paid_out: u64,
    pub reserved: [u8; SETTINGS_RESERVED_BYTES],
}

impl Settings {
    pub const SPACE: usize = 8
        + 1
        + 1
        + 32
        + 32
        + 8
        + 8
        + NOTICE_LEN
        + URL_LEN
        + URL_LEN
        + 4
        + 8
        + 8
        + 8
        + 8
        + SETTINGS_RESERVED_BYTES;

    pub fn with_defaults(bump: u8, authority: Pubkey, operator: Pubkey) -> Self {
        Self {
            bump,
            layout_version: ACCOUNT_LAYOUT_V1,
            authority,
            operator,
            ad_reward: DEFAULT_AD_REWARD,
            min_withdrawal: DEFAULT_MIN_WITHDRAWAL,
            notice: pack_text_lossy(DEFAULT_NOTICE).0,
            banner_url: pack_text_lossy(DEFAULT_BANNER_URL).0,
            banner_link: pack_text_lossy(DEFAULT_BANNER_LINK).0,
            next_referral_code: FIRST_REFERRAL_CODE,
            total_accounts: 0,
            total_coins_issued: 0,
            total_coins_escrowed: 0,
            total_coins_paid_out: 0,
            reserved: [0; SETTINGS_RESERVED_BYTES],
        }
    }

    pub fn notice(&self) -> &str {
        unpack_text(&self.notice)
    }

    pub fn banner_url(&self) -> &str {
        unpack_text(&self.banner_url)
    }

    pub fn banner_link(&self) -> &str {
        unpack_text(&self.banner_link)
    }

    /// Counts a new account and its welcome bonus, and hands out the next referral
    /// code. Codes are never reused. Nothing is written if any counter would overflow.
    pub fn record_registration(&mut self, welcome_bonus: u64) -> Result<u32> {
        let code = self.next_referral_code;
        let next_referral_code = code.checked_add(1).ok_or(ErrorCode::MathOverflow)?;
        let total_accounts = self
            .total_accounts
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;
        let total_coins_issued = self
            .total_coins_issued
            .checked_add(welcome_bonus)
            .ok_or(ErrorCode::MathOverflow)?;

        self.next_referral_code = next_referral_code;
        self.total_accounts = total_accounts;
        self.total_coins_issued = total_coins_issued;
        Ok(code)
    }

    pub fn record_issued(&mut self, amount: u64) -> Result<()> {
        self.total_coins_issued = self
            .total_coins_issued
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    pub fn record_escrowed(&mut self, amount: u64) -> Result<()> {
        self.total_coins_escrowed = self
            .total_coins_escrowed
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    /// Releases escrow for a resolved withdrawal. Completed payouts are counted as
    /// having left the ledger; rejected ones went back to the owner's balance.
    pub fn record_released(&mut self, amount: u64, paid_out: bool) -> Result<()> {
        let total_coins_escrowed = self
            .total_coins_escrowed
            .checked_sub(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        let total_coins_paid_out = if paid_out {
            self.total_coins_paid_out
                .checked_add(amount)
                .ok_or(ErrorCode::MathOverflow)?
        } else {
            self.total_coins_paid_out
        };

        self.total_coins_escrowed = total_coins_escrowed;
        self.total_coins_paid_out = total_coins_paid_out;
        Ok(())
    }

    /// Merges the provided fields. Nothing is written unless every field validates.
    pub fn apply(&mut self, update: &SettingsUpdate) -> Result<()> {
        if let Some(ad_reward) = update.ad_reward {
            require!(ad_reward > 0, ErrorCode::InvalidRewardAmount);
        }
        let notice = update
            .notice
            .as_deref()
            .map(pack_text::<NOTICE_LEN>)
            .transpose()?;
        let banner_url = update
            .banner_url
            .as_deref()
            .map(pack_text::<URL_LEN>)
            .transpose()?;
        let banner_link = update
            .banner_link
            .as_deref()
            .map(pack_text::<URL_LEN>)
            .transpose()?;

        if let Some(ad_reward) = update.ad_reward {
            self.ad_reward = ad_reward;
        }
        if let Some(min_withdrawal) = update.min_withdrawal {
            self.min_withdrawal = min_withdrawal;
        }
        if let Some(notice) = notice {
            self.notice = notice;
        }
        if let Some(banner_url) = banner_url {
            self.banner_url = banner_url;
        }
        if let Some(banner_link) = banner_link {
            self.banner_link = banner_link;
        }
        if let Some(operator) = update.operator {
            self.operator = operator;
        }
        Ok(())
    }
}

/// Partial settings write; `None` leaves the field as it is.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    pub ad_reward: Option<u64>,
    pub min_withdrawal: Option<u64>,
    pub notice: Option<String>,
    pub banner_url: Option<String>,
    pub banner_link: Option<String>,
    pub operator: Option<Pubkey>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings::with_defaults(255, Pubkey::new_from_array([1; 32]), Pubkey::new_from_array([2; 32]))
    }

    #[test]
    fn defaults_match_the_app() {
        let s = settings();
        assert_eq!(s.ad_reward, 100);
        assert_eq!(s.min_withdrawal, 5_000);
        assert_eq!(s.notice(), DEFAULT_NOTICE);
        assert_eq!(s.banner_url(), DEFAULT_BANNER_URL);
        assert_eq!(s.banner_link(), DEFAULT_BANNER_LINK);
        assert_eq!(s.next_referral_code, FIRST_REFERRAL_CODE);
    }

    #[test]
    fn serialized_size_fits_space() {
        let mut buf = Vec::new();
        settings().try_serialize(&mut buf).unwrap();
        assert_eq!(buf.len(), Settings::SPACE);
    }

    #[test]
    fn referral_codes_are_sequential() {
        let mut s = settings();
        assert_eq!(s.record_registration(1_000).unwrap(), 1_000);
        assert_eq!(s.record_registration(1_000).unwrap(), 1_001);
        assert_eq!(s.next_referral_code, 1_002);
        assert_eq!(s.total_accounts, 2);
        assert_eq!(s.total_coins_issued, 2_000);
    }

    #[test]
    fn overflowing_registration_writes_nothing() {
        let mut s = settings();
        s.total_coins_issued = u64::MAX;
        let err = s.record_registration(1_000).unwrap_err();
        assert_eq!(err, ErrorCode::MathOverflow.into());
        assert_eq!(s.next_referral_code, 1_000);
        assert_eq!(s.total_accounts, 0);
    }

    #[test]
    fn partial_update_only_touches_given_fields() {
        let mut s = settings();
        let operator = s.operator;
        s.apply(&SettingsUpdate {
            ad_reward: Some(250),
            notice: Some("Maintenance tonight".to_string()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(s.ad_reward, 250);
        assert_eq!(s.min_withdrawal, 5_000);
        assert_eq!(s.notice(), "Maintenance tonight");
        assert_eq!(s.banner_url(), DEFAULT_BANNER_URL);
        assert_eq!(s.operator, operator);
    }

    #[test]
    fn shorter_notice_clears_previous_text() {
        let mut s = settings();
        s.apply(&SettingsUpdate {
            notice: Some("Hi".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(s.notice(), "Hi");
    }

    #[test]
    fn invalid_update_writes_nothing() {
        let mut s = settings();
        let err = s
            .apply(&SettingsUpdate {
                min_withdrawal: Some(1),
                banner_url: Some("x".repeat(URL_LEN + 1)),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err, ErrorCode::TextTooLong.into());
        assert_eq!(s.min_withdrawal, 5_000);

        let err = s
            .apply(&SettingsUpdate {
                ad_reward: Some(0),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err, ErrorCode::InvalidRewardAmount.into());
        assert_eq!(s.ad_reward, 100);
    }

    #[test]
    fn escrow_totals_track_resolution() {
        let mut s = settings();
        s.record_escrowed(700).unwrap();
        s.record_escrowed(300).unwrap();
        s.record_released(700, true).unwrap();
        s.record_released(300, false).unwrap();
        assert_eq!(s.total_coins_escrowed, 0);
        assert_eq!(s.total_coins_paid_out, 700);
    }

    #[test]
    fn failed_release_keeps_totals() {
        let mut s = settings();
        s.record_escrowed(500).unwrap();
        s.total_coins_paid_out = u64::MAX;
        let err = s.record_released(500, true).unwrap_err();
        assert_eq!(err, ErrorCode::MathOverflow.into());
        assert_eq!(s.total_coins_escrowed, 500);
    }
}
