use std::fmt;

use crate::state::PayoutMethod;

/// Human-readable feed entries written alongside ledger changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    Welcome,
    WelcomeBonus { amount: u64 },
    HowToEarn,
    AdReward { amount: u64 },
    ReferralRedeemed { bonus: u64, referrer_code: u32 },
    ReferralJoined { bonus: u64 },
    WithdrawalPending { amount: u64, method: PayoutMethod },
    WithdrawalCompleted { amount: u64 },
    WithdrawalRefunded { amount: u64 },
}

impl Notification {
    pub fn onboarding(welcome_bonus: u64) -> [Notification; 3] {
        [
            Notification::Welcome,
            Notification::WelcomeBonus {
                amount: welcome_bonus,
            },
            Notification::HowToEarn,
        ]
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::Welcome => write!(f, "Welcome to CoinEarn!"),
            Notification::WelcomeBonus { amount } => {
                write!(f, "{amount} coins have been credited to your balance as a welcome bonus.")
            }
            Notification::HowToEarn => write!(
                f,
                "Watch ads to earn coins and invite friends for a 10% lifetime commission."
            ),
            Notification::AdReward { amount } => write!(f, "+{amount} coins for watching an ad."),
            Notification::ReferralRedeemed {
                bonus,
                referrer_code,
            } => write!(f, "Code {referrer_code} redeemed! +{bonus} coins."),
            Notification::ReferralJoined { bonus } => {
                write!(f, "A friend joined with your code! +{bonus} coins.")
            }
            Notification::WithdrawalPending { amount, method } => write!(
                f,
                "Withdrawal of {amount} coins via {} is pending review.",
                method.label()
            ),
            Notification::WithdrawalCompleted { amount } => {
                write!(f, "Your withdrawal of {amount} coins has been paid.")
            }
            Notification::WithdrawalRefunded { amount } => write!(
                f,
                "Your withdrawal was rejected. {amount} coins were returned to your balance."
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FEED_MESSAGE_LEN;

    #[test]
    fn renders_amounts() {
        assert_eq!(
            Notification::AdReward { amount: 100 }.to_string(),
            "+100 coins for watching an ad."
        );
        assert_eq!(
            Notification::WithdrawalPending {
                amount: 1_700,
                method: PayoutMethod::Usdt
            }
            .to_string(),
            "Withdrawal of 1700 coins via USDT is pending review."
        );
    }

    #[test]
    fn onboarding_fits_in_feed_slots() {
        for n in Notification::onboarding(u64::MAX) {
            assert!(n.to_string().len() <= FEED_MESSAGE_LEN, "{n}");
        }
        let refund = Notification::WithdrawalRefunded { amount: u64::MAX };
        assert!(refund.to_string().len() <= FEED_MESSAGE_LEN);
    }
}
