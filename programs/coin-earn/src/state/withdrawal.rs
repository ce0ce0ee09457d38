use anchor_lang::prelude::*;

use crate::{
    constants::{PAYOUT_DETAILS_LEN, WITHDRAWAL_RESERVED_BYTES},
    utils::unpack_text,
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayoutMethod {
    Bkash,
    Binance,
    Nagad,
    Usdt,
}

impl PayoutMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PayoutMethod::Bkash => "bKash",
            PayoutMethod::Binance => "Binance",
            PayoutMethod::Nagad => "Nagad",
            PayoutMethod::Usdt => "USDT",
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum WithdrawalStatus {
    Pending,
    Completed,
    Rejected,
}

impl WithdrawalStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, WithdrawalStatus::Pending)
    }
}

/// A cash-out request. `amount` was taken out of the owner's balance when the
/// request was opened and only comes back if the request is rejected.
#[account]
#[derive(Debug)]
pub struct WithdrawalRequest {
    pub bump: u8,
    pub layout_version: u8,
    pub user_id: u64,
    pub sequence: u32,
    pub amount: u64,
    pub method: PayoutMethod,
    pub details: [u8; PAYOUT_DETAILS_LEN],
    pub status: WithdrawalStatus,
    pub created_at: i64,
    pub resolved_at: i64,
    pub reserved: [u8; WITHDRAWAL_RESERVED_BYTES],
}

impl WithdrawalRequest {
    pub const SPACE: usize =
        8 + 1 + 1 + 8 + 4 + 8 + 1 + PAYOUT_DETAILS_LEN + 1 + 8 + 8 + WITHDRAWAL_RESERVED_BYTES;

    pub fn details(&self) -> &str {
        unpack_text(&self.details)
    }
}
