use anchor_lang::prelude::*;

use crate::{
    constants::{BPS_DENOMINATOR, REFERRAL_COMMISSION_BPS},
    error::ErrorCode,
};

/// Packs `text` into a zero-padded fixed buffer. Fails instead of truncating.
pub fn pack_text<const N: usize>(text: &str) -> Result<[u8; N]> {
    let bytes = text.as_bytes();
    require!(bytes.len() <= N, ErrorCode::TextTooLong);
    let mut buf = [0u8; N];
    buf[..bytes.len()].copy_from_slice(bytes);
    Ok(buf)
}

/// Like `pack_text` but cuts over-long input at the last char boundary that fits.
/// Returns the buffer and the number of bytes used.
pub fn pack_text_lossy<const N: usize>(text: &str) -> ([u8; N], usize) {
    let mut end = text.len().min(N);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    let mut buf = [0u8; N];
    buf[..end].copy_from_slice(&text.as_bytes()[..end]);
    (buf, end)
}

/// Reads a zero-padded buffer back as a string slice.
pub fn unpack_text(buf: &[u8]) -> &str {
    let end = buf.iter().position(|b| *b == 0).unwrap_or(buf.len());
    std::str::from_utf8(&buf[..end]).unwrap_or_default()
}

/// Referrer's cut of an ad reward, rounded down.
pub fn referral_commission(reward: u64) -> Result<u64> {
    let commission = (reward as u128)
        .checked_mul(REFERRAL_COMMISSION_BPS as u128)
        .ok_or(ErrorCode::MathOverflow)?
        / BPS_DENOMINATOR as u128;
    Ok(commission as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_and_unpacks() {
        let buf: [u8; 8] = pack_text("bkash").unwrap();
        assert_eq!(unpack_text(&buf), "bkash");

        let full: [u8; 4] = pack_text("abcd").unwrap();
        assert_eq!(unpack_text(&full), "abcd");
    }

    #[test]
    fn rejects_overlong_text() {
        let err = pack_text::<4>("abcde").unwrap_err();
        assert_eq!(err, ErrorCode::TextTooLong.into());
    }

    #[test]
    fn lossy_pack_respects_char_boundaries() {
        // "é" is two bytes; a 4-byte buffer can only hold "ab" + "é" = 4 bytes, not the trailing 'c'.
        let (buf, len) = pack_text_lossy::<4>("abéc");
        assert_eq!(len, 4);
        assert_eq!(unpack_text(&buf), "abé");

        let (buf, len) = pack_text_lossy::<3>("abé");
        assert_eq!(len, 2);
        assert_eq!(unpack_text(&buf), "ab");
    }

    #[test]
    fn commission_is_ten_percent_rounded_down() {
        assert_eq!(referral_commission(100).unwrap(), 10);
        assert_eq!(referral_commission(105).unwrap(), 10);
        assert_eq!(referral_commission(9).unwrap(), 0);
        assert_eq!(referral_commission(0).unwrap(), 0);
        assert_eq!(referral_commission(u64::MAX).unwrap(), u64::MAX / 10);
    }
}
