use anchor_lang::prelude::*;

use crate::{
    constants::{ACCOUNT_LAYOUT_V1, FEED_CAPACITY, FEED_MESSAGE_LEN, FEED_RESERVED_BYTES},
    notifications::Notification,
    utils::{pack_text_lossy, unpack_text},
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedMessage {
    pub timestamp: i64,
    pub len: u8,
    pub text: [u8; FEED_MESSAGE_LEN],
}

impl FeedMessage {
    pub const SIZE: usize = 8 + 1 + FEED_MESSAGE_LEN;

    pub const EMPTY: FeedMessage = FeedMessage {
        timestamp: 0,
        len: 0,
        text: [0; FEED_MESSAGE_LEN],
    };

    pub fn text(&self) -> &str {
        unpack_text(&self.text[..self.len as usize])
    }
}

impl Default for FeedMessage {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Per-user message feed. Holds the latest `FEED_CAPACITY` messages; older ones
/// are overwritten.
#[account]
#[derive(Debug, Default)]
pub struct Feed {
    pub bump: u8,
    pub layout_version: u8,
    pub user_id: u64,
    /// Slot the next message is written to.
    pub head: u8,
    pub total_messages: u64,
    pub entries: [FeedMessage; FEED_CAPACITY],
    pub reserved: [u8; FEED_RESERVED_BYTES],
}

impl Feed {
    pub const SPACE: usize =
        8 + 1 + 1 + 8 + 1 + 8 + FeedMessage::SIZE * FEED_CAPACITY + FEED_RESERVED_BYTES;

    /// Sets the header in place. Entries of a freshly created account are already zeroed.
    pub fn initialize(&mut self, bump: u8, user_id: u64) {
        self.bump = bump;
        self.layout_version = ACCOUNT_LAYOUT_V1;
        self.user_id = user_id;
        self.head = 0;
        self.total_messages = 0;
    }

    pub fn push(&mut self, text: &str, timestamp: i64) {
        let (buf, len) = pack_text_lossy::<FEED_MESSAGE_LEN>(text);
        self.entries[self.head as usize] = FeedMessage {
            timestamp,
            len: len as u8,
            text: buf,
        };
        self.head = ((self.head as usize + 1) % FEED_CAPACITY) as u8;
        self.total_messages = self.total_messages.saturating_add(1);
    }

    pub fn notify(&mut self, notification: &Notification, timestamp: i64) {
        self.push(&notification.to_string(), timestamp);
    }

    pub fn len(&self) -> usize {
        (self.total_messages as usize).min(FEED_CAPACITY)
    }

    pub fn is_empty(&self) -> bool {
        self.total_messages == 0
    }

    /// Stored messages, oldest first.
    pub fn messages(&self) -> impl Iterator<Item = &FeedMessage> + '_ {
        let len = self.len();
        let start = (self.head as usize + FEED_CAPACITY - len) % FEED_CAPACITY;
        (0..len).map(move |i| &self.entries[(start + i) % FEED_CAPACITY])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(feed: &Feed) -> Vec<String> {
        feed.messages().map(|m| m.text().to_string()).collect()
    }

    #[test]
    fn keeps_messages_in_order() {
        let mut feed = Feed::default();
        feed.initialize(254, 42);
        assert!(feed.is_empty());

        feed.push("first", 1);
        feed.push("second", 2);

        assert_eq!(feed.len(), 2);
        assert_eq!(texts(&feed), vec!["first", "second"]);
        assert_eq!(feed.messages().next().unwrap().timestamp, 1);
    }

    #[test]
    fn overwrites_oldest_when_full() {
        let mut feed = Feed::default();
        for i in 0..FEED_CAPACITY + 3 {
            feed.push(&format!("msg {i}"), i as i64);
        }

        assert_eq!(feed.len(), FEED_CAPACITY);
        assert_eq!(feed.total_messages, (FEED_CAPACITY + 3) as u64);
        let texts = texts(&feed);
        assert_eq!(texts.first().unwrap(), "msg 3");
        assert_eq!(texts.last().unwrap(), &format!("msg {}", FEED_CAPACITY + 2));
    }

    #[test]
    fn truncates_long_messages() {
        let mut feed = Feed::default();
        feed.push(&"a".repeat(FEED_MESSAGE_LEN + 10), 7);
        assert_eq!(feed.messages().next().unwrap().text().len(), FEED_MESSAGE_LEN);
    }

    #[test]
    fn serialized_size_fits_space() {
        let mut feed = Feed::default();
        feed.push("hello", 1);
        let mut buf = Vec::new();
        feed.try_serialize(&mut buf).unwrap();
        assert_eq!(buf.len(), Feed::SPACE);
    }
}
