//! Host-facing link delivery implementations.

mod channel_source;

pub use channel_source::ChannelLinkSource;
