//! Shared domain types.

mod channels;
mod format;

pub use channels::{ChannelDescriptor, CHANNELS_5_1, CHANNEL_LAYOUT};
pub use format::OutputFormat;
