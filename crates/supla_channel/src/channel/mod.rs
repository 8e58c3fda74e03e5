//! The channel record and the types it is composed of.

mod base;
mod group;
mod record;
mod value;

pub use base::ChannelBase;
pub use base::HasChannelBase;
pub use group::ChannelEntity;
pub use group::ChannelGroup;
pub use record::Channel;
pub use value::CHANNEL_VALUE_SIZE;
pub use value::ChannelValue;
