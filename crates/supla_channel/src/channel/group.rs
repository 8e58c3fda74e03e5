use serde::Deserialize;
use serde::Serialize;

use super::base::ChannelBase;
use super::base::HasChannelBase;
use super::record::Channel;

/// A user-defined group of channels controlled together.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChannelGroup {
    #[serde(flatten)]
    pub base: ChannelBase,

    pub member_ids: Vec<i32>,
}

impl ChannelGroup {
    pub fn add_member(&mut self, channel_id: i32) {
        if !self.member_ids.contains(&channel_id) {
            self.member_ids.push(channel_id);
        }
    }
}

impl HasChannelBase for ChannelGroup {
    fn base(&self) -> &ChannelBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ChannelBase {
        &mut self.base
    }
}

/// Every kind of channel-like entity a client deals with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChannelEntity {
    Channel(Channel),
    Group(ChannelGroup),
}

impl HasChannelBase for ChannelEntity {
    fn base(&self) -> &ChannelBase {
        match self {
            ChannelEntity::Channel(channel) => channel.base(),
            ChannelEntity::Group(group) => group.base(),
        }
    }

    fn base_mut(&mut self) -> &mut ChannelBase {
        match self {
            ChannelEntity::Channel(channel) => channel.base_mut(),
            ChannelEntity::Group(group) => group.base_mut(),
        }
    }
}

impl From<Channel> for ChannelEntity {
    fn from(channel: Channel) -> Self {
        ChannelEntity::Channel(channel)
    }
}

impl From<ChannelGroup> for ChannelEntity {
    fn from(group: ChannelGroup) -> Self {
        ChannelEntity::Group(group)
    }
}
