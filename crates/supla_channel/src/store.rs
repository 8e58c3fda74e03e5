use std::collections::BTreeMap;

use tracing::debug;
use tracing::warn;

use crate::channel::Channel;
use crate::channel::ChannelValue;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Unknown channel {0}")]
    UnknownChannel(i32),
}

/// Channels known to a client, keyed by channel id.
#[derive(Debug, Default)]
pub struct ChannelStore {
    channels: BTreeMap<i32, Channel>,
}

impl ChannelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a channel, returning the record it replaced.
    pub fn upsert(&mut self, channel: Channel) -> Option<Channel> {
        let id = channel.base.id;
        let previous = self.channels.insert(id, channel);
        debug!(id, replaced = previous.is_some(), "stored channel");
        previous
    }

    pub fn get(&self, id: i32) -> Option<&Channel> {
        self.channels.get(&id)
    }

    pub fn remove(&mut self, id: i32) -> Option<Channel> {
        let removed = self.channels.remove(&id);
        if removed.is_some() {
            debug!(id, "removed channel");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Channels ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = &Channel> {
        self.channels.values()
    }

    /// Apply a value update, returning the value it replaced.
    pub fn update_value(
        &mut self,
        id: i32,
        online: bool,
        value: ChannelValue,
    ) -> Result<Option<ChannelValue>, StoreError> {
        let Some(channel) = self.channels.get_mut(&id) else {
            warn!(id, "value update for unknown channel");
            return Err(StoreError::UnknownChannel(id));
        };

        channel.base.online = online;
        let previous = channel.replace_value(value);
        debug!(id, online, "updated channel value");
        Ok(previous)
    }

    /// Channels that name `parent_id` as one of their parents.
    pub fn children_of(&self, parent_id: i32) -> impl Iterator<Item = &Channel> {
        self.channels.values().filter(move |channel| {
            parent_id != 0
                && (channel.parent_channel_1_id == parent_id
                    || channel.parent_channel_2_id == parent_id)
        })
    }
}

impl FromIterator<Channel> for ChannelStore {
    fn from_iter<I: IntoIterator<Item = Channel>>(iter: I) -> Self {
        let mut store = Self::new();
        for channel in iter {
            store.upsert(channel);
        }
        store
    }
}
