//! Binary channel frames.
//!
//! A frame carries one channel record, little-endian and packed:
//!
//! ```text
//! id, device_id, location_id, channel_type, function, alt_icon, user_icon  i32 x7
//! manufacturer_id, product_id                                              i16 x2
//! flags                                                                    u32
//! protocol_version, online                                                 u8 x2
//! value, sub_value                                                         [u8; 8] x2
//! sub_value_type                                                           u8
//! parent_channel_1_id, parent_channel_2_id                                 i32 x2
//! caption_size                                                             u32
//! caption                                                                  caption_size bytes
//! ```
//!
//! The caption is UTF-8 and may end with a NUL terminator, which is stripped.

use std::str::Utf8Error;

use tracing::trace;

use crate::channel::CHANNEL_VALUE_SIZE;
use crate::channel::Channel;
use crate::channel::ChannelBase;
use crate::channel::ChannelValue;

/// Size of a frame without its caption.
pub const HEADER_SIZE: usize = 67;

/// Largest caption accepted, terminator included.
pub const CAPTION_MAXSIZE: usize = 401;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Frame truncated: needed {needed} bytes, {remaining} remaining")]
    Truncated { needed: usize, remaining: usize },

    #[error("Caption size {0} exceeds the maximum of {max}", max = CAPTION_MAXSIZE)]
    CaptionTooLong(u32),

    #[error("Caption is not valid UTF-8: {0}")]
    InvalidCaption(#[source] Utf8Error),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Caption of {0} bytes exceeds the maximum of {max}", max = CAPTION_MAXSIZE)]
    CaptionTooLong(usize),

    #[error("Protocol version {0} does not fit in a byte")]
    ProtocolVersionOutOfRange(i32),
}

struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        let remaining = self.buf.len() - self.pos;
        if remaining < len {
            return Err(DecodeError::Truncated {
                needed: len,
                remaining,
            });
        }
        let bytes = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    fn array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut out = [0; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    fn u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.array::<1>()?[0])
    }

    fn i16(&mut self) -> Result<i16, DecodeError> {
        Ok(i16::from_le_bytes(self.array()?))
    }

    fn i32(&mut self) -> Result<i32, DecodeError> {
        Ok(i32::from_le_bytes(self.array()?))
    }

    fn u32(&mut self) -> Result<u32, DecodeError> {
        Ok(u32::from_le_bytes(self.array()?))
    }
}

/// Decode one channel frame from the start of `buf`.
///
/// Returns the channel and the number of bytes consumed.
pub fn decode_channel(buf: &[u8]) -> Result<(Channel, usize), DecodeError> {
    let mut r = Reader::new(buf);

    let id = r.i32()?;
    let device_id = r.i32()?;
    let location_id = r.i32()?;
    let channel_type = r.i32()?;
    let function = r.i32()?;
    let alt_icon = r.i32()?;
    let user_icon = r.i32()?;
    let manufacturer_id = r.i16()?;
    let product_id = r.i16()?;
    let flags = r.u32()?;
    let protocol_version = r.u8()?;
    let online = r.u8()? != 0;
    let value = ChannelValue {
        value: r.array::<CHANNEL_VALUE_SIZE>()?,
        sub_value: r.array::<CHANNEL_VALUE_SIZE>()?,
        sub_value_type: r.u8()?,
    };
    let parent_channel_1_id = r.i32()?;
    let parent_channel_2_id = r.i32()?;

    let caption_size = r.u32()?;
    if caption_size as usize > CAPTION_MAXSIZE {
        return Err(DecodeError::CaptionTooLong(caption_size));
    }
    let raw_caption = r.take(caption_size as usize)?;
    // The size limit counts the terminator, so an unterminated caption gets one byte less.
    let raw_caption = match raw_caption.strip_suffix(&[0u8]) {
        Some(text) => text,
        None if raw_caption.len() >= CAPTION_MAXSIZE => {
            return Err(DecodeError::CaptionTooLong(caption_size));
        }
        None => raw_caption,
    };
    let caption = std::str::from_utf8(raw_caption)
        .map_err(DecodeError::InvalidCaption)?
        .to_string();

    let channel = Channel {
        base: ChannelBase {
            id,
            location_id,
            function,
            online,
            caption,
            alt_icon,
            user_icon,
            flags,
        },
        parent_channel_1_id,
        parent_channel_2_id,
        channel_type,
        protocol_version: protocol_version.into(),
        manufacturer_id,
        product_id,
        device_id,
        value: Some(value),
    };

    trace!(id, device_id, consumed = r.pos, "decoded channel frame");
    Ok((channel, r.pos))
}

/// Decode a buffer holding any number of back-to-back channel frames.
pub fn decode_channels(mut buf: &[u8]) -> Result<Vec<Channel>, DecodeError> {
    let mut channels = Vec::new();
    while !buf.is_empty() {
        let (channel, consumed) = decode_channel(buf)?;
        channels.push(channel);
        buf = &buf[consumed..];
    }
    Ok(channels)
}

/// Encode a channel as a frame.
///
/// A channel without a value is written with an all-zero value. A non-empty
/// caption is written with a NUL terminator.
pub fn encode_channel(channel: &Channel) -> Result<Vec<u8>, EncodeError> {
    let protocol_version = u8::try_from(channel.protocol_version)
        .map_err(|_| EncodeError::ProtocolVersionOutOfRange(channel.protocol_version))?;

    let caption = channel.base.caption.as_bytes();
    let caption_size = if caption.is_empty() {
        0
    } else {
        caption.len() + 1
    };
    if caption_size > CAPTION_MAXSIZE {
        return Err(EncodeError::CaptionTooLong(caption_size));
    }

    let default_value = ChannelValue::default();
    let value = channel.value.as_ref().unwrap_or(&default_value);
    let base = &channel.base;

    let mut out = Vec::with_capacity(HEADER_SIZE + caption_size);
    for field in [
        base.id,
        channel.device_id,
        base.location_id,
        channel.channel_type,
        base.function,
        base.alt_icon,
        base.user_icon,
    ] {
        out.extend_from_slice(&field.to_le_bytes());
    }
    out.extend_from_slice(&channel.manufacturer_id.to_le_bytes());
    out.extend_from_slice(&channel.product_id.to_le_bytes());
    out.extend_from_slice(&base.flags.to_le_bytes());
    out.push(protocol_version);
    out.push(base.online.into());
    out.extend_from_slice(&value.value);
    out.extend_from_slice(&value.sub_value);
    out.push(value.sub_value_type);
    out.extend_from_slice(&channel.parent_channel_1_id.to_le_bytes());
    out.extend_from_slice(&channel.parent_channel_2_id.to_le_bytes());
    out.extend_from_slice(&(caption_size as u32).to_le_bytes());
    if !caption.is_empty() {
        out.extend_from_slice(caption);
        out.push(0);
    }

    Ok(out)
}
