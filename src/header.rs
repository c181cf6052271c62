//! MPEG audio frame header decoding
//!
//! Every compressed audio frame is preceded by a 32-bit header. The header is
//! read here byte by byte: each field lives at a fixed bit offset inside one
//! of the four header bytes, described by [`FIELD_LAYOUT`]. A single generic
//! routine walks that table, so no field carries its own shift/mask code.
//!
//! Decoding only fails when fewer than [`HEADER_SIZE`] bytes are supplied.
//! Reserved or otherwise invalid values (including a bad frame sync) are
//! passed through as data.

use crate::error::{HeaderError, HeaderResult};
use crate::types::{ChannelMode, Emphasis, Layer, MpegVersion};

/// Size of a frame header in bytes
pub const HEADER_SIZE: usize = 4;

/// Frame sync value of a well-formed header (11 bits set)
pub const FRAME_SYNC: u16 = 0x7FF;

/// Named header fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderField {
    FrameSync,
    AudioVersion,
    LayerDescription,
    CrcProtected,
    BitrateIndex,
    SamplingRateIndex,
    IsPadded,
    Unused,
    ChannelMode,
    ModeExtension,
    Copyright,
    Original,
    Emphasis,
}

impl HeaderField {
    /// All fields, in transmission order
    pub const ALL: [HeaderField; 13] = [
        HeaderField::FrameSync,
        HeaderField::AudioVersion,
        HeaderField::LayerDescription,
        HeaderField::CrcProtected,
        HeaderField::BitrateIndex,
        HeaderField::SamplingRateIndex,
        HeaderField::IsPadded,
        HeaderField::Unused,
        HeaderField::ChannelMode,
        HeaderField::ModeExtension,
        HeaderField::Copyright,
        HeaderField::Original,
        HeaderField::Emphasis,
    ];

    /// Field name as printed in reports
    pub fn name(self) -> &'static str {
        match self {
            HeaderField::FrameSync => "frame_sync",
            HeaderField::AudioVersion => "audio_version",
            HeaderField::LayerDescription => "layer_description",
            HeaderField::CrcProtected => "crc_protected",
            HeaderField::BitrateIndex => "bitrate_index",
            HeaderField::SamplingRateIndex => "sampling_rate_index",
            HeaderField::IsPadded => "is_padded",
            HeaderField::Unused => "unused",
            HeaderField::ChannelMode => "channel_mode",
            HeaderField::ModeExtension => "mode_extension",
            HeaderField::Copyright => "copyright",
            HeaderField::Original => "original",
            HeaderField::Emphasis => "emphasis",
        }
    }

    /// Total width of the field in bits
    pub fn width(self) -> u8 {
        FIELD_LAYOUT
            .iter()
            .filter(|slice| slice.field == self)
            .map(|slice| slice.width)
            .sum()
    }

    /// Largest value the field can hold
    pub fn max_value(self) -> u16 {
        (1u16 << self.width()) - 1
    }
}

/// Location of (part of) a field inside the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitSlice {
    /// Field this slice belongs to
    pub field: HeaderField,
    /// Header byte the bits are read from (0..4)
    pub byte: usize,
    /// Offset of the lowest bit within that byte
    pub offset: u8,
    /// Number of bits
    pub width: u8,
    /// Position of the slice within the field value
    pub shift: u8,
}

const fn slice(field: HeaderField, byte: usize, offset: u8, width: u8, shift: u8) -> BitSlice {
    BitSlice {
        field,
        byte,
        offset,
        width,
        shift,
    }
}

/// Bit layout of the header.
///
/// Frame sync is split across two bytes: the top three bits of byte 2 form
/// its low bits and all of byte 3 forms its high bits.
pub const FIELD_LAYOUT: [BitSlice; 14] = [
    // byte 0
    slice(HeaderField::Emphasis, 0, 0, 2, 0),
    slice(HeaderField::Original, 0, 2, 1, 0),
    slice(HeaderField::Copyright, 0, 3, 1, 0),
    slice(HeaderField::ModeExtension, 0, 4, 2, 0),
    slice(HeaderField::ChannelMode, 0, 6, 2, 0),
    // byte 1
    slice(HeaderField::Unused, 1, 0, 1, 0),
    slice(HeaderField::IsPadded, 1, 1, 1, 0),
    slice(HeaderField::SamplingRateIndex, 1, 2, 2, 0),
    slice(HeaderField::BitrateIndex, 1, 4, 4, 0),
    // byte 2
    slice(HeaderField::CrcProtected, 2, 0, 1, 0),
    slice(HeaderField::LayerDescription, 2, 1, 2, 0),
    slice(HeaderField::AudioVersion, 2, 3, 2, 0),
    slice(HeaderField::FrameSync, 2, 5, 3, 0),
    // byte 3
    slice(HeaderField::FrameSync, 3, 0, 8, 3),
];

#[inline]
fn mask(width: u8) -> u8 {
    ((1u16 << width) - 1) as u8
}

/// Extract `width` bits of `byte` starting at bit `offset`
#[inline]
pub fn extract_bits(byte: u8, offset: u8, width: u8) -> u8 {
    (byte >> offset) & mask(width)
}

/// Decoded frame header.
///
/// Raw field values only; the typed accessors interpret them on demand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameHeader {
    /// 11 bits, all set when valid
    pub frame_sync: u16,
    /// 2 bits
    pub audio_version: u8,
    /// 2 bits, 0 reserved, 1 = Layer III, 2 = Layer II, 3 = Layer I
    pub layer_description: u8,
    /// 1 bit, 0 = protected by CRC
    pub crc_protected: u8,
    /// 4 bits, not resolved to a bitrate
    pub bitrate_index: u8,
    /// 2 bits, 3 reserved
    pub sampling_rate_index: u8,
    /// 1 bit
    pub is_padded: u8,
    /// 1 bit, never interpreted
    pub unused: u8,
    /// 2 bits
    pub channel_mode: u8,
    /// 2 bits, joint stereo only
    pub mode_extension: u8,
    /// 1 bit
    pub copyright: u8,
    /// 1 bit
    pub original: u8,
    /// 2 bits
    pub emphasis: u8,
}

impl FrameHeader {
    /// Decode the leading header bytes of `buf`
    pub fn from_bytes(buf: &[u8]) -> HeaderResult<Self> {
        decode(buf)
    }

    /// Pack the header back into its four bytes
    pub fn to_bytes(&self) -> HeaderResult<[u8; HEADER_SIZE]> {
        encode(self)
    }

    /// Raw value of a field
    pub fn get(&self, field: HeaderField) -> u16 {
        match field {
            HeaderField::FrameSync => self.frame_sync,
            HeaderField::AudioVersion => self.audio_version as u16,
            HeaderField::LayerDescription => self.layer_description as u16,
            HeaderField::CrcProtected => self.crc_protected as u16,
            HeaderField::BitrateIndex => self.bitrate_index as u16,
            HeaderField::SamplingRateIndex => self.sampling_rate_index as u16,
            HeaderField::IsPadded => self.is_padded as u16,
            HeaderField::Unused => self.unused as u16,
            HeaderField::ChannelMode => self.channel_mode as u16,
            HeaderField::ModeExtension => self.mode_extension as u16,
            HeaderField::Copyright => self.copyright as u16,
            HeaderField::Original => self.original as u16,
            HeaderField::Emphasis => self.emphasis as u16,
        }
    }

    // Callers guarantee `value` fits the field width.
    fn set(&mut self, field: HeaderField, value: u16) {
        let narrow = value as u8;
        match field {
            HeaderField::FrameSync => self.frame_sync = value,
            HeaderField::AudioVersion => self.audio_version = narrow,
            HeaderField::LayerDescription => self.layer_description = narrow,
            HeaderField::CrcProtected => self.crc_protected = narrow,
            HeaderField::BitrateIndex => self.bitrate_index = narrow,
            HeaderField::SamplingRateIndex => self.sampling_rate_index = narrow,
            HeaderField::IsPadded => self.is_padded = narrow,
            HeaderField::Unused => self.unused = narrow,
            HeaderField::ChannelMode => self.channel_mode = narrow,
            HeaderField::ModeExtension => self.mode_extension = narrow,
            HeaderField::Copyright => self.copyright = narrow,
            HeaderField::Original => self.original = narrow,
            HeaderField::Emphasis => self.emphasis = narrow,
        }
    }

    /// Whether the frame sync holds the expected all-ones pattern.
    /// Decoding never rejects a header on this basis.
    pub fn has_valid_sync(&self) -> bool {
        self.frame_sync == FRAME_SYNC
    }

    pub fn version(&self) -> MpegVersion {
        MpegVersion::from(self.audio_version)
    }

    pub fn layer(&self) -> Layer {
        Layer::from(self.layer_description)
    }

    pub fn channel_mode(&self) -> ChannelMode {
        ChannelMode::from(self.channel_mode)
    }

    pub fn emphasis(&self) -> Emphasis {
        Emphasis::from(self.emphasis)
    }

    /// Original media rather than a copy
    pub fn is_original(&self) -> bool {
        self.original == 1
    }

    pub fn is_copyrighted(&self) -> bool {
        self.copyright == 1
    }

    pub fn is_padded(&self) -> bool {
        self.is_padded == 1
    }

    /// A 16-bit CRC follows the header. The raw bit is inverted: 0 means protected.
    pub fn is_crc_protected(&self) -> bool {
        self.crc_protected == 0
    }
}

impl TryFrom<&[u8]> for FrameHeader {
    type Error = HeaderError;

    fn try_from(buf: &[u8]) -> HeaderResult<Self> {
        decode(buf)
    }
}

/// Decode a frame header from the first four bytes of `buf`.
///
/// Bytes past the header are ignored. Fails with
/// [`HeaderError::TruncatedInput`] when `buf` is shorter than a header.
pub fn decode(buf: &[u8]) -> HeaderResult<FrameHeader> {
    let bytes = buf.get(..HEADER_SIZE).ok_or(HeaderError::TruncatedInput {
        expected: HEADER_SIZE,
        actual: buf.len(),
    })?;

    let mut header = FrameHeader::default();
    for slice in FIELD_LAYOUT.iter() {
        let bits = extract_bits(bytes[slice.byte], slice.offset, slice.width) as u16;
        let value = header.get(slice.field) | (bits << slice.shift);
        header.set(slice.field, value);
    }
    Ok(header)
}

/// Pack a frame header into four bytes, the inverse of [`decode`].
///
/// Fails with [`HeaderError::FieldOverflow`] if a field holds a value wider
/// than its bit width.
pub fn encode(header: &FrameHeader) -> HeaderResult<[u8; HEADER_SIZE]> {
    for field in HeaderField::ALL {
        let value = header.get(field);
        if value > field.max_value() {
            return Err(HeaderError::FieldOverflow {
                field: field.name(),
                value,
                width: field.width(),
            });
        }
    }

    let mut bytes = [0u8; HEADER_SIZE];
    for slice in FIELD_LAYOUT.iter() {
        let bits = ((header.get(slice.field) >> slice.shift) as u8) & mask(slice.width);
        bytes[slice.byte] |= bits << slice.offset;
    }
    Ok(bytes)
}
