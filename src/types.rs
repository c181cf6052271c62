//! Typed interpretations of raw header fields
//!
//! Every 2-bit code maps to a variant, reserved codes included, so converting
//! from a raw value never fails. Only the low two bits of the input are used.

use std::fmt;

/// MPEG audio version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MpegVersion {
    /// MPEG 2.5 (unofficial extension)
    Mpeg25 = 0,
    Reserved = 1,
    /// MPEG-2 (ISO/IEC 13818-3)
    Mpeg2 = 2,
    /// MPEG-1 (ISO/IEC 11172-3)
    Mpeg1 = 3,
}

/// Only the low two bits of `code` are read; higher bits are ignored,
/// so an out-of-range raw value maps to the variant of its low bits.
impl From<u8> for MpegVersion {
    fn from(code: u8) -> Self {
        match code & 0b11 {
            0 => MpegVersion::Mpeg25,
            1 => MpegVersion::Reserved,
            2 => MpegVersion::Mpeg2,
            _ => MpegVersion::Mpeg1,
        }
    }
}

impl fmt::Display for MpegVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MpegVersion::Mpeg25 => "MPEG-2.5",
            MpegVersion::Reserved => "reserved",
            MpegVersion::Mpeg2 => "MPEG-2",
            MpegVersion::Mpeg1 => "MPEG-1",
        };
        f.write_str(name)
    }
}

/// Layer description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Reserved = 0,
    LayerIII = 1,
    LayerII = 2,
    LayerI = 3,
}

/// Only the low two bits of `code` are read; higher bits are ignored,
/// so an out-of-range raw value maps to the variant of its low bits.
impl From<u8> for Layer {
    fn from(code: u8) -> Self {
        match code & 0b11 {
            0 => Layer::Reserved,
            1 => Layer::LayerIII,
            2 => Layer::LayerII,
            _ => Layer::LayerI,
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Layer::Reserved => "reserved",
            Layer::LayerIII => "Layer III",
            Layer::LayerII => "Layer II",
            Layer::LayerI => "Layer I",
        };
        f.write_str(name)
    }
}

/// Channel mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelMode {
    Stereo = 0,
    /// Uses the mode extension field
    JointStereo = 1,
    DualMono = 2,
    Mono = 3,
}

impl ChannelMode {
    /// Whether the mode extension field carries meaning
    pub fn uses_mode_extension(self) -> bool {
        self == ChannelMode::JointStereo
    }
}

/// Only the low two bits of `code` are read; higher bits are ignored,
/// so an out-of-range raw value maps to the variant of its low bits.
impl From<u8> for ChannelMode {
    fn from(code: u8) -> Self {
        match code & 0b11 {
            0 => ChannelMode::Stereo,
            1 => ChannelMode::JointStereo,
            2 => ChannelMode::DualMono,
            _ => ChannelMode::Mono,
        }
    }
}

impl fmt::Display for ChannelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChannelMode::Stereo => "stereo",
            ChannelMode::JointStereo => "joint stereo",
            ChannelMode::DualMono => "dual mono",
            ChannelMode::Mono => "mono",
        };
        f.write_str(name)
    }
}

/// De-emphasis to apply on playback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emphasis {
    None = 0,
    /// 50/15 ms
    Ms50_15 = 1,
    Reserved = 2,
    /// CCIT J.17
    CcitJ17 = 3,
}

/// Only the low two bits of `code` are read; higher bits are ignored,
/// so an out-of-range raw value maps to the variant of its low bits.
impl From<u8> for Emphasis {
    fn from(code: u8) -> Self {
        match code & 0b11 {
            0 => Emphasis::None,
            1 => Emphasis::Ms50_15,
            2 => Emphasis::Reserved,
            _ => Emphasis::CcitJ17,
        }
    }
}

impl fmt::Display for Emphasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Emphasis::None => "none",
            Emphasis::Ms50_15 => "50/15 ms",
            Emphasis::Reserved => "reserved",
            Emphasis::CcitJ17 => "CCIT J.17",
        };
        f.write_str(name)
    }
}
