//! Lookup tables for header field codes
//!
//! Bitrate indexes are deliberately not resolved here.

use crate::types::{Layer, MpegVersion};

/// Sampling rates in Hz, indexed by [version][sampling rate index].
/// Index 3 is reserved for every version; the reserved version row is empty.
pub const SAMPLE_RATES: [[u32; 3]; 4] = [
    [11025, 12000, 8000],  // MPEG 2.5
    [0, 0, 0],             // reserved
    [22050, 24000, 16000], // MPEG 2
    [44100, 48000, 32000], // MPEG 1
];

/// Mode extension meaning for Layer I and II: subbands coded in intensity stereo
const BAND_RANGES: [&str; 4] = [
    "bands 4 to 31",
    "bands 8 to 31",
    "bands 12 to 31",
    "bands 16 to 31",
];

/// Mode extension meaning for Layer III
const STEREO_TOOLS: [&str; 4] = [
    "intensity stereo off, M/S stereo off",
    "intensity stereo on, M/S stereo off",
    "intensity stereo off, M/S stereo on",
    "intensity stereo on, M/S stereo on",
];

/// Resolve a sampling rate index, `None` for reserved codes
pub fn sample_rate(version: MpegVersion, index: u8) -> Option<u32> {
    if version == MpegVersion::Reserved {
        return None;
    }
    SAMPLE_RATES[version as usize].get(index as usize).copied()
}

/// Describe a mode extension code for the given layer.
/// Only meaningful when the channel mode is joint stereo.
pub fn mode_extension(layer: Layer, code: u8) -> Option<&'static str> {
    let table = match layer {
        Layer::Reserved => return None,
        Layer::LayerIII => &STEREO_TOOLS,
        Layer::LayerII | Layer::LayerI => &BAND_RANGES,
    };
    table.get(code as usize).copied()
}
