//! Luminosity ramp and intensity bucketing for flat shading.

use std::str::FromStr;

/// Number of shade buckets.
pub const RAMP_LEN: usize = 12;

const DEFAULT_RAMP: [char; RAMP_LEN] = ['.', ',', '-', '~', ':', ';', '=', '!', '*', '#', '$', '@'];

/// An ordered shading table, dimmest to brightest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadeRamp {
    chars: [char; RAMP_LEN],
}

impl ShadeRamp {
    pub fn new(chars: [char; RAMP_LEN]) -> Self {
        Self { chars }
    }

    /// Map a light intensity in [-1, 1] to a ramp character.
    ///
    /// The bucket index truncates toward zero and clamps into the ramp, so
    /// out-of-range and NaN intensities still select a character (NaN lands
    /// in the dimmest bucket).
    pub fn glyph_for(&self, intensity: f32) -> char {
        let bucket = (((intensity + 1.0) * 5.5) as i32).clamp(0, RAMP_LEN as i32 - 1);
        self.chars[bucket as usize]
    }

    pub fn chars(&self) -> &[char; RAMP_LEN] {
        &self.chars
    }
}

impl Default for ShadeRamp {
    fn default() -> Self {
        Self::new(DEFAULT_RAMP)
    }
}

impl FromStr for ShadeRamp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        match <[char; RAMP_LEN]>::try_from(chars) {
            Ok(chars) => Ok(Self::new(chars)),
            Err(chars) => Err(format!(
                "shade ramp needs exactly {} characters, got {}",
                RAMP_LEN,
                chars.len()
            )),
        }
    }
}
