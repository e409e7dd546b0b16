use serde::{Deserialize, Serialize};

/// An opaque 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend towards `other`; `t` is clamped to `0.0..=1.0`.
    #[must_use]
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            let v = f32::from(a) + (f32::from(b) - f32::from(a)) * t;
            v.round() as u8
        };
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Gradient used to color live states between two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Gradient {
    pub enabled: bool,
    pub from: Rgb,
    pub to: Rgb,
}

impl Gradient {
    #[must_use]
    pub const fn new(enabled: bool, from: Rgb, to: Rgb) -> Self {
        Self { enabled, from, to }
    }

    /// Color for live state `state` (1-based) out of `live_states` live states.
    ///
    /// A single live state takes the `from` color.
    #[must_use]
    pub fn color_at(&self, state: usize, live_states: usize) -> Rgb {
        if live_states <= 1 || state <= 1 {
            return self.from;
        }
        let t = (state - 1) as f32 / (live_states - 1) as f32;
        self.from.lerp(self.to, t)
    }
}
