/// Normalized RGB color, each channel in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl Rgb {
    /// Gray with all channels equal to `v`.
    pub fn gray(v: f64) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Channels as `f32`, in attribute order.
    pub fn to_array_f32(self) -> [f32; 3] {
        [self.r as f32, self.g as f32, self.b as f32]
    }

    /// Scale every channel by `scale` and round to 8-bit.
    pub fn to_u8_scaled(self, scale: f64) -> [u8; 3] {
        let q = |c: f64| (c * scale).round().clamp(0.0, 255.0) as u8;
        [q(self.r), q(self.g), q(self.b)]
    }
}

fn hue_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 0.5 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * 6.0 * (2.0 / 3.0 - t);
    }
    p
}

/// Wrap a hue into `[0, 1)`.
pub fn wrap_hue(h: f64) -> f64 {
    let w = h.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    if w >= 1.0 { 0.0 } else { w }
}

/// Convert hue/saturation/lightness to normalized RGB.
///
/// Hue wraps, saturation and lightness clamp; the function is total.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = wrap_hue(h);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    if s == 0.0 {
        return Rgb::gray(l);
    }

    let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    Rgb {
        r: hue_channel(p, q, h + 1.0 / 3.0),
        g: hue_channel(p, q, h),
        b: hue_channel(p, q, h - 1.0 / 3.0),
    }
}

const HUE_NAMES: [&str; 8] = [
    "Red", "Orange", "Yellow", "Green", "Cyan", "Blue", "Purple", "Pink",
];

/// Coarse display name for a hue, one of eight buckets.
pub fn hue_name(h: f64) -> &'static str {
    let bucket = (wrap_hue(h) * 8.0).floor() as usize % HUE_NAMES.len();
    HUE_NAMES[bucket]
}

/// Two-stop gradient swatch shown next to the color controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ColorPreview {
    /// Full-intensity stop.
    pub light: [u8; 3],
    /// Darkened stop (channels scaled by 200 instead of 255).
    pub dark: [u8; 3],
}

impl ColorPreview {
    /// Build the swatch for an HSL triple.
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let rgb = hsl_to_rgb(h, s, l);
        Self {
            light: rgb.to_u8_scaled(255.0),
            dark: rgb.to_u8_scaled(200.0),
        }
    }

    /// CSS `linear-gradient` for the swatch.
    pub fn css_gradient(&self) -> String {
        let [r0, g0, b0] = self.light;
        let [r1, g1, b1] = self.dark;
        format!("linear-gradient(135deg, rgb({r0}, {g0}, {b0}), rgb({r1}, {g1}, {b1}))")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/hsl.rs"]
mod tests;
