//! Image geometry helpers.
//!
//! Proportional dimension scaling and simple color interpolation. These are
//! the pure calculations behind thumbnailing: no pixel data is touched
//! here, callers feed the results to whatever raster backend they use.

/// A width/height pair in pixels.
///
/// # Examples
///
/// ```
/// use docpath::image::Dimensions;
///
/// let dims = Dimensions::new(1920, 1080);
/// assert_eq!(dims.width, 1920);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Create a dimensions pair.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// How a target box constrains the scaled result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleMode {
    /// Force both edges to the given values, ignoring the aspect ratio.
    Exact,
    /// Keep the aspect ratio and stay inside the box (contain).
    Fit,
    /// Keep the aspect ratio and fill the box, overflowing the longer edge.
    Cover,
}

/// Compute the scaled dimensions for a resize.
///
/// With both edges given, `mode` decides how the aspect ratio and the box
/// interact. With a single edge given, the other scales proportionally
/// regardless of mode; with neither, the original dimensions come back.
/// Fractional results round up, so a scaled edge never collapses to zero
/// for a non-empty source.
///
/// # Examples
///
/// ```
/// use docpath::image::{scaled_dimensions, Dimensions, ScaleMode};
///
/// let original = Dimensions::new(150, 100);
///
/// assert_eq!(
///     scaled_dimensions(original, Some(50), None, ScaleMode::Fit),
///     Dimensions::new(50, 34)
/// );
/// assert_eq!(
///     scaled_dimensions(original, Some(50), Some(50), ScaleMode::Cover),
///     Dimensions::new(75, 50)
/// );
/// ```
#[must_use]
pub fn scaled_dimensions(
    original: Dimensions,
    new_width: Option<u32>,
    new_height: Option<u32>,
    mode: ScaleMode,
) -> Dimensions {
    match (new_width, new_height) {
        (Some(width), Some(height)) => match mode {
            ScaleMode::Exact => Dimensions::new(width, height),
            ScaleMode::Fit | ScaleMode::Cover => {
                let original_ratio = f64::from(original.width) / f64::from(original.height);
                let target_ratio = f64::from(width) / f64::from(height);
                let width_bound = match mode {
                    ScaleMode::Cover => target_ratio >= original_ratio,
                    _ => target_ratio <= original_ratio,
                };
                if width_bound {
                    Dimensions::new(width, ceil_scale(width, original.height, original.width))
                } else {
                    Dimensions::new(ceil_scale(height, original.width, original.height), height)
                }
            }
        },
        (Some(width), None) => {
            Dimensions::new(width, ceil_scale(width, original.height, original.width))
        }
        (None, Some(height)) => {
            Dimensions::new(ceil_scale(height, original.width, original.height), height)
        }
        (None, None) => original,
    }
}

/// Interpolate between two `#rrggbb` colors.
///
/// Each channel moves `percent` of the way across the distance between the
/// two colors. Malformed input returns the source color unchanged.
///
/// # Examples
///
/// ```
/// use docpath::image::gradient_color;
///
/// assert_eq!(gradient_color("#ffffff", "#000000", 50.0), "#808080");
/// assert_eq!(gradient_color("#ffffff", "#ff0000", 50.0), "#ff8080");
/// assert_eq!(gradient_color("not-a-color", "#000000", 50.0), "not-a-color");
/// ```
#[must_use]
pub fn gradient_color(color: &str, color_to_add: &str, percent: f64) -> String {
    let (Some(from), Some(to)) = (parse_hex(color), parse_hex(color_to_add)) else {
        return color.to_string();
    };

    let blended: Vec<u8> = from
        .iter()
        .zip(to.iter())
        .map(|(&a, &b)| blend_channel(a, b, percent))
        .collect();

    format!("#{:02x}{:02x}{:02x}", blended[0], blended[1], blended[2])
}

/// Scale `edge` by `numerator / denominator`, rounding up.
fn ceil_scale(edge: u32, numerator: u32, denominator: u32) -> u32 {
    if denominator == 0 {
        return 0;
    }
    let scaled = (u64::from(edge) * u64::from(numerator)).div_ceil(u64::from(denominator));
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

fn parse_hex(color: &str) -> Option<[u8; 3]> {
    let digits = color.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    Some([
        u8::from_str_radix(&digits[0..2], 16).ok()?,
        u8::from_str_radix(&digits[2..4], 16).ok()?,
        u8::from_str_radix(&digits[4..6], 16).ok()?,
    ])
}

/// Move `percent` of the distance from channel `a` toward channel `b`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn blend_channel(a: u8, b: u8, percent: f64) -> u8 {
    let low = f64::from(a.min(b));
    let high = f64::from(a.max(b));
    let distance = high - low;

    let value = if a < b {
        distance / 100.0 * percent + low
    } else {
        high - distance / 100.0 * percent
    };

    value.round().clamp(0.0, 255.0) as u8
}
