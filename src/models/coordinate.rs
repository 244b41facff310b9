pub const DEGREE_SIGN: char = '°';

/// A geographic axis and its valid domain in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    pub const LATITUDE_MIN: f64 = -90.0;
    pub const LATITUDE_MAX: f64 = 90.0;
    pub const LONGITUDE_MIN: f64 = -180.0;
    pub const LONGITUDE_MAX: f64 = 180.0;

    pub fn min(self) -> f64 {
        match self {
            Axis::Latitude => Self::LATITUDE_MIN,
            Axis::Longitude => Self::LONGITUDE_MIN,
        }
    }

    pub fn max(self) -> f64 {
        match self {
            Axis::Latitude => Self::LATITUDE_MAX,
            Axis::Longitude => Self::LONGITUDE_MAX,
        }
    }

    /// Pins a value to the closed domain of this axis.
    pub fn clamp(self, value: f64) -> f64 {
        value.clamp(self.min(), self.max())
    }

    /// Localization key for the field placeholder.
    pub fn message_key(self) -> &'static str {
        match self {
            Axis::Latitude => "latitude",
            Axis::Longitude => "longitude",
        }
    }
}

/// Renders a coordinate for its text field: empty when unset, otherwise the
/// shortest decimal form followed by a degree sign.
pub fn format_coordinate(value: Option<f64>) -> String {
    match value {
        None => String::new(),
        // -0.0 would otherwise print as "-0"
        Some(v) if v == 0.0 => format!("0{}", DEGREE_SIGN),
        // Magnitudes below a millionth switch to exponent form
        Some(v) if v.abs() < 1e-6 => format!("{:e}{}", v, DEGREE_SIGN),
        Some(v) => format!("{}{}", v, DEGREE_SIGN),
    }
}

/// Whitespace as stripped around numeric text, byte order mark included.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Reads a number the way a browser's `Number(text)` does for trimmed,
/// non-empty text. `None` stands for NaN.
fn parse_number(text: &str) -> Option<f64> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    if unsigned == "Infinity" {
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    // Radix literals take no sign
    let radix = match text.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &text[2..];
        if digits.is_empty() {
            return None;
        }
        return match i64::from_str_radix(digits, radix) {
            Ok(v) if !digits.starts_with(['+', '-']) => Some(v as f64),
            // Too large for i64, so past any axis bound
            Err(_) if digits.chars().all(|c| c.is_digit(radix)) => Some(f64::INFINITY),
            _ => None,
        };
    }

    // Rules out inf, infinity and nan spellings that only Rust accepts
    if !unsigned.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-')) {
        return None;
    }
    text.parse::<f64>().ok()
}

/// Turns user text into a stored coordinate.
///
/// Blank text clears the value. A comma decimal separator and a degree sign
/// are accepted. Text that is not a number becomes `0`; numbers outside the
/// axis domain are clamped to its nearest bound.
pub fn parse_and_clamp(raw: &str, axis: Axis) -> Option<f64> {
    let trimmed = raw.trim_matches(is_blank);
    if trimmed.is_empty() {
        return None;
    }

    let normalized = trimmed.replacen(',', ".", 1).replacen(DEGREE_SIGN, "", 1);
    let normalized = normalized.trim_matches(is_blank);

    // Emptied by normalization ("°" alone) reads as zero
    let value = if normalized.is_empty() {
        0.0
    } else {
        parse_number(normalized).unwrap_or(0.0)
    };

    Some(axis.clamp(value))
}
