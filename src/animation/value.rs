use crate::foundation::error::{PixmotionError, PixmotionResult};

/// Fraction of a reference dimension, usually in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Percentage(pub f64);

impl Percentage {
    pub const ZERO: Self = Self(0.0);
    pub const FULL: Self = Self(1.0);

    /// Validated fraction; values outside `[0, 1]` are rejected.
    pub fn from_fraction(v: f64) -> PixmotionResult<Self> {
        if !v.is_finite() || !(0.0..=1.0).contains(&v) {
            return Err(PixmotionError::parse(format!(
                "percentage must be between 0.0 and 1.0, got {v}"
            )));
        }
        Ok(Self(v))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn resolve(self, reference: i32) -> f64 {
        self.0 * f64::from(reference)
    }
}

/// Either an absolute value or a fraction of a reference dimension.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NumberOrPercentage {
    Number(f64),
    Percentage(Percentage),
}

impl NumberOrPercentage {
    pub fn resolve(self, reference: i32) -> f64 {
        match self {
            Self::Number(v) => v,
            Self::Percentage(p) => p.resolve(reference),
        }
    }
}

impl From<Percentage> for NumberOrPercentage {
    fn from(p: Percentage) -> Self {
        Self::Percentage(p)
    }
}

/// Parse `"N%"` (integer percent in `0..=100`) or one of the named `mapping` entries.
pub fn parse_percentage(s: &str, mapping: &[(&str, f64)]) -> PixmotionResult<Percentage> {
    if let Some(digits) = s.strip_suffix('%')
        && !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
    {
        let n: u64 = digits
            .parse()
            .map_err(|e| PixmotionError::parse(format!("invalid percentage '{s}': {e}")))?;
        return Percentage::from_fraction(n as f64 / 100.0)
            .map_err(|_| PixmotionError::parse(format!("percentage '{s}' is above 100%")));
    }

    if let Some((_, v)) = mapping.iter().find(|(name, _)| *name == s) {
        return Ok(Percentage(*v));
    }

    let mut expected: Vec<String> = mapping.iter().map(|(name, _)| format!("'{name}'")).collect();
    expected.push("'<number>%'".to_owned());
    Err(PixmotionError::parse(format!(
        "invalid string for percentage: {s} (expected {})",
        expected.join(", ")
    )))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/value.rs"]
mod tests;
