use std::str::FromStr;

use crate::foundation::error::{PixmotionError, PixmotionResult};

/// Rounding applied to translation components only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Half away from zero.
    #[default]
    Round,
    Floor,
    Ceil,
    None,
}

impl Rounding {
    pub fn apply(self, v: f64) -> f64 {
        match self {
            Self::Round => v.round(),
            Self::Floor => v.floor(),
            Self::Ceil => v.ceil(),
            Self::None => v,
        }
    }
}

impl FromStr for Rounding {
    type Err = PixmotionError;

    fn from_str(s: &str) -> PixmotionResult<Self> {
        match s {
            "round" => Ok(Self::Round),
            "floor" => Ok(Self::Floor),
            "ceil" => Ok(Self::Ceil),
            "none" => Ok(Self::None),
            _ => Err(PixmotionError::parse(format!(
                "invalid rounding '{s}' (expected 'round', 'floor', 'ceil' or 'none')"
            ))),
        }
    }
}
