//! Fin profile identifiers and per-profile efficiency kernels.

use std::fmt;
use std::str::FromStr;

use crate::error::SinkError;
use crate::{parabolic, rectangular, triangular};
use hx_core::Real;
use serde::Serialize;

/// Straight fin profiles with a closed-form efficiency.
///
/// Pin fins (rectangular, triangular, parabolic, concave parabolic) are
/// recognised by name but not modelled yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum FinProfileKind {
    Rectangular,
    Triangular,
    Parabolic,
}

impl FinProfileKind {
    pub const ALL: [FinProfileKind; 3] = [
        FinProfileKind::Rectangular,
        FinProfileKind::Triangular,
        FinProfileKind::Parabolic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FinProfileKind::Rectangular => "straight rectangular fin",
            FinProfileKind::Triangular => "straight triangular fin",
            FinProfileKind::Parabolic => "straight parabolic fin",
        }
    }

    /// Half-thickness `y(x)` along the fin, `x` measured from the base.
    pub fn contour(&self) -> &'static str {
        match self {
            FinProfileKind::Rectangular => "y = t/2",
            FinProfileKind::Triangular => "y = (t/2)(1 - x/L)",
            FinProfileKind::Parabolic => "y = (t/2)(1 - x/L)^2",
        }
    }

    /// Fin efficiency as a function of `m Lc`.
    pub fn efficiency_kernel(&self, ml: Real) -> Real {
        match self {
            FinProfileKind::Rectangular => rectangular::efficiency(ml),
            FinProfileKind::Triangular => triangular::efficiency(ml),
            FinProfileKind::Parabolic => parabolic::efficiency(ml),
        }
    }

    /// Length entering the efficiency kernel for a fin of length `l` and root
    /// thickness `t` (both in m).
    pub fn corrected_length(&self, l: Real, t: Real) -> Real {
        match self {
            FinProfileKind::Rectangular => rectangular::corrected_length(l, t),
            FinProfileKind::Triangular | FinProfileKind::Parabolic => l,
        }
    }

    /// Heat through a fin at `m Lc = x`, relative to an infinitely long fin
    /// of the same profile: `x * eta(x)`.
    pub fn heat_ratio(&self, x: Real) -> Real {
        x * self.efficiency_kernel(x)
    }
}

impl fmt::Display for FinProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FinProfileKind {
    type Err = SinkError;

    /// Accepts `rectangular`, `straight rectangular`, `straight_rectangular_fin`
    /// and similar spellings, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_ascii_lowercase()
            .replace(['_', '-'], " ")
            .split_whitespace()
            .filter(|word| *word != "fin")
            .collect::<Vec<_>>()
            .join(" ");

        match key.as_str() {
            "rectangular" | "straight rectangular" => Ok(FinProfileKind::Rectangular),
            "triangular" | "straight triangular" => Ok(FinProfileKind::Triangular),
            "parabolic" | "straight parabolic" => Ok(FinProfileKind::Parabolic),
            k if k.starts_with("pin") => Err(SinkError::NotSupported {
                what: format!("pin fin profile '{s}'"),
            }),
            _ => Err(SinkError::NotSupported {
                what: format!(
                    "unknown fin profile '{s}' (expected rectangular, triangular or parabolic)"
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_spellings() {
        for s in [
            "rectangular",
            "Straight Rectangular",
            "straight_rectangular_fin",
            "straight rectangular fin",
        ] {
            assert_eq!(s.parse::<FinProfileKind>().unwrap(), FinProfileKind::Rectangular);
        }
        assert_eq!(
            "straight-triangular".parse::<FinProfileKind>().unwrap(),
            FinProfileKind::Triangular
        );
        assert_eq!(
            "PARABOLIC".parse::<FinProfileKind>().unwrap(),
            FinProfileKind::Parabolic
        );
    }

    #[test]
    fn pin_profiles_are_not_supported() {
        let err = "pin rectangular".parse::<FinProfileKind>().unwrap_err();
        assert!(err.to_string().contains("pin fin"));
        assert!("hexagonal".parse::<FinProfileKind>().is_err());
    }

    #[test]
    fn every_kernel_is_one_at_zero() {
        for kind in FinProfileKind::ALL {
            assert_eq!(kind.efficiency_kernel(0.0), 1.0, "{kind}");
            assert_eq!(kind.heat_ratio(0.0), 0.0);
        }
    }

    #[test]
    fn heat_ratio_approaches_one() {
        for kind in FinProfileKind::ALL {
            let r = kind.heat_ratio(50.0);
            assert!(r > 0.98 && r <= 1.0, "{kind}: {r}");
        }
        // rectangular ratio is tanh(mL)
        let r = FinProfileKind::Rectangular.heat_ratio(1.0);
        assert!((r - 1.0_f64.tanh()).abs() < 1e-12);
    }
}
