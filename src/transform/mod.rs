//! Transformaties in het vlak: translate, scale, reflect, rotate, shear en
//! custom matrices, plus het toepassen van een reeks daarvan op een puntenset.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::matrix::Matrix;

mod pipeline;

pub use pipeline::{AffineMap, apply_all, compose};

/// Beschikbare transformatiesoorten, in de volgorde van hun numerieke code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransformKind {
    Translate,
    Scale,
    Reflect,
    Rotate,
    Shear,
    Custom,
}

impl TransformKind {
    pub const ALL: &'static [TransformKind] = &[
        Self::Translate,
        Self::Scale,
        Self::Reflect,
        Self::Rotate,
        Self::Shear,
        Self::Custom,
    ];

    /// Zoekt een soort op via de numerieke code die de UI gebruikt.
    #[must_use]
    pub fn from_code(code: u32) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    #[must_use]
    pub fn code(self) -> u32 {
        self as u32
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Translate => "Translate",
            Self::Scale => "Scale",
            Self::Reflect => "Reflect",
            Self::Rotate => "Rotate",
            Self::Shear => "Shear",
            Self::Custom => "Custom",
        }
    }
}

/// Spiegelassen voor [`Transform::Reflect`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reflection {
    #[default]
    None,
    XAxis,
    YAxis,
    BothAxes,
    PositiveDiagonal,
    NegativeDiagonal,
}

impl Reflection {
    pub const ALL: &'static [Reflection] = &[
        Self::None,
        Self::XAxis,
        Self::YAxis,
        Self::BothAxes,
        Self::PositiveDiagonal,
        Self::NegativeDiagonal,
    ];

    /// Onbekende codes vallen terug op [`Reflection::None`] (identiteit).
    #[must_use]
    pub fn from_code(code: u32) -> Self {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
            .unwrap_or_else(|| {
                log::debug!("onbekende spiegelcode {code}, gebruik identiteit");
                Self::None
            })
    }

    #[must_use]
    pub fn code(self) -> u32 {
        self as u32
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::XAxis => "X-Axis",
            Self::YAxis => "Y-Axis",
            Self::BothAxes => "X and Y Axes",
            Self::PositiveDiagonal => "Positive Diagonal",
            Self::NegativeDiagonal => "Negative Diagonal",
        }
    }

    /// Herkent zowel de weergavenaam als korte varianten (`x`, `y`, `xy`,
    /// `diag`, `antidiag`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_lowercase();
        match normalized.as_str() {
            "none" => Some(Self::None),
            "x" | "x-axis" => Some(Self::XAxis),
            "y" | "y-axis" => Some(Self::YAxis),
            "xy" | "both" | "x and y axes" => Some(Self::BothAxes),
            "diag" | "positive diagonal" => Some(Self::PositiveDiagonal),
            "antidiag" | "negative diagonal" => Some(Self::NegativeDiagonal),
            _ => None,
        }
    }

    fn matrix(self) -> [[f64; 2]; 2] {
        match self {
            Self::None => [[1.0, 0.0], [0.0, 1.0]],
            Self::XAxis => [[1.0, 0.0], [0.0, -1.0]],
            Self::YAxis => [[-1.0, 0.0], [0.0, 1.0]],
            Self::BothAxes => [[-1.0, 0.0], [0.0, -1.0]],
            Self::PositiveDiagonal => [[0.0, 1.0], [1.0, 0.0]],
            Self::NegativeDiagonal => [[0.0, -1.0], [-1.0, 0.0]],
        }
    }
}

/// Eén lineaire of affiene bewerking met de parameters die bij de soort horen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Transform {
    Translate { dx: f64, dy: f64 },
    Scale { sx: f64, sy: f64 },
    Reflect { axis: Reflection },
    /// Hoek in graden, tegen de klok in.
    Rotate { degrees: f64 },
    Shear { kx: f64, ky: f64 },
    /// Willekeurige matrix; voor punten in het vlak hoort die 2x2 te zijn.
    Custom { matrix: Matrix },
}

impl Transform {
    /// De neutrale parameters van een soort.
    #[must_use]
    pub fn default_for(kind: TransformKind) -> Self {
        match kind {
            TransformKind::Translate => Self::Translate { dx: 0.0, dy: 0.0 },
            TransformKind::Scale => Self::Scale { sx: 1.0, sy: 1.0 },
            TransformKind::Reflect => Self::Reflect {
                axis: Reflection::None,
            },
            TransformKind::Rotate => Self::Rotate { degrees: 0.0 },
            TransformKind::Shear => Self::Shear { kx: 0.0, ky: 0.0 },
            TransformKind::Custom => Self::Custom {
                matrix: Matrix::identity(2),
            },
        }
    }

    #[must_use]
    pub fn kind(&self) -> TransformKind {
        match self {
            Self::Translate { .. } => TransformKind::Translate,
            Self::Scale { .. } => TransformKind::Scale,
            Self::Reflect { .. } => TransformKind::Reflect,
            Self::Rotate { .. } => TransformKind::Rotate,
            Self::Shear { .. } => TransformKind::Shear,
            Self::Custom { .. } => TransformKind::Custom,
        }
    }

    /// Wisselt van soort; de parameters worden teruggezet naar de standaard
    /// van de nieuwe soort. Dezelfde soort opnieuw kiezen laat alles staan.
    pub fn set_kind(&mut self, kind: TransformKind) {
        if self.kind() != kind {
            *self = Self::default_for(kind);
        }
    }

    /// Translatie wordt opgeteld, alle andere soorten vermenigvuldigen.
    #[must_use]
    pub fn is_additive(&self) -> bool {
        matches!(self, Self::Translate { .. })
    }

    /// Numerieke parameters in vaste volgorde (leeg voor `Custom`).
    #[must_use]
    pub fn parameters(&self) -> Vec<f64> {
        match self {
            Self::Translate { dx, dy } => vec![*dx, *dy],
            Self::Scale { sx, sy } => vec![*sx, *sy],
            Self::Reflect { axis } => vec![f64::from(axis.code())],
            Self::Rotate { degrees } => vec![*degrees],
            Self::Shear { kx, ky } => vec![*kx, *ky],
            Self::Custom { .. } => Vec::new(),
        }
    }

    /// Alle parameters, en bij `Custom` alle matrixcellen, zijn eindig.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Custom { matrix } => matrix.values().iter().all(|value| value.is_finite()),
            other => other.parameters().iter().all(|value| value.is_finite()),
        }
    }

    /// Overschrijft parameter `slot`. Geeft `false` terug wanneer de soort
    /// die parameter niet heeft.
    pub fn set_parameter(&mut self, slot: usize, value: f64) -> bool {
        let target = match (self, slot) {
            (Self::Translate { dx, .. }, 0) => dx,
            (Self::Translate { dy, .. }, 1) => dy,
            (Self::Scale { sx, .. }, 0) => sx,
            (Self::Scale { sy, .. }, 1) => sy,
            (Self::Rotate { degrees }, 0) => degrees,
            (Self::Shear { kx, .. }, 0) => kx,
            (Self::Shear { ky, .. }, 1) => ky,
            _ => return false,
        };
        *target = value;
        true
    }

    /// De matrix van deze bewerking: een 2x1 kolom voor translatie, anders
    /// een 2x2 matrix.
    #[must_use]
    pub fn matrix(&self) -> Matrix {
        match self {
            Self::Translate { dx, dy } => Matrix::column(&[*dx, *dy]),
            Self::Scale { sx, sy } => square([[*sx, 0.0], [0.0, *sy]]),
            Self::Reflect { axis } => square(axis.matrix()),
            Self::Rotate { degrees } => {
                let (sin, cos) = degrees.to_radians().sin_cos();
                square([[cos, -sin], [sin, cos]])
            }
            Self::Shear { kx, ky } => square([[1.0, *kx], [*ky, 1.0]]),
            Self::Custom { matrix } => matrix.clone(),
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::default_for(TransformKind::Translate)
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.kind().name();
        match self {
            Self::Reflect { axis } => write!(f, "{name}: {}", axis.name()),
            Self::Custom { matrix } => write!(f, "{name}: {matrix}"),
            Self::Rotate { degrees } => write!(f, "{name}: {degrees}"),
            _ => {
                let params = self
                    .parameters()
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{name}: ({params})")
            }
        }
    }
}

fn square(rows: [[f64; 2]; 2]) -> Matrix {
    Matrix::zeros(2, 2).map(|_, row, col| rows[row][col])
}

#[cfg(test)]
mod tests {
    use super::{Reflection, Transform, TransformKind};
    use crate::matrix::Matrix;

    fn m(rows: &[&[f64]]) -> Matrix {
        Matrix::from_rows(rows).expect("rectangular rows")
    }

    #[test]
    fn defaults_are_neutral() {
        assert_eq!(
            Transform::default_for(TransformKind::Translate),
            Transform::Translate { dx: 0.0, dy: 0.0 }
        );
        assert_eq!(
            Transform::default_for(TransformKind::Scale).matrix(),
            Matrix::identity(2)
        );
        assert_eq!(
            Transform::default_for(TransformKind::Reflect).matrix(),
            Matrix::identity(2)
        );
        assert_eq!(
            Transform::default_for(TransformKind::Shear).matrix(),
            Matrix::identity(2)
        );
        assert_eq!(
            Transform::default_for(TransformKind::Custom).matrix(),
            Matrix::identity(2)
        );
    }

    #[test]
    fn translate_is_a_column() {
        let t = Transform::Translate { dx: 3.0, dy: -2.0 };
        assert!(t.is_additive());
        assert_eq!(t.matrix(), m(&[&[3.0], &[-2.0]]));
    }

    #[test]
    fn reflections_match_fixed_matrices() {
        let expected = [
            m(&[&[1.0, 0.0], &[0.0, 1.0]]),
            m(&[&[1.0, 0.0], &[0.0, -1.0]]),
            m(&[&[-1.0, 0.0], &[0.0, 1.0]]),
            m(&[&[-1.0, 0.0], &[0.0, -1.0]]),
            m(&[&[0.0, 1.0], &[1.0, 0.0]]),
            m(&[&[0.0, -1.0], &[-1.0, 0.0]]),
        ];
        for (axis, expected) in Reflection::ALL.iter().zip(&expected) {
            assert_eq!(&Transform::Reflect { axis: *axis }.matrix(), expected);
        }
    }

    #[test]
    fn finiteness_covers_parameters_and_custom_cells() {
        assert!(Transform::Shear { kx: 1.0, ky: -2.0 }.is_finite());
        assert!(!Transform::Rotate { degrees: f64::NAN }.is_finite());
        assert!(!Transform::Translate { dx: 0.0, dy: f64::INFINITY }.is_finite());

        let mut matrix = Matrix::identity(2);
        *matrix.get_mut(1, 0).unwrap() = f64::NEG_INFINITY;
        assert!(!Transform::Custom { matrix }.is_finite());
        assert!(Transform::default_for(TransformKind::Custom).is_finite());
    }

    #[test]
    fn rotation_is_counter_clockwise_in_degrees() {
        let r = Transform::Rotate { degrees: 90.0 }.matrix();
        assert!(r.approx_eq(&m(&[&[0.0, -1.0], &[1.0, 0.0]]), 1e-12));
    }

    #[test]
    fn shear_and_scale_layout() {
        assert_eq!(
            Transform::Shear { kx: 2.0, ky: 0.5 }.matrix(),
            m(&[&[1.0, 2.0], &[0.5, 1.0]])
        );
        assert_eq!(
            Transform::Scale { sx: 2.0, sy: 3.0 }.matrix(),
            m(&[&[2.0, 0.0], &[0.0, 3.0]])
        );
    }

    #[test]
    fn set_kind_resets_parameters() {
        let mut t = Transform::Scale { sx: 4.0, sy: 5.0 };
        t.set_kind(TransformKind::Scale);
        assert_eq!(t, Transform::Scale { sx: 4.0, sy: 5.0 });

        t.set_kind(TransformKind::Rotate);
        assert_eq!(t, Transform::Rotate { degrees: 0.0 });
    }

    #[test]
    fn set_parameter_respects_arity() {
        let mut t = Transform::default_for(TransformKind::Rotate);
        assert!(t.set_parameter(0, 45.0));
        assert!(!t.set_parameter(1, 1.0));
        assert_eq!(t, Transform::Rotate { degrees: 45.0 });

        let mut custom = Transform::default_for(TransformKind::Custom);
        assert!(!custom.set_parameter(0, 1.0));
    }

    #[test]
    fn codes_round_trip_and_unknown_reflection_is_identity() {
        for kind in TransformKind::ALL {
            assert_eq!(TransformKind::from_code(kind.code()), Some(*kind));
        }
        assert_eq!(TransformKind::from_code(6), None);
        assert_eq!(Reflection::from_code(4), Reflection::PositiveDiagonal);
        assert_eq!(Reflection::from_code(42), Reflection::None);
        assert_eq!(Reflection::from_name("X-Axis"), Some(Reflection::XAxis));
        assert_eq!(Reflection::from_name(" antidiag "), Some(Reflection::NegativeDiagonal));
        assert_eq!(Reflection::from_name("z"), None);
    }

    #[test]
    fn display_labels() {
        assert_eq!(
            Transform::Translate { dx: 1.0, dy: 0.0 }.to_string(),
            "Translate: (1, 0)"
        );
        assert_eq!(Transform::Rotate { degrees: 90.0 }.to_string(), "Rotate: 90");
        assert_eq!(
            Transform::Reflect {
                axis: Reflection::BothAxes
            }
            .to_string(),
            "Reflect: X and Y Axes"
        );
        assert_eq!(
            Transform::default_for(TransformKind::Custom).to_string(),
            "Custom: (1 0\n0 1)"
        );
    }
}
