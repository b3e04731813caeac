use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A labeled 2D training sample. Labels are `1.0` or `-1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub label: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64, label: f64) -> Self {
        Self { x, y, label }
    }

    #[must_use]
    pub fn inputs(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

/// Canonical 2D classification patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    Gauss,
    #[default]
    Circle,
    Xor,
    Spiral,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 4] = [
        DatasetKind::Gauss,
        DatasetKind::Circle,
        DatasetKind::Xor,
        DatasetKind::Spiral,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            DatasetKind::Gauss => "gauss",
            DatasetKind::Circle => "circle",
            DatasetKind::Xor => "xor",
            DatasetKind::Spiral => "spiral",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DatasetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        DatasetKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown dataset type: {s}"))
    }
}
