use serde::{Deserialize, Serialize};

/// How the bar's denominator is determined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Total {
    /// Sum of the current segment values.
    #[default]
    Auto,
    /// A declared denominator; may exceed the sum, leaving a remainder.
    Fixed(f64),
}

impl Total {
    /// Resolve against the current values.
    pub fn resolve<I>(self, values: I) -> f64
    where
        I: IntoIterator<Item = f64>,
    {
        match self {
            Self::Auto     => values.into_iter().sum(),
            Self::Fixed(t) => t,
        }
    }
}

impl From<Option<f64>> for Total {
    fn from(total: Option<f64>) -> Self {
        total.map_or(Self::Auto, Self::Fixed)
    }
}
