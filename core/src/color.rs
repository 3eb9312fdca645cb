use serde::{Deserialize, Serialize};

use crate::errors::{CalendarError, Result};

/// Diskret fargebøtte for heatmap-cellen. Rekkefølgen følger intensiteten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorBucket {
    None,
    Low,
    Medium,
    High,
    Peak,
}

impl ColorBucket {
    /// Alle bøtter i stigende rekkefølge (legende i visningslaget).
    pub const ALL: [ColorBucket; 5] = [
        ColorBucket::None,
        ColorBucket::Low,
        ColorBucket::Medium,
        ColorBucket::High,
        ColorBucket::Peak,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ColorBucket::None => "none",
            ColorBucket::Low => "low",
            ColorBucket::Medium => "medium",
            ColorBucket::High => "high",
            ColorBucket::Peak => "peak",
        }
    }
}

impl std::fmt::Display for ColorBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Intensitet → fargebøtte. Ingen klemming: verdier utenfor 0..=4 er en feil oppstrøms.
pub fn color_bucket(intensity: u8) -> Result<ColorBucket> {
    bucket_for(i64::from(intensity))
}

/// Som `color_bucket`, men for rå heltall (f.eks. fra Python-bindingen).
pub fn bucket_for(intensity: i64) -> Result<ColorBucket> {
    match intensity {
        0 => Ok(ColorBucket::None),
        1 => Ok(ColorBucket::Low),
        2 => Ok(ColorBucket::Medium),
        3 => Ok(ColorBucket::High),
        4 => Ok(ColorBucket::Peak),
        other => Err(CalendarError::InvalidIntensity(other)),
    }
}
