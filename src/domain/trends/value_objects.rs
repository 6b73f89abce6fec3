use derive_more::{Constructor, Deref, DerefMut, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - reporting period ordinal (week or month number)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into, Deref, DerefMut,
    Constructor, Serialize, Deserialize,
)]
pub struct Period(u32);

impl Period {
    pub fn value(&self) -> u32 {
        self.0
    }
}

/// Value Object - measured metric value
#[derive(
    Debug, Clone, Copy, PartialEq, From, Into, Deref, DerefMut, Constructor, Serialize,
    Deserialize,
)]
pub struct MetricValue(f64);

impl MetricValue {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialOrd for MetricValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - series identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, DerefMut, Display, Serialize, Deserialize)]
#[display(fmt = "SeriesId({})", _0)]
pub struct SeriesId(String);

impl SeriesId {
    pub fn new(id: String) -> Result<Self, String> {
        if id.is_empty() {
            return Err("Series id cannot be empty".to_string());
        }
        Ok(Self(id.to_lowercase()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SeriesId {
    fn from(value: &str) -> Self {
        Self(value.to_lowercase())
    }
}

/// Value Object - reporting granularity
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr,
    Serialize, Deserialize,
)]
pub enum TimeGrain {
    #[strum(serialize = "weekly")]
    #[serde(rename = "weekly")]
    Weekly,

    #[strum(serialize = "monthly")]
    #[serde(rename = "monthly")]
    Monthly,
}

impl TimeGrain {
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Self::Weekly => 52,
            Self::Monthly => 12,
        }
    }
}
