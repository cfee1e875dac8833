use serde::{de, Deserialize, Deserializer, Serialize};

use crate::traits::PointSource;

/// One sample of the hidden polynomial: its y-value written in `base`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplePoint {
    #[serde(deserialize_with = "deserialize_base")]
    pub base: u32,
    pub value: String,
}

impl SamplePoint {
    pub fn new(base: u32, value: impl Into<String>) -> Self {
        Self {
            base,
            value: value.into(),
        }
    }
}

impl PointSource for SamplePoint {
    fn base(&self) -> u32 {
        self.base
    }

    fn digits(&self) -> &str {
        &self.value
    }
}

/// Bases show up both as JSON numbers and as decimal strings.
fn deserialize_base<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BaseRepr {
        Number(u32),
        Text(String),
    }

    match BaseRepr::deserialize(deserializer)? {
        BaseRepr::Number(base) => Ok(base),
        BaseRepr::Text(text) => text.trim().parse().map_err(|_| {
            de::Error::custom(format!("base {text:?} is not an unsigned integer"))
        }),
    }
}
