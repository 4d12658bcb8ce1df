use std::convert::Infallible;
use std::fmt::Display;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};

/// Sentinel label marking a sample as negative (non-BGC).
pub const NEG_CLASS_NAME: &str = "_neg_";

/// Class label of one sample in a collection: either the negative
/// sentinel or the name of a BGC product class.
#[derive(Eq, Hash, PartialEq, Clone, Debug, PartialOrd, Ord)]
pub enum SampleClass {
    /// Negative (non-BGC) sample.
    Negative,
    /// Positive sample annotated with a product class name.
    Positive(String),
}

impl SampleClass {
    pub fn is_negative(&self) -> bool {
        matches!(self, SampleClass::Negative)
    }

    /// Whether this label names the given positive class.
    pub fn matches(
        &self,
        class_name: &str,
    ) -> bool {
        match self {
            SampleClass::Positive(name) => name == class_name,
            SampleClass::Negative => false,
        }
    }
}

impl FromStr for SampleClass {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == NEG_CLASS_NAME {
            Ok(SampleClass::Negative)
        }
        else {
            Ok(SampleClass::Positive(s.to_string()))
        }
    }
}

impl Display for SampleClass {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            SampleClass::Negative => write!(f, "{}", NEG_CLASS_NAME),
            SampleClass::Positive(name) => write!(f, "{}", name),
        }
    }
}

impl Serialize for SampleClass {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer, {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SampleClass {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>, {
        let s = String::deserialize(deserializer)?;
        std::str::FromStr::from_str(&s).map_err(serde::de::Error::custom)
    }
}
