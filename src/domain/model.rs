use serde::{Deserialize, Serialize};

/// Separator placed between feature names inside one combination.
pub const DELIMITER: &str = ",";

/// Order in which feature names are fed to the enumerator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum FeatureOrder {
    /// As written in the manifest.
    #[default]
    Declared,
    /// Byte-wise lexicographic.
    Sorted,
}

/// Ordered, immutable collection of declared feature names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureSet {
    names: Vec<String>,
}

impl FeatureSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn ordered(mut self, order: FeatureOrder) -> Self {
        if order == FeatureOrder::Sorted {
            self.names.sort();
        }
        self
    }
}

/// One subset of a [`FeatureSet`], members kept in feature-set order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination<'a> {
    members: Vec<&'a str>,
}

impl<'a> Combination<'a> {
    pub fn new(members: Vec<&'a str>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[&'a str] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Comma-joined member names; the empty combination renders as `""`.
    pub fn render(&self) -> String {
        self.members.join(DELIMITER)
    }
}

/// Rendered powerset, in enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CombinationList {
    entries: Vec<String>,
}

impl CombinationList {
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.entries)
    }
}

impl<'a> FromIterator<Combination<'a>> for CombinationList {
    fn from_iter<T: IntoIterator<Item = Combination<'a>>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().map(|c| c.render()).collect(),
        }
    }
}
