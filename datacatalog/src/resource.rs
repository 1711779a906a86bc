//! Hierarchical resource names used by the Data Catalog API.
//!
//! ```
//! use google_cloud_datacatalog::resource::{EntryName, LocationName};
//!
//! let entry = LocationName::new("my-project", "us-central1")
//!     .entry_group("my_group")
//!     .entry("my_entry");
//! assert_eq!(
//!     "projects/my-project/locations/us-central1/entryGroups/my_group/entries/my_entry",
//!     entry.to_string()
//! );
//! let parsed: EntryName = entry.to_string().parse().unwrap();
//! assert_eq!(entry, parsed);
//! ```
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Data Catalog stores its metadata in this region.
pub const DEFAULT_LOCATION: &str = "us-central1";

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid {kind} name: {name}")]
    InvalidFormat { kind: &'static str, name: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LocationName {
    pub project: String,
    pub location: String,
}

impl LocationName {
    pub fn new(project: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            location: location.into(),
        }
    }

    pub fn entry_group(&self, entry_group: impl Into<String>) -> EntryGroupName {
        EntryGroupName {
            project: self.project.clone(),
            location: self.location.clone(),
            entry_group: entry_group.into(),
        }
    }
}

impl Display for LocationName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "projects/{}/locations/{}", self.project, self.location)
    }
}

impl FromStr for LocationName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match segments(s, &["projects", "locations"]) {
            Some(v) => Ok(Self::new(v[0], v[1])),
            None => Err(ParseError::InvalidFormat {
                kind: "location",
                name: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EntryGroupName {
    pub project: String,
    pub location: String,
    pub entry_group: String,
}

impl EntryGroupName {
    pub fn new(project: impl Into<String>, location: impl Into<String>, entry_group: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            location: location.into(),
            entry_group: entry_group.into(),
        }
    }

    pub fn location(&self) -> LocationName {
        LocationName::new(&self.project, &self.location)
    }

    pub fn entry(&self, entry: impl Into<String>) -> EntryName {
        EntryName {
            project: self.project.clone(),
            location: self.location.clone(),
            entry_group: self.entry_group.clone(),
            entry: entry.into(),
        }
    }
}

impl Display for EntryGroupName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/entryGroups/{}", self.location(), self.entry_group)
    }
}

impl FromStr for EntryGroupName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match segments(s, &["projects", "locations", "entryGroups"]) {
            Some(v) => Ok(Self::new(v[0], v[1], v[2])),
            None => Err(ParseError::InvalidFormat {
                kind: "entry group",
                name: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EntryName {
    pub project: String,
    pub location: String,
    pub entry_group: String,
    pub entry: String,
}

impl EntryName {
    pub fn new(
        project: impl Into<String>,
        location: impl Into<String>,
        entry_group: impl Into<String>,
        entry: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            location: location.into(),
            entry_group: entry_group.into(),
            entry: entry.into(),
        }
    }

    pub fn entry_group(&self) -> EntryGroupName {
        EntryGroupName::new(&self.project, &self.location, &self.entry_group)
    }
}

impl Display for EntryName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/entries/{}", self.entry_group(), self.entry)
    }
}

impl FromStr for EntryName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match segments(s, &["projects", "locations", "entryGroups", "entries"]) {
            Some(v) => Ok(Self::new(v[0], v[1], v[2], v[3])),
            None => Err(ParseError::InvalidFormat {
                kind: "entry",
                name: s.to_string(),
            }),
        }
    }
}

/// Splits `collection/id/...` pairs and returns the ids when every collection matches.
fn segments<'a>(name: &'a str, collections: &[&str]) -> Option<Vec<&'a str>> {
    let parts: Vec<&str> = name.split('/').collect();
    if parts.len() != collections.len() * 2 {
        return None;
    }
    let mut ids = Vec::with_capacity(collections.len());
    for (pair, collection) in parts.chunks(2).zip(collections) {
        if pair[0] != *collection || pair[1].is_empty() {
            return None;
        }
        ids.push(pair[1]);
    }
    Some(ids)
}
