//! Stops to visit: an identified location with optional descriptive data.

use std::collections::BTreeMap;

use crate::Coordinate;

/// A stop to be visited on a route.
///
/// Identifiers must be unique within a single optimisation call. Metadata is
/// free-form and carried through untouched; it is ordered so serialised
/// output is stable.
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
/// use waypost_core::{Coordinate, RoutePoint};
///
/// let stop = RoutePoint::new("aq-g5-001", Coordinate::new(0.35, 32.58))
///     .with_name("Makerere Hill")
///     .with_metadata("site", "Kampala");
///
/// assert_eq!(stop.id, "aq-g5-001");
/// assert_eq!(stop.name.as_deref(), Some("Makerere Hill"));
/// assert_eq!(stop.metadata.get("site").map(String::as_str), Some("Kampala"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutePoint {
    /// Caller-supplied identifier, e.g. a device id.
    pub id: String,
    /// Where the stop is.
    pub location: Coordinate,
    /// Optional human-readable label.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub name: Option<String>,
    /// Arbitrary descriptive fields.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "BTreeMap::is_empty")
    )]
    pub metadata: BTreeMap<String, String>,
}

impl RoutePoint {
    /// Construct a stop with no name or metadata.
    ///
    /// # Examples
    /// ```
    /// use waypost_core::{Coordinate, RoutePoint};
    ///
    /// let stop = RoutePoint::new("a", Coordinate::new(0.0, 0.0));
    /// assert!(stop.name.is_none());
    /// assert!(stop.metadata.is_empty());
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, location: Coordinate) -> Self {
        Self {
            id: id.into(),
            location,
            name: None,
            metadata: BTreeMap::new(),
        }
    }

    /// Attach a display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Insert a metadata entry, replacing any previous value for `key`.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
