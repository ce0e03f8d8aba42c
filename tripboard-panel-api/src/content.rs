//! Content kinds a dashboard panel can host.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of content a panel can render.
///
/// The persisted form is the lowercase name (`"travel"`, `"calendar"`,
/// `"weather"`, `"map"`). A panel without content is modelled as
/// `Option<ContentKind>::None` rather than as an extra variant, so renderers
/// match on the unset case explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Trip overview: destination and notes
    Travel,
    /// Trip calendar
    Calendar,
    /// Weather at the destination
    Weather,
    /// Map of the destination
    Map,
}

impl ContentKind {
    /// Persisted name of the kind.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tripboard_panel_api::ContentKind;
    ///
    /// assert_eq!(ContentKind::Weather.as_str(), "weather");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Travel => "travel",
            ContentKind::Calendar => "calendar",
            ContentKind::Weather => "weather",
            ContentKind::Map => "map",
        }
    }

    /// Get a human-readable name for the kind.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tripboard_panel_api::ContentKind;
    ///
    /// assert_eq!(ContentKind::Map.display_name(), "Map");
    /// ```
    pub fn display_name(&self) -> &'static str {
        match self {
            ContentKind::Travel => "Travel",
            ContentKind::Calendar => "Calendar",
            ContentKind::Weather => "Weather",
            ContentKind::Map => "Map",
        }
    }

    /// Short icon shown in the panel header.
    pub fn icon(&self) -> &'static str {
        match self {
            ContentKind::Travel => "🛫",
            ContentKind::Calendar => "📅",
            ContentKind::Weather => "⛅",
            ContentKind::Map => "🗺",
        }
    }

    /// Get all content kinds, in default roster order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tripboard_panel_api::ContentKind;
    ///
    /// let kinds = ContentKind::all();
    /// assert_eq!(kinds.first(), Some(&ContentKind::Travel));
    /// assert_eq!(kinds.len(), 4);
    /// ```
    pub fn all() -> Vec<ContentKind> {
        vec![
            ContentKind::Travel,
            ContentKind::Calendar,
            ContentKind::Weather,
            ContentKind::Map,
        ]
    }

    /// Look up a kind by its persisted name. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<ContentKind> {
        Self::all().into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| anyhow::anyhow!("unknown content kind '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(ContentKind::Travel.display_name(), "Travel");
        assert_eq!(ContentKind::Calendar.display_name(), "Calendar");
        assert_eq!(ContentKind::Weather.display_name(), "Weather");
        assert_eq!(ContentKind::Map.display_name(), "Map");
    }

    #[test]
    fn test_parse_matches_as_str() {
        for kind in ContentKind::all() {
            assert_eq!(ContentKind::parse(kind.as_str()), Some(kind));
            assert_eq!(kind.to_string(), kind.as_str());
        }
        assert_eq!(ContentKind::parse("Travel"), None);
        assert_eq!(ContentKind::parse(""), None);
    }

    #[test]
    fn test_from_str() {
        let kind: ContentKind = "calendar".parse().unwrap();
        assert_eq!(kind, ContentKind::Calendar);

        let err = "radar".parse::<ContentKind>().unwrap_err();
        assert!(err.to_string().contains("radar"));
    }
}
