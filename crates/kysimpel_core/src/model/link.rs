//! Favorite link records.

use super::validation::NO_URL;
use super::{Entity, EntityId};
use serde::{Deserialize, Serialize};

/// Source a favorite link points at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkCategory {
    Classroom,
    Github,
    Youtube,
    Drive,
    #[default]
    Other,
}

impl LinkCategory {
    pub const ALL: [Self; 5] = [
        Self::Classroom,
        Self::Github,
        Self::Youtube,
        Self::Drive,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Classroom => "classroom",
            Self::Github => "github",
            Self::Youtube => "youtube",
            Self::Drive => "drive",
            Self::Other => "other",
        }
    }

    /// Parses a stored token; unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Classroom => "Google Classroom",
            Self::Github => "GitHub",
            Self::Youtube => "YouTube",
            Self::Drive => "Google Drive",
            Self::Other => "Lainnya",
        }
    }
}

/// Bookmarked external address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteLink {
    pub id: EntityId,
    pub title: String,
    /// Absolute URL, or `-` when the user left it blank.
    pub url: String,
    #[serde(default)]
    pub category: LinkCategory,
    pub created_at: i64,
}

impl FavoriteLink {
    /// False for the `-` placeholder.
    pub fn has_url(&self) -> bool {
        let url = self.url.trim();
        !url.is_empty() && url != NO_URL
    }
}

impl Entity for FavoriteLink {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> i64 {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::{FavoriteLink, LinkCategory};

    #[test]
    fn dash_url_means_no_link() {
        let link = FavoriteLink {
            id: "l1".to_string(),
            title: "Catatan kelas".to_string(),
            url: "-".to_string(),
            category: LinkCategory::Classroom,
            created_at: 1,
        };
        assert!(!link.has_url());
        assert_eq!(LinkCategory::parse(" drive "), Some(LinkCategory::Drive));
        assert_eq!(LinkCategory::parse("twitter"), None);

        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(json["category"], "classroom");
        assert_eq!(json["createdAt"], 1);
    }
}
