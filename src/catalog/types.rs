use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use time::{Date, macros::format_description};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Achievement,
    Publication,
    Project,
    Service,
    Media,
    Certificate,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Achievement,
        Category::Publication,
        Category::Project,
        Category::Service,
        Category::Media,
        Category::Certificate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Achievement => "achievement",
            Category::Publication => "publication",
            Category::Project => "project",
            Category::Service => "service",
            Category::Media => "media",
            Category::Certificate => "certificate",
        }
    }

    /// Path segment of the category's listing page.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Achievement => "achievements",
            Category::Publication => "publications",
            Category::Project => "projects",
            Category::Service => "service",
            Category::Media => "media",
            Category::Certificate => "certificates",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Achievement => "Achievements",
            Category::Publication => "Publications",
            Category::Project => "Projects",
            Category::Service => "Service",
            Category::Media => "Media",
            Category::Certificate => "Certificates",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.slug() == slug)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| format!("unknown category '{value}'"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Verified,
    Unverified,
    Pending,
}

impl VerificationStatus {
    pub const ALL: [VerificationStatus; 3] = [
        VerificationStatus::Verified,
        VerificationStatus::Unverified,
        VerificationStatus::Pending,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Verified => "verified",
            VerificationStatus::Unverified => "unverified",
            VerificationStatus::Pending => "pending",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VerificationStatus::Verified => "Verified",
            VerificationStatus::Unverified => "Unverified",
            VerificationStatus::Pending => "Pending",
        }
    }
}

impl FromStr for VerificationStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| format!("unknown verification status '{value}'"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerifiedBy {
    #[serde(rename = "institution")]
    Institution,
    #[serde(rename = "self")]
    SelfAttested,
    #[serde(rename = "third-party")]
    ThirdParty,
}

impl VerifiedBy {
    pub fn label(&self) -> &'static str {
        match self {
            VerifiedBy::Institution => "Institution",
            VerifiedBy::SelfAttested => "Self",
            VerifiedBy::ThirdParty => "Third party",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Id,
    En,
}

impl Language {
    pub fn label(&self) -> &'static str {
        match self {
            Language::Id => "ID",
            Language::En => "EN",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "Tinggi",
            Priority::Medium => "Sedang",
            Priority::Low => "Rendah",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceKind {
    Certificate,
    Photo,
    Link,
    Video,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceLink {
    #[serde(rename = "type")]
    pub kind: EvidenceKind,
    pub url: String,
    pub label: String,
}

/// Calendar date of an item. Accepts `YYYY-MM-DD` and full RFC 3339
/// timestamps, keeping only the date part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemDate(Date);

impl ItemDate {
    pub fn new(date: Date) -> Self {
        Self(date)
    }

    pub fn parse(text: &str) -> Result<Self, time::error::Parse> {
        let text = text.trim();
        let date_part = text.get(..10).unwrap_or(text);
        Date::parse(date_part, format_description!("[year]-[month]-[day]")).map(Self)
    }

    pub fn date(&self) -> Date {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }
}

impl fmt::Display for ItemDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            u8::from(self.0.month()),
            self.0.day()
        )
    }
}

impl Serialize for ItemDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ItemDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        ItemDate::parse(&text)
            .map_err(|err| de::Error::custom(format!("invalid date '{text}': {err}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: String,
    pub title: String,
    pub date: ItemDate,
    pub category: Category,
    pub r#type: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub impact: String,
    #[serde(default)]
    pub evidence_links: Vec<EvidenceLink>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub verified_status: VerificationStatus,
    pub verified_by: VerifiedBy,
    pub language: Language,
    pub priority: Priority,
}

impl PortfolioItem {
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Websites {
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub scholar: Option<String>,
    #[serde(default)]
    pub blog: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentPosition {
    pub title: String,
    pub organization: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub photo: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub websites: Websites,
    #[serde(default)]
    pub expertise: Vec<String>,
    #[serde(default)]
    pub education: Vec<Education>,
    pub current_position: CurrentPosition,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_achievements: u64,
    pub total_publications: u64,
    pub total_projects: u64,
    pub total_certificates: u64,
    pub years_active: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    pub profile: Profile,
    pub items: Vec<PortfolioItem>,
    pub statistics: Statistics,
    pub last_updated: String,
}
