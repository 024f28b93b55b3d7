use chrono::{Datelike, Utc};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub const CONTENT_FILE: &str = "portfolio.json";
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

static PORTFOLIO: LazyLock<Portfolio> = LazyLock::new(|| {
    Portfolio::load().unwrap_or_else(|e| {
        log::error!("falling back to empty portfolio: {e}");
        Portfolio::default()
    })
});

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Content file is not valid UTF-8")]
    Encoding,
    #[error("Couldn't parse content: {0}")]
    ParseError(String),
    #[error("Skill '{skill}' has percentage {percentage}, expected 0-100")]
    PercentageOutOfRange { skill: String, percentage: u8 },
}

/// Icons rendered through the icon font shipped with the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Monitor,
    Database,
    Brain,
    Award,
    School,
    File,
    Mail,
    Phone,
    Location,
    Github,
    Linkedin,
    Leetcode,
    External,
    Arrow,
}

impl Icon {
    pub fn class(self) -> &'static str {
        match self {
            Self::Monitor => "extra-monitor",
            Self::Database => "extra-database",
            Self::Brain => "extra-brain",
            Self::Award => "extra-award",
            Self::School => "extra-school",
            Self::File => "extra-file",
            Self::Mail => "extra-email",
            Self::Phone => "extra-phone",
            Self::Location => "extra-location",
            Self::Github => "devicon-github-plain",
            Self::Linkedin => "devicon-linkedin-plain",
            Self::Leetcode => "extra-leetcode",
            Self::External => "extra-link",
            Self::Arrow => "extra-arrow-right",
        }
    }
}

/// Where a link control points. Empty URLs become inert placeholders
/// instead of broken links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    External(String),
    Inert,
}

impl LinkTarget {
    pub fn from_optional(url: Option<&str>) -> Self {
        match url.map(str::trim) {
            Some(u) if !u.is_empty() => Self::External(u.to_string()),
            _ => Self::Inert,
        }
    }

    pub fn is_inert(&self) -> bool {
        matches!(self, Self::Inert)
    }

    pub fn href(&self) -> String {
        match self {
            Self::External(url) => url.clone(),
            Self::Inert => "#".to_string(),
        }
    }

    pub fn target(&self) -> Option<&'static str> {
        match self {
            Self::External(_) => Some("_blank"),
            Self::Inert => None,
        }
    }

    pub fn rel(&self) -> Option<&'static str> {
        match self {
            Self::External(_) => Some("noopener noreferrer"),
            Self::Inert => None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub full_name: String,
    pub initial: String,
    pub badge: String,
    pub tagline: String,
    pub about_heading: String,
    pub about: Vec<String>,
    pub blurb: String,
    pub cv_path: String,
    pub hero_image: Option<String>,
    pub about_image: Option<String>,
    pub contact_intro: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub label: String,
    pub percentage: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
}

impl Project {
    /// The source link is always rendered, inert when there is no repository.
    pub fn source_link(&self) -> LinkTarget {
        LinkTarget::from_optional(self.github_url.as_deref())
    }

    /// The demo link is only rendered when a demo exists.
    pub fn demo_link(&self) -> Option<LinkTarget> {
        match LinkTarget::from_optional(self.demo_url.as_deref()) {
            LinkTarget::Inert => None,
            target => Some(target),
        }
    }

    pub fn image_src(&self) -> &str {
        image_or_placeholder(self.image.as_deref())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub field: String,
    pub period: String,
    pub institution: String,
    pub location: String,
    pub grade: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub organization: String,
    pub period: String,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactChannel {
    pub icon: Icon,
    pub label: String,
    pub value: String,
    /// Tailwind gradient stops for the icon tile, e.g. `from-teal-500 to-teal-300`.
    pub gradient: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub icon: Icon,
    pub label: String,
    pub url: String,
}

impl SocialLink {
    pub fn target(&self) -> LinkTarget {
        LinkTarget::from_optional(Some(&self.url))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub education: Education,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    pub contact: Vec<ContactChannel>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

impl Portfolio {
    /// Reads and validates the embedded content file.
    pub fn load() -> Result<Self, ContentError> {
        let file = Assets::get(CONTENT_FILE)
            .ok_or_else(|| ContentError::NotFound(CONTENT_FILE.to_string()))?;
        let text = std::str::from_utf8(&file.data).map_err(|_| ContentError::Encoding)?;
        Self::parse(text)
    }

    pub fn parse(text: &str) -> Result<Self, ContentError> {
        let portfolio: Self =
            serde_json::from_str(text).map_err(|e| ContentError::ParseError(e.to_string()))?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if let Some(skill) = self.skills.iter().find(|s| s.percentage > 100) {
            return Err(ContentError::PercentageOutOfRange {
                skill: skill.label.clone(),
                percentage: skill.percentage,
            });
        }
        Ok(())
    }
}

/// Process-wide content, parsed on first use.
pub fn portfolio() -> &'static Portfolio {
    &PORTFOLIO
}

pub fn image_or_placeholder(path: Option<&str>) -> &str {
    match path {
        Some(p) if !p.trim().is_empty() => p,
        _ => PLACEHOLDER_IMAGE,
    }
}

/// Current year for the footer, read when the page renders.
pub fn copyright_year() -> i32 {
    Utc::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(github_url: Option<&str>, demo_url: Option<&str>) -> Project {
        Project {
            title: "Test".to_string(),
            description: "A test project".to_string(),
            tags: vec!["Rust".to_string()],
            image: None,
            github_url: github_url.map(String::from),
            demo_url: demo_url.map(String::from),
        }
    }

    #[test]
    fn test_embedded_content_is_valid() {
        let portfolio = Portfolio::load().expect("embedded content should load");
        assert_eq!(portfolio.profile.name, "Kumara Swamy");
        assert_eq!(portfolio.skills.len(), 5);
        assert_eq!(portfolio.projects.len(), 9);
        assert_eq!(portfolio.tech.len(), 5);
        assert!(portfolio.skills.iter().all(|s| s.percentage <= 100));
    }

    #[test]
    fn test_shipped_project_without_repository() {
        let portfolio = Portfolio::load().expect("embedded content should load");
        let shop = portfolio
            .projects
            .iter()
            .find(|p| p.title == "E-commerce Website")
            .expect("e-commerce project should exist");
        assert!(shop.source_link().is_inert());
        assert!(shop.demo_link().is_some());
    }

    #[test]
    fn test_empty_github_url_is_inert() {
        let p = project(Some(""), None);
        let source = p.source_link();
        assert_eq!(source, LinkTarget::Inert);
        assert_eq!(source.href(), "#");
        assert_eq!(source.target(), None);
        assert_eq!(source.rel(), None);
        assert!(p.demo_link().is_none());
    }

    #[test]
    fn test_external_links() {
        let p = project(
            Some("https://github.com/example/repo"),
            Some(" https://example.com "),
        );
        let source = p.source_link();
        assert_eq!(source.href(), "https://github.com/example/repo");
        assert_eq!(source.target(), Some("_blank"));
        assert_eq!(source.rel(), Some("noopener noreferrer"));
        assert_eq!(
            p.demo_link(),
            Some(LinkTarget::External("https://example.com".to_string()))
        );
    }

    #[test]
    fn test_missing_image_uses_placeholder() {
        let mut p = project(None, None);
        assert_eq!(p.image_src(), PLACEHOLDER_IMAGE);
        p.image = Some("/shot.png".to_string());
        assert_eq!(p.image_src(), "/shot.png");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Portfolio::parse("{ not json"),
            Err(ContentError::ParseError(_))
        ));

        let bad_skill = r#"{
            "profile": {
                "name": "n", "full_name": "n", "initial": "n", "badge": "b",
                "tagline": "t", "about_heading": "a", "about": [], "blurb": "b",
                "cv_path": "/cv.pdf", "contact_intro": "c"
            },
            "skills": [{ "label": "Rust", "percentage": 120 }]
        }"#;
        assert_eq!(
            Portfolio::parse(bad_skill).unwrap_err(),
            ContentError::PercentageOutOfRange {
                skill: "Rust".to_string(),
                percentage: 120,
            }
        );
    }

    #[test]
    fn test_copyright_year_follows_clock() {
        assert_eq!(copyright_year(), Utc::now().year());
    }
}
