//! Content Models
//!
//! Data structures matching the content documents in `content/*.json`.

use std::collections::BTreeMap;

use leptos_disclosure::CatalogItem;
use serde::{Deserialize, Serialize};

/// Whole page content for one locale
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub nav: Vec<NavItem>,
    pub labels: Labels,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub team_projects: Vec<TeamProject>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub role_badge: String,
    pub tagline: String,
    pub cta: String,
    pub photo: String,
    pub logo: String,
    /// Markdown
    pub bio: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub hero_stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Header navigation entry, `id` is the target section's element id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: String,
    pub label: String,
}

/// UI copy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Labels {
    pub about_kicker: String,
    pub key_highlights: String,
    pub skills_kicker: String,
    pub skills_title: String,
    pub skills_intro: String,
    pub projects_kicker: String,
    pub projects_title: String,
    pub projects_intro: String,
    pub filter_by: String,
    pub featured_heading: String,
    pub show_more: String,
    pub empty_filter: String,
    pub tech_stack: String,
    pub description: String,
    pub objectives: String,
    pub results: String,
    pub view_demo: String,
    pub view_code: String,
    pub close: String,
    pub experience_kicker: String,
    pub experience_title: String,
    pub experience_intro: String,
    pub experience_more: String,
    pub achievements: String,
    pub team_kicker: String,
    pub team_title: String,
    pub team_intro: String,
    pub team_size: String,
    pub nda: String,
    pub testimonials_kicker: String,
    pub testimonials_title: String,
    pub testimonials_intro: String,
    pub contact_kicker: String,
    pub contact_title: String,
    pub contact_intro: String,
    pub form_title: String,
    pub form_name: String,
    pub form_name_placeholder: String,
    pub form_email: String,
    pub form_email_placeholder: String,
    pub form_subject: String,
    pub form_subject_placeholder: String,
    pub form_message: String,
    pub form_message_placeholder: String,
    pub form_submit: String,
    pub footer_rights: String,
    /// Display names for category tags; tags without an entry are shown as-is
    #[serde(default)]
    pub category_names: BTreeMap<String, String>,
}

impl Labels {
    pub fn category_name(&self, tag: &str) -> String {
        self.category_names
            .get(tag)
            .cloned()
            .unwrap_or_else(|| tag.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Languages,
    Frameworks,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::Languages,
        SkillCategory::Frameworks,
        SkillCategory::Tools,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Languages => "languages",
            SkillCategory::Frameworks => "frameworks",
            SkillCategory::Tools => "tools",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// 0..=100
    pub proficiency: u8,
    pub category: SkillCategory,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

/// Gallery entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub featured: bool,
    /// Phone screenshots are shown uncropped
    #[serde(default)]
    pub portrait: bool,
    #[serde(default)]
    pub objectives: Option<String>,
    #[serde(default)]
    pub results: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub code_url: Option<String>,
}

impl Project {
    pub fn demo_link(&self) -> Option<&str> {
        non_empty(&self.demo_url)
    }

    pub fn code_link(&self) -> Option<&str> {
        non_empty(&self.code_url)
    }
}

impl CatalogItem for Project {
    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> Option<&str> {
        non_empty(&self.category)
    }

    fn is_featured(&self) -> bool {
        self.featured
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceKind {
    Professional,
    Freelance,
    Personal,
}

impl ExperienceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceKind::Professional => "professional",
            ExperienceKind::Freelance => "freelance",
            ExperienceKind::Personal => "personal",
        }
    }
}

/// Timeline entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub role: String,
    pub period: String,
    pub location: String,
    pub kind: ExperienceKind,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl CatalogItem for Experience {
    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> Option<&str> {
        Some(self.kind.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamProjectKind {
    Enterprise,
    Freelance,
    Collaboration,
}

impl TeamProjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamProjectKind::Enterprise => "enterprise",
            TeamProjectKind::Freelance => "freelance",
            TeamProjectKind::Collaboration => "collaboration",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamProject {
    pub id: String,
    pub title: String,
    pub company: String,
    pub description: String,
    pub role: String,
    pub period: String,
    pub team_size: String,
    pub image: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    pub kind: TeamProjectKind,
    #[serde(default)]
    pub project_url: Option<String>,
    #[serde(default)]
    pub nda: bool,
}

impl TeamProject {
    /// NDA projects never expose a link
    pub fn public_link(&self) -> Option<&str> {
        if self.nda {
            None
        } else {
            non_empty(&self.project_url)
        }
    }
}

impl CatalogItem for TeamProject {
    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> Option<&str> {
        Some(self.kind.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    /// 1..=5
    pub rating: u8,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub project_type: Option<String>,
}

impl Testimonial {
    /// Avatar fallback: first letter of each name part, at most two
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub href: String,
    /// SVG path data, 24x24 viewbox
    pub icon: String,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(category: Option<&str>) -> Project {
        Project {
            id: "p".to_string(),
            title: "Title".to_string(),
            description: String::new(),
            image: String::new(),
            technologies: Vec::new(),
            category: category.map(str::to_string),
            featured: false,
            portrait: false,
            objectives: None,
            results: None,
            demo_url: Some(String::new()),
            code_url: Some("https://example.com".to_string()),
        }
    }

    #[test]
    fn test_blank_category_is_uncategorised() {
        assert_eq!(project(Some("  ")).category(), None);
        assert_eq!(project(Some("web")).category(), Some("web"));
        assert_eq!(project(None).category(), None);
    }

    #[test]
    fn test_empty_links_are_hidden() {
        let p = project(None);
        assert_eq!(p.demo_link(), None);
        assert_eq!(p.code_link(), Some("https://example.com"));
    }

    #[test]
    fn test_initials() {
        let t = Testimonial {
            id: "1".to_string(),
            name: "amélie rousseau dupont".to_string(),
            role: String::new(),
            company: String::new(),
            content: String::new(),
            rating: 5,
            avatar: None,
            project_type: None,
        };
        assert_eq!(t.initials(), "AR");
    }

    #[test]
    fn test_kind_tags_match_serde_names() {
        let kind: ExperienceKind = serde_json::from_str("\"freelance\"").unwrap();
        assert_eq!(kind.as_str(), "freelance");
        let kind: TeamProjectKind = serde_json::from_str("\"collaboration\"").unwrap();
        assert_eq!(kind.as_str(), "collaboration");
    }
}
