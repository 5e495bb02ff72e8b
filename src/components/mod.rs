//! UI Components
//!
//! Page sections and the shared pieces they are built from.

mod section_header;
mod category_filter;
mod show_more_button;
mod project_card;
mod project_dialog;
mod projects_grid;
mod experience_timeline;
mod team_projects;
mod nav_header;
mod hero_section;
mod bio_section;
mod skills_section;
mod testimonials_section;
mod contact_section;
mod footer;

pub use section_header::SectionHeader;
pub use category_filter::CategoryFilter;
pub use show_more_button::ShowMoreButton;
pub use project_card::{ProjectCard, TechBadges};
pub use project_dialog::ProjectDialog;
pub use projects_grid::ProjectsGrid;
pub use experience_timeline::ExperienceTimeline;
pub use team_projects::TeamProjects;
pub use nav_header::NavHeader;
pub use hero_section::HeroSection;
pub use bio_section::BioSection;
pub use skills_section::SkillsSection;
pub use testimonials_section::TestimonialsSection;
pub use contact_section::ContactSection;
pub use footer::Footer;
