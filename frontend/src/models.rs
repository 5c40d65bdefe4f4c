use serde::{Deserialize, Serialize};
use vitrine_shared::lightbox::{GalleryImage, ProjectDetails};
use vitrine_shared::CarouselConfig;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub gallery: Vec<GalleryImage>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: u64,
    #[serde(default)]
    pub suffix: String,
}

/// Everything the home page renders, loaded from `content/site.json`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub brand: String,
    pub tagline: String,
    pub carousel: CarouselConfig,
    pub stats: Vec<Stat>,
    pub services: Vec<Service>,
    pub projects: Vec<ProjectDetails>,
    pub testimonials: Vec<Testimonial>,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            brand: "Vitrine".to_string(),
            tagline: String::new(),
            carousel: CarouselConfig::default(),
            stats: Vec::new(),
            services: Vec::new(),
            projects: Vec::new(),
            testimonials: Vec::new(),
        }
    }
}

impl SiteContent {
    /// Distinct project categories in first-seen order.
    pub fn project_categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for project in &self.projects {
            if !project.category.is_empty() && !categories.contains(&project.category) {
                categories.push(project.category.clone());
            }
        }
        categories
    }

    pub fn service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }
}
