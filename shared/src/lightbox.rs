//! Modal state for image galleries and project details.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

/// An open-able gallery with wraparound paging.
#[derive(Debug, Clone, PartialEq)]
pub struct Lightbox<T> {
    items: Vec<T>,
    index: usize,
    open: bool,
}

impl<T> Default for Lightbox<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: 0,
            open: false,
        }
    }
}

impl<T> Lightbox<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    pub fn open(&mut self, items: Vec<T>) {
        self.items = items;
        self.index = 0;
        self.open = true;
    }

    pub fn close(&mut self) {
        self.items.clear();
        self.index = 0;
        self.open = false;
    }

    pub fn next(&mut self) {
        if !self.items.is_empty() {
            self.index = (self.index + 1) % self.items.len();
        }
    }

    pub fn prev(&mut self) {
        let len = self.items.len();
        if len > 0 {
            self.index = (self.index + len - 1) % len;
        }
    }

    /// Out-of-range selections are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.items.len() {
            self.index = index;
        }
    }

    /// Escape closes, arrows page. Keys are ignored while closed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.open {
            return false;
        }
        match key {
            "Escape" => self.close(),
            "ArrowRight" => self.next(),
            "ArrowLeft" => self.prev(),
            _ => return false,
        }
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectDetails {
    pub title: String,
    pub description: String,
    pub category: String,
    /// Comma separated.
    pub tags: String,
    pub link: String,
}

impl Default for ProjectDetails {
    fn default() -> Self {
        Self {
            title: "Project".to_string(),
            description: String::new(),
            category: String::new(),
            tags: String::new(),
            link: "#".to_string(),
        }
    }
}

impl ProjectDetails {
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// `Tags: a • b`, or empty when there are none.
    pub fn tags_label(&self) -> String {
        let tags = self.tag_list();
        if tags.is_empty() {
            String::new()
        } else {
            format!("Tags: {}", tags.join(" • "))
        }
    }
}

/// Portfolio filter buttons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "" | "all" => Self::All,
            other => Self::Category(other.to_string()),
        }
    }

    pub fn shows(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(wanted) => wanted == category,
        }
    }
}
