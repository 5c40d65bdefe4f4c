//! Scroll-driven page chrome: header, scroll-to-top button, parallax,
//! mobile menu and active-section state.

use crate::constants::{
    HEADER_HIDE_AFTER, HEADER_SCROLLED_AFTER, MOBILE_BREAKPOINT, PARALLAX_BASE_SPEED,
    PARALLAX_SPEED_STEP, SCROLL_TOP_AFTER,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderState {
    /// Page has left the top; the header gets its compact style.
    pub scrolled: bool,
    /// Scrolling down past the hide line; the header slides away.
    pub hidden: bool,
    /// The floating scroll-to-top button is shown.
    pub scroll_top: bool,
}

/// Floating "scroll to top" button, shown once the page is past `show_after`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTopButton {
    show_after: f64,
    visible: bool,
}

impl Default for ScrollTopButton {
    fn default() -> Self {
        Self::new(SCROLL_TOP_AFTER)
    }
}

impl ScrollTopButton {
    pub fn new(show_after: f64) -> Self {
        Self {
            show_after,
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns `true` when the button appeared or disappeared.
    pub fn update(&mut self, scroll_y: f64) -> bool {
        let visible = scroll_y > self.show_after;
        let changed = visible != self.visible;
        self.visible = visible;
        changed
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderScroll {
    scrolled_after: f64,
    hide_after: f64,
    last_y: f64,
    scroll_top: ScrollTopButton,
}

impl Default for HeaderScroll {
    fn default() -> Self {
        Self::new(HEADER_SCROLLED_AFTER, HEADER_HIDE_AFTER)
    }
}

impl HeaderScroll {
    pub fn new(scrolled_after: f64, hide_after: f64) -> Self {
        Self {
            scrolled_after,
            hide_after,
            last_y: 0.0,
            scroll_top: ScrollTopButton::default(),
        }
    }

    pub fn update(&mut self, scroll_y: f64) -> HeaderState {
        self.scroll_top.update(scroll_y);
        let state = HeaderState {
            scrolled: scroll_y > self.scrolled_after,
            hidden: scroll_y > self.last_y && scroll_y > self.hide_after,
            scroll_top: self.scroll_top.is_visible(),
        };
        self.last_y = scroll_y;
        state
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Value for the toggle button's `aria-expanded`.
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.open {
            "Close menu"
        } else {
            "Open menu"
        }
    }

    /// Escape closes the menu. Returns whether the key was used.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.open {
            self.open = false;
            return true;
        }
        false
    }

    /// The desktop layout has no collapsed menu.
    pub fn viewport_resized(&mut self, width: f64) {
        if width > MOBILE_BREAKPOINT {
            self.open = false;
        }
    }
}

/// Which section the navigation marks as current.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionTracker {
    active: Option<String>,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Feeds one intersection entry. Returns `true` when the active section
    /// changed.
    pub fn observe(&mut self, section_id: &str, is_intersecting: bool) -> bool {
        if !is_intersecting || self.active.as_deref() == Some(section_id) {
            return false;
        }
        self.active = Some(section_id.to_string());
        true
    }

    /// Whether a nav link `href` points at the active section.
    pub fn is_active(&self, href: &str) -> bool {
        self.active
            .as_deref()
            .map_or(false, |id| link_targets(href, id))
    }
}

/// `#id`, `index.html#id` and `/index.html#id` all address section `id`.
pub fn link_targets(href: &str, section_id: &str) -> bool {
    let Some((page, fragment)) = href.split_once('#') else {
        return false;
    };
    fragment == section_id && matches!(page, "" | "index.html" | "/index.html" | "/")
}

/// Scroll position that puts a section's top just under a fixed header.
pub fn scroll_target(section_top: f64, header_height: f64) -> f64 {
    (section_top - header_height).max(0.0)
}

/// Parallax layers move slower than the page, each one a little faster than
/// the layer before it.
pub fn parallax_speed(index: usize) -> f64 {
    PARALLAX_BASE_SPEED + index as f64 * PARALLAX_SPEED_STEP
}

/// Vertical translation in px for parallax layer `index`.
pub fn parallax_offset(scroll_y: f64, index: usize) -> f64 {
    -(scroll_y * parallax_speed(index))
}

/// Whether an element spanning `top..bottom` (viewport coordinates) overlaps
/// a viewport `viewport_height` tall. Off-screen layers are left alone.
pub fn in_viewport(top: f64, bottom: f64, viewport_height: f64) -> bool {
    bottom >= 0.0 && top <= viewport_height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_scrolled_and_hidden() {
        let mut header = HeaderScroll::default();
        assert_eq!(header.update(50.0), HeaderState::default());
        assert_eq!(
            header.update(150.0),
            HeaderState {
                scrolled: true,
                hidden: false,
                scroll_top: false,
            }
        );
        assert_eq!(
            header.update(400.0),
            HeaderState {
                scrolled: true,
                hidden: true,
                scroll_top: true,
            }
        );
        assert!(!header.update(380.0).hidden);
        assert!(!header.update(0.0).scroll_top);
    }

    #[test]
    fn test_scroll_top_button_reports_changes() {
        let mut button = ScrollTopButton::default();
        assert!(!button.update(300.0));
        assert!(!button.is_visible());
        assert!(button.update(301.0));
        assert!(!button.update(900.0));
        assert!(button.is_visible());
        assert!(button.update(120.0));
        assert!(!button.is_visible());
    }

    #[test]
    fn test_parallax_layers_move_at_their_own_speed() {
        assert_eq!(parallax_offset(0.0, 3), 0.0);
        assert!((parallax_offset(1000.0, 0) + 100.0).abs() < 1e-9);
        assert!((parallax_offset(1000.0, 2) + 200.0).abs() < 1e-9);
        assert!(parallax_speed(1) > parallax_speed(0));
    }

    #[test]
    fn test_in_viewport_edges() {
        assert!(in_viewport(-50.0, 10.0, 800.0));
        assert!(in_viewport(800.0, 1200.0, 800.0));
        assert!(!in_viewport(-300.0, -1.0, 800.0));
        assert!(!in_viewport(801.0, 1200.0, 800.0));
    }

    #[test]
    fn test_menu_closes_on_escape_and_wide_viewport() {
        let mut menu = MenuState::default();
        assert!(menu.toggle());
        assert_eq!(menu.aria_expanded(), "true");
        assert!(menu.handle_key("Escape"));
        assert!(!menu.handle_key("Escape"));

        menu.toggle();
        menu.viewport_resized(500.0);
        assert!(menu.is_open());
        menu.viewport_resized(1024.0);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_section_tracker_reports_changes_only() {
        let mut tracker = SectionTracker::new();
        assert!(tracker.observe("about", true));
        assert!(!tracker.observe("about", true));
        assert!(!tracker.observe("services", false));
        assert_eq!(tracker.active(), Some("about"));
        assert!(tracker.is_active("#about"));
        assert!(tracker.is_active("/index.html#about"));
        assert!(!tracker.is_active("#services"));
    }

    #[test]
    fn test_link_targets() {
        assert!(link_targets("index.html#home", "home"));
        assert!(!link_targets("about.html#home", "home"));
        assert!(!link_targets("home", "home"));
    }

    #[test]
    fn test_scroll_target_never_negative() {
        assert_eq!(scroll_target(500.0, 80.0), 420.0);
        assert_eq!(scroll_target(20.0, 80.0), 0.0);
    }
}
