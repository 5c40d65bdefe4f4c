use vitrine_shared::carousel::RenderSink;
use web_sys::HtmlElement;

const DRAGGING_CLASS: &str = "is-dragging";

/// Draws the carousel by translating its track element.
pub struct DomRenderSink {
    viewport: HtmlElement,
    track: HtmlElement,
}

impl DomRenderSink {
    pub fn new(viewport: HtmlElement, track: HtmlElement) -> Self {
        Self { viewport, track }
    }

    pub fn measure(&self) -> f64 {
        self.viewport.client_width() as f64
    }
}

impl RenderSink for DomRenderSink {
    fn viewport_width(&self) -> f64 {
        self.measure()
    }

    fn set_offset(&mut self, px: f64) {
        let _ = self
            .track
            .style()
            .set_property("transform", &format!("translate3d({}px, 0, 0)", px));
    }

    fn set_transition_enabled(&mut self, enabled: bool) {
        let classes = self.track.class_list();
        let _ = if enabled {
            classes.remove_1(DRAGGING_CLASS)
        } else {
            classes.add_1(DRAGGING_CLASS)
        };
    }
}
