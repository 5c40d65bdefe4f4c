pub mod carousel;
pub mod constants;
pub mod counter;
pub mod easing;
pub mod forms;
pub mod lightbox;
pub mod navigation;
pub mod notification;
pub mod reveal;
pub mod theme;
pub mod validation;

pub use carousel::{CarouselConfig, CarouselController, CarouselState};
pub use theme::Theme;
