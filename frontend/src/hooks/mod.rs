pub mod form_state;
pub mod intersection;
pub mod use_navigation;
pub mod use_parallax;
pub mod use_reveal;
pub mod use_theme;

pub use form_state::*;
pub use use_navigation::*;
pub use use_parallax::*;
pub use use_reveal::*;
pub use use_theme::*;
