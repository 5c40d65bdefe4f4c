pub mod carousel;
pub mod forms;
pub mod gallery;
pub mod projects;
pub mod stat_counter;

pub use carousel::Carousel;
pub use forms::{CallbackModal, ContactFormView, NewsletterForm, ServiceEnquiryForm};
pub use gallery::ServiceGallery;
pub use projects::Projects;
pub use stat_counter::StatCounter;
