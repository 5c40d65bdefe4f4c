pub const THEME_STORAGE_KEY: &str = "theme";

pub const AUTOPLAY_INTERVAL_MS: u32 = 5000;
pub const SLIDE_TRANSITION_MS: u32 = 600;
pub const DRAG_THRESHOLD_RATIO: f64 = 0.15;

pub const HEADER_SCROLLED_AFTER: f64 = 100.0;
pub const HEADER_HIDE_AFTER: f64 = 200.0;
pub const MOBILE_BREAKPOINT: f64 = 768.0;
pub const SCROLL_TOP_AFTER: f64 = 300.0;
pub const PARALLAX_BASE_SPEED: f64 = 0.1;
pub const PARALLAX_SPEED_STEP: f64 = 0.05;

pub const SECTION_THRESHOLD: f64 = 0.6;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const COUNTER_THRESHOLD: f64 = 0.8;
pub const COUNTER_DURATION_MS: f64 = 2000.0;

pub const NOTIFICATION_TIMEOUT_MS: u32 = 5000;
pub const SUBMIT_DELAY_MS: u32 = 800;
pub const RESIZE_DEBOUNCE_MS: u32 = 150;

pub const MIN_NAME_LENGTH: usize = 2;
pub const MIN_MESSAGE_LENGTH: usize = 10;

pub const NAME_REQUIRED_ERROR: &str = "Please enter your name.";
pub const INVALID_EMAIL_ERROR: &str = "Please enter a valid email address.";
pub const MESSAGE_TOO_SHORT_ERROR: &str = "Please write a few details (min 10 chars).";
pub const INVALID_PHONE_ERROR: &str = "Please enter a valid phone number.";
pub const SERVICE_REQUIRED_ERROR: &str = "Please select a service.";
pub const ALREADY_SENDING_ERROR: &str = "Your message is already being sent.";

pub const SENDING_LABEL: &str = "Sending…";
pub const CONTACT_SUCCESS: &str = "Thank you! Your message has been sent successfully.";
pub const CALLBACK_SUCCESS: &str = "Thanks! We will call you back soon.";
pub const NEWSLETTER_SUCCESS: &str = "Thanks! You are subscribed.";
