use log::Level;

/// Which of the two promo sites a page belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SiteVariant {
    Classic,
    Redesign,
}

impl SiteVariant {
    /// Scroll offset in px after which the nav bar switches to its solid style.
    pub fn nav_scroll_threshold(self) -> f64 {
        match self {
            SiteVariant::Classic => 50.0,
            SiteVariant::Redesign => 20.0,
        }
    }

    /// Base URL the documented scanning API listens on in its examples.
    pub fn documented_api_url(self) -> &'static str {
        match self {
            SiteVariant::Classic => "http://localhost:8000",
            SiteVariant::Redesign => "http://localhost:5000",
        }
    }
}

pub const COPY_CONFIRMATION_MS: u32 = 2_000;

pub const PARALLAX_SPEED: f64 = -15.0;

pub const SIGNUP_CONFIRMATION: &str = "Thank you for signing up! We'll be in touch soon.";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
