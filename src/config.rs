use std::time::Duration;

use crate::contact::StatusPolicy;

/// Webhook the contact form posts to unless `CONTACT_WEBHOOK_URL` is set at build time.
pub const DEFAULT_WEBHOOK_URL: &str = "https://hook.us2.make.com/wc2vpn7aof56pag5459ildqn48inxr0f";

/// Lookahead added to the scroll position before matching section offsets.
pub const DEFAULT_SCROLL_OFFSET: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub owner: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub webhook_url: &'static str,
    pub status_policy: StatusPolicy,
    pub scroll_offset: f64,
    pub toast_limit: usize,
    pub toast_duration: Duration,
    pub copyright_year: &'static str,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: "Panth Patel",
            role: "Prompt Engineer, Solutions Engineer & No-Code Developer",
            tagline: "Building AI-driven workflows, low-code websites, and automations that transform business processes.",
            email: "panth23patel@gmail.com",
            location: "Canada",
            webhook_url: option_env!("CONTACT_WEBHOOK_URL").unwrap_or(DEFAULT_WEBHOOK_URL),
            status_policy: StatusPolicy::default(),
            scroll_offset: DEFAULT_SCROLL_OFFSET,
            toast_limit: 1,
            toast_duration: Duration::from_secs(5),
            copyright_year: env!("BUILD_YEAR"),
        }
    }
}

impl SiteConfig {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn copyright(&self) -> String {
        format!(
            "© {} {}. All rights reserved.",
            self.copyright_year, self.owner
        )
    }
}
