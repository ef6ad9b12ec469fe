use log::Level;

pub const BRAND_NAME: &str = "CLEAR Performance Coaching";

/// Recipient of the "Email my results" link.
pub const CONTACT_EMAIL: &str = "kent@getclearliving.com";

pub const MAIL_SUBJECT: &str = "CLEAR Leadership Audit Results";

// Lets the new stage render before the viewport moves to it.
pub const SCROLL_DELAY_MS: u32 = 50;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose transitions while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_address_is_usable_in_mailto() {
        assert!(CONTACT_EMAIL.contains('@'));
        assert!(!CONTACT_EMAIL.contains(' '));
    }

    #[test]
    fn debug_builds_log_more() {
        if cfg!(debug_assertions) {
            assert_eq!(log_level(), Level::Debug);
        } else {
            assert_eq!(log_level(), Level::Info);
        }
    }
}
