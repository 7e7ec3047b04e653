use log::Level;

/// How long the limited-time banner counts down from, in seconds.
pub const OFFER_DURATION_SECS: u32 = 15 * 60;

/// Element id of the pricing section; scroll CTAs target it.
pub const PRICING_ANCHOR_ID: &str = "pricing";

/// External payment page the checkout button hands off to.
pub const CHECKOUT_URL: &str = "https://pay.celetus.com/4MKM9L02";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
