// Campaign data module.
// Defines campaign and user records plus the calendar date formatter.

pub mod date;
pub mod types;

pub use date::{DateStyle, format_calendar_date};
pub use types::{Campaign, CampaignSettings, User, load_campaigns};
