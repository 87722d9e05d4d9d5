//! UIコンポーネント

pub mod admin_panel;
pub mod agent_panel;
pub mod agents_table;
pub mod banner_form;
pub mod banner_strip;
pub mod category_tabs;
pub mod header;
pub mod notifications_panel;
pub mod property_card;
pub mod property_form;
pub mod property_listing;
pub mod status_message;
