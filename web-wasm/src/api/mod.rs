//! バックエンドREST APIとの通信

mod client;

pub use client::{
    add_property, create_banner, delete_banner, delete_property, fetch_agents, fetch_auth_status,
    fetch_banners, fetch_notifications, fetch_properties, fetch_property, mark_notification_read,
    update_banner, update_property,
};
