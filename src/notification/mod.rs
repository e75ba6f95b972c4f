//! Per-user notifications

pub mod models;
pub mod repository;

pub use models::Notification;
pub use repository::NotificationRepository;
