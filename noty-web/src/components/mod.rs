pub mod icons;
pub mod notifications;
