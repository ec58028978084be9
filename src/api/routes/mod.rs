pub mod health;
pub mod notifications;
pub mod search;
