pub mod analyze;
pub mod docs;
pub mod fallback;
pub mod health;
