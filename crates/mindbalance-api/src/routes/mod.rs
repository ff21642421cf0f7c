pub mod assessments;
pub mod categories;
pub mod export;
pub mod gratitude;
pub mod health;
pub mod interpret;
pub mod mood;
pub mod scales;
pub mod stats;
pub mod sync;
