pub mod health;
pub mod licenses;
pub mod validation;
