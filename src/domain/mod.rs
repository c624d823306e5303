pub mod identity;
pub mod pr;
