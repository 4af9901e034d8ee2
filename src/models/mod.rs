pub mod category;
pub mod fundraiser;
