pub mod categories;
pub mod fundraisers;
