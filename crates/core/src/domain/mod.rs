pub mod catalog;
pub mod proposal;
pub mod requirement;
