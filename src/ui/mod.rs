pub mod explore;
pub mod panels;
pub mod plot;
