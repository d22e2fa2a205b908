pub mod assess;
pub mod frameworks;
