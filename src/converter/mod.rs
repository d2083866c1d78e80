pub mod intervals;
pub mod pipeline;
