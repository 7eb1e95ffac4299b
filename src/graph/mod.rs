pub mod generators;
pub mod traits;
pub mod weighted;

pub use traits::{Cost, Graph};
pub use weighted::WeightedGraph;
