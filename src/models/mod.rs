pub mod badge;
pub mod cost;

pub use badge::Badge;
pub use cost::{CostAmount, CostBucket, CostPage, CostResult};
