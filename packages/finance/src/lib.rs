pub mod coin;
pub mod duration;
pub mod error;
pub mod interest;
pub mod percent;
pub mod ratio;
pub mod zero;
