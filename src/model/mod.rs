pub use self::assignment::Assignment;
pub use self::matrix::CostMatrix;
pub use self::objective::Objective;

mod assignment;
mod matrix;
mod objective;
