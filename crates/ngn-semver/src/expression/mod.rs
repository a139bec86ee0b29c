//! Range expressions used for version selection

mod operator;
mod range;

pub use operator::RangeOperator;
pub use range::Expression;
