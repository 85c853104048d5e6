pub mod naive_cnf;
pub mod to_basic;
pub mod visitor;

pub use naive_cnf::{naive_cnf, FormulaConversionErr};
