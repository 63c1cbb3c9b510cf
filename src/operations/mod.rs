pub mod apply_op;
pub mod options_op;
