//! Execution machinery: validation, dispatch, and reporting.

pub mod executor;
pub mod output;
pub mod validator;
