//! Library components of the `dq` command-line tool.

pub mod logging;
pub mod request;
