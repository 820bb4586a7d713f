mod tokens;

mod data_uri;
pub use data_uri::*;
