//! Types shared by everything that talks to a clearfile server: the search-box
//! query interpreter and the note records the server sends back.

pub mod query;
pub mod note;

pub use query::*;
pub use note::*;
