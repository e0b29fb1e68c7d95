pub use crate::{
    api::*,
    clap::*,
    commands::*,
    render::*,
};

pub use clearfile_common::{note::*, query::*};
pub use clap::{Parser, Subcommand};
pub use log::{info, warn, error, debug, trace};
pub use serde::{Serialize, Deserialize, de::DeserializeOwned};
pub use std::{
    io::{self, Write}, path::{Path, PathBuf}, fmt,
};
pub use reqwest::{Client, StatusCode, RequestBuilder};
