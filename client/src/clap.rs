use crate::prelude::*;

/// Clearfile command-line client
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Base url of the clearfile server
    #[arg(long, env = "CLEARFILE_SERVER", default_value = "http://localhost:5000")]
    pub server: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search notes. `@location` and `+notebook` narrow the results
    Search {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Show how a search would be sent, without contacting the server
    Parse {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Show a single note
    Show {
        uuid: String,
    },

    /// Upload a scanned image as a new note
    Upload {
        /// Title of the new note
        #[arg(long)]
        title: String,

        file: PathBuf,
    },

    /// Delete a note and its tags
    DeleteNote {
        uuid: String,
    },

    /// Delete a single tag by id
    DeleteTag {
        id: i64,
    },

    /// Create a notebook
    AddNotebook {
        name: String,
    },

    /// Edit a note
    UpdateNote {
        uuid: String,

        /// New title
        #[arg(long)]
        name: Option<String>,

        /// Id of the notebook to move the note into
        #[arg(long)]
        notebook: Option<i64>,

        /// New location
        #[arg(long)]
        location: Option<String>,

        /// Replaces the note's tags (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Remove every tag
        #[arg(long, conflicts_with = "tags")]
        clear_tags: bool,
    },
}
