use crate::prelude::*;

#[derive(Debug)]
pub enum CommandError {
    Api(ApiError),
    Io(io::Error),
}

impl From<ApiError> for CommandError {
    fn from(e: ApiError) -> Self {
        CommandError::Api(e)
    }
}

impl From<io::Error> for CommandError {
    fn from(e: io::Error) -> Self {
        CommandError::Io(e)
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Api(e) => write!(f, "{e}"),
            CommandError::Io(e) => write!(f, "Could not write output: {e}"),
        }
    }
}

impl std::error::Error for CommandError {}

/// Shows a failure to the user before handing it back. The api error is
/// returned even when the toast cannot be written.
fn report<T, R: Renderer>(renderer: &mut R, result: Result<T, ApiError>) -> Result<T, CommandError> {
    match result {
        Ok(value) => Ok(value),
        Err(e) => {
            if let Err(write_error) = renderer.toast(Toast::Failure, &e.to_string()) {
                warn!("Could not show failure {e:?}: {write_error}");
            }
            Err(e.into())
        }
    }
}

async fn search<R: Renderer>(api: &ApiClient, raw: &str, renderer: &mut R) -> Result<(), CommandError> {
    let query = parse(raw);
    renderer.clear()?;

    match report(renderer, api.search(&query).await)? {
        SearchResults::Notes(notes) => {
            let results = notes.into_iter().map(|note| {
                let links = api.links(&note);
                (note, links)
            }).collect::<Vec<_>>();
            renderer.results(&query, &results)?;
        }
        SearchResults::Html(fragment) => renderer.html(&fragment)?,
    }
    Ok(())
}

/// `--clear-tags` wins over `--tag`; neither leaves the tags untouched.
fn replacement_tags(tags: &[String], clear_tags: bool) -> Option<Vec<String>> {
    match (tags.is_empty(), clear_tags) {
        (_, true) => Some(Vec::new()),
        (false, false) => Some(tags.to_vec()),
        (true, false) => None,
    }
}

/// Executes one command against the configured server.
pub async fn run<R: Renderer>(args: &Args, renderer: &mut R) -> Result<(), CommandError> {
    let api = ApiClient::new(args.server.as_str());

    match &args.command {
        Command::Search { words } => search(&api, &words.join(" "), renderer).await?,
        Command::Parse { words } => renderer.parsed(&parse(&words.join(" ")))?,
        Command::Show { uuid } => {
            let note = report(renderer, api.note(uuid).await)?;
            renderer.note(&note, &api.links(&note))?;
        }
        Command::Upload { title, file } => {
            report(renderer, api.upload(title, file).await)?;
            renderer.toast(Toast::Success, &format!("Uploaded {title}"))?;
        }
        Command::DeleteNote { uuid } => {
            report(renderer, api.delete_note(uuid).await)?;
            renderer.toast(Toast::Success, "Note deleted")?;
        }
        Command::DeleteTag { id } => {
            report(renderer, api.delete_tag(*id).await)?;
            renderer.toast(Toast::Success, "Tag deleted")?;
        }
        Command::AddNotebook { name } => {
            report(renderer, api.add_notebook(name).await)?;
            renderer.toast(Toast::Success, &format!("Created notebook {}", name.trim()))?;
        }
        Command::UpdateNote { uuid, name, notebook, location, tags, clear_tags } => {
            let update = NoteUpdate {
                uuid: uuid.clone(),
                name: name.clone(),
                notebook: *notebook,
                location: location.clone(),
                tags: replacement_tags(tags, *clear_tags),
            };
            report(renderer, api.update_note(&update).await)?;
            renderer.toast(Toast::Success, "Note updated")?;
        }
    }
    Ok(())
}
