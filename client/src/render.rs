use crate::prelude::*;

const EXCERPT_LENGTH: usize = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toast {
    Success,
    Failure,
}

/// Presents what the commands produce. Commands never print on their own.
pub trait Renderer {
    /// Called before a new search is sent.
    fn clear(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn results(&mut self, query: &ParsedQuery, results: &[(Note, NoteLinks)]) -> io::Result<()>;

    /// Result cards pre-rendered by an older server.
    fn html(&mut self, fragment: &str) -> io::Result<()>;

    fn note(&mut self, note: &Note, links: &NoteLinks) -> io::Result<()>;

    fn parsed(&mut self, query: &ParsedQuery) -> io::Result<()>;

    fn toast(&mut self, toast: Toast, message: &str) -> io::Result<()>;
}

/// Truncates `text` after `limit` characters, marking the cut with `...`.
pub fn ellipize(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_owned(),
    }
}

fn describe(query: &ParsedQuery) -> String {
    let mut description = format!("{:?}", query.query);
    if let Some(notebook) = &query.notebook {
        description.push_str(&format!(" in notebook {notebook:?}"));
    }
    if let Some(at) = &query.at {
        description.push_str(&format!(" at {at:?}"));
    }
    description
}

/// Plain-text renderer for terminals, or anything else implementing [`Write`].
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> TerminalRenderer<W> {
        TerminalRenderer { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn card(&mut self, note: &Note, links: &NoteLinks) -> io::Result<()> {
        write!(self.out, "{}", note.name)?;
        if let Some(notebook) = &note.notebook {
            write!(self.out, " (+{})", notebook.name)?;
        }
        if let Some(location) = &note.location {
            write!(self.out, " (@{location})")?;
        }
        writeln!(self.out)?;
        if !note.tags.is_empty() {
            writeln!(self.out, "    tags: {}", note.tag_names().join(", "))?;
        }
        let excerpt = note.ocr_text.split_whitespace().collect::<Vec<_>>().join(" ");
        if !excerpt.is_empty() {
            writeln!(self.out, "    {}", ellipize(&excerpt, EXCERPT_LENGTH))?;
        }
        writeln!(self.out, "    download: {}", links.download)?;
        writeln!(self.out, "    view: {}", links.view)
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn results(&mut self, query: &ParsedQuery, results: &[(Note, NoteLinks)]) -> io::Result<()> {
        match results.len() {
            0 => writeln!(self.out, "No notes for {}", describe(query))?,
            1 => writeln!(self.out, "1 note for {}", describe(query))?,
            n => writeln!(self.out, "{n} notes for {}", describe(query))?,
        }
        for (note, links) in results {
            self.card(note, links)?;
        }
        self.out.flush()
    }

    fn html(&mut self, fragment: &str) -> io::Result<()> {
        writeln!(self.out, "{}", fragment.trim())?;
        self.out.flush()
    }

    fn note(&mut self, note: &Note, links: &NoteLinks) -> io::Result<()> {
        self.card(note, links)?;
        if !note.ocr_text.trim().is_empty() {
            writeln!(self.out)?;
            writeln!(self.out, "{}", note.ocr_text.trim())?;
        }
        self.out.flush()
    }

    fn parsed(&mut self, query: &ParsedQuery) -> io::Result<()> {
        for filter in FilterName::ALL {
            writeln!(self.out, "{}: {}", filter.as_str(), query.get(filter).unwrap_or("-"))?;
        }
        writeln!(self.out, "{query}")?;
        self.out.flush()
    }

    fn toast(&mut self, toast: Toast, message: &str) -> io::Result<()> {
        match toast {
            Toast::Success => writeln!(self.out, "ok: {message}")?,
            Toast::Failure => writeln!(self.out, "error: {message}")?,
        }
        self.out.flush()
    }
}
