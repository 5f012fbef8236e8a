//! Interactive query loop.
//!
//! Written against generic reader/writer handles so the same loop drives
//! the terminal and the tests.

use crate::index::build::build_index;
use crate::index::types::{IndexSummary, InvertedIndex};
use crate::output::{print_matches, print_summary};
use crate::query::find_query_matches;
use crate::utils::DEFAULT_PROMPT;
use std::io::{self, BufRead, Write};
use std::path::Path;
use termcolor::WriteColor;
use tracing::warn;

/// Build the index for `path`, reporting progress to `out`.
///
/// An unreadable corpus is reported and yields an empty index.
pub fn load_corpus<W: Write>(path: &Path, out: &mut W) -> io::Result<(InvertedIndex, IndexSummary)> {
    let mut index = InvertedIndex::new();

    writeln!(out, "Stand by while building index...")?;
    let documents = match build_index(path, &mut index) {
        Ok(count) => count,
        Err(e) => {
            warn!("{:#}", e);
            writeln!(out, "Invalid filename.")?;
            0
        }
    };

    let summary = IndexSummary {
        documents,
        terms: index.term_count(),
    };
    print_summary(out, summary)?;

    Ok((index, summary))
}

/// Query session over a built index
pub struct Session<'a> {
    index: &'a InvertedIndex,
    prompt: String,
}

impl<'a> Session<'a> {
    pub fn new(index: &'a InvertedIndex) -> Self {
        Self {
            index,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Evaluate one query line and print the matches
    pub fn answer<W: WriteColor>(&self, query: &str, out: &mut W) -> io::Result<usize> {
        let matches = find_query_matches(self.index, query);
        print_matches(out, &matches)?;
        Ok(matches.len())
    }

    /// Read queries until an empty line or EOF. Returns the number of
    /// queries answered.
    pub fn run<R: BufRead, W: WriteColor>(&self, mut input: R, out: &mut W) -> io::Result<usize> {
        let mut served = 0;
        let mut buf = Vec::new();

        loop {
            write!(out, "{}", self.prompt)?;
            out.flush()?;

            // Undecodable bytes become U+FFFD, which never matches a term
            buf.clear();
            input.read_until(b'\n', &mut buf)?;
            let line = String::from_utf8_lossy(&buf);
            let query = line.trim_end_matches(['\n', '\r']);
            writeln!(out)?;

            if query.is_empty() {
                writeln!(out, "Thank you for searching!")?;
                break;
            }

            self.answer(query, out)?;
            served += 1;
        }

        Ok(served)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use termcolor::NoColor;

    fn corpus_file(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let path = dir.path().join("tiny.txt");
        std::fs::write(
            &path,
            "www.shoppinglist.com\neggs milk fish bread cheese\n\
             www.dr.seuss.net\nfish one two red blue\n",
        )
        .unwrap();
        path
    }

    #[test]
    fn test_load_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        let (index, summary) = load_corpus(&corpus_file(&dir), &mut out).unwrap();

        assert_eq!(summary, IndexSummary { documents: 2, terms: 9 });
        assert_eq!(index.term_count(), 9);
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("Indexed 2 pages containing 9 unique terms.\n"));
    }

    #[test]
    fn test_load_missing_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        let (index, summary) = load_corpus(&dir.path().join("missing.txt"), &mut out).unwrap();

        assert!(index.is_empty());
        assert_eq!(summary.documents, 0);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Invalid filename.\n"));
        assert!(text.contains("Indexed 0 pages containing 0 unique terms."));
    }

    #[test]
    fn test_session_run() {
        let dir = tempfile::tempdir().unwrap();
        let (index, _) = load_corpus(&corpus_file(&dir), &mut io::sink()).unwrap();

        let input = Cursor::new("fish +red\ntough +all\n\nfish\n");
        let mut out = NoColor::new(Vec::new());
        let served = Session::new(&index).with_prompt("> ").run(input, &mut out).unwrap();

        assert_eq!(served, 2);
        let text = String::from_utf8(out.into_inner()).unwrap();
        assert_eq!(
            text,
            "> \nFound 1 matching pages\nwww.dr.seuss.net\n\
             > \nFound 0 matching pages\n\
             > \nThank you for searching!\n"
        );
    }

    #[test]
    fn test_session_survives_invalid_utf8() {
        let mut index = InvertedIndex::new();
        index.add_document(&crate::index::Document::new("www.dr.seuss.net", "fish red"));

        let input = Cursor::new(b"fi\xffsh\nfish\n\n".to_vec());
        let mut out = NoColor::new(Vec::new());
        let served = Session::new(&index).with_prompt("> ").run(input, &mut out).unwrap();

        assert_eq!(served, 2);
        let text = String::from_utf8(out.into_inner()).unwrap();
        assert_eq!(
            text,
            "> \nFound 0 matching pages\n\
             > \nFound 1 matching pages\nwww.dr.seuss.net\n\
             > \nThank you for searching!\n"
        );
    }

    #[test]
    fn test_session_ends_at_eof() {
        let index = InvertedIndex::new();
        let mut out = NoColor::new(Vec::new());
        let served = Session::new(&index).run(Cursor::new("fish"), &mut out).unwrap();

        assert_eq!(served, 1);
        let text = String::from_utf8(out.into_inner()).unwrap();
        assert!(text.starts_with(DEFAULT_PROMPT));
        assert!(text.ends_with("Thank you for searching!\n"));
    }
}
