use crate::index::types::{Document, InvertedIndex};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Reads corpus records from a line-oriented source.
///
/// A record is two lines: the document identifier, then its text. The stream
/// ends at EOF or at the first blank identifier or text line. A blank line is
/// a hard stop: records after it are never read.
pub struct DocumentReader<R> {
    reader: R,
    line: usize,
    done: bool,
}

impl<R: BufRead> DocumentReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            done: false,
        }
    }

    /// Read one line without its terminator. `None` at EOF.
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        self.line += 1;

        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }

        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn read_record(&mut self) -> io::Result<Option<Document>> {
        let Some(id) = self.next_line()?.filter(|l| !l.is_empty()) else {
            return Ok(None);
        };
        let Some(text) = self.next_line()?.filter(|l| !l.is_empty()) else {
            return Ok(None);
        };
        Ok(Some(Document { id, text }))
    }
}

impl<R: BufRead> Iterator for DocumentReader<R> {
    type Item = io::Result<Document>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.read_record() {
            Ok(Some(doc)) => Some(Ok(doc)),
            Ok(None) => {
                debug!(line = self.line, "end of corpus");
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Fold every record of `reader` into `index`.
///
/// Existing index contents are kept and merged into. Returns the number of
/// records accepted.
///
/// A build is all or nothing: records are staged in a scratch index and only
/// merged once the stream ends cleanly. On a read error `index` is left
/// untouched and no count is reported.
pub fn index_documents<R: BufRead>(reader: R, index: &mut InvertedIndex) -> Result<usize> {
    let mut staged = InvertedIndex::new();
    let mut count = 0;

    for doc in DocumentReader::new(reader) {
        let doc = doc.with_context(|| format!("Failed to read corpus record {}", count + 1))?;
        debug!(id = %doc.id, "indexing document");
        staged.add_document(&doc);
        count += 1;
    }

    index.merge(staged);
    Ok(count)
}

/// Build the inverted index from the corpus file at `path`.
///
/// If the file cannot be opened or read the error is returned and `index`
/// is left untouched.
pub fn build_index(path: &Path, index: &mut InvertedIndex) -> Result<usize> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open corpus: {}", path.display()))?;

    let count = index_documents(BufReader::new(file), index)?;

    info!(
        path = %path.display(),
        documents = count,
        terms = index.term_count(),
        "index built"
    );

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    /// Reader that fails on every call
    struct BrokenPipe;

    impl Read for BrokenPipe {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "source went away"))
        }
    }

    const CORPUS: &str = "www.shoppinglist.com\n\
                          EGGS! milk, fish,      @  bread cheese\n\
                          www.dr.seuss.net\n\
                          One Fish Two Fish Red fish Blue fish !!!\n";

    fn build(corpus: &str) -> (InvertedIndex, usize) {
        let mut index = InvertedIndex::new();
        let count = index_documents(Cursor::new(corpus), &mut index).unwrap();
        (index, count)
    }

    #[test]
    fn test_tiny_corpus() {
        let (index, count) = build(CORPUS);
        assert_eq!(count, 2);
        assert_eq!(index.term_count(), 9);
        assert_eq!(index.get("fish").unwrap().len(), 2);
        assert!(index.get("eggs").unwrap().contains("www.shoppinglist.com"));
        assert!(index.get("one").unwrap().contains("www.dr.seuss.net"));
    }

    #[test]
    fn test_blank_line_stops_ingestion() {
        let corpus = "a.com\nalpha\nb.com\n\nc.com\ngamma\n";
        let (index, count) = build(corpus);
        assert_eq!(count, 1);
        assert!(index.contains_term("alpha"));
        assert!(!index.contains_term("gamma"));
    }

    #[test]
    fn test_blank_identifier_stops_ingestion() {
        let corpus = "a.com\nalpha\n\nbeta\nc.com\ngamma\n";
        let (index, count) = build(corpus);
        assert_eq!(count, 1);
        assert_eq!(index.term_count(), 1);
    }

    #[test]
    fn test_missing_text_at_eof() {
        let (_, count) = build("a.com\nalpha\nb.com");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_no_trailing_newline_and_crlf() {
        let (index, count) = build("a.com\r\nalpha beta\r\nb.com\r\ngamma");
        assert_eq!(count, 2);
        assert!(index.get("beta").unwrap().contains("a.com"));
        assert!(index.get("gamma").unwrap().contains("b.com"));
    }

    #[test]
    fn test_untokenizable_text_still_counts() {
        let (index, count) = build("nums.txt\n1 2 3\n");
        assert_eq!(count, 1);
        assert!(index.is_empty());
    }

    #[test]
    fn test_build_is_additive() {
        let mut index = InvertedIndex::new();
        index_documents(Cursor::new("a.com\nfish red\n"), &mut index).unwrap();
        index_documents(Cursor::new("b.com\nfish blue\n"), &mut index).unwrap();

        let (together, _) = build("a.com\nfish red\nb.com\nfish blue\n");
        assert_eq!(index, together);
    }

    #[test]
    fn test_missing_file_leaves_index_untouched() {
        let mut index = InvertedIndex::new();
        index_documents(Cursor::new("a.com\nkeep me\n"), &mut index).unwrap();
        let before = index.clone();

        let path = std::env::temp_dir().join("boolsearch_no_such_corpus.txt");
        assert!(build_index(&path, &mut index).is_err());
        assert_eq!(index, before);
    }

    #[test]
    fn test_read_error_midway_leaves_index_untouched() {
        let mut index = InvertedIndex::new();
        index_documents(Cursor::new("a.com\nkeep me\n"), &mut index).unwrap();
        let before = index.clone();

        let source = BufReader::new(Cursor::new("b.com\nfish red\nc.com\n").chain(BrokenPipe));
        assert!(index_documents(source, &mut index).is_err());
        assert_eq!(index, before);
        assert!(!index.contains_term("fish"));
    }

    #[test]
    fn test_build_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.txt");
        std::fs::write(&path, CORPUS).unwrap();

        let mut index = InvertedIndex::new();
        assert_eq!(build_index(&path, &mut index).unwrap(), 2);
        assert_eq!(index.documents().len(), 2);
    }
}
