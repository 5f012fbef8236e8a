use crate::index::build::build_index;
use crate::index::types::InvertedIndex;
use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;

/// Summary numbers for a built index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusStats {
    pub documents: usize,
    pub terms: usize,
    pub postings: usize,
    /// Terms with the widest document coverage, most documents first
    pub top_terms: Vec<(String, usize)>,
}

impl CorpusStats {
    pub fn collect(index: &InvertedIndex, documents: usize, top: usize) -> Self {
        let mut by_df: Vec<(String, usize)> = index
            .iter()
            .map(|(term, docs)| (term.to_string(), docs.len()))
            .collect();
        // Stable sort keeps ties in lexicographic order
        by_df.sort_by(|a, b| b.1.cmp(&a.1));
        let postings: usize = by_df.iter().map(|(_, df)| df).sum();
        by_df.truncate(top);

        Self {
            documents,
            terms: index.term_count(),
            postings,
            top_terms: by_df,
        }
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Corpus Statistics")?;
        writeln!(out, "=================")?;
        writeln!(out)?;
        writeln!(out, "Documents:        {}", self.documents)?;
        writeln!(out, "Unique terms:     {}", self.terms)?;
        writeln!(out, "Postings:         {}", self.postings)?;

        if !self.top_terms.is_empty() {
            writeln!(out)?;
            writeln!(out, "Most widespread terms:")?;
            for (term, df) in &self.top_terms {
                writeln!(out, "  {:20} {}", term, df)?;
            }
        }

        Ok(())
    }
}

/// Build the index for `path` and print its statistics
pub fn show_stats(path: &Path, top: usize) -> Result<()> {
    let mut index = InvertedIndex::new();
    let documents = build_index(path, &mut index)?;

    let stats = CorpusStats::collect(&index, documents, top);
    stats.write_to(&mut io::stdout().lock())?;
    Ok(())
}
