//! Assembly of LaTeX documents from rendered functions, and the sinks that typeset them.
//!
//! A [`Document`] accumulates display equations between a fixed preamble and terminator. When
//! complete, the text is handed to a [`TexSink`]: normally [`PdfLatex`], which pipes it into an
//! external `pdflatex` process, with [`PlainFile`] as the fallback that saves the raw source.

pub mod banner;
pub mod document;
pub mod sink;

pub use document::Document;
pub use sink::{PdfLatex, PlainFile, SinkError, TexSink};
