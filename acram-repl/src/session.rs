use acram_compute::{semantic::check_semantics, symbolic::{derivative, simplify}};
use acram_error::Error;
use acram_parser::parser::{ast::Function, parse_function};
use acram_tex::{Document, PdfLatex, PlainFile, SinkError, TexSink};
use log::{debug, info, warn};
use super::config::Config;

/// Parses the definition, checks it, and returns it together with its simplified derivative.
pub fn differentiate(source: &str) -> Result<(Function, Function), Error> {
    let function = parse_function(source)?;
    check_semantics(&function)?;
    let mut derived = derivative(&function);
    simplify(&mut derived);
    Ok((function, derived))
}

/// The state of one run: the document being assembled, and what to print along the way.
#[derive(Debug)]
pub struct Session {
    document: Document,
    print: bool,
    failed: usize,
}

impl Session {
    /// Starts a session with a fresh document.
    pub fn new(config: &Config) -> Self {
        Self::with_document(config, Document::with_random_banner())
    }

    /// Starts a session that appends to the given document.
    pub fn with_document(config: &Config, document: Document) -> Self {
        Self { document, print: config.print, failed: 0 }
    }

    /// Processes a single definition. On success, the function and its derivative are printed
    /// (unless disabled) and added to the document. On failure, the error is reported to stderr
    /// and the document is left untouched.
    pub fn process(&mut self, src_id: &str, source: &str) -> bool {
        match differentiate(source) {
            Ok((function, derived)) => {
                if self.print {
                    println!("{}", function);
                    println!("{}", derived);
                }
                self.document.push_function(&function);
                self.document.push_function(&derived);
                true
            },
            Err(err) => {
                self.failed += 1;
                if let Err(io_err) = err.report_to_stderr(src_id, source) {
                    warn!("could not report error in {}: {}", src_id, io_err);
                }
                false
            },
        }
    }

    /// Processes every non-blank line of the input as a separate definition.
    pub fn process_source(&mut self, name: &str, input: &str) {
        for (number, line) in input.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            self.process(&format!("{}:{}", name, number + 1), line);
        }
    }

    /// Returns the number of definitions that could not be processed.
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Returns the number of equations added to the document so far.
    pub fn equations(&self) -> usize {
        self.document.equations()
    }

    /// Completes the document and hands it to the typesetter named in the configuration. If
    /// typesetting fails, the LaTeX source is written to `<jobname>.tex` instead.
    pub fn finish(self, config: &Config) -> Result<(), SinkError> {
        if self.document.equations() == 0 {
            info!("no equations to typeset");
            return Ok(());
        }

        let source = self.document.finish();
        let mut typesetter = PdfLatex::new(&config.tex_command, &config.jobname);
        finish_with(&source, &mut typesetter, &mut PlainFile::for_job(&config.jobname))
    }
}

/// Hands the document to the primary sink, falling back to the other sink if the primary fails.
pub fn finish_with(
    source: &str,
    primary: &mut dyn TexSink,
    fallback: &mut dyn TexSink,
) -> Result<(), SinkError> {
    match primary.render(source) {
        Ok(()) => Ok(()),
        Err(err) => {
            warn!("{}; saving the LaTeX source instead", err);
            fallback.render(source)?;
            debug!("fallback succeeded");
            Ok(())
        },
    }
}
