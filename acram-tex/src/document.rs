use acram_parser::parser::{ast::Function, fmt::Latex};
use std::fmt::Write;
use super::banner;

/// The lines written before the first equation.
const PREAMBLE: &str = "\\documentclass[a4paper,12pt]{article}\n\
    \\usepackage[utf8]{inputenc}\n\
    \\usepackage{amsmath}\n\
    \\begin{document}\n";

/// The line written after the last equation.
const TERMINATOR: &str = "\\end{document}\n";

/// A LaTeX document being assembled, one display equation at a time.
#[derive(Debug, Clone)]
pub struct Document {
    source: String,
    equations: usize,
}

impl Document {
    /// Starts a document with the preamble and the given banner line.
    pub fn new(banner: &str) -> Self {
        let mut source = String::from(PREAMBLE);
        source.push_str(banner);
        source.push_str("\n\n");
        Self { source, equations: 0 }
    }

    /// Starts a document with a randomly chosen banner line.
    pub fn with_random_banner() -> Self {
        Self::new(banner::random())
    }

    /// Appends the definition of the function, such as `f(x)=x^{2}`, as a display equation.
    pub fn push_function(&mut self, function: &Function) {
        // writing to a `String` cannot fail
        let _ = writeln!(self.source, "$${}$$", function.as_display());
        self.equations += 1;
    }

    /// Returns the number of equations in the document.
    pub fn equations(&self) -> usize {
        self.equations
    }

    /// Completes the document, returning its full source.
    pub fn finish(mut self) -> String {
        self.source.push_str(TERMINATOR);
        self.source
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use acram_parser::parser::parse_function;

    #[test]
    fn empty_document() {
        let source = Document::new("Hello").finish();
        assert_eq!(
            source,
            "\\documentclass[a4paper,12pt]{article}\n\
            \\usepackage[utf8]{inputenc}\n\
            \\usepackage{amsmath}\n\
            \\begin{document}\n\
            Hello\n\n\
            \\end{document}\n",
        );
    }

    #[test]
    fn equations_in_order() {
        let mut document = Document::new("Hello");
        document.push_function(&parse_function("f(x) = x^2").unwrap());
        document.push_function(&parse_function("g(t) = sin(t)").unwrap());
        assert_eq!(document.equations(), 2);

        let source = document.finish();
        let body = source.lines().filter(|line| line.starts_with("$$")).collect::<Vec<_>>();
        assert_eq!(body, vec!["$$f(x)=x^{2}$$", "$$g(t)={\\sin{t}}$$"]);
        assert!(source.ends_with("\\end{document}\n"));
    }
}
