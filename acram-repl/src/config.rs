use std::path::PathBuf;
use super::error::Error;

/// The environment variable that overrides the typesetting command.
pub const TEX_COMMAND_VAR: &str = "ACRAM_TEX";

/// Options for a single run of the program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The base name of the produced document: `<jobname>.pdf`, or `<jobname>.tex` if
    /// typesetting fails.
    pub jobname: String,

    /// The command that typesets the document.
    pub tex_command: String,

    /// Whether to print the linear form of every function and derivative to stdout.
    pub print: bool,

    /// The files to read definitions from. If empty, definitions are read from stdin.
    pub files: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            jobname: String::from("acram_out"),
            tex_command: String::from("pdflatex"),
            print: true,
            files: Vec::new(),
        }
    }
}

impl Config {
    /// Wraps the given [`Config`] into a builder for further customization.
    pub fn into_builder(self) -> ConfigBuilder {
        ConfigBuilder(self)
    }

    /// Builds the configuration from the command-line arguments (without the program name) and
    /// the value of [`TEX_COMMAND_VAR`], if set.
    ///
    /// The accepted syntax is `[-q] [-o JOBNAME] [FILE ...]`.
    pub fn from_args<I>(args: I, tex_command: Option<String>) -> Result<Self, Error>
    where
        I: IntoIterator<Item = String>,
    {
        let mut builder = ConfigBuilder::new();
        if let Some(command) = tex_command.filter(|command| !command.trim().is_empty()) {
            builder = builder.tex_command(command);
        }

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            builder = match arg.as_str() {
                "-q" | "--quiet" => builder.print(false),
                "-o" | "--output" => {
                    let jobname = args.next().ok_or(Error::MissingValue("-o"))?;
                    builder.jobname(jobname)
                },
                _ if arg.starts_with('-') => return Err(Error::UnknownOption(arg)),
                _ => builder.file(arg),
            };
        }

        Ok(builder.build())
    }
}

/// Helper struct to build a [`Config`] struct.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigBuilder(Config);

impl ConfigBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base name of the produced document.
    pub fn jobname(mut self, jobname: impl Into<String>) -> Self {
        self.0.jobname = jobname.into();
        self
    }

    /// Sets the command that typesets the document.
    pub fn tex_command(mut self, tex_command: impl Into<String>) -> Self {
        self.0.tex_command = tex_command.into();
        self
    }

    /// Sets whether to print linear renderings to stdout.
    pub fn print(mut self, print: bool) -> Self {
        self.0.print = print;
        self
    }

    /// Adds a file to read definitions from.
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.0.files.push(path.into());
        self
    }

    /// Builds the [`Config`] struct.
    pub fn build(self) -> Config {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn args(args: &[&str]) -> Vec<String> {
        args.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn defaults() {
        let config = Config::from_args(args(&[]), None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.jobname, "acram_out");
        assert_eq!(config.tex_command, "pdflatex");
        assert!(config.print);
    }

    #[test]
    fn options_and_files() {
        let config = Config::from_args(
            args(&["-q", "a.txt", "-o", "report", "b.txt"]),
            Some(String::from("xelatex")),
        ).unwrap();
        assert_eq!(config, ConfigBuilder::new()
            .print(false)
            .jobname("report")
            .tex_command("xelatex")
            .file("a.txt")
            .file("b.txt")
            .build());
    }

    #[test]
    fn blank_command_is_ignored() {
        let config = Config::from_args(args(&[]), Some(String::from("  "))).unwrap();
        assert_eq!(config.tex_command, "pdflatex");
    }

    #[test]
    fn bad_arguments() {
        assert!(matches!(
            Config::from_args(args(&["-o"]), None),
            Err(Error::MissingValue("-o")),
        ));
        assert!(matches!(
            Config::from_args(args(&["--verbose"]), None),
            Err(Error::UnknownOption(option)) if option == "--verbose",
        ));
    }

    #[test]
    fn into_builder() {
        let config = Config::default().into_builder().jobname("x").build();
        assert_eq!(config.jobname, "x");
        assert_eq!(config.tex_command, "pdflatex");
    }
}
