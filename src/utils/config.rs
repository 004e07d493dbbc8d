use std::path::PathBuf;

pub const USAGE: &str = "
        A command-line utility used to transform a .csv map file to
        a JSON file understood by the main application.

        Usage: map-transform infile.csv transformfile.json outfile.json";

/// Paths for a single run, taken from the positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformConfig {
    pub input: PathBuf,
    pub table: PathBuf,
    pub output: PathBuf,
}

impl TransformConfig {
    pub fn new(
        input: impl Into<PathBuf>,
        table: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            input: input.into(),
            table: table.into(),
            output: output.into(),
        }
    }

    /// Expects the arguments without the program name. Returns `None` unless
    /// exactly three are given.
    pub fn from_args<I, S>(args: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<PathBuf>,
    {
        let mut args = args.into_iter();
        let input = args.next()?;
        let table = args.next()?;
        let output = args.next()?;
        if args.next().is_some() {
            return None;
        }
        Some(Self::new(input, table, output))
    }
}
