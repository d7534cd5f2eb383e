use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    EmptyHeap,
    EmptyAlphabet,
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    FailedToReadInputFile(String, std::io::Error),
    SampleLengthIsZero,
    SampleLengthExceedsInput(usize, usize),
    SymbolNotInCodebook(char),
    FailedToWriteReport(std::io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyHeap => {
                write!(f, "Minimum requested from an empty heap")
            }
            Self::EmptyAlphabet => {
                write!(f, "Unable to build a code tree from an empty alphabet")
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::FailedToReadInputFile(path, error) => {
                write!(f, "Failed to read input file '{}': {}", path, error)
            }
            Self::SampleLengthIsZero => {
                write!(f, "Sample length must be a positive number")
            }
            Self::SampleLengthExceedsInput(requested, available) => {
                write!(
                    f,
                    "Sample length {} too big. Should be <= {}",
                    requested, available
                )
            }
            Self::SymbolNotInCodebook(symbol) => {
                write!(f, "Symbol '{}' not present in the codebook", symbol)
            }
            Self::FailedToWriteReport(error) => {
                write!(f, "Failed to write report: {}", error)
            }
        }
    }
}

impl std::error::Error for Error {}
