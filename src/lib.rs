use std::{
    fs::{File, OpenOptions},
    io::{BufWriter, Read, Write},
    path::{Path, PathBuf},
};

pub use cli::CLIParser;
use error::Error;
use frequency::{count_frequencies, filter_to_alphabet, leaves};
use heap::MinHeap;
use huffman::{build_tree_observed, Codebook};
use report::ReportWriter;

mod cli;
pub mod error;
pub mod frequency;
pub mod heap;
pub mod huffman;
mod logger;
pub mod report;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_file: PathBuf,
    output_file: PathBuf,
    sample_length: Option<usize>,
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path)
        .map_err(|e| Error::UnableToOpenInputFileForReading(file_path.display().to_string(), e))
}

fn open_output_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| Error::UnableToOpenOutputFileForWriting(file_path.display().to_string(), e))
}

fn read_input_text(file_path: &Path) -> Result<String> {
    let mut input_file = open_input_file(file_path)?;
    let mut text = String::new();
    input_file
        .read_to_string(&mut text)
        .map_err(|e| Error::FailedToReadInputFile(file_path.display().to_string(), e))?;
    Ok(filter_to_alphabet(&text))
}

fn resolve_sample_length(requested: Option<usize>, available: usize) -> Result<usize> {
    match requested {
        None => Ok(available),
        Some(0) => Err(Error::SampleLengthIsZero),
        Some(length) if length > available => {
            Err(Error::SampleLengthExceedsInput(length, available))
        }
        Some(length) => Ok(length),
    }
}

pub fn generate_codebook_report(arguments: &Arguments) -> Result<()> {
    let text = read_input_text(&arguments.input_file)?;
    let sample_length = resolve_sample_length(arguments.sample_length, text.chars().count())?;
    let frequencies = count_frequencies(&text);
    let heap = MinHeap::from_elements(leaves(&frequencies));
    log::info!(
        "Built min-heap over {} alphabet symbols from {} input characters",
        heap.len(),
        text.chars().count()
    );
    let root = build_tree_observed(heap, |heap| {
        log::debug!("Merged the two minimum nodes, {} elements remain", heap.len());
    })?;
    let codebook = Codebook::from_tree(&root);
    let sample: String = text.chars().take(sample_length).collect();
    let output_file = open_output_file(&arguments.output_file)?;
    let mut output_writer = BufWriter::new(&output_file);
    let mut report = ReportWriter::new(&mut output_writer);
    report.write_codebook(&codebook)?;
    let totals = report.write_running_totals(&sample, &codebook)?;
    report.write_summary(&totals)?;
    // dropping the BufWriter would discard any flush error
    output_writer.flush().map_err(Error::FailedToWriteReport)?;
    log::info!(
        "Report written: {} huffman bits versus {} fixed-width bits over {} sampled characters",
        totals.huffman_bits,
        totals.baseline_bits,
        sample_length
    );
    Ok(())
}
