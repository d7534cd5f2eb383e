use std::io::Write;

use crate::error::Error;
use crate::frequency::alphabet;
use crate::huffman::codebook::Codebook;
use crate::Result;

/// Bits per character of the fixed-width baseline encoding.
pub const BASELINE_BITS_PER_SYMBOL: usize = 7;

/// Totals accumulated while walking the sampled input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitTotals {
    pub huffman_bits: usize,
    pub baseline_bits: usize,
}

pub struct ReportWriter<'a, W: Write> {
    writer: &'a mut W,
}

impl<'a, W: Write> ReportWriter<'a, W> {
    pub fn new(writer: &'a mut W) -> Self {
        ReportWriter { writer }
    }

    /// Writes one `'x' : <bits>` line per alphabet member, space first.
    pub fn write_codebook(&mut self, codebook: &Codebook<char>) -> Result<()> {
        for symbol in alphabet() {
            let codeword = codeword_for(codebook, symbol)?;
            writeln!(self.writer, "'{}' : {}", symbol, codeword)
                .map_err(Error::FailedToWriteReport)?;
        }
        Ok(())
    }

    /// Writes one line per sampled character: its codeword, the running
    /// Huffman bit total, and the running fixed-width total.
    pub fn write_running_totals(
        &mut self,
        sample: &str,
        codebook: &Codebook<char>,
    ) -> Result<BitTotals> {
        let mut totals = BitTotals {
            huffman_bits: 0,
            baseline_bits: 0,
        };
        for symbol in sample.chars() {
            let codeword = codeword_for(codebook, symbol)?;
            totals.huffman_bits += codeword.len();
            totals.baseline_bits += BASELINE_BITS_PER_SYMBOL;
            writeln!(
                self.writer,
                "{}\t\t{}\t\t{}",
                codeword, totals.huffman_bits, totals.baseline_bits
            )
            .map_err(Error::FailedToWriteReport)?;
        }
        Ok(totals)
    }

    pub fn write_summary(&mut self, totals: &BitTotals) -> Result<()> {
        writeln!(
            self.writer,
            "total bits: {} huffman, {} fixed-width",
            totals.huffman_bits, totals.baseline_bits
        )
        .map_err(Error::FailedToWriteReport)
    }
}

/// Every symbol the report touches must have a codeword; an absent one
/// would print a line no decoder could use.
fn codeword_for(codebook: &Codebook<char>, symbol: char) -> Result<&str> {
    codebook
        .get(&symbol)
        .ok_or(Error::SymbolNotInCodebook(symbol))
}
