use crate::huffman::tree::HuffmanNode;

/// Number of symbols in the fixed report alphabet: the space character plus
/// the 26 lowercase letters.
pub const ALPHABET_LEN: usize = 27;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolFrequency {
    pub symbol: char,
    pub frequency: u64,
}

/// The alphabet in its canonical order, space first.
pub fn alphabet() -> impl Iterator<Item = char> {
    std::iter::once(' ').chain('a'..='z')
}

pub fn is_alphabet_symbol(symbol: char) -> bool {
    symbol == ' ' || symbol.is_ascii_lowercase()
}

/// Removes every character outside the alphabet, including line breaks.
pub fn filter_to_alphabet(text: &str) -> String {
    text.chars().filter(|&c| is_alphabet_symbol(c)).collect()
}

/// Counts occurrences of each alphabet member in `text`, returning one
/// entry per member in canonical order. Members that never occur are kept
/// with a zero count so they still receive a codeword.
pub fn count_frequencies(text: &str) -> Vec<SymbolFrequency> {
    let mut counts = [0u64; ALPHABET_LEN];
    for symbol in text.chars().filter(|&c| is_alphabet_symbol(c)) {
        counts[alphabet_index(symbol)] += 1;
    }
    alphabet()
        .map(|symbol| SymbolFrequency {
            symbol,
            frequency: counts[alphabet_index(symbol)],
        })
        .collect()
}

/// Turns a frequency table into the leaf nodes handed to the tree builder.
pub fn leaves(frequencies: &[SymbolFrequency]) -> Vec<HuffmanNode<char>> {
    frequencies
        .iter()
        .map(|entry| HuffmanNode::leaf(entry.symbol, entry.frequency))
        .collect()
}

fn alphabet_index(symbol: char) -> usize {
    if symbol == ' ' {
        0
    } else {
        symbol as usize - 'a' as usize + 1
    }
}
