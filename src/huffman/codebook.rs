use std::collections::btree_map;
use std::collections::BTreeMap;

use super::tree::HuffmanNode;

/// Mapping from leaf symbol to its prefix-free '0'/'1' codeword.
pub struct Codebook<S> {
    codewords: BTreeMap<S, String>,
}

impl<S: Ord + Clone> Codebook<S> {
    /// Derives the codeword of every leaf by walking the finished tree,
    /// appending '0' on the left branch and '1' on the right branch.
    ///
    /// A tree consisting of a single leaf has an empty root path, which no
    /// decoder could match; that sole symbol gets the one-bit codeword "0"
    /// instead.
    pub fn from_tree(root: &HuffmanNode<S>) -> Self {
        let mut codewords = BTreeMap::new();
        if let Some(symbol) = root.symbol() {
            codewords.insert(symbol.clone(), "0".to_string());
            return Codebook { codewords };
        }
        let mut path = String::new();
        collect_codewords(root, &mut path, &mut codewords);
        Codebook { codewords }
    }

    pub fn get(&self, symbol: &S) -> Option<&str> {
        self.codewords.get(symbol).map(String::as_str)
    }

    pub fn codeword_length(&self, symbol: &S) -> Option<usize> {
        self.codewords.get(symbol).map(String::len)
    }

    pub fn len(&self) -> usize {
        self.codewords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codewords.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, S, String> {
        self.codewords.iter()
    }
}

fn collect_codewords<S: Ord + Clone>(
    node: &HuffmanNode<S>,
    path: &mut String,
    codewords: &mut BTreeMap<S, String>,
) {
    match node.children() {
        None => {
            if let Some(symbol) = node.symbol() {
                codewords.insert(symbol.clone(), path.clone());
            }
        }
        Some((left, right)) => {
            path.push('0');
            collect_codewords(left, path, codewords);
            path.pop();
            path.push('1');
            collect_codewords(right, path, codewords);
            path.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Codebook;
    use crate::heap::MinHeap;
    use crate::huffman::tree::{build_tree, HuffmanNode};

    fn build_codebook(symbols_and_weights: &[(char, u64)]) -> Codebook<char> {
        let leaves = symbols_and_weights
            .iter()
            .map(|&(symbol, weight)| HuffmanNode::leaf(symbol, weight))
            .collect();
        let root = build_tree(MinHeap::from_elements(leaves)).unwrap();
        Codebook::from_tree(&root)
    }

    fn encode(sequence: &str, codebook: &Codebook<char>) -> String {
        sequence
            .chars()
            .map(|symbol| codebook.get(&symbol).expect("symbol not in codebook"))
            .collect()
    }

    /// Greedy longest-prefix decoder. With a prefix-free code exactly one
    /// codeword can match at each position.
    fn decode(mut bits: &str, codebook: &Codebook<char>) -> String {
        let mut decoded = String::new();
        while !bits.is_empty() {
            let (symbol, codeword) = codebook
                .iter()
                .find(|(_, codeword)| bits.starts_with(codeword.as_str()))
                .expect("bit-string does not start with any codeword");
            decoded.push(*symbol);
            bits = &bits[codeword.len()..];
        }
        decoded
    }

    const CLASSIC_SYMBOLS_AND_WEIGHTS: &[(char, u64)] =
        &[('a', 5), ('b', 9), ('c', 12), ('d', 13), ('e', 16), ('f', 45)];

    #[test]
    fn classic_weights_produce_the_expected_codewords() {
        let codebook = build_codebook(CLASSIC_SYMBOLS_AND_WEIGHTS);
        assert_eq!(codebook.get(&'f'), Some("0"));
        assert_eq!(codebook.get(&'c'), Some("100"));
        assert_eq!(codebook.get(&'d'), Some("101"));
        assert_eq!(codebook.get(&'a'), Some("1100"));
        assert_eq!(codebook.get(&'b'), Some("1101"));
        assert_eq!(codebook.get(&'e'), Some("111"));
    }

    #[test]
    fn weighted_codeword_length_matches_the_reference_total() {
        let codebook = build_codebook(CLASSIC_SYMBOLS_AND_WEIGHTS);
        let total: u64 = CLASSIC_SYMBOLS_AND_WEIGHTS
            .iter()
            .map(|&(symbol, weight)| weight * codebook.codeword_length(&symbol).unwrap() as u64)
            .sum();
        assert_eq!(total, 224);
        let baseline: u64 = CLASSIC_SYMBOLS_AND_WEIGHTS
            .iter()
            .map(|&(_, weight)| weight * 7)
            .sum();
        assert_eq!(baseline, 700);
    }

    #[test]
    fn no_codeword_is_a_prefix_of_another() {
        let codebook = build_codebook(CLASSIC_SYMBOLS_AND_WEIGHTS);
        for (symbol, codeword) in codebook.iter() {
            for (other_symbol, other_codeword) in codebook.iter() {
                if symbol == other_symbol {
                    continue;
                }
                assert!(
                    !other_codeword.starts_with(codeword.as_str()),
                    "codeword of '{}' is a prefix of the codeword of '{}'",
                    symbol,
                    other_symbol
                );
            }
        }
    }

    #[test]
    fn encoded_sequences_decode_back_to_the_original() {
        let codebook = build_codebook(CLASSIC_SYMBOLS_AND_WEIGHTS);
        let sequence = "feedface bad cafe".replace(' ', "a");
        let bits = encode(&sequence, &codebook);
        assert_eq!(decode(&bits, &codebook), sequence);
    }

    #[test]
    fn every_codeword_is_non_empty() {
        let codebook = build_codebook(CLASSIC_SYMBOLS_AND_WEIGHTS);
        for (_, codeword) in codebook.iter() {
            assert!(!codeword.is_empty());
        }
    }

    #[test]
    fn single_symbol_alphabet_gets_a_one_bit_codeword() {
        let codebook = build_codebook(&[('a', 12)]);
        assert_eq!(codebook.len(), 1);
        assert_eq!(codebook.get(&'a'), Some("0"));
    }

    #[test]
    fn zero_weight_leaves_still_receive_codewords() {
        let codebook = build_codebook(&[('a', 0), ('b', 3), ('c', 9), ('d', 20)]);
        assert_eq!(codebook.len(), 4);
        let zero_weight_length = codebook.codeword_length(&'a').unwrap();
        assert!(zero_weight_length >= codebook.codeword_length(&'d').unwrap());
        assert!(!codebook.get(&'a').unwrap().is_empty());
    }
}
