use huffman_codebook::heap::MinHeap;
use huffman_codebook::huffman::{build_tree_observed, Codebook, HuffmanNode};

fn main() -> huffman_codebook::Result<()> {
    // symbol-weight pairs
    let syms_and_weights = vec![('a', 5), ('b', 9), ('c', 12), ('d', 13), ('e', 16), ('f', 45)];

    let leaves = syms_and_weights
        .into_iter()
        .map(|(symbol, weight)| HuffmanNode::leaf(symbol, weight))
        .collect();
    let heap = MinHeap::from_elements(leaves);

    let root = build_tree_observed(heap, |heap| {
        for node in heap.iter() {
            print!("{}, ", node);
        }
        println!();
    })?;
    println!("code tree root weight: {}", root.weight());

    let codebook = Codebook::from_tree(&root);
    println!("huffman codebook");
    for (symbol, codeword) in codebook.iter() {
        println!("'{}' : {}", symbol, codeword);
    }
    Ok(())
}
