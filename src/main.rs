use std::env::args_os;

use huffman_codebook::{generate_codebook_report, CLIParser};

fn main() {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match generate_codebook_report(&arguments) {
        Ok(_) => println!("Report generated successfully"),
        Err(e) => eprintln!("Report generation failed because of: {}", e),
    }
}
