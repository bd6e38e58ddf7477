use std::env;
use std::io::{self, BufRead, Write};

use log::{debug, error, info, warn};

use huffman_report::compute_huffman_coding;
use huffman_report::report::{render_formulas, render_summary, render_table, render_tree};

const DEFAULT_PRECISION: usize = 4;
const MAX_PRECISION: usize = 10;

struct Options {
    text: Option<String>,
    show_tree: bool,
    show_formulas: bool,
    precision: usize,
}

fn parse_args(args: &[String]) -> Options {
    let mut words = Vec::new();
    let mut options = Options {
        text: None,
        show_tree: false,
        show_formulas: true,
        precision: DEFAULT_PRECISION,
    };

    for arg in args {
        if arg == "--tree" {
            options.show_tree = true;
        } else if arg == "--no-formulas" {
            options.show_formulas = false;
        } else if arg.starts_with("--precision=") {
            match arg.trim_start_matches("--precision=").parse::<usize>() {
                Ok(n) => options.precision = n.min(MAX_PRECISION),
                Err(_) => warn!("Ignoring invalid {}", arg),
            }
        } else if arg.starts_with("--") {
            warn!("Ignoring unknown option {}", arg);
        } else {
            words.push(arg.as_str());
        }
    }

    if !words.is_empty() {
        options.text = Some(words.join(" "));
    }
    options
}

fn prompt_for_text() -> io::Result<String> {
    print!("Enter a text fragment: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = parse_args(&args);

    let raw = match options.text {
        Some(text) => text,
        None => match prompt_for_text() {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read input: {}", e);
                std::process::exit(1);
            }
        },
    };

    let text = raw.trim();
    debug!("Input fragment: {:?}", text);

    let coding = match compute_huffman_coding(text) {
        Ok(coding) => coding,
        Err(e) => {
            error!("{}", e);
            eprintln!("Please enter a valid text fragment.");
            std::process::exit(1);
        }
    };

    if options.show_tree {
        println!("{}", render_tree(&coding.root, coding.counts.total()));
    }
    println!("{}", render_table(&coding.ordered_rows));
    print!("{}", render_summary(&coding.metrics, options.precision));
    if options.show_formulas {
        println!();
        print!("{}", render_formulas());
    }

    info!("--- End ---");
}
