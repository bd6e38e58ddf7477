//! Huffman code tables for text fragments, with average code length,
//! entropy and coding efficiency.
//!
//! ```
//! let coding = huffman_report::compute_huffman_coding("abracadabra").unwrap();
//! assert_eq!(coding.code_table[&'a'], "0");
//! assert!(coding.metrics.efficiency <= 1.0);
//! ```

pub mod error;
pub mod frequency;
pub mod huffman;
pub mod metrics;
pub mod report;

use log::info;

pub use error::{HuffmanError, Result};
pub use frequency::{FrequencyTable, Symbol, SymbolCount};
pub use huffman::{CodeTable, HuffmanTree, Node, build_code_table, build_huffman_tree};
pub use metrics::{Metrics, kraft_sum};
pub use report::{ReportRow, order_rows};

#[derive(Debug, Clone, PartialEq)]
pub struct HuffmanCoding {
    pub root: HuffmanTree,
    pub code_table: CodeTable,
    pub counts: FrequencyTable,
    pub ordered_rows: Vec<ReportRow>,
    pub metrics: Metrics,
}

impl HuffmanCoding {
    pub fn average_length(&self) -> f64 {
        self.metrics.average_length
    }

    pub fn entropy(&self) -> f64 {
        self.metrics.entropy
    }

    pub fn efficiency(&self) -> f64 {
        self.metrics.efficiency
    }
}

/// Runs the whole pipeline: counting, tree construction, code assignment,
/// metrics and row ordering. Fails with `InvalidInput` on empty text.
pub fn compute_huffman_coding(text: &str) -> Result<HuffmanCoding> {
    let counts = FrequencyTable::from_text(text)?;
    let root = build_huffman_tree(&counts)?;
    let code_table = build_code_table(&root);
    let metrics = Metrics::compute(&counts, &code_table)?;
    let ordered_rows = order_rows(&code_table, &counts)?;

    info!(
        "Coded {} symbols ({} distinct), efficiency {:.2}%",
        counts.total(),
        counts.len(),
        metrics.efficiency * 100.0
    );

    Ok(HuffmanCoding {
        root,
        code_table,
        counts,
        ordered_rows,
        metrics,
    })
}
