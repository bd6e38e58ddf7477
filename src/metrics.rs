use log::debug;

use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::huffman::CodeTable;

/// Summary figures of a code table against its source distribution, all in
/// bits per symbol except `efficiency`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub average_length: f64,
    pub entropy: f64,
    /// `entropy / average_length`. Zero for a single-symbol source.
    pub efficiency: f64,
}

impl Metrics {
    pub fn compute(frequencies: &FrequencyTable, codes: &CodeTable) -> Result<Self> {
        let total = frequencies.total() as f64;

        let mut average_length = 0.0;
        let mut entropy = 0.0;
        for entry in frequencies.iter() {
            let p = entry.count as f64 / total;
            let code = codes
                .get(&entry.symbol)
                .ok_or(HuffmanError::MissingCode(entry.symbol))?;
            average_length += p * code.len() as f64;
            entropy += p * (1.0 / p).log2();
        }

        if average_length == 0.0 {
            return Err(HuffmanError::DegenerateInput);
        }

        let efficiency = entropy / average_length;
        debug!(
            "L = {:.4} bits, H = {:.4} bits/symbol, efficiency = {:.4}",
            average_length, entropy, efficiency
        );

        Ok(Metrics {
            average_length,
            entropy,
            efficiency,
        })
    }
}

/// `Σ 2^-len` over all codes. Equals 1 for the codes of a full binary tree.
pub fn kraft_sum(codes: &CodeTable) -> f64 {
    codes
        .values()
        .map(|code| 2f64.powi(-(code.len() as i32)))
        .sum()
}
