use std::collections::HashMap;

use log::{debug, trace};

use crate::error::{HuffmanError, Result};

pub type Symbol = char;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolCount {
    pub symbol: Symbol,
    pub count: u64,
}

/// Distinct symbols of a text fragment in first-occurrence order, with their
/// occurrence counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<SymbolCount>,
    index: HashMap<Symbol, usize>,
    total: u64,
}

impl FrequencyTable {
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_symbols(text.chars())
    }

    pub fn from_symbols<I>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = Symbol>,
    {
        let mut entries: Vec<SymbolCount> = Vec::new();
        let mut index: HashMap<Symbol, usize> = HashMap::new();
        let mut total = 0u64;

        for symbol in symbols {
            total += 1;
            match index.get(&symbol) {
                Some(&i) => entries[i].count += 1,
                None => {
                    trace!("First occurrence of {:?} at position {}", symbol, total - 1);
                    index.insert(symbol, entries.len());
                    entries.push(SymbolCount { symbol, count: 1 });
                }
            }
        }

        if total == 0 {
            return Err(HuffmanError::InvalidInput);
        }

        debug!(
            "Counted {} symbols, {} distinct",
            total,
            entries.len()
        );

        Ok(FrequencyTable {
            entries,
            index,
            total,
        })
    }

    /// Length of the analyzed input, in symbols.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymbolCount> {
        self.entries.iter()
    }

    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.entries.iter().map(|e| e.symbol)
    }

    pub fn count(&self, symbol: Symbol) -> Option<u64> {
        self.index.get(&symbol).map(|&i| self.entries[i].count)
    }

    /// Relative frequency `count / total`.
    pub fn frequency(&self, symbol: Symbol) -> Option<f64> {
        self.count(symbol)
            .map(|count| count as f64 / self.total as f64)
    }

    pub fn first_occurrence(&self, symbol: Symbol) -> Option<usize> {
        self.index.get(&symbol).copied()
    }

    /// Relative frequencies parallel to `symbols()`.
    pub fn frequencies(&self) -> Vec<f64> {
        let total = self.total as f64;
        self.entries
            .iter()
            .map(|e| e.count as f64 / total)
            .collect()
    }
}
