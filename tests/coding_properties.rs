use huffman_report::{HuffmanError, compute_huffman_coding, kraft_sum};

const CORPUS: &[&str] = &[
    "a",
    "ab",
    "aab",
    "abracadabra",
    "mississippi",
    "hello world",
    "the quick brown fox jumps over the lazy dog",
    "AAAAABBBBCCCDDE",
    "zażółć gęślą jaźń",
    "0123456789",
    "aaaaaaaaaaaaaaaaaaaaaaaaaaaaab",
];

#[test]
fn codes_are_prefix_free() {
    for text in CORPUS {
        let coding = compute_huffman_coding(text).unwrap();
        let codes: Vec<&String> = coding.code_table.values().collect();
        for (i, a) in codes.iter().enumerate() {
            assert!(!a.is_empty(), "empty code in {:?}", text);
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a.as_str()), "{} prefixes {} in {:?}", a, b, text);
                }
            }
        }
    }
}

#[test]
fn one_code_per_distinct_symbol() {
    for text in CORPUS {
        let coding = compute_huffman_coding(text).unwrap();
        assert_eq!(coding.code_table.len(), coding.counts.len());
        assert_eq!(coding.ordered_rows.len(), coding.counts.len());
        assert_eq!(coding.root.leaf_count(), coding.counts.len());
        for symbol in text.chars() {
            assert!(coding.code_table.contains_key(&symbol));
        }
    }
}

#[test]
fn frequencies_sum_to_one() {
    for text in CORPUS {
        let coding = compute_huffman_coding(text).unwrap();
        let sum: f64 = coding.counts.frequencies().iter().sum();
        assert!((sum - 1.0).abs() < 1e-9, "{:?} sums to {}", text, sum);
    }
}

#[test]
fn kraft_equality_with_two_or_more_symbols() {
    for text in CORPUS {
        let coding = compute_huffman_coding(text).unwrap();
        if coding.counts.len() >= 2 {
            assert!((kraft_sum(&coding.code_table) - 1.0).abs() < 1e-12);
        }
    }
}

#[test]
fn efficiency_never_exceeds_one() {
    for text in CORPUS {
        let coding = compute_huffman_coding(text).unwrap();
        assert!(coding.efficiency() <= 1.0 + 1e-9);
        assert!(coding.average_length() + 1e-9 >= coding.entropy());
        // Huffman codes stay within one bit of the entropy.
        assert!(coding.average_length() <= coding.entropy() + 1.0);
    }
}

#[test]
fn repeated_runs_are_identical() {
    for text in CORPUS {
        let first = compute_huffman_coding(text).unwrap();
        let second = compute_huffman_coding(text).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn rows_ordered_by_length_then_first_occurrence() {
    for text in CORPUS {
        let coding = compute_huffman_coding(text).unwrap();
        for pair in coding.ordered_rows.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let a_pos = coding.counts.first_occurrence(a.symbol).unwrap();
            let b_pos = coding.counts.first_occurrence(b.symbol).unwrap();
            assert!(a.length < b.length || (a.length == b.length && a_pos < b_pos));
        }
    }
}

#[test]
fn single_symbol_input() {
    let coding = compute_huffman_coding("aaaa").unwrap();
    assert_eq!(coding.code_table.len(), 1);
    assert_eq!(coding.code_table[&'a'], "0");
    assert_eq!(coding.average_length(), 1.0);
    assert_eq!(coding.entropy(), 0.0);
    assert_eq!(coding.efficiency(), 0.0);
}

#[test]
fn abracadabra_worked_example() {
    let coding = compute_huffman_coding("abracadabra").unwrap();
    assert_eq!(coding.counts.total(), 11);
    let expected = [('a', 5.0), ('b', 2.0), ('r', 2.0), ('c', 1.0), ('d', 1.0)];
    for (symbol, count) in expected {
        let freq = coding.counts.frequency(symbol).unwrap();
        assert!((freq - count / 11.0).abs() < 1e-12);
    }
    assert!((coding.entropy() - 2.0404).abs() < 1e-4);
    assert!(coding.average_length() >= coding.entropy());
    assert!(coding.efficiency() <= 1.0);
    assert!((kraft_sum(&coding.code_table) - 1.0).abs() < 1e-12);
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(compute_huffman_coding(""), Err(HuffmanError::InvalidInput));
}
