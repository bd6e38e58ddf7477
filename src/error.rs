use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HuffmanError {
    /// The input text had no symbols, so frequencies are undefined.
    #[error("invalid input: text fragment is empty")]
    InvalidInput,

    /// Average code length came out as zero; efficiency would divide by zero.
    #[error("degenerate input: average code length is zero")]
    DegenerateInput,

    /// A counted symbol has no entry in the code table.
    #[error("code table has no code for symbol {0:?}")]
    MissingCode(char),
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
