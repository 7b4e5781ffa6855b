use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("writing generated code failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("interface {interface} declares method {method} more than once")]
    DuplicateMethod { interface: String, method: String },

    #[error("interface {interface} declares {raw}, which clashes with the On{raw} setter generated for {method}")]
    RawSetterClash {
        interface: String,
        method: String,
        raw: String,
    },

    #[error("{interface}.{method} has {count} parameters; only the first 26 may be unnamed")]
    TooManyParameters {
        interface: String,
        method: String,
        count: usize,
    },

    #[error("{interface}.{method} returns {count} values; at most 26 are supported")]
    TooManyResults {
        interface: String,
        method: String,
        count: usize,
    },
}

pub type Result<T> = std::result::Result<T, GenerateError>;
