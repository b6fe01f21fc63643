//! Error macros for digraph

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::DigraphError::invalid_value($context, $value))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::DigraphError::UsageError($msg.to_string()))
    };
}

/// Macro for rejecting a malformed edge-list line
#[macro_export]
macro_rules! bail_parse {
    ($line:expr, $($reason:tt)+) => {
        return Err($crate::error::DigraphError::parse($line, format!($($reason)+)))
    };
}
