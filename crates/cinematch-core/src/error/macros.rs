//! Error macros for cinematch

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::CinematchError::invalid_value(
            $context, $value,
        ))
    };
}

/// Macro for creating unsupported errors
#[macro_export]
macro_rules! bail_unsupported {
    ($context:expr, $value:expr, $supported:expr) => {
        return Err($crate::error::CinematchError::unsupported(
            $context, $value, $supported,
        ))
    };
}
