//! # 错误处理宏

/// 快速创建配置错误的宏
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::ServiceError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::ServiceError::config(format!($fmt, $($arg)*))
    };
}

/// 快速创建数据完整性错误的宏
#[macro_export]
macro_rules! integrity_error {
    ($msg:expr) => {
        $crate::error::ServiceError::data_integrity($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::ServiceError::data_integrity(format!($fmt, $($arg)*))
    };
}

/// 确保条件成立，否则返回配置错误
#[macro_export]
macro_rules! ensure_config {
    ($cond:expr, $msg:expr) => {
        if !($cond) {
            return Err($crate::config_error!($msg));
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !($cond) {
            return Err($crate::config_error!($fmt, $($arg)*));
        }
    };
}

/// 确保条件成立，否则返回前置条件错误
#[macro_export]
macro_rules! ensure_precondition {
    ($cond:expr, $msg:expr) => {
        if !($cond) {
            return Err($crate::error::ServiceError::precondition($msg));
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !($cond) {
            return Err($crate::error::ServiceError::precondition(format!($fmt, $($arg)*)));
        }
    };
}
