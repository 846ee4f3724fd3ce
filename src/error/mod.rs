//! # 错误处理
//!
//! 全部操作共用 [`ServiceError`]，对外边界只暴露 [`ServiceError::public_message`]。

pub mod macros;
pub mod types;

pub use types::ServiceError;

/// 统一结果类型
pub type Result<T> = std::result::Result<T, ServiceError>;

/// 为任意可转换为 [`ServiceError`] 的错误附加上下文
pub trait Context<T> {
    /// 附加固定的上下文描述
    #[track_caller]
    fn context<C: std::fmt::Display>(self, context: C) -> Result<T>;

    /// 仅在出错时才构造上下文描述
    #[track_caller]
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: std::fmt::Display,
        F: FnOnce() -> C;
}

impl<T, E: Into<ServiceError>> Context<T> for std::result::Result<T, E> {
    fn context<C: std::fmt::Display>(self, context: C) -> Result<T> {
        self.with_context(|| context)
    }

    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: std::fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|error| ServiceError::Context {
            context: context().to_string(),
            source: Box::new(error.into()),
        })
    }
}

/// 错误归属：调用方问题（4xx）或服务端问题（5xx）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// 调用方问题
    Client,
    /// 服务端或存储问题
    Server,
}

#[cfg(test)]
mod tests;
