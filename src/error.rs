//! numtok 错误类型定义
//! 封装提取流程所有错误，基于thiserror实现类型安全处理
use thiserror::Error;

/// 提取错误枚举
/// 纯计算错误，无瞬态失败，不涉及重试语义
#[derive(Error, Debug)]
pub enum ExtractError {
    /// 无效输入（空字符串/纯空白字符串，调用前置校验失败）
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// 整数溢出（数字令牌超出u64表示范围）
    #[error("Integer overflow: {0}")]
    Overflow(String),

    /// 令牌解析失败（非法浮点令牌，如多个小数点/孤立小数点）
    #[error("Token parse failed: {0}")]
    ParseFailure(String),
}

/// 全局Result类型别名
/// 统一使用ExtractError作为错误类型
pub type ExtractResult<T> = Result<T, ExtractError>;
