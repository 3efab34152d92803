//! numtok - 轻量级数字令牌提取库
//! 按出现顺序从字符串中提取非负整数/浮点数序列

// 数字令牌扫描+解析核心逻辑
pub mod extractor;
// 全局错误类型
pub mod error;

// 导出全局错误类型
pub use self::error::{ExtractError, ExtractResult};

// 导出提取模块核心接口
pub use self::extractor::{extract_floats, extract_integers, NumericTokenExtractor};
