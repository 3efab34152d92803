//! 提取模块：从字符串中定位并解析数字令牌
pub mod token_scan;

pub use self::token_scan::{extract_floats, extract_integers, NumericTokenExtractor};
