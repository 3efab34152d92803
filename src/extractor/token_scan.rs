//! 数字令牌扫描模块
//! 负责从输入字符串中按左到右顺序扫描最大数字串，并解析为非负整数/浮点数序列
//! 原始匹配规则为双分支前瞻 `[\d]+(?=[,-])|[\d]+(?![,-])`：
//! 「后随逗号/连字符」与「不后随逗号/连字符」两个分支互补，等价于所有最大数字串均命中，
//! 故此处化简为无前瞻的等价正则，语义完全一致

use std::num::IntErrorKind;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ExtractError, ExtractResult};

/// 整数令牌正则（双分支前瞻规则的等价化简形式）
static INT_TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// 浮点令牌正则（数字+小数点，令牌合法性在解析阶段校验）
static FLOAT_TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\d.]+").unwrap());

/// 从字符串中提取非负整数序列
///
/// # 参数
/// - `input`: 待扫描字符串，数字串之间可由逗号/连字符/任意非数字字符分隔
///
/// # 返回值
/// - `Ok(Vec<u64>)`: 按出现顺序排列的整数序列，无数字串时为空序列
/// - `Err(InvalidInput)`: 输入为空或纯空白
/// - `Err(Overflow)`: 某个数字串超出u64表示范围，不返回部分结果
///
/// # 功能特性
/// 1. 固定十进制解析，与系统区域设置无关
/// 2. 纯函数，无共享状态，可并发调用
pub fn extract_integers(input: &str) -> ExtractResult<Vec<u64>> {
    validate_input(input)?;

    let mut matches = Vec::new();
    for token in INT_TOKEN_REGEX.find_iter(input) {
        let token = token.as_str();
        log::trace!("Integer token matched: {}", token);
        let value = token.parse::<u64>().map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow => ExtractError::Overflow(token.to_string()),
            _ => ExtractError::ParseFailure(token.to_string()),
        })?;
        matches.push(value);
    }

    log::debug!("Extracted {} integer tokens", matches.len());
    Ok(matches)
}

/// 从字符串中提取非负浮点数序列
///
/// # 参数
/// - `input`: 待扫描字符串，令牌可含数字与至多一个小数点（`.`为唯一小数分隔符）
///
/// # 返回值
/// - `Ok(Vec<f32>)`: 按出现顺序排列的浮点数序列，无命中令牌时为空序列
/// - `Err(InvalidInput)`: 输入为空或纯空白
/// - `Err(ParseFailure)`: 某个令牌非法（多小数点/孤立小数点），不返回部分结果
///
/// # 功能特性
/// 1. 固定`.`小数分隔符，无千分位分隔符，与系统区域设置无关
/// 2. 超出f32表示范围的合法令牌按IEEE 754饱和为无穷大，不报错
/// 3. 纯函数，无共享状态，可并发调用
pub fn extract_floats(input: &str) -> ExtractResult<Vec<f32>> {
    validate_input(input)?;

    let mut matches = Vec::new();
    for token in FLOAT_TOKEN_REGEX.find_iter(input) {
        let token = token.as_str();
        log::trace!("Float token matched: {}", token);
        let value = token
            .parse::<f32>()
            .map_err(|_| ExtractError::ParseFailure(token.to_string()))?;
        matches.push(value);
    }

    log::debug!("Extracted {} float tokens", matches.len());
    Ok(matches)
}

/// 输入前置校验：拒绝空/纯空白输入
#[inline]
fn validate_input(input: &str) -> ExtractResult<()> {
    if input.trim().is_empty() {
        return Err(ExtractError::InvalidInput(
            "expression is empty or whitespace-only".to_string(),
        ));
    }
    Ok(())
}

/// 数字令牌提取工具类
/// 提供静态方法封装，与自由函数接口等价
pub struct NumericTokenExtractor;

impl NumericTokenExtractor {
    /// 提取非负整数序列，等价于 [`extract_integers`]
    pub fn integers(input: &str) -> ExtractResult<Vec<u64>> {
        extract_integers(input)
    }

    /// 提取非负浮点数序列，等价于 [`extract_floats`]
    pub fn floats(input: &str) -> ExtractResult<Vec<f32>> {
        extract_floats(input)
    }
}
