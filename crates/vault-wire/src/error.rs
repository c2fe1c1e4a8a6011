//! # 编解码错误域
//!
//! ## 设计意图（Why）
//! - 编码与解码的失败语义截然不同：前者只会因为内存值违反线上格式的硬性上限而失败，
//!   后者面对的是任意不可信字节流，需要把“截断/畸形/类型错位”区分开供上层决策；
//! - 两套枚举均为无堆分配的小型值类型，可在 `no_std + alloc` 环境下自由复制与比较。
//!
//! ## 契约说明（What）
//! - [`EncodeError`]：由嵌套记录编码阶段产生并原样向上传播，编解码器内部不做重试；
//! - [`DecodeError`]：任何一个变体都意味着“该载荷不可信”，调用方必须整体丢弃，
//!   不得复用已部分解出的字段（解码为全有或全无语义）。
//!
//! ## 风险提示（Trade-offs）
//! - 变体携带字段号与长度等机读上下文，便于排障，但不携带原始字节，避免把
//!   不可信数据拖进日志链路。

use core::fmt;

use crate::tag::WireType;

/// 编码错误，覆盖把内存值写成线上字节时唯一可能的失败场景。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// 单个长度前缀载荷超出 2 GiB - 1 的互操作上限。
    PayloadTooLarge {
        /// 触发超限的字段号。
        field: u32,
        /// 实际载荷字节数。
        len: usize,
    },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PayloadTooLarge { field, len } => {
                write!(f, "字段 {} 的载荷长度 {} 超出 2 GiB - 1 上限", field, len)
            }
        }
    }
}

impl core::error::Error for EncodeError {}

/// 解码错误，覆盖字节级校验的全部失败场景。
///
/// ### 契约说明（What）
/// - **前置条件**：输入为任意字节序列，不做任何可信假设；
/// - **后置条件**：一旦返回本错误，解码方不产出任何部分结果；
/// - **失败场景**：长度前缀越界、变长整数畸形、字段号非法、线类型不受支持或与
///   已知字段不匹配、字符串字段非 UTF-8。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// 长度前缀声称的字节数超过剩余输入。
    Truncated {
        /// 长度前缀要求的字节数。
        expected: usize,
        /// 输入中实际剩余的字节数。
        remaining: usize,
    },
    /// 读取变长整数或定长字段时输入提前耗尽。
    UnexpectedEof,
    /// 变长整数超过 10 字节仍未终止，或最高字节溢出 64 bit。
    InvalidVarint,
    /// 字段号为 0 或超出 29 bit 合法区间，线上格式不允许。
    InvalidFieldNumber,
    /// 线类型编码不受支持（含已废弃的 group 类型 3/4）。
    UnsupportedWireType(u8),
    /// 已知字段携带了与其声明不符的线类型。
    WireTypeMismatch {
        /// 发生错位的字段号。
        field: u32,
        /// 该字段声明的线类型。
        expected: WireType,
        /// 字节流中实际出现的线类型。
        actual: WireType,
    },
    /// 字符串字段的载荷不是合法 UTF-8。
    InvalidUtf8 {
        /// 发生错误的字段号。
        field: u32,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated {
                expected,
                remaining,
            } => write!(
                f,
                "长度前缀要求 {} 字节，输入仅剩 {} 字节",
                expected, remaining
            ),
            Self::UnexpectedEof => f.write_str("输入在字段中途耗尽"),
            Self::InvalidVarint => f.write_str("变长整数畸形或溢出 64 bit"),
            Self::InvalidFieldNumber => f.write_str("字段号为 0 或超出 29 bit 合法区间"),
            Self::UnsupportedWireType(raw) => {
                write!(f, "线类型 {} 不受支持", raw)
            }
            Self::WireTypeMismatch {
                field,
                expected,
                actual,
            } => write!(
                f,
                "字段 {} 声明线类型 {:?}，实际为 {:?}",
                field, expected, actual
            ),
            Self::InvalidUtf8 { field } => {
                write!(f, "字段 {} 的字符串载荷不是合法 UTF-8", field)
            }
        }
    }
}

impl core::error::Error for DecodeError {}
