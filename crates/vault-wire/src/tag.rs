//! # 字段键与线类型
//!
//! ## 设计意图（Why）
//! - 线上格式的每个字段以“键 + 载荷”形式出现，键把字段号与线类型压进同一个变长整数，
//!   读方据此决定如何消费或跳过后续字节；
//! - 字段号一经分配永不复用、永不重排，这是跨版本兼容的根基，因此键的编解码规则
//!   必须集中在单一模块内固化。
//!
//! ## 契约说明（What）
//! - 键 = `(field_number << 3) | wire_type`；字段号合法区间为 `1..=MAX_FIELD_NUMBER`；
//! - [`WireType`] 仅枚举仍受支持的四种线类型；已废弃的 group 类型（3/4）在
//!   [`WireType::from_raw`] 中被拒绝，未知字段也无法以 group 形式被跳过。

use crate::error::DecodeError;
use crate::varint::varint_len;

/// 字段号上限（29 bit）。
pub const MAX_FIELD_NUMBER: u32 = (1 << 29) - 1;

/// 线类型，标识字段键之后的字节该如何解析。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireType {
    /// 变长整数载荷。
    Varint = 0,
    /// 定长 8 字节载荷。
    Fixed64 = 1,
    /// 长度前缀载荷（字符串、二进制、嵌套消息、重复字段条目）。
    LengthDelimited = 2,
    /// 定长 4 字节载荷。
    Fixed32 = 5,
}

impl WireType {
    /// 从键的低 3 bit 还原线类型；group 类型与保留值返回 `None`。
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Varint),
            1 => Some(Self::Fixed64),
            2 => Some(Self::LengthDelimited),
            5 => Some(Self::Fixed32),
            _ => None,
        }
    }
}

/// 组装字段键。
///
/// - **Contract**：`field` 须位于 `1..=MAX_FIELD_NUMBER`；写路径由记录实现静态保证，
///   因此此处不做运行时校验。
#[must_use]
pub const fn encode_key(field: u32, wire: WireType) -> u64 {
    ((field as u64) << 3) | wire as u64
}

/// 计算字段键的编码长度（字节）。
#[must_use]
pub const fn key_len(field: u32) -> usize {
    varint_len((field as u64) << 3)
}

/// 计算一个长度前缀字段的总编码长度：键 + 长度前缀 + 载荷。
#[must_use]
pub const fn length_delimited_len(field: u32, payload_len: usize) -> usize {
    key_len(field) + varint_len(payload_len as u64) + payload_len
}

/// 校验已知字段的线类型是否与声明一致，错位立即报错而非强行解析。
pub fn ensure_wire_type(
    field: u32,
    expected: WireType,
    actual: WireType,
) -> Result<(), DecodeError> {
    if expected != actual {
        return Err(DecodeError::WireTypeMismatch {
            field,
            expected,
            actual,
        });
    }
    Ok(())
}
