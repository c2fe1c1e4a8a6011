//! # 字段读取器
//!
//! ## 设计意图（Why）
//! - 解码路径面对的是任意不可信字节流，读取器把“取键 → 校验 → 消费载荷”的游标推进
//!   逻辑集中到一处，记录实现只需按字段号分发；
//! - 借用输入切片而非复制：载荷以 `&[u8]` 子切片暴露，由记录实现决定何时转为
//!   拥有所有权的值，保证解码返回后不再引用调用方缓冲。
//!
//! ## 契约说明（What）
//! - **前置条件**：输入切片在读取器存活期间保持只读；
//! - **后置条件**：任一方法返回错误后读取器不可继续使用，解码方应整体放弃该载荷；
//! - **失败场景**：全部收敛到 [`DecodeError`]，不存在静默截断或字节错位吞噬。
//!
//! ## 风险提示（Trade-offs）
//! - 读取器不做递归深度限制；嵌套消息的递归由记录层驱动，当前记录族仅两层嵌套，
//!   攻击面受长度前缀总量约束。

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::DecodeError;
use crate::tag::{MAX_FIELD_NUMBER, WireType, ensure_wire_type};
use crate::varint::MAX_VARINT_LEN;

/// 基于切片游标的字段读取器。
#[derive(Debug)]
pub struct FieldReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> FieldReader<'a> {
    /// 在输入切片上创建读取器，游标位于起始处。
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// 剩余未消费的字节数。
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// 输入是否已全部消费。
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pos == self.buf.len()
    }

    /// 消费 `len` 字节并返回对应子切片；不足则报截断。
    fn take(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        if len > self.remaining() {
            return Err(DecodeError::Truncated {
                expected: len,
                remaining: self.remaining(),
            });
        }
        let slice = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    /// 读取一个小端 base-128 变长整数。
    ///
    /// - **失败场景**：输入中途耗尽报 `UnexpectedEof`；超过 10 字节仍有续行标记、
    ///   或第 10 字节溢出 64 bit，报 `InvalidVarint`。
    pub fn read_varint(&mut self) -> Result<u64, DecodeError> {
        let mut value: u64 = 0;
        for index in 0..MAX_VARINT_LEN {
            let Some(byte) = self.buf.get(self.pos) else {
                return Err(DecodeError::UnexpectedEof);
            };
            self.pos += 1;
            // 第 10 字节仅剩 1 bit 可用，续行或高位溢出均视为畸形。
            if index == MAX_VARINT_LEN - 1 && *byte > 0x01 {
                return Err(DecodeError::InvalidVarint);
            }
            value |= u64::from(byte & 0x7F) << (index * 7);
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(DecodeError::InvalidVarint)
    }

    /// 读取下一个字段键；输入耗尽时返回 `None`。
    ///
    /// - **失败场景**：字段号 0 或超出 [`MAX_FIELD_NUMBER`]（29 bit）报
    ///   `InvalidFieldNumber`——越界字段号若被低位截断，载荷会错位进其他字段，
    ///   必须整键拒绝；线类型 3/4/6/7 报 `UnsupportedWireType`，未知字段亦无法
    ///   以这些类型被跳过。
    pub fn next_key(&mut self) -> Result<Option<(u32, WireType)>, DecodeError> {
        if self.is_empty() {
            return Ok(None);
        }
        let key = self.read_varint()?;
        let field_number = key >> 3;
        if field_number == 0 || field_number > u64::from(MAX_FIELD_NUMBER) {
            return Err(DecodeError::InvalidFieldNumber);
        }
        let field = field_number as u32;
        let raw = (key & 0x07) as u8;
        let Some(wire) = WireType::from_raw(raw) else {
            return Err(DecodeError::UnsupportedWireType(raw));
        };
        Ok(Some((field, wire)))
    }

    /// 读取一个长度前缀载荷，返回借用的子切片。
    pub fn read_length_delimited(&mut self) -> Result<&'a [u8], DecodeError> {
        let len = self.read_varint()?;
        if len > self.remaining() as u64 {
            return Err(DecodeError::Truncated {
                expected: len as usize,
                remaining: self.remaining(),
            });
        }
        self.take(len as usize)
    }

    /// 读取字段 `field` 的字符串载荷，校验线类型与 UTF-8 合法性。
    pub fn read_string(&mut self, field: u32, wire: WireType) -> Result<String, DecodeError> {
        ensure_wire_type(field, WireType::LengthDelimited, wire)?;
        let payload = self.read_length_delimited()?;
        core::str::from_utf8(payload)
            .map(String::from)
            .map_err(|_| DecodeError::InvalidUtf8 { field })
    }

    /// 读取字段 `field` 的二进制载荷，返回拥有所有权的副本。
    pub fn read_blob(&mut self, field: u32, wire: WireType) -> Result<Vec<u8>, DecodeError> {
        ensure_wire_type(field, WireType::LengthDelimited, wire)?;
        Ok(self.read_length_delimited()?.to_vec())
    }

    /// 读取字段 `field` 的嵌套消息载荷，返回借用的子切片供子记录递归解码。
    pub fn read_message(&mut self, field: u32, wire: WireType) -> Result<&'a [u8], DecodeError> {
        ensure_wire_type(field, WireType::LengthDelimited, wire)?;
        self.read_length_delimited()
    }

    /// 按线类型规则跳过一个未知字段的载荷（前向兼容：读方忽略不认识的字段）。
    pub fn skip(&mut self, wire: WireType) -> Result<(), DecodeError> {
        match wire {
            WireType::Varint => {
                self.read_varint()?;
            }
            WireType::Fixed64 => {
                self.take(8)?;
            }
            WireType::LengthDelimited => {
                self.read_length_delimited()?;
            }
            WireType::Fixed32 => {
                self.take(4)?;
            }
        }
        Ok(())
    }
}
