//! # Uid 记录
//!
//! ## 设计意图（Why）
//! - 仓储内每个实体以 128 bit 标识符定位，线上形态是仅含一个二进制字段的嵌套消息；
//! - 标识符一经分配不可变，编解码器只负责按原样搬运字节，不参与生成或校验唯一性。
//!
//! ## 契约说明（What）
//! - 字段表：`value`（字段 1，二进制）；
//! - 零值 Uid（空 `value`）编码为空字节序列，容器在默认值省略时据此判断；
//! - 16 字节是约定俗成的标识符长度，但线上契约不强制——解码按原样接受任意长度，
//!   保证与历史数据及其他实现的互操作。

use alloc::vec::Vec;

use vault_wire::{
    DecodeError, EncodeError, FieldReader, FieldWriter, Record, WireType, length_delimited_len,
};

const FIELD_VALUE: u32 = 1;

/// 128 bit 实体标识符记录。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Uid {
    /// 标识符原始字节，约定为 16 字节但不由编解码器强制。
    pub value: Vec<u8>,
}

impl Uid {
    /// 以 16 字节标识符构造 Uid。
    #[must_use]
    pub fn from_bytes(value: [u8; 16]) -> Self {
        Self {
            value: value.to_vec(),
        }
    }

    /// 是否为零值（未赋值）标识符。
    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.value.is_empty()
    }
}

impl Record for Uid {
    fn encoded_len(&self) -> usize {
        if self.value.is_empty() {
            0
        } else {
            length_delimited_len(FIELD_VALUE, self.value.len())
        }
    }

    fn encode_fields(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        if !self.value.is_empty() {
            writer.put_blob(FIELD_VALUE, &self.value)?;
        }
        Ok(())
    }

    fn merge_field(
        &mut self,
        field: u32,
        wire: WireType,
        reader: &mut FieldReader<'_>,
    ) -> Result<(), DecodeError> {
        match field {
            FIELD_VALUE => {
                self.value = reader.read_blob(field, wire)?;
                Ok(())
            }
            _ => reader.skip(wire),
        }
    }
}
