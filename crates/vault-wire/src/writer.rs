//! # 字段写入器
//!
//! ## 设计意图（Why）
//! - 编码路径把“写键 → 写长度前缀 → 写载荷”的拼装逻辑集中到一处，记录实现按字段号
//!   逐个调用即可产出确定性的字节序列；
//! - 嵌套消息直接写入同一块缓冲：先由子记录的 `encoded_len` 算出精确长度前缀，
//!   再让子记录把字段续写进来，整个编码过程只分配一次。
//!
//! ## 契约说明（What）
//! - **前置条件**：调用方负责默认值省略判断，写入器收到什么就写什么；
//! - **后置条件**：[`FieldWriter::freeze`] 把可写缓冲转为只读 [`Bytes`] 移交调用方，
//!   此后缓冲归调用方独占；
//! - **失败场景**：单个载荷超出 2 GiB - 1 上限时报 [`EncodeError::PayloadTooLarge`]，
//!   嵌套记录的同类错误原样向上传播。

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::EncodeError;
use crate::record::Record;
use crate::tag::{WireType, encode_key};
use crate::varint::put_varint;

/// 单个长度前缀载荷的互操作上限（2 GiB - 1）。
pub const MAX_PAYLOAD_LEN: usize = i32::MAX as usize;

/// 基于 [`BytesMut`] 的字段写入器。
#[derive(Debug)]
pub struct FieldWriter {
    buf: BytesMut,
}

impl FieldWriter {
    /// 以给定容量预留缓冲；容量来自记录的 `encoded_len`，编码期间不再扩容。
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    /// 已写入的字节数。
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// 是否尚未写入任何字节。
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    fn put_key(&mut self, field: u32, wire: WireType) {
        put_varint(&mut self.buf, encode_key(field, wire));
    }

    fn put_length_delimited(&mut self, field: u32, payload: &[u8]) -> Result<(), EncodeError> {
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(EncodeError::PayloadTooLarge {
                field,
                len: payload.len(),
            });
        }
        self.put_key(field, WireType::LengthDelimited);
        put_varint(&mut self.buf, payload.len() as u64);
        self.buf.put_slice(payload);
        Ok(())
    }

    /// 写入一个字符串字段。
    pub fn put_str(&mut self, field: u32, value: &str) -> Result<(), EncodeError> {
        self.put_length_delimited(field, value.as_bytes())
    }

    /// 写入一个二进制字段（不透明载荷，按原样落盘）。
    pub fn put_blob(&mut self, field: u32, value: &[u8]) -> Result<(), EncodeError> {
        self.put_length_delimited(field, value)
    }

    /// 写入一个嵌套消息字段：长度前缀来自子记录的 `encoded_len`，
    /// 载荷由子记录的 `encode_fields` 续写进同一缓冲。
    pub fn put_message<R: Record>(&mut self, field: u32, value: &R) -> Result<(), EncodeError> {
        let len = value.encoded_len();
        if len > MAX_PAYLOAD_LEN {
            return Err(EncodeError::PayloadTooLarge { field, len });
        }
        self.put_key(field, WireType::LengthDelimited);
        put_varint(&mut self.buf, len as u64);
        value.encode_fields(self)
    }

    /// 冻结缓冲并移交只读字节序列。
    #[must_use]
    pub fn freeze(self) -> Bytes {
        self.buf.freeze()
    }
}
