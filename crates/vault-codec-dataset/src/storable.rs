//! # StorableObject 记录
//!
//! ## 设计意图（Why）
//! - 数据集的 `data` 序列由存储对象逐个构成，每个对象携带自身标识、不透明的序列化
//!   载荷与检索元数据，可独立编解码；
//! - 权限字段对编解码器完全不透明：序列化的权限结构由外部权限层解释，本层只保证
//!   字节原样往返。
//!
//! ## 契约说明（What）
//! - 字段表：`id`（1，嵌套 Uid）、`data`（2，二进制）、`description`（3，字符串）、
//!   `tags`（4，重复字符串）、`read_permissions`（5，二进制）、
//!   `search_permissions`（6，二进制）；
//! - 合并规则与所有记录一致：单值字段 last-value-wins、重复字段按序追加、
//!   未知字段按线类型跳过、缺失字段落为零值。

use alloc::string::String;
use alloc::vec::Vec;

use vault_wire::{
    DecodeError, EncodeError, FieldReader, FieldWriter, Record, WireType, length_delimited_len,
};

use crate::uid::Uid;

const FIELD_ID: u32 = 1;
const FIELD_DATA: u32 = 2;
const FIELD_DESCRIPTION: u32 = 3;
const FIELD_TAGS: u32 = 4;
const FIELD_READ_PERMISSIONS: u32 = 5;
const FIELD_SEARCH_PERMISSIONS: u32 = 6;

/// 仓储中的单个存储对象：标识 + 不透明载荷 + 检索元数据 + 权限快照。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorableObject {
    /// 对象标识符。
    pub id: Uid,
    /// 对象本体的序列化字节，本层不解释其内容。
    pub data: Vec<u8>,
    /// 自由文本描述，空串为合法默认值。
    pub description: String,
    /// 检索标签，保序且允许重复。
    pub tags: Vec<String>,
    /// 读取权限的序列化快照（不透明）。
    pub read_permissions: Vec<u8>,
    /// 检索可见性权限的序列化快照（不透明）。
    pub search_permissions: Vec<u8>,
}

impl Record for StorableObject {
    fn encoded_len(&self) -> usize {
        let mut len = 0;
        if !self.id.is_nil() {
            len += length_delimited_len(FIELD_ID, self.id.encoded_len());
        }
        if !self.data.is_empty() {
            len += length_delimited_len(FIELD_DATA, self.data.len());
        }
        if !self.description.is_empty() {
            len += length_delimited_len(FIELD_DESCRIPTION, self.description.len());
        }
        for tag in &self.tags {
            len += length_delimited_len(FIELD_TAGS, tag.len());
        }
        if !self.read_permissions.is_empty() {
            len += length_delimited_len(FIELD_READ_PERMISSIONS, self.read_permissions.len());
        }
        if !self.search_permissions.is_empty() {
            len += length_delimited_len(FIELD_SEARCH_PERMISSIONS, self.search_permissions.len());
        }
        len
    }

    fn encode_fields(&self, writer: &mut FieldWriter) -> Result<(), EncodeError> {
        if !self.id.is_nil() {
            writer.put_message(FIELD_ID, &self.id)?;
        }
        if !self.data.is_empty() {
            writer.put_blob(FIELD_DATA, &self.data)?;
        }
        if !self.description.is_empty() {
            writer.put_str(FIELD_DESCRIPTION, &self.description)?;
        }
        for tag in &self.tags {
            writer.put_str(FIELD_TAGS, tag)?;
        }
        if !self.read_permissions.is_empty() {
            writer.put_blob(FIELD_READ_PERMISSIONS, &self.read_permissions)?;
        }
        if !self.search_permissions.is_empty() {
            writer.put_blob(FIELD_SEARCH_PERMISSIONS, &self.search_permissions)?;
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
            FIELD_ID => {
                self.id = Uid::decode(reader.read_message(field, wire)?)?;
            }
            FIELD_DATA => {
                self.data = reader.read_blob(field, wire)?;
            }
            FIELD_DESCRIPTION => {
                self.description = reader.read_string(field, wire)?;
            }
            FIELD_TAGS => {
                self.tags.push(reader.read_string(field, wire)?);
            }
            FIELD_READ_PERMISSIONS => {
                self.read_permissions = reader.read_blob(field, wire)?;
            }
            FIELD_SEARCH_PERMISSIONS => {
                self.search_permissions = reader.read_blob(field, wire)?;
            }
            _ => reader.skip(wire)?,
        }
        Ok(())
    }
}
