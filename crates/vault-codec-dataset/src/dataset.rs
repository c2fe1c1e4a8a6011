//! # Dataset 记录
//!
//! ## 设计意图（Why）
//! - 数据集是仓储的顶层容器实体：一个标识符、类型还原信息、有序的存储对象序列、
//!   检索标签与两份权限快照，编码后由存储层按 `id` 持久化；
//! - 线上契约必须跨实现、跨版本字节级兼容：字段号固定不重排，未知字段可被任何
//!   旧版读方安全跳过。
//!
//! ## 契约说明（What）
//! - 字段表（全部为长度前缀线类型）：
//!   `id`（1，嵌套 Uid）、`obj_type`（2，字符串）、`schematic_qualname`（3，字符串）、
//!   `data`（4，重复 StorableObject）、`description`（5，字符串）、
//!   `tags`（6，重复字符串）、`read_permissions`（7，二进制）、
//!   `search_permissions`（8，二进制）；
//! - `data` 与 `tags` 保序，位置可能映射到模式列，编解码器绝不重排或去重；
//! - 标量字段不存在“缺席”与“等于默认值”的区分：缺失字段落为零值，这是既有持久化
//!   数据的往返语义，不得引入可选语义改变它。
//!
//! ## 实现策略（How）
//! - 编码：先以 `encoded_len` 精确预留缓冲，再按字段号升序写出非默认字段，
//!   嵌套记录经长度前缀续写进同一缓冲，输出确定性字节序列；
//! - 解码：逐键分发，嵌套消息递归委托给子记录的解码入口，错误原样向上传播。

use alloc::string::String;
use alloc::vec::Vec;

use vault_wire::{
    DecodeError, EncodeError, FieldReader, FieldWriter, Record, WireType, length_delimited_len,
};

use crate::storable::StorableObject;
use crate::uid::Uid;

const FIELD_ID: u32 = 1;
const FIELD_OBJ_TYPE: u32 = 2;
const FIELD_SCHEMATIC_QUALNAME: u32 = 3;
const FIELD_DATA: u32 = 4;
const FIELD_DESCRIPTION: u32 = 5;
const FIELD_TAGS: u32 = 6;
const FIELD_READ_PERMISSIONS: u32 = 7;
const FIELD_SEARCH_PERMISSIONS: u32 = 8;

/// 数据集容器实体。
///
/// ### 契约说明（What）
/// - 所有字段按值持有，互不共享；`PartialEq` 即线上契约定义的值相等：
///   重复字段逐元素按序比较，权限快照逐字节比较；
/// - 零值数据集编码为空字节序列，空字节序列亦解码回零值数据集。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    /// 数据集标识符，一经赋值不可变。
    pub id: Uid,
    /// 原始逻辑类型名，读取侧据此还原数据集本体。
    pub obj_type: String,
    /// 解释 `data` 所用模式类的全限定名，空串表示未指定。
    pub schematic_qualname: String,
    /// 存储对象序列，保序且每个元素可独立解码。
    pub data: Vec<StorableObject>,
    /// 自由文本描述。
    pub description: String,
    /// 检索标签，保序、不去重。
    pub tags: Vec<String>,
    /// 读取权限的序列化快照（不透明字节）。
    pub read_permissions: Vec<u8>,
    /// 检索可见性权限的序列化快照（不透明字节，与读取权限分属不同域）。
    pub search_permissions: Vec<u8>,
}

impl Record for Dataset {
    fn encoded_len(&self) -> usize {
        let mut len = 0;
        if !self.id.is_nil() {
            len += length_delimited_len(FIELD_ID, self.id.encoded_len());
        }
        if !self.obj_type.is_empty() {
            len += length_delimited_len(FIELD_OBJ_TYPE, self.obj_type.len());
        }
        if !self.schematic_qualname.is_empty() {
            len += length_delimited_len(FIELD_SCHEMATIC_QUALNAME, self.schematic_qualname.len());
        }
        for object in &self.data {
            len += length_delimited_len(FIELD_DATA, object.encoded_len());
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
        if !self.obj_type.is_empty() {
            writer.put_str(FIELD_OBJ_TYPE, &self.obj_type)?;
        }
        if !self.schematic_qualname.is_empty() {
            writer.put_str(FIELD_SCHEMATIC_QUALNAME, &self.schematic_qualname)?;
        }
        for object in &self.data {
            writer.put_message(FIELD_DATA, object)?;
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
            FIELD_OBJ_TYPE => {
                self.obj_type = reader.read_string(field, wire)?;
            }
            FIELD_SCHEMATIC_QUALNAME => {
                self.schematic_qualname = reader.read_string(field, wire)?;
            }
            FIELD_DATA => {
                self.data
                    .push(StorableObject::decode(reader.read_message(field, wire)?)?);
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
