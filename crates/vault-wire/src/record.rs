//! # 记录契约
//!
//! ## 设计意图（Why）
//! - 所有线上记录（Uid、存储对象、数据集等）共享同一套编解码骨架：默认值起步、
//!   逐字段合并、未知字段跳过。把骨架提炼为 trait，记录实现只需声明三件事——
//!   自身的精确编码长度、字段写出顺序、以及单个字段的合并规则；
//! - 嵌套消息通过本契约递归委托：容器以长度前缀包裹子记录，子记录复用完全相同的
//!   入口，不引入虚分发。
//!
//! ## 契约说明（What）
//! - **前置条件**：`Default` 产出该记录的零值（所有标量为空、序列为空）；
//! - **后置条件**：`decode(encode(r)) == r` 对一切合法内存值成立；重复出现的单值
//!   字段取最后一次（last-value-wins），重复字段按出现顺序追加；
//! - **失败场景**：编码仅在载荷超限时失败；解码对截断、畸形与线类型错位报
//!   [`DecodeError`]，且为全有或全无——失败时不产出部分结果。
//!
//! ## 风险提示（Trade-offs）
//! - `encoded_len` 与 `encode_fields` 必须对同一值给出一致答案，否则长度前缀会撒谎；
//!   集成测试以 `encode().len() == encoded_len()` 锁住该契约。

use bytes::Bytes;

use crate::error::{DecodeError, EncodeError};
use crate::reader::FieldReader;
use crate::tag::WireType;
use crate::writer::FieldWriter;

/// 可编解码的线上记录。
pub trait Record: Default {
    /// 返回当前值编码后的精确字节数（含默认值省略的效果）。
    fn encoded_len(&self) -> usize;

    /// 按字段号升序把非默认字段写入 `writer`。
    fn encode_fields(&self, writer: &mut FieldWriter) -> Result<(), EncodeError>;

    /// 把一个字段合并进当前值；未知字段号必须调用 [`FieldReader::skip`] 跳过。
    fn merge_field(
        &mut self,
        field: u32,
        wire: WireType,
        reader: &mut FieldReader<'_>,
    ) -> Result<(), DecodeError>;

    /// 编码为独立拥有的只读字节序列。
    ///
    /// - **Contract**：输出长度恒等于 [`Record::encoded_len`]；全默认值编码为空序列。
    fn encode(&self) -> Result<Bytes, EncodeError> {
        let mut writer = FieldWriter::with_capacity(self.encoded_len());
        self.encode_fields(&mut writer)?;
        debug_assert_eq!(writer.len(), self.encoded_len());
        Ok(writer.freeze())
    }

    /// 从字节序列解码出拥有全部字段所有权的记录值。
    ///
    /// - **Contract**：返回值不保留对 `bytes` 的任何引用，调用方可立即复用缓冲；
    ///   空输入解码为零值记录。
    fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut value = Self::default();
        let mut reader = FieldReader::new(bytes);
        while let Some((field, wire)) = reader.next_key()? {
            value.merge_field(field, wire, &mut reader)?;
        }
        Ok(value)
    }
}
