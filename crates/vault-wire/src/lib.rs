#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

//! # vault-wire
//!
//! ## 教案目的（Why）
//! - **定位**：分布式数据仓储各记录编解码器共享的线上格式地基，提供变长整数、
//!   字段键/线类型、切片读取器与缓冲写入器，以及统一的 [`Record`] 契约。
//! - **架构角色**：`vault-codec-*` 记录 crate 只依赖本 crate 即可完整实现编解码，
//!   不触碰任何传输或存储层；格式规则集中固化于此，跨记录、跨版本保持一致。
//! - **设计策略**：纯无状态变换——编码一次性预留精确容量并冻结移交，解码借用输入
//!   切片推进游标、产出完全自持的值，双向均无 I/O、无内部重试、无日志。
//!
//! ## 交互契约（What）
//! - **输出职责**：
//!   1. [`varint`] 提供 base-128 变长整数的写入与长度预估；
//!   2. [`tag`] 固化字段键编排与线类型校验；
//!   3. [`FieldReader`]/[`FieldWriter`] 承担字节游标与拼装；
//!   4. [`Record`] 把三者组合成“默认值起步、逐字段合并、未知字段跳过”的记录骨架。
//! - **前置条件**：字段号一经分配永不复用或重排；默认值省略是规范编码形态。
//! - **后置条件**：`decode(encode(r)) == r`；解码失败即全盘放弃，不产出部分结果。
//!
//! ## 风险提示（Trade-offs）
//! - 已废弃的 group 线类型（3/4）被直接拒绝，未知字段亦无法以该形态跳过；
//! - 单个长度前缀载荷上限为 2 GiB - 1，与主流实现的互操作边界一致。

extern crate alloc;

pub mod error;
pub mod reader;
pub mod record;
pub mod tag;
pub mod varint;
pub mod writer;

pub use error::{DecodeError, EncodeError};
pub use reader::FieldReader;
pub use record::Record;
pub use tag::{
    MAX_FIELD_NUMBER, WireType, encode_key, ensure_wire_type, key_len, length_delimited_len,
};
pub use varint::{MAX_VARINT_LEN, put_varint, varint_len};
pub use writer::{FieldWriter, MAX_PAYLOAD_LEN};
