#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

//! # vault-codec-dataset
//!
//! ## 教案目的（Why）
//! - **定位**：分布式数据仓储中 Dataset 实体的线上编解码实现，覆盖其两个嵌套
//!   协作记录（[`Uid`] 标识符与 [`StorableObject`] 载荷元素）；
//! - **架构角色**：上承存储层（以 `id` 为键持久化编码字节）与权限层（解释两份
//!   不透明权限快照），下踩 `vault-wire` 的格式地基；本 crate 只负责字节与值的
//!   双向映射，不做传输、授权或检索；
//! - **设计策略**：每个记录类型是一个按值持有全部字段的普通结构体，静态绑定字段表，
//!   嵌套消息通过 [`vault_wire::Record`] 契约直接委托，无运行时反射、无全局注册表。
//!
//! ## 交互契约（What）
//! - **输出职责**：`encode` 产出确定性的规范字节序列（默认值一律省略），
//!   `decode` 接受任意字节并产出完全自持的记录值；
//! - **前置条件**：字段号按各记录模块声明的字段表固定分配，永不复用或重排；
//! - **后置条件**：`decode(encode(d)) == d`；未知字段被安全跳过（前向兼容），
//!   重复单值字段取最后一次，重复字段按序追加；解码失败即整体放弃。
//!
//! ## 风险提示（Trade-offs）
//! - 标量字段没有“缺席”语义：缺失与等于默认值不可区分，与既有持久化数据的
//!   往返行为保持一致，实现时不得引入可选包装改变它；
//! - 编解码器对权限快照与对象载荷完全不透明，内容校验属于外部协作层。

extern crate alloc;

pub mod dataset;
pub mod storable;
pub mod uid;

pub use dataset::Dataset;
pub use storable::StorableObject;
pub use uid::Uid;
pub use vault_wire::{DecodeError, EncodeError, Record};
