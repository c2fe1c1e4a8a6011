//! 往返性质验证
//!
//! # 测试目标（Why）
//! - 用 Proptest 在随机生成的记录值上锁住两条核心性质：
//!   1. `decode(encode(d)) == d` 对一切合法内存值成立，且输出长度与 `encoded_len`
//!      严格一致；
//!   2. 任意截断点上，解码要么显式失败，要么产出一个规范编码恰为该前缀的部分
//!      记录——绝不静默产出错位字段。
//!
//! # 结构说明（How）
//! - `uid_strategy`/`storable_strategy`/`dataset_strategy` 逐层组合生成器，
//!   序列长度刻意压小以控制用例体积；
//! - 字符串生成器覆盖多字节 UTF-8，确保长度计算按字节而非字符。

use proptest::prelude::*;

use vault_codec_dataset::{Dataset, Record, StorableObject, Uid};

fn text_strategy() -> impl Strategy<Value = String> {
    // 覆盖 ASCII 与多字节码点，空串概率天然存在。
    proptest::string::string_regex("[a-z0-9._\u{4e00}-\u{4e2f}]{0,12}").expect("合法正则")
}

fn blob_strategy() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 0..32)
}

fn uid_strategy() -> impl Strategy<Value = Uid> {
    proptest::collection::vec(any::<u8>(), 0..=20).prop_map(|value| Uid { value })
}

fn storable_strategy() -> impl Strategy<Value = StorableObject> {
    (
        uid_strategy(),
        blob_strategy(),
        text_strategy(),
        proptest::collection::vec(text_strategy(), 0..4),
        blob_strategy(),
        blob_strategy(),
    )
        .prop_map(
            |(id, data, description, tags, read_permissions, search_permissions)| StorableObject {
                id,
                data,
                description,
                tags,
                read_permissions,
                search_permissions,
            },
        )
}

fn dataset_strategy() -> impl Strategy<Value = Dataset> {
    (
        uid_strategy(),
        text_strategy(),
        text_strategy(),
        proptest::collection::vec(storable_strategy(), 0..4),
        text_strategy(),
        proptest::collection::vec(text_strategy(), 0..5),
        blob_strategy(),
        blob_strategy(),
    )
        .prop_map(
            |(
                id,
                obj_type,
                schematic_qualname,
                data,
                description,
                tags,
                read_permissions,
                search_permissions,
            )| Dataset {
                id,
                obj_type,
                schematic_qualname,
                data,
                description,
                tags,
                read_permissions,
                search_permissions,
            },
        )
}

proptest! {
    #[test]
    fn uid_round_trips(uid in uid_strategy()) {
        let bytes = uid.encode().unwrap();
        prop_assert_eq!(bytes.len(), uid.encoded_len());
        prop_assert_eq!(Uid::decode(&bytes).unwrap(), uid);
    }

    #[test]
    fn storable_object_round_trips(object in storable_strategy()) {
        let bytes = object.encode().unwrap();
        prop_assert_eq!(bytes.len(), object.encoded_len());
        prop_assert_eq!(StorableObject::decode(&bytes).unwrap(), object);
    }

    #[test]
    fn dataset_round_trips(dataset in dataset_strategy()) {
        let bytes = dataset.encode().unwrap();
        prop_assert_eq!(bytes.len(), dataset.encoded_len());
        prop_assert_eq!(Dataset::decode(&bytes).unwrap(), dataset);
    }

    #[test]
    fn repeated_fields_keep_order(tags in proptest::collection::vec(text_strategy(), 0..8)) {
        let dataset = Dataset { tags: tags.clone(), ..Dataset::default() };
        let bytes = dataset.encode().unwrap();
        prop_assert_eq!(Dataset::decode(&bytes).unwrap().tags, tags);
    }

    #[test]
    fn truncated_prefixes_never_misattribute_bytes(
        dataset in dataset_strategy(),
        cut_seed in any::<prop::sample::Index>(),
    ) {
        let bytes = dataset.encode().unwrap();
        prop_assume!(!bytes.is_empty());
        let cut = cut_seed.index(bytes.len());
        if let Ok(decoded) = Dataset::decode(&bytes[..cut]) {
            // 截断点恰好落在字段边界：前缀必须是该部分记录的规范编码。
            let reencoded = decoded.encode().unwrap();
            prop_assert_eq!(reencoded.as_ref(), &bytes[..cut]);
        }
    }
}
