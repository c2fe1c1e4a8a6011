use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use vault_codec_dataset::{Dataset, Record, StorableObject, Uid};

/// 构造一个中等规模的样例数据集：8 个对象、各带 1 KiB 载荷与若干标签。
fn sample_dataset() -> Dataset {
    let data = (0..8u8)
        .map(|index| StorableObject {
            id: Uid::from_bytes([index; 16]),
            data: vec![index; 1024],
            description: format!("shard {index}"),
            tags: vec!["shard".to_string(), format!("part-{index}")],
            read_permissions: vec![0x01, 0x02],
            search_permissions: vec![],
        })
        .collect();
    Dataset {
        id: Uid::from_bytes([0xAB; 16]),
        obj_type: "DataFrame".to_string(),
        schematic_qualname: "pandas.DataFrame".to_string(),
        data,
        description: "benchmark dataset".to_string(),
        tags: vec!["bench".to_string(), "codec".to_string()],
        read_permissions: vec![0x01, 0x02, 0x03],
        search_permissions: vec![0x04],
    }
}

/// 编码吞吐基准：预留精确容量后的一次性写出路径。
fn bench_encode(c: &mut Criterion) {
    let dataset = sample_dataset();
    c.bench_function("dataset_encode", |b| {
        b.iter(|| black_box(&dataset).encode().expect("编码样例数据集"))
    });
}

/// 解码吞吐基准：逐键分发与嵌套递归委托路径。
fn bench_decode(c: &mut Criterion) {
    let bytes = sample_dataset().encode().expect("编码样例数据集");
    c.bench_function("dataset_decode", |b| {
        b.iter(|| Dataset::decode(black_box(bytes.as_ref())).expect("解码样例数据集"))
    });
}

criterion_group!(codec_benches, bench_encode, bench_decode);
criterion_main!(codec_benches);
