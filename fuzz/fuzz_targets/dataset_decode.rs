#![no_main]

use libfuzzer_sys::fuzz_target;
use vault_codec_dataset::{Dataset, Record};

// 解码任意字节：要么显式报错，要么产出的值必须是规范编码的不动点。
// 历史上截断的长度前缀与 group 线类型是最容易静默错位的两类输入，
// 该目标持续回归这两条防线。
fuzz_target!(|data: &[u8]| {
    if let Ok(dataset) = Dataset::decode(data) {
        let bytes = dataset.encode().expect("合法内存值编码不得失败");
        let again = Dataset::decode(&bytes).expect("规范编码必须可解码");
        assert_eq!(again, dataset);
    }
});
