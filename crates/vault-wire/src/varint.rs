//! # 变长整数（base-128 varint）
//!
//! ## 设计意图（Why）
//! - 字段键与长度前缀均以小端 base-128 编码，短值占字节少，是整个线上格式的字节地基；
//! - 写入侧与长度预估分离：容器记录在编码前先用 [`varint_len`] 精确计算总长，
//!   一次性预留缓冲，避免编码过程中反复扩容。
//!
//! ## 契约说明（What）
//! - 每字节低 7 bit 承载数值，最高位为续行标记；u64 最多占用 10 字节；
//! - 读取侧位于 [`crate::reader::FieldReader`]，负责截断与溢出校验，本模块只覆盖写路径。

use bytes::{BufMut, BytesMut};

/// u64 变长整数的最大编码长度（字节）。
pub const MAX_VARINT_LEN: usize = 10;

/// 计算 `value` 的变长整数编码长度。
///
/// - **Contract**：返回值恒位于 `1..=10`；`0` 也占用一个字节。
#[must_use]
pub const fn varint_len(mut value: u64) -> usize {
    let mut len = 1;
    while value >= 0x80 {
        value >>= 7;
        len += 1;
    }
    len
}

/// 将 `value` 以小端 base-128 形式追加到缓冲末尾。
pub fn put_varint(buf: &mut BytesMut, mut value: u64) {
    while value >= 0x80 {
        buf.put_u8((value as u8 & 0x7F) | 0x80);
        value >>= 7;
    }
    buf.put_u8(value as u8);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn varint_len_matches_encoded_bytes() {
        for value in [0u64, 1, 0x7F, 0x80, 0x3FFF, 0x4000, u32::MAX as u64, u64::MAX] {
            let mut buf = BytesMut::new();
            put_varint(&mut buf, value);
            assert_eq!(buf.len(), varint_len(value), "value={value}");
        }
    }

    #[test]
    fn single_byte_values_have_no_continuation_bit() {
        let mut buf = BytesMut::new();
        put_varint(&mut buf, 0x7F);
        assert_eq!(buf.as_ref(), &[0x7F]);
    }

    #[test]
    fn max_u64_occupies_ten_bytes() {
        let mut buf = BytesMut::new();
        put_varint(&mut buf, u64::MAX);
        assert_eq!(buf.len(), MAX_VARINT_LEN);
        assert_eq!(buf.as_ref()[9], 0x01);
    }
}
