//! 字段校验谓词
//!
//! 纯谓词函数：输入为原始字符串，输出 `bool`，无副作用。
//! 请求层以「字段名 → 谓词」的映射按声明顺序执行校验，每个字段只绑定一条规则。
//!
//! 接受的文法是对外契约（与账本侧约定一致）：
//! - Hedera 标识：`shard.realm.num`，三段均为非空十进制数字，不接受校验和后缀；
//! - EVM 地址：`0x` 前缀加 40 位十六进制字符，大小写不敏感。
//!

/// Hedera 标识形状：`0.0.1234`
pub fn is_hedera_id(value: &str) -> bool {
    let mut parts = 0usize;
    for part in value.split('.') {
        parts += 1;
        if parts > 3 || part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
    }
    parts == 3
}

/// EVM 地址形状：`0x` + 40 位十六进制
pub fn is_evm_address(value: &str) -> bool {
    match value.strip_prefix("0x") {
        Some(hex) => hex.len() == 40 && hex.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}

/// 证券/账户标识：Hedera 标识或 EVM 地址二者之一
pub fn is_hedera_id_or_evm_address(value: &str) -> bool {
    is_hedera_id(value) || is_evm_address(value)
}

/// 非负整数数字串（金额、小数位等）
pub fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hedera_id_accepts_canonical_shape() {
        assert!(is_hedera_id("0.0.1234"));
        assert!(is_hedera_id("1.2.3"));
        assert!(is_hedera_id("10.20.30456789"));
    }

    // 缺段、空段、非数字、校验和后缀一律拒绝
    #[test]
    fn hedera_id_rejects_malformed() {
        for bad in ["", "0.0", "0.0.0.0", "0..1", "a.b.c", "0.0.12x", "0.0.123-abcde", " 0.0.1"] {
            assert!(!is_hedera_id(bad), "should reject {bad:?}");
        }
    }

    #[test]
    fn evm_address_accepts_40_hex_digits() {
        assert!(is_evm_address("0x0000000000000000000000000000000000000000"));
        assert!(is_evm_address("0xAbCdEf0123456789abcdef0123456789ABCDEF01"));
    }

    #[test]
    fn evm_address_rejects_malformed() {
        for bad in [
            "",
            "0x",
            "0x123",
            "1x0000000000000000000000000000000000000000",
            "0x00000000000000000000000000000000000000zz",
            "0x00000000000000000000000000000000000000001", // 41 位
        ] {
            assert!(!is_evm_address(bad), "should reject {bad:?}");
        }
    }

    #[test]
    fn either_shape_is_accepted() {
        assert!(is_hedera_id_or_evm_address("0.0.999"));
        assert!(is_hedera_id_or_evm_address(
            "0x1234567890abcdef1234567890abcdef12345678"
        ));
        assert!(!is_hedera_id_or_evm_address("not-an-id"));
    }

    #[test]
    fn numeric_is_nonempty_digits_only() {
        assert!(is_numeric("0"));
        assert!(is_numeric("340282366920938463463374607431768211455"));
        assert!(!is_numeric(""));
        assert!(!is_numeric("-1"));
        assert!(!is_numeric("1.5"));
        assert!(!is_numeric("1e3"));
    }
}
