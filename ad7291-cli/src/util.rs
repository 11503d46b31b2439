pub(crate) fn u8_from_hex(value: &str) -> Result<u8, std::num::ParseIntError> {
    let s = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    u8::from_str_radix(s, 16)
}

#[cfg(test)]
mod test {
    use super::u8_from_hex;

    #[test]
    fn hex_with_and_without_prefix() {
        assert_eq!(u8_from_hex("0x2F"), Ok(0x2F));
        assert_eq!(u8_from_hex("0X2f"), Ok(0x2F));
        assert_eq!(u8_from_hex("20"), Ok(0x20));
        assert!(u8_from_hex("0x100").is_err());
    }
}
