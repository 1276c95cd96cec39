/// See <https://datatracker.ietf.org/doc/html/rfc8701#section-2>
pub const TLS_GREASE_VALUES: [u16; 16] = [
    0x0a0a, 0x1a1a, 0x2a2a, 0x3a3a, 0x4a4a, 0x5a5a, 0x6a6a, 0x7a7a, 0x8a8a, 0x9a9a, 0xaaaa, 0xbaba,
    0xcaca, 0xdada, 0xeaea, 0xfafa,
];

/// Check if a value is a GREASE value according to RFC 8701
#[inline]
pub fn is_grease_value(value: u16) -> bool {
    TLS_GREASE_VALUES.contains(&value)
}

/// Iterate over `values` skipping GREASE entries, without allocating.
pub fn without_grease(values: &[u16]) -> impl Iterator<Item = u16> + Clone + '_ {
    values.iter().copied().filter(|&v| !is_grease_value(v))
}

/// Filter out GREASE values from a list of u16 values
pub fn filter_grease_values(values: &[u16]) -> Vec<u16> {
    without_grease(values).collect()
}
