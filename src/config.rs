//! Fixed IPv4 layout constants.

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Number of octets in an IPv4 address.
pub const OCTETS: usize = 4;

/// Width of one octet in its binary text form.
pub const OCTET_BITS: usize = 8;

/// Octet values that can appear in a contiguous subnet mask.
pub const MASK_OCTETS: [u8; 9] = [255, 254, 252, 248, 240, 224, 192, 128, 0];
