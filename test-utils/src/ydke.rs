//! Encoder for ydke:// deck URLs.

use base64::{engine::general_purpose::STANDARD, Engine};

/// Encodes three deck sections into a ydke URL.
///
/// # Arguments
/// - `main` - Main deck passwords
/// - `extra` - Extra deck passwords
/// - `side` - Side deck passwords
///
/// # Returns
/// - `String` - `ydke://<main>!<extra>!<side>!` with padded base64 sections
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::ydke::encode_url;
///
/// assert_eq!(encode_url(&[], &[], &[]), "ydke://!!!");
/// ```
pub fn encode_url(main: &[u32], extra: &[u32], side: &[u32]) -> String {
    format!(
        "ydke://{}!{}!{}!",
        encode_section(main),
        encode_section(extra),
        encode_section(side)
    )
}

/// Base64 of the little-endian bytes of each password.
pub fn encode_section(passwords: &[u32]) -> String {
    let bytes: Vec<u8> = passwords
        .iter()
        .flat_map(|password| password.to_le_bytes())
        .collect();
    STANDARD.encode(bytes)
}
