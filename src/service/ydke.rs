//! Decoder for `ydke://` deck URLs.
//!
//! A ydke URL carries the main, extra and side deck as three `!`-terminated
//! components, each the standard base64 encoding of little-endian `u32`
//! passwords: `ydke://<main>!<extra>!<side>!`.

use base64::{
    alphabet,
    engine::{general_purpose::GeneralPurposeConfig, DecodePaddingMode, GeneralPurpose},
    Engine,
};

use crate::{
    error::decode::DecodeError,
    model::deck::{Deck, Password, Section},
};

pub const YDKE_PROTOCOL: &str = "ydke://";

/// Standard alphabet, accepting components with or without `=` padding.
const YDKE_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Parses a ydke URL into its three deck sections.
///
/// # Arguments
/// - `url` - The token as pasted by the user
///
/// # Returns
/// - `Ok(Deck)` - All three sections decoded (possibly empty)
/// - `Err(DecodeError::UnrecognizedProtocol)` - Token does not start with `ydke://`
/// - `Err(DecodeError::MissingComponent)` - Fewer than three sections
/// - `Err(DecodeError::InvalidBase64)` - A section is not valid base64
/// - `Err(DecodeError::MisalignedSection)` - A section is not whole passwords
pub fn parse_url(url: &str) -> Result<Deck, DecodeError> {
    let body = url
        .trim()
        .strip_prefix(YDKE_PROTOCOL)
        .ok_or(DecodeError::UnrecognizedProtocol)?;

    let components: Vec<&str> = body.split('!').collect();
    if components.len() < 3 {
        return Err(DecodeError::MissingComponent);
    }

    Ok(Deck {
        main: decode_section(Section::Main, components[0])?,
        extra: decode_section(Section::Extra, components[1])?,
        side: decode_section(Section::Side, components[2])?,
    })
}

fn decode_section(section: Section, encoded: &str) -> Result<Vec<Password>, DecodeError> {
    let bytes = YDKE_BASE64
        .decode(encoded)
        .map_err(|source| DecodeError::InvalidBase64 { section, source })?;

    if bytes.len() % 4 != 0 {
        return Err(DecodeError::MisalignedSection {
            section,
            length: bytes.len(),
        });
    }

    Ok(bytes
        .chunks_exact(4)
        .map(|chunk| Password::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}
