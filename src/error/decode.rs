use thiserror::Error;

use crate::model::deck::Section;

/// Failure to decode a ydke:// deck token.
///
/// The display text of each variant is shown to the user verbatim as an
/// ephemeral reply, so it is written for the person who pasted the link.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Token does not start with `ydke://`.
    #[error("Unrecognized URL protocol")]
    UnrecognizedProtocol,

    /// Fewer than three `!`-separated sections after the protocol.
    #[error("Missing ydke URL component")]
    MissingComponent,

    /// A section is not valid base64.
    #[error("Invalid {section} deck encoding: {source}")]
    InvalidBase64 {
        /// The section that failed to decode
        section: Section,
        /// The underlying base64 error
        #[source]
        source: base64::DecodeError,
    },

    /// A section decodes to a byte count that cannot hold whole passwords.
    #[error("Invalid {section} deck: {length} bytes is not a multiple of 4")]
    MisalignedSection {
        /// The section that failed to decode
        section: Section,
        /// Number of decoded bytes
        length: usize,
    },
}
