//! Hex Codec Module
//!
//! Translates big numbers to and from fixed-width hexadecimal strings.
//! The wire form is big-endian by character order while the word array is
//! little-endian, so the codec walks the string from its tail backward in
//! word-sized groups.

use std::fmt;

use entities_bignum::{BigNum, Word, WORD_BITS, WORD_COUNT};

/// Hex characters per word (8 for 32-bit words).
const WORD_HEX_CHARS: usize = (WORD_BITS as usize) / 4;

/// Maximum string length a value can occupy (256 characters).
const MAX_HEX_CHARS: usize = WORD_COUNT * WORD_HEX_CHARS;

/// Decoding errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Input string is empty
    EmptyString,
    /// Input length is odd
    OddLength(usize),
    /// Input length is not a multiple of one word's hex width
    UnalignedLength(usize),
    /// Input is longer than the fixed capacity can hold
    StringTooLong(usize),
    /// Input contains a non-hexadecimal character
    InvalidDigit(char),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::EmptyString => write!(f, "hex string is empty"),
            DecodeError::OddLength(len) => {
                write!(f, "hex string length {} is odd", len)
            }
            DecodeError::UnalignedLength(len) => write!(
                f,
                "hex string length {} is not a multiple of {}",
                len, WORD_HEX_CHARS
            ),
            DecodeError::StringTooLong(len) => write!(
                f,
                "hex string length {} exceeds the {}-character capacity",
                len, MAX_HEX_CHARS
            ),
            DecodeError::InvalidDigit(c) => {
                write!(f, "invalid hex digit {:?}", c)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Encoding errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Requested width is zero
    ZeroWidth,
    /// Requested width is odd
    OddWidth(usize),
    /// Requested width is not a multiple of one word's hex width
    UnalignedWidth(usize),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::ZeroWidth => write!(f, "output width must be positive"),
            EncodeError::OddWidth(width) => {
                write!(f, "output width {} is odd", width)
            }
            EncodeError::UnalignedWidth(width) => write!(
                f,
                "output width {} is not a multiple of {}",
                width, WORD_HEX_CHARS
            ),
        }
    }
}

impl std::error::Error for EncodeError {}

/// Hexadecimal codec for big numbers
pub struct HexCodec;

impl HexCodec {
    /// Decode a fixed-width hex string into a big number.
    ///
    /// The trailing 8-character group becomes word 0, the group before it
    /// word 1, and so on. Both letter cases are accepted.
    ///
    /// # Errors
    ///
    /// The string must be non-empty, of even length, a multiple of 8
    /// characters, at most 256 characters, and all hex digits. Each
    /// violated precondition has its own [`DecodeError`] variant, and no
    /// value is produced when any of them fails.
    pub fn decode(hex: &str) -> Result<BigNum, DecodeError> {
        let nbytes = hex.len();
        if nbytes == 0 {
            return Err(DecodeError::EmptyString);
        }
        if nbytes % 2 != 0 {
            return Err(DecodeError::OddLength(nbytes));
        }
        if nbytes % WORD_HEX_CHARS != 0 {
            return Err(DecodeError::UnalignedLength(nbytes));
        }
        if nbytes > MAX_HEX_CHARS {
            return Err(DecodeError::StringTooLong(nbytes));
        }
        if let Some(bad) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(DecodeError::InvalidDigit(bad));
        }

        let mut words = [0 as Word; WORD_COUNT];
        for (k, word) in words.iter_mut().enumerate().take(nbytes / WORD_HEX_CHARS) {
            let end = nbytes - k * WORD_HEX_CHARS;
            let group = &hex[end - WORD_HEX_CHARS..end];
            // All digits were validated above, so the parse cannot fail.
            *word = Word::from_str_radix(group, 16).unwrap_or(0);
        }
        Ok(BigNum::from_words(words))
    }

    /// Encode a big number as a hex string of at most `nbytes` characters.
    ///
    /// Words are written most-significant first as zero-padded lowercase
    /// 8-character groups, then leading zero characters are stripped; the
    /// all-zero value encodes as `"0"`. A width smaller than the full 256
    /// characters emits only the words that fit, silently dropping the
    /// least-significant ones — the truncating counterpart of the
    /// truncating integer conversions.
    ///
    /// # Errors
    ///
    /// The width must be positive, even and a multiple of 8; each
    /// violated precondition has its own [`EncodeError`] variant.
    pub fn encode(n: &BigNum, nbytes: usize) -> Result<String, EncodeError> {
        if nbytes == 0 {
            return Err(EncodeError::ZeroWidth);
        }
        if nbytes % 2 != 0 {
            return Err(EncodeError::OddWidth(nbytes));
        }
        if nbytes % WORD_HEX_CHARS != 0 {
            return Err(EncodeError::UnalignedWidth(nbytes));
        }
        let nwords = WORD_COUNT.min(nbytes / WORD_HEX_CHARS);
        Ok(Self::emit(n, nwords))
    }

    /// Encode a big number at full width; never truncates, never fails.
    pub fn encode_full(n: &BigNum) -> String {
        Self::emit(n, WORD_COUNT)
    }

    /// Write the `nwords` most-significant words and strip leading zeros.
    fn emit(n: &BigNum, nwords: usize) -> String {
        let words = n.as_words();
        let mut out = String::with_capacity(nwords * WORD_HEX_CHARS);
        for i in (WORD_COUNT - nwords..WORD_COUNT).rev() {
            out.push_str(&format!("{:08x}", words[i]));
        }
        let stripped = out.trim_start_matches('0');
        if stripped.is_empty() {
            "0".to_string()
        } else {
            stripped.to_string()
        }
    }
}
