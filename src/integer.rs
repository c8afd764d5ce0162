use crate::alphabet::{self, Alphabet};
use crate::BITCOIN_ALPHABET;
use num_bigint::BigUint;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    EmptyInput,
    InvalidCharacter { character: char, index: usize },
    NonAsciiCharacter { character: u8, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "Empty input"),
            Error::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Error::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
        }
    }
}

impl From<alphabet::DecodeError> for Error {
    fn from(error: alphabet::DecodeError) -> Self {
        match error {
            alphabet::DecodeError::InvalidCharacter { character, index } => Error::InvalidCharacter { character, index },
            alphabet::DecodeError::NonAsciiCharacter { character, index } => Error::NonAsciiCharacter { character, index },
        }
    }
}

pub struct Encoder<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    /// Encodes a non-negative integer. Zero encodes as the zero digit.
    pub fn encode_u64(&self, value: u64) -> String {
        // 58^11 > 2^64, so eleven digits always suffice
        let mut output = [0u8; 11];
        let mut index = output.len();
        let mut value = value;
        loop {
            index -= 1;
            output[index] = self.alphabet.encode((value % 58) as usize);
            value /= 58;
            if value == 0 {
                break;
            }
        }
        unsafe { String::from_utf8_unchecked(output[index..].to_vec()) }
    }

    pub fn encode_biguint(&self, value: &BigUint) -> String {
        let output = value
            .to_radix_be(58)
            .iter()
            .map(|&digit| self.alphabet.encode(digit as usize))
            .collect();
        unsafe { String::from_utf8_unchecked(output) }
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

const ENCODER: Encoder = Encoder::new(&BITCOIN_ALPHABET);

pub struct Decoder<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    /// Decodes to a machine-width integer. Empty input, a character outside
    /// the alphabet, or overflow past `u64::MAX` all yield `None`;
    /// [`Decoder::decode_biguint`] reports the same conditions as errors.
    pub fn decode_u64(&self, input: impl AsRef<[u8]>) -> Option<u64> {
        let input = input.as_ref();
        if input.is_empty() {
            return None;
        }
        let mut result: u64 = 0;
        for (index, &value) in input.iter().enumerate() {
            let digit = self.alphabet.decode(value, index).ok()?;
            result = result.checked_mul(58)?.checked_add(digit as u64)?;
        }
        Some(result)
    }

    /// Decodes to an arbitrary-precision integer. Leading zero digits carry
    /// no magnitude.
    pub fn decode_biguint(&self, input: impl AsRef<[u8]>) -> Result<BigUint, Error> {
        let input = input.as_ref();
        if input.is_empty() {
            return Err(Error::EmptyInput);
        }
        let mut digits = Vec::with_capacity(input.len());
        for (index, &value) in input.iter().enumerate() {
            digits.push(self.alphabet.decode(value, index)?);
        }
        // every digit is below 58, so the radix conversion cannot fail
        Ok(BigUint::from_radix_be(&digits, 58).unwrap_or_default())
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

const DECODER: Decoder = Decoder::new(&BITCOIN_ALPHABET);

pub fn encode_u64(value: u64) -> String {
    Encoder::default().encode_u64(value)
}

pub fn encode_biguint(value: &BigUint) -> String {
    Encoder::default().encode_biguint(value)
}

pub fn decode_u64(input: impl AsRef<[u8]>) -> Option<u64> {
    Decoder::default().decode_u64(input)
}

pub fn decode_biguint(input: impl AsRef<[u8]>) -> Result<BigUint, Error> {
    Decoder::default().decode_biguint(input)
}

#[cfg(test)]
mod tests {
    use super::Error;
    use crate::WOLF_ALPHABET;
    use num_bigint::BigUint;

    #[test]
    fn encode_u64() {
        assert_eq!(super::encode_u64(0), "1");
        assert_eq!(super::encode_u64(57), "z");
        assert_eq!(super::encode_u64(58), "21");
        assert_eq!(super::encode_u64(12345), "4fr");
        assert_eq!(super::encode_u64(u64::MAX), "jpXCZedGfVQ");
    }

    #[test]
    fn decode_u64() {
        assert_eq!(super::decode_u64("1"), Some(0));
        assert_eq!(super::decode_u64("z"), Some(57));
        assert_eq!(super::decode_u64("21"), Some(58));
        assert_eq!(super::decode_u64("4fr"), Some(12345));
        assert_eq!(super::decode_u64("jpXCZedGfVQ"), Some(u64::MAX));
    }

    #[test]
    fn decode_u64_skips_leading_zero_digits() {
        assert_eq!(super::decode_u64("111z"), Some(57));
    }

    #[test]
    fn decode_u64_yields_none() {
        assert_eq!(super::decode_u64(""), None);
        assert_eq!(super::decode_u64("10O"), None);
        // one past u64::MAX
        assert_eq!(super::decode_u64("jpXCZedGfVR"), None);
    }

    #[test]
    fn encode_biguint() {
        assert_eq!(super::encode_biguint(&BigUint::from(0u32)), "1");
        assert_eq!(super::encode_biguint(&BigUint::from(12345u32)), "4fr");
        assert_eq!(
            super::encode_biguint(&BigUint::from_bytes_be(&[0xff; 12])),
            "5qCHTcgbQwpvYZQ9c"
        );
    }

    #[test]
    fn decode_biguint() {
        assert_eq!(super::decode_biguint("1"), Ok(BigUint::from(0u32)));
        assert_eq!(super::decode_biguint("111z"), Ok(BigUint::from(57u32)));
        assert_eq!(
            super::decode_biguint("5qCHTcgbQwpvYZQ9c"),
            Ok(BigUint::from_bytes_be(&[0xff; 12]))
        );
        assert_eq!(super::decode_biguint(""), Err(Error::EmptyInput));
        assert_eq!(
            super::decode_biguint("4f0"),
            Err(Error::InvalidCharacter { character: '0', index: 2 })
        );
    }

    #[test]
    fn custom_alphabet() {
        let encoder = super::Encoder::new(&WOLF_ALPHABET);
        let decoder = super::Decoder::new(&WOLF_ALPHABET);
        assert_eq!(encoder.encode_u64(0), "A");
        assert_eq!(encoder.encode_u64(255), "aG");
        assert_eq!(decoder.decode_u64("aG"), Some(255));
    }
}
