use crate::alphabet::{self, Alphabet};
use crate::BITCOIN_ALPHABET;
use std::str::Utf8Error;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
    InvalidCharacter { character: char, index: usize },
    NonAsciiCharacter { character: u8, index: usize },
    /// The decoded bytes are not valid UTF-8 (text mode only).
    InvalidUtf8 { error: Utf8Error },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
            Error::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Error::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
            Error::InvalidUtf8 { error } => write!(f, "{}", error),
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

pub struct Decoder<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        let output = output.as_mut();

        let mut output_index = 0;

        for (input_index, &value) in input.iter().enumerate() {
            let mut carry = self.alphabet.decode(value, input_index)? as usize;

            for value in &mut output[..output_index] {
                carry += (*value as usize) * 58;
                *value = (carry & 0xFF) as u8;
                carry >>= 8;
            }

            while carry > 0 {
                let value = output.get_mut(output_index).ok_or(Error::BufferTooSmall)?;
                *value = (carry & 0xFF) as u8;
                output_index += 1;
                carry >>= 8;
            }
        }

        let zero = self.alphabet.zero();

        for _ in input.iter().take_while(|&&value| value == zero) {
            let value = output.get_mut(output_index).ok_or(Error::BufferTooSmall)?;
            *value = 0;
            output_index += 1;
        }
        output[..output_index].reverse();
        Ok(output_index)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let mut output = vec![0u8; input.as_ref().len()];
        let len = self.decode_into(input, &mut output)?;
        output.truncate(len);
        Ok(output)
    }

    /// Same conversion as [`decode`](Self::decode), but renders each decoded
    /// byte as the character with that value (U+0000 to U+00FF).
    pub fn decode_to_string(&self, input: impl AsRef<[u8]>) -> Result<String, Error> {
        let bytes = self.decode(input)?;
        Ok(bytes.iter().map(|&value| value as char).collect())
    }

    /// Decodes to bytes and interprets them as UTF-8 text.
    pub fn decode_text(&self, input: impl AsRef<[u8]>) -> Result<String, Error> {
        let bytes = self.decode(input)?;
        String::from_utf8(bytes).map_err(|error| Error::InvalidUtf8 {
            error: error.utf8_error(),
        })
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

const DECODER: Decoder = Decoder::new(&BITCOIN_ALPHABET);

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    Decoder::default().decode(input)
}

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::default().decode_into(input, output)
}
