use super::{compute_checksum, Alphabet};
use crate::encode::{self, Error};
use crate::BITCOIN_ALPHABET;

pub struct Encoder<'a> {
    encoder: encode::Encoder<'a>,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self {
            encoder: encode::Encoder::new(alphabet),
        }
    }

    fn extend_input(&self, input: impl AsRef<[u8]>) -> Vec<u8> {
        let mut input = input.as_ref().to_vec();
        let checksum = compute_checksum(&input);
        input.extend_from_slice(checksum.as_ref());
        input
    }

    /// Encodes the input with a four-byte double-SHA256 trailer appended.
    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        self.encoder.encode(&self.extend_input(input))
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        self.encoder.encode_into(&self.extend_input(input), output)
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

const ENCODER: Encoder = Encoder::new(&BITCOIN_ALPHABET);

pub fn encode(input: impl AsRef<[u8]>) -> String {
    Encoder::default().encode(input)
}

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::default().encode_into(input, output)
}

#[cfg(test)]
mod tests {
    #[test]
    fn encode() {
        assert_eq!(super::encode([]), "3QJmnh");
        assert_eq!(super::encode([0x00, 0x01, 0x02]), "1W8eAT7x");
    }
}
