//! Base58 encoding and decoding over caller-supplied 58-character alphabets,
//! with byte, string, text and integer conversions plus a checksummed variant.

pub mod alphabet;
pub mod check;
pub mod decode;
pub mod encode;
pub mod integer;

pub use self::{
    alphabet::Alphabet,
    decode::{decode, decode_into, Decoder},
    encode::{encode, encode_into, Encoder},
};

use num_bigint::BigUint;

pub const BITCOIN_ALPHABET: Alphabet = match Alphabet::new(b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

pub const WOLF_ALPHABET: Alphabet = match Alphabet::new(b"AveDarkwo1f23456789BCEFGHJKLMNPQRSTUVWXYZbcdghijmnpqstuxyz") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

/// Binds one alphabet to every conversion this crate offers.
pub struct Base58<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Base58<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    pub const fn alphabet(&self) -> &Alphabet {
        self.alphabet
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        encode::Encoder::new(self.alphabet).encode(input)
    }

    pub fn encode_to_vec(&self, input: impl AsRef<[u8]>) -> Vec<u8> {
        encode::Encoder::new(self.alphabet).encode_to_vec(input)
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, encode::Error> {
        encode::Encoder::new(self.alphabet).encode_into(input, output)
    }

    /// Encodes a string whose characters stand for byte values (all at or
    /// below U+00FF).
    pub fn encode_string(&self, input: &str) -> Result<String, encode::Error> {
        encode::Encoder::new(self.alphabet).encode_string(input)
    }

    /// Encodes the UTF-8 bytes of a text.
    pub fn encode_text(&self, input: &str) -> String {
        self.encode(input)
    }

    pub fn encode_u64(&self, value: u64) -> String {
        integer::Encoder::new(self.alphabet).encode_u64(value)
    }

    pub fn encode_biguint(&self, value: &BigUint) -> String {
        integer::Encoder::new(self.alphabet).encode_biguint(value)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, decode::Error> {
        decode::Decoder::new(self.alphabet).decode(input)
    }

    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, decode::Error> {
        decode::Decoder::new(self.alphabet).decode_into(input, output)
    }

    /// Decodes and renders each byte as the character with that value.
    pub fn decode_to_string(&self, input: impl AsRef<[u8]>) -> Result<String, decode::Error> {
        decode::Decoder::new(self.alphabet).decode_to_string(input)
    }

    /// Decodes and interprets the bytes as UTF-8 text.
    pub fn decode_text(&self, input: impl AsRef<[u8]>) -> Result<String, decode::Error> {
        decode::Decoder::new(self.alphabet).decode_text(input)
    }

    /// See [`integer::Decoder::decode_u64`] for the `None` cases.
    pub fn decode_u64(&self, input: impl AsRef<[u8]>) -> Option<u64> {
        integer::Decoder::new(self.alphabet).decode_u64(input)
    }

    pub fn decode_biguint(&self, input: impl AsRef<[u8]>) -> Result<BigUint, integer::Error> {
        integer::Decoder::new(self.alphabet).decode_biguint(input)
    }
}

pub const BITCOIN: Base58<'static> = Base58::new(&BITCOIN_ALPHABET);

pub const WOLF: Base58<'static> = Base58::new(&WOLF_ALPHABET);

#[cfg(test)]
mod tests {
    use super::{BITCOIN, WOLF};

    const TEXT: &str = "Ave, Darkwolf!\u{1F43A}\u{1F43A}\u{1F43A}";

    #[test]
    fn encode_text() {
        assert_eq!(BITCOIN.encode_text(TEXT), "31GEC6Z1ppWwvCikxA5J7EaPFzPWhoJejFpV");
        assert_eq!(WOLF.encode_text(TEXT), "eA642rRAjjNut2bdx1a8k4SF5zFNZi8Wc5jM");
    }

    #[test]
    fn decode_text() {
        assert_eq!(
            BITCOIN.decode_text("31GEC6Z1ppWwvCikxA5J7EaPFzPWhoJejFpV"),
            Ok(TEXT.to_string())
        );
        assert_eq!(
            WOLF.decode_text("eA642rRAjjNut2bdx1a8k4SF5zFNZi8Wc5jM"),
            Ok(TEXT.to_string())
        );
    }

    #[test]
    fn bytes_round_trip() {
        let input = [0x00, 0x00, 0xeb, 0x15, 0x23, 0x00, 0x66, 0x47];
        let encoded = WOLF.encode(input);
        assert!(encoded.starts_with("AA"));
        assert_eq!(WOLF.decode(&encoded), Ok(input.to_vec()));
    }

    #[test]
    fn string_round_trip() {
        let input = "gr\u{FC}\u{DF} \u{E0} tous";
        let encoded = BITCOIN.encode_string(input).unwrap();
        assert_eq!(BITCOIN.decode_to_string(encoded), Ok(input.to_string()));
    }

    #[test]
    fn integer_round_trip() {
        assert_eq!(BITCOIN.encode_u64(0), "1");
        assert_eq!(WOLF.encode_u64(0), "A");
        assert_eq!(WOLF.decode_u64(WOLF.encode_u64(u64::MAX)), Some(u64::MAX));
    }

    #[test]
    fn empty_integer_decode() {
        assert_eq!(BITCOIN.decode_u64(""), None);
        assert_eq!(
            BITCOIN.decode_biguint(""),
            Err(crate::integer::Error::EmptyInput)
        );
    }
}
