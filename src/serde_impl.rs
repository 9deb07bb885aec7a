use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::Bits;

#[derive(Serialize)]
struct RawBitsRef<'a> {
    length: usize,
    words: &'a [u64],
}

#[derive(Deserialize)]
struct RawBits {
    length: usize,
    words: Vec<u64>,
}

impl Serialize for Bits {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RawBitsRef {
            length: self.len(),
            words: self.words(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Bits {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawBits::deserialize(deserializer)?;
        Bits::from_words(raw.length, raw.words).map_err(de::Error::custom)
    }
}
