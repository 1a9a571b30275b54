use std::fmt;

use serde::de::{
    Deserializer,
    SeqAccess,
    Visitor,
};

use crate::ZString;

fn zstring<'de: 'a, 'a, D: Deserializer<'de>>(deserializer: D) -> Result<ZString, D::Error> {
    struct ZStringVisitor;

    impl<'a> Visitor<'a> for ZStringVisitor {
        type Value = ZString;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a byte string")
        }

        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(ZString::from(v))
        }

        fn visit_borrowed_str<E: serde::de::Error>(self, v: &'a str) -> Result<Self::Value, E> {
            Ok(ZString::from(v))
        }

        fn visit_string<E: serde::de::Error>(self, v: String) -> Result<Self::Value, E> {
            Ok(ZString::from(v))
        }

        fn visit_bytes<E: serde::de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
            Ok(ZString::from(v))
        }

        fn visit_borrowed_bytes<E: serde::de::Error>(self, v: &'a [u8]) -> Result<Self::Value, E> {
            Ok(ZString::from(v))
        }

        fn visit_byte_buf<E: serde::de::Error>(self, v: Vec<u8>) -> Result<Self::Value, E> {
            Ok(ZString::from(v))
        }

        fn visit_seq<A: SeqAccess<'a>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut zstring = ZString::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(byte) = seq.next_element::<u8>()? {
                zstring.push_bytes(&[byte]);
            }
            Ok(zstring)
        }
    }

    // formats without a native byte string type, e.g. JSON, hand back a
    // sequence of integers instead, hence visit_seq above
    deserializer.deserialize_byte_buf(ZStringVisitor)
}

impl serde::Serialize for ZString {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(self.as_bytes())
    }
}

impl<'de> serde::Deserialize<'de> for ZString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        zstring(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use crate::ZString;

    #[test]
    fn json_roundtrip() {
        let zstring = ZString::from(b"hello\0world");

        let json = serde_json::to_string(&zstring).unwrap();
        let back: ZString = serde_json::from_str(&json).unwrap();

        assert_eq!(back, zstring);
        assert_eq!(back.as_bytes_with_nul(), b"hello\0world\0");
    }

    #[test]
    fn deserializes_from_a_json_string() {
        let back: ZString = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(back, "abc");
    }
}
