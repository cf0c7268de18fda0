use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    Sha224,
    #[default]
    Sha256,
    Sha384,
    Sha512,
}

pub fn digest_hex(text: &str, algorithm: HashAlgorithm) -> String {
    let data = text.as_bytes();
    match algorithm {
        HashAlgorithm::Sha224 => format!("{:x}", Sha224::digest(data)),
        HashAlgorithm::Sha256 => format!("{:x}", Sha256::digest(data)),
        HashAlgorithm::Sha384 => format!("{:x}", Sha384::digest(data)),
        HashAlgorithm::Sha512 => format!("{:x}", Sha512::digest(data)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_of_abc() {
        assert_eq!(
            digest_hex("abc", HashAlgorithm::Sha256),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn empty_input_digests() {
        assert_eq!(
            digest_hex("", HashAlgorithm::Sha224),
            "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f"
        );
        assert_eq!(digest_hex("", HashAlgorithm::Sha384).len(), 96);
        assert_eq!(digest_hex("", HashAlgorithm::Sha512).len(), 128);
    }

    #[test]
    fn algorithm_names_are_lowercase() {
        let algo: HashAlgorithm = serde_json::from_str("\"sha512\"").unwrap();
        assert_eq!(algo, HashAlgorithm::Sha512);
        assert_eq!(HashAlgorithm::default(), HashAlgorithm::Sha256);
    }
}
