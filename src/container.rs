//! PTX container framing and the record wire types.
//!
//! A container is the four-byte magic `50 54 58 01`, one envelope byte, and
//! the protobuf-serialized record. Decoders accept any envelope byte (both
//! `0x00` and `0xAB` occur in the wild); encoders always emit `0x00`.

use prost::Message;

use crate::errors::{PtxError, PtxResult};

/// Leading magic of every PTX container.
pub const MAGIC: [u8; 4] = [0x50, 0x54, 0x58, 0x01];
/// Offset of the serialized record within a container.
pub const PAYLOAD_OFFSET: usize = 5;

/// Anchoring scheme named by a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum TrustMethod {
    Unspecified = 0,
    Doh = 1,
    Gist = 2,
}

/// Proof system tag carried inside the proof block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum ProofSystem {
    Unspecified = 0,
    Groth16 = 1,
}

#[derive(Clone, PartialEq, Message)]
pub struct ZkProof {
    #[prost(enumeration = "ProofSystem", tag = "1")]
    pub proof_system: i32,
    #[prost(string, tag = "2")]
    pub verification_key_id: String,
    #[prost(bytes = "vec", tag = "3")]
    pub proof_data: Vec<u8>,
}

#[derive(Clone, PartialEq, Message)]
pub struct DohAnchor {
    #[prost(string, tag = "1")]
    pub domain_name: String,
}

#[derive(Clone, PartialEq, prost::Oneof)]
pub enum Anchor {
    #[prost(message, tag = "4")]
    DohDetails(DohAnchor),
}

#[derive(Clone, PartialEq, Message)]
pub struct PtxRecord {
    #[prost(enumeration = "TrustMethod", tag = "1")]
    pub trust_method: i32,
    #[prost(message, optional, tag = "2")]
    pub proof: Option<ZkProof>,
    /// Stored verbatim; the verifier hashes these exact bytes.
    #[prost(string, tag = "3")]
    pub signed_metadata: String,
    #[prost(oneof = "Anchor", tags = "4")]
    pub anchor: Option<Anchor>,
}

impl PtxRecord {
    /// Domain name of the DoH anchor, when present.
    pub fn anchor_domain(&self) -> Option<&str> {
        match &self.anchor {
            Some(Anchor::DohDetails(doh)) => Some(doh.domain_name.as_str()),
            None => None,
        }
    }
}

/// Decodes a PTX container. The envelope byte at offset 4 is opaque and
/// ignored.
pub fn decode(data: &[u8]) -> PtxResult<PtxRecord> {
    if data.len() < PAYLOAD_OFFSET {
        return Err(PtxError::ContainerMalformed(format!(
            "{} bytes is shorter than the fixed header",
            data.len()
        )));
    }
    if data[..4] != MAGIC {
        return Err(PtxError::ContainerMalformed(format!(
            "bad magic {:02x}{:02x}{:02x}{:02x}",
            data[0], data[1], data[2], data[3]
        )));
    }
    Ok(PtxRecord::decode(&data[PAYLOAD_OFFSET..])?)
}

/// Encodes a record into container bytes with a zero envelope byte.
pub fn encode(record: &PtxRecord) -> Vec<u8> {
    let mut out = Vec::with_capacity(PAYLOAD_OFFSET + record.encoded_len());
    out.extend_from_slice(&MAGIC);
    out.push(0x00);
    out.extend_from_slice(&record.encode_to_vec());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> PtxRecord {
        PtxRecord {
            trust_method: TrustMethod::Doh as i32,
            proof: Some(ZkProof {
                proof_system: ProofSystem::Groth16 as i32,
                verification_key_id: "sdv_poseidon_v1".into(),
                proof_data: br#"{"publicSignals":[]}"#.to_vec(),
            }),
            signed_metadata: "{}".into(),
            anchor: Some(Anchor::DohDetails(DohAnchor {
                domain_name: "example.com".into(),
            })),
        }
    }

    #[test]
    fn encode_decode_round_trip() {
        let record = sample_record();
        let bytes = encode(&record);
        assert_eq!(bytes[..4], MAGIC);
        assert_eq!(bytes[4], 0x00);
        assert_eq!(decode(&bytes).expect("decode"), record);
    }

    #[test]
    fn envelope_byte_is_opaque() {
        let record = sample_record();
        let mut bytes = encode(&record);
        bytes[4] = 0xab;
        assert_eq!(decode(&bytes).expect("decode"), record);
    }

    #[test]
    fn bad_magic_is_rejected() {
        let mut bytes = encode(&sample_record());
        bytes[0] = 0x51;
        assert!(matches!(
            decode(&bytes),
            Err(PtxError::ContainerMalformed(_))
        ));
    }

    #[test]
    fn truncated_header_is_rejected() {
        assert!(matches!(
            decode(&MAGIC),
            Err(PtxError::ContainerMalformed(_))
        ));
    }

    #[test]
    fn garbage_payload_is_a_decode_failure() {
        let mut bytes = Vec::from(MAGIC);
        bytes.push(0x00);
        bytes.extend_from_slice(&[0xff, 0xff, 0xff, 0xff]);
        assert!(matches!(decode(&bytes), Err(PtxError::PtxDecodeFailed(_))));
    }
}
