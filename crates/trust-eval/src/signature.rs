//! Code-signature identity.
//!
//! The identity is the lowercase hex SHA-256 of the first trusted signing
//! certificate. Certificates come either directly from the platform trust
//! store or, as a fallback, from the embedded provisioning profile: a CMS
//! signed blob wrapping an XML plist whose `DeveloperCertificates` array
//! holds base64 DER entries.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use sha2::{Digest, Sha256};

/// Digest the first certificate, or `None` when nothing usable is present.
pub fn digest_first_certificate(certificates: &[Vec<u8>]) -> Option<String> {
    let first = certificates.first()?;
    if first.is_empty() {
        return None;
    }
    Some(encode_hex(&Sha256::digest(first)))
}

/// Signature identity from raw provisioning-profile bytes.
pub fn signature_from_provisioning_profile(profile: &[u8]) -> Option<String> {
    let certificates = extract_profile_certificates(profile);
    digest_first_certificate(&certificates)
}

/// Pull the DER certificates out of a provisioning profile.
///
/// The profile is scanned for its embedded plist rather than parsed as
/// CMS; the plist always sits between `<?xml` and `</plist>` in the blob.
pub fn extract_profile_certificates(profile: &[u8]) -> Vec<Vec<u8>> {
    let text = String::from_utf8_lossy(profile);
    let Some(xml_start) = text.find("<?xml") else {
        return Vec::new();
    };
    let Some(plist_end) = text[xml_start..].find("</plist>") else {
        return Vec::new();
    };
    let plist = &text[xml_start..xml_start + plist_end + "</plist>".len()];

    let Some(key_at) = plist.find("<key>DeveloperCertificates</key>") else {
        return Vec::new();
    };
    let tail = &plist[key_at..];
    let Some(array_end) = tail.find("</array>") else {
        return Vec::new();
    };

    let mut certificates = Vec::new();
    let mut rest = &tail[..array_end];
    while let Some(open) = rest.find("<data>") {
        let after = &rest[open + "<data>".len()..];
        let Some(close) = after.find("</data>") else {
            break;
        };
        let encoded: String = after[..close]
            .chars()
            .filter(|ch| !ch.is_ascii_whitespace())
            .collect();
        match BASE64.decode(encoded.as_bytes()) {
            Ok(bytes) if !bytes.is_empty() => certificates.push(bytes),
            _ => {}
        }
        rest = &after[close..];
    }
    certificates
}

fn encode_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}
