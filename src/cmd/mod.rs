use anyhow::Result;
use sx::Error;

pub mod point;

/// Message reported by `genpriv`
const GENPRIV_OBSOLETE: &str =
    "Electrum style key generation is obsolete, use HD (BIP32) key derivation instead.";

/// Generate a private key. Retired, always fails
pub fn genpriv() -> Result<()> {
    log::warn!("genpriv called");
    Err(Error::Obsolete(GENPRIV_OBSOLETE).into())
}

/// Get the public key of an address. Always fails until address lookup exists
pub fn get_pubkey(address: Option<&str>) -> Result<()> {
    log::warn!("get-pubkey called with address {address:?}");
    Err(Error::NotImplemented("get-pubkey").into())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn genpriv_is_obsolete() {
        let e = genpriv().unwrap_err();
        assert_eq!(
            e.downcast_ref::<Error>(),
            Some(&Error::Obsolete(GENPRIV_OBSOLETE))
        );
        assert!(e.to_string().contains("obsolete"));
    }

    #[test]
    fn get_pubkey_bogus_address() {
        // $ sx get-pubkey bogus
        let e = get_pubkey(Some("bogus")).unwrap_err();
        assert_eq!(
            e.downcast_ref::<Error>(),
            Some(&Error::NotImplemented("get-pubkey"))
        );
        assert_eq!(e.to_string(), "get-pubkey is not implemented");
    }
}
