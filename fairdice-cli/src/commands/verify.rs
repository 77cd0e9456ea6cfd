use fairdice_core::{CommitDigest, CommitmentKey, Reveal};

pub fn verify(key: &str, value: u64, digest: &str) -> anyhow::Result<()> {
    let key: CommitmentKey = key.parse()?;
    let digest: CommitDigest = digest.parse()?;
    let reveal = Reveal { key, value };

    reveal.ensure_matches(&digest)?;
    println!("HMAC matches: the value {} was fixed before your number.", value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "0707070707070707070707070707070707070707070707070707070707070707";
    const DIGEST: &str = "0b74a6e747a3b698d5e3d0375e7bc93b3cbdfc39ed74be22e6cf2183dd1bb128";

    #[test]
    fn test_verify_matching_reveal() {
        assert!(verify(KEY, 5, DIGEST).is_ok());
    }

    #[test]
    fn test_verify_rejects_other_value() {
        assert!(verify(KEY, 4, DIGEST).is_err());
        assert!(verify("00", 5, DIGEST).is_err());
    }
}
