use std::{
    fs,
    path::{Path, PathBuf},
};

use solana_sdk::{signature::Keypair, signer::keypair::keypair_from_seed};

use crate::keypair::{error::KeypairLoadError, source::KeypairSource};

/// Default keypair file, relative to the working directory.
pub const DEFAULT_KEYPAIR_PATH: &str = "my_wallet.json";

/// Length of a serialized keypair (secret half followed by public half).
const KEYPAIR_LENGTH: usize = 64;

/// Length of the secret half of a serialized keypair.
const SECRET_KEY_LENGTH: usize = 32;

/// Result of loading a keypair, including provenance information
pub struct KeypairLoadResult {
    /// The loaded keypair
    pub keypair: Keypair,
    /// The source from which the keypair was loaded
    pub source: KeypairSource,
}

/// Parse keypair from JSON string.
///
/// The keypair is rebuilt from its secret half and the public key is derived
/// from it. The stored public half is neither checked nor used.
pub fn parse_keypair_json(json_str: &str, source_desc: &str) -> Result<Keypair, KeypairLoadError> {
    let keypair_bytes: Vec<u8> =
        serde_json::from_str(json_str).map_err(|e| KeypairLoadError::InvalidJsonFormat {
            origin: source_desc.to_string(),
            message: e.to_string(),
        })?;

    if keypair_bytes.len() != KEYPAIR_LENGTH {
        return Err(KeypairLoadError::InvalidKeypairBytes {
            origin: source_desc.to_string(),
            expected: KEYPAIR_LENGTH,
            found: keypair_bytes.len(),
        });
    }

    keypair_from_seed(&keypair_bytes[..SECRET_KEY_LENGTH]).map_err(|_| {
        KeypairLoadError::InvalidKeypairBytes {
            origin: source_desc.to_string(),
            expected: KEYPAIR_LENGTH,
            found: keypair_bytes.len(),
        }
    })
}

/// Read keypair from a file path
pub fn read_keypair_from_path(path: &Path) -> Result<Keypair, KeypairLoadError> {
    let content = fs::read_to_string(path).map_err(|e| KeypairLoadError::FileReadError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    parse_keypair_json(&content, &path.display().to_string())
}

/// Load a keypair from the CLI path when one was given, otherwise from the
/// configured default path.
///
/// There is no fallback: a CLI path that cannot be loaded is an error even if
/// the default path holds a valid keypair.
pub fn load_keypair(
    cli_path: Option<PathBuf>,
    default_path: PathBuf,
) -> Result<KeypairLoadResult, KeypairLoadError> {
    match cli_path {
        Some(path) => {
            let keypair = read_keypair_from_path(&path)?;
            Ok(KeypairLoadResult {
                keypair,
                source: KeypairSource::CliArgument(path),
            })
        }
        None => {
            let keypair = read_keypair_from_path(&default_path)?;
            Ok(KeypairLoadResult {
                keypair,
                source: KeypairSource::DefaultPath(default_path),
            })
        }
    }
}

/// Convenience wrapper around [`load_keypair`] using [`DEFAULT_KEYPAIR_PATH`].
pub fn try_load_keypair(cli_path: Option<PathBuf>) -> Result<Keypair, KeypairLoadError> {
    let result = load_keypair(cli_path, PathBuf::from(DEFAULT_KEYPAIR_PATH))?;
    Ok(result.keypair)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use solana_sdk::signer::Signer;
    use tempfile::TempDir;

    use super::*;

    fn create_test_keypair_file(dir: &TempDir, name: &str) -> (PathBuf, Keypair) {
        let keypair = Keypair::new();
        let path = dir.path().join(name);
        let json = serde_json::to_string(&keypair.to_bytes().to_vec()).unwrap();
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(json.as_bytes()).unwrap();
        (path, keypair)
    }

    #[test]
    fn test_parse_keypair_json_valid() {
        let keypair = Keypair::new();
        let json = serde_json::to_string(&keypair.to_bytes().to_vec()).unwrap();
        let parsed = parse_keypair_json(&json, "test").unwrap();
        assert_eq!(parsed.pubkey(), keypair.pubkey());
        assert_ne!(parsed.pubkey().to_bytes(), [7; 32]);
    }

    #[test]
    fn test_parse_keypair_json_invalid() {
        let result = parse_keypair_json("not json", "test");
        assert!(matches!(
            result,
            Err(KeypairLoadError::InvalidJsonFormat { .. })
        ));
    }

    #[test]
    fn test_parse_keypair_json_wrong_length() {
        let result = parse_keypair_json("[1, 2, 3]", "test");
        assert!(matches!(
            result,
            Err(KeypairLoadError::InvalidKeypairBytes {
                expected: 64,
                found: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_parse_keypair_json_derives_public_key_from_secret() {
        let keypair = Keypair::new();
        let mut bytes = keypair.to_bytes().to_vec();
        bytes[SECRET_KEY_LENGTH..].copy_from_slice(&[7; 32]);

        let json = serde_json::to_string(&bytes).unwrap();
        let parsed = parse_keypair_json(&json, "test").unwrap();
        assert_eq!(parsed.pubkey(), keypair.pubkey());
        assert_ne!(parsed.pubkey().to_bytes(), [7; 32]);
    }

    #[test]
    fn test_read_keypair_from_path() {
        let tmp = TempDir::new().unwrap();
        let (path, original) = create_test_keypair_file(&tmp, "my_wallet.json");

        let loaded = read_keypair_from_path(&path).unwrap();
        assert_eq!(loaded.pubkey(), original.pubkey());
    }

    #[test]
    fn test_read_keypair_from_path_not_found() {
        let path = PathBuf::from("/nonexistent/path/my_wallet.json");
        let result = read_keypair_from_path(&path);
        assert!(matches!(
            result,
            Err(KeypairLoadError::FileReadError { .. })
        ));
    }

    #[test]
    fn test_load_keypair_cli_path_precedence() {
        let tmp = TempDir::new().unwrap();
        let (cli_path, cli_keypair) = create_test_keypair_file(&tmp, "cli.json");
        let (default_path, _) = create_test_keypair_file(&tmp, "my_wallet.json");

        let result = load_keypair(Some(cli_path), default_path).unwrap();

        assert_eq!(result.keypair.pubkey(), cli_keypair.pubkey());
        assert!(matches!(result.source, KeypairSource::CliArgument(_)));
    }

    #[test]
    fn test_load_keypair_default_path() {
        let tmp = TempDir::new().unwrap();
        let (default_path, default_keypair) = create_test_keypair_file(&tmp, "my_wallet.json");

        let result = load_keypair(None, default_path).unwrap();

        assert_eq!(result.keypair.pubkey(), default_keypair.pubkey());
        assert!(matches!(result.source, KeypairSource::DefaultPath(_)));
    }

    #[test]
    fn test_load_keypair_cli_path_does_not_fall_back() {
        let tmp = TempDir::new().unwrap();
        let (default_path, _) = create_test_keypair_file(&tmp, "my_wallet.json");
        let missing = tmp.path().join("missing.json");

        let result = load_keypair(Some(missing), default_path);

        assert!(matches!(
            result,
            Err(KeypairLoadError::FileReadError { .. })
        ));
    }
}
