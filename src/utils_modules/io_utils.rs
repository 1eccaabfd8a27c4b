use crate::common::*;

#[doc = r#"
    Reads a TOML file and deserializes it into the requested structure.

    # Type Parameters
    * `T` - Target type implementing `DeserializeOwned`

    # Arguments
    * `file_path` - Absolute or relative path of the TOML file

    # Returns
    * `Result<T, anyhow::Error>` - The parsed structure

    # Errors
    - The file does not exist or cannot be read
    - The content is not valid TOML or does not match `T`
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content: String = std::fs::read_to_string(file_path)
        .with_context(|| format!("[read_toml_from_file] Failed to read '{}'", file_path))?;
    let toml: T = toml::from_str(&toml_content)
        .with_context(|| format!("[read_toml_from_file] Failed to parse '{}'", file_path))?;

    Ok(toml)
}

#[doc = "Creates `dir` and any missing parents. An existing directory is left as is."]
pub async fn ensure_dir(dir: &Path) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("[ensure_dir] Failed to create directory {:?}", dir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sample {
        name: String,
        size: u32,
    }

    #[test]
    fn reads_toml_into_struct() {
        let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("sample.toml");
        fs::write(&path, "name = \"a\"\nsize = 3\n").unwrap();

        let sample: Sample = read_toml_from_file(path.to_str().unwrap()).unwrap();

        assert_eq!(sample.name, "a");
        assert_eq!(sample.size, 3);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_toml_from_file::<Sample>("/definitely/not/here.toml").is_err());
    }

    #[tokio::test]
    async fn ensure_dir_creates_nested_directories_and_is_idempotent() {
        let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
        let nested: PathBuf = dir.path().join("public").join("charts");

        ensure_dir(&nested).await.unwrap();
        ensure_dir(&nested).await.unwrap();

        assert!(nested.is_dir());
    }
}
