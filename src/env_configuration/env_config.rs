use crate::common::*;

#[doc = r#"
    Reads an optional environment variable.

    Unlike the configuration paths of long-running services, every setting of this
    tool has a usable default, so an unset variable is not an error. An empty value
    is treated the same as an unset one.

    # Arguments
    * `key` - Environment variable name

    # Returns
    * `Option<String>` - The value when set and non-empty
"#]
fn get_env_opt(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(val) if !val.trim().is_empty() => Some(val),
        _ => None,
    }
}

#[doc = r#"
    Path of the TOML file holding the API and chart settings.

    `CHART_CONFIG_PATH` may be given through the process environment or a `.env`
    file. When it is missing, the built-in defaults of `TotalConfig` are used.

    # Expected file contents
    - `[api]` : base url, endpoint paths, optional request timeout
    - `[chart]` : image size, monthly chart style, mediarecords toggle
"#]
pub static CHART_CONFIG_PATH: once_lazy<Option<String>> =
    once_lazy::new(|| get_env_opt("CHART_CONFIG_PATH"));
