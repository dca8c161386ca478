use reqwest::Url;

/// # Errors
///
/// Will return `Err` if the value is not an absolute http(s) URL with a host
pub fn check_base_url(value: &str) -> Result<String, String> {
    let trimmed = value.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).map_err(|e| format!("'{value}' is not a valid URL: {e}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("'{value}' must use http or https."));
    }
    if url.host_str().is_none() {
        return Err(format!("'{value}' has no host."));
    }
    Ok(trimmed.to_string())
}

/// # Errors
///
/// Will return `Err` if the value is not a positive whole number of seconds
pub fn check_timeout_secs(value: &str) -> Result<u64, String> {
    match value.trim().parse::<u64>() {
        Ok(0) => Err("The timeout must be at least one second.".to_string()),
        Ok(secs) => Ok(secs),
        Err(_) => Err(format!("The timeout '{value}' is not a whole number of seconds.")),
    }
}
