use validator::ValidationError;

pub fn absolute_path(checking_str: &str) -> Result<(), ValidationError> {
    if !checking_str.starts_with('/') {
        return Err(ValidationError::new("path_not_absolute"));
    }

    if checking_str
        .chars()
        .any(|c| c.is_whitespace() || c == '?' || c == '#')
    {
        return Err(ValidationError::new("path_has_forbidden_char"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::absolute_path;

    #[test]
    fn accepts_plain_paths() {
        assert!(absolute_path("/").is_ok());
        assert!(absolute_path("/interview2").is_ok());
    }

    #[test]
    fn rejects_relative_paths_queries_and_fragments() {
        assert!(absolute_path("chat").is_err());
        assert!(absolute_path("/chat?x=1").is_err());
        assert!(absolute_path("/chat#top").is_err());
        assert!(absolute_path("/chat room").is_err());
    }
}
