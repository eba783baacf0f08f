//! Helpers shared across command handlers.

use serde::Serialize;

use campus_views::SortKey;

/// Confirmation payload for delete commands.
#[derive(Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
    pub id: i64,
}

/// Parse an optional `--sort` argument into a [`SortKey`].
///
/// # Errors
///
/// Fails with the list of accepted spellings when the value is unknown.
pub fn parse_sort(value: Option<&str>) -> anyhow::Result<Option<SortKey>> {
    value
        .map(|v| v.parse::<SortKey>().map_err(|e| anyhow::anyhow!(e)))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::parse_sort;
    use campus_views::SortKey;

    #[test]
    fn absent_sort_is_none() {
        assert!(parse_sort(None).unwrap().is_none());
    }

    #[test]
    fn known_sort_parses() {
        assert_eq!(parse_sort(Some("code")).unwrap(), Some(SortKey::CodeAsc));
    }

    #[test]
    fn unknown_sort_lists_accepted_spellings() {
        let error = parse_sort(Some("bogus")).unwrap_err().to_string();
        assert!(error.contains("bogus"));
        assert!(error.contains("name"));
    }
}
