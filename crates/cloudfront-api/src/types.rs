use std::fmt;

// ── Origin access identities ────────────────────────────────────────

/// One page of origin access identities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct OriginAccessIdentityList {
    /// Echo of the `Marker` the page was requested with.
    pub marker: Option<String>,
    /// Marker for the following page; present only when truncated.
    pub next_marker: Option<String>,
    /// Echo of the `MaxItems` the page was requested with.
    pub max_items: Option<i32>,
    pub is_truncated: Option<bool>,
    /// `Some(vec![])` is an explicitly empty page, `None` an unset list.
    pub items: Option<Vec<OriginAccessIdentitySummary>>,
}

impl OriginAccessIdentityList {
    /// Whether another page follows. An absent flag counts as `false`.
    pub fn has_more(&self) -> bool {
        self.is_truncated.unwrap_or(false)
    }

    /// Marker to request the next page with, if there is one.
    pub fn next_page_marker(&self) -> Option<&str> {
        if self.has_more() {
            self.next_marker.as_deref()
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct OriginAccessIdentitySummary {
    pub id: Option<String>,
    pub s3_canonical_user_id: Option<String>,
    pub comment: Option<String>,
}

impl fmt::Display for OriginAccessIdentitySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<_> = [
            ("Id", &self.id),
            ("S3CanonicalUserId", &self.s3_canonical_user_id),
            ("Comment", &self.comment),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| format!("{key}: {v}")))
        .collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}

impl fmt::Display for OriginAccessIdentityList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(marker) = &self.marker {
            parts.push(format!("Marker: {marker}"));
        }
        if let Some(next) = &self.next_marker {
            parts.push(format!("NextMarker: {next}"));
        }
        if let Some(max) = self.max_items {
            parts.push(format!("MaxItems: {max}"));
        }
        if let Some(truncated) = self.is_truncated {
            parts.push(format!("IsTruncated: {truncated}"));
        }
        if let Some(items) = &self.items {
            let items: Vec<_> = items.iter().map(ToString::to_string).collect();
            parts.push(format!(
                "CloudFrontOriginAccessIdentitySummaries: [{}]",
                items.join(", ")
            ));
        }
        write!(f, "{{{}}}", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str) -> OriginAccessIdentitySummary {
        OriginAccessIdentitySummary {
            id: Some(id.into()),
            s3_canonical_user_id: Some(format!("canonical-{id}")),
            comment: Some("static assets".into()),
        }
    }

    #[test]
    fn absent_truncation_flag_means_last_page() {
        let page = OriginAccessIdentityList {
            next_marker: Some("E2".into()),
            ..Default::default()
        };
        assert!(!page.has_more());
        assert_eq!(page.next_page_marker(), None);
    }

    #[test]
    fn truncated_page_exposes_next_marker() {
        let page = OriginAccessIdentityList {
            max_items: Some(1),
            is_truncated: Some(true),
            next_marker: Some("E2".into()),
            items: Some(vec![summary("E1")]),
            ..Default::default()
        };
        assert!(page.has_more());
        assert_eq!(page.next_page_marker(), Some("E2"));
    }

    #[test]
    fn display_skips_unset_fields() {
        assert_eq!(OriginAccessIdentityList::default().to_string(), "{}");

        let page = OriginAccessIdentityList {
            max_items: Some(1),
            is_truncated: Some(false),
            items: Some(vec![summary("E1")]),
            ..Default::default()
        };
        assert_eq!(
            page.to_string(),
            "{MaxItems: 1, IsTruncated: false, CloudFrontOriginAccessIdentitySummaries: \
             [{Id: E1, S3CanonicalUserId: canonical-E1, Comment: static assets}]}"
        );
    }

    #[test]
    fn display_keeps_explicitly_empty_list() {
        let page = OriginAccessIdentityList {
            items: Some(Vec::new()),
            ..Default::default()
        };
        assert_eq!(page.to_string(), "{CloudFrontOriginAccessIdentitySummaries: []}");
    }

    #[test]
    fn summary_display_skips_unset_fields() {
        let partial = OriginAccessIdentitySummary {
            id: Some("E7".into()),
            ..Default::default()
        };
        assert_eq!(partial.to_string(), "{Id: E7}");
        assert_eq!(OriginAccessIdentitySummary::default().to_string(), "{}");
    }

    #[test]
    fn equality_covers_items() {
        let a = OriginAccessIdentityList {
            items: Some(vec![summary("E1")]),
            ..Default::default()
        };
        let mut b = a.clone();
        assert_eq!(a, b);
        b.items.get_or_insert_with(Vec::new).push(summary("E2"));
        assert_ne!(a, b);
    }
}
