use crate::error::PublishError;

/// An API as listed by the control plane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSummary {
    pub id: String,
    pub name: String,
}

impl ApiSummary {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Find the id of the only API named `api_name`.
///
/// Zero matches is [`PublishError::ApiNotFound`]; more than one is
/// [`PublishError::ApiNameAmbiguous`]. Names compare exactly.
pub fn find_unique_api_id(apis: &[ApiSummary], api_name: &str) -> Result<String, PublishError> {
    let mut matches = apis.iter().filter(|api| api.name == api_name);

    match (matches.next(), matches.count()) {
        (None, _) => Err(PublishError::ApiNotFound(api_name.to_string())),
        (Some(api), 0) => Ok(api.id.clone()),
        (Some(_), others) => Err(PublishError::ApiNameAmbiguous {
            name: api_name.to_string(),
            count: others + 1,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<ApiSummary> {
        vec![
            ApiSummary::new("a1b2c3", "sample-generated-api"),
            ApiSummary::new("d4e5f6", "billing"),
            ApiSummary::new("g7h8i9", "orders"),
            ApiSummary::new("j0k1l2", "orders"),
            ApiSummary::new("m3n4o5", "orders"),
        ]
    }

    #[test]
    fn single_match_returns_its_id() {
        assert_eq!(find_unique_api_id(&fixture(), "billing").unwrap(), "d4e5f6");
        assert_eq!(
            find_unique_api_id(&fixture(), "sample-generated-api").unwrap(),
            "a1b2c3"
        );
    }

    #[test]
    fn no_match_is_not_found() {
        match find_unique_api_id(&fixture(), "inventory") {
            Err(PublishError::ApiNotFound(name)) => assert_eq!(name, "inventory"),
            other => panic!("expected ApiNotFound, got {:?}", other),
        }
        assert!(matches!(
            find_unique_api_id(&[], "billing"),
            Err(PublishError::ApiNotFound(_))
        ));
    }

    #[test]
    fn duplicates_are_ambiguous() {
        match find_unique_api_id(&fixture(), "orders") {
            Err(PublishError::ApiNameAmbiguous { name, count }) => {
                assert_eq!(name, "orders");
                assert_eq!(count, 3);
            }
            other => panic!("expected ApiNameAmbiguous, got {:?}", other),
        }
    }

    #[test]
    fn names_compare_exactly() {
        assert!(matches!(
            find_unique_api_id(&fixture(), "Billing"),
            Err(PublishError::ApiNotFound(_))
        ));
        assert!(matches!(
            find_unique_api_id(&fixture(), "billing "),
            Err(PublishError::ApiNotFound(_))
        ));
    }
}
