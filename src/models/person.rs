use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A person as submitted by callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct Person {
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = 40)]
    pub age: i64,
}

/// Request body for creating a person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreatePersonRequest {
    #[schema(inline)]
    pub person: Person,
}

/// Response for creating a person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatePersonResponse {
    #[schema(example = 1234)]
    pub person_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn person_survives_json() {
        let names = [
            "Jane Doe",
            "",
            "Ünïcødé \"quoted\"",
            "李小龍",
            "🦀 emoji",
            "tab\tnew\nline\u{0}nul\u{1b}esc",
            "back\\slash/",
        ];
        let ages = [i64::MIN, -1, 0, 1, 40, i64::MAX];

        for name in names {
            for age in ages {
                let person = Person { name: name.to_string(), age };
                let text = serde_json::to_string(&person).unwrap();
                assert_eq!(serde_json::from_str::<Person>(&text).unwrap(), person);
            }
        }
    }

    #[test]
    fn request_wire_shape() {
        let request = CreatePersonRequest {
            person: Person { name: "Jane Doe".to_string(), age: 40 },
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"person": {"name": "Jane Doe", "age": 40}})
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let payload = json!({"person": {"name": "Jane Doe", "age": 40, "email": "jane@example.com"}});
        assert!(serde_json::from_value::<CreatePersonRequest>(payload).is_err());

        let payload = json!({"person": {"name": "Jane Doe", "age": 40}, "extra": true});
        assert!(serde_json::from_value::<CreatePersonRequest>(payload).is_err());
    }

    #[test]
    fn age_must_be_an_integer() {
        let payload = json!({"person": {"name": "Jane Doe", "age": "40"}});
        assert!(serde_json::from_value::<CreatePersonRequest>(payload).is_err());

        let payload = json!({"person": {"name": "Jane Doe", "age": 40.5}});
        assert!(serde_json::from_value::<CreatePersonRequest>(payload).is_err());
    }
}
