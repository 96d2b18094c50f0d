use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(UserId);

/// Postal address as returned by the users endpoint. Only the city is
/// rendered today; records without one deserialize to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub city: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub name: String,
}

/// One record from the remote users collection. Immutable once fetched.
///
/// Only `id` is required on the wire; every other field tolerates absence so
/// a sparse record does not fail the whole fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub company: Company,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_record() {
        let user: User = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "Ann Lee",
                "username": "annl",
                "email": "ann@x.com",
                "address": { "city": "Rome", "zipcode": "00100" },
                "company": { "name": "Acme" }
            }"#,
        )
        .expect("full record");

        assert_eq!(user.id, UserId(1));
        assert_eq!(user.name, "Ann Lee");
        assert_eq!(user.address.city, "Rome");
        assert_eq!(user.company.name, "Acme");
    }

    #[test]
    fn sparse_record_fills_defaults() {
        let user: User = serde_json::from_str(r#"{ "id": 7, "name": "Bo" }"#).expect("sparse");

        assert_eq!(user.id, UserId(7));
        assert_eq!(user.username, "");
        assert_eq!(user.address.city, "");
        assert_eq!(user.company.name, "");
    }

    #[test]
    fn record_without_id_is_rejected() {
        let result = serde_json::from_str::<User>(r#"{ "name": "No Id" }"#);
        assert!(result.is_err());
    }
}
