use crate::TYPE_FIELD;
use crate::codec::{Decode, Fields};
use crate::error::DecodeError;
use crate::model::{ApiKeyLocation, OAuthFlow, OAuthFlows, SecurityRequirement, SecurityScheme};
use crate::types::json_path::JsonPath;
use indexmap::IndexMap;
use log::trace;
use serde_json::Value;

const SCHEME_TYPES: &str = "one of apiKey, http, mutualTLS, oauth2, openIdConnect";
const API_KEY_LOCATIONS: &str = "one of query, header, cookie";

impl Decode for SecurityScheme {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, path)?;
        let scheme_type: String = fields.required(TYPE_FIELD)?;
        trace!("Security scheme {} at {}", scheme_type, path);

        let description = fields.optional("description")?;
        match scheme_type.as_str() {
            "apiKey" => Ok(SecurityScheme::ApiKey {
                description,
                name: fields.required("name")?,
                location: fields.required_enumeration("in", API_KEY_LOCATIONS)?,
            }),
            "http" => Ok(SecurityScheme::Http {
                description,
                scheme: fields.required("scheme")?,
                bearer_format: fields.optional("bearerFormat")?,
            }),
            "mutualTLS" => Ok(SecurityScheme::MutualTls { description }),
            "oauth2" => Ok(SecurityScheme::OAuth2 {
                description,
                flows: fields.required("flows")?,
            }),
            "openIdConnect" => Ok(SecurityScheme::OpenIdConnect {
                description,
                open_id_connect_url: fields.required("openIdConnectUrl")?,
            }),
            other => Err(DecodeError::unknown_value(
                SCHEME_TYPES,
                other,
                &fields.path().key(TYPE_FIELD),
            )),
        }
    }
}

impl Decode for OAuthFlows {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, path)?;
        Ok(OAuthFlows {
            implicit: fields.optional("implicit")?,
            password: fields.optional("password")?,
            client_credentials: fields.optional("clientCredentials")?,
            authorization_code: fields.optional("authorizationCode")?,
        })
    }
}

impl Decode for OAuthFlow {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, path)?;
        Ok(OAuthFlow {
            authorization_url: fields.optional("authorizationUrl")?,
            token_url: fields.optional("tokenUrl")?,
            refresh_url: fields.optional("refreshUrl")?,
            scopes: fields.required("scopes")?,
        })
    }
}

impl Decode for SecurityRequirement {
    fn decode(value: &Value, path: &JsonPath) -> Result<Self, DecodeError> {
        IndexMap::<String, Vec<String>>::decode(value, path).map(SecurityRequirement)
    }
}

#[cfg(test)]
mod tests {
    use crate::codec::from_value;
    use crate::error::DecodeErrorKind;
    use crate::model::{ApiKeyLocation, SecurityRequirement, SecurityScheme, SecuritySchemeOrRef};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_each_scheme_type_round_trips() {
        for input in [
            json!({"type": "apiKey", "name": "api_key", "in": "header"}),
            json!({"type": "http", "scheme": "basic", "description": ""}),
            json!({"type": "mutualTLS"}),
            json!({
                "type": "oauth2",
                "flows": {"authorizationCode": {
                    "authorizationUrl": "https://example.com/auth",
                    "tokenUrl": "https://example.com/token",
                    "scopes": {}
                }}
            }),
            json!({"type": "openIdConnect", "openIdConnectUrl": "https://example.com/oidc"}),
        ] {
            let scheme: SecurityScheme = from_value(&input).unwrap();
            assert_eq!(serde_json::to_value(&scheme).unwrap(), input);
        }
    }

    #[test]
    fn test_api_key_location() {
        let scheme: SecurityScheme =
            from_value(&json!({"type": "apiKey", "name": "sid", "in": "cookie"})).unwrap();
        assert_eq!(scheme, SecurityScheme::api_key("sid", ApiKeyLocation::Cookie));
    }

    #[test]
    fn test_unknown_scheme_type() {
        let err = from_value::<SecurityScheme>(&json!({"type": "kerberos"})).unwrap_err();
        assert!(matches!(
            err.kind(),
            DecodeErrorKind::UnknownValue { found, .. } if found == "kerberos"
        ));
        assert_eq!(err.path().to_string(), ".type");
    }

    #[test]
    fn test_missing_per_type_field() {
        let err = from_value::<SecuritySchemeOrRef>(&json!({"type": "http"})).unwrap_err();
        assert_eq!(err.kind(), &DecodeErrorKind::MissingField("scheme"));
    }

    #[test]
    fn test_oauth_flow_requires_scopes() {
        let err = from_value::<SecurityScheme>(&json!({
            "type": "oauth2",
            "flows": {"implicit": {"authorizationUrl": "https://example.com/auth"}}
        }))
        .unwrap_err();
        assert_eq!(err.path().to_string(), ".flows.implicit.scopes");
    }

    #[test]
    fn test_security_requirement() {
        let requirement: SecurityRequirement =
            from_value(&json!({"oauth": ["read", "write"]})).unwrap();
        assert_eq!(
            requirement,
            SecurityRequirement::scheme("oauth", ["read", "write"])
        );
    }
}
