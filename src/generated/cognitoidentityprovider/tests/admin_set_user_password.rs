// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#[cfg(test)]
mod admin_set_user_password {
    use awsclient_cognitoidentityprovider::model::AdminSetUserPasswordRequest;
    use gax::error::MissingRequiredField;
    use gax::request::{TARGET_HEADER, WireRequest};
    use gax::shape::from_input;
    use http::header::CONTENT_TYPE;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use test_case::test_case;

    type Result = anyhow::Result<()>;

    fn body(request: &WireRequest) -> anyhow::Result<Value> {
        Ok(serde_json::from_slice(&request.body)?)
    }

    fn header<'a>(request: &'a WireRequest, name: impl http::header::AsHeaderName) -> &'a str {
        request
            .headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    #[test]
    fn required_fields_only() -> Result {
        let input = json!({"UserPoolId": "pool1", "Username": "alice", "Password": "secret"});
        let shape: AdminSetUserPasswordRequest = from_input(input)?;
        let request = shape.to_request()?;

        assert_eq!(
            request.body.as_ref(),
            br#"{"UserPoolId":"pool1","Username":"alice","Password":"secret"}"#
        );
        assert_eq!(request.method, http::Method::POST);
        assert_eq!(request.path, "/");
        assert!(request.query.is_empty(), "{request:?}");
        assert_eq!(header(&request, CONTENT_TYPE), "application/x-amz-json-1.1");
        assert_eq!(
            header(&request, TARGET_HEADER),
            "AWSCognitoIdentityProviderService.AdminSetUserPassword"
        );
        Ok(())
    }

    #[test]
    fn typed_construction_matches_loose() -> Result {
        let loose: AdminSetUserPasswordRequest = from_input(json!({
            "UserPoolId": "pool1",
            "Username": "alice",
            "Password": "secret",
            "Permanent": true,
        }))?;
        let typed = AdminSetUserPasswordRequest::new()
            .set_user_pool_id("pool1")
            .set_username("alice")
            .set_password("secret")
            .set_permanent(true);
        assert_eq!(loose, typed);
        assert_eq!(loose.to_request()?, typed.to_request()?);
        Ok(())
    }

    #[test_case("UserPoolId")]
    #[test_case("Username")]
    #[test_case("Password")]
    fn missing_required(field: &str) -> Result {
        let mut input = json!({"UserPoolId": "pool1", "Username": "alice", "Password": "secret"});
        input
            .as_object_mut()
            .map(|o| o.remove(field))
            .ok_or_else(|| anyhow::anyhow!("input is not an object"))?;
        let shape: AdminSetUserPasswordRequest = from_input(input)?;

        let err = shape.to_request().unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        let inner = err.as_inner::<MissingRequiredField>().unwrap();
        assert_eq!(inner.field(), field);
        assert_eq!(inner.shape(), "AdminSetUserPasswordRequest");
        Ok(())
    }

    #[test_case(true)]
    #[test_case(false)]
    fn permanent_is_sent(permanent: bool) -> Result {
        let shape = AdminSetUserPasswordRequest::new()
            .set_user_pool_id("pool1")
            .set_username("alice")
            .set_password("secret")
            .set_permanent(permanent);
        let got = body(&shape.to_request()?)?;
        let want = json!({
            "UserPoolId": "pool1",
            "Username": "alice",
            "Password": "secret",
            "Permanent": permanent,
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn cleared_permanent_is_omitted() -> Result {
        let shape = AdminSetUserPasswordRequest::new()
            .set_user_pool_id("pool1")
            .set_username("alice")
            .set_password("secret")
            .set_permanent(false)
            .set_or_clear_permanent(None::<bool>);
        assert_eq!(shape.permanent(), None);
        let got = body(&shape.to_request()?)?;
        assert!(got.get("Permanent").is_none(), "{got:?}");
        Ok(())
    }

    #[test]
    fn idempotent() -> Result {
        let shape = AdminSetUserPasswordRequest::new()
            .set_user_pool_id("pool1")
            .set_username("alice")
            .set_password("secret")
            .set_permanent(true);
        let first = shape.to_request()?;
        let second = shape.to_request()?;
        assert_eq!(first.body, second.body);
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn region_is_forwarded() -> Result {
        let shape: AdminSetUserPasswordRequest = from_input(json!({
            "UserPoolId": "pool1",
            "Username": "alice",
            "Password": "secret",
            "@region": "eu-west-1",
        }))?;
        assert_eq!(shape.region(), Some("eu-west-1"));
        let request = shape.to_request()?;
        assert_eq!(request.region.as_deref(), Some("eu-west-1"));
        let got = body(&request)?;
        assert!(got.get("@region").is_none(), "{got:?}");
        Ok(())
    }

    #[test]
    fn unknown_keys_are_ignored() -> Result {
        let shape: AdminSetUserPasswordRequest = from_input(json!({
            "UserPoolId": "pool1",
            "Username": "alice",
            "Password": "secret",
            "Unknown": {"nested": [1, 2, 3]},
        }))?;
        let got = body(&shape.to_request()?)?;
        assert_eq!(
            got,
            json!({"UserPoolId": "pool1", "Username": "alice", "Password": "secret"})
        );
        Ok(())
    }

    #[test]
    fn type_mismatch() {
        let got = from_input::<AdminSetUserPasswordRequest>(json!({"Username": 42}));
        let err = got.unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
    }

    #[test]
    fn accessors() {
        let shape = AdminSetUserPasswordRequest::new()
            .set_user_pool_id("pool1")
            .set_or_clear_username(Some("alice"))
            .set_password("secret");
        assert_eq!(shape.user_pool_id(), Some("pool1"));
        assert_eq!(shape.username(), Some("alice"));
        assert_eq!(shape.password(), Some("secret"));
        assert_eq!(shape.permanent(), None);
        assert_eq!(shape.region(), None);

        let shape = shape.set_or_clear_password(None::<String>);
        assert_eq!(shape.password(), None);
    }

    #[test]
    fn clear_region() -> Result {
        let shape = AdminSetUserPasswordRequest::new()
            .set_user_pool_id("pool1")
            .set_username("alice")
            .set_password("secret")
            .set_region("eu-west-1");
        assert_eq!(shape.to_request()?.region.as_deref(), Some("eu-west-1"));

        let shape = shape.set_or_clear_region(None::<String>);
        assert_eq!(shape.region(), None);
        assert_eq!(shape.to_request()?.region, None);

        let shape = shape.set_or_clear_region(Some("ap-south-1"));
        assert_eq!(shape.to_request()?.region.as_deref(), Some("ap-south-1"));
        Ok(())
    }

    #[test]
    fn password_is_not_logged() -> Result {
        let log = awsclient_test_utils::capture::EventLog::default();
        let _guard = log.install();
        let _ = AdminSetUserPasswordRequest::new()
            .set_user_pool_id("pool1")
            .set_username("alice")
            .set_password("correct-horse-battery-staple")
            .to_request()?;
        let events = log.events();
        assert!(!events.is_empty());
        assert!(
            !format!("{events:?}").contains("correct-horse-battery-staple"),
            "{events:?}"
        );
        Ok(())
    }
}
