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
mod parameters {
    use awsclient_ssm::model::{
        GetParameterRequest, ParameterTier, ParameterType, PutParameterRequest, Tag,
    };
    use awsclient_test_utils::capture::EventLog;
    use gax::client_config::ClientConfig;
    use gax::error::MissingRequiredField;
    use gax::request::TARGET_HEADER;
    use gax::shape::from_input;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use test_case::test_case;

    type Result = anyhow::Result<()>;

    fn body(request: &gax::request::WireRequest) -> anyhow::Result<Value> {
        Ok(serde_json::from_slice(&request.body)?)
    }

    #[test]
    fn get_parameter() -> Result {
        let request = GetParameterRequest::new()
            .set_name("/app/db/host")
            .set_with_decryption(false)
            .to_request()?;
        assert_eq!(
            request.body.as_ref(),
            br#"{"Name":"/app/db/host","WithDecryption":false}"#
        );
        assert_eq!(
            request.headers.get(TARGET_HEADER).map(|v| v.as_bytes()),
            Some(b"AmazonSSM.GetParameter".as_slice())
        );
        Ok(())
    }

    #[test]
    fn get_parameter_missing_name() {
        let err = GetParameterRequest::new()
            .set_with_decryption(true)
            .to_request()
            .unwrap_err();
        let inner = err.as_inner::<MissingRequiredField>().unwrap();
        assert_eq!(inner.field(), "Name");
        assert_eq!(inner.shape(), "GetParameterRequest");
    }

    #[test]
    fn put_parameter() -> Result {
        let shape = PutParameterRequest::new()
            .set_name("/app/db/password")
            .set_value("s3cr3t")
            .set_type(ParameterType::SecureString)
            .set_key_id("alias/aws/ssm")
            .set_tags([("env", "prod"), ("team", "payments")])
            .set_tier("Intelligent-Tiering")
            .set_description("database password");
        let request = shape.to_request()?;
        assert_eq!(
            request.headers.get(TARGET_HEADER).map(|v| v.as_bytes()),
            Some(b"AmazonSSM.PutParameter".as_slice())
        );
        let want = json!({
            "Name": "/app/db/password",
            "Description": "database password",
            "Value": "s3cr3t",
            "Type": "SecureString",
            "KeyId": "alias/aws/ssm",
            "Tags": [
                {"Key": "env", "Value": "prod"},
                {"Key": "team", "Value": "payments"},
            ],
            "Tier": "Intelligent-Tiering",
        });
        assert_eq!(body(&request)?, want);
        assert_eq!(shape.tier(), Some(&ParameterTier::IntelligentTiering));
        Ok(())
    }

    #[test_case("Name")]
    #[test_case("Value")]
    fn put_parameter_missing_required(field: &str) -> Result {
        let mut input = json!({"Name": "/a", "Value": "b", "Type": "String"});
        if let Some(o) = input.as_object_mut() {
            o.remove(field);
        }
        let shape: PutParameterRequest = from_input(input)?;
        let err = shape.to_request().unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        let inner = err.as_inner::<MissingRequiredField>().unwrap();
        assert_eq!(inner.field(), field);
        Ok(())
    }

    #[test]
    fn tag_missing_value() {
        let shape = PutParameterRequest::new()
            .set_name("/a")
            .set_value("b")
            .set_tags([Tag::new().set_key("env")]);
        let err = shape.to_request().unwrap_err();
        let inner = err.as_inner::<MissingRequiredField>().unwrap();
        assert_eq!(inner.field(), "Value");
        assert_eq!(inner.shape(), "Tag");
    }

    #[test]
    fn loose_construction() -> Result {
        let shape: PutParameterRequest = from_input(json!({
            "Name": "/a",
            "Value": "b",
            "Type": "StringList",
            "Overwrite": true,
            "Tags": [{"Key": "k", "Value": "v"}],
            "@region": "eu-central-1",
        }))?;
        assert_eq!(shape.r#type(), Some(&ParameterType::StringList));
        assert_eq!(shape.overwrite(), Some(true));
        assert_eq!(shape.tags().map(|t| t.len()), Some(1));
        assert_eq!(shape.region(), Some("eu-central-1"));

        let request = shape.to_request()?;
        assert_eq!(request.region.as_deref(), Some("eu-central-1"));
        assert_eq!(
            body(&request)?,
            json!({
                "Name": "/a",
                "Value": "b",
                "Type": "StringList",
                "Overwrite": true,
                "Tags": [{"Key": "k", "Value": "v"}],
            })
        );
        Ok(())
    }

    #[test]
    fn debug_censors_value() {
        let shape = PutParameterRequest::new()
            .set_name("/app/db/password")
            .set_value("s3cr3t-value");
        let fmt = format!("{shape:?}");
        assert!(fmt.contains("/app/db/password"), "{fmt}");
        assert!(!fmt.contains("s3cr3t-value"), "{fmt}");
    }

    #[test_case(None, None, "https://ssm.us-east-1.amazonaws.com/")]
    #[test_case(Some("eu-west-1"), None, "https://ssm.eu-west-1.amazonaws.com/")]
    #[test_case(Some("eu-west-1"), Some("cn-northwest-1"), "https://ssm.cn-northwest-1.amazonaws.com.cn/")]
    fn endpoint(config: Option<&str>, request: Option<&str>, want: &str) -> Result {
        let mut shape = GetParameterRequest::new().set_name("/a");
        if let Some(r) = request {
            shape = shape.set_region(r);
        }
        let config = config
            .map(|r| ClientConfig::new().set_region(r))
            .unwrap_or_default();
        let got = config.endpoint(awsclient_ssm::ENDPOINT_PREFIX, &shape.to_request()?)?;
        assert_eq!(got.to_string(), want);
        Ok(())
    }

    #[test_case(Some("eu-west-1"), None, None; "cleared")]
    #[test_case(None, Some("us-west-2"), Some("us-west-2"); "set later")]
    #[test_case(Some("eu-west-1"), Some("ap-south-1"), Some("ap-south-1"); "replaced")]
    fn region(initial: Option<&str>, update: Option<&str>, want: Option<&str>) -> Result {
        let get = GetParameterRequest::new()
            .set_name("/a")
            .set_or_clear_region(initial)
            .set_or_clear_region(update);
        assert_eq!(get.region(), want);
        assert_eq!(get.to_request()?.region.as_deref(), want);

        let put = PutParameterRequest::new()
            .set_name("/a")
            .set_value("b")
            .set_or_clear_region(initial)
            .set_or_clear_region(update);
        assert_eq!(put.to_request()?.region.as_deref(), want);
        Ok(())
    }

    #[test]
    fn logs_without_secrets() -> Result {
        let log = EventLog::default();
        let _guard = log.install();
        let _ = PutParameterRequest::new()
            .set_name("/a")
            .set_value("top-secret-value")
            .to_request()?;
        let events = log.find("serialized request shape");
        assert_eq!(events.len(), 1, "{:?}", log.events());
        assert_eq!(
            events[0].fields.get("operation").map(String::as_str),
            Some("AmazonSSM.PutParameter")
        );
        assert!(!format!("{:?}", log.events()).contains("top-secret-value"));
        Ok(())
    }
}
