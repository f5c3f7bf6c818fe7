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
mod admin_create_user {
    use awsclient_cognitoidentityprovider::model::{
        AdminCreateUserRequest, AttributeType, DeliveryMediumType, MessageActionType,
    };
    use gax::error::MissingRequiredField;
    use gax::shape::from_input;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    type Result = anyhow::Result<()>;

    fn body(shape: &AdminCreateUserRequest) -> anyhow::Result<Value> {
        let request = shape.to_request()?;
        Ok(serde_json::from_slice(&request.body)?)
    }

    #[test]
    fn full_payload() -> Result {
        let shape = AdminCreateUserRequest::new()
            .set_user_pool_id("pool1")
            .set_username("bob")
            .set_user_attributes([
                AttributeType::new()
                    .set_name("email")
                    .set_value("bob@example.com"),
                AttributeType::new().set_name("email_verified").set_value("true"),
            ])
            .set_validation_data([AttributeType::new().set_name("invite")])
            .set_temporary_password("Tmp-pa55word")
            .set_force_alias_creation(false)
            .set_message_action(MessageActionType::Suppress)
            .set_desired_delivery_mediums([DeliveryMediumType::Email, DeliveryMediumType::Sms])
            .set_client_metadata([("source", "import"), ("batch", "7")]);

        let want = json!({
            "UserPoolId": "pool1",
            "Username": "bob",
            "UserAttributes": [
                {"Name": "email", "Value": "bob@example.com"},
                {"Name": "email_verified", "Value": "true"},
            ],
            "ValidationData": [{"Name": "invite"}],
            "TemporaryPassword": "Tmp-pa55word",
            "ForceAliasCreation": false,
            "MessageAction": "SUPPRESS",
            "DesiredDeliveryMediums": ["EMAIL", "SMS"],
            "ClientMetadata": {"batch": "7", "source": "import"},
        });
        assert_eq!(body(&shape)?, want);
        Ok(())
    }

    #[test]
    fn declaration_order() -> Result {
        let shape = AdminCreateUserRequest::new()
            .set_message_action("RESEND")
            .set_username("bob")
            .set_user_pool_id("pool1");
        let request = shape.to_request()?;
        assert_eq!(
            request.body.as_ref(),
            br#"{"UserPoolId":"pool1","Username":"bob","MessageAction":"RESEND"}"#
        );
        Ok(())
    }

    #[test]
    fn nested_missing_required() {
        let shape = AdminCreateUserRequest::new()
            .set_user_pool_id("pool1")
            .set_username("bob")
            .set_user_attributes([AttributeType::new().set_value("orphan")]);
        let err = shape.to_request().unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        let inner = err.as_inner::<MissingRequiredField>().unwrap();
        assert_eq!(inner.field(), "Name");
        assert_eq!(inner.shape(), "AttributeType");
    }

    #[test]
    fn from_input_with_nested() -> Result {
        let shape: AdminCreateUserRequest = from_input(json!({
            "UserPoolId": "pool1",
            "Username": "bob",
            "UserAttributes": [{"Name": "email", "Value": "bob@example.com"}],
            "MessageAction": "RESEND",
            "DesiredDeliveryMediums": ["EMAIL", "PIGEON"],
            "ClientMetadata": {"k": "v"},
            "@region": "ap-southeast-2",
        }))?;
        assert_eq!(shape.message_action(), Some(&MessageActionType::Resend));
        let mediums = shape.desired_delivery_mediums().unwrap_or_default();
        assert_eq!(mediums.len(), 2);
        assert_eq!(mediums[0], DeliveryMediumType::Email);
        assert_eq!(mediums[1].as_str(), "PIGEON");
        assert_eq!(shape.region(), Some("ap-southeast-2"));

        let got = body(&shape)?;
        assert_eq!(got["DesiredDeliveryMediums"], json!(["EMAIL", "PIGEON"]));
        assert_eq!(got["UserAttributes"][0]["Name"], json!("email"));
        Ok(())
    }

    #[test]
    fn clear_optional_fields() -> Result {
        let shape = AdminCreateUserRequest::new()
            .set_user_pool_id("pool1")
            .set_username("bob")
            .set_client_metadata([("k", "v")])
            .set_or_clear_client_metadata(None::<[(String, String); 0]>)
            .set_message_action(MessageActionType::Resend)
            .set_or_clear_message_action(None::<MessageActionType>);
        assert_eq!(shape.client_metadata(), None);
        assert_eq!(shape.message_action(), None);
        assert_eq!(body(&shape)?, json!({"UserPoolId": "pool1", "Username": "bob"}));
        Ok(())
    }
}
