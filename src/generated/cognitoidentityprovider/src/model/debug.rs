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
//
// Code generated by the awsclient generator. DO NOT EDIT.

// Sensitive fields are replaced by `[censored]` when set.
fn censored(v: &Option<String>) -> Option<&'static str> {
    v.as_ref().map(|_| "[censored]")
}

impl std::fmt::Debug for super::AdminSetUserPasswordRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("AdminSetUserPasswordRequest");
        debug_struct.field("user_pool_id", &self.user_pool_id);
        debug_struct.field("username", &self.username);
        debug_struct.field("password", &censored(&self.password));
        debug_struct.field("permanent", &self.permanent);
        debug_struct.field("options", &self.options);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for super::AdminGetUserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("AdminGetUserRequest");
        debug_struct.field("user_pool_id", &self.user_pool_id);
        debug_struct.field("username", &self.username);
        debug_struct.field("options", &self.options);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for super::AdminCreateUserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("AdminCreateUserRequest");
        debug_struct.field("user_pool_id", &self.user_pool_id);
        debug_struct.field("username", &self.username);
        debug_struct.field("user_attributes", &self.user_attributes);
        debug_struct.field("validation_data", &self.validation_data);
        debug_struct.field("temporary_password", &censored(&self.temporary_password));
        debug_struct.field("force_alias_creation", &self.force_alias_creation);
        debug_struct.field("message_action", &self.message_action);
        debug_struct.field("desired_delivery_mediums", &self.desired_delivery_mediums);
        debug_struct.field("client_metadata", &self.client_metadata);
        debug_struct.field("options", &self.options);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for super::AttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("AttributeType");
        debug_struct.field("name", &self.name);
        debug_struct.field("value", &censored(&self.value));
        debug_struct.finish()
    }
}
