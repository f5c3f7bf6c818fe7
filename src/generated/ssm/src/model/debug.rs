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

impl std::fmt::Debug for super::GetParameterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("GetParameterRequest");
        debug_struct.field("name", &self.name);
        debug_struct.field("with_decryption", &self.with_decryption);
        debug_struct.field("options", &self.options);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for super::PutParameterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("PutParameterRequest");
        debug_struct.field("name", &self.name);
        debug_struct.field("description", &self.description);
        // The value of a `SecureString` parameter is a secret.
        debug_struct.field("value", &self.value.as_ref().map(|_| "[censored]"));
        debug_struct.field("r#type", &self.r#type);
        debug_struct.field("key_id", &self.key_id);
        debug_struct.field("overwrite", &self.overwrite);
        debug_struct.field("allowed_pattern", &self.allowed_pattern);
        debug_struct.field("tags", &self.tags);
        debug_struct.field("tier", &self.tier);
        debug_struct.field("policies", &self.policies);
        debug_struct.field("data_type", &self.data_type);
        debug_struct.field("options", &self.options);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for super::Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("Tag");
        debug_struct.field("key", &self.key);
        debug_struct.field("value", &self.value);
        debug_struct.finish()
    }
}
