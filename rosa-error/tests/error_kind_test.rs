// Copyright 2023 The ROSA Rust Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use rosa_error::ApiError;
use rosa_error::ErrorKind;
use rosa_error::RosaError;
use rosa_error::ToolsError;

#[test]
fn test_taxonomy_covers_command_failures() {
    let cases: Vec<(RosaError, ErrorKind)> = vec![
        (ToolsError::invalid_identifier("machine pool", "MP").into(), ErrorKind::InvalidInput),
        (ToolsError::protected_machine_pool("Default", "c1").into(), ErrorKind::InvalidInput),
        (ToolsError::cluster_lookup_failed("c1", "missing").into(), ErrorKind::LookupFailure),
        (ToolsError::machine_pool_not_found("mp-1", "c1").into(), ErrorKind::LookupFailure),
        (ToolsError::cluster_not_ready("c1").into(), ErrorKind::StatePrecondition),
        (ToolsError::machine_pool_delete_failed("mp-1", "c1", "boom").into(), ErrorKind::ActionFailure),
        (ToolsError::no_users_configured("c1").into(), ErrorKind::EmptyResult),
        (ToolsError::NotLoggedIn.into(), ErrorKind::Configuration),
        (ApiError::new(500, "Internal Server Error").into(), ErrorKind::ActionFailure),
        (RosaError::network("https://api.openshift.com", "dns"), ErrorKind::Internal),
    ];

    for (err, kind) in cases {
        assert_eq!(err.kind(), kind, "unexpected kind for '{err}'");
        assert_eq!(err.exit_code(), 1);
    }
}

#[test]
fn test_api_error_keeps_server_reason() {
    let err: RosaError = ApiError {
        status: 403,
        id: "403".to_string(),
        code: "CLUSTERS-MGMT-403".to_string(),
        reason: "Account is not allowed to delete machine pools".to_string(),
        operation_id: "op-1".to_string(),
    }
    .into();
    assert!(err.to_string().contains("Account is not allowed to delete machine pools"));
    assert!(err.to_string().contains("CLUSTERS-MGMT-403"));
}
