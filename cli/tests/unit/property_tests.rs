//! Property-based tests for ID list parsing and batch semantics.
//!
//! Uses `proptest` to verify invariants across many random inputs.

#![allow(clippy::expect_used)]

use std::collections::HashSet;

use proptest::prelude::*;

use fleet_cli::application::services::env_rm::remove_variables;
use fleet_cli::domain::{IdList, RemovalOutcome, RemovalRequest, confirmation_prompt};
use fleet_common::VarResource;

use crate::mocks::{CollectingReporter, LoggedIn, RecordingApi, ScriptedPrompt};

fn join(ids: &[u64]) -> String {
    ids.iter().map(u64::to_string).collect::<Vec<_>>().join(",")
}

fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime")
        .block_on(fut)
}

proptest! {
    /// Parsing keeps every token, in order, including duplicates.
    #[test]
    fn prop_parse_preserves_order_and_duplicates(ids in prop::collection::vec(any::<u64>(), 1..20)) {
        let list: IdList = join(&ids).parse().expect("valid list");
        let parsed: Vec<u64> = list.iter().map(|id| id.get()).collect();
        prop_assert_eq!(parsed, ids);
    }

    /// Any token that is not pure digits is rejected.
    #[test]
    fn prop_non_digit_tokens_rejected(bad in "[0-9]{0,3}[a-z \\-+.][0-9]{0,3}") {
        let raw = format!("1,{bad}");
        prop_assert!(raw.parse::<IdList>().is_err());
    }

    /// Plural wording with the count for several IDs, the ID itself for one.
    #[test]
    fn prop_prompt_wording_matches_count(ids in prop::collection::vec(any::<u64>(), 1..10)) {
        let list: IdList = join(&ids).parse().expect("valid list");
        let prompt = confirmation_prompt(&list);
        if ids.len() > 1 {
            let expected = format!("delete {} environment variables?", ids.len());
            prop_assert!(prompt.ends_with(&expected));
        } else {
            let expected = format!("delete environment variable {}?", ids[0]);
            prop_assert!(prompt.ends_with(&expected));
        }
    }

    /// With --yes: never prompts, one call per token in order, exit status
    /// non-zero exactly when some call failed.
    #[test]
    fn prop_batch_calls_every_id_and_derives_exit_status(
        ids in prop::collection::vec(0u64..50, 1..15),
        failing in prop::collection::hash_set(0u64..50, 0..5),
    ) {
        let mut api = RecordingApi::new();
        for id in &failing {
            api = api.failing(*id, "not found");
        }
        let prompt = ScriptedPrompt::answering(false);
        let request = RemovalRequest {
            ids: join(&ids).parse().expect("valid list"),
            resource: VarResource::ApplicationEnv,
            skip_confirmation: true,
        };

        let outcome = block_on(remove_variables(
            &LoggedIn,
            &prompt,
            &api,
            &CollectingReporter::default(),
            &request,
        ))
        .expect("remove");

        prop_assert!(prompt.questions().is_empty());
        prop_assert_eq!(api.called_ids(), ids.clone());

        let any_failed = ids.iter().any(|id| failing.contains(id));
        prop_assert_eq!(outcome.exit_code(), u8::from(any_failed));
        let RemovalOutcome::Completed(report) = outcome else {
            return Err(TestCaseError::fail("expected a completed batch"));
        };
        let failed_ids: HashSet<u64> = report.failures().map(|o| o.id().get()).collect();
        let expected: HashSet<u64> = ids.iter().copied().filter(|id| failing.contains(id)).collect();
        prop_assert_eq!(failed_ids, expected);
    }

    /// A declined prompt issues no deletes, whatever the batch.
    #[test]
    fn prop_decline_issues_no_deletes(ids in prop::collection::vec(any::<u64>(), 1..10)) {
        let api = RecordingApi::new();
        let request = RemovalRequest {
            ids: join(&ids).parse().expect("valid list"),
            resource: VarResource::DeviceEnv,
            skip_confirmation: false,
        };

        let outcome = block_on(remove_variables(
            &LoggedIn,
            &ScriptedPrompt::answering(false),
            &api,
            &CollectingReporter::default(),
            &request,
        ))
        .expect("remove");

        prop_assert_eq!(outcome, RemovalOutcome::Declined);
        prop_assert!(api.calls().is_empty());
    }
}
