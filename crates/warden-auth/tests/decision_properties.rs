/// Decision properties checked through the public API only.
///
/// Run with:
///   cargo test -p warden-auth --test decision_properties
use std::sync::Arc;

use warden_auth::{
    AuthError, Grant, Metric, MetricUpdate, PERMISSION_DENIED_MESSAGE, Permission,
    PermissionEvaluator, PermissionScope, ProjectsUpdate,
};

const CREATE_METRICS: &str = "createMetrics";

fn list(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

/// Global grant allows nothing; `prj_a` may edit metrics, `prj_c` may only read.
fn editor_in_a() -> PermissionScope {
    PermissionScope::new(Grant::new().allow(Permission::ReadData))
        .with_project("prj_a", Grant::new().allow(Permission::CreateMetrics))
        .unwrap()
        .with_project("prj_c", Grant::new().allow(Permission::ReadData))
        .unwrap()
}

#[test]
fn super_admin_allows_every_query() {
    let scope = editor_in_a().with_super_admin(true);
    let eval = scope.evaluator();
    let envs = list(&["production", "dev"]);

    for permission in Permission::ALL {
        for project in ["", "prj_a", "prj_c", "prj_unknown"] {
            assert!(eval.has_permission(permission.as_str(), project, None));
            assert!(eval.has_permission(permission.as_str(), project, Some(&envs)));
        }
    }
    assert!(eval.has_permission("notARealPermission", "prj_c", None));
}

#[test]
fn empty_project_list_matches_default_sentinel() {
    let scopes = [
        editor_in_a(),
        PermissionScope::new(Grant::new().allow(Permission::CreateMetrics)),
        PermissionScope::new(Grant::new()).with_super_admin(true),
    ];
    for scope in &scopes {
        let eval = scope.evaluator();
        for permission in Permission::ALL {
            assert_eq!(
                eval.check_resource_permission(&list(&[]), permission.as_str()),
                eval.check_resource_permission(&list(&[""]), permission.as_str()),
            );
        }
    }
}

#[test]
fn shared_resource_requires_every_project() {
    let scope = editor_in_a();
    let eval = scope.evaluator();

    let a = eval.check_resource_permission(&list(&["prj_a"]), CREATE_METRICS);
    let c = eval.check_resource_permission(&list(&["prj_c"]), CREATE_METRICS);
    let both = eval.check_resource_permission(&list(&["prj_a", "prj_c"]), CREATE_METRICS);

    assert!(a);
    assert!(!c);
    assert_eq!(both, a && c);
    assert!(!both);
}

#[test]
fn environment_restriction_is_a_subset_check() {
    let scope = PermissionScope::new(Grant::new())
        .with_project(
            "prj_a",
            Grant::new()
                .allow(Permission::PublishFeatures)
                .limit_to_environments(["dev", "staging"]),
        )
        .unwrap();
    let eval = scope.evaluator();

    let ok = list(&["dev", "staging"]);
    let missing_prod = list(&["dev", "prod"]);
    assert!(eval.has_permission("publishFeatures", "prj_a", Some(&ok)));
    assert!(!eval.has_permission("publishFeatures", "prj_a", Some(&missing_prod)));
}

#[test]
fn update_cannot_move_into_forbidden_project() {
    let scope = editor_in_a();
    let eval = scope.evaluator();

    let existing = list(&["prj_a"]);
    let destination = list(&["prj_c"]);
    assert!(eval.check_resource_permission(&existing, CREATE_METRICS));
    assert!(!eval.can_update(&existing, &ProjectsUpdate::Set(&destination), CREATE_METRICS));
}

#[test]
fn update_without_projects_equals_existing_check() {
    let scope = editor_in_a();
    let eval = scope.evaluator();

    for existing in [list(&["prj_a"]), list(&["prj_c"]), list(&[]), list(&["prj_a", "prj_c"])] {
        assert_eq!(
            eval.can_update(&existing, &ProjectsUpdate::Unchanged, CREATE_METRICS),
            eval.check_resource_permission(&existing, CREATE_METRICS),
        );
    }
}

#[test]
fn metric_update_from_json() {
    let scope = editor_in_a();
    let eval = scope.evaluator();
    let metric = Metric {
        id: "met_revenue".into(),
        name: "Revenue".into(),
        projects: list(&["prj_a"]),
    };

    let rename: MetricUpdate = serde_json::from_str(r#"{"name":"Net revenue"}"#).unwrap();
    assert!(eval.can_update_metric(&metric, &rename));

    let move_to_c: MetricUpdate = serde_json::from_str(r#"{"projects":["prj_c"]}"#).unwrap();
    assert!(!eval.can_update_metric(&metric, &move_to_c));

    // Global grant lacks createMetrics, so moving to the default scope is denied.
    let unassign: MetricUpdate = serde_json::from_str(r#"{"projects":[]}"#).unwrap();
    assert!(!eval.can_update_metric(&metric, &unassign));
}

#[test]
fn repeated_calls_are_stable() {
    let scope = Arc::new(editor_in_a());
    let resources = [list(&["prj_a"]), list(&["prj_c"]), list(&[]), list(&["prj_a", "prj_c"])];

    let first: Vec<bool> = resources
        .iter()
        .map(|r| scope.evaluator().check_resource_permission(r, CREATE_METRICS))
        .collect();

    for _ in 0..10 {
        let again: Vec<bool> = resources
            .iter()
            .map(|r| scope.evaluator().check_resource_permission(r, CREATE_METRICS))
            .collect();
        assert_eq!(again, first);
    }
}

#[test]
fn shared_scope_across_threads() {
    let scope = Arc::new(editor_in_a());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let scope = Arc::clone(&scope);
            std::thread::spawn(move || {
                let eval = scope.evaluator();
                (
                    eval.can_create(&list(&["prj_a"]), CREATE_METRICS),
                    eval.can_delete(&list(&["prj_c"]), CREATE_METRICS),
                )
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), (true, false));
    }
}

#[test]
fn fail_fast_denial() {
    let scope = editor_in_a();
    let eval = scope.evaluator();

    let allowed = eval.can_delete(&list(&["prj_a"]), CREATE_METRICS);
    assert!(PermissionEvaluator::ensure(allowed).is_ok());

    let denied = eval.can_delete(&list(&["prj_c"]), CREATE_METRICS);
    let err = PermissionEvaluator::ensure(denied).unwrap_err();
    assert!(matches!(err, AuthError::PermissionDenied));
    assert_eq!(err.to_string(), PERMISSION_DENIED_MESSAGE);
}
