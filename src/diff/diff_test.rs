//! Scenario tests for diffing configs against live objects.

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::diff::{diff, diff_array, last_applied_configuration, three_way_diff, two_way_diff, DiffError, DiffMode, DiffResult};
    use crate::normalize::{DiffOptions, NormalizeRole};
    use crate::schema::GroupKind;
    use crate::value::{from_json, from_yaml, to_json, Value, LAST_APPLIED_CONFIG_ANNOTATION};

    const DEPLOYMENT: &str = r#"
apiVersion: apps/v1
kind: Deployment
metadata:
  name: demo
  namespace: test
  creationTimestamp: null
spec:
  replicas: 2
  selector:
    matchLabels:
      app: demo
  strategy: {}
  template:
    metadata:
      creationTimestamp: null
      labels:
        app: demo
    spec:
      containers:
      - name: demo
        image: gcr.io/kuar-demo/kuard-amd64:1
        ports:
        - containerPort: 80
        resources: {}
status: {}
"#;

    const DEMO_CONFIG: &str = r#"
{
  "apiVersion": "v1",
  "kind": "ServiceAccount",
  "metadata": {
    "labels": {
      "app.kubernetes.io/instance": "argocd-demo"
    },
    "name": "argocd-application-controller"
  }
}
"#;

    const DEMO_LIVE: &str = r#"
{
  "apiVersion": "v1",
  "kind": "ServiceAccount",
  "metadata": {
    "annotations": {
      "kubectl.kubernetes.io/last-applied-configuration": "{\"apiVersion\":\"v1\",\"kind\":\"ServiceAccount\",\"metadata\":{\"annotations\":{},\"labels\":{\"app.kubernetes.io/instance\":\"argocd-demo\"},\"name\":\"argocd-application-controller\",\"namespace\":\"argocd-demo\"}}\n"
    },
    "creationTimestamp": "2018-04-16T22:08:57Z",
    "labels": {
      "app.kubernetes.io/instance": "argocd-demo"
    },
    "name": "argocd-application-controller",
    "namespace": "argocd-demo",
    "resourceVersion": "7584502",
    "selfLink": "/api/v1/namespaces/argocd-demo/serviceaccounts/argocd-application-controller",
    "uid": "c22bb2b4-41c2-11e8-978a-028445d52ec8"
  },
  "secrets": [
    {
      "name": "argocd-application-controller-token-kfxct"
    }
  ]
}
"#;

    const SECRET_CONFIG: &str = r#"
apiVersion: v1
kind: Secret
metadata:
  name: my-secret
type: Opaque
stringData:
  foo: bar
  bar: "1234"
data:
  baz: cXV4
"#;

    const SECRET_LIVE: &str = r#"
apiVersion: v1
kind: Secret
metadata:
  creationTimestamp: 2018-11-19T11:30:40Z
  name: my-secret
  namespace: argocd
  resourceVersion: "25848035"
  selfLink: /api/v1/namespaces/argocd/secrets/my-secret
  uid: 8b4a2766-ebee-11e8-93c0-42010a8a0013
type: Opaque
data:
  foo: YmFy
  bar: MTIzNA==
  baz: cXV4
"#;

    const AGGREGATED_ROLE_CONFIG: &str = r#"
apiVersion: rbac.authorization.k8s.io/v1
kind: ClusterRole
metadata:
  name: argocd-aggregate
  labels:
    rbac.authorization.k8s.io/aggregate-to-admin: "true"
aggregationRule:
  clusterRoleSelectors:
  - matchLabels:
      rbac.argoproj.io/aggregate-to-argocd: "true"
rules: []
"#;

    const AGGREGATED_ROLE_LIVE: &str = r#"
apiVersion: rbac.authorization.k8s.io/v1
kind: ClusterRole
metadata:
  name: argocd-aggregate
  labels:
    rbac.authorization.k8s.io/aggregate-to-admin: "true"
  resourceVersion: "1234"
aggregationRule:
  clusterRoleSelectors:
  - matchLabels:
      rbac.argoproj.io/aggregate-to-argocd: "true"
rules:
- apiGroups: [argoproj.io]
  resources: [applications]
  verbs: [get, list, watch]
"#;

    fn yaml(s: &str) -> Value {
        from_yaml(s).unwrap()
    }

    fn run(config: &Value, live: &Value) -> DiffResult {
        diff(Some(config), Some(live), None, &DiffOptions::default()).unwrap()
    }

    fn with_last_applied(mut live: Value, applied: &Value) -> Value {
        live.set_path(
            &["metadata", "annotations", LAST_APPLIED_CONFIG_ANNOTATION],
            Value::String(to_json(applied).unwrap()),
        );
        live
    }

    #[test]
    fn test_reflexive() {
        for doc in [DEPLOYMENT, DEMO_CONFIG, DEMO_LIVE, SECRET_CONFIG, SECRET_LIVE, AGGREGATED_ROLE_LIVE] {
            let doc = yaml(doc);
            let res = run(&doc, &doc);
            assert!(!res.modified, "{:?}", res);
        }
    }

    #[test]
    fn test_nils() {
        let dep = yaml(DEPLOYMENT);
        let options = DiffOptions::default();

        let res = diff(None, Some(&dep), None, &options).unwrap();
        assert!(!res.modified);
        assert_eq!(res.mode, DiffMode::NoConfig);

        let res = diff(Some(&dep), None, None, &options).unwrap();
        assert!(res.modified);
        assert_eq!(res.mode, DiffMode::Create);
        assert_eq!(res.predicted_live, Some(dep));

        let res = diff(None, None, None, &options).unwrap();
        assert!(!res.modified);
    }

    #[test]
    fn test_nil_field_in_live() {
        let config = yaml(DEPLOYMENT);
        let mut live = config.clone();
        live.set_path(&["spec"], Value::Null);
        assert!(run(&config, &live).modified);
    }

    #[test]
    fn test_live_only_fields_ignored() {
        let config = yaml(DEPLOYMENT);
        let mut live = config.clone();
        live.set_path(&["status", "replicas"], Value::Int(1));
        live.set_path(&["metadata", "uid"], "8b4a2766".into());
        live.set_path(&["spec", "progressDeadlineSeconds"], Value::Int(600));
        assert!(!run(&config, &live).modified);
    }

    #[test]
    fn test_config_only_field_is_a_difference() {
        let live = yaml(DEPLOYMENT);
        let mut config = live.clone();
        config.set_path(&["spec", "minReadySeconds"], Value::Int(5));
        let res = run(&config, &live);
        assert!(res.modified);
        assert_eq!(res.mode, DiffMode::TwoWay);
    }

    #[test]
    fn test_two_way_modification() {
        let config = yaml(DEPLOYMENT);
        let mut live = config.clone();
        live.set_path(&["spec", "replicas"], Value::Int(10));
        let res = run(&config, &live);
        assert!(res.modified);
        assert_eq!(res.predicted_live, res.normalized_live);
        assert_eq!(
            res.normalized_live.as_ref().unwrap().get_path(&["spec", "replicas"]),
            Some(&Value::Int(10))
        );
    }

    #[test]
    fn test_lists_compared_whole() {
        let config = yaml(DEPLOYMENT);
        let mut live = config.clone();
        live.set_path(
            &["spec", "template", "spec", "containers"],
            from_json(
                r#"[{"name": "demo", "image": "gcr.io/kuar-demo/kuard-amd64:1", "ports": [{"containerPort": 80, "protocol": "TCP"}], "resources": {}}]"#,
            )
            .unwrap(),
        );
        assert!(run(&config, &live).modified);
    }

    #[test]
    fn test_three_way_example() {
        let res = run(&from_json(DEMO_CONFIG).unwrap(), &from_json(DEMO_LIVE).unwrap());
        assert_eq!(res.mode, DiffMode::ThreeWay);
        assert!(!res.modified);
    }

    #[test]
    fn test_three_way_detects_removed_field() {
        let mut config = yaml(DEPLOYMENT);
        config.remove_path(&["metadata", "namespace"]);
        config.set_path(&["metadata", "annotations", "foo"], "bar".into());

        // Defaulted namespace on live is not a difference.
        let mut live = config.clone();
        live.set_path(&["metadata", "namespace"], "default".into());
        assert!(!run(&config, &live).modified);

        let live = with_last_applied(live, &config);
        let res = run(&config, &live);
        assert_eq!(res.mode, DiffMode::ThreeWay);
        assert!(!res.modified);

        let mut withdrawn = config.clone();
        withdrawn.remove_path(&["metadata", "annotations"]);
        let res = run(&withdrawn, &live);
        assert!(res.modified);
        assert!(res.predicted_live.unwrap().get_path(&["metadata", "annotations"]).is_none());

        // Without the record a removal cannot be told from a defaulted field.
        let mut live = live;
        live.remove_path(&["metadata", "annotations", LAST_APPLIED_CONFIG_ANNOTATION]);
        assert!(!run(&withdrawn, &live).modified);
    }

    #[test]
    fn test_three_way_noop_ignores_live_drift() {
        let config = yaml(DEPLOYMENT);
        let mut live = with_last_applied(config.clone(), &config);
        live.set_path(&["spec", "replicas"], Value::Int(7));

        let res = run(&config, &live);
        assert_eq!(res.mode, DiffMode::ThreeWay);
        assert!(!res.modified);

        let res = two_way_diff(&config, &live, None, &DiffOptions::default()).unwrap();
        assert_eq!(res.mode, DiffMode::TwoWay);
        assert!(res.modified);
    }

    #[test]
    fn test_three_way_detects_changed_and_added_fields() {
        let applied = yaml(DEPLOYMENT);
        let live = with_last_applied(applied.clone(), &applied);

        let mut changed = applied.clone();
        changed.set_path(&["spec", "replicas"], Value::Int(3));
        let res = run(&changed, &live);
        assert!(res.modified);
        assert_eq!(
            res.predicted_live.unwrap().get_path(&["spec", "replicas"]),
            Some(&Value::Int(3))
        );

        let mut added = applied.clone();
        added.set_path(&["metadata", "labels", "team"], "a".into());
        assert!(run(&added, &live).modified);
    }

    #[test]
    fn test_three_way_explicit_orig() {
        let config = from_json(DEMO_CONFIG).unwrap();
        let mut live = from_json(DEMO_LIVE).unwrap();
        live.remove_path(&["metadata", "annotations"]);

        let mut orig = config.clone();
        orig.set_path(&["metadata", "labels", "old"], "x".into());
        live.set_path(&["metadata", "labels", "old"], "x".into());

        let res = three_way_diff(&orig, &config, &live, None, &DiffOptions::default()).unwrap();
        assert!(res.modified);
        let res = three_way_diff(&config, &config, &live, None, &DiffOptions::default()).unwrap();
        assert!(!res.modified);
    }

    #[test]
    fn test_ignore_aggregated_roles() {
        let config = yaml(AGGREGATED_ROLE_CONFIG);
        let live = yaml(AGGREGATED_ROLE_LIVE);

        let ignore = DiffOptions::default().with_ignore_aggregated_roles(true);
        assert!(!diff(Some(&config), Some(&live), None, &ignore).unwrap().modified);

        let strict = DiffOptions::default().with_ignore_aggregated_roles(false);
        assert!(diff(Some(&config), Some(&live), None, &strict).unwrap().modified);
    }

    #[test]
    fn test_labeled_role_rules_compared() {
        let config = yaml(
            r#"
apiVersion: rbac.authorization.k8s.io/v1
kind: ClusterRole
metadata:
  name: view-widgets
  labels:
    rbac.authorization.k8s.io/aggregate-to-view: "true"
rules:
- apiGroups: [example.com]
  resources: [widgets]
  verbs: [get, list, watch, delete]
"#,
        );
        let mut live = config.clone();
        live.set_path(&["rules"], from_json(r#"[{"apiGroups": ["example.com"], "resources": ["widgets"], "verbs": ["get"]}]"#).unwrap());

        let ignore = DiffOptions::default().with_ignore_aggregated_roles(true);
        assert!(diff(Some(&config), Some(&live), None, &ignore).unwrap().modified);
    }

    #[test]
    fn test_null_role_rules() {
        let config = yaml("apiVersion: rbac.authorization.k8s.io/v1\nkind: ClusterRole\nmetadata:\n  name: grafana\nrules: null\n");
        let live = yaml("apiVersion: rbac.authorization.k8s.io/v1\nkind: ClusterRole\nmetadata:\n  name: grafana\nrules: []\n");
        assert!(!run(&config, &live).modified);
        assert!(!run(&live, &config).modified);
    }

    #[test]
    fn test_secret_string_data() {
        assert!(!run(&yaml(SECRET_CONFIG), &yaml(SECRET_LIVE)).modified);

        let mut live = yaml(SECRET_LIVE);
        live.set_path(&["data", "foo"], "YmF6".into());
        assert!(run(&yaml(SECRET_CONFIG), &live).modified);
    }

    #[test]
    fn test_invalid_secret_string_data() {
        let config = yaml("apiVersion: v1\nkind: Secret\nmetadata:\n  name: my-secret\ntype: Opaque\nstringData:\n  foo: 1234\n");
        let live = yaml("apiVersion: v1\nkind: Secret\nmetadata:\n  name: my-secret\ntype: Opaque\ndata:\n  foo: MTIzNA==\n");

        let res = diff(Some(&config), None, None, &DiffOptions::default()).unwrap();
        assert!(res.modified);

        let err = diff(Some(&config), Some(&live), None, &DiffOptions::default()).unwrap_err();
        assert!(matches!(err, DiffError::InvalidStringData { ref key } if key == "foo"));
    }

    #[test]
    fn test_redacted_secret_data() {
        let mut config = yaml(SECRET_LIVE);
        let mut live = config.clone();
        config.set_path(&["data", "foo"], "***".into());
        live.set_path(&["data", "foo"], "******".into());
        assert!(run(&config, &live).modified);
    }

    #[test]
    fn test_null_creation_timestamp_unknown_kind() {
        let config = yaml(
            r#"
apiVersion: bitnami.com/v1alpha1
kind: SealedSecret
metadata:
  name: mysecret
  creationTimestamp: null
spec:
  encryptedData:
    foo: AgBy3i4OJSWK
"#,
        );
        let mut live = config.clone();
        live.set_path(&["metadata", "creationTimestamp"], "2019-03-01T10:00:00Z".into());
        let live = with_last_applied(live, &config);
        assert!(!run(&config, &live).modified);
    }

    #[test]
    fn test_ignore_namespace_for_unknown_kind() {
        let config = yaml("apiVersion: foo.io/v1\nkind: Foo\nmetadata:\n  name: my-foo\n  namespace: kube-system\nspec:\n  foo: bar\n");
        let live = yaml(
            r#"
apiVersion: foo.io/v1
kind: Foo
metadata:
  creationTimestamp: 2018-07-17 09:17:05 UTC
  name: my-foo
  resourceVersion: '10308211'
  uid: 2c3d5405-89a2-11e8-aff0-42010a8a0fc6
spec:
  foo: bar
"#,
        );
        assert!(!run(&config, &live).modified);
    }

    #[test]
    fn test_canonical_quantities() {
        let config = yaml(
            r#"
apiVersion: v1
kind: Pod
metadata:
  name: my-pod
spec:
  containers:
  - image: nginx:1.7.9
    name: nginx
    resources:
      requests:
        cpu: 0.2
        memory: 0.5Gi
"#,
        );
        let mut live = config.clone();
        live.set_path(
            &["spec", "containers"],
            from_json(r#"[{"image": "nginx:1.7.9", "name": "nginx", "resources": {"requests": {"cpu": "200m", "memory": "512Mi"}}}]"#)
                .unwrap(),
        );
        let res = run(&config, &live);
        assert!(!res.modified, "{:?}", res);
        assert_eq!(
            res.normalized_config.unwrap().pointer("/spec/containers/0/resources/requests/cpu"),
            Some(&Value::from("200m"))
        );
    }

    #[test]
    fn test_schema_error_propagates() {
        let config = yaml(DEPLOYMENT);
        let mut live = config.clone();
        live.set_path(&["spec", "replicas"], "two".into());
        let err = diff(Some(&config), Some(&live), None, &DiffOptions::default()).unwrap_err();
        assert!(matches!(err, DiffError::Schema { ref kind, .. } if *kind == GroupKind::new("apps", "Deployment")));
    }

    #[test]
    fn test_ignored_paths() {
        let config = yaml(DEPLOYMENT);
        let mut live = config.clone();
        live.set_path(&["spec", "replicas"], Value::Int(5));

        let options = DiffOptions::from_yaml("overrides:\n  apps/Deployment:\n    ignoreDifferences: [/spec/replicas]\n").unwrap();
        assert!(!diff(Some(&config), Some(&live), None, &options).unwrap().modified);
        assert!(run(&config, &live).modified);
    }

    #[test]
    fn test_null_field_missing_from_last_applied() {
        let applied = yaml("apiVersion: foo.io/v1\nkind: Foo\nmetadata:\n  name: x\n");
        let doc = with_last_applied(yaml("apiVersion: foo.io/v1\nkind: Foo\nmetadata:\n  name: x\nspec:\n  a: null\n"), &applied);
        assert!(run(&doc, &doc).modified);

        let options = DiffOptions::default().with_ignored_path(&GroupKind::new("foo.io", "Foo"), "/spec/a");
        assert!(!diff(Some(&doc), Some(&doc), None, &options).unwrap().modified);
    }

    #[test]
    fn test_ignored_only_annotation() {
        let config = yaml("apiVersion: v1\nkind: ConfigMap\nmetadata:\n  name: c\n  namespace: d\n  annotations:\n    generated: x\n");
        let live = yaml("apiVersion: v1\nkind: ConfigMap\nmetadata:\n  name: c\n  namespace: d\n");
        assert!(run(&config, &live).modified);

        let options = DiffOptions::default().with_ignored_path(&GroupKind::new("", "ConfigMap"), "/metadata/annotations/generated");
        let res = diff(Some(&config), Some(&live), None, &options).unwrap();
        assert!(!res.modified, "{:?}", res);
        assert_eq!(res.normalized_config.unwrap().get_path(&["metadata", "annotations"]), None);
    }

    #[test]
    fn test_custom_normalizer() {
        let config = yaml(DEPLOYMENT);
        let mut live = config.clone();
        live.set_path(&["spec", "template", "metadata", "annotations", "restartedAt"], "now".into());

        let drop_restart = |doc: &mut Value, _: NormalizeRole| -> Result<(), DiffError> {
            doc.remove_pointer("/spec/template/metadata/annotations/restartedAt");
            Ok(())
        };
        let mut config_with_restart = config.clone();
        config_with_restart.set_path(&["spec", "template", "metadata", "annotations", "restartedAt"], "before".into());

        assert!(run(&config_with_restart, &live).modified);
        let res = diff(Some(&config_with_restart), Some(&live), Some(&drop_restart), &DiffOptions::default()).unwrap();
        assert!(!res.modified);
    }

    #[test]
    fn test_last_applied_configuration() {
        assert_eq!(last_applied_configuration(&yaml(DEPLOYMENT)).unwrap(), None);
        assert!(last_applied_configuration(&from_json(DEMO_LIVE).unwrap()).unwrap().is_some());

        let mut live = yaml(DEPLOYMENT);
        live.set_path(
            &["metadata", "annotations", LAST_APPLIED_CONFIG_ANNOTATION],
            "apiVersion: v1\nkind: ConfigMap\n".into(),
        );
        assert_eq!(
            last_applied_configuration(&live).unwrap(),
            Some(from_json(r#"{"apiVersion": "v1", "kind": "ConfigMap"}"#).unwrap())
        );

        live.set_path(&["metadata", "annotations", LAST_APPLIED_CONFIG_ANNOTATION], "".into());
        assert_eq!(last_applied_configuration(&live).unwrap(), None);

        live.set_path(&["metadata", "annotations", LAST_APPLIED_CONFIG_ANNOTATION], "{\"a\": [".into());
        assert!(matches!(last_applied_configuration(&live), Err(DiffError::InvalidLastApplied(_))));

        live.set_path(&["metadata", "annotations", LAST_APPLIED_CONFIG_ANNOTATION], "just text".into());
        assert!(matches!(last_applied_configuration(&live), Err(DiffError::InvalidLastApplied(_))));
    }

    #[test]
    fn test_diff_array() {
        let dep = yaml(DEPLOYMENT);
        let mut scaled = dep.clone();
        scaled.set_path(&["spec", "replicas"], Value::Int(10));
        let mut with_status = dep.clone();
        with_status.set_path(&["status", "replicas"], Value::Int(1));
        let options = DiffOptions::default();

        let same = diff_array(&[Some(dep.clone())], &[Some(with_status)], None, &options).unwrap();
        assert!(!same.modified);

        let configs = [Some(dep.clone()), Some(dep.clone()), None];
        let lives = [Some(dep.clone()), Some(scaled), Some(dep.clone())];
        let res = diff_array(&configs, &lives, None, &options).unwrap();
        assert!(res.modified);
        assert_eq!(res.len(), 3);
        assert_eq!(
            res.iter().map(|r| r.modified).collect::<Vec<_>>(),
            vec![false, true, false]
        );
        assert_eq!(res.diffs[2].mode, DiffMode::NoConfig);

        let empty = diff_array(&[], &[], None, &options).unwrap();
        assert!(empty.is_empty() && !empty.modified);
    }

    #[test]
    fn test_diff_array_errors() {
        let dep = yaml(DEPLOYMENT);
        let options = DiffOptions::default();

        let err = diff_array(&[Some(dep.clone())], &[], None, &options).unwrap_err();
        assert_eq!(
            err.to_string(),
            "number of configs (1) does not match number of lives (0)"
        );

        let bad_secret = yaml("apiVersion: v1\nkind: Secret\nstringData:\n  foo: [1]\n");
        let err = diff_array(
            &[Some(dep.clone()), Some(bad_secret)],
            &[Some(dep.clone()), Some(yaml(SECRET_LIVE))],
            None,
            &options,
        )
        .unwrap_err();
        assert!(matches!(err, DiffError::InvalidStringData { .. }));
    }
}
