//! Built-in catalog of well-known kinds.
//!
//! Only the fields whose encoding a typed client would change are described;
//! anything else in a document passes through the round trip untouched.

/// BUILTIN_CATALOG_YAML lists kinds with their scope and, where known, the
/// schema type used for the typed round trip.
pub const BUILTIN_CATALOG_YAML: &str = r#"kinds:
- {group: "", kind: Pod, scope: namespaced, type: pod}
- {group: "", kind: ServiceAccount, scope: namespaced, type: serviceAccount}
- {group: "", kind: Secret, scope: namespaced, type: secret}
- {group: "", kind: ConfigMap, scope: namespaced, type: configMap}
- {group: "", kind: Service, scope: namespaced, type: service}
- {group: "", kind: Namespace, scope: cluster, type: namespace}
- {group: "", kind: Endpoints, scope: namespaced}
- {group: "", kind: PersistentVolumeClaim, scope: namespaced}
- {group: "", kind: Node, scope: cluster}
- {group: "", kind: PersistentVolume, scope: cluster}
- {group: apps, kind: Deployment, scope: namespaced, type: deployment}
- {group: apps, kind: StatefulSet, scope: namespaced, type: statefulSet}
- {group: apps, kind: DaemonSet, scope: namespaced, type: daemonSet}
- {group: apps, kind: ReplicaSet, scope: namespaced, type: replicaSet}
- {group: extensions, kind: Deployment, scope: namespaced, type: deployment}
- {group: batch, kind: Job, scope: namespaced, type: job}
- {group: batch, kind: CronJob, scope: namespaced}
- {group: rbac.authorization.k8s.io, kind: Role, scope: namespaced, type: role}
- {group: rbac.authorization.k8s.io, kind: ClusterRole, scope: cluster, type: role}
- {group: rbac.authorization.k8s.io, kind: RoleBinding, scope: namespaced, type: roleBinding}
- {group: rbac.authorization.k8s.io, kind: ClusterRoleBinding, scope: cluster, type: roleBinding}
- {group: networking.k8s.io, kind: Ingress, scope: namespaced}
- {group: storage.k8s.io, kind: StorageClass, scope: cluster}
- {group: apiextensions.k8s.io, kind: CustomResourceDefinition, scope: cluster}
- {group: admissionregistration.k8s.io, kind: MutatingWebhookConfiguration, scope: cluster}
- {group: admissionregistration.k8s.io, kind: ValidatingWebhookConfiguration, scope: cluster}
- {group: scheduling.k8s.io, kind: PriorityClass, scope: cluster}
types:
- name: stringMap
  map:
    elementType:
      scalar: string
- name: stringList
  list:
    elementType:
      scalar: string
- name: objectMeta
  map:
    fields:
    - name: name
      type: {scalar: string}
    - name: generateName
      type: {scalar: string}
    - name: namespace
      type: {scalar: string}
    - name: selfLink
      type: {scalar: string}
    - name: uid
      type: {scalar: string}
    - name: resourceVersion
      type: {scalar: string}
    - name: generation
      type: {scalar: integer}
    - name: creationTimestamp
      type: {scalar: timestamp}
    - name: deletionTimestamp
      type: {scalar: timestamp}
    - name: deletionGracePeriodSeconds
      omit: nil
      type: {scalar: integer}
    - name: labels
      type: {namedType: stringMap}
    - name: annotations
      type: {namedType: stringMap}
    - name: finalizers
      type: {namedType: stringList}
    - name: ownerReferences
      type:
        list:
          elementType:
            map:
              elementType: {scalar: untyped}
    - name: managedFields
      type:
        list:
          elementType: {}
- name: localObjectReference
  map:
    fields:
    - name: name
      type: {scalar: string}
- name: labelSelector
  map:
    fields:
    - name: matchLabels
      type: {namedType: stringMap}
    - name: matchExpressions
      type:
        list:
          elementType:
            map:
              fields:
              - name: key
                omit: never
                type: {scalar: string}
              - name: operator
                omit: never
                type: {scalar: string}
              - name: values
                type: {namedType: stringList}
- name: resourceList
  map:
    elementType:
      scalar: quantity
- name: resourceRequirements
  map:
    fields:
    - name: limits
      type: {namedType: resourceList}
    - name: requests
      type: {namedType: resourceList}
- name: containerPort
  map:
    fields:
    - name: name
      type: {scalar: string}
    - name: hostPort
      type: {scalar: integer}
    - name: containerPort
      omit: never
      type: {scalar: integer}
    - name: protocol
      type: {scalar: string}
    - name: hostIP
      type: {scalar: string}
- name: envVar
  map:
    fields:
    - name: name
      omit: never
      type: {scalar: string}
    - name: value
      type: {scalar: string}
    - name: valueFrom
      omit: nil
      type:
        map:
          elementType: {}
- name: container
  map:
    fields:
    - name: name
      omit: never
      type: {scalar: string}
    - name: image
      type: {scalar: string}
    - name: command
      type: {namedType: stringList}
    - name: args
      type: {namedType: stringList}
    - name: workingDir
      type: {scalar: string}
    - name: ports
      type:
        list:
          elementType: {namedType: containerPort}
    - name: env
      type:
        list:
          elementType: {namedType: envVar}
    - name: resources
      type: {namedType: resourceRequirements}
    - name: volumeMounts
      type:
        list:
          elementType: {}
    - name: imagePullPolicy
      type: {scalar: string}
    - name: stdin
      type: {scalar: boolean}
    - name: tty
      type: {scalar: boolean}
- name: podSpec
  map:
    fields:
    - name: containers
      omit: never
      type:
        list:
          elementType: {namedType: container}
    - name: initContainers
      type:
        list:
          elementType: {namedType: container}
    - name: volumes
      type:
        list:
          elementType: {}
    - name: imagePullSecrets
      type:
        list:
          elementType: {namedType: localObjectReference}
    - name: nodeSelector
      type: {namedType: stringMap}
    - name: serviceAccountName
      type: {scalar: string}
    - name: restartPolicy
      type: {scalar: string}
    - name: dnsPolicy
      type: {scalar: string}
    - name: hostNetwork
      type: {scalar: boolean}
    - name: terminationGracePeriodSeconds
      omit: nil
      type: {scalar: integer}
    - name: activeDeadlineSeconds
      omit: nil
      type: {scalar: integer}
    - name: priority
      omit: nil
      type: {scalar: integer}
    - name: tolerations
      type:
        list:
          elementType: {}
- name: podTemplateSpec
  map:
    fields:
    - name: metadata
      omit: nil
      type: {namedType: objectMeta}
    - name: spec
      omit: nil
      type: {namedType: podSpec}
- name: pod
  map:
    fields:
    - name: metadata
      omit: nil
      type: {namedType: objectMeta}
    - name: spec
      omit: nil
      type: {namedType: podSpec}
- name: serviceAccount
  map:
    fields:
    - name: metadata
      omit: nil
      type: {namedType: objectMeta}
    - name: secrets
      type:
        list:
          elementType: {}
    - name: imagePullSecrets
      type:
        list:
          elementType: {namedType: localObjectReference}
    - name: automountServiceAccountToken
      omit: nil
      type: {scalar: boolean}
- name: secret
  map:
    fields:
    - name: metadata
      omit: nil
      type: {namedType: objectMeta}
    - name: immutable
      omit: nil
      type: {scalar: boolean}
    - name: data
      type: {namedType: stringMap}
    - name: stringData
      type: {namedType: stringMap}
    - name: type
      type: {scalar: string}
- name: configMap
  map:
    fields:
    - name: metadata
      omit: nil
      type: {namedType: objectMeta}
    - name: immutable
      omit: nil
      type: {scalar: boolean}
    - name: data
      type: {namedType: stringMap}
    - name: binaryData
      type: {namedType: stringMap}
- name: servicePort
  map:
    fields:
    - name: name
      type: {scalar: string}
    - name: protocol
      type: {scalar: string}
    - name: port
      omit: never
      type: {scalar: integer}
    - name: targetPort
      type: {scalar: intOrString}
    - name: nodePort
      type: {scalar: integer}
- name: service
  map:
    fields:
    - name: metadata
      omit: nil
      type: {namedType: objectMeta}
    - name: spec
      omit: nil
      type:
        map:
          fields:
          - name: ports
            type:
              list:
                elementType: {namedType: servicePort}
          - name: selector
            type: {namedType: stringMap}
          - name: clusterIP
            type: {scalar: string}
          - name: type
            type: {scalar: string}
          - name: externalIPs
            type: {namedType: stringList}
          - name: sessionAffinity
            type: {scalar: string}
- name: namespace
  map:
    fields:
    - name: metadata
      omit: nil
      type: {namedType: objectMeta}
- name: deployment
  map:
    fields:
    - name: metadata
      omit: nil
      type: {namedType: objectMeta}
    - name: spec
      omit: nil
      type:
        map:
          fields:
          - name: replicas
            omit: nil
            type: {scalar: integer}
          - name: selector
            omit: nil
            type: {namedType: labelSelector}
          - name: template
            omit: nil
            type: {namedType: podTemplateSpec}
          - name: minReadySeconds
            type: {scalar: integer}
          - name: revisionHistoryLimit
            omit: nil
            type: {scalar: integer}
          - name: paused
            type: {scalar: boolean}
          - name: progressDeadlineSeconds
            omit: nil
            type: {scalar: integer}
- name: statefulSet
  map:
    fields:
    - name: metadata
      omit: nil
      type: {namedType: objectMeta}
    - name: spec
      omit: nil
      type:
        map:
          fields:
          - name: replicas
            omit: nil
            type: {scalar: integer}
          - name: selector
            omit: nil
            type: {namedType: labelSelector}
          - name: template
            omit: nil
            type: {namedType: podTemplateSpec}
          - name: serviceName
            type: {scalar: string}
          - name: podManagementPolicy
            type: {scalar: string}
          - name: revisionHistoryLimit
            omit: nil
            type: {scalar: integer}
          - name: volumeClaimTemplates
            type:
              list:
                elementType: {}
- name: daemonSet
  map:
    fields:
    - name: metadata
      omit: nil
      type: {namedType: objectMeta}
    - name: spec
      omit: nil
      type:
        map:
          fields:
          - name: selector
            omit: nil
            type: {namedType: labelSelector}
          - name: template
            omit: nil
            type: {namedType: podTemplateSpec}
          - name: minReadySeconds
            type: {scalar: integer}
          - name: revisionHistoryLimit
            omit: nil
            type: {scalar: integer}
- name: replicaSet
  map:
    fields:
    - name: metadata
      omit: nil
      type: {namedType: objectMeta}
    - name: spec
      omit: nil
      type:
        map:
          fields:
          - name: replicas
            omit: nil
            type: {scalar: integer}
          - name: selector
            omit: nil
            type: {namedType: labelSelector}
          - name: template
            omit: nil
            type: {namedType: podTemplateSpec}
          - name: minReadySeconds
            type: {scalar: integer}
- name: job
  map:
    fields:
    - name: metadata
      omit: nil
      type: {namedType: objectMeta}
    - name: spec
      omit: nil
      type:
        map:
          fields:
          - name: parallelism
            omit: nil
            type: {scalar: integer}
          - name: completions
            omit: nil
            type: {scalar: integer}
          - name: backoffLimit
            omit: nil
            type: {scalar: integer}
          - name: activeDeadlineSeconds
            omit: nil
            type: {scalar: integer}
          - name: selector
            omit: nil
            type: {namedType: labelSelector}
          - name: template
            omit: nil
            type: {namedType: podTemplateSpec}
- name: policyRule
  map:
    fields:
    - name: verbs
      omit: never
      type: {namedType: stringList}
    - name: apiGroups
      type: {namedType: stringList}
    - name: resources
      type: {namedType: stringList}
    - name: resourceNames
      type: {namedType: stringList}
    - name: nonResourceURLs
      type: {namedType: stringList}
- name: role
  map:
    fields:
    - name: metadata
      omit: nil
      type: {namedType: objectMeta}
    - name: rules
      omit: never
      type:
        list:
          elementType: {namedType: policyRule}
    - name: aggregationRule
      omit: nil
      type:
        map:
          fields:
          - name: clusterRoleSelectors
            type:
              list:
                elementType: {namedType: labelSelector}
- name: roleBinding
  map:
    fields:
    - name: metadata
      omit: nil
      type: {namedType: objectMeta}
    - name: subjects
      type:
        list:
          elementType:
            map:
              fields:
              - name: kind
                omit: never
                type: {scalar: string}
              - name: apiGroup
                type: {scalar: string}
              - name: name
                omit: never
                type: {scalar: string}
              - name: namespace
                type: {scalar: string}
    - name: roleRef
      omit: nil
      type:
        map:
          fields:
          - name: apiGroup
            omit: never
            type: {scalar: string}
          - name: kind
            omit: never
            type: {scalar: string}
          - name: name
            omit: never
            type: {scalar: string}
"#;
