//! Test utilities shared across test modules
//!
//! Provides a realistic kubeconfig fixture so every test suite exercises the
//! same document shape (out-of-order contexts, clusters, users, preferences).

use std::path::PathBuf;
use tempfile::TempDir;

/// Three contexts in deliberately non-alphabetical order, current = dev.
pub const SAMPLE_KUBECONFIG: &str = r#"apiVersion: v1
kind: Config
preferences:
  colors: true
clusters:
- name: dev
  cluster:
    server: https://dev.example.com:6443
    certificate-authority-data: ZGV2LWNhLWRhdGE=
- name: staging
  cluster:
    server: https://staging.example.com:6443
    insecure-skip-tls-verify: true
- name: prod
  cluster:
    server: https://prod.example.com:6443
    certificate-authority: /etc/kube/prod-ca.crt
contexts:
- name: staging
  context:
    cluster: staging
    user: staging-admin
- name: dev
  context:
    cluster: dev
    user: dev-admin
    namespace: sandbox
- name: prod
  context:
    cluster: prod
    user: prod-admin
current-context: dev
users:
- name: dev-admin
  user:
    token: dev-token
- name: staging-admin
  user:
    username: staging
    password: hunter2
- name: prod-admin
  user:
    client-certificate: /etc/kube/prod.crt
    client-key: /etc/kube/prod.key
"#;

/// Write the sample kubeconfig into a temp directory and return its path
pub fn write_sample_kubeconfig(temp_dir: &TempDir) -> PathBuf {
    let path = temp_dir.path().join("config");
    std::fs::write(&path, SAMPLE_KUBECONFIG).unwrap();
    path
}
