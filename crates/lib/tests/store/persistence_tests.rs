//! Mapping files across store instances.

use std::fs;

use serde_json::json;

use super::common::TestEnv;

#[test]
fn round_trip_through_disk() {
  let env = TestEnv::new();
  let dir = env.model("alice");
  let pairs = [("idle", "my_idle.vmd"), ("walk", "走路_v2.vmd"), ("sprint", "run fast.vmd")];

  env.store.save_mapping(&dir, pairs);
  env.store.invalidate(&dir);

  let mapping = env.store.get_mapping(&dir);
  assert_eq!(mapping.len(), pairs.len());
  for (slot, file) in pairs {
    assert_eq!(mapping.get(slot), Some(file));
  }
}

#[test]
fn survives_restart() {
  let env = TestEnv::new();
  let dir = env.model("alice");
  env.store.set_mapping(&dir, "idle", Some("a.vmd"));

  let restarted = env.reopen();
  assert_eq!(restarted.get_mapped_file(&dir, "idle").as_deref(), Some("a.vmd"));
}

#[test]
fn save_filters_empty_values_before_persisting() {
  let env = TestEnv::new();
  let dir = env.model("alice");

  env.store.save_mapping(&dir, [("idle", "a.vmd"), ("walk", ""), ("", "orphan.vmd")]);

  assert_eq!(env.read_json(&dir), json!({ "idle": "a.vmd" }));
  assert!(!env.store.get_mapping(&dir).contains("walk"));
}

#[test]
fn point_update_is_idempotent() {
  let env = TestEnv::new();
  let dir = env.model("alice");

  env.store.set_mapping(&dir, "idle", Some("a.vmd"));
  let once = env.store.get_mapping(&dir);
  let file_once = fs::read_to_string(env.config_file(&dir)).unwrap();

  env.store.set_mapping(&dir, "idle", Some("a.vmd"));
  assert_eq!(env.store.get_mapping(&dir), once);
  assert_eq!(fs::read_to_string(env.config_file(&dir)).unwrap(), file_once);
}

#[test]
fn removal_is_persisted() {
  let env = TestEnv::new();
  let dir = env.model("alice");

  env.store.set_mapping(&dir, "idle", Some("a.vmd"));
  env.store.set_mapping(&dir, "walk", Some("w.vmd"));
  env.store.set_mapping(&dir, "idle", None);

  assert_eq!(env.read_json(&dir), json!({ "walk": "w.vmd" }));
  assert!(!env.reopen().get_mapping(&dir).contains("idle"));
}

#[test]
fn point_write_merges_with_file_on_first_touch() {
  let env = TestEnv::new();
  let dir = env.model("alice");
  env.write_raw(&dir, r#"{"idle": "existing.vmd"}"#);

  env.store.set_mapping(&dir, "walk", Some("w.vmd"));

  assert_eq!(env.read_json(&dir), json!({ "idle": "existing.vmd", "walk": "w.vmd" }));
}

#[test]
fn tolerant_load_of_invalid_json() {
  let env = TestEnv::new();
  let dir = env.model("alice");
  env.write_raw(&dir, "{\"idle\": ");

  assert!(env.store.get_mapping(&dir).is_empty());
}

#[test]
fn tolerant_load_drops_malformed_entries() {
  let env = TestEnv::new();
  let dir = env.model("alice");
  env.write_raw(&dir, r#"{"idle": null, "walk": "w.vmd", "sprint": "", "swim": 7}"#);

  let mapping = env.store.get_mapping(&dir);
  assert_eq!(mapping.len(), 1);
  assert_eq!(mapping.get("walk"), Some("w.vmd"));
}

#[test]
fn write_after_corrupt_load_replaces_file() {
  let env = TestEnv::new();
  let dir = env.model("alice");
  env.write_raw(&dir, "garbage");

  env.store.set_mapping(&dir, "idle", Some("a.vmd"));

  assert_eq!(env.read_json(&dir), json!({ "idle": "a.vmd" }));
}

#[test]
fn empty_key_creates_no_files() {
  let env = TestEnv::new();

  assert!(env.store.get_mapping("").is_empty());
  assert_eq!(env.store.cached_len(), 0);
  assert_eq!(fs::read_dir(env.temp.path()).unwrap().count(), 0);
}
