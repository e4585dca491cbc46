//! End-to-end flows through the store and its consumers.

use std::fs;

use animslot_lib::{AnimSlot, EditSession, PathResolver, resolve_slot_file};

use super::common::TestEnv;

#[test]
fn map_read_and_clear_idle_slot() {
  let env = TestEnv::new();
  let dir = env.model("alice");

  env.store.set_mapping(&dir, "idle", Some("my_idle.vmd"));
  assert_eq!(env.store.get_mapped_file(&dir, "idle").as_deref(), Some("my_idle.vmd"));

  env.store.set_mapping(&dir, "idle", Some(""));
  assert_eq!(env.store.get_mapped_file(&dir, "idle"), None);

  let on_disk = env.read_json(&dir);
  assert!(on_disk.as_object().unwrap().get("idle").is_none());
}

#[test]
fn edit_commit_then_play() {
  let env = TestEnv::new();
  let dir = env.model("alice");
  let anims = env.store.resolver().anims_dir(&dir);
  fs::create_dir_all(&anims).unwrap();
  fs::write(anims.join("my_idle.vmd"), b"").unwrap();
  fs::write(anims.join("walk_v2.vmd"), b"").unwrap();

  let mut session = EditSession::open(&env.store, dir.clone());
  assert_eq!(session.candidates(), ["my_idle.vmd", "walk_v2.vmd"]);
  session.assign(AnimSlot::Idle, "my_idle.vmd");
  session.assign(AnimSlot::Walk, "walk_v2.vmd");
  session.commit();

  let restarted = env.reopen();
  assert_eq!(
    resolve_slot_file(&restarted, &dir, "walk"),
    Some(anims.join("walk_v2.vmd"))
  );
  assert_eq!(resolve_slot_file(&restarted, &dir, "sprint"), None);
}
