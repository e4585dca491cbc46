//! Multi-threaded access to one store.

use std::path::PathBuf;
use std::sync::Barrier;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use animslot_lib::{MappingStore, ModelPaths, PathResolver};

use super::common::TestEnv;

const THREADS: usize = 16;

/// Resolver that counts how often the mapping file path is requested.
struct CountingResolver {
  inner: ModelPaths,
  config_lookups: AtomicUsize,
}

impl PathResolver for CountingResolver {
  fn model_dir(&self, model: &str) -> PathBuf {
    self.inner.model_dir(model)
  }

  fn config_file(&self, model_dir: &str) -> PathBuf {
    self.config_lookups.fetch_add(1, Ordering::SeqCst);
    self.inner.config_file(model_dir)
  }
}

#[test]
fn concurrent_point_writes_to_distinct_slots_all_survive() {
  let env = TestEnv::new();
  let dir = env.model("alice");
  let barrier = Barrier::new(THREADS);

  thread::scope(|s| {
    for i in 0..THREADS {
      let (store, dir, barrier) = (&env.store, &dir, &barrier);
      s.spawn(move || {
        barrier.wait();
        store.set_mapping(dir, &format!("slot_{i}"), Some(&format!("file_{i}.vmd")));
      });
    }
  });

  let mapping = env.store.get_mapping(&dir);
  assert_eq!(mapping.len(), THREADS);
  for i in 0..THREADS {
    assert_eq!(mapping.get(&format!("slot_{i}")), Some(format!("file_{i}.vmd").as_str()));
  }

  // The last rename must carry every slot, not an older snapshot
  let on_disk = env.reopen().get_mapping(&dir);
  assert_eq!(on_disk, mapping);
}

#[test]
fn concurrent_first_reads_load_once() {
  let env = TestEnv::new();
  let dir = env.model("alice");
  env.write_raw(&dir, r#"{"idle": "idle.vmd"}"#);

  let store = MappingStore::new(CountingResolver {
    inner: ModelPaths::new(env.temp.path()),
    config_lookups: AtomicUsize::new(0),
  });
  let barrier = Barrier::new(THREADS);

  thread::scope(|s| {
    for _ in 0..THREADS {
      let (store, dir, barrier) = (&store, &dir, &barrier);
      s.spawn(move || {
        barrier.wait();
        assert_eq!(store.get_mapped_file(dir, "idle").as_deref(), Some("idle.vmd"));
      });
    }
  });

  assert_eq!(store.resolver().config_lookups.load(Ordering::SeqCst), 1);
  assert_eq!(store.cached_len(), 1);
}

#[test]
fn readers_never_see_partial_values() {
  let env = TestEnv::new();
  let dir = env.model("alice");
  env.store.set_mapping(&dir, "idle", Some("a.vmd"));

  thread::scope(|s| {
    let (store, dir) = (&env.store, &dir);
    s.spawn(move || {
      for i in 0..50 {
        let file = if i % 2 == 0 { "b.vmd" } else { "a.vmd" };
        store.set_mapping(dir, "idle", Some(file));
      }
    });
    for _ in 0..4 {
      s.spawn(move || {
        for _ in 0..200 {
          let file = store.get_mapped_file(dir, "idle");
          assert!(matches!(file.as_deref(), Some("a.vmd") | Some("b.vmd")));
        }
      });
    }
  });
}

#[test]
fn concurrent_bulk_saves_leave_one_writer_in_place() {
  let env = TestEnv::new();
  let dir = env.model("alice");
  let barrier = Barrier::new(THREADS);

  thread::scope(|s| {
    for i in 0..THREADS {
      let (store, dir, barrier) = (&env.store, &dir, &barrier);
      s.spawn(move || {
        barrier.wait();
        store.save_mapping(dir, [("idle", format!("file_{i}.vmd"))]);
      });
    }
  });

  // Last write wins: exactly one writer's mapping, never a merge
  let mapping = env.store.get_mapping(&dir);
  assert_eq!(mapping.len(), 1);
  assert!(mapping.get("idle").is_some_and(|f| f.starts_with("file_")));

  // The file on disk is always a complete, valid mapping from some writer
  let on_disk = env.reopen().get_mapping(&dir);
  assert_eq!(on_disk.len(), 1);
}

#[test]
fn distinct_directories_do_not_interfere() {
  let env = TestEnv::new();
  let dirs: Vec<String> = (0..THREADS).map(|i| env.model(&format!("model_{i}"))).collect();

  thread::scope(|s| {
    for dir in &dirs {
      let store = &env.store;
      s.spawn(move || {
        store.set_mapping(dir, "idle", Some("idle.vmd"));
        store.set_mapping(dir, "walk", Some("walk.vmd"));
      });
    }
  });

  let reopened = env.reopen();
  for dir in &dirs {
    let mapping = reopened.get_mapping(dir);
    assert_eq!(mapping.get("idle"), Some("idle.vmd"));
    assert_eq!(mapping.get("walk"), Some("walk.vmd"));
  }
}
