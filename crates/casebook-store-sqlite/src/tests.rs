//! Integration tests for `SqliteStore` against an in-memory database.

use casebook_core::{
  Error as CoreError, ErrorKind,
  district::DistrictFields,
  state::{State, StateStats},
  store::CaseStore,
};

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn state(state_id: i64, name: &str, population: i64) -> State {
  State { state_id, state_name: name.into(), population }
}

/// A store seeded with three states, inserted out of id order.
async fn seeded() -> SqliteStore {
  let s = store().await;
  s.seed_states(vec![
    state(3, "Kerala", 34_800_000),
    state(1, "Test", 1000),
    state(2, "Goa", 1_540_000),
  ])
  .await
  .unwrap();
  s
}

fn district(name: &str, state_id: i64, counts: [i64; 4]) -> DistrictFields {
  let [cases, cured, active, deaths] = counts;
  DistrictFields {
    district_name: name.into(),
    state_id,
    cases,
    cured,
    active,
    deaths,
  }
}

fn core_err(e: Error) -> CoreError { e.into() }

// ─── States ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_states_is_ordered_by_id() {
  let s = seeded().await;
  let states = s.list_states().await.unwrap();
  let ids: Vec<i64> = states.iter().map(|st| st.state_id).collect();
  assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn list_states_empty_store() {
  let s = store().await;
  assert!(s.list_states().await.unwrap().is_empty());
}

#[tokio::test]
async fn get_state_returns_matching_id() {
  let s = seeded().await;
  for id in [1, 2, 3] {
    let st = s.get_state(id).await.unwrap();
    assert_eq!(st.state_id, id);
  }
  assert_eq!(s.get_state(1).await.unwrap(), state(1, "Test", 1000));
}

#[tokio::test]
async fn get_state_missing_is_not_found() {
  let s = seeded().await;
  let err = core_err(s.get_state(42).await.unwrap_err());
  assert!(matches!(err, CoreError::StateNotFound(42)));
  assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn seed_overwrites_existing_state() {
  let s = seeded().await;
  s.seed_states(vec![state(2, "Goa", 1_600_000)]).await.unwrap();
  assert_eq!(s.get_state(2).await.unwrap().population, 1_600_000);
  assert_eq!(s.list_states().await.unwrap().len(), 3);
}

#[tokio::test]
async fn seed_rejects_invalid_state_and_writes_nothing() {
  let s = store().await;
  let err = s
    .seed_states(vec![state(1, "Test", 10), state(2, "", 10)])
    .await
    .unwrap_err();
  assert_eq!(core_err(err).kind(), ErrorKind::Validation);
  assert!(s.list_states().await.unwrap().is_empty());
}

// ─── Districts ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_then_get_roundtrips_fields() {
  let s = seeded().await;
  let fields = district("Nicobar", 1, [10, 5, 3, 2]);

  let id = s.insert_district(fields.clone()).await.unwrap();
  let got = s.get_district(id).await.unwrap();

  assert_eq!(got.district_id, id);
  assert_eq!(got, fields.into_district(id));
}

#[tokio::test]
async fn inserted_ids_are_distinct() {
  let s = seeded().await;
  let a = s.insert_district(district("A", 1, [0; 4])).await.unwrap();
  let b = s.insert_district(district("B", 1, [0; 4])).await.unwrap();
  assert_ne!(a, b);
}

#[tokio::test]
async fn quoted_name_is_stored_verbatim() {
  let s = seeded().await;
  let name = "O'Brien\"; DROP TABLE district; --";
  let id = s.insert_district(district(name, 1, [1, 1, 0, 0])).await.unwrap();
  assert_eq!(s.get_district(id).await.unwrap().district_name, name);

  s.update_district(id, district("O'Brien", 1, [1, 1, 0, 0]))
    .await
    .unwrap();
  assert_eq!(s.get_district(id).await.unwrap().district_name, "O'Brien");
}

#[tokio::test]
async fn insert_with_unknown_state_is_allowed() {
  let s = seeded().await;
  let id = s.insert_district(district("Orphan", 99, [1, 0, 1, 0])).await.unwrap();
  assert_eq!(s.get_district(id).await.unwrap().state_id, 99);
}

#[tokio::test]
async fn insert_invalid_fields_is_validation_failure() {
  let s = seeded().await;

  let err = s.insert_district(district("", 1, [1, 1, 0, 0])).await.unwrap_err();
  assert_eq!(core_err(err).kind(), ErrorKind::Validation);

  let err = s.insert_district(district("Neg", 1, [-1, 0, 0, 0])).await.unwrap_err();
  assert_eq!(core_err(err).kind(), ErrorKind::Validation);

  assert_eq!(s.state_stats(1).await.unwrap(), StateStats::default());
}

#[tokio::test]
async fn get_missing_district_is_not_found() {
  let s = seeded().await;
  let err = core_err(s.get_district(7).await.unwrap_err());
  assert!(matches!(err, CoreError::DistrictNotFound(7)));
}

#[tokio::test]
async fn update_replaces_every_field() {
  let s = seeded().await;
  let id = s.insert_district(district("Old", 1, [10, 5, 3, 2])).await.unwrap();

  let replacement = district("New", 2, [20, 15, 4, 1]);
  s.update_district(id, replacement.clone()).await.unwrap();

  assert_eq!(s.get_district(id).await.unwrap(), replacement.into_district(id));
}

#[tokio::test]
async fn update_missing_district_is_silent_noop() {
  let s = seeded().await;
  s.update_district(500, district("Ghost", 1, [1, 1, 0, 0]))
    .await
    .unwrap();

  let err = core_err(s.get_district(500).await.unwrap_err());
  assert!(matches!(err, CoreError::DistrictNotFound(500)));
  assert_eq!(s.state_stats(1).await.unwrap(), StateStats::default());
}

#[tokio::test]
async fn update_invalid_fields_leaves_row_untouched() {
  let s = seeded().await;
  let original = district("Kept", 1, [10, 5, 3, 2]);
  let id = s.insert_district(original.clone()).await.unwrap();

  let err = s
    .update_district(id, district("Kept", 1, [10, -5, 3, 2]))
    .await
    .unwrap_err();
  assert_eq!(core_err(err).kind(), ErrorKind::Validation);
  assert_eq!(s.get_district(id).await.unwrap(), original.into_district(id));
}

#[tokio::test]
async fn delete_twice_succeeds_and_district_is_gone() {
  let s = seeded().await;
  let id = s.insert_district(district("Brief", 1, [1, 0, 1, 0])).await.unwrap();

  s.delete_district(id).await.unwrap();
  assert!(matches!(
    core_err(s.get_district(id).await.unwrap_err()),
    CoreError::DistrictNotFound(_)
  ));

  s.delete_district(id).await.unwrap();
  assert!(matches!(
    core_err(s.get_district(id).await.unwrap_err()),
    CoreError::DistrictNotFound(_)
  ));
}

#[tokio::test]
async fn delete_only_removes_the_target() {
  let s = seeded().await;
  let keep = s.insert_district(district("Keep", 1, [4, 4, 0, 0])).await.unwrap();
  let gone = s.insert_district(district("Drop", 1, [6, 1, 5, 0])).await.unwrap();

  s.delete_district(gone).await.unwrap();
  assert!(s.get_district(keep).await.is_ok());
  assert_eq!(s.state_stats(1).await.unwrap().total_cases, 4);
}

// ─── Aggregates ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn stats_single_district_scenario() {
  let s = seeded().await;
  s.insert_district(district("D1", 1, [10, 5, 3, 2])).await.unwrap();

  assert_eq!(
    s.state_stats(1).await.unwrap(),
    StateStats {
      total_cases:  10,
      total_cured:  5,
      total_active: 3,
      total_deaths: 2,
    }
  );
}

#[tokio::test]
async fn stats_without_districts_are_zero() {
  let s = seeded().await;
  assert_eq!(s.state_stats(2).await.unwrap(), StateStats::default());
  // Unknown states aggregate to zero too.
  assert_eq!(s.state_stats(404).await.unwrap(), StateStats::default());
}

#[tokio::test]
async fn stats_sum_only_matching_districts() {
  let s = seeded().await;
  let ones = [
    district("A", 1, [10, 5, 3, 2]),
    district("B", 1, [7, 1, 6, 0]),
    district("C", 1, [100, 90, 0, 10]),
  ];
  for f in &ones {
    s.insert_district(f.clone()).await.unwrap();
  }
  s.insert_district(district("Elsewhere", 3, [1000, 1000, 0, 0]))
    .await
    .unwrap();

  let expected = ones.iter().fold(StateStats::default(), |acc, f| StateStats {
    total_cases:  acc.total_cases + f.cases,
    total_cured:  acc.total_cured + f.cured,
    total_active: acc.total_active + f.active,
    total_deaths: acc.total_deaths + f.deaths,
  });
  assert_eq!(s.state_stats(1).await.unwrap(), expected);
  assert_eq!(s.state_stats(3).await.unwrap().total_cases, 1000);
}

#[tokio::test]
async fn stats_follow_updates_between_states() {
  let s = seeded().await;
  let id = s.insert_district(district("Mover", 1, [10, 5, 3, 2])).await.unwrap();
  s.update_district(id, district("Mover", 2, [10, 5, 3, 2]))
    .await
    .unwrap();

  assert_eq!(s.state_stats(1).await.unwrap(), StateStats::default());
  assert_eq!(s.state_stats(2).await.unwrap().total_cases, 10);
}

// ─── Join lookup ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn district_state_name_follows_state_id() {
  let s = seeded().await;
  let a = s.insert_district(district("In Goa", 2, [1, 1, 0, 0])).await.unwrap();
  let b = s.insert_district(district("In Kerala", 3, [1, 1, 0, 0])).await.unwrap();

  assert_eq!(s.district_state_name(a).await.unwrap().state_name, "Goa");
  assert_eq!(s.district_state_name(b).await.unwrap().state_name, "Kerala");
}

#[tokio::test]
async fn district_state_name_missing_district_is_not_found() {
  let s = seeded().await;
  let err = core_err(s.district_state_name(12).await.unwrap_err());
  assert!(matches!(err, CoreError::DistrictNotFound(12)));
}

#[tokio::test]
async fn district_state_name_dangling_reference_is_not_found() {
  let s = seeded().await;
  let id = s.insert_district(district("Orphan", 77, [0; 4])).await.unwrap();

  let err = core_err(s.district_state_name(id).await.unwrap_err());
  assert!(matches!(
    err,
    CoreError::DanglingStateReference { district_id, state_id: 77 } if district_id == id
  ));
  assert_eq!(err.kind(), ErrorKind::NotFound);
}

// ─── Concurrency & persistence ───────────────────────────────────────────────

#[tokio::test]
async fn concurrent_inserts_are_all_counted() {
  let s = seeded().await;

  let handles: Vec<_> = (0..32)
    .map(|i| {
      let s = s.clone();
      tokio::spawn(async move {
        s.insert_district(district(&format!("D{i}"), 1, [1, 1, 0, 0]))
          .await
          .unwrap()
      })
    })
    .collect();

  let mut ids = Vec::new();
  for h in handles {
    ids.push(h.await.unwrap());
  }
  ids.sort_unstable();
  ids.dedup();

  assert_eq!(ids.len(), 32);
  assert_eq!(s.state_stats(1).await.unwrap().total_cases, 32);
}

#[tokio::test]
async fn reopened_file_keeps_records() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("covid19India.db");

  let id = {
    let s = SqliteStore::open(&path).await.unwrap();
    s.seed_states(vec![state(1, "Test", 1000)]).await.unwrap();
    s.insert_district(district("D1", 1, [10, 5, 3, 2])).await.unwrap()
  };

  let s = SqliteStore::open(&path).await.unwrap();
  assert_eq!(s.get_state(1).await.unwrap().state_name, "Test");
  assert_eq!(s.get_district(id).await.unwrap().district_name, "D1");
}
