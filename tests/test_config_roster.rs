use roster::config::Config;
use roster::router::{Route, View};
use tempfile::TempDir;

fn write_config(body: &str) -> (TempDir, Config) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, body).unwrap();
    let config = Config::load_or_default(&path).unwrap();
    (temp_dir, config)
}

#[test]
fn test_ids_assigned_after_largest_explicit_id() {
    let (_dir, config) = write_config(
        r#"
[[students]]
name = "Ivan Petrov"
group = "G101"

[[students]]
id = 10
name = "Anna Smirnova"
group = "G102"

[[students]]
name = "Oleg Ivanov"
group = "G103"
"#,
    );
    let roster = config.roster().unwrap();
    let ids: Vec<u32> = roster.students().iter().map(|s| s.id.0).collect();
    assert_eq!(ids, vec![11, 10, 12]);
}

#[test]
fn test_duplicate_ids_rejected() {
    let (_dir, config) = write_config(
        r#"
[[students]]
id = 3
name = "Ivan Petrov"
group = "G101"

[[students]]
id = 3
name = "Anna Smirnova"
group = "G102"
"#,
    );
    let err = config.roster().unwrap_err();
    assert!(format!("{:#}", err).contains("Duplicate student id 3"));
}

#[test]
fn test_custom_subjects_and_collision_lookup() {
    let (_dir, config) = write_config(
        r#"
retake_subjects = ["Сети"]

[[students]]
id = 1
name = "Ivan Petrov"
group = "G101"

[[students]]
id = 2
name = "Ivan Petrov"
group = "G101"
"#,
    );
    let roster = config.roster().unwrap();
    assert_eq!(roster.retake_subjects(), ["Сети".to_string()]);

    // The name/group route can only reach the first twin
    let by_name = Route::detail("Ivan Petrov", "G101");
    assert!(matches!(by_name.resolve(&roster), View::Detail(Some(s)) if s.id.0 == 1));
    let by_id: Route = "student/2".parse().unwrap();
    assert!(matches!(by_id.resolve(&roster), View::Detail(Some(s)) if s.id.0 == 2));
}
