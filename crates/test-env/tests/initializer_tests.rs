//! Initializer behavior against on-disk project layouts.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use test_env::defaults::{
    API_TOKEN, API_TOKEN_ALIAS, APP_ENV, CACHE_DRIVER, DEFAULT_API_TOKEN, QUEUE_DRIVER,
    SESSION_DRIVER,
};
use test_env::{DefinitionSource, EnvError, EnvStore, TestSettings};
use test_env_utils::*;

#[test]
fn test_missing_definition_uses_fallbacks() -> anyhow::Result<()> {
    init_test_tracing();
    let project = TestProject::without_definition()?;
    let mut store = EnvStore::new();

    let report = project.initializer().initialize(&mut store)?;

    assert_eq!(report.source, DefinitionSource::Defaults);
    store
        .assert_complete()
        .assert_value(API_TOKEN, "TEST-TOKEN-1234-5678-9ABC-DEF0")
        .assert_value(APP_ENV, "testing")
        .assert_value(CACHE_DRIVER, "array")
        .assert_value(SESSION_DRIVER, "array")
        .assert_value(QUEUE_DRIVER, "sync")
        .assert_absent(API_TOKEN_ALIAS);
    Ok(())
}

#[test]
fn test_partial_definition_fills_gaps() -> anyhow::Result<()> {
    init_test_tracing();
    let project = TestProject::with_definition(DEFINITION_PARTIAL)?;
    let mut store = EnvStore::new();

    let report = project.initializer().initialize(&mut store)?;

    assert_eq!(
        report.source,
        DefinitionSource::File(project.definition_path())
    );
    assert_eq!(report.loaded, vec![APP_ENV]);
    store
        .assert_complete()
        .assert_value(APP_ENV, TEST_ENV_STAGING)
        .assert_value(API_TOKEN, DEFAULT_API_TOKEN)
        .assert_value(CACHE_DRIVER, "array")
        .assert_value(SESSION_DRIVER, "array")
        .assert_value(QUEUE_DRIVER, "sync");
    Ok(())
}

#[test]
fn test_token_from_definition_is_aliased() -> anyhow::Result<()> {
    let project = TestProject::with_definition(DEFINITION_TOKEN_ONLY)?;
    let mut store = EnvStore::new();

    let report = project.initializer().initialize(&mut store)?;

    assert!(report.aliased);
    store
        .assert_complete()
        .assert_value(API_TOKEN, "XYZ")
        .assert_value(API_TOKEN_ALIAS, "XYZ");
    Ok(())
}

#[test]
fn test_full_definition_needs_no_fallbacks() -> anyhow::Result<()> {
    let project = TestProject::with_definition(DEFINITION_FULL)?;
    let mut store = EnvStore::new();

    let report = project.initializer().initialize(&mut store)?;

    assert!(report.defaulted.is_empty());
    assert_eq!(report.loaded.len(), 5);
    store
        .assert_value(API_TOKEN, TEST_FILE_TOKEN)
        .assert_value(API_TOKEN_ALIAS, TEST_FILE_TOKEN)
        .assert_value(APP_ENV, TEST_ENV_CI);

    let settings = TestSettings::from_store(&store)?;
    assert_eq!(settings.cache_driver, test_env::CacheDriver::File);
    assert_eq!(settings.session_driver, test_env::SessionDriver::Cookie);
    assert_eq!(settings.queue_driver, test_env::QueueDriver::Database);
    Ok(())
}

#[test]
fn test_preset_values_are_not_clobbered() -> anyhow::Result<()> {
    let project = TestProject::with_definition(DEFINITION_FULL)?;
    let mut store = EnvStore::from_iter([
        (API_TOKEN, TEST_DEPLOY_TOKEN),
        (API_TOKEN_ALIAS, "legacy-token"),
        (QUEUE_DRIVER, "redis"),
    ]);

    project.initializer().initialize(&mut store)?;

    store
        .assert_value(API_TOKEN, TEST_DEPLOY_TOKEN)
        .assert_value(API_TOKEN_ALIAS, "legacy-token")
        .assert_value(QUEUE_DRIVER, "redis")
        .assert_value(APP_ENV, TEST_ENV_CI);
    Ok(())
}

#[test]
fn test_preset_values_survive_fallbacks() -> anyhow::Result<()> {
    let project = TestProject::without_definition()?;
    let mut store = EnvStore::from_iter([(APP_ENV, "local"), (CACHE_DRIVER, "redis")]);

    let report = project.initializer().initialize(&mut store)?;

    assert_eq!(report.defaulted.len(), 3);
    store
        .assert_complete()
        .assert_value(APP_ENV, "local")
        .assert_value(CACHE_DRIVER, "redis");
    Ok(())
}

#[test]
fn test_alias_follows_preset_token_when_file_defines_token() -> anyhow::Result<()> {
    let project = TestProject::with_definition(DEFINITION_TOKEN_ONLY)?;
    let mut store = EnvStore::from_iter([(API_TOKEN, TEST_DEPLOY_TOKEN)]);

    let report = project.initializer().initialize(&mut store)?;

    assert!(report.aliased);
    store
        .assert_value(API_TOKEN, TEST_DEPLOY_TOKEN)
        .assert_value(API_TOKEN_ALIAS, TEST_DEPLOY_TOKEN);
    Ok(())
}

#[test]
fn test_preset_token_not_aliased_when_file_omits_token() -> anyhow::Result<()> {
    let project = TestProject::with_definition(DEFINITION_PARTIAL)?;
    let mut store = EnvStore::from_iter([(API_TOKEN, TEST_DEPLOY_TOKEN)]);

    let report = project.initializer().initialize(&mut store)?;

    assert!(!report.aliased);
    store.assert_absent(API_TOKEN_ALIAS);
    Ok(())
}

#[test]
fn test_initialize_is_idempotent() -> anyhow::Result<()> {
    for contents in [None, Some(DEFINITION_PARTIAL), Some(DEFINITION_TOKEN_ONLY)] {
        let project = match contents {
            Some(contents) => TestProject::with_definition(contents)?,
            None => TestProject::without_definition()?,
        };
        let initializer = project.initializer();

        let mut once = EnvStore::new();
        initializer.initialize(&mut once)?;

        let mut twice = EnvStore::new();
        initializer.initialize(&mut twice)?;
        let second = initializer.initialize(&mut twice)?;

        twice.assert_same_as(&once);
        assert!(second.loaded.is_empty());
        assert!(second.defaulted.is_empty());
        assert!(!second.aliased);
    }
    Ok(())
}

#[test]
fn test_definition_removed_between_runs() -> anyhow::Result<()> {
    let project = TestProject::with_definition(DEFINITION_TOKEN_ONLY)?;
    project.remove_definition()?;
    let mut store = EnvStore::new();

    let report = project.initializer().initialize(&mut store)?;

    assert_eq!(report.source, DefinitionSource::Defaults);
    store.assert_value(API_TOKEN, DEFAULT_API_TOKEN);
    Ok(())
}

#[test]
fn test_malformed_definition_is_reported() -> anyhow::Result<()> {
    let project = TestProject::with_definition("APP_ENV=staging\nBROKEN LINE\n")?;
    let mut store = EnvStore::new();

    let err = project.initializer().initialize(&mut store).unwrap_err();

    match err {
        EnvError::DefinitionFile { path, .. } => assert_eq!(path, project.definition_path()),
    }
    Ok(())
}

#[test]
fn test_empty_definition_behaves_like_fallbacks() -> anyhow::Result<()> {
    let project = TestProject::with_definition("# nothing here\n")?;
    let mut store = EnvStore::new();

    let report = project.initializer().initialize(&mut store)?;

    assert!(matches!(report.source, DefinitionSource::File(_)));
    assert!(report.loaded.is_empty());
    store
        .assert_complete()
        .assert_value(API_TOKEN, DEFAULT_API_TOKEN)
        .assert_absent(API_TOKEN_ALIAS);
    Ok(())
}

#[test]
fn test_empty_preset_values_are_replaced() -> anyhow::Result<()> {
    let project = TestProject::with_definition(DEFINITION_PARTIAL)?;
    let mut store = EnvStore::from_iter([(APP_ENV, ""), (QUEUE_DRIVER, "")]);

    let report = project.initializer().initialize(&mut store)?;

    assert_eq!(report.loaded, vec![APP_ENV]);
    assert!(report.defaulted.iter().any(|key| key == QUEUE_DRIVER));
    store
        .assert_complete()
        .assert_value(APP_ENV, TEST_ENV_STAGING)
        .assert_value(QUEUE_DRIVER, "sync");
    Ok(())
}

#[test]
fn test_empty_preset_values_get_fallbacks_without_definition() -> anyhow::Result<()> {
    let project = TestProject::without_definition()?;
    let mut store = EnvStore::from_iter([(API_TOKEN, ""), (CACHE_DRIVER, "")]);

    let report = project.initializer().initialize(&mut store)?;

    assert_eq!(report.defaulted.len(), 5);
    store
        .assert_complete()
        .assert_value(API_TOKEN, DEFAULT_API_TOKEN)
        .assert_value(CACHE_DRIVER, "array");
    Ok(())
}
