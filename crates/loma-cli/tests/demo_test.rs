use anyhow::Result;
use loma_testing::TestWorld;
use loma_testing::assertions::{assert_page_state, assert_sections_present};
use loma_testing::fixtures::ListingBuilder;
use predicates::prelude::*;

#[test]
fn test_demo_defaults_to_sneaker() -> Result<()> {
    let world = TestWorld::new();
    let result = world.run(&["demo"])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Stylish Sneakers"));
    assert!(result.stdout().contains("loma demo --hotel"));
    assert!(result.stdout().contains("loma browse"));
    Ok(())
}

#[test]
fn test_demo_hotel_json() -> Result<()> {
    let world = TestWorld::new();
    let json = world.run(&["demo", "--hotel", "--format", "json"])?.json()?;

    assert_page_state(&json, "loaded")?;
    assert_sections_present(&json, &["listing", "lodging"])?;
    assert_eq!(json["content"]["listing"]["title"], "Studio (garden view)");
    Ok(())
}

#[test]
fn test_demo_ignores_configured_catalog() -> Result<()> {
    let world = TestWorld::new().with_catalog(&[ListingBuilder::new(1).title("Lamp").build()]);
    let result = world.run(&["demo"])?;
    assert!(result.stdout().contains("Stylish Sneakers"));
    Ok(())
}

#[test]
fn test_no_subcommand_shows_welcome() -> Result<()> {
    let world = TestWorld::new();
    let result = world.run(&[])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("2 listing(s) available"));
    assert!(result.stdout().contains("loma list"));
    Ok(())
}

#[test]
fn test_no_subcommand_shows_default_listing() -> Result<()> {
    let world = TestWorld::new().with_config("default_listing = 2\n");
    let result = world.run(&[])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Studio (garden view)"));
    Ok(())
}

#[test]
fn test_browse_requires_terminal() -> Result<()> {
    let world = TestWorld::new();

    world
        .command()?
        .arg("browse")
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
    Ok(())
}

#[test]
fn test_plain_output_has_no_ansi_when_piped() -> Result<()> {
    let world = TestWorld::new();
    let result = world.run(&["show", "1"])?;
    assert!(!result.stdout().contains('\u{1b}'));
    Ok(())
}

#[test]
fn test_help_lists_commands() -> Result<()> {
    let world = TestWorld::new();

    world
        .command()?
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("show")
                .and(predicate::str::contains("list"))
                .and(predicate::str::contains("demo"))
                .and(predicate::str::contains("browse"))
                .and(predicate::str::contains("check")),
        );
    Ok(())
}
