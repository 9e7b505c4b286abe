use anyhow::Result;
use loma_testing::TestWorld;
use loma_testing::assertions::{
    assert_keys_once_in_order, assert_page_state, assert_section_order, assert_sections_present,
};
use loma_testing::fixtures::{ListingBuilder, sample_lodging, sample_source, timestamp};

#[test]
fn test_show_builtin_sneaker_page() -> Result<()> {
    let world = TestWorld::new();
    let result = world.run(&["show", "1"])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    let out = result.stdout();
    assert!(out.contains("Stylish Sneakers"));
    assert!(out.contains("$129.99"));
    assert!(out.contains("[ Buy Now ]"));
    assert_section_order(out, &["Stylish Sneakers", "\nItem\n", "\nSource Item\n"])?;
    assert!(!out.contains("\nLodging\n"));
    Ok(())
}

#[test]
fn test_show_builtin_hotel_page_json() -> Result<()> {
    let world = TestWorld::new();
    let result = world.run(&["show", "2", "--format", "json"])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json()?;
    assert_page_state(&json, "loaded")?;
    assert_sections_present(&json, &["listing", "lodging"])?;
    assert_eq!(json["content"]["listing"]["call_to_action"], "book_now");
    assert_eq!(json["content"]["lodging"]["name_label"], "hotel_name");
    assert_eq!(json["content"]["lodging"]["nights"], 2);
    Ok(())
}

#[test]
fn test_show_unknown_listing_is_a_page_not_an_error() -> Result<()> {
    let world = TestWorld::new();
    let result = world.run(&["show", "99"])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Listing 99 not found"));
    assert!(result.stdout().contains("No listing with id 99."));
    assert!(!result.stdout().contains("Buy Now"));

    let json = world.run(&["show", "99", "--format", "json"])?.json()?;
    assert_page_state(&json, "not_found")?;
    assert_eq!(json["content"]["listing_id"], 99);
    assert!(json["content"].get("listing").is_none());
    Ok(())
}

#[test]
fn test_show_rejects_non_numeric_id() -> Result<()> {
    let world = TestWorld::new();
    let result = world.run(&["show", "abc"])?;
    assert!(!result.success());
    Ok(())
}

#[test]
fn test_show_from_configured_catalog() -> Result<()> {
    let world = TestWorld::new().with_catalog(&[
        ListingBuilder::new(10)
            .title("Guest cabin")
            .sale_type("book")
            .price_cents(8_500)
            .with_lodging(sample_lodging("cabin"))
            .build(),
        ListingBuilder::new(11)
            .title("Canoe")
            .with_photos(&["bow", "stern", "paddles"])
            .with_source(sample_source())
            .build(),
    ]);

    let cabin = world.run(&["show", "10"])?;
    assert!(cabin.success(), "stderr: {}", cabin.stderr());
    assert!(cabin.stdout().contains("Guest cabin"));
    assert!(cabin.stdout().contains("[ Book Now ]"));
    assert!(cabin.stdout().contains("Lodging"));
    assert!(!cabin.stdout().contains("Hotel Name"));

    // built-in records are not visible once a catalog is configured
    let sneaker = world.run(&["show", "1"])?;
    assert!(sneaker.stdout().contains("No listing with id 1."));

    let canoe = world.run(&["show", "11", "--format", "json"])?.json()?;
    assert_sections_present(&canoe, &["listing", "item", "source_item"])?;
    assert_eq!(
        canoe["content"]["item"]["carousel"]["photos"]
            .as_array()
            .map(Vec::len),
        Some(3)
    );
    Ok(())
}

#[test]
fn test_show_each_key_once() -> Result<()> {
    let world = TestWorld::new();
    let result = world.run(&["show", "2"])?;
    assert_keys_once_in_order(
        result.stdout(),
        &["Hotel Name", "Address", "Start Date", "End Date", "totalRoomsInBlock"],
    )?;
    Ok(())
}

#[test]
fn test_photo_flag_selects_and_clamps() -> Result<()> {
    let world = TestWorld::new();

    let second = world.run(&["show", "1", "--photo", "1", "--format", "json"])?.json()?;
    assert_eq!(second["content"]["item"]["carousel"]["active_index"], 1);

    let clamped = world.run(&["show", "1", "--photo", "50", "--format", "json"])?.json()?;
    assert_eq!(clamped["content"]["item"]["carousel"]["active_index"], 1);

    let text = world.run(&["show", "1", "--photo", "1"])?;
    assert!(text.stdout().contains("Photos (2 of 2)"));
    Ok(())
}

#[test]
fn test_closed_listing_carries_badge() -> Result<()> {
    let world = TestWorld::new().with_catalog(&[ListingBuilder::new(5)
        .title("Old desk")
        .status("closed")
        .closed_on(timestamp(2024, 4, 1))
        .build()]);

    let result = world.run(&["show", "5"])?;
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("This listing is closed"));
    assert!(result.stdout().contains("Apr 1, 2024"));
    Ok(())
}

#[test]
fn test_view_modes() -> Result<()> {
    let world = TestWorld::new();

    let quiet = world.run(&["show", "1", "--quiet"])?;
    assert_eq!(quiet.stdout().lines().next(), Some("1"));

    let compact = world.run(&["show", "1", "--compact"])?;
    assert!(compact.stdout().contains("#1  Stylish Sneakers  $129.99  Buy Now"));

    let verbose = world.run(&["show", "1", "--verbose"])?;
    assert!(verbose.stdout().contains("https://"));

    let conflict = world.run(&["show", "1", "--quiet", "--verbose"])?;
    assert!(!conflict.success());
    Ok(())
}
