use loma_catalog::LoadState;
use loma_types::{Attributes, Item, Listing, ListingRecord, Lodging, SourceItem};

use crate::args::hints::{cmd, fmt};
use crate::presentation::carousel::PhotoCarousel;
use crate::presentation::view_models::{
    AttributeRowViewModel, CallToAction, CarouselViewModel, CommandResultViewModel, Guidance,
    ItemSectionViewModel, ListingPageViewModel, ListingSectionViewModel, LoadedPageViewModel,
    LodgingSectionViewModel, NameLabel, PhotoViewModel, SourceItemSectionViewModel, StatusBadge,
};

/// Build the page for a load outcome.
///
/// `active_photo` is the caller's requested carousel index; it is clamped to
/// the photos the item actually has.
pub fn present_listing_page(
    state: &LoadState,
    active_photo: usize,
) -> CommandResultViewModel<ListingPageViewModel> {
    match state {
        LoadState::Loading => CommandResultViewModel::new(ListingPageViewModel::Loading)
            .with_badge(StatusBadge::info("Loading listing")),
        LoadState::NotFound { listing_id } => {
            CommandResultViewModel::new(ListingPageViewModel::NotFound {
                listing_id: listing_id.get(),
            })
            .with_badge(StatusBadge::warning(format!(
                "Listing {} not found",
                listing_id
            )))
            .with_suggestion(Guidance::new("See which listings exist").with_command(cmd::LIST))
        }
        LoadState::Failed {
            listing_id,
            message,
        } => CommandResultViewModel::new(ListingPageViewModel::Failed {
            listing_id: listing_id.get(),
            message: message.clone(),
        })
        .with_badge(StatusBadge::error(format!(
            "Could not load listing {}",
            listing_id
        )))
        .with_suggestion(Guidance::new("Validate the catalog file").with_command(cmd::CHECK)),
        LoadState::Loaded { record } => {
            let page = present_loaded_page(record, active_photo);
            let mut result = CommandResultViewModel::new(ListingPageViewModel::Loaded(Box::new(
                page.clone(),
            )));

            if record.listing.is_closed() {
                result = result.with_badge(StatusBadge::warning("This listing is closed"));
            }

            if let Some(carousel) = page.item.as_ref().and_then(|item| item.carousel.as_ref())
                && carousel.photos.len() > 1
            {
                let next = (carousel.active_index + 1) % carousel.photos.len();
                result = result.with_suggestion(
                    Guidance::new("View another photo")
                        .with_command(fmt::show_photo(record.id(), next)),
                );
            }

            result
        }
    }
}

/// Page for one of the two harness records, with a tip pointing at the other
pub fn present_demo_page(
    record: &ListingRecord,
    hotel: bool,
    active_photo: usize,
) -> CommandResultViewModel<ListingPageViewModel> {
    let toggle = if hotel {
        Guidance::new("Show the sneaker listing").with_command(cmd::DEMO)
    } else {
        Guidance::new("Show the hotel listing").with_command(cmd::DEMO_HOTEL)
    };

    present_listing_page(&LoadState::loaded(record.clone()), active_photo)
        .with_suggestion(toggle)
        .with_suggestion(Guidance::new("Browse both interactively").with_command(cmd::BROWSE))
}

fn present_loaded_page(record: &ListingRecord, active_photo: usize) -> LoadedPageViewModel {
    LoadedPageViewModel {
        listing: present_listing_section(&record.listing),
        item: record.item().map(|item| present_item_section(item, active_photo)),
        source_item: record.source_item().map(present_source_item_section),
        lodging: record.lodging().map(present_lodging_section),
    }
}

fn present_listing_section(listing: &Listing) -> ListingSectionViewModel {
    ListingSectionViewModel {
        listing_id: listing.id.get(),
        community_id: listing.community_id,
        listed_by_id: listing.listed_by_id,
        title: listing.title.clone(),
        description: listing.description.clone(),
        status: listing.status.clone(),
        listing_type: listing.listing_type.clone(),
        sale_type: listing.sale_type.clone(),
        price_cents: listing.price_cents,
        available_count: listing.available_count,
        created_on: listing.created_on,
        listed_on: listing.listed_on,
        closed_on: listing.closed_on,
        call_to_action: CallToAction::for_sale_type(&listing.sale_type),
    }
}

fn present_item_section(item: &Item, active_photo: usize) -> ItemSectionViewModel {
    let carousel = if item.photos.is_empty() {
        None
    } else {
        let mut state = PhotoCarousel::new(item.photos.len());
        state.select(active_photo);
        Some(CarouselViewModel {
            photos: item
                .photos
                .iter()
                .map(|photo| PhotoViewModel {
                    caption: photo.caption.clone(),
                    url: photo.url.clone(),
                })
                .collect(),
            active_index: state.active(),
        })
    };

    ItemSectionViewModel {
        item_name: item.item_name.clone(),
        condition: item.condition.clone(),
        shipping_zipcode: item.shipping_zipcode.clone(),
        attributes: attribute_rows(&item.item_details),
        carousel,
    }
}

fn present_source_item_section(source: &SourceItem) -> SourceItemSectionViewModel {
    SourceItemSectionViewModel {
        source_item_name: source.source_item_name.clone(),
        source_category_id: source.source_category_id,
        attributes: attribute_rows(&source.source_item_details),
    }
}

fn present_lodging_section(lodging: &Lodging) -> LodgingSectionViewModel {
    LodgingSectionViewModel {
        name_label: NameLabel::for_lodging_type(&lodging.lodging_type),
        lodging_name: lodging.lodging_name.clone(),
        lodging_type: lodging.lodging_type.clone(),
        address: lodging.address.clone(),
        url: lodging.lodging_url.clone(),
        start_date: lodging.start_date,
        end_date: lodging.end_date,
        nights: lodging.nights(),
        attributes: attribute_rows(&lodging.lodging_details),
    }
}

/// Every pair once, in mapping order, raw key as the label
fn attribute_rows(attributes: &Attributes) -> Vec<AttributeRowViewModel> {
    attributes
        .iter()
        .map(|(key, value)| AttributeRowViewModel {
            key: key.clone(),
            value: value.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::StatusLevel;
    use loma_catalog::fixtures;
    use loma_testing::fixtures::{ListingBuilder, attributes, sample_lodging};
    use loma_types::ListingId;

    fn loaded(record: ListingRecord) -> LoadedPageViewModel {
        let result = present_listing_page(&LoadState::loaded(record), 0);
        result
            .content
            .loaded()
            .cloned()
            .expect("page should be loaded")
    }

    #[test]
    fn test_sneaker_page_has_item_sections_and_buy_now() {
        let page = loaded(fixtures::sneaker_listing());

        assert_eq!(page.listing.price_cents, 12999);
        assert_eq!(page.listing.call_to_action, CallToAction::BuyNow);
        assert!(page.item.is_some());
        assert!(page.source_item.is_some());
        assert!(page.lodging.is_none());

        let carousel = page.item.and_then(|i| i.carousel).unwrap();
        assert_eq!(carousel.photos.len(), 2);
        assert_eq!(carousel.active_index, 0);
    }

    #[test]
    fn test_hotel_page_has_lodging_and_book_now() {
        let page = loaded(fixtures::hotel_listing());

        assert_eq!(page.listing.call_to_action, CallToAction::BookNow);
        assert!(page.item.is_none());
        assert!(page.source_item.is_none());

        let lodging = page.lodging.unwrap();
        assert_eq!(lodging.name_label, NameLabel::HotelName);
        assert_eq!(lodging.nights, 2);
    }

    #[test]
    fn test_listing_without_detail_has_only_listing_section() {
        let page = loaded(ListingBuilder::new(5).build());
        assert!(page.item.is_none());
        assert!(page.source_item.is_none());
        assert!(page.lodging.is_none());
    }

    #[test]
    fn test_unknown_sale_and_lodging_types_fall_back() {
        let page = loaded(
            ListingBuilder::new(6)
                .sale_type("auction")
                .with_lodging(sample_lodging("yurt"))
                .build(),
        );
        assert_eq!(page.listing.call_to_action, CallToAction::BuyNow);
        assert_eq!(page.lodging.unwrap().name_label, NameLabel::Lodging);
    }

    #[test]
    fn test_item_without_photos_has_no_carousel() {
        let page = loaded(ListingBuilder::new(7).with_photos(&[]).build());
        let item = page.item.unwrap();
        assert!(item.carousel.is_none());
    }

    #[test]
    fn test_requested_photo_is_clamped() {
        let record = ListingBuilder::new(8).with_photos(&["a", "b", "c"]).build();
        let result = present_listing_page(&LoadState::loaded(record), 9);
        let carousel = result
            .content
            .loaded()
            .and_then(|page| page.item.as_ref())
            .and_then(|item| item.carousel.as_ref())
            .unwrap();
        assert_eq!(carousel.active_index, 2);
    }

    #[test]
    fn test_attribute_rows_keep_mapping_order() {
        let mut item = loma_testing::fixtures::sample_item();
        item.item_details = attributes(vec![("zeta", "1"), ("alpha", "2"), ("mid", "3")]);
        let page = loaded(ListingBuilder::new(9).with_item(item).build());

        let keys: Vec<String> = page
            .item
            .unwrap()
            .attributes
            .into_iter()
            .map(|row| row.key)
            .collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_not_found_page_has_warning_and_guidance() {
        let result = present_listing_page(
            &LoadState::NotFound {
                listing_id: ListingId(42),
            },
            0,
        );
        assert_eq!(
            result.content,
            ListingPageViewModel::NotFound { listing_id: 42 }
        );
        assert_eq!(result.badge.map(|b| b.level), Some(StatusLevel::Warning));
        assert_eq!(result.suggestions.len(), 1);
    }

    #[test]
    fn test_closed_listing_gets_warning_badge() {
        let record = ListingBuilder::new(10)
            .closed_on(loma_testing::fixtures::timestamp(2024, 4, 1))
            .build();
        let result = present_listing_page(&LoadState::loaded(record), 0);
        assert_eq!(
            result.badge.map(|b| b.label),
            Some("This listing is closed".to_string())
        );
    }

    #[test]
    fn test_loaded_page_json_shape() {
        let result = present_listing_page(&LoadState::loaded(fixtures::hotel_listing()), 0);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["content"]["state"], "loaded");
        assert_eq!(json["content"]["listing"]["call_to_action"], "book_now");
        assert_eq!(json["content"]["lodging"]["name_label"], "hotel_name");
        assert_eq!(json["content"]["lodging"]["start_date"], "2024-05-01");
        assert!(json["content"]["item"].is_null());
    }
}
