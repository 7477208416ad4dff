use skillswap::marketplace::{
    CategoryFilter, LevelFilter, Listing, ListingOwner, ListingSource, StarBreakdown,
};
use skillswap::profile::AvatarRef;
use skillswap::{ListingCatalog, QueryState, SkillLevel, SortMode};

fn titles<'a>(results: &[&'a Listing]) -> Vec<&'a str> {
    results.iter().map(|l| l.title.as_str()).collect()
}

fn listing(id: &str, title: &str, category: &str, level: SkillLevel, rating: f32) -> Listing {
    Listing {
        id: id.into(),
        title: title.into(),
        category: category.into(),
        level,
        description: format!("{title} lessons"),
        owner: ListingOwner::new(
            format!("owner-{id}"),
            "Taylor Reed",
            AvatarRef::new(""),
            rating,
        ),
    }
}

#[test]
fn search_for_java_finds_exactly_one_listing() {
    let catalog = ListingCatalog::seeded();
    let mut query = QueryState::new();
    query.set_search_text("java");
    query.set_category(CategoryFilter::parse("all"));
    query.set_level(LevelFilter::parse("all").unwrap());

    assert_eq!(titles(&query.derive(&catalog)), ["JavaScript Programming"]);
}

#[test]
fn arts_alphabetical_orders_photography_before_design() {
    let catalog = ListingCatalog::seeded();
    let mut query = QueryState::new();
    query.set_category(CategoryFilter::parse("Arts"));
    query.set_sort_mode("alphabetical".parse::<SortMode>().unwrap());

    assert_eq!(
        titles(&query.derive(&catalog)),
        ["Digital Photography", "Graphic Design"]
    );
}

#[test]
fn one_query_session_reacts_to_each_mutation() {
    // A user typing, picking filters, then clearing them again; every
    // derive reflects the state at call time and nothing else.
    let catalog = ListingCatalog::seeded();
    let mut query = QueryState::new();

    assert_eq!(query.derive(&catalog).len(), 8);

    query.set_search_text("design");
    assert_eq!(titles(&query.derive(&catalog)), ["Graphic Design"]);

    query.set_category(CategoryFilter::parse("Programming"));
    assert!(query.derive(&catalog).is_empty());

    query.set_search_text("");
    query.set_category(CategoryFilter::parse("all"));
    assert_eq!(query.derive(&catalog).len(), 8);
}

#[test]
fn rating_sort_is_stable_across_equal_ratings() {
    let catalog = ListingCatalog::new(vec![
        listing("1", "Watercolor Painting", "Arts", SkillLevel::Beginner, 4.5),
        listing("2", "Oil Painting", "Arts", SkillLevel::Advanced, 4.5),
        listing("3", "Charcoal Drawing", "Arts", SkillLevel::Beginner, 4.5),
        listing("4", "Pottery", "Arts", SkillLevel::Beginner, 4.9),
    ]);

    let mut query = QueryState::new();
    query.set_sort_mode(SortMode::Rating);

    assert_eq!(
        titles(&query.derive(&catalog)),
        [
            "Pottery",
            "Watercolor Painting",
            "Oil Painting",
            "Charcoal Drawing"
        ]
    );
}

#[test]
fn level_filter_narrows_before_or_after_category_identically() {
    let catalog = ListingCatalog::seeded();

    let mut one = QueryState::new();
    one.set_level(LevelFilter::Only(SkillLevel::Beginner));
    one.set_category(CategoryFilter::parse("Music"));

    let mut other = QueryState::new();
    other.set_category(CategoryFilter::parse("Music"));
    other.set_level(LevelFilter::Only(SkillLevel::Beginner));

    let left = titles(&one.derive(&catalog));
    let right = titles(&other.derive(&catalog));
    assert_eq!(left, right);
    assert_eq!(left, ["Piano Lessons"]);
}

#[test]
fn supplier_backed_catalog_flows_into_the_query() {
    struct DocumentSource(String);

    impl ListingSource for DocumentSource {
        fn fetch_listings(&self) -> Vec<Listing> {
            ListingCatalog::from_json(&self.0)
                .map(|catalog| catalog.all().to_vec())
                .unwrap_or_default()
        }
    }

    let document = serde_json::to_string(ListingCatalog::seeded().all()).unwrap();
    let catalog = ListingCatalog::from_source(&DocumentSource(document));

    let mut query = QueryState::new();
    query.set_search_text("french");
    assert_eq!(titles(&query.derive(&catalog)), ["French Language"]);
}

#[test]
fn result_cards_carry_renderable_rating_and_badge_data() {
    let catalog = ListingCatalog::seeded();
    let mut query = QueryState::new();
    query.set_search_text("yoga");

    let results = query.derive(&catalog);
    assert_eq!(results.len(), 1);

    let card = results[0];
    let stars = StarBreakdown::from_rating(card.owner.rating());
    assert_eq!(stars.full, 5);
    assert!(!stars.half);
    assert_eq!(card.level.badge_color().to_string(), "green");
}
