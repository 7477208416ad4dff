//! Curated skill suggestions for the teach/learn picker steps.

/// Picker categories, in display order.
pub const CATEGORIES: [&str; 8] = [
    "Technology",
    "Arts & Crafts",
    "Languages",
    "Music",
    "Cooking",
    "Fitness",
    "Business",
    "Academic",
];

/// Popular skills for one picker category.
///
/// Unknown categories yield an empty slice.
#[must_use]
pub fn popular_skills(category: &str) -> &'static [&'static str] {
    match category {
        "Technology" => &["JavaScript", "Python", "React", "UX Design", "Data Science"],
        "Arts & Crafts" => &["Drawing", "Painting", "Knitting", "Photography", "Pottery"],
        "Languages" => &["Spanish", "French", "Mandarin", "German", "Japanese"],
        "Music" => &["Guitar", "Piano", "Singing", "Music Production", "Drums"],
        "Cooking" => &["Baking", "Italian Cuisine", "Vegan Cooking", "Pastry", "BBQ"],
        "Fitness" => &["Yoga", "Weight Training", "Running", "Dance", "Meditation"],
        "Business" => &[
            "Marketing",
            "Public Speaking",
            "Negotiation",
            "Leadership",
            "Finance",
        ],
        "Academic" => &["Mathematics", "Physics", "Literature", "History", "Biology"],
        _ => &[],
    }
}
