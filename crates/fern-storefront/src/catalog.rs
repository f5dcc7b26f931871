//! Built-in demo catalog, used when no remote catalog is configured.

use fern_commerce::catalog::{Collection, Product};
use fern_commerce::money::{Currency, Money};

fn rupees(major: i64) -> Money {
    Money::new(major * 100, Currency::INR)
}

/// The fixed Fernwell demo catalog.
pub fn demo_catalog() -> Vec<Product> {
    vec![
        Product::new("1", "Lavender Dreams Body Butter", rupees(2_099))
            .with_original_price(rupees(2_899))
            .with_image("/images/lavender-body-butter.jpg")
            .with_category("Body Care")
            .with_room("Bath & Body")
            .with_styles(["Relaxing", "Natural"])
            .with_description(
                "Rich shea body butter whipped with lavender essential oil. \
                 Melts in to soothe dry skin and settle the evening.",
            )
            .with_rating(4.8, 127)
            .bestseller(),
        Product::new("2", "Vitamin C Brightening Serum", rupees(3_249))
            .with_image("/images/vitamin-c-serum.jpg")
            .with_category("Skincare")
            .with_room("Skincare")
            .with_styles(["Clinical", "Effective"])
            .with_description(
                "Lightweight vitamin C serum that fades dark spots and evens \
                 tone for a brighter complexion.",
            )
            .with_rating(4.6, 89)
            .new_arrival(),
        Product::new("3", "Rose Hydrating Face Mist", rupees(1_599))
            .with_image("/images/rose-face-mist.jpg")
            .with_category("Skincare")
            .with_room("Skincare")
            .with_styles(["Hydrating", "Refreshing"])
            .with_description(
                "Steam-distilled rose water in a fine mist. Hydrates on \
                 contact and sets makeup without residue.",
            )
            .with_rating(4.7, 203),
        Product::new("4", "Argan Oil Hair Mask", rupees(2_749))
            .with_original_price(rupees(3_599))
            .with_image("/images/argan-hair-mask.jpg")
            .with_category("Hair Care")
            .with_room("Hair Care")
            .with_styles(["Nourishing", "Repair"])
            .with_description(
                "Deep-conditioning mask with Moroccan argan oil that mends \
                 heat-damaged strands and brings back shine.",
            )
            .with_rating(4.9, 156)
            .bestseller(),
        Product::new("5", "Eucalyptus Shower Steamers", rupees(1_699))
            .with_original_price(rupees(2_299))
            .with_image("/images/eucalyptus-steamers.jpg")
            .with_category("Bath")
            .with_room("Bath & Body")
            .with_styles(["Aromatherapy", "Spa"])
            .with_description(
                "Six eucalyptus steamers that turn a hot shower into a \
                 clearing, spa-grade ritual.",
            )
            .with_rating(4.7, 94)
            .bestseller(),
        Product::new("6", "Bamboo Facial Cleansing Brush", rupees(1_399))
            .with_image("/images/bamboo-brush.jpg")
            .with_category("Tools")
            .with_room("Skincare")
            .with_styles(["Eco-Friendly", "Gentle"])
            .with_description(
                "Soft-bristled bamboo brush for gentle daily exfoliation and \
                 better circulation.",
            )
            .with_rating(4.5, 67)
            .new_arrival(),
        Product::new("7", "Collagen Boosting Night Cream", rupees(3_899))
            .with_original_price(rupees(5_249))
            .with_image("/images/collagen-night-cream.jpg")
            .with_category("Skincare")
            .with_room("Skincare")
            .with_styles(["Anti-Aging", "Luxurious"])
            .with_description(
                "Peptide and retinol night cream that firms while you sleep.",
            )
            .with_rating(4.8, 234)
            .bestseller(),
        Product::new("8", "Detoxifying Charcoal Face Mask", rupees(1_949))
            .with_image("/images/charcoal-mask.jpg")
            .with_category("Skincare")
            .with_room("Skincare")
            .with_styles(["Purifying", "Deep-Clean"])
            .with_description(
                "Activated charcoal and clay mask that pulls impurities and \
                 tightens pores without stripping.",
            )
            .with_rating(4.6, 112),
        Product::new("9", "Coconut Milk Bath Soak", rupees(2_449))
            .with_image("/images/coconut-bath-soak.jpg")
            .with_category("Bath")
            .with_room("Bath & Body")
            .with_styles(["Soothing", "Creamy"])
            .with_description(
                "Coconut milk and essential oils for a creamy soak that \
                 leaves skin soft and the mind quiet.",
            )
            .with_rating(4.7, 143)
            .new_arrival(),
        Product::new("10", "Ashwagandha Calm Roll-On", rupees(2_899))
            .with_image("/images/ashwagandha-roll-on.jpg")
            .with_category("Wellness")
            .with_room("Wellness")
            .with_styles(["Therapeutic", "Relief"])
            .with_description(
                "Ashwagandha-infused roll-on for knotted shoulders and \
                 racing thoughts. Targeted relief wherever the day landed.",
            )
            .with_rating(4.9, 89),
    ]
}

/// The fixed curated collections over the demo catalog.
pub fn demo_collections() -> Vec<Collection> {
    vec![
        Collection::new(
            "Self-Care Essentials",
            "Curated staples to elevate the daily routine",
            vec!["1".into(), "2".into(), "3".into(), "4".into()],
            "/images/collection-self-care.jpg",
        ),
        Collection::new(
            "New Arrivals",
            "Fresh finds for radiant skin and calm evenings",
            vec!["2".into(), "6".into(), "9".into()],
            "/images/collection-new-arrivals.jpg",
        ),
        Collection::new(
            "Bestsellers",
            "The products our shoppers come back for",
            vec!["1".into(), "4".into(), "7".into()],
            "/images/collection-bestsellers.jpg",
        ),
    ]
}
