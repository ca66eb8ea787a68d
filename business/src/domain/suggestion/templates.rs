use crate::domain::gift::model::Gift;
use crate::domain::shared::value_objects::GiftId;

use super::budget::BudgetTier;
use super::budget::BudgetTier::{High, Low, Medium, VeryLow};

/// Interests with dense template coverage. They get their own backfill pass
/// and a relevance boost when ranking.
pub const PRIORITY_INTERESTS: [&str; 3] = ["Technology", "Books", "Fashion"];

/// A built-in gift blueprint used when the catalogue is too sparse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GiftTemplate {
    pub interest: &'static str,
    pub tier: BudgetTier,
    pub name: &'static str,
    pub price: f64,
    pub description: &'static str,
    pub image: &'static str,
}

impl GiftTemplate {
    /// Materializes the template for one request. The price never exceeds
    /// the budget.
    pub fn instantiate(&self, budget: f64) -> Gift {
        Gift::from_repository(
            GiftId::derived(&format!("template:{}:{}", self.tier, self.name)),
            self.name.to_string(),
            self.price.min(budget),
            self.description.to_string(),
            Some(self.image.to_string()),
            vec![],
            vec![self.interest.to_string()],
            vec![],
            None,
        )
    }
}

const fn template(
    interest: &'static str,
    tier: BudgetTier,
    name: &'static str,
    price: f64,
    description: &'static str,
    image: &'static str,
) -> GiftTemplate {
    GiftTemplate {
        interest,
        tier,
        name,
        price,
        description,
        image,
    }
}

#[rustfmt::skip]
static TEMPLATES: &[GiftTemplate] = &[
    // Technology
    template("Technology", VeryLow, "USB Cable Set", 99.0, "A handy technology essential: braided cables for every device.", "templates/usb-cable-set.jpg"),
    template("Technology", VeryLow, "Phone Stand", 79.0, "Adjustable desk stand for phones, a small technology upgrade.", "templates/phone-stand.jpg"),
    template("Technology", Low, "Wireless Mouse", 399.0, "Quiet wireless mouse for everyday technology use.", "templates/wireless-mouse.jpg"),
    template("Technology", Low, "Bluetooth Earbuds", 499.0, "Compact earbuds for music and calls on the go.", "templates/bluetooth-earbuds.jpg"),
    template("Technology", Medium, "Smart Watch", 3999.0, "Fitness tracking and notifications on the wrist.", "templates/smart-watch.jpg"),
    template("Technology", Medium, "Portable Bluetooth Speaker", 2499.0, "Water-resistant speaker with all-day battery.", "templates/portable-speaker.jpg"),
    template("Technology", High, "Noise Cancelling Headphones", 14999.0, "Premium over-ear headphones for the technology lover.", "templates/anc-headphones.jpg"),
    template("Technology", High, "Tablet", 24999.0, "A versatile tablet for work, reading and streaming.", "templates/tablet.jpg"),
    // Books
    template("Books", VeryLow, "Bookmark Set", 49.0, "Illustrated bookmarks for every reader of books.", "templates/bookmark-set.jpg"),
    template("Books", VeryLow, "Pocket Poetry Collection", 99.0, "A slim anthology of classic poems.", "templates/pocket-poetry.jpg"),
    template("Books", Low, "Bestseller Paperback Bundle", 449.0, "Three of this season's most talked-about books.", "templates/paperback-bundle.jpg"),
    template("Books", Low, "Clip-On Reading Light", 299.0, "Rechargeable light for late-night reading.", "templates/reading-light.jpg"),
    template("Books", Medium, "E-Reader", 4999.0, "Glare-free screen that holds thousands of books.", "templates/e-reader.jpg"),
    template("Books", Medium, "Classic Hardcover Box Set", 2999.0, "Clothbound editions of timeless novels.", "templates/hardcover-box-set.jpg"),
    template("Books", High, "Signed First Edition", 9999.0, "A collectible signed first edition for lovers of books.", "templates/signed-first-edition.jpg"),
    template("Books", High, "Solid Oak Bookshelf", 15999.0, "Handcrafted shelving for a growing library.", "templates/oak-bookshelf.jpg"),
    // Fashion
    template("Fashion", VeryLow, "Patterned Socks", 99.0, "Playful socks for a fashion-forward wardrobe.", "templates/patterned-socks.jpg"),
    template("Fashion", VeryLow, "Hair Accessories Kit", 89.0, "Clips, ties and scrunchies in seasonal colours.", "templates/hair-accessories.jpg"),
    template("Fashion", Low, "Silk Scarf", 499.0, "A printed silk scarf, a timeless fashion piece.", "templates/silk-scarf.jpg"),
    template("Fashion", Low, "Leather Wallet", 449.0, "Slim leather wallet with card slots.", "templates/leather-wallet.jpg"),
    template("Fashion", Medium, "Designer Sunglasses", 3499.0, "Polarized sunglasses with a classic frame.", "templates/designer-sunglasses.jpg"),
    template("Fashion", Medium, "Leather Handbag", 4499.0, "Structured everyday handbag in full-grain leather.", "templates/leather-handbag.jpg"),
    template("Fashion", High, "Luxury Watch", 29999.0, "An automatic watch to top off any fashion collection.", "templates/luxury-watch.jpg"),
    template("Fashion", High, "Cashmere Coat", 19999.0, "A tailored cashmere coat for cold seasons.", "templates/cashmere-coat.jpg"),
    // Sports
    template("Sports", VeryLow, "Insulated Water Bottle", 99.0, "Keeps drinks cold through every workout.", "templates/water-bottle.jpg"),
    template("Sports", Low, "Yoga Mat", 499.0, "Non-slip mat for home and studio sessions.", "templates/yoga-mat.jpg"),
    template("Sports", Medium, "Running Shoes", 4999.0, "Cushioned trainers for long-distance runs.", "templates/running-shoes.jpg"),
    template("Sports", High, "Home Gym Set", 29999.0, "Adjustable weights and bench for training at home.", "templates/home-gym.jpg"),
    // Music
    template("Music", VeryLow, "Guitar Picks Set", 99.0, "Assorted picks in different gauges.", "templates/guitar-picks.jpg"),
    template("Music", Low, "Vinyl Record", 499.0, "A classic album pressed on heavyweight vinyl.", "templates/vinyl-record.jpg"),
    template("Music", Medium, "Ukulele", 2999.0, "Beginner-friendly concert ukulele with case.", "templates/ukulele.jpg"),
    template("Music", High, "Studio Monitor Speakers", 14999.0, "Accurate monitors for home recording.", "templates/studio-monitors.jpg"),
    // Cooking
    template("Cooking", VeryLow, "Spice Sampler", 99.0, "Six small jars of spices from around the world.", "templates/spice-sampler.jpg"),
    template("Cooking", Low, "Chef Knife", 499.0, "Forged stainless steel knife for daily prep.", "templates/chef-knife.jpg"),
    template("Cooking", Medium, "Cast Iron Skillet", 2499.0, "Pre-seasoned skillet that lasts a lifetime.", "templates/cast-iron-skillet.jpg"),
    template("Cooking", High, "Stand Mixer", 24999.0, "Powerful mixer for baking enthusiasts.", "templates/stand-mixer.jpg"),
    // Art
    template("Art", VeryLow, "Sketchbook", 99.0, "Acid-free paper for sketches and studies.", "templates/sketchbook.jpg"),
    template("Art", Low, "Watercolor Paint Set", 449.0, "Twenty-four pans with travel brushes.", "templates/watercolor-set.jpg"),
    template("Art", Medium, "Tabletop Easel Kit", 3499.0, "Beech easel with canvases and acrylics.", "templates/easel-kit.jpg"),
    // Travel
    template("Travel", VeryLow, "Luggage Tags", 99.0, "Bright tags that make bags easy to spot.", "templates/luggage-tags.jpg"),
    template("Travel", Low, "Packing Cubes", 499.0, "Compression cubes for tidy suitcases.", "templates/packing-cubes.jpg"),
    template("Travel", Medium, "Carry-On Suitcase", 4999.0, "Lightweight hard-shell cabin bag.", "templates/carry-on.jpg"),
    template("Travel", High, "Weekend Getaway Voucher", 19999.0, "Two nights away at a boutique hotel.", "templates/getaway-voucher.jpg"),
];

/// Templates for `interest` within `tier`, in table order.
pub fn templates_for(
    interest: &str,
    tier: BudgetTier,
) -> impl Iterator<Item = &'static GiftTemplate> + use<> {
    let wanted = interest.trim().to_string();
    TEMPLATES
        .iter()
        .filter(move |t| t.tier == tier && t.interest.eq_ignore_ascii_case(&wanted))
}

pub fn is_priority_interest(interest: &str) -> bool {
    let interest = interest.trim();
    PRIORITY_INTERESTS
        .iter()
        .any(|p| p.eq_ignore_ascii_case(interest))
}

/// Last-resort suggestion worth exactly the budget.
pub fn gift_card(budget: f64) -> Gift {
    Gift::from_repository(
        GiftId::derived(&format!("gift-card:{}", budget)),
        "Value Gift Card".to_string(),
        budget,
        format!(
            "A gift card worth {:.2} so they can choose exactly what they love.",
            budget
        ),
        Some("templates/gift-card.jpg".to_string()),
        vec![],
        vec![],
        vec![],
        None,
    )
}
