//! Built-in storefront data: the catalog, the order history and the promo
//! carousel.

use chrono::NaiveDate;

use crate::catalog::{Category, Product, Review};
use crate::ids::{OrderId, ProductId, PromotionId, ReviewId};
use crate::money::Money;
use crate::orders::{Order, OrderLineItem, OrderStatus};
use crate::promotion::Promotion;

const PRODUCT_IMAGE_PARAMS: &str = "?auto=format&fit=crop&q=80&w=1200";
const PROMO_IMAGE_PARAMS: &str = "?auto=format&fit=crop&q=80&w=1600";

fn unsplash(photo: &str, params: &str) -> String {
    format!("https://images.unsplash.com/photo-{photo}{params}")
}

// Seed dates are literals and always valid.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn review(id: &str, user: &str, rating: u8, comment: &str, on: NaiveDate) -> Review {
    Review {
        id: ReviewId::new(id),
        user: user.to_string(),
        rating,
        comment: comment.to_string(),
        date: on,
    }
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    brand: &str,
    category: Category,
    dollars: i64,
    description: &str,
    photo: &str,
    colors: &[&str],
    sizes: &[&str],
    rating: f64,
    reviews: Vec<Review>,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        brand: brand.to_string(),
        category,
        price: Money::usd(dollars),
        description: description.to_string(),
        image: unsplash(photo, PRODUCT_IMAGE_PARAMS),
        colors: strings(colors),
        sizes: strings(sizes),
        rating,
        reviews,
    }
}

/// The eight-product catalog, in display order.
pub fn catalog() -> Vec<Product> {
    vec![
        product(
            "1",
            "Midnight Silk Blazer",
            "Noir Atelier",
            Category::Men,
            450,
            "A tailored blazer made from premium Italian silk. Perfect for gala nights and formal dinners.",
            "1507679799987-c73779587ccf",
            &["Midnight Black", "Deep Navy"],
            &["S", "M", "L", "XL"],
            4.9,
            vec![
                review(
                    "r1",
                    "James W.",
                    5,
                    "Absolutely stunning fit. The silk quality is top-tier.",
                    date(2024, 3, 15),
                ),
                review(
                    "r2",
                    "Michael S.",
                    4,
                    "Great blazer, though the sleeves were a tad long.",
                    date(2024, 2, 10),
                ),
            ],
        ),
        product(
            "2",
            "Ethereal Flow Maxi Dress",
            "Lumina",
            Category::Women,
            320,
            "A breathable linen-blend maxi dress with hand-embroidered details.",
            "1496747611176-843222e1e57c",
            &["Cream", "Sage Green", "Dusty Rose"],
            &["XS", "S", "M", "L"],
            4.8,
            vec![review(
                "r3",
                "Elena G.",
                5,
                "So comfortable and elegant. I wear it everywhere!",
                date(2024, 3, 1),
            )],
        ),
        product(
            "3",
            "Urban Vanguard Chelsea Boots",
            "StepHard",
            Category::Men,
            210,
            "Crafted from hand-painted calfskin, these boots offer timeless style and rugged durability.",
            "1520639889313-7272175b1c39",
            &["Tan", "Chocolate Brown"],
            &["8", "9", "10", "11", "12"],
            4.7,
            Vec::new(),
        ),
        product(
            "4",
            "Nebula Gold Chronograph",
            "Zenith",
            Category::Accessories,
            1200,
            "A mechanical masterpiece featuring 18k gold accents and an alligator leather strap.",
            "1524592094714-0f0654e20314",
            &["Gold/Black", "Silver/Brown"],
            &["One Size"],
            5.0,
            vec![review(
                "r4",
                "Robert D.",
                5,
                "A true investment piece. The gold craftsmanship is impeccable.",
                date(2024, 1, 20),
            )],
        ),
        product(
            "5",
            "Oasis Cashmere Scarf",
            "Lumina",
            Category::Accessories,
            180,
            "Sustainably sourced cashmere from the Mongolian highlands. Ultra-soft and incredibly warm.",
            "1601039605349-49344216893b",
            &["Oatmeal", "Slate", "Burgundy"],
            &["One Size"],
            4.6,
            Vec::new(),
        ),
        product(
            "6",
            "Aurelia High-Waist Trousers",
            "Noir Atelier",
            Category::Women,
            280,
            "Sharp pleats and a structured waist define these versatile wool-blend trousers.",
            "1594633312681-425c7b97ccd1",
            &["Ivory", "Midnight Black"],
            &["0", "2", "4", "6", "8", "10"],
            4.5,
            Vec::new(),
        ),
        product(
            "7",
            "Horizon Tech Trench",
            "Aegis",
            Category::Men,
            550,
            "Water-resistant, breathable, and equipped with hidden utility pockets for the modern commuter.",
            "1591047139829-d91aecb6caea",
            &["Stone", "Carbon"],
            &["M", "L", "XL"],
            4.9,
            Vec::new(),
        ),
        product(
            "8",
            "Cirrus Silk Blouse",
            "Lumina",
            Category::Women,
            195,
            "Lightweight silk chiffon blouse with a subtle sheen and relaxed silhouette.",
            "1543076447-215ad9ba6923",
            &["Azure", "Pearl White"],
            &["XS", "S", "M", "L"],
            4.8,
            Vec::new(),
        ),
    ]
}

/// The customer's past orders, most recent last.
pub fn orders() -> Vec<Order> {
    let image_of = |photo: &str| unsplash(photo, PRODUCT_IMAGE_PARAMS);
    vec![
        Order {
            id: OrderId::new("#LX-8829"),
            date: date(2024, 2, 15),
            status: OrderStatus::Delivered,
            total: Money::usd(660),
            tracking_number: "L-LUXE-9921-X9".to_string(),
            items: vec![
                OrderLineItem {
                    name: "Midnight Silk Blazer".to_string(),
                    image: image_of("1507679799987-c73779587ccf"),
                    quantity: 1,
                    price: Money::usd(450),
                },
                OrderLineItem {
                    name: "Urban Vanguard Chelsea Boots".to_string(),
                    image: image_of("1520639889313-7272175b1c39"),
                    quantity: 1,
                    price: Money::usd(210),
                },
            ],
        },
        Order {
            id: OrderId::new("#LX-7712"),
            date: date(2024, 3, 10),
            status: OrderStatus::Shipped,
            total: Money::usd(1200),
            tracking_number: "L-LUXE-4402-B1".to_string(),
            items: vec![OrderLineItem {
                name: "Nebula Gold Chronograph".to_string(),
                image: image_of("1524592094714-0f0654e20314"),
                quantity: 1,
                price: Money::usd(1200),
            }],
        },
    ]
}

/// Hero carousel slides.
pub fn promotions() -> Vec<Promotion> {
    let promo = |id: &str,
                 title: &str,
                 subtitle: &str,
                 description: &str,
                 cta: &str,
                 photo: &str,
                 bg: &str,
                 text: &str| Promotion {
        id: PromotionId::new(id),
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        description: description.to_string(),
        cta_text: cta.to_string(),
        image: unsplash(photo, PROMO_IMAGE_PARAMS),
        background_color: bg.to_string(),
        text_color: text.to_string(),
    };

    vec![
        promo(
            "p1",
            "The Artisanal Series",
            "Limited Edition",
            "Discover our exclusive collaboration with local craftsmen. Rare pieces, infinite style.",
            "Explore Collection",
            "1441984904996-e0b6ba687e12",
            "bg-[#f8f5f0]",
            "text-gray-900",
        ),
        promo(
            "p2",
            "Midnight Reverie",
            "Seasonal Sale",
            "Up to 40% off our curated evening wear. Elegance redefined for the nocturnal soul.",
            "Shop Evening Wear",
            "1539109132314-3477524c859c",
            "bg-[#121212]",
            "text-white",
        ),
        promo(
            "p3",
            "Modern Minimalist",
            "New Arrivals",
            "Clean lines, sustainable fabrics, and timeless silhouettes for the contemporary wardrobe.",
            "View Arrivals",
            "1485230895905-ec40ba36b9bc",
            "bg-[#efefef]",
            "text-gray-900",
        ),
    ]
}
