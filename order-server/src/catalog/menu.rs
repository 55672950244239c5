//! Standard menu data

use shared::models::{ExtraOption, MenuItem, SizeOption, SizeTier};

/// Size labels with their tier, smallest first
const SIZE_LABELS: [(&str, SizeTier); 4] = [
    ("klein, 24 cm", SizeTier::Small),
    ("groß, 32 cm", SizeTier::Medium),
    ("Family, 45x32 cm", SizeTier::Large),
    ("Party, 60x40 cm", SizeTier::ExtraLarge),
];

/// Every extra costs the same base price
const EXTRA_PRICE: i64 = 50;

const EXTRAS: [&str; 38] = [
    "Basilikum",
    "Knoblauch",
    "Oregano",
    "Ananas",
    "Artischockenherzen",
    "Bacon",
    "Barbecuesauce",
    "Blattspinat",
    "Brokkoli",
    "Champignons",
    "Eier",
    "Fetakäse",
    "Frutti di Mare",
    "Gorgonzola",
    "Gouda",
    "Hühnerbrust",
    "Kapern",
    "Mais",
    "Mozzarella",
    "Olivenscheiben",
    "Paprika",
    "Peperoniringe",
    "Peperoniwurst",
    "Remoulade",
    "Salami",
    "Salsa",
    "Sardellen",
    "Sauce Bolognese",
    "Shrimps",
    "Spargel",
    "Tabasco",
    "Taco Beef",
    "Thunfisch",
    "Zwiebelringe",
    "frische Champignons",
    "frische Tomatenscheiben",
    "italienischer Vorderschinken",
    "mexikanische Jalapenos",
];

/// (name, description, prices per size in `SIZE_LABELS` order)
const PIZZAS: [(&str, &str, [i64; 4]); 16] = [
    ("Pizza Margherita", "mit Pizzasauce, Mozzarella und Basilikum", [650, 800, 1420, 1690]),
    ("Pizza New York", "mit Hühnerbrust und Oliven", [700, 860, 1530, 1870]),
    ("Pizza Popeye", "mit Spinat und Feta", [700, 860, 1530, 1870]),
    ("Pizza Hawaii", "mit Schinken und Ananas", [700, 860, 1530, 1870]),
    ("Pizza Mary", "mit Schinken, Salami und Champignons", [750, 920, 1640, 2050]),
    ("Pizza Samoa", "mit Thunfisch, Zwiebelringen und Ananas", [750, 920, 1640, 2050]),
    ("Pizza Texas", "mit Taco Beef, Jalapenos und Bohnen", [750, 920, 1640, 2050]),
    (
        "Pizza Jazz",
        "mit Schinken, Spargel, Tomaten und Barbecuesauce",
        [800, 980, 1750, 2230],
    ),
    (
        "Pizza Veggie",
        "mit Broccoli, Tomaten, Paprika und Artischocken",
        [800, 980, 1750, 2230],
    ),
    (
        "Pizza Capricciosa",
        "mit Schinken, Salami, Oliven, Paprika und Zwiebeln",
        [850, 1040, 1860, 2410],
    ),
    (
        "Pizza Mexicana",
        "mit Peperoniwurst, Speck, Taco Beef, Jalapenos und Zwiebeln",
        [850, 1040, 1860, 2410],
    ),
    (
        "Pizza Outback",
        "mit Taco Beef, Schinken, Zwiebeln, Jalapenos und Ei",
        [850, 1040, 1860, 2410],
    ),
    (
        "Pizza Beverly Hills",
        "mit Hühnerbrust, Taco Beef, Broccoli, Ananas und Barbecuesauce",
        [850, 1040, 1860, 2410],
    ),
    (
        "Pizza Speciale",
        "mit Schinken, Salami, Champignons, Paprika und Ei",
        [850, 1040, 1860, 2410],
    ),
    (
        "Pizza Full House",
        "mit Schinken, Peperoniwurst, Speck, Paprika, Peperoni und Ei",
        [900, 1100, 1970, 2590],
    ),
    ("Pizza Basic/Wunschpizza", "mit Pizzasauce und Käse", [600, 740, 1310, 1510]),
];

/// Build the standard menu, applying `markup_percent` to size prices
pub(crate) fn standard_menu(markup_percent: u32) -> Vec<MenuItem> {
    let extras: Vec<ExtraOption> = EXTRAS
        .iter()
        .map(|name| ExtraOption::new(*name, EXTRA_PRICE))
        .collect();

    PIZZAS
        .iter()
        .map(|(name, description, prices)| MenuItem {
            name: (*name).to_string(),
            description: (*description).to_string(),
            sizes: SIZE_LABELS
                .iter()
                .zip(prices)
                .map(|((label, tier), price)| {
                    SizeOption::new(*label, apply_markup(*price, markup_percent), *tier)
                })
                .collect(),
            extras: extras.clone(),
        })
        .collect()
}

/// Percentage markup, rounded half-up to whole cents
pub(crate) fn apply_markup(price: i64, percent: u32) -> i64 {
    if percent == 0 {
        return price;
    }
    (price * (100 + i64::from(percent)) + 50) / 100
}
