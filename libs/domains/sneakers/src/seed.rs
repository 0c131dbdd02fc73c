//! Sample collection loaded into a fresh catalog.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::models::{Brand, Category, Condition, Sneaker, SneakerInput};

struct SampleSneaker {
    input: SneakerInput,
    days_ago: i64,
}

/// The eight sample sneakers, ids 1 to 8, dated relative to `now`.
pub fn sample_sneakers(now: DateTime<Utc>) -> Vec<Sneaker> {
    samples()
        .into_iter()
        .zip(1..)
        .map(|(sample, id)| {
            sample
                .input
                .into_sneaker(id, now - Duration::days(sample.days_ago))
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn sample(
    brand: Brand,
    model: &str,
    colorway: &str,
    size: f64,
    price: f64,
    condition: Condition,
    category: Category,
    release: (i32, u32, u32),
    image_url: Option<&str>,
    description: &str,
    is_limited: bool,
    stock: u32,
    days_ago: i64,
) -> SampleSneaker {
    let (year, month, day) = release;
    SampleSneaker {
        input: SneakerInput {
            brand,
            model: model.to_string(),
            colorway: colorway.to_string(),
            size,
            price,
            condition,
            category,
            release_date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
            image_url: image_url.map(str::to_string),
            description: Some(description.to_string()),
            is_limited,
            stock_quantity: Some(stock),
        },
        days_ago,
    }
}

fn samples() -> Vec<SampleSneaker> {
    vec![
        sample(
            Brand::Jordan,
            "Air Jordan 1 Retro High",
            "Chicago",
            9.0,
            180.0,
            Condition::DeadStock,
            Category::Basketball,
            (2015, 5, 30),
            Some("https://images.stockx.com/images/Air-Jordan-1-Retro-High-Chicago-2015.jpg"),
            "Iconic Air Jordan 1 colorway, inspired by the Chicago Bulls.",
            true,
            2,
            30,
        ),
        sample(
            Brand::Nike,
            "Air Max 1",
            "Patta Waves",
            8.5,
            350.0,
            Condition::Excellent,
            Category::Lifestyle,
            (2021, 9, 18),
            Some(
                "https://www.sneakerstyle.fr/wp-content/uploads/2021/10/patta-x-nike-air-max-1-noise-aqua-DH1348-004.jpg",
            ),
            "Exclusive collaboration between Nike and Patta with a wave-inspired design.",
            true,
            1,
            25,
        ),
        sample(
            Brand::Adidas,
            "Yeezy Boost 350 V2",
            "Zebra",
            10.0,
            80.0,
            Condition::VeryGood,
            Category::Lifestyle,
            (2017, 2, 25),
            Some(
                "https://www.sneakers.fr/wp-content/uploads/2017/01/adidas-yeezy-boost-350V2-Zebra-8-380x380.jpeg",
            ),
            "One of the most popular Yeezy 350 V2 colorways.",
            true,
            3,
            20,
        ),
        sample(
            Brand::Nike,
            "Dunk Low",
            "Panda",
            9.5,
            120.0,
            Condition::NearMint,
            Category::Lifestyle,
            (2021, 3, 10),
            Some("https://images.stockx.com/images/Nike-Dunk-Low-White-Black.jpg"),
            "The 'Panda' colorway became a staple thanks to its classic black and white look.",
            false,
            5,
            15,
        ),
        sample(
            Brand::Jordan,
            "Air Jordan 4 Retro",
            "Black Cat",
            8.0,
            220.0,
            Condition::DeadStock,
            Category::Basketball,
            (2020, 1, 18),
            Some("https://images.stockx.com/images/Air-Jordan-4-Retro-Black-Cat-2020.jpg"),
            "All-black take on the legendary Air Jordan 4.",
            true,
            1,
            10,
        ),
        sample(
            Brand::NewBalance,
            "990v3",
            "Grey",
            11.0,
            185.0,
            Condition::VeryGood,
            Category::Running,
            (2012, 8, 15),
            None,
            "Premium running sneaker with exceptional comfort.",
            false,
            2,
            5,
        ),
        sample(
            Brand::Vans,
            "Old Skool",
            "Black/White",
            7.5,
            65.0,
            Condition::Good,
            Category::Skateboarding,
            (1977, 3, 19),
            None,
            "Vans' iconic skate shoe, a timeless classic.",
            false,
            10,
            3,
        ),
        sample(
            Brand::Nike,
            "Air Force 1 Low",
            "Triple White",
            9.0,
            90.0,
            Condition::Excellent,
            Category::Lifestyle,
            (1982, 12, 1),
            None,
            "Nike's best-selling sneaker, a must-have in all white.",
            false,
            8,
            1,
        ),
    ]
}
