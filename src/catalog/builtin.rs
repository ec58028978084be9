use crate::models::{PriceRange, ProductResult, SummaryReport};

fn specs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn products() -> Vec<ProductResult> {
    vec![
        ProductResult {
            id: "1".into(),
            source: "Amazon".into(),
            name: "Samsung Galaxy A54 5G (Awesome Blue, 128GB)".into(),
            price: "₹26,999".into(),
            original_price: Some("₹32,999".into()),
            specs: specs(&["6.4″ Super AMOLED", "50MP Triple Camera", "5000mAh Battery", "8GB RAM"]),
            score: 9.2,
            rating: Some(4.3),
            reviews: Some(12543),
            image: None,
            url: "#".into(),
            is_top_pick: true,
        },
        ProductResult {
            id: "2".into(),
            source: "Flipkart".into(),
            name: "OnePlus Nord CE 3 Lite (Pastel Lime, 128GB)".into(),
            price: "₹19,999".into(),
            original_price: Some("₹23,999".into()),
            specs: specs(&["6.72″ LCD Display", "108MP Main Camera", "5000mAh Battery", "8GB RAM"]),
            score: 8.7,
            rating: Some(4.1),
            reviews: Some(8934),
            image: None,
            url: "#".into(),
            is_top_pick: false,
        },
        ProductResult {
            id: "3".into(),
            source: "Amazon".into(),
            name: "Xiaomi Redmi Note 12 Pro (Glacier Blue, 128GB)".into(),
            price: "₹23,999".into(),
            original_price: Some("₹27,999".into()),
            specs: specs(&["6.67″ AMOLED", "50MP Triple Camera", "4500mAh Battery", "6GB RAM"]),
            score: 8.5,
            rating: Some(4.2),
            reviews: Some(15678),
            image: None,
            url: "#".into(),
            is_top_pick: false,
        },
        ProductResult {
            id: "4".into(),
            source: "Croma".into(),
            name: "Vivo V27 (Noble Black, 128GB)".into(),
            price: "₹28,999".into(),
            original_price: Some("₹32,999".into()),
            specs: specs(&["6.78″ Curved AMOLED", "50MP Eye Autofocus", "4600mAh Battery", "8GB RAM"]),
            score: 8.3,
            rating: Some(4.0),
            reviews: Some(5432),
            image: None,
            url: "#".into(),
            is_top_pick: false,
        },
        ProductResult {
            id: "5".into(),
            source: "Reliance Digital".into(),
            name: "Realme 11 Pro (Sunrise Beige, 128GB)".into(),
            price: "₹25,999".into(),
            original_price: None,
            specs: specs(&["6.7″ Curved AMOLED", "100MP Portrait Camera", "5000mAh Battery", "8GB RAM"]),
            score: 8.1,
            rating: Some(3.9),
            reviews: Some(7865),
            image: None,
            url: "#".into(),
            is_top_pick: false,
        },
    ]
}

pub fn summary() -> SummaryReport {
    SummaryReport {
        recommendation: "Based on our analysis, the Samsung Galaxy A54 5G offers the best value for money \
under ₹30k with excellent camera quality, reliable performance, and strong brand support. The Super AMOLED \
display and 50MP camera make it ideal for photography enthusiasts."
            .into(),
        key_insights: specs(&[
            "Samsung and OnePlus dominate the mid-range segment with superior build quality",
            "AMOLED displays are becoming standard in this price range",
            "5000mAh+ batteries are now common across all brands",
            "Triple camera setups with 50MP+ main sensors are the new standard",
        ]),
        price_range: PriceRange {
            min: "₹19,999".into(),
            max: "₹28,999".into(),
            average: "₹24,999".into(),
        },
        top_brands: specs(&["Samsung", "OnePlus", "Xiaomi", "Vivo", "Realme"]),
        considerations: specs(&[
            "Consider buying during festival sales for additional discounts",
            "Check for 5G network availability in your area",
            "Samsung offers longer software support compared to Chinese brands",
        ]),
    }
}
