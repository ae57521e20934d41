//! Static product lineup

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Phone,
    Wearable,
    Audio,
    Home,
}

#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    /// Product type as a shopper would say it ("Smartwatch", "AR glasses").
    pub kind: &'static str,
    /// Whole US dollars.
    pub price: u32,
    pub description: &'static str,
    pub specs: &'static [&'static str],
    pub image: &'static str,
    pub category: Category,
}

static PRODUCTS: [Product; 6] = [
    Product {
        id: "1",
        name: "Xenon Ultra 5G",
        kind: "Flagship smartphone",
        price: 1299,
        description: "The absolute pinnacle of smartphone engineering. Featuring a holographic display and quantum processor.",
        specs: &["Holographic OLED", "Quantum Snap 9 Gen 5", "200MP Camera", "1TB Storage"],
        image: "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=800&h=600&fit=crop",
        category: Category::Phone,
    },
    Product {
        id: "2",
        name: "Sonic Flow Pro",
        kind: "Premium headphones",
        price: 349,
        description: "Experience audio like never before with neural-linked noise cancellation.",
        specs: &["Neural ANC", "80h Battery", "Graphene Drivers", "Spatial Audio"],
        image: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=800&h=600&fit=crop",
        category: Category::Audio,
    },
    Product {
        id: "3",
        name: "Visionary Glass",
        kind: "AR glasses",
        price: 2499,
        description: "Augmented reality glasses that overlay the digital world seamlessly onto the physical.",
        specs: &["MicroLED", "Eye Tracking", "Gesture Control", "All-Day Comfort"],
        image: "https://images.unsplash.com/photo-1572569511254-d8f925fe2cbb?w=800&h=600&fit=crop",
        category: Category::Wearable,
    },
    Product {
        id: "4",
        name: "Nebula Watch X",
        kind: "Smartwatch",
        price: 499,
        description: "Your health, your universe. Tracks biometrics with clinical precision.",
        specs: &["Bio-Sensor Array", "Sapphire Glass", "7-Day Battery", "LTE"],
        image: "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=800&h=600&fit=crop",
        category: Category::Wearable,
    },
    Product {
        id: "5",
        name: "Core Hub Max",
        kind: "Smart home hub",
        price: 299,
        description: "The central brain of your smart home. Recognizes gestures and voice commands instantly.",
        specs: &["Matter Support", "10\" Display", "Face Match", "Thread Border Router"],
        image: "https://images.unsplash.com/photo-1558089687-f282ffcbc126?w=800&h=600&fit=crop",
        category: Category::Home,
    },
    Product {
        id: "6",
        name: "Titan Tab S9",
        kind: "Professional tablet",
        price: 1199,
        description: "Power of a workstation, portability of a tablet. For the creators.",
        specs: &["14.6\" AMOLED", "S-Pen Included", "16GB RAM", "Water Resistant"],
        image: "https://images.unsplash.com/photo-1544244015-0df4b3ffc6b0?w=800&h=600&fit=crop",
        category: Category::Phone,
    },
];

pub fn all() -> &'static [Product] {
    &PRODUCTS
}

pub fn find(id: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

pub fn by_category(category: Category) -> Vec<&'static Product> {
    PRODUCTS.iter().filter(|p| p.category == category).collect()
}
