// src/seed.rs
use crate::models::Product;

/// Startowy katalog sklepu, używany gdy magazyn produktów jest pusty.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new(1, "Kayak", "A boat for one person", 27500, "Watersports"),
        Product::new(2, "Lifejacket", "Protective and fashionable", 4895, "Watersports"),
        Product::new(3, "Soccer Ball", "FIFA-approved size and weight", 1950, "Soccer"),
        Product::new(4, "Corner Flags", "Give your playing field a professional touch", 3450, "Soccer"),
        Product::new(5, "Stadium", "Flat-packed 35,000-seat stadium", 7950000, "Soccer"),
        Product::new(6, "Thinking Cap", "Improve brain efficiency by 75%", 1600, "Chess"),
        Product::new(7, "Unsteady Chair", "Secretly give your opponent a disadvantage", 2995, "Chess"),
        Product::new(8, "Human Chess Board", "A fun game for the family", 7500, "Chess"),
        Product::new(9, "Bling-Bling King", "Gold-plated, diamond-studded King", 120000, "Chess"),
    ]
}
