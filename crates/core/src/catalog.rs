//! The compiled-in product catalog.
//!
//! The catalog is a fixed list of products built once on first access and
//! shared for the lifetime of the process. There is no mutation and no
//! persistence; price and availability changes ship as a new release.

use std::sync::LazyLock;

use crate::types::{Price, Product};

static CATALOG: LazyLock<Vec<Product>> = LazyLock::new(build_catalog);

/// All catalog products, in display order.
#[must_use]
pub fn products() -> &'static [Product] {
    &CATALOG
}

/// Look up a product by its stable identifier.
#[must_use]
pub fn find(id: &str) -> Option<&'static Product> {
    CATALOG.iter().find(|p| p.id == id)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

fn build_catalog() -> Vec<Product> {
    vec![
        Product {
            id: "ftac-evolution".to_string(),
            name: "F-TAC\u{2122} Evolution".to_string(),
            category: "Premium".to_string(),
            short_description: "The modern single solution rifle scabbard. Combines the best \
                                elements from F-TR, F-TAC, and F-TAC Evolve predecessors."
                .to_string(),
            features: strings(&[
                "10mm thermal insulation & padding",
                "Built-in crown protector",
                "3 adjustable YKK clips with 25mm webbing",
                "Detachable shoulder sling",
                "Chest strap for hands-free carry",
                "2 side pockets for essentials",
                "Molly webbing & velcro patches",
            ]),
            price: Some(Price::from_cents(29800)),
            colors: strings(&["Olive", "Black"]),
            delivery: "6-8 weeks".to_string(),
            image: "/images/products/ftac-evolution.png".to_string(),
        },
        Product {
            id: "legionnaire-drag-bag".to_string(),
            name: "Legionnaire Drag Bag".to_string(),
            category: "Professional".to_string(),
            short_description: "Premium drag bag setting the benchmark in the shooting \
                                industry. Designed and tested by shooters."
                .to_string(),
            features: strings(&[
                "Polyester/acrylic woven blend",
                "Fluorocarbon treated - fully waterproof",
                "Weighs only 2.3kg when empty",
                "145cm length - fits rifles up to 56 inches",
                "Boxed stitched for maximum strength",
                "YKK zippers with custom branded tabs",
                "2 padded shoulder straps",
                "2 outside pockets",
            ]),
            price: None,
            colors: strings(&["Olive", "Black"]),
            delivery: "6-8 weeks".to_string(),
            image: "/images/products/drag-bag.png".to_string(),
        },
        Product {
            id: "tuls-mat".to_string(),
            name: "TULS Mat".to_string(),
            category: "Lightweight".to_string(),
            short_description: "Lightweight shooting solution. Deploys in under 10 seconds, \
                                stows in less than 30 seconds."
                .to_string(),
            features: strings(&[
                "Lightweight design",
                "Built-in FlexLoad load bar for bipod",
                "Minimal padding for torso protection",
                "Quick deploy/stow system",
                "Fits in truck seat storage",
                "Multi-purpose use",
                "Designed for field use",
            ]),
            price: Some(Price::from_cents(26800)),
            colors: Vec::new(),
            delivery: "6-8 weeks".to_string(),
            image: "/images/products/tuls-mat.png".to_string(),
        },
        Product {
            id: "legionnaire-mab".to_string(),
            name: "Legionnaire MAB (50 Round)".to_string(),
            category: "Modular".to_string(),
            short_description: "One-of-a-kind modular ammo storage solution with removable \
                                ammo strips."
                .to_string(),
            features: strings(&[
                "Removable ammo strips",
                "Mil-Spec woven elastic construction",
                "Stores .223 to .300 Win Mag",
                "Capacity: 50 rounds",
                "Thermal protection layers",
                "No ammo contact - no rattles",
                "Fits Legionnaire Drag Bag",
            ]),
            price: None,
            colors: Vec::new(),
            delivery: "6-8 weeks".to_string(),
            image: "/images/products/mab-50.png".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_four_products() {
        assert_eq!(products().len(), 4);
    }

    #[test]
    fn test_product_ids_are_unique() {
        let mut ids: Vec<&str> = products().iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), products().len());
    }

    #[test]
    fn test_find_known_product() {
        let product = find("tuls-mat").expect("tuls-mat exists");
        assert_eq!(product.name, "TULS Mat");
        assert!(product.colors.is_empty());
    }

    #[test]
    fn test_find_unknown_product() {
        assert!(find("no-such-product").is_none());
    }

    #[test]
    fn test_price_on_request_products() {
        let poa: Vec<&str> = products()
            .iter()
            .filter(|p| p.is_price_on_request())
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(poa, ["legionnaire-drag-bag", "legionnaire-mab"]);
    }
}
