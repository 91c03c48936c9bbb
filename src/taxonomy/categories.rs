use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};


#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum CategoryDomain {
    Apparel,
    Ethnic,
    Innerwear,
    Footwear,
    Bags,
    Jewellery,
    Accessories,
    Beauty,
    Kidswear,
}

use CategoryDomain::*;

/// Canonical category names in display order. Admin dropdowns list them
/// exactly like this, and the canonical prefix tier scans them in this order.
pub const CATEGORY_TABLE: &[(&str, CategoryDomain)] = &[
    // Western wear
    ("Clothing", Apparel),
    ("Tops", Apparel),
    ("Tshirts", Apparel),
    ("Shirts", Apparel),
    ("Blouses", Apparel),
    ("Tunics", Apparel),
    ("Crop Tops", Apparel),
    ("Tank Tops", Apparel),
    ("Sweatshirts", Apparel),
    ("Hoodies", Apparel),
    ("Sweaters", Apparel),
    ("Cardigans", Apparel),
    ("Jackets", Apparel),
    ("Blazers", Apparel),
    ("Coats", Apparel),
    ("Waistcoats", Apparel),
    ("Shrugs", Apparel),
    ("Dresses", Apparel),
    ("Jumpsuits", Apparel),
    ("Playsuits", Apparel),
    ("Co-ord Sets", Apparel),
    ("Jeans", Apparel),
    ("Trousers", Apparel),
    ("Chinos", Apparel),
    ("Joggers", Apparel),
    ("Track Pants", Apparel),
    ("Cargo Pants", Apparel),
    ("Shorts", Apparel),
    ("Skirts", Apparel),
    ("Leggings", Apparel),
    ("Jeggings", Apparel),
    ("Palazzos", Apparel),
    ("Capris", Apparel),
    ("Suits", Apparel),
    ("Tracksuits", Apparel),
    ("Activewear", Apparel),
    ("Sports Bras", Apparel),
    ("Swimwear", Apparel),
    ("Nightwear", Apparel),
    ("Pyjamas", Apparel),
    ("Loungewear", Apparel),
    ("Thermals", Apparel),
    // Ethnic wear
    ("Kurtas", Ethnic),
    ("Kurtis", Ethnic),
    ("Kurta Sets", Ethnic),
    ("Sarees", Ethnic),
    ("Lehengas", Ethnic),
    ("Salwar Suits", Ethnic),
    ("Anarkalis", Ethnic),
    ("Ethnic Gowns", Ethnic),
    ("Dress Materials", Ethnic),
    ("Sherwanis", Ethnic),
    ("Nehru Jackets", Ethnic),
    ("Dhotis", Ethnic),
    ("Dupattas", Ethnic),
    ("Churidars", Ethnic),
    ("Patiala Pants", Ethnic),
    // Innerwear
    ("Bras", Innerwear),
    ("Briefs", Innerwear),
    ("Boxers", Innerwear),
    ("Vests", Innerwear),
    ("Camisoles", Innerwear),
    ("Shapewear", Innerwear),
    ("Socks", Innerwear),
    ("Stockings", Innerwear),
    // Footwear
    ("Sneakers", Footwear),
    ("Sports Shoes", Footwear),
    ("Casual Shoes", Footwear),
    ("Formal Shoes", Footwear),
    ("Loafers", Footwear),
    ("Boots", Footwear),
    ("Heels", Footwear),
    ("Flats", Footwear),
    ("Sandals", Footwear),
    ("Flip Flops", Footwear),
    ("Slippers", Footwear),
    ("Mojaris", Footwear),
    ("Kolhapuris", Footwear),
    ("Wedges", Footwear),
    ("Mules", Footwear),
    ("Clogs", Footwear),
    // Bags
    ("Handbags", Bags),
    ("Backpacks", Bags),
    ("Totes", Bags),
    ("Sling Bags", Bags),
    ("Clutches", Bags),
    ("Wallets", Bags),
    ("Duffle Bags", Bags),
    ("Laptop Bags", Bags),
    ("Trolley Bags", Bags),
    ("Pouches", Bags),
    ("Belt Bags", Bags),
    // Jewellery
    ("Necklaces", Jewellery),
    ("Earrings", Jewellery),
    ("Rings", Jewellery),
    ("Bracelets", Jewellery),
    ("Bangles", Jewellery),
    ("Anklets", Jewellery),
    ("Pendants", Jewellery),
    ("Chains", Jewellery),
    ("Jewellery Sets", Jewellery),
    ("Nose Pins", Jewellery),
    ("Maang Tikkas", Jewellery),
    ("Brooches", Jewellery),
    ("Mangalsutras", Jewellery),
    // Accessories
    ("Watches", Accessories),
    ("Sunglasses", Accessories),
    ("Belts", Accessories),
    ("Caps", Accessories),
    ("Hats", Accessories),
    ("Scarves", Accessories),
    ("Stoles", Accessories),
    ("Mufflers", Accessories),
    ("Gloves", Accessories),
    ("Ties", Accessories),
    ("Cufflinks", Accessories),
    ("Hair Accessories", Accessories),
    ("Umbrellas", Accessories),
    ("Keychains", Accessories),
    ("Face Masks", Accessories),
    // Beauty
    ("Lipsticks", Beauty),
    ("Lip Balms", Beauty),
    ("Foundations", Beauty),
    ("Concealers", Beauty),
    ("Kajal", Beauty),
    ("Eyeliners", Beauty),
    ("Mascaras", Beauty),
    ("Eyeshadows", Beauty),
    ("Blush", Beauty),
    ("Highlighters", Beauty),
    ("Compacts", Beauty),
    ("Primers", Beauty),
    ("Nail Polish", Beauty),
    ("Perfumes", Beauty),
    ("Deodorants", Beauty),
    ("Face Wash", Beauty),
    ("Moisturisers", Beauty),
    ("Sunscreens", Beauty),
    ("Serums", Beauty),
    ("Sheet Masks", Beauty),
    ("Shampoos", Beauty),
    ("Conditioners", Beauty),
    ("Hair Oils", Beauty),
    ("Body Lotions", Beauty),
    ("Makeup Kits", Beauty),
    // Kidswear
    ("Rompers", Kidswear),
    ("Frocks", Kidswear),
    ("Bodysuits", Kidswear),
    ("Dungarees", Kidswear),
];


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<CategoryDomain>,
}

/// Closed, ordered set of canonical category names.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    entries: Vec<CategoryEntry>,
    by_lowercase: HashMap<String, usize>,
    lowercase_names: Vec<String>,
}

impl Taxonomy {
    /// Builds a taxonomy keeping the first spelling of names that collide
    /// case-insensitively. Catalog loading rejects such collisions up front.
    pub fn new(entries: impl IntoIterator<Item = CategoryEntry>) -> Self {
        let mut kept = Vec::new();
        let mut by_lowercase = HashMap::new();
        let mut lowercase_names = Vec::new();

        for entry in entries {
            let key = entry.name.trim().to_lowercase();
            if key.is_empty() || by_lowercase.contains_key(&key) {
                continue;
            }
            by_lowercase.insert(key.clone(), kept.len());
            lowercase_names.push(key);
            kept.push(entry);
        }

        Self {
            entries: kept,
            by_lowercase,
            lowercase_names,
        }
    }

    pub fn builtin() -> Self {
        Self::new(CATEGORY_TABLE.iter().map(|(name, domain)| CategoryEntry {
            name: (*name).to_string(),
            domain: Some(*domain),
        }))
    }

    #[must_use]
    pub fn is_canonical(&self, name: &str) -> bool {
        self.by_lowercase.contains_key(&name.to_lowercase())
    }

    /// Stored spelling of `name` when it is canonical, ignoring case.
    #[must_use]
    pub fn canonical_name(&self, name: &str) -> Option<&str> {
        self.by_lowercase
            .get(&name.to_lowercase())
            .map(|&idx| self.entries[idx].name.as_str())
    }

    #[must_use]
    pub fn all_categories(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[must_use]
    pub fn domain_of(&self, name: &str) -> Option<CategoryDomain> {
        self.by_lowercase
            .get(&name.to_lowercase())
            .and_then(|&idx| self.entries[idx].domain)
    }

    #[must_use]
    pub fn categories_in(&self, domain: CategoryDomain) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.domain == Some(domain))
            .map(|e| e.name.as_str())
            .collect()
    }

    /// `(lowercase, stored)` pairs in table order.
    pub(crate) fn iter_normalized(&self) -> impl Iterator<Item = (&str, &str)> {
        self.lowercase_names
            .iter()
            .zip(self.entries.iter())
            .map(|(lower, entry)| (lower.as_str(), entry.name.as_str()))
    }

    pub fn entries(&self) -> &[CategoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
