use std::collections::HashMap;

/// Free-text variants mapped to canonical categories.
///
/// Order is load-bearing: the alias prefix tier of the resolver returns the
/// first entry whose key is a prefix of the input (or the other way round),
/// so moving a line can change what a query resolves to. Keys are lowercase
/// and trimmed.
pub const ALIAS_TABLE: &[(&str, &str)] = &[
    // Tops
    ("top", "Tops"),
    ("tops", "Tops"),
    ("topwear", "Tops"),
    ("tshirt", "Tshirts"),
    ("tshirts", "Tshirts"),
    ("t-shirt", "Tshirts"),
    ("t-shirts", "Tshirts"),
    ("t shirt", "Tshirts"),
    ("t shirts", "Tshirts"),
    ("tee", "Tshirts"),
    ("tees", "Tshirts"),
    ("polo", "Tshirts"),
    ("polos", "Tshirts"),
    ("shirt", "Shirts"),
    ("shirts", "Shirts"),
    ("formal shirt", "Shirts"),
    ("casual shirt", "Shirts"),
    ("blouse", "Blouses"),
    ("blouses", "Blouses"),
    ("tunic", "Tunics"),
    ("crop top", "Crop Tops"),
    ("crop-top", "Crop Tops"),
    ("croptop", "Crop Tops"),
    ("tank top", "Tank Tops"),
    ("tank", "Tank Tops"),
    ("camisole top", "Tank Tops"),
    ("sweatshirt", "Sweatshirts"),
    ("hoodie", "Hoodies"),
    ("hoody", "Hoodies"),
    ("sweater", "Sweaters"),
    ("pullover", "Sweaters"),
    ("jumper", "Sweaters"),
    ("cardigan", "Cardigans"),
    ("jacket", "Jackets"),
    ("bomber", "Jackets"),
    ("denim jacket", "Jackets"),
    ("blazer", "Blazers"),
    ("coat", "Coats"),
    ("overcoat", "Coats"),
    ("trench coat", "Coats"),
    ("waistcoat", "Waistcoats"),
    ("shrug", "Shrugs"),
    // Dresses and sets
    ("dress", "Dresses"),
    ("gown", "Dresses"),
    ("maxi dress", "Dresses"),
    ("midi dress", "Dresses"),
    ("jumpsuit", "Jumpsuits"),
    ("playsuit", "Playsuits"),
    ("co-ord", "Co-ord Sets"),
    ("co-ords", "Co-ord Sets"),
    ("coord set", "Co-ord Sets"),
    ("co ord set", "Co-ord Sets"),
    // Bottoms
    ("jean", "Jeans"),
    ("denim", "Jeans"),
    ("denims", "Jeans"),
    ("trouser", "Trousers"),
    ("pant", "Trousers"),
    ("pants", "Trousers"),
    ("formal pants", "Trousers"),
    ("chino", "Chinos"),
    ("jogger", "Joggers"),
    ("trackpant", "Track Pants"),
    ("trackpants", "Track Pants"),
    ("track pant", "Track Pants"),
    ("cargo", "Cargo Pants"),
    ("cargos", "Cargo Pants"),
    ("cargo pant", "Cargo Pants"),
    ("short", "Shorts"),
    ("bermuda", "Shorts"),
    ("skirt", "Skirts"),
    ("legging", "Leggings"),
    ("jegging", "Jeggings"),
    ("palazzo", "Palazzos"),
    ("palazzo pants", "Palazzos"),
    ("capri", "Capris"),
    ("suit", "Suits"),
    ("tuxedo", "Suits"),
    ("tracksuit", "Tracksuits"),
    ("gym wear", "Activewear"),
    ("sportswear", "Activewear"),
    ("active wear", "Activewear"),
    ("sports bra", "Sports Bras"),
    ("swimsuit", "Swimwear"),
    ("bikini", "Swimwear"),
    ("swim wear", "Swimwear"),
    ("night suit", "Nightwear"),
    ("nightdress", "Nightwear"),
    ("nighty", "Nightwear"),
    ("pyjama", "Pyjamas"),
    ("pajama", "Pyjamas"),
    ("pajamas", "Pyjamas"),
    ("lounge wear", "Loungewear"),
    ("thermal", "Thermals"),
    // Ethnic
    ("kurta", "Kurtas"),
    ("kurti", "Kurtis"),
    ("kurtis", "Kurtis"),
    ("kurta set", "Kurta Sets"),
    ("kurta pyjama", "Kurta Sets"),
    ("saree", "Sarees"),
    ("sari", "Sarees"),
    ("saris", "Sarees"),
    ("lehenga", "Lehengas"),
    ("lehnga", "Lehengas"),
    ("lehenga choli", "Lehengas"),
    ("ghagra", "Lehengas"),
    ("salwar", "Salwar Suits"),
    ("salwar kameez", "Salwar Suits"),
    ("salwar suit", "Salwar Suits"),
    ("anarkali", "Anarkalis"),
    ("ethnic gown", "Ethnic Gowns"),
    ("dress material", "Dress Materials"),
    ("unstitched", "Dress Materials"),
    ("sherwani", "Sherwanis"),
    ("nehru jacket", "Nehru Jackets"),
    ("bandhgala", "Nehru Jackets"),
    ("dhoti", "Dhotis"),
    ("mundu", "Dhotis"),
    ("dupatta", "Dupattas"),
    ("chunni", "Dupattas"),
    ("churidar", "Churidars"),
    ("patiala", "Patiala Pants"),
    // Innerwear
    ("bra", "Bras"),
    ("brief", "Briefs"),
    ("panty", "Briefs"),
    ("panties", "Briefs"),
    ("boxer", "Boxers"),
    ("trunks", "Boxers"),
    ("vest", "Vests"),
    ("innerwear", "Vests"),
    ("camisole", "Camisoles"),
    ("slip", "Camisoles"),
    ("shaper", "Shapewear"),
    ("sock", "Socks"),
    ("stocking", "Stockings"),
    ("tights", "Stockings"),
    // Footwear
    ("sneaker", "Sneakers"),
    ("trainers", "Sneakers"),
    ("sports shoe", "Sports Shoes"),
    ("running shoes", "Sports Shoes"),
    ("casual shoe", "Casual Shoes"),
    ("shoe", "Casual Shoes"),
    ("shoes", "Casual Shoes"),
    ("formal shoe", "Formal Shoes"),
    ("oxford", "Formal Shoes"),
    ("derby", "Formal Shoes"),
    ("loafer", "Loafers"),
    ("moccasin", "Loafers"),
    ("boot", "Boots"),
    ("chelsea boots", "Boots"),
    ("heel", "Heels"),
    ("stilettos", "Heels"),
    ("pumps", "Heels"),
    ("flat", "Flats"),
    ("ballerina", "Flats"),
    ("sandal", "Sandals"),
    ("flip flop", "Flip Flops"),
    ("flip-flops", "Flip Flops"),
    ("slipper", "Slippers"),
    ("slides", "Slippers"),
    ("mojari", "Mojaris"),
    ("juttis", "Mojaris"),
    ("jutti", "Mojaris"),
    ("kolhapuri", "Kolhapuris"),
    ("wedge", "Wedges"),
    ("mule", "Mules"),
    ("clog", "Clogs"),
    ("crocs", "Clogs"),
    // Bags
    ("handbag", "Handbags"),
    ("purse", "Handbags"),
    ("shoulder bag", "Handbags"),
    ("bag", "Handbags"),
    ("bags", "Handbags"),
    ("backpack", "Backpacks"),
    ("rucksack", "Backpacks"),
    ("school bag", "Backpacks"),
    ("tote", "Totes"),
    ("tote bag", "Totes"),
    ("sling", "Sling Bags"),
    ("sling bag", "Sling Bags"),
    ("crossbody", "Sling Bags"),
    ("clutch", "Clutches"),
    ("wallet", "Wallets"),
    ("card holder", "Wallets"),
    ("duffle", "Duffle Bags"),
    ("duffel", "Duffle Bags"),
    ("gym bag", "Duffle Bags"),
    ("laptop bag", "Laptop Bags"),
    ("messenger bag", "Laptop Bags"),
    ("trolley", "Trolley Bags"),
    ("suitcase", "Trolley Bags"),
    ("luggage", "Trolley Bags"),
    ("pouch", "Pouches"),
    ("potli", "Pouches"),
    ("belt bag", "Belt Bags"),
    ("fanny pack", "Belt Bags"),
    ("waist bag", "Belt Bags"),
    // Jewellery
    ("necklace", "Necklaces"),
    ("choker", "Necklaces"),
    ("earring", "Earrings"),
    ("jhumka", "Earrings"),
    ("jhumkas", "Earrings"),
    ("studs", "Earrings"),
    ("hoops", "Earrings"),
    ("ring", "Rings"),
    ("bracelet", "Bracelets"),
    ("bangle", "Bangles"),
    ("kada", "Bangles"),
    ("anklet", "Anklets"),
    ("payal", "Anklets"),
    ("pendant", "Pendants"),
    ("locket", "Pendants"),
    ("chain", "Chains"),
    ("jewellery set", "Jewellery Sets"),
    ("jewelry set", "Jewellery Sets"),
    ("jewellery", "Jewellery Sets"),
    ("jewelry", "Jewellery Sets"),
    ("nose pin", "Nose Pins"),
    ("nose ring", "Nose Pins"),
    ("nath", "Nose Pins"),
    ("maang tikka", "Maang Tikkas"),
    ("tikka", "Maang Tikkas"),
    ("brooch", "Brooches"),
    ("mangalsutra", "Mangalsutras"),
    // Accessories
    ("watch", "Watches"),
    ("smartwatch", "Watches"),
    ("sunglass", "Sunglasses"),
    ("shades", "Sunglasses"),
    ("goggles", "Sunglasses"),
    ("belt", "Belts"),
    ("cap", "Caps"),
    ("baseball cap", "Caps"),
    ("hat", "Hats"),
    ("beanie", "Hats"),
    ("scarf", "Scarves"),
    ("scarfs", "Scarves"),
    ("stole", "Stoles"),
    ("shawl", "Stoles"),
    ("muffler", "Mufflers"),
    ("glove", "Gloves"),
    ("tie", "Ties"),
    ("bow tie", "Ties"),
    ("cufflink", "Cufflinks"),
    ("hair clip", "Hair Accessories"),
    ("scrunchie", "Hair Accessories"),
    ("hairband", "Hair Accessories"),
    ("headband", "Hair Accessories"),
    ("umbrella", "Umbrellas"),
    ("keychain", "Keychains"),
    ("keyring", "Keychains"),
    ("face mask", "Face Masks"),
    ("mask", "Face Masks"),
    // Beauty
    ("lipstick", "Lipsticks"),
    ("lip colour", "Lipsticks"),
    ("lip color", "Lipsticks"),
    ("lip balm", "Lip Balms"),
    ("foundation", "Foundations"),
    ("concealer", "Concealers"),
    ("kohl", "Kajal"),
    ("eyeliner", "Eyeliners"),
    ("mascara", "Mascaras"),
    ("eyeshadow", "Eyeshadows"),
    ("eye shadow", "Eyeshadows"),
    ("blusher", "Blush"),
    ("highlighter", "Highlighters"),
    ("compact", "Compacts"),
    ("compact powder", "Compacts"),
    ("primer", "Primers"),
    ("nail paint", "Nail Polish"),
    ("nail polishes", "Nail Polish"),
    ("nail enamel", "Nail Polish"),
    ("perfume", "Perfumes"),
    ("fragrance", "Perfumes"),
    ("eau de parfum", "Perfumes"),
    ("attar", "Perfumes"),
    ("deodorant", "Deodorants"),
    ("deo", "Deodorants"),
    ("body spray", "Deodorants"),
    ("facewash", "Face Wash"),
    ("cleanser", "Face Wash"),
    ("moisturiser", "Moisturisers"),
    ("moisturizer", "Moisturisers"),
    ("moisturizers", "Moisturisers"),
    ("face cream", "Moisturisers"),
    ("sunscreen", "Sunscreens"),
    ("sunblock", "Sunscreens"),
    ("spf", "Sunscreens"),
    ("serum", "Serums"),
    ("face serum", "Serums"),
    ("sheet mask", "Sheet Masks"),
    ("shampoo", "Shampoos"),
    ("conditioner", "Conditioners"),
    ("hair oil", "Hair Oils"),
    ("body lotion", "Body Lotions"),
    ("lotion", "Body Lotions"),
    ("makeup kit", "Makeup Kits"),
    ("makeup", "Makeup Kits"),
    ("cosmetics", "Makeup Kits"),
    // Kidswear
    ("romper", "Rompers"),
    ("onesie", "Rompers"),
    ("frock", "Frocks"),
    ("bodysuit", "Bodysuits"),
    ("dungaree", "Dungarees"),
    ("overalls", "Dungarees"),
    // Generic apparel words
    ("clothes", "Clothing"),
    ("apparel", "Clothing"),
    ("outfit", "Clothing"),
    ("garment", "Clothing"),
    ("wear", "Clothing"),
];


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    pub variant: String,
    pub canonical: String,
}

/// Ordered alias lookup: O(1) exact match plus definition-order iteration.
#[derive(Debug, Clone, Default)]
pub struct AliasIndex {
    entries: Vec<AliasEntry>,
    by_variant: HashMap<String, usize>,
}

impl AliasIndex {
    /// Builds the index from ordered `(variant, canonical)` pairs.
    ///
    /// Variants are lowercased and trimmed; empty ones are skipped. A repeated
    /// variant keeps the position of its first definition and takes the
    /// canonical of its last one.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut entries: Vec<AliasEntry> = Vec::new();
        let mut by_variant: HashMap<String, usize> = HashMap::new();

        for (variant, canonical) in pairs {
            let variant = variant.as_ref().trim().to_lowercase();
            if variant.is_empty() {
                continue;
            }
            let canonical = canonical.into();
            match by_variant.get(&variant) {
                Some(&idx) => entries[idx].canonical = canonical,
                None => {
                    by_variant.insert(variant.clone(), entries.len());
                    entries.push(AliasEntry { variant, canonical });
                }
            }
        }

        Self { entries, by_variant }
    }

    pub fn builtin() -> Self {
        Self::from_pairs(ALIAS_TABLE.iter().copied())
    }

    #[must_use]
    pub fn lookup_alias(&self, text: &str) -> Option<&str> {
        self.by_variant
            .get(&text.trim().to_lowercase())
            .map(|&idx| self.entries[idx].canonical.as_str())
    }

    /// Entries in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &AliasEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
