use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Size class for dog breeds.
/// Used only to group the selection UI; the age model never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DogSize {
    #[display(fmt = "small")]
    Small,
    #[display(fmt = "medium")]
    Medium,
    #[display(fmt = "large")]
    Large,
}

impl DogSize {
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Small => "Small dog",
            Self::Medium => "Medium dog",
            Self::Large => "Large dog",
        }
    }
}

/// Popularity class for cat breeds, used only to group the selection UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Popularity {
    #[display(fmt = "veryPopular")]
    VeryPopular,
    #[display(fmt = "popular")]
    Popular,
    #[display(fmt = "moderate")]
    Moderate,
    #[display(fmt = "rare")]
    Rare,
}

/// Species-scoped view of one breed table entry, as returned by
/// `Species::breed_profile`. `size` is populated for dog breeds only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreedProfile {
    pub code: &'static str,
    pub display_name: &'static str,
    pub average_lifespan: f64,
    pub size: Option<DogSize>,
}

impl From<DogBreed> for BreedProfile {
    fn from(breed: DogBreed) -> Self {
        Self {
            code: breed.code(),
            display_name: breed.display_name(),
            average_lifespan: breed.average_lifespan(),
            size: Some(breed.size_category()),
        }
    }
}

impl From<CatBreed> for BreedProfile {
    fn from(breed: CatBreed) -> Self {
        Self {
            code: breed.code(),
            display_name: breed.display_name(),
            average_lifespan: breed.average_lifespan(),
            size: None,
        }
    }
}

/// Dog breeds with per-breed average lifespans.
///
/// Serialized as the stable persisted code strings. Lifespans are point
/// estimates from pet-insurer actuarial data; breeds listed as ranges in the
/// source use the midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DogBreed {
    // small
    ToyPoodle,
    MiniatureDachshund,
    Papillon,
    ItalianGreyhound,
    MiniaturePinscher,
    ShihTzu,
    Chihuahua,
    WestHighlandWhiteTerrier,
    YorkshireTerrier,
    Pomeranian,
    Maltese,
    MiniatureSchnauzer,
    Pekingese,
    JapaneseSpitz,
    NorfolkTerrier,
    Pug,
    CavalierKingCharlesSpaniel,
    BostonTerrier,
    JapaneseChin,
    // medium
    ShibaInu,
    KaiKen,
    HokkaidoKen,
    EnglishCockerSpaniel,
    Beagle,
    AmericanCockerSpaniel,
    BorderCollie,
    WelshCorgiPembroke,
    ShetlandSheepdog,
    AkitaInu,
    SiberianHusky,
    FrenchBulldog,
    ShikokuKen,
    GermanShepherd,
    EnglishBulldog,
    // large
    LabradorRetriever,
    GoldenRetriever,
    DobermanPinscher,
    BerneseMountainDog,
    GreatDane,
    // mixes and fallback
    SmallMix,
    LargeMix,
    Unknown,
}

impl DogBreed {
    /// Every dog breed, in persisted-enumeration order
    pub const ALL: [Self; 42] = [
        Self::ToyPoodle,
        Self::MiniatureDachshund,
        Self::Papillon,
        Self::ItalianGreyhound,
        Self::MiniaturePinscher,
        Self::ShihTzu,
        Self::Chihuahua,
        Self::WestHighlandWhiteTerrier,
        Self::YorkshireTerrier,
        Self::Pomeranian,
        Self::Maltese,
        Self::MiniatureSchnauzer,
        Self::Pekingese,
        Self::JapaneseSpitz,
        Self::NorfolkTerrier,
        Self::Pug,
        Self::CavalierKingCharlesSpaniel,
        Self::BostonTerrier,
        Self::JapaneseChin,
        Self::ShibaInu,
        Self::KaiKen,
        Self::HokkaidoKen,
        Self::EnglishCockerSpaniel,
        Self::Beagle,
        Self::AmericanCockerSpaniel,
        Self::BorderCollie,
        Self::WelshCorgiPembroke,
        Self::ShetlandSheepdog,
        Self::AkitaInu,
        Self::SiberianHusky,
        Self::FrenchBulldog,
        Self::ShikokuKen,
        Self::GermanShepherd,
        Self::EnglishBulldog,
        Self::LabradorRetriever,
        Self::GoldenRetriever,
        Self::DobermanPinscher,
        Self::BerneseMountainDog,
        Self::GreatDane,
        Self::SmallMix,
        Self::LargeMix,
        Self::Unknown,
    ];

    /// Stable identifier persisted by the storage layer
    pub const fn code(self) -> &'static str {
        match self {
            Self::ToyPoodle => "toyPoodle",
            Self::MiniatureDachshund => "miniatureDachshund",
            Self::Papillon => "papillon",
            Self::ItalianGreyhound => "italianGreyhound",
            Self::MiniaturePinscher => "miniaturePinscher",
            Self::ShihTzu => "shihTzu",
            Self::Chihuahua => "chihuahua",
            Self::WestHighlandWhiteTerrier => "westHighlandWhiteTerrier",
            Self::YorkshireTerrier => "yorkshireTerrier",
            Self::Pomeranian => "pomeranian",
            Self::Maltese => "maltese",
            Self::MiniatureSchnauzer => "miniatureSchnauzer",
            Self::Pekingese => "pekingese",
            Self::JapaneseSpitz => "japaneseSpitz",
            Self::NorfolkTerrier => "norfolkTerrier",
            Self::Pug => "pug",
            Self::CavalierKingCharlesSpaniel => "cavalierKingCharlesSpaniel",
            Self::BostonTerrier => "bostonTerrier",
            Self::JapaneseChin => "japaneseChin",
            Self::ShibaInu => "shibaInu",
            Self::KaiKen => "kaiKen",
            Self::HokkaidoKen => "hokkaidoKen",
            Self::EnglishCockerSpaniel => "englishCockerSpaniel",
            Self::Beagle => "beagle",
            Self::AmericanCockerSpaniel => "americanCockerSpaniel",
            Self::BorderCollie => "borderCollie",
            Self::WelshCorgiPembroke => "welshCorgiPembroke",
            Self::ShetlandSheepdog => "shetlandSheepdog",
            Self::AkitaInu => "akitaInu",
            Self::SiberianHusky => "siberianHusky",
            Self::FrenchBulldog => "frenchBulldog",
            Self::ShikokuKen => "shikokuKen",
            Self::GermanShepherd => "germanShepherd",
            Self::EnglishBulldog => "englishBulldog",
            Self::LabradorRetriever => "labradorRetriever",
            Self::GoldenRetriever => "goldenRetriever",
            Self::DobermanPinscher => "dobermanPinscher",
            Self::BerneseMountainDog => "berneseMountainDog",
            Self::GreatDane => "greatDane",
            Self::SmallMix => "smallMix",
            Self::LargeMix => "largeMix",
            Self::Unknown => "unknown",
        }
    }

    /// Resolves a persisted breed code; `None` if it matches no dog breed
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.code() == code)
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::ToyPoodle => "Toy Poodle",
            Self::MiniatureDachshund => "Miniature Dachshund",
            Self::Papillon => "Papillon",
            Self::ItalianGreyhound => "Italian Greyhound",
            Self::MiniaturePinscher => "Miniature Pinscher",
            Self::ShihTzu => "Shih Tzu",
            Self::Chihuahua => "Chihuahua",
            Self::WestHighlandWhiteTerrier => "West Highland White Terrier",
            Self::YorkshireTerrier => "Yorkshire Terrier",
            Self::Pomeranian => "Pomeranian",
            Self::Maltese => "Maltese",
            Self::MiniatureSchnauzer => "Miniature Schnauzer",
            Self::Pekingese => "Pekingese",
            Self::JapaneseSpitz => "Japanese Spitz",
            Self::NorfolkTerrier => "Norfolk Terrier",
            Self::Pug => "Pug",
            Self::CavalierKingCharlesSpaniel => "Cavalier King Charles Spaniel",
            Self::BostonTerrier => "Boston Terrier",
            Self::JapaneseChin => "Japanese Chin",
            Self::ShibaInu => "Shiba Inu",
            Self::KaiKen => "Kai Ken",
            Self::HokkaidoKen => "Hokkaido Ken",
            Self::EnglishCockerSpaniel => "English Cocker Spaniel",
            Self::Beagle => "Beagle",
            Self::AmericanCockerSpaniel => "American Cocker Spaniel",
            Self::BorderCollie => "Border Collie",
            Self::WelshCorgiPembroke => "Welsh Corgi Pembroke",
            Self::ShetlandSheepdog => "Shetland Sheepdog",
            Self::AkitaInu => "Akita Inu",
            Self::SiberianHusky => "Siberian Husky",
            Self::FrenchBulldog => "French Bulldog",
            Self::ShikokuKen => "Shikoku Ken",
            Self::GermanShepherd => "German Shepherd",
            Self::EnglishBulldog => "English Bulldog",
            Self::LabradorRetriever => "Labrador Retriever",
            Self::GoldenRetriever => "Golden Retriever",
            Self::DobermanPinscher => "Doberman Pinscher",
            Self::BerneseMountainDog => "Bernese Mountain Dog",
            Self::GreatDane => "Great Dane",
            Self::SmallMix => "Mixed (small)",
            Self::LargeMix => "Mixed (large)",
            Self::Unknown => "Unknown / other",
        }
    }

    /// Average lifespan in years
    pub const fn average_lifespan(self) -> f64 {
        match self {
            Self::ToyPoodle => 15.3,
            Self::MiniatureDachshund => 14.9,
            Self::Papillon => 14.5,
            Self::ItalianGreyhound => 14.5,
            Self::MiniaturePinscher => 14.3,
            Self::ShihTzu => 14.0,
            Self::Chihuahua => 13.9,
            Self::WestHighlandWhiteTerrier => 13.9,
            Self::YorkshireTerrier => 13.8,
            Self::Pomeranian => 13.7,
            Self::Maltese => 13.6,
            Self::MiniatureSchnauzer => 13.6,
            Self::Pekingese => 13.1,
            Self::JapaneseSpitz => 13.1,
            Self::NorfolkTerrier => 12.7,
            Self::Pug => 12.6,
            Self::CavalierKingCharlesSpaniel => 12.4,
            Self::BostonTerrier => 12.3,
            Self::JapaneseChin => 13.0, // midpoint of 12-14
            Self::ShibaInu => 14.7,
            Self::KaiKen => 14.3,
            Self::HokkaidoKen => 14.0,
            Self::EnglishCockerSpaniel => 14.1,
            Self::Beagle => 13.3,
            Self::AmericanCockerSpaniel => 13.2,
            Self::BorderCollie => 13.0,
            Self::WelshCorgiPembroke => 12.3,
            Self::ShetlandSheepdog => 12.3,
            Self::AkitaInu => 11.8,
            Self::SiberianHusky => 11.3,
            Self::FrenchBulldog => 11.1,
            Self::ShikokuKen => 11.0,
            Self::GermanShepherd => 11.0, // midpoint of 10-12
            Self::EnglishBulldog => 8.7,
            Self::LabradorRetriever => 12.7,
            Self::GoldenRetriever => 10.9,
            Self::DobermanPinscher => 11.0, // midpoint of 10-12
            Self::BerneseMountainDog => 8.8,
            Self::GreatDane => 7.5, // midpoint of 7-8
            Self::SmallMix => 15.0,
            Self::LargeMix => 13.0,
            Self::Unknown => 12.0, // species default stand-in
        }
    }

    pub const fn size_category(self) -> DogSize {
        match self {
            Self::ToyPoodle
            | Self::MiniatureDachshund
            | Self::Papillon
            | Self::ItalianGreyhound
            | Self::MiniaturePinscher
            | Self::ShihTzu
            | Self::Chihuahua
            | Self::WestHighlandWhiteTerrier
            | Self::YorkshireTerrier
            | Self::Pomeranian
            | Self::Maltese
            | Self::MiniatureSchnauzer
            | Self::Pekingese
            | Self::JapaneseSpitz
            | Self::NorfolkTerrier
            | Self::Pug
            | Self::CavalierKingCharlesSpaniel
            | Self::BostonTerrier
            | Self::JapaneseChin
            | Self::SmallMix => DogSize::Small,

            Self::ShibaInu
            | Self::KaiKen
            | Self::HokkaidoKen
            | Self::EnglishCockerSpaniel
            | Self::Beagle
            | Self::AmericanCockerSpaniel
            | Self::BorderCollie
            | Self::WelshCorgiPembroke
            | Self::ShetlandSheepdog
            | Self::AkitaInu
            | Self::SiberianHusky
            | Self::FrenchBulldog
            | Self::ShikokuKen
            | Self::GermanShepherd
            | Self::EnglishBulldog
            | Self::Unknown => DogSize::Medium,

            Self::LabradorRetriever
            | Self::GoldenRetriever
            | Self::DobermanPinscher
            | Self::BerneseMountainDog
            | Self::GreatDane
            | Self::LargeMix => DogSize::Large,
        }
    }

    /// Small breeds for the selection UI (mixes and the fallback excluded)
    pub fn small_breeds() -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|b| {
                b.size_category() == DogSize::Small && *b != Self::SmallMix && *b != Self::Unknown
            })
            .collect()
    }

    /// Medium breeds for the selection UI (fallback excluded)
    pub fn medium_breeds() -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|b| b.size_category() == DogSize::Medium && *b != Self::Unknown)
            .collect()
    }

    /// Large breeds for the selection UI (mixes excluded)
    pub fn large_breeds() -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|b| b.size_category() == DogSize::Large && *b != Self::LargeMix)
            .collect()
    }

    /// Mixes and the unknown fallback
    pub fn other_breeds() -> Vec<Self> {
        vec![Self::SmallMix, Self::LargeMix, Self::Unknown]
    }
}

/// Cat breeds with per-breed average lifespans.
///
/// Serialized as the stable persisted code strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CatBreed {
    // mixes
    JapaneseDomestic,
    Mixed,
    // purebreds, longest-lived first
    Siberian,
    JapaneseBobTail,
    Ragdoll,
    AmericanCurl,
    Persian,
    ScottishFold,
    AmericanShorthair,
    NorwegianForest,
    Abyssinian,
    RussianBlue,
    BritishShorthair,
    Birman,
    MaineCoon,
    Somali,
    ExoticShorthair,
    Toyger,
    Singapura,
    OrientalShorthair,
    Chartreux,
    Munchkin,
    SelkirkRex,
    Tonkinese,
    CornishRex,
    DevonRex,
    Ragamuffin,
    Ocicat,
    Burmese,
    Siamese,
    Bengal,
    AmericanWirehair,
    Minuet,
    Sphynx,
    // fallback
    Unknown,
}

impl CatBreed {
    /// Every cat breed, in persisted-enumeration order
    pub const ALL: [Self; 35] = [
        Self::JapaneseDomestic,
        Self::Mixed,
        Self::Siberian,
        Self::JapaneseBobTail,
        Self::Ragdoll,
        Self::AmericanCurl,
        Self::Persian,
        Self::ScottishFold,
        Self::AmericanShorthair,
        Self::NorwegianForest,
        Self::Abyssinian,
        Self::RussianBlue,
        Self::BritishShorthair,
        Self::Birman,
        Self::MaineCoon,
        Self::Somali,
        Self::ExoticShorthair,
        Self::Toyger,
        Self::Singapura,
        Self::OrientalShorthair,
        Self::Chartreux,
        Self::Munchkin,
        Self::SelkirkRex,
        Self::Tonkinese,
        Self::CornishRex,
        Self::DevonRex,
        Self::Ragamuffin,
        Self::Ocicat,
        Self::Burmese,
        Self::Siamese,
        Self::Bengal,
        Self::AmericanWirehair,
        Self::Minuet,
        Self::Sphynx,
        Self::Unknown,
    ];

    /// Stable identifier persisted by the storage layer
    pub const fn code(self) -> &'static str {
        match self {
            Self::JapaneseDomestic => "japaneseDomestic",
            Self::Mixed => "mixed",
            Self::Siberian => "siberian",
            Self::JapaneseBobTail => "japaneseBobTail",
            Self::Ragdoll => "ragdoll",
            Self::AmericanCurl => "americanCurl",
            Self::Persian => "persian",
            Self::ScottishFold => "scottishFold",
            Self::AmericanShorthair => "americanShorthair",
            Self::NorwegianForest => "norwegianForest",
            Self::Abyssinian => "abyssinian",
            Self::RussianBlue => "russianBlue",
            Self::BritishShorthair => "britishShorthair",
            Self::Birman => "birman",
            Self::MaineCoon => "maineCoon",
            Self::Somali => "somali",
            Self::ExoticShorthair => "exoticShorthair",
            Self::Toyger => "toyger",
            Self::Singapura => "singapura",
            Self::OrientalShorthair => "orientalShorthair",
            Self::Chartreux => "chartreux",
            Self::Munchkin => "munchkin",
            Self::SelkirkRex => "selkirkRex",
            Self::Tonkinese => "tonkinese",
            Self::CornishRex => "cornishRex",
            Self::DevonRex => "devonRex",
            Self::Ragamuffin => "ragamuffin",
            Self::Ocicat => "ocicat",
            Self::Burmese => "burmese",
            Self::Siamese => "siamese",
            Self::Bengal => "bengal",
            Self::AmericanWirehair => "americanWirehair",
            Self::Minuet => "minuet",
            Self::Sphynx => "sphynx",
            Self::Unknown => "unknown",
        }
    }

    /// Resolves a persisted breed code; `None` if it matches no cat breed
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.code() == code)
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::JapaneseDomestic => "Japanese Domestic",
            Self::Mixed => "Mixed",
            Self::Siberian => "Siberian",
            Self::JapaneseBobTail => "Japanese Bobtail",
            Self::Ragdoll => "Ragdoll",
            Self::AmericanCurl => "American Curl",
            Self::Persian => "Persian",
            Self::ScottishFold => "Scottish Fold",
            Self::AmericanShorthair => "American Shorthair",
            Self::NorwegianForest => "Norwegian Forest Cat",
            Self::Abyssinian => "Abyssinian",
            Self::RussianBlue => "Russian Blue",
            Self::BritishShorthair => "British Shorthair",
            Self::Birman => "Birman",
            Self::MaineCoon => "Maine Coon",
            Self::Somali => "Somali",
            Self::ExoticShorthair => "Exotic Shorthair",
            Self::Toyger => "Toyger",
            Self::Singapura => "Singapura",
            Self::OrientalShorthair => "Oriental Shorthair",
            Self::Chartreux => "Chartreux",
            Self::Munchkin => "Munchkin",
            Self::SelkirkRex => "Selkirk Rex",
            Self::Tonkinese => "Tonkinese",
            Self::CornishRex => "Cornish Rex",
            Self::DevonRex => "Devon Rex",
            Self::Ragamuffin => "Ragamuffin",
            Self::Ocicat => "Ocicat",
            Self::Burmese => "Burmese",
            Self::Siamese => "Siamese",
            Self::Bengal => "Bengal",
            Self::AmericanWirehair => "American Wirehair",
            Self::Minuet => "Minuet",
            Self::Sphynx => "Sphynx",
            Self::Unknown => "Unknown",
        }
    }

    /// Average lifespan in years
    pub const fn average_lifespan(self) -> f64 {
        match self {
            Self::JapaneseDomestic => 15.2,
            Self::Mixed => 14.9,
            Self::Siberian => 15.7,
            Self::JapaneseBobTail => 15.3,
            Self::Ragdoll => 14.9,
            Self::AmericanCurl => 14.8,
            Self::Persian => 14.3,
            Self::ScottishFold => 14.0,
            Self::AmericanShorthair => 14.0,
            Self::NorwegianForest => 14.0,
            Self::Abyssinian => 13.9,
            Self::RussianBlue => 13.8,
            Self::BritishShorthair => 13.4,
            Self::Birman => 13.3,
            Self::MaineCoon => 12.9,
            Self::Somali => 12.6,
            Self::ExoticShorthair => 12.2,
            Self::Toyger => 12.2,
            Self::Singapura => 11.6,
            Self::OrientalShorthair => 11.6,
            Self::Chartreux => 11.3,
            Self::Munchkin => 11.2,
            Self::SelkirkRex => 11.2,
            Self::Tonkinese => 10.5,
            Self::CornishRex => 10.5,
            Self::DevonRex => 10.5,
            Self::Ragamuffin => 10.3,
            Self::Ocicat => 10.1,
            Self::Burmese => 10.1,
            Self::Siamese => 9.6,
            Self::Bengal => 9.2,
            Self::AmericanWirehair => 9.1,
            Self::Minuet => 8.3,
            Self::Sphynx => 7.0,
            Self::Unknown => 15.0, // species average
        }
    }

    pub const fn popularity(self) -> Popularity {
        match self {
            Self::JapaneseDomestic
            | Self::Mixed
            | Self::ScottishFold
            | Self::AmericanShorthair
            | Self::Ragdoll
            | Self::MaineCoon
            | Self::NorwegianForest
            | Self::Munchkin
            | Self::BritishShorthair
            | Self::Persian => Popularity::VeryPopular,

            Self::RussianBlue
            | Self::Bengal
            | Self::Abyssinian
            | Self::Siamese
            | Self::ExoticShorthair
            | Self::Birman
            | Self::Somali => Popularity::Popular,

            Self::AmericanCurl
            | Self::Tonkinese
            | Self::Singapura
            | Self::OrientalShorthair
            | Self::Chartreux
            | Self::Sphynx
            | Self::SelkirkRex
            | Self::Unknown => Popularity::Moderate,

            Self::Siberian
            | Self::JapaneseBobTail
            | Self::Toyger
            | Self::CornishRex
            | Self::DevonRex
            | Self::Ragamuffin
            | Self::Ocicat
            | Self::Burmese
            | Self::AmericanWirehair
            | Self::Minuet => Popularity::Rare,
        }
    }

    /// Mixes and domestic cats, shown first in the selection UI
    pub fn mixed_breeds() -> Vec<Self> {
        vec![Self::JapaneseDomestic, Self::Mixed]
    }

    /// Very popular purebreds, sorted by display name
    pub fn very_popular_breeds() -> Vec<Self> {
        let mut breeds: Vec<Self> = Self::ALL
            .into_iter()
            .filter(|b| {
                b.popularity() == Popularity::VeryPopular
                    && !matches!(*b, Self::JapaneseDomestic | Self::Mixed)
            })
            .collect();
        breeds.sort_by_key(|b| b.display_name());
        breeds
    }

    /// Popular purebreds, sorted by display name
    pub fn popular_breeds() -> Vec<Self> {
        let mut breeds: Vec<Self> = Self::ALL
            .into_iter()
            .filter(|b| b.popularity() == Popularity::Popular)
            .collect();
        breeds.sort_by_key(|b| b.display_name());
        breeds
    }

    /// Remaining purebreds (moderate and rare), sorted by display name
    pub fn other_breeds() -> Vec<Self> {
        let mut breeds: Vec<Self> = Self::ALL
            .into_iter()
            .filter(|b| {
                matches!(b.popularity(), Popularity::Moderate | Popularity::Rare)
                    && *b != Self::Unknown
            })
            .collect();
        breeds.sort_by_key(|b| b.display_name());
        breeds
    }
}
