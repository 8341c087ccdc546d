//! Real Philadelphia locations for route ordering fixtures.
//!
//! Ids are Google place ids; coordinates as returned by the Places API.

use route_sequencer::Place;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub id: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, id: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, id, lat, lng }
    }

    pub fn place(&self) -> Place {
        Place::new(self.id, self.lat, self.lng)
    }
}

pub fn places(locations: &[&Location]) -> Vec<Place> {
    locations.iter().map(|l| l.place()).collect()
}

pub fn ids(locations: &[&Location]) -> Vec<&'static str> {
    locations.iter().map(|l| l.id).collect()
}

// ============================================================================
// Citywide alleycat checkpoints
// ============================================================================

pub const ALLEYCAT_START: Location =
    Location::new("Alleycat start", "ChIJmZ0KYn_IxokRIBmPHZq5kPc", 39.9614429, -75.1545378);
pub const GRAYS_FERRY_SKATE_PARK: Location =
    Location::new("Grays Ferry Skate Park", "ChIJc7SgtIvGxokRPBKj0H0XXPQ", 39.9409798, -75.20420159999999);
pub const BARNES: Location =
    Location::new("Barnes Foundation", "ChIJrcsBU8vHxokR4FXP2BplJks", 39.9606433, -75.17280749999999);
pub const N_11TH_2400: Location =
    Location::new("2400 N 11th St", "ChIJcRzlRgbIxokR1yUtRPv8u4I", 39.9891357, -75.1506503);
pub const INN_YARD_PARK: Location =
    Location::new("Inn Yard Park", "ChIJkTEFDHy4xokR3y81rj83fmI", 40.0090982, -75.1953324);
pub const TSHAT: Location =
    Location::new("Tshat", "ChIJ38WZZl3JxokRvVzKlOrKDOw", 39.9829054, -75.1019638);
pub const THE_700: Location =
    Location::new("The 700", "ChIJHxQlmGTIxokRVN3mcBkfOIk", 39.9620591, -75.1413974);
pub const ROSE_GARDEN: Location =
    Location::new("Rose Garden", "ChIJ1waJqZzIxokR49XlZ1tqfnw", 39.94694, -75.1488246);
pub const LOCUST_BAR: Location =
    Location::new("Locust Bar", "ChIJb6_MyifGxokRpoGQe70D8ek", 39.9472387, -75.1575275);
pub const BROAD_MCKEAN: Location =
    Location::new("Broad & McKean", "ChIJqWIkSA_GxokRc4T8-pBAwbU", 39.925222399999996, -75.16747749999999);
pub const WHARTON_SQ: Location =
    Location::new("Wharton Square", "ChIJS_Tsp27GxokRNn46MDX2rrM", 39.9360454, -75.1837832);
pub const FITLER_SQ: Location =
    Location::new("Fitler Square", "ChIJIQ0RF0fGxokRRBPTCYK7s-o", 39.9474746, -75.1793444);
pub const SAUNDERS_PARK: Location =
    Location::new("Saunders Park", "ChIJT1ozjUvHxokR3LneNPIS4qE", 39.9600151, -75.19938719999999);
pub const CLARK_PARK: Location =
    Location::new("Clark Park", "ChIJbyyRSfLGxokRDJARJE7eV9o", 39.9488973, -75.2104142);

/// Checkpoints in the order riders receive them.
pub const ALLEYCAT_STOPS: &[&Location] = &[
    &N_11TH_2400,
    &INN_YARD_PARK,
    &TSHAT,
    &THE_700,
    &ROSE_GARDEN,
    &LOCUST_BAR,
    &BROAD_MCKEAN,
    &WHARTON_SQ,
    &FITLER_SQ,
    &BARNES,
    &SAUNDERS_PARK,
    &CLARK_PARK,
];

// ============================================================================
// Errand run, South Philly to City Hall
// ============================================================================

pub const MCCLELLAN_ST: Location =
    Location::new("McClellan St", "ChIJHQTP5KjIxokRwvt_H8qZNxE", 39.9253374, -75.15086459999999);
pub const CITY_HALL: Location =
    Location::new("City Hall", "ChIJyb-70KChxokR5YR1l-Nka5s", 39.952799999999996, -75.1634833);
pub const BLACKWELL_CENTER: Location =
    Location::new("Blackwell Center", "ChIJHww9wjPHxokR6VUZsRy25XE", 39.9655661, -75.2147225);
pub const HAMILTON_SCHOOL: Location =
    Location::new("Hamilton School", "ChIJNww8hMXGxokRvGvy72g0JfQ", 39.955224099999995, -75.2353354);
pub const PENTRIDGE_STATION: Location =
    Location::new("Pentridge Station", "ChIJectLYZXGxokROSLK9FIVdbk", 39.9455095, -75.2242489);
pub const LANIER_PLAYGROUND: Location =
    Location::new("Lanier Playground", "ChIJbfeERKXIxokRwfCFeGe7TuA", 39.9334144, -75.19376369999999);
pub const MCCALL_SCHOOL: Location =
    Location::new("McCall School", "ChIJXYg8l53IxokRJ3lXDA4yMlg", 39.9445741, -75.15257629999999);
pub const LA_COLOMBE: Location =
    Location::new("La Colombe", "ChIJL4OUUjfGxokRWbdDe02buok", 39.950756399999996, -75.1723193);
pub const EVERY_THAI: Location =
    Location::new("Every Thai", "ChIJ2dPgSaHHxokRgIdEOlVosSs", 39.920185499999995, -75.1604778);
pub const FRANKLIN_SQUARE: Location =
    Location::new("Franklin Square", "ChIJ1U-L54DIxokRcoW6JtzjcDM", 39.9556634, -75.1504502);
pub const CAMPBELL_SQUARE: Location =
    Location::new("Campbell Square", "ChIJH6So9NPJxokReIgxzWN0z2Y", 39.986363499999996, -75.10327149999999);
pub const BALBI_FOOD_MARKET: Location =
    Location::new("Balbi Food Market", "ChIJc5lclQLIxokRZB4fbUrBczM", 39.995711199999995, -75.14434899999999);
pub const MEDIATOR_LUTHERAN: Location =
    Location::new("Mediator Lutheran", "ChIJSSFcPfXHxokRX5o8AacIqq8", 39.9994607, -75.1765994);

pub const ERRAND_STOPS: &[&Location] = &[
    &BLACKWELL_CENTER,
    &HAMILTON_SCHOOL,
    &PENTRIDGE_STATION,
    &LANIER_PLAYGROUND,
    &MCCALL_SCHOOL,
    &LA_COLOMBE,
    &EVERY_THAI,
    &FRANKLIN_SQUARE,
    &CAMPBELL_SQUARE,
    &BALBI_FOOD_MARKET,
    &MEDIATOR_LUTHERAN,
];
