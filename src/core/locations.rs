use super::types::LocationSuggestion;

pub const MAX_SUGGESTIONS: usize = 5;
pub const MIN_QUERY_CHARS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnownLocation {
    pub city: &'static str,
    pub pincode: &'static str,
    pub lat: f64,
    pub lng: f64,
}

const fn place(city: &'static str, pincode: &'static str, lat: f64, lng: f64) -> KnownLocation {
    KnownLocation {
        city,
        pincode,
        lat,
        lng,
    }
}

pub const MAHARASHTRA_LOCATIONS: &[KnownLocation] = &[
    place("Mumbai", "400001", 19.0760, 72.8777),
    place("Pune", "411001", 18.5204, 73.8567),
    place("Nagpur", "440001", 21.1458, 79.0882),
    place("Nashik", "422001", 19.9975, 73.7898),
    place("Aurangabad", "431001", 19.8762, 75.3433),
    place("Solapur", "413001", 17.6599, 75.9064),
    place("Kolhapur", "416001", 16.7050, 74.2433),
    place("Thane", "400601", 19.2183, 72.9781),
    place("Navi Mumbai", "400614", 19.0330, 73.0297),
    place("Kalyan", "421301", 19.2403, 73.1305),
    place("Vasai", "401201", 19.4612, 72.7989),
    place("Amravati", "444601", 20.9374, 77.7796),
    place("Akola", "444001", 20.7002, 77.0082),
    place("Latur", "413512", 18.4009, 76.5604),
    place("Sangli", "416416", 16.8524, 74.5815),
    place("Jalgaon", "425001", 21.0077, 75.5626),
    place("Ahmednagar", "414001", 19.0948, 74.7480),
    place("Chandrapur", "442401", 19.9615, 79.2961),
    place("Parbhani", "431401", 19.2608, 76.7811),
    place("Ichalkaranji", "416115", 16.6910, 74.4606),
    place("Jalna", "431203", 19.8449, 75.8814),
    place("Bhiwandi", "421302", 19.2969, 73.0583),
    place("Satara", "415001", 17.6805, 74.0183),
    place("Dhule", "424001", 20.9010, 74.7772),
    place("Wardha", "442001", 20.7453, 78.6022),
    place("Nanded", "431601", 19.1383, 77.3210),
    place("Yavatmal", "445001", 20.3897, 78.1215),
    place("Ratnagiri", "415612", 16.9902, 73.3120),
    place("Osmanabad", "413501", 18.1673, 76.0402),
    place("Beed", "431122", 18.9894, 75.7585),
];

impl KnownLocation {
    fn matches(&self, query: &str, query_lower: &str) -> bool {
        self.city.to_lowercase().contains(query_lower) || self.pincode.contains(query)
    }

    fn suggestion(&self) -> LocationSuggestion {
        LocationSuggestion {
            label: format!("{} - {}", self.city, self.pincode),
            value: self.pincode.to_string(),
            name: self.city.to_string(),
            lat: self.lat,
            lng: self.lng,
        }
    }
}

pub fn suggest(query: &str) -> Vec<LocationSuggestion> {
    if query.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }
    let query_lower = query.to_lowercase();
    MAHARASHTRA_LOCATIONS
        .iter()
        .filter(|loc| loc.matches(query, &query_lower))
        .take(MAX_SUGGESTIONS)
        .map(KnownLocation::suggestion)
        .collect()
}
