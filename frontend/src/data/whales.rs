use rand::Rng;

use super::source::DataSource;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WhaleStatus {
    Active,
    Migrating,
    Inactive,
}

impl WhaleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            WhaleStatus::Active => "active",
            WhaleStatus::Migrating => "migrating",
            WhaleStatus::Inactive => "inactive",
        }
    }

    pub fn dot_class(&self) -> &'static str {
        match self {
            WhaleStatus::Active => "dot-active",
            WhaleStatus::Migrating => "dot-migrating",
            WhaleStatus::Inactive => "dot-inactive",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WhaleSighting {
    pub id: &'static str,
    pub name: &'static str,
    pub species: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub last_seen: &'static str,
    pub status: WhaleStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WhaleFilter {
    #[default]
    All,
    Active,
    Migrating,
}

impl WhaleFilter {
    pub const ALL: [WhaleFilter; 3] = [WhaleFilter::All, WhaleFilter::Active, WhaleFilter::Migrating];

    pub fn matches(&self, status: WhaleStatus) -> bool {
        match self {
            WhaleFilter::All => true,
            WhaleFilter::Active => status == WhaleStatus::Active,
            WhaleFilter::Migrating => status == WhaleStatus::Migrating,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WhaleFilter::All => "All",
            WhaleFilter::Active => "Active",
            WhaleFilter::Migrating => "Migrating",
        }
    }
}

/// Position of the `index`-th visible marker on the mock map, in percent.
pub fn marker_position(index: usize) -> (usize, usize) {
    (15 + (index * 10) % 70, 20 + (index * 12) % 60)
}

#[derive(Clone, Debug, PartialEq)]
pub struct WhaleSource {
    sightings: Vec<WhaleSighting>,
}

impl Default for WhaleSource {
    fn default() -> Self {
        use WhaleStatus::*;
        fn sighting(
            id: &'static str,
            name: &'static str,
            species: &'static str,
            lat: f64,
            lng: f64,
            last_seen: &'static str,
            status: WhaleStatus,
        ) -> WhaleSighting {
            WhaleSighting {
                id,
                name,
                species,
                lat,
                lng,
                last_seen,
                status,
            }
        }
        Self {
            sightings: vec![
                sighting("1", "Luna", "Humpback", 34.0522, -118.2437, "2 min ago", Active),
                sighting("2", "Echo", "Blue Whale", 36.7783, -119.4179, "15 min ago", Active),
                sighting("3", "Storm", "Orca", 47.6062, -122.3321, "1 hr ago", Migrating),
                sighting("4", "Pearl", "Gray Whale", 32.7157, -117.1611, "3 min ago", Active),
                sighting("5", "Atlas", "Sperm Whale", 21.3069, -157.8583, "45 min ago", Migrating),
                sighting("6", "Coral", "Humpback", 37.7749, -122.4194, "5 min ago", Active),
                sighting("7", "Neptune", "Blue Whale", 33.4484, -112.0740, "2 days ago", Inactive),
                sighting("8", "Drift", "Orca", 48.4284, -123.3656, "30 min ago", Active),
            ],
        }
    }
}

impl WhaleSource {
    pub fn filtered(&self, filter: WhaleFilter) -> Vec<WhaleSighting> {
        self.sightings
            .iter()
            .filter(|w| filter.matches(w.status))
            .cloned()
            .collect()
    }

    pub fn count(&self, status: WhaleStatus) -> usize {
        self.sightings.iter().filter(|w| w.status == status).count()
    }

    pub fn find(&self, id: &str) -> Option<&WhaleSighting> {
        self.sightings.iter().find(|w| w.id == id)
    }
}

impl DataSource for WhaleSource {
    type Item = WhaleSighting;

    fn list(&self) -> &[WhaleSighting] {
        &self.sightings
    }

    // Sightings are a fixed snapshot.
    fn refresh<R: Rng + ?Sized>(&mut self, _rng: &mut R) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn filters_by_status() {
        let source = WhaleSource::default();
        assert_eq!(source.filtered(WhaleFilter::All).len(), 8);
        assert_eq!(source.filtered(WhaleFilter::Active).len(), 5);
        let migrating = source.filtered(WhaleFilter::Migrating);
        assert_eq!(migrating.len(), 2);
        assert!(migrating.iter().all(|w| w.status == WhaleStatus::Migrating));
    }

    #[test]
    fn inactive_whales_only_show_under_all() {
        let source = WhaleSource::default();
        assert!(!WhaleFilter::Active.matches(WhaleStatus::Inactive));
        assert!(!WhaleFilter::Migrating.matches(WhaleStatus::Inactive));
        assert!(source
            .filtered(WhaleFilter::All)
            .iter()
            .any(|w| w.name == "Neptune"));
    }

    #[test]
    fn counts_per_status() {
        let source = WhaleSource::default();
        assert_eq!(source.count(WhaleStatus::Active), 5);
        assert_eq!(source.count(WhaleStatus::Migrating), 2);
        assert_eq!(source.count(WhaleStatus::Inactive), 1);
    }

    #[test]
    fn marker_positions_wrap() {
        assert_eq!(marker_position(0), (15, 20));
        assert_eq!(marker_position(1), (25, 32));
        assert_eq!(marker_position(7), (15, 44));
    }

    #[test]
    fn refresh_keeps_snapshot() {
        let mut source = WhaleSource::default();
        let before = source.clone();
        source.refresh(&mut StdRng::seed_from_u64(1));
        assert_eq!(source, before);
        assert_eq!(source.find("3").map(|w| w.name), Some("Storm"));
    }
}
