use rand::Rng;

use super::source::DataSource;

/// How often the demo map re-rolls its probabilities, in ms.
pub const REFRESH_INTERVAL_MS: u32 = 3_000;

#[derive(Clone, Debug, PartialEq)]
pub struct Buoy {
    pub id: u32,
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    /// Percent, 0..100.
    pub whale_probability: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Elevated,
    High,
}

impl RiskLevel {
    pub fn from_probability(probability: u8) -> Self {
        match probability {
            70.. => RiskLevel::High,
            40.. => RiskLevel::Elevated,
            _ => RiskLevel::Low,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::High => "#ef4444",
            RiskLevel::Elevated => "#f59e0b",
            RiskLevel::Low => "#22c55e",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BuoySource {
    buoys: Vec<Buoy>,
}

impl Default for BuoySource {
    fn default() -> Self {
        let seed = [
            (1, "Buoy Alpha", 35.6, -75.3, 45),
            (2, "Buoy Beta", 42.3, -70.1, 62),
            (3, "Buoy Gamma", 38.9, -74.8, 28),
            (4, "Buoy Delta", 47.6, -122.3, 71),
            (5, "Buoy Epsilon", 36.8, -121.9, 53),
            (6, "Buoy Zeta", -33.9, 151.2, 89),
            (7, "Buoy Eta", 55.7, -6.2, 34),
            (8, "Buoy Theta", 64.1, -21.9, 76),
        ];
        Self {
            buoys: seed
                .into_iter()
                .map(|(id, name, lat, lng, whale_probability)| Buoy {
                    id,
                    name,
                    lat,
                    lng,
                    whale_probability,
                })
                .collect(),
        }
    }
}

impl DataSource for BuoySource {
    type Item = Buoy;

    fn list(&self) -> &[Buoy] {
        &self.buoys
    }

    fn refresh<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for buoy in &mut self.buoys {
            buoy.whale_probability = rng.gen_range(0..100);
        }
    }
}

/// Equirectangular projection onto a percentage box, for the CSS map.
pub fn project(lat: f64, lng: f64) -> (f64, f64) {
    let x = (lng + 180.0) / 360.0 * 100.0;
    let y = (90.0 - lat) / 180.0 * 100.0;
    (x.clamp(0.0, 100.0), y.clamp(0.0, 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn seeded_network_has_eight_buoys() {
        let source = BuoySource::default();
        assert_eq!(source.len(), 8);
        assert_eq!(source.list()[5].name, "Buoy Zeta");
        assert_eq!(source.list()[5].whale_probability, 89);
    }

    #[test]
    fn refresh_rerolls_within_range_and_keeps_positions() {
        let mut source = BuoySource::default();
        let before = source.clone();
        let mut rng = StdRng::seed_from_u64(7);
        source.refresh(&mut rng);
        for (old, new) in before.list().iter().zip(source.list()) {
            assert_eq!(old.id, new.id);
            assert_eq!(old.lat, new.lat);
            assert!(new.whale_probability < 100);
        }
    }

    #[test]
    fn refresh_is_reproducible_for_a_seed() {
        let mut a = BuoySource::default();
        let mut b = BuoySource::default();
        a.refresh(&mut StdRng::seed_from_u64(42));
        b.refresh(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn risk_bands() {
        assert_eq!(RiskLevel::from_probability(70), RiskLevel::High);
        assert_eq!(RiskLevel::from_probability(69), RiskLevel::Elevated);
        assert_eq!(RiskLevel::from_probability(40), RiskLevel::Elevated);
        assert_eq!(RiskLevel::from_probability(39), RiskLevel::Low);
        assert_eq!(RiskLevel::High.color(), "#ef4444");
    }

    #[test]
    fn projection_maps_corners() {
        assert_eq!(project(90.0, -180.0), (0.0, 0.0));
        assert_eq!(project(-90.0, 180.0), (100.0, 100.0));
        assert_eq!(project(0.0, 0.0), (50.0, 50.0));
    }
}
