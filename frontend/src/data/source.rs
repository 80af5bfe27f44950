use rand::Rng;

/// A collection the dashboard renders. The mock sources generate their values
/// in the browser; a live feed can replace one without touching the views.
pub trait DataSource {
    type Item: Clone + PartialEq;

    fn list(&self) -> &[Self::Item];

    /// Regenerates the values. Sources without anything to re-roll keep their data.
    fn refresh<R: Rng + ?Sized>(&mut self, rng: &mut R);

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}
