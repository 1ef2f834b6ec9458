use crate::aspects::types::{AspectDefinition, AspectInstance, AspectTable};
use crate::chart::ChartPoint;

/// Aspect calculator
pub struct AspectCalculator {
    table: AspectTable,
}

impl AspectCalculator {
    /// Calculator using the standard aspect table
    pub fn new() -> Self {
        Self::with_table(AspectTable::standard().clone())
    }

    pub fn with_table(table: AspectTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &AspectTable {
        &self.table
    }

    /// Aspects between every unordered pair of distinct points.
    ///
    /// Pairs are visited in point order, so `first` is always the earlier
    /// point. Each pair yields at most one aspect: the first definition in
    /// table order whose band contains the separation.
    pub fn compute_aspects(&self, points: &[ChartPoint]) -> Vec<AspectInstance> {
        let mut aspects = Vec::new();
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let p1 = &points[i];
                let p2 = &points[j];
                if p1.name == p2.name {
                    continue;
                }

                if let Some((separation, def)) = self.calculate_aspect(p1.longitude, p2.longitude) {
                    aspects.push(AspectInstance {
                        first: p1.name.clone(),
                        second: p2.name.clone(),
                        angle: def.angle,
                        separation,
                        definition: def.clone(),
                    });
                }
            }
        }
        aspects
    }

    /// Classify the separation between two longitudes.
    ///
    /// The separation is `|lon1 - lon2| mod 360`; it is not folded onto
    /// [0, 180], so a pair straddling 0° Aries measures the long way round.
    pub fn calculate_aspect(&self, lon1: f64, lon2: f64) -> Option<(f64, &AspectDefinition)> {
        let separation = (lon1 - lon2).abs() % 360.0;
        self.table
            .classify(separation)
            .map(|def| (separation, def))
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Aspects over `points` using the standard table.
pub fn compute_aspects(points: &[ChartPoint]) -> Vec<AspectInstance> {
    AspectCalculator::new().compute_aspects(points)
}

/// The aspect joining `a` and `b`, whichever order they were recorded in.
pub fn find_aspect<'a>(aspects: &'a [AspectInstance], a: &str, b: &str) -> Option<&'a AspectInstance> {
    aspects.iter().find(|aspect| aspect.connects(a, b))
}
